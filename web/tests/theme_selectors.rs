//! Guards the shared theme against dropped selectors.
//!
//! Components in `ui` emit these class names directly; a missing rule shows up
//! as unstyled markup rather than a build error, so the theme is checked here
//! with plain substring matching.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".dashboard-card",
    ".dashboard-card--empty",
    // Breadcrumb
    ".breadcrumb__list",
    ".breadcrumb__link",
    ".breadcrumb__page",
    // Overview cards
    ".section-grid",
    ".section-card",
    ".section-card__insights",
    ".chip__dot",
    ".status-pill",
    ".score-gauge__ring",
    // Section page
    ".section-hero",
    ".conic-gauge",
    ".trend__bar--up",
    ".trend__bar--steady",
    ".trend__bar--down",
    ".insight-tile",
    // Insight page
    ".block-grid",
    ".recommendation",
    ".pager__button--disabled",
    // Charts
    ".visual-card",
    ".visual-card--compact",
    ".chart__canvas",
    ".chart__bar",
    ".chart__placeholder",
    // Status palette
    ".text-emerald-600",
    ".bg-amber-500",
    ".border-red-200",
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors in ui/assets/theme/main.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_styles_cover_locale_switcher() {
    for sel in [".navbar__inner", ".navbar__link--active", ".navbar__locale", ".visually-hidden"] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css lost {sel}");
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "theme looks truncated ({non_ws_len} non-whitespace chars)"
    );
}
