use crate::i18n;
use crate::t;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Link constructors supplied by the platform crate.
///
/// `ui` has no access to the platform's `Route` enum, so the web crate registers
/// closures that wrap a localized label in a typed `Link`. Without a builder the
/// navbar falls back to whatever `children` it was given.
///
/// ```ignore
/// register_nav(NavBuilder {
///     overviews: |label| rsx!( Link { class: "navbar__link", to: Route::Overviews {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub overviews: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| i18n::DEFAULT_LANGUAGE.to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Platform-provided language signal; reading it here re-renders on switch.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!("language switch to {val} failed: {err}"),
        }
    };

    let overviews_label = t!("nav-overviews");
    let internal_nav = NAV_BUILDER.get().map(|b| (b.overviews)(&overviews_label));

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "FastTrack" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                if let Some(links) = internal_nav {
                    nav { class: "navbar__links", {links} }
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label { class: "visually-hidden", r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
