use dioxus::prelude::*;

use crate::t;

/// Display names for path segments that should not be title-cased mechanically.
const KNOWN_SEGMENTS: &[(&str, &str)] = &[
    ("dashboard", "Dashboard"),
    ("overviews", "Overviews"),
    ("reports", "Reports"),
    ("diagnostics", "Diagnostics"),
    ("strategy-in-action", "Strategy in Action"),
    ("execution-habits", "Execution Habits & Ownership"),
    ("clarity", "Clarity"),
    ("alignment", "Alignment"),
    ("focus", "Focus"),
    ("meeting-drag", "Meeting Drag"),
    ("accountability", "Accountability"),
    ("decision-speed", "Decision Speed"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub path: String,
    pub label: String,
    pub is_last: bool,
}

/// `meeting-drag` -> `Meeting Drag`.
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn segment_label(segment: &str) -> String {
    KNOWN_SEGMENTS
        .iter()
        .find(|(slug, _)| *slug == segment)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| slug_to_title(segment))
}

/// Crumbs for every path segment except the `insights` connector.
pub fn breadcrumbs(pathname: &str) -> Vec<Crumb> {
    let path_only = pathname.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path_only.split('/').filter(|s| !s.is_empty()).collect();
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .filter(|(_, segment)| **segment != "insights")
        .map(|(idx, segment)| Crumb {
            path: format!("/{}", segments[..=idx].join("/")),
            label: segment_label(segment),
            is_last: idx == last,
        })
        .collect()
}

#[component]
pub fn DashboardBreadcrumb(pathname: String) -> Element {
    let crumbs = breadcrumbs(&pathname);

    rsx! {
        nav { class: "breadcrumb", aria_label: "breadcrumb",
            ol { class: "breadcrumb__list",
                li { class: "breadcrumb__item",
                    Link { class: "breadcrumb__link", to: "/", "⌂" span { class: "sr-only", {t!("nav-home")} } }
                }
                for crumb in crumbs {
                    li { key: "{crumb.path}", class: "breadcrumb__item",
                        span { class: "breadcrumb__separator", aria_hidden: "true", "›" }
                        if crumb.is_last {
                            span { class: "breadcrumb__page", aria_current: "page", "{crumb.label}" }
                        } else {
                            Link { class: "breadcrumb__link", to: crumb.path.clone(), "{crumb.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insight_path_hides_the_connector_segment() {
        let crumbs = breadcrumbs("/dashboard/overviews/execution-habits/insights/meeting-drag");
        let labels: Vec<&str> = crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Dashboard",
                "Overviews",
                "Execution Habits & Ownership",
                "Meeting Drag"
            ]
        );
        let last = crumbs.last().expect("crumb");
        assert!(last.is_last);
        assert_eq!(
            last.path,
            "/dashboard/overviews/execution-habits/insights/meeting-drag"
        );
        assert!(!crumbs[2].is_last);
    }

    #[test]
    fn unknown_slugs_are_title_cased() {
        assert_eq!(segment_label("team-health-pulse"), "Team Health Pulse");
        assert_eq!(slug_to_title(""), "");
    }

    #[test]
    fn query_strings_are_ignored() {
        let crumbs = breadcrumbs("/dashboard/overviews?tab=all");
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[1].path, "/dashboard/overviews");
    }

    #[test]
    fn root_has_no_crumbs() {
        assert!(breadcrumbs("/").is_empty());
    }
}
