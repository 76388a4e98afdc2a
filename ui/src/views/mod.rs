//! Routed pages. Each page owns its data loading and renders a panel from
//! [`crate::sections`] once the fetch settles.

use dioxus::prelude::*;

mod insight;
mod not_found;
mod overviews;
mod section;

pub use insight::InsightView;
pub use not_found::NotFoundView;
pub use overviews::OverviewsView;
pub use section::SectionView;

/// Subscribe to the platform's language signal so localized text refreshes on switch.
fn use_language_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}

#[component]
fn LoadingCard() -> Element {
    rsx! {
        div { class: "dashboard-card dashboard-card--loading", aria_busy: "true",
            p { class: "muted", {crate::t!("loading")} }
        }
    }
}
