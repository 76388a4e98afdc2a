use dioxus::prelude::*;

use crate::core::paths::OVERVIEWS_PATH;
use crate::t;

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div { class: "dashboard-card dashboard-card--empty",
            h2 { {t!("not-found-title")} }
            p { class: "muted", {t!("not-found-body")} }
            Link { class: "button button--primary", to: OVERVIEWS_PATH, {t!("back-to-overviews")} }
        }
    }
}
