use dioxus::prelude::*;

use super::{use_language_marker, LoadingCard};
use crate::core::fetch::client;
use crate::sections::SectionGrid;
use crate::t;

#[component]
pub fn OverviewsView() -> Element {
    let _lang = use_language_marker();
    let sections = use_resource(|| async move { client().sections().await });

    rsx! {
        section { class: "page page-overviews",
            div { class: "page__header",
                h1 { {t!("overviews-title")} }
                p { class: "muted", {t!("overviews-subtitle")} }
            }
            match &*sections.read_unchecked() {
                Some(list) => rsx! { SectionGrid { sections: list.clone() } },
                None => rsx! { LoadingCard {} },
            }
        }
    }
}
