use dioxus::prelude::*;

use super::{use_language_marker, LoadingCard, NotFoundView};
use crate::core::fetch::client;
use crate::sections::SectionDetail;

#[component]
pub fn SectionView(section_id: String) -> Element {
    let _lang = use_language_marker();
    let section = use_resource(use_reactive!(|(section_id,)| async move {
        client().section_data(&section_id).await
    }));

    rsx! {
        section { class: "page page-section",
            match &*section.read_unchecked() {
                Some(Some(data)) => rsx! { SectionDetail { section: data.clone() } },
                Some(None) => rsx! { NotFoundView {} },
                None => rsx! { LoadingCard {} },
            }
        }
    }
}
