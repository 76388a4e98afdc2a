use dioxus::prelude::*;

use super::{use_language_marker, LoadingCard, NotFoundView};
use crate::core::fetch::client;
use crate::sections::{insight_neighbors, InsightDetailPanel};

#[component]
pub fn InsightView(section_id: String, insight_id: String) -> Element {
    let _lang = use_language_marker();
    let page = use_resource(use_reactive!(|(section_id, insight_id)| async move {
        let api = client();
        let (list, insight) = futures::join!(
            api.section_insights(&section_id),
            api.insight_data(&section_id, &insight_id)
        );
        insight.map(|insight| {
            let neighbors = insight_neighbors(&list, &insight_id);
            (insight, neighbors)
        })
    }));

    rsx! {
        section { class: "page page-insight",
            match &*page.read_unchecked() {
                Some(Some((insight, neighbors))) => rsx! {
                    InsightDetailPanel { insight: insight.clone(), neighbors: neighbors.clone() }
                },
                Some(None) => rsx! { NotFoundView {} },
                None => rsx! { LoadingCard {} },
            }
        }
    }
}
