use api::dto::{InsightData, MetricIcon};
use dioxus::prelude::*;

use super::utils::{
    block_distribution_visual, InsightNeighbors, PLACEHOLDER_METRICS, PLACEHOLDER_VALUE,
};
use crate::charts::VisualCard;
use crate::core::paths;
use crate::t;

#[component]
pub fn InsightDetailPanel(insight: InsightData, neighbors: InsightNeighbors) -> Element {
    let back_href = paths::section_path(&insight.section_id);
    let distribution = block_distribution_visual(&insight);
    let prev_href = neighbors
        .prev
        .as_deref()
        .map(|id| paths::insight_path(&insight.section_id, id));
    let next_href = neighbors
        .next
        .as_deref()
        .map(|id| paths::insight_path(&insight.section_id, id));

    rsx! {
        div { class: "page-stack",
            Link { class: "ghost-link", to: back_href,
                "← " {t!("back-to", title = insight.section_title.clone())}
            }

            div { class: "insight-header",
                p { class: "muted", "{insight.section_title}" }
                h1 { "{insight.title}" }
                p { class: "muted", "{insight.description}" }
            }

            div { class: "metric-grid",
                if insight.metrics.is_empty() {
                    for label in PLACEHOLDER_METRICS {
                        div { class: "dashboard-card",
                            p { class: "muted", "{label}" }
                            p { class: "metric-value", "{PLACEHOLDER_VALUE}" }
                        }
                    }
                } else {
                    for metric in insight.metrics.iter() {
                        div { class: "dashboard-card",
                            p { class: "muted",
                                span { class: "metric-icon", "{metric_glyph(metric.icon)}" }
                                "{metric.label}"
                            }
                            p { class: "metric-value {metric.color.as_deref().unwrap_or_default()}",
                                "{metric.value}"
                            }
                            if let Some(subtext) = metric.subtext.as_ref() {
                                p { class: "muted small", "{subtext}" }
                            }
                        }
                    }
                }
            }

            div { class: "dashboard-card",
                h2 { {t!("about-insight")} }
                p { class: "muted", "{insight.details}" }
            }

            if !insight.blocks.is_empty() {
                div { class: "page-stack",
                    h2 { {t!("signals-title")} }
                    div { class: "block-grid",
                        for block in insight.blocks.iter() {
                            div { key: "{block.id}", class: "dashboard-card block-card",
                                div { class: "block-card__header",
                                    h3 { "{block.title}" }
                                    span { class: "muted small", "{block.mini_visual.kind.as_str()}" }
                                }
                                p { class: "muted", "{block.text}" }
                                VisualCard {
                                    title: t!("mini-visual-title"),
                                    visual: Some(block.mini_visual.clone()),
                                    description: t!("mini-visual-description"),
                                    compact: true,
                                }
                            }
                        }
                    }
                }
            }

            div { class: "block-grid",
                VisualCard {
                    title: t!("main-visual-title"),
                    subtitle: t!("main-visual-subtitle"),
                    visual: insight.main_visual.clone(),
                    description: t!("main-visual-description"),
                }
                VisualCard {
                    title: t!("distribution-title"),
                    subtitle: t!("distribution-subtitle"),
                    visual: distribution,
                    description: t!("distribution-description"),
                }
            }

            div { class: "dashboard-card",
                h2 { {t!("recommendations-title")} }
                if insight.recommendations.is_empty() {
                    p { class: "muted", {t!("no-recommendations")} }
                } else {
                    for rec in insight.recommendations.iter() {
                        div { key: "{rec.id}", class: "recommendation",
                            span { class: "recommendation__index", "{rec.id}" }
                            p { "{rec.text}" }
                        }
                    }
                }
            }

            div { class: "pager",
                PagerLink { href: prev_href, label: t!("pager-previous") }
                PagerLink { href: next_href, label: t!("pager-next") }
            }
        }
    }
}

#[component]
fn PagerLink(href: Option<String>, label: String) -> Element {
    match href {
        Some(href) => rsx! {
            Link { class: "pager__button", to: href, "{label}" }
        },
        None => rsx! {
            span { class: "pager__button pager__button--disabled", aria_disabled: "true", "{label}" }
        },
    }
}

fn metric_glyph(icon: Option<MetricIcon>) -> &'static str {
    match icon {
        Some(MetricIcon::Chart) => "▥",
        Some(MetricIcon::Trend) => "↗",
        None => "",
    }
}
