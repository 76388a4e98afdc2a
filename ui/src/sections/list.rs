use api::model::{SectionOverview, Status};
use dioxus::prelude::*;

use super::utils::{gauge_dasharray, insight_chips, overview_delta_label};
use crate::core::{paths, status};
use crate::t;

const GAUGE_ARC: &str =
    "M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831";

#[component]
pub fn SectionGrid(sections: Vec<SectionOverview>) -> Element {
    if sections.is_empty() {
        return rsx! {
            div { class: "dashboard-card dashboard-card--empty",
                h3 { {t!("overviews-empty-title")} }
                p { {t!("overviews-empty-body")} }
            }
        };
    }

    rsx! {
        div { class: "section-grid",
            for section in sections {
                SectionCard { key: "{section.section_id}", section }
            }
        }
    }
}

#[component]
pub fn SectionCard(section: SectionOverview) -> Element {
    let positive = section.comparison.value >= 0;
    let delta = overview_delta_label(section.comparison.value);
    let (chips, more) = insight_chips(&section.insights);
    let chips = chips.to_vec();
    let insight_count = section.insights.len();
    let href = paths::section_path(&section.section_id);

    rsx! {
        Link { class: "section-card", to: href,
            div { class: "section-card__top",
                div { class: "section-card__summary",
                    span { class: "status-pill {status::status_bg_class(section.status)} {status::status_text_class(section.status)}",
                        "{section.status}"
                    }
                    h3 { class: "section-card__title", "{section.section_title}" }
                    div { class: "section-card__comparison",
                        span { class: status::polarity_text_class(positive),
                            if positive { "▲ " } else { "▼ " }
                            "{delta}"
                        }
                        span { class: "muted", "{section.comparison.label}" }
                    }
                    p { class: "muted",
                        {t!("benchmark-label", score = section.benchmark_score)}
                    }
                }
                div { class: "section-card__gauge",
                    ScoreGauge { score: section.main_score, status: section.status }
                    span { class: "muted", {t!("score-label")} }
                }
            }

            if insight_count > 0 {
                div { class: "section-card__insights",
                    p { class: "section-card__insights-count",
                        {t!("insights-count", count = insight_count)}
                    }
                    div { class: "chip-row",
                        for insight in chips {
                            span { key: "{insight.id}", class: "chip {status::status_bg_class(insight.status)}",
                                span { class: "chip__dot {status::status_dot_class(insight.status)}" }
                                "{insight.title}"
                            }
                        }
                        if more > 0 {
                            span { class: "muted", {t!("more-insights", count = more)} }
                        }
                    }
                }
            }

            div { class: "section-card__cta", {t!("view-details")} " →" }
        }
    }
}

/// Circular score ring drawn on a 36x36 viewBox with circumference 100.
#[component]
pub fn ScoreGauge(score: i32, status: Status) -> Element {
    let dash = gauge_dasharray(score);
    let color = status::status_ring_color(status);

    rsx! {
        div { class: "score-gauge",
            svg { class: "score-gauge__ring", view_box: "0 0 36 36",
                path { class: "score-gauge__track", stroke_width: "3", fill: "none", d: GAUGE_ARC }
                path {
                    stroke: "{color}",
                    stroke_width: "3",
                    stroke_linecap: "round",
                    fill: "none",
                    stroke_dasharray: "{dash}",
                    d: GAUGE_ARC,
                }
            }
            span { class: "score-gauge__value {status::status_text_class(status)}", "{score}" }
        }
    }
}
