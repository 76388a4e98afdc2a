use api::dto::SectionData;
use dioxus::prelude::*;

use super::utils::{conic_gauge_style, trend_bars, unit_suffix, PLACEHOLDER_VALUE};
use crate::core::{
    format::{format_coord, format_signed},
    paths, status,
};
use crate::t;

#[component]
pub fn SectionDetail(section: SectionData) -> Element {
    let unit = unit_suffix(section.comparison.unit);
    let delta = format!("{}{unit}", format_signed(section.comparison.delta));
    let positive = section.comparison.is_positive;
    let gauge_style = conic_gauge_style(section.status, section.main_score);
    let last_analysis = section
        .stats
        .as_ref()
        .and_then(|stats| stats.last_analysis.clone())
        .unwrap_or_else(|| PLACEHOLDER_VALUE.to_string());
    let bars = trend_bars(&section.trend);
    let first_insight = section
        .insights
        .first()
        .map(|insight| paths::insight_path(&section.id, &insight.id));

    rsx! {
        div { class: "page-stack",
            div { class: "section-hero",
                div { class: "section-hero__intro",
                    span { class: "eyebrow", {t!("section-overview-eyebrow")} }
                    h1 { "{section.section_title}" }
                    p { class: "muted", "{section.description}" }
                    div { class: "section-hero__facts muted",
                        span { {t!("last-analysis", when = last_analysis)} }
                        span { {t!("benchmark-label", score = format!("{}{unit}", section.benchmark_score))} }
                    }
                }

                div { class: "section-hero__score",
                    div { class: "conic-gauge", style: "{gauge_style}",
                        div { class: "conic-gauge__inner",
                            p { class: "muted", {t!("score-label")} }
                            p { class: "conic-gauge__value", "{section.main_score}%" }
                        }
                    }
                    span { class: "status-pill {status::status_badge_classes(section.status)}",
                        span { class: "chip__dot {status::status_dot_class(section.status)}" }
                        "{section.status}"
                    }
                    div { class: "section-hero__comparison",
                        span { class: status::polarity_text_class(positive), "{delta}" }
                        span { class: "muted", "{section.comparison.label}" }
                    }
                }
            }

            div { class: "metric-grid",
                div { class: "dashboard-card",
                    p { class: "muted", {t!("available-insights")} }
                    p { class: "metric-value", "{section.insights.len()}" }
                }
                div { class: "dashboard-card",
                    p { class: "muted", {t!("benchmark-title")} }
                    p { class: "metric-value", "{section.benchmark_score}{unit}" }
                }
                div { class: "dashboard-card",
                    p { class: "muted", {t!("trend-title")} }
                    div { class: "trend",
                        for bar in bars {
                            div {
                                class: "trend__bar {bar.tone.class()}",
                                style: "height: {format_coord(bar.height_pct)}%",
                                "{bar.value}"
                            }
                        }
                    }
                }
            }

            div { class: "page-stack",
                div { class: "section-heading",
                    h2 { {t!("deep-dive-insights")} }
                    if let Some(href) = first_insight {
                        Link { class: "ghost-link", to: href, {t!("view-first-insight")} " →" }
                    }
                }
                if section.insights.is_empty() {
                    div { class: "dashboard-card dashboard-card--empty", p { {t!("no-insights")} } }
                } else {
                    div { class: "insight-grid",
                        for insight in section.insights.iter() {
                            Link {
                                key: "{insight.id}",
                                class: "insight-tile",
                                to: paths::insight_path(&section.id, &insight.id),
                                h3 { "{insight.title}" }
                                p { class: "muted", "{insight.description}" }
                                span { class: "insight-tile__cta", {t!("view-insight")} " →" }
                            }
                        }
                    }
                }
            }
        }
    }
}
