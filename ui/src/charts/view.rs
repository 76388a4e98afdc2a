use api::model::Visual;
use dioxus::prelude::*;

use super::geometry::{layout, BarGeometry, ChartGeometry, SparklineGeometry, MARKER_RADIUS};
use crate::core::format::{format_coord, format_value};

#[component]
pub fn ChartRenderer(visual: Visual, #[props(default)] compact: bool) -> Element {
    match layout(&visual, compact) {
        ChartGeometry::Empty => rsx! {
            p { class: "chart__placeholder", "No data available." }
        },
        ChartGeometry::Bar(geometry) => rsx! { BarChart { geometry, compact } },
        ChartGeometry::Sparkline(geometry) => rsx! { SparklineChart { geometry } },
    }
}

#[component]
pub fn SparklineChart(geometry: SparklineGeometry) -> Element {
    let view_box = geometry.canvas.view_box();
    let markers: Vec<(String, String)> = geometry
        .points
        .iter()
        .map(|p| (format_coord(p.x), format_coord(p.y)))
        .collect();

    rsx! {
        div { class: "chart chart--sparkline",
            svg {
                view_box: "{view_box}",
                class: "chart__canvas",
                role: "presentation",
                "aria-hidden": "true",
                defs {
                    linearGradient { id: "sparklineGradient", x1: "0%", y1: "0%", x2: "0%", y2: "100%",
                        stop { offset: "0%", stop_color: "currentColor", stop_opacity: "0.25" }
                        stop { offset: "100%", stop_color: "currentColor", stop_opacity: "0.05" }
                    }
                }
                path {
                    d: "{geometry.line_path}",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2.5",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                }
                if let Some(area) = geometry.area_path.as_ref() {
                    path { d: "{area}", fill: "url(#sparklineGradient)", stroke: "none", opacity: "0.7" }
                }
                for (cx, cy) in markers {
                    circle { cx: "{cx}", cy: "{cy}", r: "{MARKER_RADIUS}", fill: "currentColor" }
                }
            }
            div { class: "chart__labels",
                for point in geometry.points.iter() {
                    div { class: "chart__label",
                        span { class: "chart__value-pill", "{format_value(point.value)}" }
                        span { "{point.label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BarChart(geometry: BarGeometry, #[props(default)] compact: bool) -> Element {
    let max_label = format_value(geometry.max);

    rsx! {
        div { class: "chart chart--bar",
            div { class: "chart__bars",
                for bar in geometry.bars.iter() {
                    div { class: "chart__bar-slot",
                        div {
                            class: "chart__bar",
                            style: "height: {format_coord(bar.height_pct)}%",
                            span { class: "chart__bar-value", "{format_value(bar.value)}" }
                        }
                        p { class: "chart__bar-label", "{bar.label}" }
                    }
                }
            }
            if !compact {
                div { class: "chart__axis",
                    span { "0" }
                    span { "{max_label}" }
                }
            }
        }
    }
}

/// Titled card wrapping a chart, with the visual type shown as a tag.
#[component]
pub fn VisualCard(
    title: String,
    #[props(!optional)] visual: Option<Visual>,
    #[props(default)] subtitle: String,
    #[props(default)] description: String,
    #[props(default)] compact: bool,
) -> Element {
    let kind = visual
        .as_ref()
        .map(|v| v.kind.as_str().to_uppercase())
        .unwrap_or_else(|| "-".to_string());
    let card_class = if compact {
        "visual-card visual-card--compact"
    } else {
        "visual-card"
    };

    rsx! {
        div { class: "{card_class}",
            div { class: "visual-card__header",
                div {
                    if !subtitle.is_empty() {
                        p { class: "visual-card__subtitle", "{subtitle}" }
                    }
                    h3 { class: "visual-card__title", "{title}" }
                }
                span { class: "visual-card__kind", "{kind}" }
            }
            div { class: "visual-card__body",
                if let Some(visual) = visual {
                    ChartRenderer { visual, compact }
                } else {
                    p { class: "chart__placeholder", "No visual provided." }
                }
                if !description.is_empty() {
                    p { class: "visual-card__description", "{description}" }
                }
            }
        }
    }
}
