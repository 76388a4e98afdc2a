//! Pure layout math for bar and sparkline charts.

use api::model::{ChartKind, SeriesPoint, Visual};

use super::extract::extract_points;
use crate::core::format::format_coord;

pub const CANVAS_WIDTH: f64 = 320.0;
pub const CANVAS_HEIGHT: f64 = 160.0;
pub const CANVAS_HEIGHT_COMPACT: f64 = 120.0;
pub const CANVAS_PADDING: f64 = 12.0;

/// Bars never shrink below this share of the track so tiny values stay visible.
pub const MIN_BAR_HEIGHT_PCT: f64 = 4.0;

pub const MARKER_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub height_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub max: f64,
    pub bars: Vec<Bar>,
}

pub fn bar_geometry(points: &[SeriesPoint]) -> BarGeometry {
    let max = points.iter().map(|p| p.value).fold(1.0_f64, f64::max);
    let bars = points
        .iter()
        .map(|p| Bar {
            label: p.label.clone(),
            value: p.value,
            height_pct: (p.value / max * 100.0).max(MIN_BAR_HEIGHT_PCT),
        })
        .collect();
    BarGeometry { max, bars }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Canvas {
    pub fn new(compact: bool) -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: if compact {
                CANVAS_HEIGHT_COMPACT
            } else {
                CANVAS_HEIGHT
            },
            padding: CANVAS_PADDING,
        }
    }

    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SparklineGeometry {
    pub canvas: Canvas,
    pub points: Vec<PlotPoint>,
    pub line_path: String,
    /// Filled region under the line; absent for a single point.
    pub area_path: Option<String>,
}

pub fn sparkline_geometry(points: &[SeriesPoint], compact: bool) -> Option<SparklineGeometry> {
    if points.is_empty() {
        return None;
    }

    let canvas = Canvas::new(compact);
    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let inner_width = canvas.width - 2.0 * canvas.padding;
    let inner_height = canvas.height - 2.0 * canvas.padding;
    let step = if points.len() > 1 {
        inner_width / (points.len() - 1) as f64
    } else {
        0.0
    };

    let plotted: Vec<PlotPoint> = points
        .iter()
        .enumerate()
        .map(|(idx, p)| PlotPoint {
            label: p.label.clone(),
            value: p.value,
            x: canvas.padding + idx as f64 * step,
            y: canvas.height - canvas.padding - ((p.value - min) / range) * inner_height,
        })
        .collect();

    let line_path = plotted
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let cmd = if idx == 0 { 'M' } else { 'L' };
            format!("{cmd} {} {}", format_coord(p.x), format_coord(p.y))
        })
        .collect::<Vec<_>>()
        .join(" ");

    let area_path = match (plotted.first(), plotted.last()) {
        (Some(first), Some(last)) if plotted.len() > 1 => {
            let baseline = format_coord(canvas.baseline());
            let mut path = format!("M {} {baseline}", format_coord(first.x));
            for p in &plotted {
                path.push_str(&format!(" L {} {}", format_coord(p.x), format_coord(p.y)));
            }
            path.push_str(&format!(" L {} {baseline} Z", format_coord(last.x)));
            Some(path)
        }
        _ => None,
    };

    Some(SparklineGeometry {
        canvas,
        points: plotted,
        line_path,
        area_path,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartGeometry {
    Empty,
    Bar(BarGeometry),
    Sparkline(SparklineGeometry),
}

/// Extract, classify and lay out a visual in one step.
pub fn layout(visual: &Visual, compact: bool) -> ChartGeometry {
    let points = extract_points(Some(visual));
    if points.is_empty() {
        return ChartGeometry::Empty;
    }
    match visual.kind {
        ChartKind::Bar => ChartGeometry::Bar(bar_geometry(&points)),
        ChartKind::Sparkline => sparkline_geometry(&points, compact)
            .map(ChartGeometry::Sparkline)
            .unwrap_or(ChartGeometry::Empty),
    }
}
