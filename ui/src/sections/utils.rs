use api::convert::{METRIC_BENCHMARK, METRIC_GAP, METRIC_SECTION_SCORE};
use api::dto::InsightData;
use api::model::{ChartKind, ComparisonUnit, InsightSummary, Status, Visual};

use crate::core::{format::format_signed, status::status_ring_color};

/// Overview cards show at most this many insight chips.
pub(crate) const MAX_INSIGHT_CHIPS: usize = 4;

/// Trend bars never render shorter than this share of the strip.
pub(crate) const MIN_TREND_HEIGHT_PCT: f64 = 24.0;

/// Labels shown with a dash when an insight carries no metrics.
pub(crate) const PLACEHOLDER_METRICS: [&str; 3] =
    [METRIC_SECTION_SCORE, METRIC_BENCHMARK, METRIC_GAP];

pub(crate) const PLACEHOLDER_VALUE: &str = "—";

pub(crate) fn insight_chips(insights: &[InsightSummary]) -> (&[InsightSummary], usize) {
    let shown = insights.len().min(MAX_INSIGHT_CHIPS);
    (&insights[..shown], insights.len() - shown)
}

/// `stroke-dasharray` for the circular overview gauge (circumference 100).
pub(crate) fn gauge_dasharray(score: i32) -> String {
    format!("{}, 100", score.clamp(0, 100))
}

pub(crate) fn gauge_sweep_degrees(score: i32) -> f64 {
    f64::from(score) * 3.6
}

pub(crate) fn conic_gauge_style(status: Status, score: i32) -> String {
    format!(
        "background: conic-gradient({} {:.1}deg, rgba(0,0,0,0.06) 0deg)",
        status_ring_color(status),
        gauge_sweep_degrees(score)
    )
}

pub(crate) fn unit_suffix(unit: Option<ComparisonUnit>) -> &'static str {
    unit.map(ComparisonUnit::display_suffix).unwrap_or_default()
}

/// `+4 pp` style delta used on overview cards.
pub(crate) fn overview_delta_label(value: i32) -> String {
    format!("{} pp", format_signed(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrendTone {
    Baseline,
    Up,
    Steady,
    Down,
}

impl TrendTone {
    pub(crate) fn class(self) -> &'static str {
        match self {
            TrendTone::Baseline => "trend__bar--baseline",
            TrendTone::Up => "trend__bar--up",
            TrendTone::Steady => "trend__bar--steady",
            TrendTone::Down => "trend__bar--down",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrendBar {
    pub value: i32,
    pub height_pct: f64,
    pub tone: TrendTone,
}

pub(crate) fn trend_bars(trend: &[i32]) -> Vec<TrendBar> {
    let max = f64::from(trend.iter().copied().max().unwrap_or(1).max(1));
    trend
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let tone = match idx.checked_sub(1).map(|prev| trend[prev]) {
                None => TrendTone::Baseline,
                Some(prev) if value > prev => TrendTone::Up,
                Some(prev) if prev - value < 5 => TrendTone::Steady,
                Some(_) => TrendTone::Down,
            };
            TrendBar {
                value,
                height_pct: (f64::from(value) / max * 100.0).max(MIN_TREND_HEIGHT_PCT),
                tone,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightNeighbors {
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Previous/next insight ids around `current_id`; none when it is not listed.
pub(crate) fn insight_neighbors(list: &[InsightData], current_id: &str) -> InsightNeighbors {
    let Some(idx) = list.iter().position(|item| item.id == current_id) else {
        return InsightNeighbors::default();
    };
    InsightNeighbors {
        prev: idx
            .checked_sub(1)
            .and_then(|i| list.get(i))
            .map(|item| item.id.clone()),
        next: list.get(idx + 1).map(|item| item.id.clone()),
    }
}

/// First bar-type block visual, or the insight's main visual.
pub(crate) fn block_distribution_visual(insight: &InsightData) -> Option<Visual> {
    insight
        .blocks
        .iter()
        .map(|block| &block.mini_visual)
        .find(|visual| visual.kind == ChartKind::Bar)
        .or(insight.main_visual.as_ref())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::data::DiagnosticsStore;
    use api::model::{InsightBlock, SeriesPoint};

    fn summary(id: &str) -> InsightSummary {
        InsightSummary {
            id: id.to_string(),
            title: id.to_uppercase(),
            score: 50,
            status: Status::Average,
            description: None,
        }
    }

    fn insight(id: &str) -> InsightData {
        InsightData {
            id: id.to_string(),
            section_id: "s".to_string(),
            section_title: "S".to_string(),
            title: id.to_string(),
            description: String::new(),
            details: String::new(),
            blocks: Vec::new(),
            main_visual: None,
            meta: None,
            metrics: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn chips_cap_at_four_and_count_the_rest() {
        let many: Vec<_> = ["a", "b", "c", "d", "e", "f"].map(summary).into();
        let (shown, more) = insight_chips(&many);
        assert_eq!(shown.len(), 4);
        assert_eq!(more, 2);

        let few = vec![summary("a")];
        assert_eq!(insight_chips(&few).1, 0);
    }

    #[test]
    fn trend_tones_follow_the_previous_value() {
        let bars = trend_bars(&[58, 62, 60, 54, 63]);
        let tones: Vec<_> = bars.iter().map(|b| b.tone).collect();
        assert_eq!(
            tones,
            [
                TrendTone::Baseline,
                TrendTone::Up,
                TrendTone::Steady,
                TrendTone::Down,
                TrendTone::Up
            ]
        );
        assert_eq!(bars[4].height_pct, 100.0);
    }

    #[test]
    fn trend_heights_have_a_floor() {
        let bars = trend_bars(&[1, 100]);
        assert_eq!(bars[0].height_pct, MIN_TREND_HEIGHT_PCT);
        assert!(trend_bars(&[]).is_empty());
    }

    #[test]
    fn gauge_sweep_scales_to_full_circle() {
        assert_eq!(gauge_sweep_degrees(100), 360.0);
        assert_eq!(gauge_dasharray(63), "63, 100");
        assert!(conic_gauge_style(Status::Average, 50).contains("#f59e0b 180.0deg"));
    }

    #[test]
    fn neighbors_at_the_edges() {
        let list = vec![insight("a"), insight("b"), insight("c")];
        assert_eq!(
            insight_neighbors(&list, "a"),
            InsightNeighbors {
                prev: None,
                next: Some("b".into())
            }
        );
        assert_eq!(
            insight_neighbors(&list, "b"),
            InsightNeighbors {
                prev: Some("a".into()),
                next: Some("c".into())
            }
        );
        assert_eq!(insight_neighbors(&list, "c").next, None);
        assert_eq!(insight_neighbors(&list, "zzz"), InsightNeighbors::default());
    }

    #[test]
    fn distribution_prefers_bar_blocks() {
        let main = Visual::points(ChartKind::Sparkline, vec![1.0, 2.0], Vec::new());
        let bar = Visual::series(ChartKind::Bar, vec![SeriesPoint::new("A", 3.0)]);

        let mut data = insight("x");
        data.main_visual = Some(main.clone());
        assert_eq!(block_distribution_visual(&data), Some(main.clone()));

        data.blocks.push(InsightBlock {
            id: "b1".into(),
            title: "Block".into(),
            text: String::new(),
            mini_visual: main.clone(),
        });
        data.blocks.push(InsightBlock {
            id: "b2".into(),
            title: "Block".into(),
            text: String::new(),
            mini_visual: bar.clone(),
        });
        assert_eq!(block_distribution_visual(&data), Some(bar));
    }

    #[test]
    fn seeded_sections_render_overview_deltas() {
        let store = DiagnosticsStore::seeded();
        let strategy = store.section("strategy-in-action").expect("seeded section");
        assert_eq!(overview_delta_label(strategy.comparison.value), "-8 pp");
        assert_eq!(unit_suffix(Some(strategy.comparison.unit)), "%");
        assert_eq!(unit_suffix(None), "");
    }
}
