//! Built-in diagnostic survey data and the read-only store that serves it.

use crate::model::{
    ChartKind, ComparisonMetric, ComparisonUnit, InsightBlock, InsightDetail, InsightMeta,
    InsightSummary, InsightsResponse, OverviewResponse, ScoreThreshold, ScoreVisual,
    ScoreVisualKind, SectionOverview, SectionStats, SeriesPoint, Status, Visual,
};

pub const STRATEGY_SECTION_ID: &str = "strategy-in-action";
pub const EXECUTION_SECTION_ID: &str = "execution-habits";

/// Section served by `/insights` when the requested id is absent or unknown.
pub const DEFAULT_INSIGHTS_SECTION_ID: &str = STRATEGY_SECTION_ID;

/// Immutable snapshot of everything the API can serve.
#[derive(Debug, Clone)]
pub struct DiagnosticsStore {
    overview: OverviewResponse,
    insight_sets: Vec<InsightsResponse>,
}

impl DiagnosticsStore {
    pub fn new(overview: OverviewResponse, insight_sets: Vec<InsightsResponse>) -> Self {
        Self {
            overview,
            insight_sets,
        }
    }

    /// Store populated with the built-in survey data.
    pub fn seeded() -> Self {
        Self::new(
            overview_data(),
            vec![strategy_insights(), execution_insights()],
        )
    }

    pub fn overview(&self) -> &OverviewResponse {
        &self.overview
    }

    pub fn section(&self, section_id: &str) -> Option<&SectionOverview> {
        self.overview
            .sections
            .iter()
            .find(|section| section.section_id == section_id)
    }

    pub fn insights_for(&self, section_id: &str) -> Option<&InsightsResponse> {
        self.insight_sets
            .iter()
            .find(|set| set.section_id == section_id)
    }

    /// Insight set for `section_id`, falling back to the default section for
    /// missing, empty or unknown ids. `None` only if the store has no insight sets.
    pub fn insights_or_default(&self, section_id: Option<&str>) -> Option<&InsightsResponse> {
        section_id
            .filter(|id| !id.is_empty())
            .and_then(|id| self.insights_for(id))
            .or_else(|| self.insights_for(DEFAULT_INSIGHTS_SECTION_ID))
            .or_else(|| self.insight_sets.first())
    }

    pub fn insight(&self, section_id: &str, insight_id: &str) -> Option<&InsightDetail> {
        self.insights_for(section_id)?
            .insights
            .iter()
            .find(|insight| insight.id == insight_id)
    }

    /// Display title for a section, or the raw id when the overview has no entry.
    pub fn section_title(&self, section_id: &str) -> String {
        self.section(section_id)
            .map(|section| section.section_title.clone())
            .unwrap_or_else(|| section_id.to_string())
    }
}

impl Default for DiagnosticsStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn series(items: &[(&str, f64)]) -> Vec<SeriesPoint> {
    items
        .iter()
        .map(|(label, value)| SeriesPoint::new(*label, *value))
        .collect()
}

fn bar_series(items: &[(&str, f64)]) -> Visual {
    Visual::series(ChartKind::Bar, series(items))
}

fn plotted(kind: ChartKind, points: &[f64], labels: &[&str]) -> Visual {
    Visual::points(
        kind,
        points.to_vec(),
        labels.iter().map(|label| label.to_string()).collect(),
    )
}

fn block(id: &str, title: &str, text: &str, mini_visual: Visual) -> InsightBlock {
    InsightBlock {
        id: id.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        mini_visual,
    }
}

fn summary(id: &str, title: &str, score: i32, status: Status, description: &str) -> InsightSummary {
    InsightSummary {
        id: id.to_string(),
        title: title.to_string(),
        score,
        status,
        description: Some(description.to_string()),
    }
}

fn thresholds(critical: i32, average: i32) -> Vec<ScoreThreshold> {
    vec![
        ScoreThreshold { label: Status::Critical, max: critical },
        ScoreThreshold { label: Status::Average, max: average },
        ScoreThreshold { label: Status::Strong, max: 100 },
    ]
}

const QUARTERS: [&str; 5] = ["Q1", "Q2", "Q3", "Q4", "Current"];
const MONTHS: [&str; 5] = ["Jan", "Feb", "Mar", "Apr", "May"];
const WEEKS: [&str; 5] = ["W1", "W2", "W3", "W4", "W5"];

pub fn overview_data() -> OverviewResponse {
    OverviewResponse {
        sections: vec![
            SectionOverview {
                section_id: STRATEGY_SECTION_ID.to_string(),
                section_title: "Strategy in Action".to_string(),
                description: Some(
                    "How well the strategy is understood, aligned, and role-modeled across the org."
                        .to_string(),
                ),
                main_score: 63,
                status: Status::Average,
                comparison: ComparisonMetric {
                    label: "vs. Industry Benchmark".to_string(),
                    value: -8,
                    unit: ComparisonUnit::PercentagePoints,
                },
                benchmark_score: 63,
                trend: Some(vec![58, 62, 60, 54, 63]),
                stats: Some(SectionStats {
                    last_analysis: Some("May 2024".to_string()),
                    health_score: Some("B".to_string()),
                    health_score_color: Some("text-amber-600".to_string()),
                }),
                visual: ScoreVisual {
                    kind: ScoreVisualKind::SegmentedBar,
                    min: 0,
                    max: 100,
                    thresholds: thresholds(40, 70),
                },
                insights: vec![
                    summary(
                        "clarity",
                        "Strategic Clarity",
                        58,
                        Status::Average,
                        "Understanding of strategy across levels and teams.",
                    ),
                    summary(
                        "alignment",
                        "Organizational Alignment",
                        65,
                        Status::Average,
                        "Alignment on goals and cross-team collaboration.",
                    ),
                    summary(
                        "role-modeling",
                        "Leadership Role-Modeling",
                        72,
                        Status::Strong,
                        "Leaders visibly champion and live the strategy.",
                    ),
                ],
            },
            SectionOverview {
                section_id: EXECUTION_SECTION_ID.to_string(),
                section_title: "Execution Habits".to_string(),
                description: Some(
                    "The execution muscle: accountability, decision speed, and meeting efficiency."
                        .to_string(),
                ),
                main_score: 50,
                status: Status::Critical,
                comparison: ComparisonMetric {
                    label: "vs. Industry Benchmark".to_string(),
                    value: -20,
                    unit: ComparisonUnit::PercentagePoints,
                },
                benchmark_score: 50,
                trend: Some(vec![50, 48, 42, 45, 50]),
                stats: Some(SectionStats {
                    last_analysis: Some("May 2024".to_string()),
                    health_score: Some("C".to_string()),
                    health_score_color: Some("text-red-600".to_string()),
                }),
                visual: ScoreVisual {
                    kind: ScoreVisualKind::Gauge,
                    min: 0,
                    max: 100,
                    thresholds: thresholds(50, 75),
                },
                insights: vec![
                    summary(
                        "accountability",
                        "Accountability Culture",
                        38,
                        Status::Critical,
                        "Follow-through and ownership of commitments.",
                    ),
                    summary(
                        "meeting-drag",
                        "Meeting Efficiency",
                        42,
                        Status::Critical,
                        "Time and outcomes from meetings vs focus work.",
                    ),
                    summary(
                        "decision-speed",
                        "Decision Speed",
                        55,
                        Status::Average,
                        "Velocity and clarity of decision-making.",
                    ),
                ],
            },
        ],
    }
}

pub fn strategy_insights() -> InsightsResponse {
    let section_id = STRATEGY_SECTION_ID.to_string();
    InsightsResponse {
        section_id: section_id.clone(),
        insights: vec![
            InsightDetail {
                id: "clarity".to_string(),
                section_id: section_id.clone(),
                headline: "Strategic Clarity Needs Improvement".to_string(),
                summary: "Only 58% of employees can articulate the company strategy in their own words. This is below the industry benchmark of 72%.".to_string(),
                blocks: vec![
                    block(
                        "clarity-block-1",
                        "Communication Gap",
                        "Senior leaders communicate strategy quarterly, but middle managers report feeling disconnected from the big picture.",
                        bar_series(&[
                            ("Executives", 85.0),
                            ("Directors", 68.0),
                            ("Managers", 52.0),
                            ("Individual Contributors", 41.0),
                        ]),
                    ),
                    block(
                        "clarity-block-2",
                        "Cascade Effectiveness",
                        "Strategy cascades lose fidelity as they move through organizational layers.",
                        plotted(
                            ChartKind::Sparkline,
                            &[85.0, 72.0, 58.0, 45.0, 41.0],
                            &["L1", "L2", "L3", "L4", "L5"],
                        ),
                    ),
                ],
                main_visual: plotted(ChartKind::Bar, &[58.0, 62.0, 55.0, 48.0, 61.0], &QUARTERS),
                meta: InsightMeta::new(Status::Average, 58, 72),
            },
            InsightDetail {
                id: "alignment".to_string(),
                section_id: section_id.clone(),
                headline: "Organizational Alignment Shows Mixed Results".to_string(),
                summary: "Cross-functional alignment at 65% reflects siloed operations. Teams are aligned within departments but struggle with horizontal collaboration.".to_string(),
                blocks: vec![
                    block(
                        "alignment-block-1",
                        "Department Silos",
                        "Engineering and Product teams show strong internal alignment (82%) but only 48% alignment on shared goals.",
                        bar_series(&[("Internal", 82.0), ("Cross-team", 48.0)]),
                    ),
                    block(
                        "alignment-block-2",
                        "Goal Overlap",
                        "Only 35% of team OKRs have explicit dependencies mapped to other teams.",
                        plotted(ChartKind::Sparkline, &[28.0, 32.0, 35.0, 33.0, 35.0], &WEEKS),
                    ),
                ],
                main_visual: plotted(ChartKind::Sparkline, &[60.0, 58.0, 63.0, 67.0, 65.0], &MONTHS),
                meta: InsightMeta::new(Status::Average, 65, 75),
            },
            InsightDetail {
                id: "role-modeling".to_string(),
                section_id,
                headline: "Leadership Role-Modeling is a Bright Spot".to_string(),
                summary: "At 72%, leadership visibility and role-modeling exceed industry benchmarks. Employees see leaders embodying company values.".to_string(),
                blocks: vec![
                    block(
                        "role-modeling-block-1",
                        "Visible Leadership",
                        "78% of employees report seeing senior leaders actively participating in strategic initiatives.",
                        bar_series(&[
                            ("Town Halls", 85.0),
                            ("Team Visits", 72.0),
                            ("Slack Presence", 68.0),
                        ]),
                    ),
                    block(
                        "role-modeling-block-2",
                        "Values Alignment",
                        "Leaders score highest on \"integrity\" (88%) and \"customer focus\" (82%).",
                        bar_series(&[
                            ("Integrity", 88.0),
                            ("Customer Focus", 82.0),
                            ("Innovation", 65.0),
                        ]),
                    ),
                ],
                main_visual: plotted(ChartKind::Bar, &[68.0, 70.0, 69.0, 74.0, 72.0], &QUARTERS),
                meta: InsightMeta::new(Status::Strong, 72, 68),
            },
        ],
    }
}

pub fn execution_insights() -> InsightsResponse {
    let section_id = EXECUTION_SECTION_ID.to_string();
    InsightsResponse {
        section_id: section_id.clone(),
        insights: vec![
            InsightDetail {
                id: "accountability".to_string(),
                section_id: section_id.clone(),
                headline: "Accountability Culture Requires Urgent Attention".to_string(),
                summary: "At 38%, accountability is critically low. Commitments are frequently missed without consequence, eroding trust across teams.".to_string(),
                blocks: vec![
                    block(
                        "accountability-block-1",
                        "Commitment Tracking",
                        "Only 42% of action items from leadership meetings are completed on time.",
                        bar_series(&[("On Time", 42.0), ("Late", 35.0), ("Dropped", 23.0)]),
                    ),
                    block(
                        "accountability-block-2",
                        "Follow-through Trend",
                        "Follow-through rates have declined 12 points over the past quarter.",
                        plotted(ChartKind::Sparkline, &[54.0, 48.0, 45.0, 40.0, 38.0], &WEEKS),
                    ),
                ],
                main_visual: plotted(ChartKind::Sparkline, &[52.0, 48.0, 44.0, 41.0, 38.0], &MONTHS),
                meta: InsightMeta::new(Status::Critical, 38, 65),
            },
            InsightDetail {
                id: "meeting-drag".to_string(),
                section_id: section_id.clone(),
                headline: "Meeting Overhead Slowing Execution".to_string(),
                summary: "Meeting efficiency at 42% indicates excessive time in unproductive meetings. Employees spend an average of 23 hours/week in meetings.".to_string(),
                blocks: vec![
                    block(
                        "meeting-drag-block-1",
                        "Meeting Load",
                        "Senior managers spend 62% of their week in meetings, leaving minimal focus time.",
                        bar_series(&[("Meetings", 62.0), ("Focus Work", 25.0), ("Admin", 13.0)]),
                    ),
                    block(
                        "meeting-drag-block-2",
                        "Meeting Quality",
                        "Only 35% of meetings have clear agendas and outcomes defined.",
                        bar_series(&[
                            ("With Agenda", 35.0),
                            ("With Outcomes", 28.0),
                            ("Neither", 45.0),
                        ]),
                    ),
                ],
                main_visual: plotted(ChartKind::Bar, &[48.0, 45.0, 44.0, 40.0, 42.0], &QUARTERS),
                meta: InsightMeta::new(Status::Critical, 42, 60),
            },
            InsightDetail {
                id: "decision-speed".to_string(),
                section_id,
                headline: "Decision Speed Shows Room for Improvement".to_string(),
                summary: "Decision-making velocity at 55% is average. Critical decisions take 2.3x longer than industry benchmark due to unclear ownership.".to_string(),
                blocks: vec![
                    block(
                        "decision-speed-block-1",
                        "Decision Latency",
                        "Average time to decision: 14 days for strategic choices vs. benchmark of 6 days.",
                        bar_series(&[("Your Org", 14.0), ("Benchmark", 6.0)]),
                    ),
                    block(
                        "decision-speed-block-2",
                        "Ownership Clarity",
                        "48% of employees know who owns key decisions in their area.",
                        plotted(ChartKind::Sparkline, &[42.0, 44.0, 46.0, 47.0, 48.0], &WEEKS),
                    ),
                ],
                main_visual: plotted(ChartKind::Sparkline, &[50.0, 52.0, 54.0, 53.0, 55.0], &MONTHS),
                meta: InsightMeta::new(Status::Average, 55, 70),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_statuses_agree_with_section_thresholds() {
        let store = DiagnosticsStore::seeded();
        for section in &store.overview().sections {
            assert_eq!(
                section.visual.classify(section.main_score),
                Some(section.status),
                "section {}",
                section.section_id
            );
            for insight in &section.insights {
                assert_eq!(
                    section.visual.classify(insight.score),
                    Some(insight.status),
                    "insight {}",
                    insight.id
                );
            }
        }
    }

    #[test]
    fn every_summary_has_a_detail_record() {
        let store = DiagnosticsStore::seeded();
        for section in &store.overview().sections {
            for summary in &section.insights {
                let detail = store
                    .insight(&section.section_id, &summary.id)
                    .unwrap_or_else(|| panic!("missing detail for {}", summary.id));
                assert_eq!(detail.meta.section_score, summary.score);
                assert_eq!(detail.section_id, section.section_id);
            }
        }
    }

    #[test]
    fn unknown_or_empty_insight_section_falls_back_to_strategy() {
        let store = DiagnosticsStore::seeded();
        for requested in [None, Some(""), Some("nope")] {
            let set = store.insights_or_default(requested).unwrap();
            assert_eq!(set.section_id, STRATEGY_SECTION_ID);
        }
        let set = store.insights_or_default(Some(EXECUTION_SECTION_ID)).unwrap();
        assert_eq!(set.section_id, EXECUTION_SECTION_ID);
    }

    #[test]
    fn section_title_falls_back_to_id() {
        let store = DiagnosticsStore::seeded();
        assert_eq!(store.section_title(EXECUTION_SECTION_ID), "Execution Habits");
        assert_eq!(store.section_title("ghost"), "ghost");
    }
}
