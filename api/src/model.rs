//! Domain records for the diagnostics survey: sections, insights and their visuals.
//!
//! These mirror the JSON the backend serves verbatim from `/overview` and
//! `/insights`. Client-facing reshaped records live in [`crate::dto`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Qualitative score tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Critical,
    Average,
    Strong,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Critical => "Critical",
            Status::Average => "Average",
            Status::Strong => "Strong",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonUnit {
    PercentagePoints,
}

impl ComparisonUnit {
    /// Short suffix appended to comparison values in the UI.
    pub fn display_suffix(self) -> &'static str {
        match self {
            ComparisonUnit::PercentagePoints => "%",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetric {
    pub label: String,
    pub value: i32,
    pub unit: ComparisonUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreVisualKind {
    Gauge,
    SegmentedBar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreThreshold {
    pub label: Status,
    pub max: i32,
}

/// Score widget attached to a section, with the status bands used to grade it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreVisual {
    #[serde(rename = "type")]
    pub kind: ScoreVisualKind,
    pub min: i32,
    pub max: i32,
    pub thresholds: Vec<ScoreThreshold>,
}

impl ScoreVisual {
    /// Status of the first band whose upper bound covers `score`.
    /// Scores above every band take the last band's status.
    pub fn classify(&self, score: i32) -> Option<Status> {
        self.thresholds
            .iter()
            .find(|band| score <= band.max)
            .or_else(|| self.thresholds.last())
            .map(|band| band.label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    pub id: String,
    pub title: String,
    pub score: i32,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOverview {
    pub section_id: String,
    pub section_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub main_score: i32,
    pub status: Status,
    pub comparison: ComparisonMetric,
    pub benchmark_score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<SectionStats>,
    pub visual: ScoreVisual,
    pub insights: Vec<InsightSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub sections: Vec<SectionOverview>,
}

/// Rendering mode of a chart payload.
///
/// The wire tag is compared case-insensitively: `"sparkline"` selects
/// [`ChartKind::Sparkline`], every other value (or no tag at all) falls back to
/// [`ChartKind::Bar`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    #[default]
    Bar,
    Sparkline,
}

impl ChartKind {
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_lowercase() == "sparkline" {
            ChartKind::Sparkline
        } else {
            ChartKind::Bar
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Sparkline => "sparkline",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChartKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChartKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.as_deref().map(ChartKind::from_tag).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Chart payload for both block mini visuals and an insight's main visual.
///
/// Either `series` carries labeled points, or `points` and `x_labels` are
/// parallel lists. See `ui::charts::extract` for the normalisation rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visual {
    #[serde(rename = "type", default)]
    pub kind: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<SeriesPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_labels: Option<Vec<String>>,
}

impl Visual {
    pub fn series(kind: ChartKind, series: Vec<SeriesPoint>) -> Self {
        Self {
            kind,
            series: Some(series),
            ..Self::default()
        }
    }

    pub fn points(kind: ChartKind, points: Vec<f64>, x_labels: Vec<String>) -> Self {
        Self {
            kind,
            points: Some(points),
            x_labels: Some(x_labels),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightBlock {
    pub id: String,
    pub title: String,
    pub text: String,
    pub mini_visual: Visual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightMeta {
    pub status: Status,
    pub section_score: i32,
    pub benchmark_score: i32,
    pub gap: i32,
}

impl InsightMeta {
    pub fn new(status: Status, section_score: i32, benchmark_score: i32) -> Self {
        Self {
            status,
            section_score,
            benchmark_score,
            gap: section_score - benchmark_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightDetail {
    pub id: String,
    pub section_id: String,
    pub headline: String,
    pub summary: String,
    pub blocks: Vec<InsightBlock>,
    pub main_visual: Visual,
    pub meta: InsightMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub section_id: String,
    pub insights: Vec<InsightDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chart_kind_defaults_to_bar_for_unknown_tags() {
        assert_eq!(ChartKind::from_tag("sparkline"), ChartKind::Sparkline);
        assert_eq!(ChartKind::from_tag("SparkLine"), ChartKind::Sparkline);
        assert_eq!(ChartKind::from_tag("bar"), ChartKind::Bar);
        assert_eq!(ChartKind::from_tag("column"), ChartKind::Bar);
        assert_eq!(ChartKind::from_tag(""), ChartKind::Bar);
    }

    #[test]
    fn visual_without_type_deserializes_as_bar() {
        let visual: Visual = serde_json::from_value(json!({ "points": [1.0, 2.0] })).unwrap();
        assert_eq!(visual.kind, ChartKind::Bar);
        assert_eq!(visual.points, Some(vec![1.0, 2.0]));
        assert!(visual.x_labels.is_none());
    }

    #[test]
    fn visual_serializes_camel_case_keys() {
        let visual = Visual::points(ChartKind::Sparkline, vec![3.0], vec!["W1".into()]);
        let value = serde_json::to_value(&visual).unwrap();
        assert_eq!(value["type"], "sparkline");
        assert_eq!(value["xLabels"], json!(["W1"]));
        assert!(value.get("series").is_none());
    }

    #[test]
    fn insight_meta_gap_follows_scores() {
        let meta = InsightMeta::new(Status::Critical, 38, 65);
        assert_eq!(meta.gap, -27);
    }

    #[test]
    fn score_visual_classifies_by_first_covering_band() {
        let visual = ScoreVisual {
            kind: ScoreVisualKind::Gauge,
            min: 0,
            max: 100,
            thresholds: vec![
                ScoreThreshold { label: Status::Critical, max: 50 },
                ScoreThreshold { label: Status::Average, max: 75 },
                ScoreThreshold { label: Status::Strong, max: 100 },
            ],
        };
        assert_eq!(visual.classify(50), Some(Status::Critical));
        assert_eq!(visual.classify(51), Some(Status::Average));
        assert_eq!(visual.classify(101), Some(Status::Strong));
    }

    #[test]
    fn comparison_unit_round_trips_wire_name() {
        let unit: ComparisonUnit = serde_json::from_value(json!("percentagePoints")).unwrap();
        assert_eq!(unit.display_suffix(), "%");
    }
}
