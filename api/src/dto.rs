//! Client-facing response shapes produced by [`crate::convert`].

use serde::{Deserialize, Serialize};

use crate::model::{ComparisonUnit, InsightBlock, InsightMeta, SectionStats, Status, Visual};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionInsight {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionComparison {
    pub label: String,
    pub delta: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<ComparisonUnit>,
    pub is_positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionData {
    pub id: String,
    pub section_title: String,
    pub description: String,
    pub insights: Vec<SectionInsight>,
    pub main_score: i32,
    pub status: Status,
    pub benchmark_score: i32,
    pub comparison: SectionComparison,
    #[serde(default)]
    pub trend: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<SectionStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricIcon {
    Chart,
    Trend,
}

/// Display-ready metric tile. `value` is already formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightMetric {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<MetricIcon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightRecommendation {
    pub id: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightData {
    pub id: String,
    pub section_id: String,
    pub section_title: String,
    pub title: String,
    pub description: String,
    pub details: String,
    #[serde(default)]
    pub blocks: Vec<InsightBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_visual: Option<Visual>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<InsightMeta>,
    #[serde(default)]
    pub metrics: Vec<InsightMetric>,
    #[serde(default)]
    pub recommendations: Vec<InsightRecommendation>,
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
