//! Mapping from stored diagnostic records to the shapes the dashboard consumes.
//!
//! Both functions are total: missing optional fields resolve to fixed defaults.

use crate::dto::{
    InsightData, InsightMetric, InsightRecommendation, MetricIcon, SectionComparison,
    SectionData, SectionInsight,
};
use crate::model::{InsightDetail, SectionOverview};

pub const DEFAULT_SECTION_DESCRIPTION: &str = "No description provided.";

pub const GAP_POSITIVE_COLOR: &str = "text-emerald-600";
pub const GAP_NEGATIVE_COLOR: &str = "text-red-600";

pub const METRIC_SECTION_SCORE: &str = "Section Score";
pub const METRIC_BENCHMARK: &str = "Benchmark";
pub const METRIC_GAP: &str = "Gap vs Benchmark";

/// Placeholder recommendations attached to every insight until real ones are authored.
pub const STATIC_RECOMMENDATIONS: [&str; 2] = [
    "Run a focused workshop with accountable owners to close the top gaps this quarter.",
    "Set a 30-day experiment with clear milestones to validate the fastest improvement lever.",
];

pub fn section_to_section_data(section: &SectionOverview) -> SectionData {
    let insights = section
        .insights
        .iter()
        .map(|insight| SectionInsight {
            id: insight.id.clone(),
            title: insight.title.clone(),
            description: insight
                .description
                .clone()
                .unwrap_or_else(|| insight.title.clone()),
        })
        .collect();

    let delta = section.comparison.value;

    SectionData {
        id: section.section_id.clone(),
        section_title: section.section_title.clone(),
        description: section
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_SECTION_DESCRIPTION.to_string()),
        insights,
        main_score: section.main_score,
        status: section.status,
        benchmark_score: section.benchmark_score,
        comparison: SectionComparison {
            label: section.comparison.label.clone(),
            delta,
            unit: Some(section.comparison.unit),
            is_positive: delta >= 0,
        },
        trend: section.trend.clone().unwrap_or_default(),
        stats: section.stats.clone(),
    }
}

pub fn insight_to_insight_data(insight: &InsightDetail, section_title: &str) -> InsightData {
    let meta = &insight.meta;
    let gap_color = if meta.gap >= 0 {
        GAP_POSITIVE_COLOR
    } else {
        GAP_NEGATIVE_COLOR
    };

    let metrics = vec![
        metric(
            METRIC_SECTION_SCORE,
            format!("{}%", meta.section_score),
            MetricIcon::Chart,
            None,
        ),
        metric(
            METRIC_BENCHMARK,
            format!("{}%", meta.benchmark_score),
            MetricIcon::Chart,
            None,
        ),
        metric(
            METRIC_GAP,
            format!("{} pts", meta.gap),
            MetricIcon::Trend,
            Some(gap_color),
        ),
    ];

    let recommendations = STATIC_RECOMMENDATIONS
        .iter()
        .zip(1u32..)
        .map(|(text, id)| InsightRecommendation {
            id,
            text: (*text).to_string(),
        })
        .collect();

    InsightData {
        id: insight.id.clone(),
        section_id: insight.section_id.clone(),
        section_title: section_title.to_string(),
        title: insight.headline.clone(),
        description: insight.summary.clone(),
        details: insight.summary.clone(),
        blocks: insight.blocks.clone(),
        main_visual: Some(insight.main_visual.clone()),
        meta: Some(meta.clone()),
        metrics,
        recommendations,
    }
}

fn metric(label: &str, value: String, icon: MetricIcon, color: Option<&str>) -> InsightMetric {
    InsightMetric {
        label: label.to_string(),
        value,
        subtext: None,
        icon: Some(icon),
        color: color.map(str::to_string),
    }
}
