use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::debug;

use super::errors::ApiError;
use super::AppState;
use crate::convert::{insight_to_insight_data, section_to_section_data};
use crate::dto::{InsightData, SectionData};
use crate::model::{InsightsResponse, OverviewResponse};

const SECTION_ID_PARAM: &str = "sectionId";

/// The single `sectionId` value of a query. Repeated keys name no section.
fn requested_section_id(pairs: &[(String, String)]) -> Option<&str> {
    let mut values = pairs
        .iter()
        .filter(|(key, _)| key == SECTION_ID_PARAM)
        .map(|(_, value)| value.as_str());
    match (values.next(), values.next()) {
        (Some(value), None) => Some(value),
        _ => None,
    }
}

pub async fn overview_handler(State(state): State<AppState>) -> Json<OverviewResponse> {
    Json(state.store.overview().clone())
}

pub async fn section_overview_handler(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
) -> Result<Json<SectionData>, ApiError> {
    let section = state
        .store
        .section(&section_id)
        .ok_or(ApiError::OverviewSectionNotFound)?;
    Ok(Json(section_to_section_data(section)))
}

pub async fn insights_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<InsightsResponse>, ApiError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            debug!(%rejection, "unreadable insights query; using the default section");
            Vec::new()
        }
    };
    let requested = requested_section_id(&pairs);
    let set = state
        .store
        .insights_or_default(requested)
        .ok_or(ApiError::SectionNotFound)?;
    if requested != Some(set.section_id.as_str()) {
        debug!(requested = ?requested, served = %set.section_id, "insights defaulted");
    }
    Ok(Json(set.clone()))
}

pub async fn section_insights_handler(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
) -> Result<Json<Vec<InsightData>>, ApiError> {
    let set = state
        .store
        .insights_for(&section_id)
        .ok_or(ApiError::SectionNotFound)?;
    let section_title = state.store.section_title(&section_id);
    let payload = set
        .insights
        .iter()
        .map(|insight| insight_to_insight_data(insight, &section_title))
        .collect();
    Ok(Json(payload))
}

pub async fn insight_handler(
    State(state): State<AppState>,
    Path((section_id, insight_id)): Path<(String, String)>,
) -> Result<Json<InsightData>, ApiError> {
    if state.store.insights_for(&section_id).is_none() {
        return Err(ApiError::SectionNotFound);
    }
    let insight = state
        .store
        .insight(&section_id, &insight_id)
        .ok_or(ApiError::InsightNotFound)?;
    let section_title = state.store.section_title(&section_id);
    Ok(Json(insight_to_insight_data(insight, &section_title)))
}
