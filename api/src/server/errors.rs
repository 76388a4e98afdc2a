use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::dto::ErrorBody;

/// Lookup failures surfaced to clients as `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Unknown id on `/overview/:sectionId`, which answers 400 rather than 404.
    #[error("Section not found")]
    OverviewSectionNotFound,
    #[error("Section not found")]
    SectionNotFound,
    #[error("Insight not found")]
    InsightNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::OverviewSectionNotFound => StatusCode::BAD_REQUEST,
            ApiError::SectionNotFound | ApiError::InsightNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Failures that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lookup_is_a_bad_request() {
        assert_eq!(
            ApiError::OverviewSectionNotFound.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::SectionNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InsightNotFound.to_string(), "Insight not found");
    }
}
