//! Diagnostics backend for Fasttrack: domain model, built-in survey data and the
//! mapping into dashboard-ready responses. The axum HTTP surface lives behind the
//! `server` feature so the `ui` crate can share the types without pulling it in.

pub mod convert;
pub mod data;
pub mod dto;
pub mod model;

#[cfg(feature = "server")]
pub mod server;

pub use convert::{insight_to_insight_data, section_to_section_data};
pub use data::DiagnosticsStore;
pub use dto::{ErrorBody, InsightData, InsightMetric, SectionData};
pub use model::{ChartKind, InsightDetail, SectionOverview, SeriesPoint, Status, Visual};
