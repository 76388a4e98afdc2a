//! Platform-agnostic helpers shared by the dashboard views.

pub mod fetch;
pub mod format;
pub mod paths;
pub mod status;
