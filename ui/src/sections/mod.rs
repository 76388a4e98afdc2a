//! Dashboard panels for sections and their insights.

mod detail;
pub use detail::SectionDetail;

mod insight;
pub use insight::InsightDetailPanel;

mod list;
pub use list::{ScoreGauge, SectionCard, SectionGrid};

mod utils;
pub use utils::InsightNeighbors;
pub(crate) use utils::*;
