//! Chart rendering for diagnostics visuals.
//!
//! Every renderer funnels its input through [`extract::extract_points`] and
//! [`geometry::layout`], so the components in [`view`] only ever draw
//! precomputed coordinates.

pub mod extract;
pub mod geometry;
mod view;

pub use extract::extract_points;
pub use geometry::{layout, ChartGeometry};
pub use view::{BarChart, ChartRenderer, SparklineChart, VisualCard};
