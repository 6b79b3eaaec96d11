mod adjusted_ratings;
mod footprint_comparison;
pub mod intervention_ops;

pub use adjusted_ratings::{AdjustedRatings, ClampEvent};
pub use footprint_comparison::{
    CellComparison, CellComparisonTable, FootprintComparison, MetricComparison,
};
