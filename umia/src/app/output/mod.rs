mod comparison_row;
mod footprint_row;
mod impact_row;
mod modal_distance_row;
pub mod output_ops;
mod summary;

pub use comparison_row::ComparisonRow;
pub use footprint_row::FootprintRow;
pub use impact_row::ImpactRow;
pub use modal_distance_row::ModalDistanceRow;
pub use summary::{InterventionSummary, ScenarioSummary, Summary, VariantSummary};
