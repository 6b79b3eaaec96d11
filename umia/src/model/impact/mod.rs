mod impact_metric;
pub mod impact_ops;
mod impact_tables;
mod impact_values;

pub use impact_metric::ImpactMetric;
pub use impact_tables::{ImpactTable, ImpactTables};
pub use impact_values::ImpactValues;
