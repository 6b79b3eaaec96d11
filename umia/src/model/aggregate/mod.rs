pub mod aggregate_ops;
mod comparative_statistics;
mod expected_footprint;

pub use comparative_statistics::{
    ComparativeStatistics, EmitterProfile, PersonaMean, PersonaStatistics, ScenarioExtreme,
    ScenarioRange,
};
pub use expected_footprint::ExpectedFootprint;
