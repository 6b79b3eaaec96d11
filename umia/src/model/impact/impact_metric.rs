use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the quantities computed for every persona in every scenario.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ImpactMetric {
    Co2e,
    Energy,
    Calories,
}

impl ImpactMetric {
    pub const ALL: [ImpactMetric; 3] = [
        ImpactMetric::Co2e,
        ImpactMetric::Energy,
        ImpactMetric::Calories,
    ];

    /// unit of a daily value for one person
    pub fn individual_unit(&self) -> &'static str {
        match self {
            ImpactMetric::Co2e => "kg CO2e",
            ImpactMetric::Energy => "MJ",
            ImpactMetric::Calories => "cal",
        }
    }

    /// unit of a daily value for a population group, 1000x the individual unit
    pub fn group_unit(&self) -> &'static str {
        match self {
            ImpactMetric::Co2e => "t CO2e",
            ImpactMetric::Energy => "GJ",
            ImpactMetric::Calories => "pizzas",
        }
    }
}

impl Display for ImpactMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ImpactMetric::Co2e => "co2e",
            ImpactMetric::Energy => "energy",
            ImpactMetric::Calories => "calories",
        };
        write!(f, "{s}")
    }
}
