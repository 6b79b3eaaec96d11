use serde::{Deserialize, Serialize};

/// number of axes describing each scenario
pub const AXIS_COUNT: usize = 4;

/// a named dimension of uncertainty along which scenarios are characterized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UncertaintyAxis {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl UncertaintyAxis {
    pub fn new(name: &str, description: &str) -> UncertaintyAxis {
        UncertaintyAxis {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    pub fn defaults() -> [UncertaintyAxis; AXIS_COUNT] {
        [
            UncertaintyAxis::new(
                "Intermodality",
                "Ability to use various modes, e.g., metro, bus, and shared bikes.",
            ),
            UncertaintyAxis::new(
                "Mixed Use",
                "Mix of functions, e.g., only universities or a mix with shops, bars, housing.",
            ),
            UncertaintyAxis::new(
                "Density",
                "Population density, i.e. how many people live and work close to each other.",
            ),
            UncertaintyAxis::new(
                "Public Transport",
                "Refers to the service level, e.g., schedule frequency, network density.",
            ),
        ]
    }
}
