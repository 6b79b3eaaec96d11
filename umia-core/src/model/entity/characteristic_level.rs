use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// ordinal level of a scenario along one uncertainty axis. descriptive
/// only, it does not enter any calculation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CharacteristicLevel {
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl Display for CharacteristicLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CharacteristicLevel::Low => "low",
            CharacteristicLevel::Medium => "medium",
            CharacteristicLevel::High => "high",
            CharacteristicLevel::VeryHigh => "very high",
        };
        write!(f, "{s}")
    }
}
