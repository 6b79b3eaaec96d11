use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the six modes that carry distance and impact coefficients.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalMode {
    Pt,
    Car,
    Mod,
    Mm,
    Bike,
    Walk,
}

impl CanonicalMode {
    pub const COUNT: usize = 6;

    pub const ALL: [CanonicalMode; CanonicalMode::COUNT] = [
        CanonicalMode::Pt,
        CanonicalMode::Car,
        CanonicalMode::Mod,
        CanonicalMode::Mm,
        CanonicalMode::Bike,
        CanonicalMode::Walk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CanonicalMode::Pt => "PT",
            CanonicalMode::Car => "Car",
            CanonicalMode::Mod => "MoD",
            CanonicalMode::Mm => "MM",
            CanonicalMode::Bike => "Bike",
            CanonicalMode::Walk => "Walk",
        }
    }

    /// modes whose distance counts towards calories burned
    pub fn is_active(&self) -> bool {
        matches!(self, CanonicalMode::Bike | CanonicalMode::Walk)
    }
}

impl Display for CanonicalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
