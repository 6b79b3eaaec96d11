use super::{ValidationError, PERCENT_STEP};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// an integer percentage in [0, 100] in steps of 5, used for scenario
/// likelihoods and persona weights.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "i64")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    pub fn value(&self) -> u8 {
        self.0
    }

    /// this percentage as a fraction in [0, 1]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl TryFrom<i64> for Percent {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::PercentOutOfRange { value });
        }
        if value % PERCENT_STEP != 0 {
            return Err(ValidationError::PercentStep {
                value,
                step: PERCENT_STEP,
            });
        }
        Ok(Percent(value as u8))
    }
}

impl From<Percent> for i64 {
    fn from(value: Percent) -> Self {
        value.0 as i64
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
