use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// ordinal change an intervention makes to a rating.
/// serialized as its integer value -2..=2.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "i64")]
pub enum RatingDelta {
    StrongDecrease,
    SlightDecrease,
    #[default]
    NoChange,
    SlightIncrease,
    StrongIncrease,
}

impl RatingDelta {
    pub fn value(&self) -> i8 {
        match self {
            RatingDelta::StrongDecrease => -2,
            RatingDelta::SlightDecrease => -1,
            RatingDelta::NoChange => 0,
            RatingDelta::SlightIncrease => 1,
            RatingDelta::StrongIncrease => 2,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RatingDelta::StrongDecrease => "Strong decrease",
            RatingDelta::SlightDecrease => "Slight decrease",
            RatingDelta::NoChange => "No change",
            RatingDelta::SlightIncrease => "Slight increase",
            RatingDelta::StrongIncrease => "Strong increase",
        }
    }
}

impl TryFrom<i64> for RatingDelta {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -2 => Ok(RatingDelta::StrongDecrease),
            -1 => Ok(RatingDelta::SlightDecrease),
            0 => Ok(RatingDelta::NoChange),
            1 => Ok(RatingDelta::SlightIncrease),
            2 => Ok(RatingDelta::StrongIncrease),
            _ => Err(ValidationError::DeltaOutOfRange { value }),
        }
    }
}

impl From<RatingDelta> for i64 {
    fn from(value: RatingDelta) -> Self {
        value.value() as i64
    }
}

impl Display for RatingDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}: {}", self.value(), self.description())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(RatingDelta::StrongDecrease.to_string(), "-2: Strong decrease");
        assert_eq!(RatingDelta::NoChange.to_string(), "+0: No change");
        assert_eq!(RatingDelta::SlightIncrease.to_string(), "+1: Slight increase");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            RatingDelta::try_from(3),
            Err(ValidationError::DeltaOutOfRange { value: 3 })
        );
        let d: RatingDelta = serde_json::from_str("-1").expect("test invariant failed");
        assert_eq!(d, RatingDelta::SlightDecrease);
    }
}
