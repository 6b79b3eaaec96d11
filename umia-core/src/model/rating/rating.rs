use super::{RatingAdjustment, RatingDelta};
use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// ordinal likelihood that a persona uses a travel option.
/// serialized as its integer value 0..=4.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "i64")]
pub enum Rating {
    #[default]
    Unlikely = 0,
    RatherUnlikely = 1,
    RatherLikely = 2,
    Likely = 3,
    VeryLikely = 4,
}

impl Rating {
    pub const MIN: Rating = Rating::Unlikely;
    pub const MAX: Rating = Rating::VeryLikely;

    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rating::Unlikely => "Unlikely",
            Rating::RatherUnlikely => "Rather unlikely",
            Rating::RatherLikely => "Rather likely",
            Rating::Likely => "Likely",
            Rating::VeryLikely => "Very likely",
        }
    }

    /// applies an adjustment, clamping the result to [0, 4]. the outcome
    /// records whether clamping took place.
    pub fn adjust(&self, delta: RatingDelta) -> RatingAdjustment {
        let requested = self.value() as i64 + delta.value() as i64;
        let clamped = requested.clamp(Rating::MIN.value() as i64, Rating::MAX.value() as i64);
        let rating = Rating::try_from(clamped).unwrap_or(Rating::MIN);
        RatingAdjustment {
            base: *self,
            delta,
            requested,
            rating,
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Rating::Unlikely),
            1 => Ok(Rating::RatherUnlikely),
            2 => Ok(Rating::RatherLikely),
            3 => Ok(Rating::Likely),
            4 => Ok(Rating::VeryLikely),
            _ => Err(ValidationError::RatingOutOfRange { value }),
        }
    }
}

impl From<Rating> for i64 {
    fn from(value: Rating) -> Self {
        value.value() as i64
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.value(), self.description())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp_law() {
        for base in 0..=4 {
            for delta in -2..=2 {
                let r = Rating::try_from(base).expect("test invariant failed");
                let d = RatingDelta::try_from(delta).expect("test invariant failed");
                let result = r.adjust(d);
                let expected = (base + delta).clamp(0, 4);
                assert_eq!(result.rating.value() as i64, expected);
                assert_eq!(result.is_clamped(), base + delta != expected);
            }
        }
    }

    #[test]
    fn test_clamp_boundaries() {
        let low = Rating::Unlikely.adjust(RatingDelta::StrongDecrease);
        assert_eq!(low.rating, Rating::Unlikely);
        assert!(low.is_clamped());
        let high = Rating::VeryLikely.adjust(RatingDelta::StrongIncrease);
        assert_eq!(high.rating, Rating::VeryLikely);
        assert!(high.is_clamped());
    }

    #[test]
    fn test_out_of_range() {
        let result: Result<Rating, _> = serde_json::from_str("5");
        assert!(result.is_err());
        assert_eq!(
            Rating::try_from(-1),
            Err(ValidationError::RatingOutOfRange { value: -1 })
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(Rating::Likely.to_string(), "3: Likely");
    }
}
