mod rating;
mod rating_adjustment;
mod rating_delta;

pub use rating::Rating;
pub use rating_adjustment::RatingAdjustment;
pub use rating_delta::RatingDelta;

use crate::model::mode::RawModeValues;

/// the 13 ratings of one persona in one scenario
pub type ModeRatings = RawModeValues<Rating>;
/// the 13 rating adjustments of one persona in one scenario
pub type ModeDeltas = RawModeValues<RatingDelta>;
