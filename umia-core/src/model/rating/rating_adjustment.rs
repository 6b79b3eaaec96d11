use super::{Rating, RatingDelta};

/// outcome of applying a [`RatingDelta`] to a [`Rating`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingAdjustment {
    pub base: Rating,
    pub delta: RatingDelta,
    /// base + delta before clamping
    pub requested: i64,
    pub rating: Rating,
}

impl RatingAdjustment {
    pub fn is_clamped(&self) -> bool {
        self.requested != self.rating.value() as i64
    }
}
