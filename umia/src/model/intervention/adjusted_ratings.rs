use umia_core::model::{
    mode::RawMode,
    rating::RatingAdjustment,
    table::{CellKey, RatingTable},
};

/// a rating whose adjustment was clamped to the rating scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClampEvent {
    pub cell: CellKey,
    pub mode: RawMode,
    pub adjustment: RatingAdjustment,
}

/// ratings after applying an intervention
#[derive(Clone, Debug, PartialEq)]
pub struct AdjustedRatings {
    pub ratings: RatingTable,
    pub clamped: Vec<ClampEvent>,
}
