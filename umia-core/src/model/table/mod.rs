mod cell_key;
mod cell_table;

pub use cell_key::CellKey;
pub use cell_table::CellTable;

use crate::model::rating::{ModeDeltas, ModeRatings};

/// mode ratings of every persona in every scenario
pub type RatingTable = CellTable<ModeRatings>;
/// intervention adjustments of every persona in every scenario
pub type DeltaTable = CellTable<ModeDeltas>;
