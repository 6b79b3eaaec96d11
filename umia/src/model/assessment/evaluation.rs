use crate::model::{
    aggregate::{ComparativeStatistics, ExpectedFootprint},
    impact::{ImpactTables, ImpactValues},
    mode_share::ModalDistanceTable,
};
use umia_core::model::table::{CellKey, RatingTable};

/// all results computed from one rating table.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub ratings: RatingTable,
    pub distances: ModalDistanceTable,
    pub impacts: ImpactTables,
    /// group totals indexed by scenario
    pub scenario_totals: Vec<ImpactValues>,
    pub footprint: ExpectedFootprint,
    pub statistics: Option<ComparativeStatistics>,
    pub zero_rows: Vec<CellKey>,
}
