use umia_core::model::{mode::ModeValues, table::{CellKey, CellTable}};

/// km per canonical mode for every persona in every scenario
pub type ModalDistanceTable = CellTable<ModeValues<f64>>;

/// result of resolving a rating table into distances.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalDistances {
    pub table: ModalDistanceTable,
    /// cells whose ratings were all 0. their distances are all 0.
    pub zero_rows: Vec<CellKey>,
}
