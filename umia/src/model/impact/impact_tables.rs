use super::ImpactValues;
use umia_core::model::table::CellTable;

pub type ImpactTable = CellTable<ImpactValues>;

/// impacts of every persona in every scenario, per person and scaled to
/// the population group each persona represents.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactTables {
    pub individual: ImpactTable,
    pub group: ImpactTable,
}
