use crate::model::table::DeltaTable;

/// a proposed measure, expressed as rating adjustments for every persona
/// in every scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct Intervention {
    pub name: String,
    pub acronym: Option<String>,
    pub description: String,
    pub deltas: DeltaTable,
}

impl Intervention {
    /// short name used in scenario variant labels
    pub fn short_name(&self) -> &str {
        self.acronym.as_deref().unwrap_or(&self.name)
    }
}
