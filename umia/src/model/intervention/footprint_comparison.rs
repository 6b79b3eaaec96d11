use crate::model::impact::{ImpactMetric, ImpactValues};
use serde::Serialize;
use umia_core::model::table::CellTable;

/// expected footprint of one metric before and after an intervention, in
/// group units.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct MetricComparison {
    pub metric: ImpactMetric,
    pub baseline_daily: f64,
    pub intervention_daily: f64,
    pub baseline_annual: f64,
    pub intervention_annual: f64,
}

impl MetricComparison {
    /// daily change, negative when the intervention reduces the metric
    pub fn change(&self) -> f64 {
        self.intervention_daily - self.baseline_daily
    }

    /// daily change relative to baseline, absent for a zero baseline
    pub fn change_percent(&self) -> Option<f64> {
        (self.baseline_daily != 0.0).then(|| self.change() / self.baseline_daily * 100.0)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FootprintComparison {
    pub metrics: Vec<MetricComparison>,
}

impl FootprintComparison {
    pub fn get(&self, metric: ImpactMetric) -> Option<&MetricComparison> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}

/// impacts of one persona in one scenario before and after an intervention
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct CellComparison {
    pub baseline: ImpactValues,
    pub intervention: ImpactValues,
}

impl CellComparison {
    pub fn change(&self) -> ImpactValues {
        self.intervention - self.baseline
    }
}

pub type CellComparisonTable = CellTable<CellComparison>;
