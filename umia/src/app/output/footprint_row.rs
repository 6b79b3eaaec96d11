use crate::model::{
    assessment::{Evaluation, Variant},
    impact::ImpactMetric,
};
use serde::{Deserialize, Serialize};

/// expected footprint of one metric under one variant, in group units
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FootprintRow {
    pub variant: String,
    pub metric: ImpactMetric,
    pub unit: String,
    pub daily: f64,
    pub annual: f64,
}

impl FootprintRow {
    pub fn rows(variant: &Variant, evaluation: &Evaluation) -> Vec<Self> {
        ImpactMetric::ALL
            .iter()
            .map(|metric| FootprintRow {
                variant: variant.to_string(),
                metric: *metric,
                unit: metric.group_unit().to_string(),
                daily: evaluation.footprint.daily.get(*metric),
                annual: evaluation.footprint.annual.get(*metric),
            })
            .collect()
    }
}
