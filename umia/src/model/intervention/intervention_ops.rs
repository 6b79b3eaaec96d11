use super::{
    AdjustedRatings, CellComparison, CellComparisonTable, ClampEvent, FootprintComparison,
    MetricComparison,
};
use crate::model::{
    aggregate::ExpectedFootprint,
    impact::{ImpactMetric, ImpactTable},
};
use umia_core::model::{
    rating::ModeRatings,
    table::{DeltaTable, RatingTable},
    validation::ValidationError,
};

/// applies rating adjustments cell by cell, clamping each result to [0, 4].
/// every clamped rating is recorded.
pub fn adjust_ratings(
    ratings: &RatingTable,
    deltas: &DeltaTable,
) -> Result<AdjustedRatings, ValidationError> {
    let mut clamped = vec![];
    let adjusted = ratings.zip_with(deltas, |key, row, delta_row| {
        ModeRatings::from_fn(|mode| {
            let adjustment = row[mode].adjust(delta_row[mode]);
            if adjustment.is_clamped() {
                clamped.push(ClampEvent {
                    cell: *key,
                    mode,
                    adjustment,
                });
            }
            adjustment.rating
        })
    })?;
    Ok(AdjustedRatings {
        ratings: adjusted,
        clamped,
    })
}

/// expected footprints of each metric before and after
pub fn compare_footprints(
    baseline: &ExpectedFootprint,
    intervention: &ExpectedFootprint,
) -> FootprintComparison {
    let metrics = ImpactMetric::ALL
        .iter()
        .map(|metric| MetricComparison {
            metric: *metric,
            baseline_daily: baseline.daily.get(*metric),
            intervention_daily: intervention.daily.get(*metric),
            baseline_annual: baseline.annual.get(*metric),
            intervention_annual: intervention.annual.get(*metric),
        })
        .collect();
    FootprintComparison { metrics }
}

/// pairs the impact tables before and after cell by cell
pub fn compare_cells(
    baseline: &ImpactTable,
    intervention: &ImpactTable,
) -> Result<CellComparisonTable, ValidationError> {
    baseline.zip_with(intervention, |_, before, after| CellComparison {
        baseline: *before,
        intervention: *after,
    })
}
