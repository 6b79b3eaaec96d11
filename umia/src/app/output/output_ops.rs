use super::{ComparisonRow, FootprintRow, ImpactRow, ModalDistanceRow, Summary};
use crate::{app::AppError, model::assessment::Assessment};
use serde::Serialize;
use std::{fs::File, io::BufWriter, path::Path};
use umia_core::model::session::Session;

pub const MODAL_DISTANCES_FILENAME: &str = "modal_distances.csv";
pub const IMPACTS_FILENAME: &str = "impacts.csv";
pub const FOOTPRINTS_FILENAME: &str = "footprints.csv";
pub const COMPARISON_FILENAME: &str = "intervention_comparison.csv";
pub const SUMMARY_FILENAME: &str = "summary.json";

/// writes all result tables and the summary into a directory, creating it
/// when missing. the comparison table is only written when the session has
/// interventions.
pub fn write_outputs(
    directory: &Path,
    session: &Session,
    assessment: &Assessment,
) -> Result<(), AppError> {
    std::fs::create_dir_all(directory)?;

    let mut distance_rows = vec![];
    let mut impact_rows = vec![];
    let mut footprint_rows = vec![];
    for (variant, evaluation) in assessment.evaluations() {
        distance_rows.extend(ModalDistanceRow::rows(session, &variant, evaluation));
        impact_rows.extend(ImpactRow::rows(session, &variant, evaluation));
        footprint_rows.extend(FootprintRow::rows(&variant, evaluation));
    }
    write_csv(&directory.join(MODAL_DISTANCES_FILENAME), &distance_rows)?;
    write_csv(&directory.join(IMPACTS_FILENAME), &impact_rows)?;
    write_csv(&directory.join(FOOTPRINTS_FILENAME), &footprint_rows)?;

    if !assessment.interventions.is_empty() {
        let comparison_rows = assessment
            .interventions
            .iter()
            .flat_map(|o| ComparisonRow::rows(session, o))
            .collect::<Vec<_>>();
        write_csv(&directory.join(COMPARISON_FILENAME), &comparison_rows)?;
    }

    let summary_path = directory.join(SUMMARY_FILENAME);
    let writer = BufWriter::new(File::create(&summary_path)?);
    serde_json::to_writer_pretty(writer, &Summary::new(session, assessment))?;
    log::info!("wrote results to {}", directory.display());
    Ok(())
}

/// writes rows with a header line taken from the row fields
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows.iter() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
