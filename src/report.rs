//! CSV export of simulation output.
//!
//! Reports are model output for analysis — trajectories and summary metrics
//! written as CSV files — as opposed to logging, which traces internal
//! behavior. Only writing is supported here; reading user data back in is a
//! presentation-layer concern.

use std::ffi::OsStr;
use std::fs::{create_dir_all, File};
use std::path::Path;

use csv::Writer;

use crate::error::EpirunError;
use crate::log::trace;
use crate::metrics::EpidemicMetrics;
use crate::trajectory::Trajectory;

// Checks that the path is a CSV and creates missing parent directories.
fn create_report_file(path_name: &str) -> Result<File, EpirunError> {
    let path = Path::new(path_name);
    match path.extension().and_then(OsStr::to_str) {
        Some("csv") => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    create_dir_all(parent)?;
                }
            }
            let file = File::create(path)?;
            Ok(file)
        }
        _ => Err(EpirunError::ReportError(
            "report output files must be CSVs".to_string(),
        )),
    }
}

/// Writes a trajectory as CSV: a `t` column followed by one column per
/// compartment letter, one row per recorded step.
///
/// # Errors
///
/// Returns an `EpirunError` if the path is not a `.csv` or writing fails.
pub fn write_trajectory(trajectory: &Trajectory, path: &str) -> Result<(), EpirunError> {
    let file = create_report_file(path)?;
    let mut writer = Writer::from_writer(file);

    let compartments = trajectory.topology().compartments();
    let mut header = vec!["t".to_string()];
    header.extend(compartments.iter().map(|c| c.letter().to_string()));
    writer.write_record(&header)?;

    for step in 0..trajectory.len() {
        let mut row = vec![trajectory.time(step).to_string()];
        for &compartment in compartments {
            row.push(trajectory.series(compartment).unwrap()[step].to_string());
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;
    trace!(
        "wrote {} trajectory ({} rows) to {path}",
        trajectory.topology(),
        trajectory.len()
    );
    Ok(())
}

/// Writes epidemic metrics as a single-row CSV with a header.
///
/// # Errors
///
/// Returns an `EpirunError` if the path is not a `.csv` or writing fails.
pub fn write_metrics(metrics: &EpidemicMetrics, path: &str) -> Result<(), EpirunError> {
    let file = create_report_file(path)?;
    let mut writer = Writer::from_writer(file);
    writer.serialize(metrics)?;
    writer.flush()?;
    Ok(())
}
