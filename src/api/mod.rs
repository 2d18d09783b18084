//! High-level, ergonomic library API: convert a CSV file to an XLSX workbook
//! in one call. Prefer this entrypoint over the individual loader, normalizer
//! and writer modules when integrating csvxl.
use std::path::Path;

use tracing::{info, warn};

use crate::core::normalize::normalize;
use crate::core::params::ConvertParams;
use crate::core::rename::RenameMapping;
use crate::error::{Error, Result};
use crate::io::loader::load_csv;
use crate::io::writers::report::{ConversionReport, write_report};
use crate::io::writers::xlsx::write_xlsx;
use crate::types::ColumnKind;

/// Reject output paths whose extension is not exactly `xlsx`.
pub fn validate_output_path(output: &Path) -> Result<()> {
    match output.extension().and_then(|e| e.to_str()) {
        Some("xlsx") => Ok(()),
        _ => Err(Error::InvalidOutputExtension {
            path: output.to_path_buf(),
        }),
    }
}

/// Run the full pipeline: read `input`, normalize, rename, write `output`.
///
/// The output extension and the rename specification are both checked before
/// the input is opened, so neither mistake costs a read. On any error neither
/// the workbook nor the optional report is left at its destination.
pub fn convert_csv_to_excel(
    input: &Path,
    output: &Path,
    params: &ConvertParams,
) -> Result<ConversionReport> {
    validate_output_path(output)?;
    let mapping = match params.rename.as_deref() {
        Some(spec) => RenameMapping::parse(spec)?,
        None => RenameMapping::default(),
    };

    info!("Reading CSV file: {:?}", input);
    let table = load_csv(input)?;

    let normalized = normalize(table, params.parse_dates);

    let (table, renamed) = if mapping.is_empty() {
        (normalized.table, Vec::new())
    } else {
        info!("Renaming columns: {}", mapping);
        mapping.apply(normalized.table)
    };

    let report = ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rows: table.num_rows(),
        columns: table.column_names(),
        date_columns: table
            .columns()
            .iter()
            .filter(|c| c.kind() == ColumnKind::DateTime)
            .map(|c| c.name.clone())
            .collect(),
        renamed,
        collisions: normalized.collisions,
        converted_at: chrono::Utc::now().to_rfc3339(),
    };

    // Report first: a report failure leaves no workbook, and a workbook
    // failure removes the report.
    if let Some(report_path) = params.report.as_deref() {
        write_report(&report, report_path)?;
    }

    info!("Writing Excel file: {:?}", output);
    if let Err(e) = write_xlsx(&table, output) {
        if let Some(report_path) = params.report.as_deref() {
            if let Err(rm) = std::fs::remove_file(report_path) {
                warn!("Could not remove report {:?}: {}", report_path, rm);
            }
        }
        return Err(e);
    }

    info!("Conversion completed successfully!");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_extension_must_be_xlsx() {
        assert!(validate_output_path(Path::new("out/report.xlsx")).is_ok());
        for bad in ["report.csv", "report.XLSX", "report", ".xlsx", "report.xlsx.bak"] {
            assert!(
                matches!(
                    validate_output_path(Path::new(bad)),
                    Err(Error::InvalidOutputExtension { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn wrong_extension_rejected_before_reading() {
        let err = convert_csv_to_excel(
            Path::new("/definitely/not/here.csv"),
            Path::new("report.csv"),
            &ConvertParams::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidOutputExtension { .. }));
    }

    #[test]
    fn bad_rename_rejected_before_reading() {
        let params = ConvertParams {
            rename: Some("a-b,c:d".into()),
            ..ConvertParams::default()
        };
        let err = convert_csv_to_excel(
            Path::new("/definitely/not/here.csv"),
            Path::new("out.xlsx"),
            &params,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }
}
