use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use tracing::info;

use crate::error::{Error, Result};
use crate::io::writers::write_atomic;
use crate::types::{Cell, Column, Table};

pub const SHEET_NAME: &str = "Sheet1";
pub const DATETIME_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// True when every non-empty text cell is a finite number and at least one exists.
fn is_numeric_column(column: &Column) -> bool {
    let mut any = false;
    for cell in &column.cells {
        match cell {
            Cell::Missing => {}
            Cell::Text(s) if s.is_empty() => {}
            Cell::Text(s) => match s.parse::<f64>() {
                Ok(v) if v.is_finite() => any = true,
                _ => return false,
            },
            Cell::DateTime(_) => return false,
        }
    }
    any
}

/// Lay out `table` on a single worksheet: header in row 0, one row per table row.
pub fn build_workbook(table: &Table) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let datetime_format = Format::new().set_num_format(DATETIME_NUM_FORMAT);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col_idx, column) in table.columns().iter().enumerate() {
        let col = u16::try_from(col_idx).map_err(|_| XlsxError::RowColumnLimitError)?;
        worksheet.write_string_with_format(0, col, column.name.as_str(), &header_format)?;

        let numeric = is_numeric_column(column);
        for (row_idx, cell) in column.cells.iter().enumerate() {
            let row = u32::try_from(row_idx + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
            match cell {
                Cell::Missing => {}
                Cell::Text(s) if s.is_empty() => {}
                Cell::Text(s) if numeric => match s.parse::<f64>() {
                    Ok(v) => {
                        worksheet.write_number(row, col, v)?;
                    }
                    Err(_) => {
                        worksheet.write_string(row, col, s.as_str())?;
                    }
                },
                Cell::Text(s) => {
                    worksheet.write_string(row, col, s.as_str())?;
                }
                Cell::DateTime(dt) => {
                    worksheet.write_datetime_with_format(row, col, dt, &datetime_format)?;
                }
            }
        }
    }

    Ok(workbook)
}

/// Serialize `table` to an `.xlsx` file at `output`, replacing any existing file.
pub fn write_xlsx(table: &Table, output: &Path) -> Result<()> {
    let mut workbook = build_workbook(table).map_err(|e| Error::write(output, e))?;
    write_atomic(output, |file| {
        workbook
            .save_to_writer(file)
            .map_err(|e| Error::write(output, e))
    })?;
    info!(
        "Wrote {} rows x {} columns to {:?}",
        table.num_rows(),
        table.num_columns(),
        output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_detection_skips_blanks() {
        let col = Column::new("n", vec![Cell::text("1"), Cell::text(""), Cell::text("2.5")]);
        assert!(is_numeric_column(&col));
        let mixed = Column::new("m", vec![Cell::text("1"), Cell::text("x")]);
        assert!(!is_numeric_column(&mixed));
        let blank = Column::new("b", vec![Cell::text("")]);
        assert!(!is_numeric_column(&blank));
        let inf = Column::new("i", vec![Cell::text("inf")]);
        assert!(!is_numeric_column(&inf));
    }

    #[test]
    fn writes_file_and_no_temp_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.xlsx");
        let table = Table::from_columns(vec![Column::new("a", vec![Cell::text("x")])]).unwrap();
        write_xlsx(&table, &out).unwrap();
        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(&bytes[..2], b"PK");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
