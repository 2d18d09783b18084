//! CSV loader: reads a comma-separated file with a header row into a [`Table`].
use std::path::Path;

use tracing::{debug, info, warn};

use crate::core::normalize::dedupe_names;
use crate::error::{Error, Result};
use crate::types::{Cell, Column, Table};

/// Field values read as missing data rather than text.
pub const MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
    "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn to_cell(field: &str) -> Cell {
    if MISSING_TOKENS.contains(&field) {
        Cell::Missing
    } else {
        Cell::text(field)
    }
}

/// Load `path` into a table of raw text cells.
///
/// Rows shorter than the header are padded with [`Cell::Missing`]; rows
/// longer than the header are a parse error. Blank header fields are named
/// `Unnamed: <index>`, and repeated header fields get a `.N` suffix
/// (`a, a` loads as `a, a.1`).
pub fn load_csv(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    // The handle is closed as soon as the bytes are in memory.
    let bytes = std::fs::read(path).map_err(|e| Error::parse(path, e))?;
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::parse(path, e))?
        .iter()
        .enumerate()
        .map(|(idx, h)| {
            if h.is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                h.to_string()
            }
        })
        .collect();
    if headers.is_empty() {
        return Err(Error::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    for name in dedupe_names(&mut headers) {
        warn!("Duplicate CSV header `{}` renamed with a numeric suffix", name);
    }
    debug!("CSV header: {:?}", headers);

    let width = headers.len();
    let mut columns: Vec<Vec<Cell>> = vec![Vec::new(); width];
    for record in reader.records() {
        let record = record.map_err(|e| Error::parse(path, e))?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(Error::parse(
                path,
                format!(
                    "Error tokenizing data: expected {} fields in line {}, saw {}",
                    width,
                    line,
                    record.len()
                ),
            ));
        }
        for (idx, cells) in columns.iter_mut().enumerate() {
            cells.push(record.get(idx).map(to_cell).unwrap_or(Cell::Missing));
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(columns)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    let table = Table::from_columns(columns).ok_or_else(|| {
        Error::parse(path, "columns of unequal length after reading")
    })?;

    info!(
        "Loaded {} rows x {} columns",
        table.num_rows(),
        table.num_columns()
    );
    Ok(table)
}
