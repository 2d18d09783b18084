#![doc = r#"
csvxl — convert a CSV file into an Excel workbook with light normalization.

The pipeline is read → normalize → write:

1. **Load** the CSV (header row required) into an in-memory [`Table`].
2. **Normalize**: clean column names (trim, lowercase, spaces to `_`), fill
   missing values with empty strings, and coerce every column whose cells
   all look like dates into date-times. Coercion is all-or-nothing per column.
3. **Rename** columns from an optional `old:new,old2:new2` specification.
4. **Write** a single-sheet `.xlsx` workbook, atomically.

It powers the `csvxl` CLI and can be embedded in your own Rust applications.

Quick start
-----------
```rust,no_run
use std::path::Path;
use csvxl::{convert_csv_to_excel, ConvertParams};

fn main() -> csvxl::Result<()> {
    let params = ConvertParams {
        rename: Some("dob:date_of_birth".to_string()),
        ..ConvertParams::default()
    };
    let report = convert_csv_to_excel(
        Path::new("people.csv"),
        Path::new("people.xlsx"),
        &params,
    )?;
    println!("wrote {} rows, date columns: {:?}", report.rows, report.date_columns);
    Ok(())
}
```

Step by step
------------
```rust,no_run
use std::path::Path;
use csvxl::{load_csv, normalize, write_xlsx, RenameMapping};

fn main() -> csvxl::Result<()> {
    let table = load_csv(Path::new("people.csv"))?;
    let normalized = normalize(table, true);
    let (table, _applied) = RenameMapping::parse("full_name:Name")?.apply(normalized.table);
    write_xlsx(&table, Path::new("people.xlsx"))
}
```

Error handling
--------------
All public functions return `csvxl::Result<T>`; match on `csvxl::Error` to handle
specific cases.

```rust,no_run
use std::path::Path;
use csvxl::{convert_csv_to_excel, ConvertParams, Error};

fn main() {
    match convert_csv_to_excel(Path::new("in.csv"), Path::new("out.xlsx"), &ConvertParams::default()) {
        Ok(_) => {}
        Err(Error::NotFound { path }) => eprintln!("no such file: {}", path.display()),
        Err(Error::EmptyInput { .. }) => eprintln!("nothing to convert"),
        Err(other) => eprintln!("conversion failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — the one-call conversion entry point.
- [`core`] — normalization, date recognition, rename mapping, parameters.
- [`io`] — CSV loader and XLSX / JSON report writers.
- [`logging`] — CLI log setup and a capture layer for embedding.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

// Curated public API surface
pub use crate::core::normalize::{Normalized, clean_column_name, normalize};
pub use crate::core::params::ConvertParams;
pub use crate::core::rename::{AppliedRename, RenameMapping};
pub use error::{Error, Result};
pub use types::{Cell, Column, ColumnKind, Table};

pub use io::loader::load_csv;
pub use io::writers::report::{ConversionReport, write_report};
pub use io::writers::xlsx::write_xlsx;

pub use api::{convert_csv_to_excel, validate_output_path};
