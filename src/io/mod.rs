//! I/O layer: the CSV `loader` and the `writers` for the XLSX workbook and
//! the JSON conversion report.
pub mod loader;
pub use loader::load_csv;

pub mod writers;
pub use writers::report::{ConversionReport, write_report};
pub use writers::xlsx::write_xlsx;
