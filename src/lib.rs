//! tabexport - Export tabular data to CSV files
//!
//! Rows of scalar cells are optionally prefixed with a header row and a
//! generated index column, then written to a uniquely named file in the
//! system temp directory. The returned handle exposes read-only metadata.

pub mod config;
pub mod error;
pub mod exporter;
pub mod file;
pub mod model;
pub mod naming;

pub use config::{BlankRowPolicy, ExportOptions};
pub use error::{ExportError, Result};
pub use exporter::{CsvExporter, CsvWriter, Exporter};
pub use file::{ExportedFile, LocalFile};
pub use model::{CellValue, Row, Table};
