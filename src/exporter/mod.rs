//! Exporters turning tables into files

mod csv;

use crate::config::ExportOptions;
use crate::error::Result;
use crate::file::{ExportedFile, LocalFile};
use crate::model::{Row, Table};

pub use self::csv::{CsvWriter, WriteStats};

/// Fluent export pipeline: set headers, optionally add an index, export.
pub trait Exporter {
    /// Handle type returned by [`Exporter::export`]
    type File: ExportedFile;

    /// Replace the header labels. The last call wins.
    fn with_headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>;

    /// Prepend an index column. Requires headers; see [`Table::prepend_index`].
    fn with_index(&mut self) -> Result<&mut Self>;

    /// Write the current state to a new file
    fn export(&self) -> Result<Self::File>;
}

/// Builds a CSV file from in-memory rows.
///
/// ```no_run
/// use tabexport::{CsvExporter, ExportedFile, Exporter};
///
/// let file = CsvExporter::new(vec![vec!["Value 1", "Value 2"]])
///     .with_headers(["Header 1", "Header 2"])
///     .with_index()?
///     .export()?;
/// println!("{}", file.path().display());
/// # Ok::<(), tabexport::ExportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvExporter {
    table: Table,
    options: ExportOptions,
}

impl CsvExporter {
    /// Create an exporter over `rows` with default options
    pub fn new<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        Self::with_options(rows, ExportOptions::default())
    }

    /// Create an exporter over `rows` with custom options
    pub fn with_options<I, R>(rows: I, options: ExportOptions) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        Self {
            table: Table::new(rows.into_iter().map(Into::into).collect()),
            options,
        }
    }

    /// Current header labels
    pub fn headers(&self) -> &[String] {
        self.table.header_labels()
    }

    /// Current data rows
    pub fn rows(&self) -> &[Row] {
        &self.table.content
    }
}

impl Exporter for CsvExporter {
    type File = LocalFile;

    fn with_headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table
            .set_headers(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Calling this twice stacks two index columns.
    fn with_index(&mut self) -> Result<&mut Self> {
        self.table.prepend_index(&self.options.index_label)?;
        Ok(self)
    }

    fn export(&self) -> Result<LocalFile> {
        CsvWriter::new(&self.options).write_rows(self.table.records())
    }
}
