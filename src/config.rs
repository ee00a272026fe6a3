//! Configuration handling for table export

use std::path::PathBuf;

/// Default prefix for generated file names
pub const DEFAULT_PREFIX: &str = "booknetic-";
/// Default extension for generated file names
pub const DEFAULT_EXTENSION: &str = ".csv";
/// Default label for the generated index column
pub const DEFAULT_INDEX_LABEL: &str = "#";

/// Rule deciding which rows are left out of the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlankRowPolicy {
    /// Skip rows whose every cell is falsy (null, false, 0, 0.0, "" or "0")
    #[default]
    Falsy,
    /// Skip rows whose every cell is null or an empty string
    Empty,
}

impl std::str::FromStr for BlankRowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "falsy" => Ok(BlankRowPolicy::Falsy),
            "empty" => Ok(BlankRowPolicy::Empty),
            _ => Err(format!("Unknown blank row policy: {}", s)),
        }
    }
}

/// Configuration for export operations
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Prepended to the unique part of the file name
    pub prefix: String,
    /// Appended to the unique part of the file name, including the dot
    pub extension: String,
    /// Output directory; the OS temp directory when unset
    pub directory: Option<PathBuf>,
    /// Header label of the index column
    pub index_label: String,
    /// Which rows count as blank and get skipped
    pub blank_rows: BlankRowPolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            directory: None,
            index_label: DEFAULT_INDEX_LABEL.to_string(),
            blank_rows: BlankRowPolicy::default(),
        }
    }
}

impl ExportOptions {
    /// Set the file name prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the file name extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Write into a specific directory instead of the OS temp directory
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Set the index column label
    pub fn with_index_label(mut self, label: impl Into<String>) -> Self {
        self.index_label = label.into();
        self
    }

    /// Set the blank row policy
    pub fn with_blank_rows(mut self, policy: BlankRowPolicy) -> Self {
        self.blank_rows = policy;
        self
    }

    /// Directory that exported files are placed in
    pub fn output_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(std::env::temp_dir)
    }
}
