//! Read-only access to exported files

mod local;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::Result;

pub use local::LocalFile;

/// Sentinel returned when a mime type or extension cannot be determined
pub const UNKNOWN: &str = "unknown";

/// Read-only view over a file produced by an exporter.
///
/// Every accessor queries the underlying storage again; nothing is cached.
/// Fallible accessors fail when the file disappeared after export.
pub trait ExportedFile {
    /// MIME type of the file, or [`UNKNOWN`]
    fn mime_type(&self) -> String;

    /// Extension without the leading dot, or [`UNKNOWN`]
    fn extension(&self) -> String;

    /// File name without its extension
    fn file_name(&self) -> String;

    /// Containing directory
    fn base_path(&self) -> PathBuf;

    /// Full path of the file
    fn path(&self) -> &Path;

    /// Size in bytes
    fn size(&self) -> Result<u64>;

    fn exists(&self) -> bool;

    fn is_file(&self) -> bool;

    fn is_directory(&self) -> bool;

    fn created(&self) -> Result<DateTime<Utc>>;

    fn modified(&self) -> Result<DateTime<Utc>>;

    /// Whole file content
    fn content(&self) -> Result<String>;
}
