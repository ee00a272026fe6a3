//! Exported file on the local filesystem

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::error::{ExportError, Result};

use super::{ExportedFile, UNKNOWN};

/// Handle over a file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn metadata(&self) -> Result<Metadata> {
        fs::metadata(&self.path).map_err(|e| ExportError::io(&self.path, e))
    }
}

impl ExportedFile for LocalFile {
    fn mime_type(&self) -> String {
        if !self.path.is_file() {
            return UNKNOWN.to_string();
        }
        mime_guess::from_path(&self.path)
            .first()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn extension(&self) -> String {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn file_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn base_path(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn size(&self) -> Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn is_file(&self) -> bool {
        self.path.is_file()
    }

    fn is_directory(&self) -> bool {
        self.path.is_dir()
    }

    fn created(&self) -> Result<DateTime<Utc>> {
        let meta = self.metadata()?;
        let time = created_time(&meta).map_err(|e| ExportError::io(&self.path, e))?;
        Ok(DateTime::<Utc>::from(time))
    }

    fn modified(&self) -> Result<DateTime<Utc>> {
        let time = self
            .metadata()?
            .modified()
            .map_err(|e| ExportError::io(&self.path, e))?;
        Ok(DateTime::<Utc>::from(time))
    }

    fn content(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| ExportError::io(&self.path, e))
    }
}

/// Birth time, or the inode change time where the filesystem has no birth time
fn created_time(meta: &Metadata) -> std::io::Result<SystemTime> {
    match meta.created() {
        Ok(time) => Ok(time),
        #[cfg(unix)]
        Err(_) => {
            use std::os::unix::fs::MetadataExt;
            use std::time::{Duration, UNIX_EPOCH};

            let secs = u64::try_from(meta.ctime()).unwrap_or(0);
            let nanos = u32::try_from(meta.ctime_nsec()).unwrap_or(0);
            Ok(UNIX_EPOCH + Duration::new(secs, nanos))
        }
        #[cfg(not(unix))]
        Err(e) => Err(e),
    }
}
