//! Unique file names in the output directory

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Generate a random file name: `<prefix><uuid><extension>`
pub fn random_file_name(prefix: &str, extension: &str) -> String {
    format!("{}{}{}", prefix, Uuid::new_v4().simple(), extension)
}

/// Place `file_name` directly inside `dir`
pub fn temp_file_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(file_name)
}
