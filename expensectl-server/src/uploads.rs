//! Upload storage - flat directory of client files
//!
//! Files are written as-is under a derived name: the part of the original
//! name before its first `.` followed by the original extension, so
//! `photo.backup.png` lands as `photo.png`. Same derived name overwrites.

use std::io;
use std::path::{Path, PathBuf};

/// Default uploads directory, relative to the working directory
pub const DEFAULT_UPLOADS_DIR: &str = "uploads";

/// Upload directory handle
#[derive(Debug, Clone)]
pub struct UploadStore {
    root_dir: PathBuf,
}

impl UploadStore {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Create the uploads directory if it is missing.
    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root_dir).await
    }

    /// Destination path for a client-supplied filename.
    ///
    /// Returns None when the name derives to nothing usable.
    pub fn destination(&self, original_name: &str) -> Option<PathBuf> {
        derive_filename(original_name).map(|name| self.root_dir.join(name))
    }

    /// Write `contents` under the derived name, replacing any existing file.
    pub async fn save(&self, original_name: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.destination(original_name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot derive a filename from '{}'", original_name),
            )
        })?;

        tokio::fs::write(&path, contents).await?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "upload stored");
        Ok(path)
    }
}

impl Default for UploadStore {
    fn default() -> Self {
        Self::new(DEFAULT_UPLOADS_DIR)
    }
}

/// Derive the stored filename from the client's original filename.
///
/// Directory components are discarded first so the result is always a bare
/// file name. Returns None for names that reduce to nothing, `.` or `..`.
pub fn derive_filename(original_name: &str) -> Option<String> {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);

    let stem = base.split('.').next().unwrap_or("");
    let derived = format!("{}{}", stem, extension(base));

    match derived.as_str() {
        "" | "." | ".." => None,
        _ => Some(derived),
    }
}

/// Extension including its dot, taken from the last `.` of a file name.
///
/// Leading dots do not start an extension (`.env` has none), and a trailing
/// dot is an extension of its own (`notes.` gives `.`).
fn extension(base: &str) -> &str {
    let leading_dots = base.len() - base.trim_start_matches('.').len();
    match base.rfind('.') {
        Some(idx) if idx >= leading_dots => &base[idx..],
        _ => "",
    }
}
