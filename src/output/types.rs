//! Metadata for written artifacts.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use super::file::ArtifactKind;

/// A file the run has written; its `Display` form is the summary log line.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactMetadata {
    /// Filename with extension
    pub filename: String,
    pub path: PathBuf,
    pub kind: ArtifactKind,
    /// File size in bytes
    pub size_bytes: usize,
    pub created_at: DateTime<Local>,
}

impl ArtifactMetadata {
    /// Create new artifact metadata with current timestamp.
    pub fn new(path: impl Into<PathBuf>, kind: ArtifactKind, size_bytes: usize) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            filename,
            path,
            kind,
            size_bytes,
            created_at: Local::now(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }
}

impl fmt::Display for ArtifactMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, {}, {} bytes, written {}]",
            self.path.display(),
            self.kind,
            self.mime_type(),
            self.size_bytes,
            self.created_at.format("%H:%M:%S")
        )
    }
}
