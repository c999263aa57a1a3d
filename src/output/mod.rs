//! Artifact files: kinds, metadata and the writer.

pub mod file;
pub mod types;
pub mod writer;

pub use file::ArtifactKind;
pub use types::ArtifactMetadata;
pub use writer::{load_course_json, ArtifactWriter, BOOK_BASENAME, CURRICULUM_BASENAME};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize course: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to parse course JSON in {}: {source}", .path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
