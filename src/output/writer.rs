//! Writes artifacts into the output directory and loads saved courses.

use std::fs;
use std::path::{Path, PathBuf};

use super::file::ArtifactKind;
use super::types::ArtifactMetadata;
use super::ArtifactError;
use crate::course::Course;
use crate::render::GeneratedDocument;

pub const CURRICULUM_BASENAME: &str = "python_data_for_ai_curriculum";
pub const BOOK_BASENAME: &str = "python_data_for_ai_book";

#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// The plain-text book as `<base>.txt`.
    pub fn write_text(&self, base: &str, text: &str) -> Result<ArtifactMetadata, ArtifactError> {
        self.write(&ArtifactKind::Text.filename(base), ArtifactKind::Text, text.as_bytes())
    }

    /// The course tree as pretty-printed `<base>.json`.
    pub fn write_json(&self, base: &str, course: &Course) -> Result<ArtifactMetadata, ArtifactError> {
        let json = serde_json::to_string_pretty(course).map_err(ArtifactError::Serialize)?;
        self.write(&ArtifactKind::Json.filename(base), ArtifactKind::Json, json.as_bytes())
    }

    pub fn write_pdf(&self, document: &GeneratedDocument) -> Result<ArtifactMetadata, ArtifactError> {
        self.write(&document.filename, ArtifactKind::Pdf, &document.pdf)
    }

    fn write(
        &self,
        filename: &str,
        kind: ArtifactKind,
        bytes: &[u8],
    ) -> Result<ArtifactMetadata, ArtifactError> {
        fs::create_dir_all(&self.dir).map_err(|source| ArtifactError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(filename);
        fs::write(&path, bytes).map_err(|source| ArtifactError::Write {
            path: path.clone(),
            source,
        })?;

        log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(ArtifactMetadata::new(path, kind, bytes.len()))
    }
}

/// Reads a course previously saved by [`ArtifactWriter::write_json`].
pub fn load_course_json(path: &Path) -> Result<Course, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}
