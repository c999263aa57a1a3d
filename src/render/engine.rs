//! Typst rendering engine.
//!
//! Writes Typst source to a temporary directory, invokes the `typst`
//! compiler and reads the resulting PDF back.

use std::fs;
use std::process::Command;
use tempfile::tempdir;
use tempfile::TempDir;

use super::common::sanitize_filename;
use super::{GeneratedDocument, GeneratorError};

pub const DEFAULT_TYPST_BIN: &str = "typst";
const SOURCE_FILENAME: &str = "book.typ";

/// Compiles Typst documents with an external `typst` binary.
#[derive(Debug, Clone)]
pub struct TypstRenderEngine {
    typst_bin: String,
}

impl TypstRenderEngine {
    pub fn new(typst_bin: impl Into<String>) -> Self {
        Self {
            typst_bin: typst_bin.into(),
        }
    }

    /// Render a Typst string to a PDF document.
    ///
    /// # Arguments
    /// * `typst_source` - The complete Typst document.
    /// * `output_name_base` - Base name for the PDF file, sanitized.
    pub fn render(
        &self,
        typst_source: &str,
        output_name_base: &str,
    ) -> Result<GeneratedDocument, GeneratorError> {
        let temp_dir = tempdir().map_err(GeneratorError::TempDir)?;
        let typ_path = temp_dir.path().join(SOURCE_FILENAME);

        fs::write(&typ_path, typst_source).map_err(GeneratorError::WriteTypst)?;

        let filename = format!("{}.pdf", sanitize_filename(output_name_base, "book"));
        let pdf = self.compile(&temp_dir, SOURCE_FILENAME, &filename)?;

        log::debug!("compiled {} ({} bytes)", filename, pdf.len());

        Ok(GeneratedDocument { filename, pdf })
    }

    fn compile(
        &self,
        temp_dir: &TempDir,
        typ_filename: &str,
        output_filename: &str,
    ) -> Result<Vec<u8>, GeneratorError> {
        let typ_path = temp_dir.path().join(typ_filename);
        let output_path = temp_dir.path().join(output_filename);

        let output = Command::new(&self.typst_bin)
            .arg("compile")
            .arg(&typ_path)
            .arg(&output_path)
            .current_dir(temp_dir.path())
            .output()
            .map_err(GeneratorError::TypstIo)?;

        if !output.status.success() {
            return Err(GeneratorError::TypstExit {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        fs::read(&output_path).map_err(GeneratorError::ReadPdf)
    }
}
