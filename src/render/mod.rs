//! Renderers for the assembled course.
//!
//! - `text` - plain-text curriculum
//! - `typst` - Typst source for the PDF book
//! - `engine` - compiles Typst source into a PDF with the `typst` CLI

pub mod common;
pub mod engine;
pub mod text;
pub mod typst;

pub use common::format_generated_date;
pub use engine::TypstRenderEngine;
pub use text::render_course_text;
pub use typst::BookTypesetter;

use thiserror::Error;

/// Errors that can occur while producing the PDF.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteTypst(#[source] std::io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] std::io::Error),
    #[error("Typst CLI exited with status {code}: {stderr}")]
    TypstExit { code: i32, stderr: String },
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

/// A compiled PDF and the filename it should be saved under.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
}
