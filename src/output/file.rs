//! Artifact kinds and their file conventions.

use std::fmt;

/// The three artifacts a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Text,
    Json,
    Pdf,
}

impl ArtifactKind {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Pdf => "pdf",
        }
    }

    /// Get MIME type for this kind.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
            Self::Pdf => "application/pdf",
        }
    }

    /// `base` with this kind's extension appended.
    pub fn filename(&self, base: &str) -> String {
        format!("{}.{}", base, self.extension())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
