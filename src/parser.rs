//! Response parser.
//!
//! Model replies are decoded strictly with `serde_json`. Anything that does
//! not decode, and any failed model call, degrades to a caller-supplied
//! default so a single bad section never stops the book.

use serde::de::DeserializeOwned;

use crate::llm::ModelError;

/// Outcome of decoding one model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    Decoded(T),
    /// The default was substituted; `reason` is what was logged.
    Defaulted { value: T, reason: String },
}

impl<T> Parsed<T> {
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Decoded(value) => value,
            Self::Defaulted { value, .. } => value,
        }
    }

    fn degrade(value: T, section: &str, reason: String) -> Self {
        log::warn!("⚠️ {} generation failed: {}", section, reason);
        Self::Defaulted { value, reason }
    }
}

/// Decode `raw` as `T`, or return `default` with a warning.
pub fn parse_or_default<T: DeserializeOwned>(raw: &str, default: T, section: &str) -> Parsed<T> {
    match serde_json::from_str::<T>(raw) {
        Ok(value) => Parsed::Decoded(value),
        Err(err) => Parsed::degrade(default, section, format!("invalid JSON: {}", err)),
    }
}

/// Fold both failure modes of a model call into the same degrade path.
pub fn resolve<T: DeserializeOwned>(
    reply: Result<String, ModelError>,
    default: T,
    section: &str,
) -> Parsed<T> {
    match reply {
        Ok(raw) => parse_or_default(&raw, default, section),
        Err(err) => Parsed::degrade(default, section, err.to_string()),
    }
}
