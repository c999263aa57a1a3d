//! Runtime configuration from the environment (and `.env`).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::llm::openai::{OpenAiSettings, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::render::engine::DEFAULT_TYPST_BIN;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a whole number of seconds, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must not be zero")]
    Zero { name: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookConfig {
    pub openai: OpenAiSettings,
    pub output_dir: PathBuf,
    pub typst_bin: String,
    /// Saved course JSON to re-render instead of generating.
    pub render_from: Option<PathBuf>,
}

impl BookConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let timeout_secs = match get("OPENAI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                    name: "OPENAI_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Zero {
                        name: "OPENAI_TIMEOUT_SECS",
                    });
                }
                secs
            }
            None => DEFAULT_TIMEOUT_SECS,
        };

        let openai = OpenAiSettings {
            api_key: get("OPENAI_API_KEY"),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            openai,
            output_dir: get("BOOK_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            typst_bin: get("TYPST_BIN").unwrap_or_else(|| DEFAULT_TYPST_BIN.to_string()),
            render_from: get("BOOK_RENDER_FROM").map(PathBuf::from),
        })
    }
}
