//! Model client adapter.
//!
//! The pipeline only sees [`ModelClient`]: submit a request, get raw text
//! back. [`OpenAiClient`] talks to an OpenAI-compatible chat-completions
//! endpoint; tests substitute their own implementation.

pub mod openai;

pub use openai::{OpenAiClient, OpenAiSettings};

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::prompts::Prompt;

/// Errors raised by a model client. Callers degrade on every variant.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no API key configured for the model service")]
    MissingApiKey,
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request to model service failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("model service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode model service response: {0}")]
    Envelope(#[source] reqwest::Error),
    #[error("model service returned no text")]
    EmptyResponse,
}

/// What a request is for; drives logging and lets test doubles route replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    Structure,
    Content,
    Metadata,
    Quiz,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Content => "content",
            Self::Metadata => "metadata",
            Self::Quiz => "quiz",
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Text,
    Json,
}

/// A function schema the model is forced to call.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// One call to the model service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub kind: PromptKind,
    pub system: String,
    pub user: String,
    pub response_format: ResponseFormat,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub function: Option<FunctionSpec>,
}

impl CompletionRequest {
    pub fn new(kind: PromptKind, prompt: Prompt) -> Self {
        Self {
            kind,
            system: prompt.system,
            user: prompt.user,
            response_format: ResponseFormat::Text,
            temperature: 0.7,
            max_tokens: None,
            function: None,
        }
    }

    /// Ask for a bare JSON object as the reply.
    pub fn json(mut self) -> Self {
        self.response_format = ResponseFormat::Json;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Force a call to `function`; its arguments come back as the raw text.
    pub fn function(mut self, function: FunctionSpec) -> Self {
        self.function = Some(function);
        self
    }
}

/// Anything that can turn a request into raw model text.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn submit(&self, request: CompletionRequest) -> Result<String, ModelError>;
}
