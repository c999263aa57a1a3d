//! Chat-completions client for OpenAI-compatible services.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::{CompletionRequest, FunctionSpec, ModelClient, ModelError, ResponseFormat};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Connection settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

pub struct OpenAiClient {
    settings: OpenAiSettings,
    http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(settings: OpenAiSettings) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("course-book-generator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ModelError::ClientBuild)?;

        Ok(Self { settings, http })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ModelClient for OpenAiClient {
    async fn submit(&self, request: CompletionRequest) -> Result<String, ModelError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(ModelError::MissingApiKey)?;

        let body = ChatRequest::build(&self.settings.model, &request);
        log::debug!(
            "sending {} request ({} prompt chars)",
            request.kind,
            request.system.len() + request.user.len()
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(ModelError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ChatResponse = response.json().await.map_err(ModelError::Envelope)?;
        envelope.into_text()
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<[ToolDefinition<'a>; 1]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ToolDefinition<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: FunctionDefinition<'a>,
}

#[derive(Debug, Serialize)]
struct FunctionDefinition<'a> {
    name: &'a str,
    description: &'a str,
    parameters: &'a Value,
}

impl<'a> ChatRequest<'a> {
    pub(crate) fn build(model: &'a str, request: &'a CompletionRequest) -> Self {
        let response_format = match request.response_format {
            ResponseFormat::Json => Some(serde_json::json!({ "type": "json_object" })),
            ResponseFormat::Text => None,
        };

        let (tools, tool_choice) = match request.function {
            Some(ref function) => (
                Some([tool_definition(function)]),
                Some(serde_json::json!({
                    "type": "function",
                    "function": { "name": function.name }
                })),
            ),
            None => (None, None),
        };

        Self {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format,
            tools,
            tool_choice,
        }
    }
}

fn tool_definition(function: &FunctionSpec) -> ToolDefinition<'_> {
    ToolDefinition {
        kind: "function",
        function: FunctionDefinition {
            name: &function.name,
            description: &function.description,
            parameters: &function.parameters,
        },
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: ToolCallFunction,
}

#[derive(Debug, Deserialize)]
struct ToolCallFunction {
    #[serde(default)]
    arguments: String,
}

impl ChatResponse {
    /// Function-call arguments win over plain content; either may be non-JSON.
    pub(crate) fn into_text(self) -> Result<String, ModelError> {
        let message = self
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or(ModelError::EmptyResponse)?;

        let arguments = message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| call.function.arguments)
            .find(|args| !args.trim().is_empty());

        match arguments.or(message.content) {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ModelError::EmptyResponse),
        }
    }
}
