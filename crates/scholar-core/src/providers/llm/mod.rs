pub mod openai;

pub use openai::OpenAIClient;

use crate::model::LlmResponse;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("provider response missing {0}")]
    MalformedResponse(&'static str),
}

/// Judge-facing model seam: plain text in, text out, plus a model-name
/// accessor. Any OpenAI-compatible client is substitutable; tests use mocks.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<LlmResponse, LlmError>;

    fn model_name(&self) -> &str;
}

/// A tool the generation model may invoke zero or more times. Whether and
/// when to call it is entirely the remote model's decision.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON schema for the tool arguments.
    pub parameters: Value,
}

/// One tool invocation requested by the model.
#[derive(Debug, Clone)]
pub struct ToolCallRequest {
    pub id: String,
    pub name: String,
    /// Parsed arguments object; an unparseable argument payload degrades to `{}`.
    pub arguments: Value,
}

/// Outcome of a single chat turn in the finder loop.
#[derive(Debug, Clone)]
pub enum ChatTurn {
    /// Final assistant text, returned verbatim.
    Text(String),
    /// The model asked for tools before answering. `message` is the raw
    /// assistant message to append to the conversation history.
    ToolCalls {
        message: Value,
        calls: Vec<ToolCallRequest>,
    },
}

/// Finder-facing seam: one chat-completion turn over an explicit message
/// history, with optional tool declarations.
#[async_trait]
pub trait ToolChat: Send + Sync {
    async fn chat(
        &self,
        messages: &[Value],
        tools: Option<&[ToolSpec]>,
    ) -> Result<ChatTurn, LlmError>;
}
