use super::{ChatTurn, LlmClient, LlmError, ToolCallRequest, ToolChat, ToolSpec};
use crate::config::ApiKey;
use crate::model::LlmResponse;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Chat-completion client for any OpenAI-compatible endpoint (OpenRouter by
/// default). One instance per model identifier; the same struct backs both
/// the finder (tool-calling turns) and the judge (plain completions).
pub struct OpenAIClient {
    pub model: String,
    api_key: ApiKey,
    base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    client: reqwest::Client,
}

impl OpenAIClient {
    pub fn new(
        model: String,
        api_key: ApiKey,
        base_url: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model,
            api_key,
            base_url: base_url.into(),
            temperature,
            max_tokens,
            client: reqwest::Client::new(),
        }
    }

    async fn post_chat(&self, body: &Value) -> Result<Value, LlmError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.json().await?)
    }

    fn base_body(&self, messages: &[Value]) -> Value {
        json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }
}

fn tool_wire(spec: &ToolSpec) -> Value {
    json!({
        "type": "function",
        "function": {
            "name": spec.name,
            "description": spec.description,
            "parameters": spec.parameters,
        }
    })
}

fn parse_tool_calls(message: &Value) -> Option<Vec<ToolCallRequest>> {
    let entries = message.get("tool_calls")?.as_array()?;
    if entries.is_empty() {
        return None;
    }
    let calls = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let id = entry
                .pointer("/id")
                .and_then(Value::as_str)
                .map(ToString::to_string)
                .unwrap_or_else(|| format!("call-{i}"));
            let name = entry
                .pointer("/function/name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            // Arguments arrive as a JSON-encoded string; bad payloads degrade
            // to an empty object rather than failing the turn.
            let arguments = entry
                .pointer("/function/arguments")
                .and_then(Value::as_str)
                .and_then(|raw| serde_json::from_str(raw).ok())
                .unwrap_or_else(|| json!({}));
            ToolCallRequest {
                id,
                name,
                arguments,
            }
        })
        .collect();
    Some(calls)
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(
        &self,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<LlmResponse, LlmError> {
        let mut messages = Vec::new();
        if let Some(system) = system {
            messages.push(json!({ "role": "system", "content": system }));
        }
        messages.push(json!({ "role": "user", "content": prompt }));

        let body = self.base_body(&messages);
        let reply = self.post_chat(&body).await?;

        let text = reply
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or(LlmError::MalformedResponse("choices[0].message.content"))?
            .to_string();

        Ok(LlmResponse {
            text,
            model: self.model.clone(),
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ToolChat for OpenAIClient {
    async fn chat(
        &self,
        messages: &[Value],
        tools: Option<&[ToolSpec]>,
    ) -> Result<ChatTurn, LlmError> {
        let mut body = self.base_body(messages);
        if let Some(tools) = tools {
            if !tools.is_empty() {
                body["tools"] = Value::Array(tools.iter().map(tool_wire).collect());
                body["tool_choice"] = json!("auto");
            }
        }

        let reply = self.post_chat(&body).await?;
        let message = reply
            .pointer("/choices/0/message")
            .ok_or(LlmError::MalformedResponse("choices[0].message"))?;

        if let Some(calls) = parse_tool_calls(message) {
            return Ok(ChatTurn::ToolCalls {
                message: message.clone(),
                calls,
            });
        }

        let text = message
            .get("content")
            .and_then(Value::as_str)
            .ok_or(LlmError::MalformedResponse("choices[0].message.content"))?
            .to_string();
        Ok(ChatTurn::Text(text))
    }
}
