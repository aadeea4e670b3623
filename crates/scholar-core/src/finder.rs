//! Researcher finder: topic in, raw model text out.
//!
//! The finder owns the fixed instruction prompt and the local half of the
//! tool-calling loop; whether the model actually uses the `web_search` tool
//! is the model's decision. The final text is returned verbatim with no
//! shape validation, because malformed output must reach the judge unchanged.

use crate::errors::Error;
use crate::providers::llm::{ChatTurn, ToolCallRequest, ToolChat, ToolSpec};
use crate::search::WebSearch;
use serde_json::{json, Value};
use std::sync::Arc;

const INSTRUCTIONS: &str = "\
You find the names of top scientists in a given research field.
IMPORTANT: Do not list the authors of the paper as the top scientist.

For any research field provided, search and identify the 3 most influential scientists.
Focus on:
- Foundational contributors
- Highly cited researchers
- Award winners in the field

Output ONLY a simple numbered list with just the names:
1. Full Name One
2. Full Name Two
3. Full Name Three

Do NOT add any other text, explanations, or details.";

const SEARCH_TOOL: &str = "web_search";

// Model-supplied result counts outside this range fall back to the default.
const MAX_TOOL_RESULTS: u64 = 25;

pub struct ResearcherFinder {
    chat: Arc<dyn ToolChat>,
    search: Arc<dyn WebSearch>,
    max_tool_rounds: u32,
    default_max_results: usize,
}

impl ResearcherFinder {
    pub fn new(
        chat: Arc<dyn ToolChat>,
        search: Arc<dyn WebSearch>,
        max_tool_rounds: u32,
        default_max_results: usize,
    ) -> Self {
        Self {
            chat,
            search,
            max_tool_rounds,
            default_max_results,
        }
    }

    fn tool_specs() -> Vec<ToolSpec> {
        vec![ToolSpec {
            name: SEARCH_TOOL.to_string(),
            description: "Search the web for page titles matching a query. \
                          Useful for finding scientist names in a research field."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Search query" },
                    "max_results": { "type": "integer", "description": "Maximum number of titles to return" }
                },
                "required": ["query"]
            }),
        }]
    }

    /// Produce the raw candidate list for `topic`.
    pub async fn find(&self, topic: &str) -> Result<String, Error> {
        let mut messages = vec![
            json!({ "role": "system", "content": INSTRUCTIONS }),
            json!({ "role": "user", "content": format!("Find top 3 researchers in {topic}") }),
        ];
        let tools = Self::tool_specs();

        for _ in 0..self.max_tool_rounds {
            let turn = self
                .chat
                .chat(&messages, Some(&tools))
                .await
                .map_err(|e| Error::Generation(e.to_string()))?;

            match turn {
                ChatTurn::Text(text) => return Ok(text),
                ChatTurn::ToolCalls { message, calls } => {
                    messages.push(message);
                    for call in calls {
                        let content = self.run_tool(&call).await;
                        messages.push(json!({
                            "role": "tool",
                            "tool_call_id": call.id,
                            "content": content,
                        }));
                    }
                }
            }
        }

        // Round limit reached: one last turn with no tools declared, so the
        // model has to answer in text.
        match self
            .chat
            .chat(&messages, None)
            .await
            .map_err(|e| Error::Generation(e.to_string()))?
        {
            ChatTurn::Text(text) => Ok(text),
            ChatTurn::ToolCalls { .. } => Err(Error::Generation(
                "model kept requesting tools after the round limit".to_string(),
            )),
        }
    }

    async fn run_tool(&self, call: &ToolCallRequest) -> String {
        if call.name != SEARCH_TOOL {
            tracing::debug!(tool = %call.name, "model requested an undeclared tool");
            return "[]".to_string();
        }
        let query = call
            .arguments
            .get("query")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let max_results = call
            .arguments
            .get("max_results")
            .and_then(Value::as_u64)
            .filter(|n| (1..=MAX_TOOL_RESULTS).contains(n))
            .map(|n| n as usize)
            .unwrap_or(self.default_max_results);

        tracing::debug!(%query, max_results, "executing web_search tool call");
        let titles = self.search.search(query, max_results).await;
        serde_json::to_string(&titles).unwrap_or_else(|_| "[]".to_string())
    }
}
