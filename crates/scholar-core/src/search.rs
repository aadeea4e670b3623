//! Best-effort web search against the DuckDuckGo HTML endpoint.
//!
//! The search is optional grounding context for the finder, never a hard
//! dependency: every failure mode (network, timeout, non-2xx, parse) degrades
//! to an empty result list. No retries, no caching, no pagination.

use crate::config::SearchSettings;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;

const SEARCH_URL: &str = "https://html.duckduckgo.com/html/";
const USER_AGENT: &str = "Mozilla/5.0";
const LOCALE: &str = "us-en";

lazy_static! {
    // Result titles are the anchor text of `result__a` links, in document order.
    static ref RESULT_LINK_RE: Regex =
        Regex::new(r#"(?s)<a[^>]*class="[^"]*result__a[^"]*"[^>]*>(.*?)</a>"#).unwrap();
    static ref TAG_RE: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Seam for the finder's `web_search` tool, so tests can script results.
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Vec<String>;
}

pub struct SearchClient {
    http: reqwest::Client,
    // Applied per request, so the bound holds no matter how the client was built.
    timeout: Duration,
}

impl SearchClient {
    pub fn new(settings: &SearchSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    async fn try_search(&self, query: &str, max_results: usize) -> reqwest::Result<Vec<String>> {
        let resp = self
            .http
            .post(SEARCH_URL)
            .timeout(self.timeout)
            .header("User-Agent", USER_AGENT)
            .form(&[("q", query), ("kl", LOCALE)])
            .send()
            .await?;
        if !resp.status().is_success() {
            tracing::debug!(status = %resp.status(), "search endpoint returned non-success");
            return Ok(Vec::new());
        }
        let html = resp.text().await?;
        Ok(extract_titles(&html, max_results))
    }
}

#[async_trait]
impl WebSearch for SearchClient {
    async fn search(&self, query: &str, max_results: usize) -> Vec<String> {
        match self.try_search(query, max_results).await {
            Ok(titles) => titles,
            Err(e) => {
                tracing::debug!(error = %e, "web search failed; continuing without context");
                Vec::new()
            }
        }
    }
}

/// Pull up to `max_results` result titles out of a DuckDuckGo HTML page.
fn extract_titles(html: &str, max_results: usize) -> Vec<String> {
    RESULT_LINK_RE
        .captures_iter(html)
        .take(max_results)
        .filter_map(|cap| {
            let inner = cap.get(1)?.as_str();
            let text = decode_entities(&TAG_RE.replace_all(inner, ""));
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if text.is_empty() {
                None
            } else {
                Some(text)
            }
        })
        .collect()
}

fn decode_entities(s: &str) -> String {
    // `&amp;` last so `&amp;lt;` does not double-decode.
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
