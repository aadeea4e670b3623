//! Relevance judge: score arbitrary candidate text against a topic rubric
//! with a second model forced into JSON-only output.
//!
//! The judge is text-agnostic by design — it accepts whatever the caller
//! hands it (finder output, hand-edited text, garbage) — and stateless
//! across calls: every `evaluate` builds its own prompt and carries no
//! conversation memory, even though the underlying client is reused.

mod extract;
mod prompt;

pub use extract::extract_json_span;

use crate::errors::Error;
use crate::model::GradeResult;
use crate::providers::llm::LlmClient;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct RawVerdict {
    score: f64,
    reason: String,
}

pub struct RelevanceJudge {
    client: Arc<dyn LlmClient>,
}

impl RelevanceJudge {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Grade `candidate_text` against the rubric for `topic`.
    ///
    /// Scoring semantics live in the grading model's judgment; the local
    /// responsibilities are prompt assembly, the remote call, greedy JSON
    /// extraction, and the [0, 1] range check. Pass/fail interpretation of
    /// the score is the caller's, via [`crate::model::Verdict::from_score`].
    pub async fn evaluate(&self, topic: &str, candidate_text: &str) -> Result<GradeResult, Error> {
        let grading_prompt = prompt::build_grading_prompt(topic, candidate_text);
        let resp = self
            .client
            .complete(Some(prompt::SYSTEM), &grading_prompt)
            .await
            .map_err(|e| Error::Evaluation(e.to_string()))?;

        let span = extract_json_span(resp.text.trim());
        let verdict: RawVerdict =
            serde_json::from_str(span).map_err(|e| Error::Extraction {
                detail: e.to_string(),
                raw: resp.text.clone(),
            })?;

        if !verdict.score.is_finite() || !(0.0..=1.0).contains(&verdict.score) {
            return Err(Error::Evaluation(format!(
                "judge returned score {} outside [0, 1]",
                verdict.score
            )));
        }

        Ok(GradeResult {
            score: verdict.score,
            reason: verdict.reason,
        })
    }

    /// Blocking variant for synchronous callers. A thin wrapper that drives
    /// the exact same future — there is no separate sync code path.
    pub fn evaluate_blocking(
        &self,
        topic: &str,
        candidate_text: &str,
    ) -> Result<GradeResult, Error> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Evaluation(e.to_string()))?;
        rt.block_on(self.evaluate(topic, candidate_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LlmResponse, Verdict};
    use crate::providers::llm::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockLlmClient {
        responses: Mutex<Vec<String>>,
        prompts: Mutex<Vec<(Option<String>, String)>>,
    }

    impl MockLlmClient {
        fn new(responses: Vec<&str>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into_iter().map(String::from).collect()),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(
            &self,
            system: Option<&str>,
            prompt: &str,
        ) -> Result<LlmResponse, LlmError> {
            self.prompts
                .lock()
                .unwrap()
                .push((system.map(String::from), prompt.to_string()));
            let mut resps = self.responses.lock().unwrap();
            if resps.is_empty() {
                return Err(LlmError::MalformedResponse("no more mock responses"));
            }
            Ok(LlmResponse {
                text: resps.remove(0),
                model: "mock".to_string(),
            })
        }

        fn model_name(&self) -> &str {
            "mock"
        }
    }

    #[tokio::test]
    async fn parses_a_clean_json_verdict() {
        let client = MockLlmClient::new(vec![r#"{"score": 0.92, "reason": "real GAN researchers"}"#]);
        let judge = RelevanceJudge::new(client.clone());
        let grade = judge
            .evaluate("Generative Adversarial Networks", "1. Ian Goodfellow")
            .await
            .unwrap();
        assert_eq!(grade.score, 0.92);
        assert_eq!(grade.reason, "real GAN researchers");
        assert_eq!(Verdict::from_score(grade.score, 0.7), Verdict::Pass);

        // strict-judge system line and rubric prompt both went out
        let prompts = client.prompts.lock().unwrap();
        let (system, prompt) = &prompts[0];
        assert_eq!(system.as_deref(), Some(prompt::SYSTEM));
        assert!(prompt.contains("Generative Adversarial Networks"));
        assert!(prompt.contains("1. Ian Goodfellow"));
    }

    #[tokio::test]
    async fn tolerates_prose_around_the_json() {
        let client = MockLlmClient::new(vec![
            "Sure! Here is my verdict:\n{\"score\": 0.0, \"reason\": \"those are cricketers, not scientists\"}\nLet me know if you need more.",
        ]);
        let judge = RelevanceJudge::new(client);
        let grade = judge
            .evaluate("Generative Adversarial Networks", "1. Virat Kohli")
            .await
            .unwrap();
        assert_eq!(grade.score, 0.0);
        assert!(grade.reason.contains("cricketers"));
        assert_eq!(Verdict::from_score(grade.score, 0.7), Verdict::Fail);
    }

    #[tokio::test]
    async fn reply_without_json_is_an_extraction_error_carrying_the_raw_text() {
        let client = MockLlmClient::new(vec!["I cannot grade this."]);
        let judge = RelevanceJudge::new(client);
        let err = judge.evaluate("topic", "text").await.unwrap_err();
        match err {
            Error::Extraction { raw, .. } => assert_eq!(raw, "I cannot grade this."),
            other => panic!("expected extraction error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn verdict_missing_fields_is_an_extraction_error() {
        let client = MockLlmClient::new(vec![r#"{"grade": "A+"}"#]);
        let judge = RelevanceJudge::new(client);
        let err = judge.evaluate("topic", "text").await.unwrap_err();
        assert!(matches!(err, Error::Extraction { .. }));
    }

    #[tokio::test]
    async fn out_of_range_score_is_rejected_not_clamped() {
        let client = MockLlmClient::new(vec![r#"{"score": 7.5, "reason": "very good"}"#]);
        let judge = RelevanceJudge::new(client);
        let err = judge.evaluate("topic", "text").await.unwrap_err();
        match err {
            Error::Evaluation(msg) => assert!(msg.contains("outside [0, 1]")),
            other => panic!("expected evaluation error, got {other:?}"),
        }

        let client = MockLlmClient::new(vec![r#"{"score": -0.1, "reason": "bad"}"#]);
        let judge = RelevanceJudge::new(client);
        assert!(matches!(
            judge.evaluate("topic", "text").await,
            Err(Error::Evaluation(_))
        ));
    }

    #[tokio::test]
    async fn boundary_scores_are_valid() {
        for raw in [
            r#"{"score": 0.0, "reason": "floor"}"#,
            r#"{"score": 1.0, "reason": "ceiling"}"#,
        ] {
            let client = MockLlmClient::new(vec![raw]);
            let judge = RelevanceJudge::new(client);
            let grade = judge.evaluate("topic", "text").await.unwrap();
            assert!((0.0..=1.0).contains(&grade.score));
        }
    }

    #[tokio::test]
    async fn remote_failure_is_an_evaluation_error() {
        let client = MockLlmClient::new(vec![]);
        let judge = RelevanceJudge::new(client);
        assert!(matches!(
            judge.evaluate("topic", "text").await,
            Err(Error::Evaluation(_))
        ));
    }

    #[tokio::test]
    async fn each_call_is_independent() {
        // Two calls with identical inputs may disagree (remote models are
        // non-deterministic); assert shape and range only, never equality.
        let client = MockLlmClient::new(vec![
            r#"{"score": 0.8, "reason": "first opinion"}"#,
            r#"{"score": 0.6, "reason": "second opinion"}"#,
        ]);
        let judge = RelevanceJudge::new(client.clone());
        let a = judge.evaluate("topic", "same text").await.unwrap();
        let b = judge.evaluate("topic", "same text").await.unwrap();
        assert!((0.0..=1.0).contains(&a.score));
        assert!((0.0..=1.0).contains(&b.score));

        // no conversation memory: both prompts are built from scratch
        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts[0].1, prompts[1].1);
    }

    #[test]
    fn blocking_wrapper_drives_the_same_logic() {
        let client = MockLlmClient::new(vec![r#"{"score": 0.75, "reason": "fine"}"#]);
        let judge = RelevanceJudge::new(client);
        let grade = judge.evaluate_blocking("topic", "1. A\n2. B\n3. C").unwrap();
        assert_eq!(grade.score, 0.75);
    }
}
