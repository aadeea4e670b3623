use serde::{Deserialize, Serialize};

/// A single completion from a remote model.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub model: String,
}

/// The judge's verdict for one evaluation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Always within [0.0, 1.0]; an out-of-range score from the grading
    /// model is rejected as an evaluation error, never clamped.
    pub score: f64,
    pub reason: String,
}

/// Caller-side pass/fail presentation of a grade. The threshold lives in
/// config, not in the judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Strictly-greater comparison: a score exactly at the threshold fails.
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score > threshold {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// Request-scoped record the caller threads from the generate step to the
/// evaluate step. The evaluated text may diverge from `last_generated`
/// (hand edits); the topic is what binds the two stages.
#[derive(Debug, Clone)]
pub struct Session {
    pub topic: String,
    pub last_generated: String,
}

impl Session {
    pub fn new(topic: impl Into<String>, last_generated: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            last_generated: last_generated.into(),
        }
    }
}
