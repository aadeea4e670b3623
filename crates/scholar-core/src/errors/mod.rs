use thiserror::Error;

/// Pipeline error taxonomy.
///
/// Search failures have no variant on purpose: the search helper is
/// best-effort context and swallows its own faults, degrading to "no search
/// results" instead of surfacing anything. Nothing here is retried
/// automatically; a retry is the user re-running the triggering action.
#[derive(Debug, Error)]
pub enum Error {
    /// No API key was supplied. Checked before any network call is attempted.
    #[error("missing API key: set OPENROUTER_API_KEY or pass --api-key")]
    MissingApiKey,

    /// Config file unreadable or invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The finder's remote call failed (network, auth, malformed response).
    #[error("generation failed: {0}")]
    Generation(String),

    /// The judge reply contained no parseable JSON verdict. The raw reply
    /// rides along so the caller can show what the model actually said.
    #[error("no parseable JSON verdict in judge reply: {detail}")]
    Extraction { detail: String, raw: String },

    /// Any other fault during judging: remote call failure, missing verdict
    /// fields, or a score outside [0, 1].
    #[error("evaluation failed: {0}")]
    Evaluation(String),
}
