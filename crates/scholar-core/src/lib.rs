//! Scholar core: find influential scientists in a research field, then let a
//! second model judge whether the produced list is plausible.
//!
//! The pipeline is two decoupled stages composed by the caller:
//! [`finder::ResearcherFinder`] turns a topic into a numbered list of names
//! (optionally grounded by a web-search tool the remote model may invoke),
//! and [`judge::RelevanceJudge`] scores arbitrary candidate text against a
//! topic rubric. The judge accepts any text, not just finder output, so
//! hand-edited or adversarial input is a supported path.

pub mod config;
pub mod errors;
pub mod finder;
pub mod judge;
pub mod model;
pub mod providers;
pub mod search;

pub use errors::Error;
