//! Greedy JSON extraction for judge replies.
//!
//! Models sometimes ignore the "JSON only" instruction and wrap the verdict
//! in prose. The contract is deliberately the lossy one the grading prompt
//! was written against: the span from the FIRST `{` to the LAST `}` in the
//! reply, newlines included. A reply carrying two JSON objects therefore
//! extracts as one greedy span (which then fails to parse) rather than the
//! "smallest enclosing object" — defined behavior, not a bug to fix with a
//! balanced-brace parser.

/// Return the greedy `{`..`}` span of `text`, or `text` unchanged when no
/// such span exists. Downstream JSON parsing decides whether the result is
/// usable.
pub fn extract_json_span(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}
