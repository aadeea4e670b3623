//! Grading prompt assembly. Fixed text parameterized by topic only.

pub(crate) const SYSTEM: &str = "You are a strict AI Judge. Output ONLY valid JSON.";

/// The instruction appended to every grading request, for models that like
/// to narrate around their JSON.
const STRICT_JSON_SUFFIX: &str = "IMPORTANT: Return ONLY the JSON object. \
    Do not say 'Here is the JSON'. Just the JSON.";

pub(crate) fn build_grading_prompt(topic: &str, candidate_text: &str) -> String {
    format!(
        "You are grading a candidate answer against the following criteria:\n\
         1. Check if the names listed in the output are valid, real-world scientists \
         associated with the field '{topic}'.\n\
         2. If the names belong to celebrities, athletes (like Cricketers), or fictional \
         characters, the score must be 0.\n\
         3. The output must be a numbered list.\n\n\
         ### Input:\n\
         Find top 3 researchers in {topic}\n\n\
         ### Candidate Output:\n\
         {candidate_text}\n\n\
         Respond with a JSON object of the form \
         {{\"score\": <float between 0.0 and 1.0>, \"reason\": <string>}}.\n\n\
         {STRICT_JSON_SUFFIX}"
    )
}
