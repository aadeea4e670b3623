//! Unified exit codes for the scholar CLI.
//! Part of the public contract; scripts key off these.

pub const SUCCESS: i32 = 0; // command completed; a judged list PASSED
pub const STAGE_FAILED: i32 = 1; // generation/evaluation error, or FAIL verdict
pub const CONFIG_ERROR: i32 = 2; // missing key, bad config, empty candidate text
