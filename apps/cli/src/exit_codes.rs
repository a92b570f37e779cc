//! Process exit codes. These are part of the command-line contract.

pub const VALID: u8 = 0;
pub const INVALID: u8 = 1; // text failed its policy
pub const USAGE_ERROR: u8 = 2; // unknown policy, bad config, unreadable input
