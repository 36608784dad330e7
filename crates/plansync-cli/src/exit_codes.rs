//! Process exit codes. These are part of the public contract.

pub const SUCCESS: i32 = 0;
/// Missing configuration, unreadable report, or unparsable report.
/// Remote failures never change the exit code; they show in the summary.
pub const FATAL: i32 = 1;
