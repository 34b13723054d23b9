//! Log parsing for pidstat-style CPU utilization logs.

pub mod parse;
pub mod sample;

pub use parse::{DEFAULT_THRESHOLD, parse_log_file};
pub use sample::ParsedLog;
