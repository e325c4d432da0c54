//! Log output destinations
//!
//! Every appender renders entries through the crate's CloudWatch console
//! line format, except the JSON appender which writes JSONL for log
//! aggregation tools.

pub mod console;
pub mod file;
pub mod json;

pub use console::ConsoleAppender;
pub use file::FileAppender;
pub use json::JsonAppender;

pub use crate::core::Appender;
