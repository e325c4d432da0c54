//! # CloudWatch Logfmt
//!
//! A Rust logging library that renders structured log entries in the AWS
//! CloudWatch Logs console line format used by the Lambda runtime.
//!
//! ## Features
//!
//! - **CloudWatch Line Format**: `LEVEL RequestId: ... Message: ... key: value` output
//! - **Prefix Fields**: Pin identifier fields ahead of the message in a fixed order
//! - **Deterministic Output**: Remaining fields sorted by name for diffable logs
//! - **Multiple Appenders**: Console, file, and JSON sinks
//! - **Thread Safe**: Designed for concurrent environments

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, JsonAppender};
    pub use crate::core::{
        Appender, ContextGuard, FieldValue, FormatterConfig, LineFormatter, LogContext, LogEntry,
        LogLevel, Logger, LoggerBuilder, LoggerContext, LoggerError, LoggerMetrics, Result,
        TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender, JsonAppender};
pub use crate::core::{
    Appender, ContextGuard, FieldValue, FormatterConfig, LineFormatter, LogContext, LogEntry,
    LogLevel, Logger, LoggerBuilder, LoggerContext, LoggerError, LoggerMetrics, Result,
    TimestampFormat,
};
