//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use cloudwatch_logfmt::prelude::*;
//! use cloudwatch_logfmt::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Handler started");
//!
//! // With format arguments
//! let request_id = "abc-123";
//! info!(logger, "Handling request {}", request_id);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use cloudwatch_logfmt::prelude::*;
/// # let logger = Logger::new();
/// use cloudwatch_logfmt::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Panic, "A serious crash: {}", "stack overflow");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use cloudwatch_logfmt::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.set_min_level(LogLevel::Debug);
/// use cloudwatch_logfmt::debug;
/// debug!(logger, "Some more information");
/// debug!(logger, "Payload size: {}", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use cloudwatch_logfmt::prelude::*;
/// # let logger = Logger::new();
/// use cloudwatch_logfmt::info;
/// info!(logger, "Some information");
/// info!(logger, "Processing {} records", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use cloudwatch_logfmt::prelude::*;
/// # let logger = Logger::new();
/// use cloudwatch_logfmt::warn;
/// warn!(logger, "A warning");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use cloudwatch_logfmt::prelude::*;
/// # let logger = Logger::new();
/// use cloudwatch_logfmt::error;
/// error!(logger, "An error");
/// error!(logger, "Status: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use cloudwatch_logfmt::prelude::*;
/// # let logger = Logger::new();
/// use cloudwatch_logfmt::fatal;
/// fatal!(logger, "A crash");
/// fatal!(logger, "Unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};

    #[test]
    fn test_log_macro() {
        let logger = Logger::new();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Panic, "Formatted: {}", 42);
    }

    #[test]
    fn test_debug_macro() {
        let mut logger = Logger::new();
        logger.set_min_level(LogLevel::Debug);
        debug!(logger, "Debug message");
        debug!(logger, "Count: {}", 5);
    }

    #[test]
    fn test_info_macro() {
        let logger = Logger::new();
        info!(logger, "Info message");
        info!(logger, "Items: {}", 100);
    }

    #[test]
    fn test_warn_macro() {
        let logger = Logger::new();
        warn!(logger, "Warning message");
        warn!(logger, "Retry {} of {}", 1, 3);
    }

    #[test]
    fn test_error_macro() {
        let logger = Logger::new();
        error!(logger, "Error message");
        error!(logger, "Status: {}", 500);
    }

    #[test]
    fn test_fatal_macro() {
        let logger = Logger::new();
        fatal!(logger, "Fatal message");
        fatal!(logger, "Critical failure: {}", "system");
    }
}
