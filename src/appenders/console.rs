//! Console appender implementation

use crate::core::{Appender, FormatterConfig, LineFormatter, LogEntry, LogLevel, Result};
use colored::Colorize;

pub struct ConsoleAppender {
    formatter: LineFormatter,
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            formatter: LineFormatter::default(),
            use_colors: true,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            formatter: LineFormatter::default(),
            use_colors,
        }
    }

    /// Set the line formatter configuration for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use cloudwatch_logfmt::appenders::ConsoleAppender;
    /// use cloudwatch_logfmt::FormatterConfig;
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_formatter_config(FormatterConfig::new().with_prefix_fields(["RequestId"]));
    /// ```
    #[must_use]
    pub fn with_formatter_config(mut self, config: FormatterConfig) -> Self {
        self.formatter = LineFormatter::new(config);
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);

        let output = if self.use_colors {
            // Only the severity tag is colored; the line body stays plain.
            let tag = entry.level.to_str();
            format!(
                "{}{}",
                tag.color(entry.level.color_code()),
                &line[tag.len()..]
            )
        } else {
            line
        };

        // Route Error and above to stderr, others to stdout. The formatted
        // line already ends with a newline.
        match entry.level {
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => eprint!("{}", output),
            _ => print!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
