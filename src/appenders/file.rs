//! File appender implementation

use crate::core::{
    Appender, FormatterConfig, LineFormatter, LogEntry, LoggerError, Result,
};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Appends formatted console lines to a file.
///
/// One `String` buffer is reused across `append` calls; exclusive
/// ownership per call is guaranteed by `&mut self`.
pub struct FileAppender {
    writer: Option<BufWriter<File>>,
    formatter: LineFormatter,
    buf: String,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_appender(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
            formatter: LineFormatter::default(),
            buf: String::new(),
        })
    }

    /// Set the line formatter configuration for this appender
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cloudwatch_logfmt::appenders::FileAppender;
    /// use cloudwatch_logfmt::FormatterConfig;
    ///
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_formatter_config(FormatterConfig::new().with_quote_empty_fields(true));
    /// ```
    #[must_use]
    pub fn with_formatter_config(mut self, config: FormatterConfig) -> Self {
        self.formatter = LineFormatter::new(config);
        self
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        self.buf.clear();
        self.formatter.format_into(entry, &mut self.buf);

        writer.write_all(self.buf.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                let message = e.to_string();
                LoggerError::io_operation("flushing log file", message, e)
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
