//! JSON appender for structured logging

use crate::core::{Appender, LogEntry, Result, TimestampFormat};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// JSON file appender for structured logging
///
/// Writes each log entry as a single-line JSON object (JSONL format)
/// with `timestamp`, `level`, `message`, and the entry fields flattened
/// at top level. Compatible with log aggregation tools like ELK, Loki,
/// etc.
pub struct JsonAppender {
    writer: BufWriter<File>,
    pretty: bool,
    timestamp_format: TimestampFormat,
}

impl JsonAppender {
    /// Create a new JSON appender
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            pretty: false,
            timestamp_format: TimestampFormat::default(),
        })
    }

    /// Create a new JSON appender with pretty printing
    pub fn new_pretty<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            pretty: true,
            timestamp_format: TimestampFormat::default(),
        })
    }

    /// Set the timestamp format for this appender
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Build the JSON object for one entry
    fn to_json(&self, entry: &LogEntry) -> serde_json::Value {
        let mut obj = serde_json::Map::new();

        let timestamp = if self.timestamp_format.is_numeric() {
            serde_json::Value::Number(entry.timestamp.timestamp_millis().into())
        } else {
            serde_json::Value::String(self.timestamp_format.format(&entry.timestamp))
        };
        obj.insert("timestamp".to_string(), timestamp);

        obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        for (key, value) in entry.fields.iter() {
            obj.insert(key.to_string(), value.to_json_value());
        }

        serde_json::Value::Object(obj)
    }
}

impl Appender for JsonAppender {
    fn name(&self) -> &str {
        "json"
    }

    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let json = self.to_json(entry);

        let line = if self.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };

        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
