//! CloudWatch Logs console line format
//!
//! Renders one log entry as the single line the AWS Lambda runtime prints
//! to its console stream:
//!
//! ```text
//! INFO RequestId: 66389135-fd00-11e7-a1f9-8945479469b0 Message: Some information Status: 200
//! ```
//!
//! The severity tag comes first, then any configured prefix fields in their
//! configured order, then the `Message:` field, then the remaining fields,
//! each rendered `key: value` with a trailing space, and a terminating
//! newline. Values that contain characters outside the safe set are
//! double-quoted with backslash escapes.

use super::log_context::FieldValue;
use super::log_entry::LogEntry;
use std::sync::Arc;

/// Characters allowed in an unquoted value token.
fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+')
}

/// Configuration for the line formatter
///
/// Immutable after construction and safe to share across threads; wrap in
/// `Arc` via [`FormatterConfig::shared`] when several appenders format with
/// the same settings.
///
/// # Examples
///
/// ```
/// use cloudwatch_logfmt::core::FormatterConfig;
///
/// let config = FormatterConfig::new()
///     .with_prefix_fields(["RequestId"])
///     .with_quote_empty_fields(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatterConfig {
    /// Field names rendered first, in this order, ahead of the message,
    /// when present in the entry
    pub prefix_fields: Vec<String>,
    /// Emit non-prefix fields in the entry's insertion order instead of
    /// sorted by name
    pub disable_sorting: bool,
    /// Quote values that stringify to the empty string
    pub quote_empty_fields: bool,
}

impl FormatterConfig {
    /// Create a new formatter configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix field names
    #[must_use]
    pub fn with_prefix_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix_fields = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether non-prefix fields keep their native order
    #[must_use]
    pub fn with_disable_sorting(mut self, disable: bool) -> Self {
        self.disable_sorting = disable;
        self
    }

    /// Set whether empty values are quoted
    #[must_use]
    pub fn with_quote_empty_fields(mut self, quote: bool) -> Self {
        self.quote_empty_fields = quote;
        self
    }

    /// Wrap this config in an Arc for sharing across appenders
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Renders log entries in the CloudWatch Logs console line format.
///
/// Formatting is total: it cannot fail and does not panic for any entry,
/// including empty field mappings, zero prefix fields, and empty messages.
/// The entry is never modified; prefix-field consumption is computed by
/// difference against the configured names.
#[derive(Debug, Clone, Default)]
pub struct LineFormatter {
    config: FormatterConfig,
}

impl LineFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Format an entry as one newline-terminated line.
    #[must_use]
    pub fn format(&self, entry: &LogEntry) -> String {
        let mut line = String::with_capacity(64 + entry.message.len());
        self.format_into(entry, &mut line);
        line
    }

    /// Format an entry, appending to a caller-owned buffer.
    ///
    /// Lets a sink reuse one buffer across calls; the `&mut` borrow
    /// guarantees exclusive ownership per call. The buffer is appended to,
    /// not cleared.
    pub fn format_into(&self, entry: &LogEntry, out: &mut String) {
        out.push_str(entry.level.to_str());
        out.push(' ');

        for (idx, name) in self.config.prefix_fields.iter().enumerate() {
            // A name listed twice renders once.
            if self.config.prefix_fields[..idx].contains(name) {
                continue;
            }
            if let Some(value) = entry.fields.get(name) {
                self.append_field(out, name, value);
            }
        }

        // Message always occupies the first non-prefix position.
        self.append_text_field(out, "Message", &entry.message);

        let mut remaining: Vec<(&str, &FieldValue)> = entry
            .fields
            .iter()
            .filter(|(name, _)| !self.config.prefix_fields.iter().any(|p| p == name))
            .collect();
        if !self.config.disable_sorting {
            remaining.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }
        for (name, value) in remaining {
            self.append_field(out, name, value);
        }

        out.push('\n');
    }

    fn append_field(&self, out: &mut String, key: &str, value: &FieldValue) {
        self.append_text_field(out, key, &value.as_text());
    }

    fn append_text_field(&self, out: &mut String, key: &str, text: &str) {
        out.push_str(key);
        out.push_str(": ");
        if self.needs_quoting(text) {
            push_quoted(out, text);
        } else {
            out.push_str(text);
        }
        out.push(' ');
    }

    fn needs_quoting(&self, text: &str) -> bool {
        if text.is_empty() {
            return self.config.quote_empty_fields;
        }
        !text.chars().all(is_safe_char)
    }
}

/// Append a double-quoted, backslash-escaped representation of `text`.
///
/// Line-breaking controls are written as escape sequences so a value can
/// never split the entry across lines.
fn push_quoted(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LogLevel};

    fn entry(level: LogLevel, message: &str, fields: LogContext) -> LogEntry {
        LogEntry::new(level, message).with_fields(fields)
    }

    #[test]
    fn test_sorted_fields_after_message() {
        let formatter = LineFormatter::default();
        let fields = LogContext::new()
            .with_field("BoolField", true)
            .with_field("IntField", 1);
        let line = formatter.format(&entry(LogLevel::Debug, "Message", fields));

        assert_eq!(line, "DEBUG Message: Message BoolField: true IntField: 1 \n");
    }

    #[test]
    fn test_quote_empty_fields() {
        let formatter =
            LineFormatter::new(FormatterConfig::new().with_quote_empty_fields(true));
        let fields = LogContext::new()
            .with_field("EmptyField", "")
            .with_field("AnotherIntField", 1000);
        let line = formatter.format(&entry(LogLevel::Info, "Message2", fields));

        assert_eq!(
            line,
            "INFO Message: Message2 AnotherIntField: 1000 EmptyField: \"\" \n"
        );
    }

    #[test]
    fn test_backslash_is_quoted_and_escaped() {
        let formatter = LineFormatter::default();
        let fields = LogContext::new().with_field("QuotedField", "\\");
        let line = formatter.format(&entry(LogLevel::Warning, "Message3", fields));

        assert_eq!(line, "WARNING Message: Message3 QuotedField: \"\\\\\" \n");
    }

    #[test]
    fn test_disable_sorting_keeps_native_order() {
        let formatter =
            LineFormatter::new(FormatterConfig::new().with_disable_sorting(true));
        let fields = LogContext::new()
            .with_field("BField", 1)
            .with_field("AField", 2);
        let line = formatter.format(&entry(LogLevel::Warning, "Message4", fields));

        assert_eq!(line, "WARNING Message: Message4 BField: 1 AField: 2 \n");
    }

    #[test]
    fn test_prefix_field_before_message() {
        let formatter = LineFormatter::new(
            FormatterConfig::new().with_prefix_fields(["PrefixField"]),
        );
        let fields = LogContext::new()
            .with_field("PrefixField", 1)
            .with_field("NormalField", 2);
        let line = formatter.format(&entry(LogLevel::Info, "Message5", fields));

        assert_eq!(
            line,
            "INFO PrefixField: 1 Message: Message5 NormalField: 2 \n"
        );
    }

    #[test]
    fn test_empty_field_mapping() {
        let formatter = LineFormatter::default();
        let line = formatter.format(&entry(LogLevel::Info, "hello", LogContext::new()));

        assert_eq!(line, "INFO Message: hello \n");
    }

    #[test]
    fn test_empty_value_unquoted_by_default() {
        let formatter = LineFormatter::default();
        let fields = LogContext::new().with_field("EmptyField", "");
        let line = formatter.format(&entry(LogLevel::Info, "msg", fields));

        assert_eq!(line, "INFO Message: msg EmptyField:  \n");
    }

    #[test]
    fn test_message_with_space_is_quoted() {
        let formatter = LineFormatter::default();
        let line = formatter.format(&entry(
            LogLevel::Panic,
            "A serious crash",
            LogContext::new(),
        ));

        assert_eq!(line, "PANIC Message: \"A serious crash\" \n");
    }

    #[test]
    fn test_missing_prefix_field_is_skipped() {
        let formatter = LineFormatter::new(
            FormatterConfig::new().with_prefix_fields(["RequestId", "Version"]),
        );
        let fields = LogContext::new().with_field("Version", "$LATEST");
        let line = formatter.format(&entry(LogLevel::Info, "start", fields));

        assert_eq!(line, "INFO Version: $LATEST Message: start \n");
    }

    #[test]
    fn test_prefix_order_wins_over_sorting() {
        let formatter = LineFormatter::new(
            FormatterConfig::new().with_prefix_fields(["ZField", "AField"]),
        );
        let fields = LogContext::new()
            .with_field("AField", 1)
            .with_field("ZField", 2)
            .with_field("MField", 3);
        let line = formatter.format(&entry(LogLevel::Debug, "msg", fields));

        assert_eq!(line, "DEBUG ZField: 2 AField: 1 Message: msg MField: 3 \n");
    }

    #[test]
    fn test_duplicate_prefix_name_renders_once() {
        let formatter = LineFormatter::new(
            FormatterConfig::new().with_prefix_fields(["RequestId", "RequestId"]),
        );
        let fields = LogContext::new().with_field("RequestId", "abc-123");
        let line = formatter.format(&entry(LogLevel::Info, "msg", fields));

        assert_eq!(line, "INFO RequestId: abc-123 Message: msg \n");
    }

    #[test]
    fn test_scalar_value_rendering() {
        let formatter = LineFormatter::default();
        let fields = LogContext::new()
            .with_field("Duration", 0.96)
            .with_field("Billed", false)
            .with_field("Trace", crate::core::FieldValue::Null);
        let line = formatter.format(&entry(LogLevel::Info, "REPORT", fields));

        assert_eq!(
            line,
            "INFO Message: REPORT Billed: false Duration: 0.96 Trace: null \n"
        );
    }

    #[test]
    fn test_embedded_quote_is_escaped() {
        let formatter = LineFormatter::default();
        let fields = LogContext::new().with_field("Path", "say \"hi\"");
        let line = formatter.format(&entry(LogLevel::Info, "msg", fields));

        assert_eq!(line, "INFO Message: msg Path: \"say \\\"hi\\\"\" \n");
    }

    #[test]
    fn test_newline_in_value_stays_on_one_line() {
        let formatter = LineFormatter::default();
        let fields = LogContext::new().with_field("Stack", "a\nb");
        let line = formatter.format(&entry(LogLevel::Error, "crash", fields));

        assert_eq!(line, "ERROR Message: crash Stack: \"a\\nb\" \n");
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_safe_charset_stays_bare() {
        let formatter = LineFormatter::default();
        let fields = LogContext::new()
            .with_field("Arn", "arn.aws/lambda@us-east-1_fn^v2+1");
        let line = formatter.format(&entry(LogLevel::Info, "msg", fields));

        assert_eq!(
            line,
            "INFO Message: msg Arn: arn.aws/lambda@us-east-1_fn^v2+1 \n"
        );
    }

    #[test]
    fn test_formatting_is_pure() {
        let formatter = LineFormatter::new(
            FormatterConfig::new().with_prefix_fields(["RequestId"]),
        );
        let fields = LogContext::new()
            .with_field("RequestId", "abc-123")
            .with_field("Status", 200);
        let entry = entry(LogLevel::Info, "done", fields.clone());

        let first = formatter.format(&entry);
        let second = formatter.format(&entry);

        assert_eq!(first, second);
        // The entry's field mapping is untouched by prefix consumption.
        assert_eq!(entry.fields, fields);
    }

    #[test]
    fn test_format_into_appends() {
        let formatter = LineFormatter::default();
        let mut buf = String::new();

        formatter.format_into(&entry(LogLevel::Info, "one", LogContext::new()), &mut buf);
        formatter.format_into(&entry(LogLevel::Info, "two", LogContext::new()), &mut buf);

        assert_eq!(buf, "INFO Message: one \nINFO Message: two \n");
    }

    #[test]
    fn test_shared_config() {
        let config = FormatterConfig::new()
            .with_prefix_fields(["RequestId"])
            .shared();
        let other = Arc::clone(&config);
        assert_eq!(config.prefix_fields, other.prefix_fields);
    }
}
