//! Formatting of log records into text lines.

use std::fmt::Write as _;

use crate::record::LogRecord;

/// Trait for formatting log records into strings.
///
/// Implementors must be thread-safe (`Send + Sync`) so a formatter can be
/// shared between the buffering host and its exporter.
pub trait Formatter: Send + Sync {
    /// Format a log record into a single line of text.
    fn format(&self, record: &LogRecord) -> String;
}

/// Formatter producing `"<time> [<LEVEL>][<category>] <message>"` lines.
///
/// Timestamps are rendered in UTC with millisecond precision. Structured
/// context pairs, when present, are appended as space-separated `key=value`
/// tokens.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut line = format!(
            "{} [{}][{}] {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level,
            record.category,
            record.message,
        );
        for (key, value) in &record.context {
            let _ = write!(line, " {key}={value}");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::level::Level;
    use rstest::rstest;

    #[rstest]
    fn default_format_includes_level_and_category() {
        let record = LogRecord::new("app.db", Level::Error, "connection lost");
        let line = DefaultFormatter.format(&record);
        assert!(line.ends_with("[ERROR][app.db] connection lost"));
    }

    #[rstest]
    fn default_format_appends_context_pairs() {
        let mut context = BTreeMap::new();
        context.insert("attempt".to_owned(), "3".to_owned());
        context.insert("host".to_owned(), "db-1".to_owned());
        let record = LogRecord::with_context("app", Level::Warn, "retrying", context);
        let line = DefaultFormatter.format(&record);
        assert!(line.ends_with("retrying attempt=3 host=db-1"));
    }
}
