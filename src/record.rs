//! Log record representation shared by targets, filters and formatters.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::level::Level;

/// A single log event.
///
/// Records are plain owned values. The buffering host never mutates one
/// after accepting it; exporters only ever see them behind a shared slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    /// Category (logger name) the record was emitted under.
    pub category: String,
    /// Severity of the record.
    pub level: Level,
    /// The log message content.
    pub message: String,
    /// Time the record was created.
    pub timestamp: DateTime<Utc>,
    /// Structured key-value pairs attached to the record.
    pub context: BTreeMap<String, String>,
}

impl LogRecord {
    /// Construct a record under `category` at `level`, stamped now.
    pub fn new(category: &str, level: Level, message: &str) -> Self {
        Self {
            category: category.to_owned(),
            level,
            message: message.to_owned(),
            timestamp: Utc::now(),
            context: BTreeMap::new(),
        }
    }

    /// Construct a record carrying structured context pairs.
    pub fn with_context(
        category: &str,
        level: Level,
        message: &str,
        context: BTreeMap<String, String>,
    ) -> Self {
        Self {
            context,
            ..Self::new(category, level, message)
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}] {}", self.level, self.category, self.message)
    }
}
