//! Builder and implementation for a severity-based filter.

use crate::{filters::Filter, level::Level, record::LogRecord};

/// Filter keeping records at or above a minimum severity.
#[derive(Debug)]
pub struct LevelFilter {
    min_level: Level,
}

impl Filter for LevelFilter {
    fn should_log(&self, record: &LogRecord) -> bool {
        record.level >= self.min_level
    }
}

/// Builder for [`LevelFilter`].
#[derive(Clone, Debug, Default)]
pub struct LevelFilterBuilder {
    min_level: Option<Level>,
}

impl LevelFilterBuilder {
    /// Create a new `LevelFilterBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum severity a record must reach.
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = Some(level);
        self
    }
}

impl super::FilterBuilderTrait for LevelFilterBuilder {
    type Filter = LevelFilter;

    fn build_inner(&self) -> Result<Self::Filter, super::FilterBuildError> {
        let level = self.min_level.ok_or_else(|| {
            super::FilterBuildError::InvalidConfig("min_level is required".into())
        })?;
        Ok(LevelFilter { min_level: level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterBuilderTrait;
    use rstest::rstest;

    fn record(level: Level) -> LogRecord {
        LogRecord::new("app", level, "msg")
    }

    #[rstest]
    #[case(Level::Warn, Level::Error, true)]
    #[case(Level::Warn, Level::Warn, true)]
    #[case(Level::Warn, Level::Info, false)]
    fn level_filter_behaviour(
        #[case] min: Level,
        #[case] rec_level: Level,
        #[case] expected: bool,
    ) {
        let builder = LevelFilterBuilder::new().with_min_level(min);
        let filter = builder.build().expect("build should succeed");
        assert_eq!(filter.should_log(&record(rec_level)), expected);
    }

    #[rstest]
    fn missing_min_level_is_rejected() {
        assert!(LevelFilterBuilder::new().build_inner().is_err());
    }
}
