//! Filtering components for log records.
//!
//! Provides the [`Filter`] trait along with concrete filter builders for
//! constructing filters. The buffering host consults its filter chain
//! before a record is buffered; a record must pass every filter.

use std::sync::Arc;

use thiserror::Error;

use crate::record::LogRecord;

/// Trait implemented by all log filters.
///
/// Filters are `Send + Sync` so they can be shared across threads.
pub trait Filter: Send + Sync {
    /// Return `true` if `record` should be processed.
    fn should_log(&self, record: &LogRecord) -> bool;
}

pub mod category_filter;
pub mod level_filter;

pub use category_filter::CategoryFilterBuilder;
pub use level_filter::LevelFilterBuilder;

/// Errors that may occur while building a filter.
#[derive(Debug, Error)]
pub enum FilterBuildError {
    /// Invalid user supplied configuration.
    #[error("invalid filter configuration: {0}")]
    InvalidConfig(String),
}

/// Trait implemented by all filter builders.
pub trait FilterBuilderTrait: Send + Sync {
    type Filter: self::Filter + 'static;

    fn build_inner(&self) -> Result<Self::Filter, FilterBuildError>;

    fn build(&self) -> Result<Arc<dyn Filter>, FilterBuildError> {
        Ok(Arc::new(self.build_inner()?))
    }
}
