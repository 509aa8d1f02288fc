//! Builder and implementation for a category-based filter.

use crate::{filters::Filter, record::LogRecord};

/// Single category pattern: a literal match, or a prefix match when the
/// pattern ends with `*`.
#[derive(Clone, Debug)]
struct Pattern(String);

impl Pattern {
    fn matches(&self, category: &str) -> bool {
        match self.0.strip_suffix('*') {
            Some(prefix) => category.starts_with(prefix),
            None => category == self.0,
        }
    }
}

/// Filter keeping records whose category matches the configured patterns.
///
/// A record passes when its category matches at least one include pattern
/// (or no include patterns are configured) and matches no exclude pattern.
/// Exclusion always wins.
#[derive(Debug)]
pub struct CategoryFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl Filter for CategoryFilter {
    fn should_log(&self, record: &LogRecord) -> bool {
        if self.exclude.iter().any(|p| p.matches(&record.category)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|p| p.matches(&record.category))
    }
}

/// Builder for [`CategoryFilter`].
#[derive(Clone, Debug, Default)]
pub struct CategoryFilterBuilder {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl CategoryFilterBuilder {
    /// Create a new `CategoryFilterBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern record categories must match.
    pub fn with_category(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    /// Add a pattern that excludes matching categories.
    pub fn without_category(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }
}

impl super::FilterBuilderTrait for CategoryFilterBuilder {
    type Filter = CategoryFilter;

    fn build_inner(&self) -> Result<Self::Filter, super::FilterBuildError> {
        if self.include.iter().chain(&self.exclude).any(|p| p.is_empty()) {
            return Err(super::FilterBuildError::InvalidConfig(
                "category patterns must not be empty".to_string(),
            ));
        }
        Ok(CategoryFilter {
            include: self.include.iter().cloned().map(Pattern).collect(),
            exclude: self.exclude.iter().cloned().map(Pattern).collect(),
        })
    }
}
