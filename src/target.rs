//! Buffering host and the exporter seam between it and concrete sinks.
//!
//! [`BufferedTarget`] accumulates filtered records and hands them to an
//! [`Exporter`] as a read-only [`Batch`] once a flush is triggered, either
//! explicitly or when `export_interval` records have accumulated. The host
//! spawns no threads or timers; a flush runs on the calling thread and
//! blocks other `handle`/`flush` calls on the same target until the
//! exporter returns.

use std::sync::Arc;

use log::warn;
use parking_lot::Mutex;
use thiserror::Error;

use crate::{
    filters::Filter,
    formatter::{DefaultFormatter, Formatter},
    record::LogRecord,
};

/// Number of buffered records that triggers an export by default.
pub const DEFAULT_EXPORT_INTERVAL: usize = 1000;

/// Read-only view of the buffered records handed to an exporter at flush
/// time.
///
/// Bundles the record slice with the host's formatter so an exporter can
/// render the batch without owning either.
pub struct Batch<'a> {
    records: &'a [LogRecord],
    formatter: &'a dyn Formatter,
}

impl<'a> Batch<'a> {
    pub fn new(records: &'a [LogRecord], formatter: &'a dyn Formatter) -> Self {
        Self { records, formatter }
    }

    /// Records buffered since the last successful flush, oldest first.
    pub fn records(&self) -> &[LogRecord] {
        self.records
    }

    /// Render every record through the host's formatter, joined by
    /// `separator`.
    pub fn render(&self, separator: &str) -> String {
        self.records
            .iter()
            .map(|record| self.formatter.format(record))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Failure surfaced when a batch could not be exported.
///
/// Carries a display message and, when the failure originated in a
/// delivery collaborator, the original error as [`source`](std::error::Error::source).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ExportError {
    /// An export failure with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying failure, preserving it as the error source.
    pub fn with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source),
        }
    }

    /// The display message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Trait implemented by all batch exporters.
///
/// Exporters are `Send + Sync` so a target can be shared across threads.
/// `export` is called at most once per flush; implementations must not
/// retry internally.
pub trait Exporter: Send + Sync {
    /// Deliver the batch, or report why it could not be delivered.
    fn export(&self, batch: &Batch<'_>) -> Result<(), ExportError>;
}

/// Errors that may occur while building a target.
#[derive(Debug, Error)]
pub enum TargetBuildError {
    /// Invalid user supplied configuration.
    #[error("invalid target configuration: {0}")]
    InvalidConfig(String),
}

/// Buffering, filtering log target host.
///
/// Records that pass the filter chain are buffered until
/// `export_interval` of them have accumulated or [`flush`](Self::flush) is
/// called, then exported as one batch. The buffer is cleared only after a
/// successful export, so a failed delivery keeps the batch for the next
/// attempt.
pub struct BufferedTarget {
    exporter: Box<dyn Exporter>,
    formatter: Box<dyn Formatter>,
    filters: Vec<Arc<dyn Filter>>,
    export_interval: usize,
    records: Mutex<Vec<LogRecord>>,
}

impl BufferedTarget {
    /// Target with the default formatter, no filters and the default
    /// export interval.
    pub fn new(exporter: impl Exporter + 'static) -> Self {
        Self {
            exporter: Box::new(exporter),
            formatter: Box::new(DefaultFormatter),
            filters: Vec::new(),
            export_interval: DEFAULT_EXPORT_INTERVAL,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Accept `record` if every filter passes, exporting in-line once the
    /// export interval is reached.
    pub fn handle(&self, record: LogRecord) -> Result<(), ExportError> {
        if !self.filters.iter().all(|f| f.should_log(&record)) {
            return Ok(());
        }
        let mut records = self.records.lock();
        records.push(record);
        if records.len() >= self.export_interval {
            self.export_locked(&mut records)?;
        }
        Ok(())
    }

    /// Export the buffered records now, regardless of the export interval.
    ///
    /// An empty buffer is a no-op: no export is attempted.
    pub fn flush(&self) -> Result<(), ExportError> {
        let mut records = self.records.lock();
        self.export_locked(&mut records)
    }

    /// Number of records currently buffered.
    pub fn buffered(&self) -> usize {
        self.records.lock().len()
    }

    fn export_locked(&self, records: &mut Vec<LogRecord>) -> Result<(), ExportError> {
        if records.is_empty() {
            return Ok(());
        }
        let batch = Batch::new(records, self.formatter.as_ref());
        self.exporter.export(&batch)?;
        records.clear();
        Ok(())
    }
}

impl Drop for BufferedTarget {
    /// Best-effort export of any remaining records.
    ///
    /// `Drop` cannot propagate, so a failure here is reported through the
    /// `log` facade instead and the records are lost with the target.
    fn drop(&mut self) {
        let mut records = self.records.lock();
        let count = records.len();
        if count > 0 {
            if let Err(err) = self.export_locked(&mut records) {
                warn!("BufferedTarget: failed to export {count} buffered records on drop: {err}");
            }
        }
    }
}

/// Builder for [`BufferedTarget`].
pub struct BufferedTargetBuilder {
    exporter: Box<dyn Exporter>,
    formatter: Box<dyn Formatter>,
    filters: Vec<Arc<dyn Filter>>,
    export_interval: Option<usize>,
}

impl BufferedTargetBuilder {
    /// Create a builder around the exporter that will receive batches.
    pub fn new(exporter: impl Exporter + 'static) -> Self {
        Self {
            exporter: Box::new(exporter),
            formatter: Box::new(DefaultFormatter),
            filters: Vec::new(),
            export_interval: None,
        }
    }

    /// Replace the default record formatter.
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Append a filter to the chain; records must pass every filter.
    pub fn with_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the record count that triggers an export.
    pub fn with_export_interval(mut self, interval: usize) -> Self {
        self.export_interval = Some(interval);
        self
    }

    fn validate(&self) -> Result<(), TargetBuildError> {
        if let Some(interval) = self.export_interval {
            if interval == 0 {
                return Err(TargetBuildError::InvalidConfig(
                    "export_interval must be greater than zero".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn build(self) -> Result<BufferedTarget, TargetBuildError> {
        self.validate()?;
        Ok(BufferedTarget {
            exporter: self.exporter,
            formatter: self.formatter,
            filters: self.filters,
            export_interval: self.export_interval.unwrap_or(DEFAULT_EXPORT_INTERVAL),
            records: Mutex::new(Vec::new()),
        })
    }
}
