//! Behavioural tests for the buffering host.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use logmail::{
    Batch, BufferedTargetBuilder, CategoryFilterBuilder, ExportError, Exporter,
    FilterBuilderTrait, Level, LevelFilterBuilder, LogRecord,
};
use rstest::rstest;

/// Exporter recording each batch's messages, failing while `fail` is set.
#[derive(Clone, Default)]
struct RecordingExporter(Arc<Inner>);

#[derive(Default)]
struct Inner {
    batches: Mutex<Vec<Vec<String>>>,
    fail: AtomicBool,
}

impl RecordingExporter {
    fn batches(&self) -> Vec<Vec<String>> {
        self.0.batches.lock().unwrap().clone()
    }

    fn set_failing(&self, failing: bool) {
        self.0.fail.store(failing, Ordering::SeqCst);
    }
}

impl Exporter for RecordingExporter {
    fn export(&self, batch: &Batch<'_>) -> Result<(), ExportError> {
        if self.0.fail.load(Ordering::SeqCst) {
            return Err(ExportError::new("exporter offline"));
        }
        let messages = batch
            .records()
            .iter()
            .map(|record| record.message.clone())
            .collect();
        self.0.batches.lock().unwrap().push(messages);
        Ok(())
    }
}

fn record(message: &str) -> LogRecord {
    LogRecord::new("app", Level::Info, message)
}

#[rstest]
fn export_interval_triggers_flush() {
    let exporter = RecordingExporter::default();
    let target = BufferedTargetBuilder::new(exporter.clone())
        .with_export_interval(2)
        .build()
        .expect("build should succeed");

    target.handle(record("first")).expect("handle should succeed");
    assert!(exporter.batches().is_empty());
    assert_eq!(target.buffered(), 1);

    target.handle(record("second")).expect("handle should succeed");
    assert_eq!(exporter.batches(), vec![vec!["first".to_owned(), "second".to_owned()]]);
    assert_eq!(target.buffered(), 0);
}

#[rstest]
fn explicit_flush_exports_early() {
    let exporter = RecordingExporter::default();
    let target = BufferedTargetBuilder::new(exporter.clone())
        .with_export_interval(100)
        .build()
        .expect("build should succeed");

    target.handle(record("only")).expect("handle should succeed");
    target.flush().expect("flush should succeed");
    assert_eq!(exporter.batches(), vec![vec!["only".to_owned()]]);
}

#[rstest]
fn flushing_an_empty_buffer_sends_nothing() {
    let exporter = RecordingExporter::default();
    let target = BufferedTargetBuilder::new(exporter.clone())
        .build()
        .expect("build should succeed");

    target.flush().expect("flush should succeed");
    assert!(exporter.batches().is_empty());
}

#[rstest]
fn failed_export_keeps_the_buffer() {
    let exporter = RecordingExporter::default();
    exporter.set_failing(true);
    let target = BufferedTargetBuilder::new(exporter.clone())
        .with_export_interval(100)
        .build()
        .expect("build should succeed");

    target.handle(record("kept")).expect("handle should succeed");
    target.flush().expect_err("flush should fail");
    assert_eq!(target.buffered(), 1);

    // The same batch goes out once the exporter recovers.
    exporter.set_failing(false);
    target.handle(record("fresh")).expect("handle should succeed");
    target.flush().expect("flush should succeed");
    assert_eq!(exporter.batches(), vec![vec!["kept".to_owned(), "fresh".to_owned()]]);
    assert_eq!(target.buffered(), 0);
}

#[rstest]
fn filters_drop_records_before_buffering() {
    let exporter = RecordingExporter::default();
    let target = BufferedTargetBuilder::new(exporter.clone())
        .with_filter(
            LevelFilterBuilder::new()
                .with_min_level(Level::Warn)
                .build()
                .expect("build should succeed"),
        )
        .with_filter(
            CategoryFilterBuilder::new()
                .with_category("app.*")
                .build()
                .expect("build should succeed"),
        )
        .build()
        .expect("build should succeed");

    target
        .handle(LogRecord::new("app.db", Level::Info, "too quiet"))
        .expect("handle should succeed");
    target
        .handle(LogRecord::new("vendor.http", Level::Error, "wrong category"))
        .expect("handle should succeed");
    target
        .handle(LogRecord::new("app.db", Level::Error, "kept"))
        .expect("handle should succeed");

    target.flush().expect("flush should succeed");
    assert_eq!(exporter.batches(), vec![vec!["kept".to_owned()]]);
}

#[rstest]
fn records_keep_arrival_order() {
    let exporter = RecordingExporter::default();
    let target = BufferedTargetBuilder::new(exporter.clone())
        .build()
        .expect("build should succeed");

    for message in ["one", "two", "three"] {
        target.handle(record(message)).expect("handle should succeed");
    }
    target.flush().expect("flush should succeed");
    assert_eq!(
        exporter.batches(),
        vec![vec!["one".to_owned(), "two".to_owned(), "three".to_owned()]]
    );
}

#[rstest]
fn drop_flushes_remaining_records() {
    let exporter = RecordingExporter::default();
    {
        let target = BufferedTargetBuilder::new(exporter.clone())
            .with_export_interval(100)
            .build()
            .expect("build should succeed");
        target.handle(record("pending")).expect("handle should succeed");
    }
    assert_eq!(exporter.batches(), vec![vec!["pending".to_owned()]]);
}
