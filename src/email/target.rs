//! The email exporter: render, compose, send, wrap failures.

use std::sync::Arc;

use crate::{
    mailer::{MailMessage, Mailer},
    target::{Batch, ExportError, Exporter},
};

use super::{wrap::word_wrap, ConfigError, Recipients};

/// Subject used when none is configured.
pub const DEFAULT_SUBJECT: &str = "Application Log";

/// Column at which message bodies are wrapped for plain-text mail clients.
const BODY_WRAP_COLUMNS: usize = 70;

/// Display message of the [`ExportError`] raised when delivery fails. The
/// mailer's own error is attached as the source.
const EXPORT_FAILED: &str = "Unable to export log through email.";

/// Exporter that delivers each batch as one plain-text email.
///
/// The recipient set and subject are fixed at construction; the target
/// holds no other state, so a single instance serves any number of
/// flushes. It performs exactly one delivery attempt per flush and never
/// retries.
pub struct EmailTarget {
    mailer: Arc<dyn Mailer>,
    to: Recipients,
    subject: String,
}

impl EmailTarget {
    /// Create a target delivering through `mailer` to `to`.
    ///
    /// Fails when the recipient set is empty, or contains an empty address
    /// or display name. The subject starts as [`DEFAULT_SUBJECT`].
    pub fn new(mailer: Arc<dyn Mailer>, to: impl Into<Recipients>) -> Result<Self, ConfigError> {
        let to = to.into();
        to.validate()?;
        Ok(Self {
            mailer,
            to,
            subject: DEFAULT_SUBJECT.to_owned(),
        })
    }

    /// Replace the default subject.
    ///
    /// An empty subject keeps [`DEFAULT_SUBJECT`]; any other value is used
    /// verbatim, untrimmed.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        let subject = subject.into();
        if !subject.is_empty() {
            self.subject = subject;
        }
        self
    }

    /// The configured recipient set.
    pub fn recipients(&self) -> &Recipients {
        &self.to
    }

    /// The effective subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

impl Exporter for EmailTarget {
    fn export(&self, batch: &Batch<'_>) -> Result<(), ExportError> {
        let body = word_wrap(&batch.render("\n"), BODY_WRAP_COLUMNS);
        let message = MailMessage::new(self.to.clone(), self.subject.as_str(), body);
        self.mailer
            .send(&message)
            .map_err(|source| ExportError::with_source(EXPORT_FAILED, source))
    }
}
