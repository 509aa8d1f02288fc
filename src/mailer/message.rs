//! The composed message value handed to a mailer.

use crate::email::Recipients;

/// One outgoing plain-text message: recipients, subject and body.
///
/// Composed fresh for every flush and discarded once the send returns;
/// nothing is retained between flushes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailMessage {
    to: Recipients,
    subject: String,
    body: String,
}

impl MailMessage {
    /// Compose a message.
    pub fn new(to: Recipients, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to,
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// The recipient set.
    pub fn to(&self) -> &Recipients {
        &self.to
    }

    /// The subject line.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The plain-text body.
    pub fn body(&self) -> &str {
        &self.body
    }
}
