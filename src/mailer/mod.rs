//! Mail delivery collaborators.
//!
//! A [`Mailer`] accepts a composed [`MailMessage`] and attempts delivery.
//! Failures are opaque boxed errors: the logging side only ever wraps and
//! surfaces them, it never inspects them. [`SmtpMailer`] delivers over a
//! blocking SMTP transport (feature `smtp`, enabled by default);
//! [`ConsoleMailer`] prints messages for development.

mod console;
mod message;
#[cfg(feature = "smtp")]
mod smtp;

pub use console::ConsoleMailer;
pub use message::MailMessage;
#[cfg(feature = "smtp")]
pub use smtp::{SmtpConfig, SmtpMailer, TlsMode};

/// Opaque delivery failure.
pub type MailError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Trait implemented by all mail delivery backends.
///
/// Implementations must be safe for concurrent use; the logging side calls
/// [`send`](Self::send) without additional locking, and `send` may block
/// for as long as the underlying transport does.
pub trait Mailer: Send + Sync {
    /// Deliver one composed message, returning an opaque error on failure.
    fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}
