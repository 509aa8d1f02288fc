//! logmail — a buffered log target that ships record batches by email.
//!
//! Records accumulate in a [`BufferedTarget`] until a flush is triggered,
//! either by count or explicitly. The batch is then rendered one record
//! per line, wrapped at 70 columns and delivered as a single plain-text
//! message through a [`Mailer`]. Delivery failures are never swallowed:
//! they surface as an [`ExportError`] with the underlying cause attached.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use logmail::{
//!     BufferedTargetBuilder, EmailTarget, Level, LogRecord, SmtpConfig, SmtpMailer,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let mailer = Arc::new(SmtpMailer::new(SmtpConfig::new(
//!     "smtp.example.com",
//!     "logs@example.com",
//! ))?);
//! let exporter = EmailTarget::new(mailer, "ops@example.com")?.with_subject("Production log");
//! let target = BufferedTargetBuilder::new(exporter)
//!     .with_export_interval(100)
//!     .build()?;
//!
//! target.handle(LogRecord::new("app", Level::Error, "boom"))?;
//! target.flush()?;
//! # Ok(())
//! # }
//! ```

pub mod email;
pub mod filters;
pub mod formatter;
pub mod level;
pub mod mailer;
pub mod record;
pub mod target;

pub use email::{ConfigError, EmailTarget, Recipient, Recipients, DEFAULT_SUBJECT};
pub use filters::{
    CategoryFilterBuilder, Filter, FilterBuildError, FilterBuilderTrait, LevelFilterBuilder,
};
pub use formatter::{DefaultFormatter, Formatter};
pub use level::{Level, ParseLevelError};
pub use mailer::{ConsoleMailer, MailError, MailMessage, Mailer};
#[cfg(feature = "smtp")]
pub use mailer::{SmtpConfig, SmtpMailer, TlsMode};
pub use record::LogRecord;
pub use target::{
    Batch, BufferedTarget, BufferedTargetBuilder, ExportError, Exporter, TargetBuildError,
    DEFAULT_EXPORT_INTERVAL,
};
