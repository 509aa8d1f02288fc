//! Email-based log target implementation.
//!
//! This module defines [`EmailTarget`], an exporter that renders the
//! buffered records into a single plain-text message and delivers it
//! through a [`Mailer`](crate::mailer::Mailer). The recipient set and
//! subject are validated once at construction and immutable afterwards;
//! each flush performs exactly one delivery attempt, and any failure is
//! wrapped with its cause preserved rather than propagated raw.
//!
//! # Body layout
//!
//! Records are formatted one per line, joined with `\n` and word-wrapped
//! at 70 columns so the message stays readable in plain-text mail clients.
//! Wrapping breaks only on spaces and never drops content.

mod recipients;
mod target;
mod wrap;

pub use recipients::{Recipient, Recipients};
pub use target::{EmailTarget, DEFAULT_SUBJECT};

use thiserror::Error;

/// Errors raised when constructing an [`EmailTarget`].
///
/// These are configuration mistakes; none of them can occur once
/// construction has succeeded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The recipient set contained no addresses.
    #[error("the \"to\" recipient set must not be empty")]
    EmptyRecipients,
    /// A recipient address was an empty string.
    #[error("recipient addresses must not be empty")]
    EmptyAddress,
    /// A recipient display name was supplied but empty.
    #[error("recipient display names must not be empty")]
    EmptyDisplayName,
}
