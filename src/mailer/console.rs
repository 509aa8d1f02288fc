//! Console-backed mailer for development.

use super::{MailError, MailMessage, Mailer};

/// Mailer that prints composed messages to stdout instead of delivering
/// them. Useful while wiring a target up locally.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMailer;

impl ConsoleMailer {
    pub fn new() -> Self {
        Self
    }
}

impl Mailer for ConsoleMailer {
    fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        println!(
            "To: {}\nSubject: {}\n\n{}",
            message.to(),
            message.subject(),
            message.body(),
        );
        Ok(())
    }
}
