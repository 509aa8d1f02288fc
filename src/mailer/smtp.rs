//! SMTP delivery backed by `lettre`'s blocking transport.

use lettre::{
    address::AddressError,
    message::Mailbox,
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};

use crate::email::{Recipient, Recipients};

use super::{MailError, MailMessage, Mailer};

/// How the SMTP connection is secured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS from the first byte (SMTPS relay).
    #[default]
    Required,
    /// Plain connection upgraded via STARTTLS.
    Opportunistic,
    /// No TLS, for local relays and tests.
    None,
}

/// Connection configuration for [`SmtpMailer`].
#[derive(Clone, Debug)]
pub struct SmtpConfig {
    host: String,
    port: Option<u16>,
    credentials: Option<(String, String)>,
    from: String,
    tls: TlsMode,
}

impl SmtpConfig {
    /// Configuration for `host`, sending as `from`.
    pub fn new(host: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            credentials: None,
            from: from.into(),
            tls: TlsMode::default(),
        }
    }

    /// Override the transport port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Authenticate with `username` and `password`.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Select how the connection is secured.
    pub fn with_tls(mut self, tls: TlsMode) -> Self {
        self.tls = tls;
        self
    }
}

/// Mailer delivering through a blocking SMTP transport.
///
/// The transport itself handles connection pooling and is safe to share;
/// `send` blocks until the relay accepts or rejects the message.
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build the transport described by `config`.
    pub fn new(config: SmtpConfig) -> Result<Self, MailError> {
        let from: Mailbox = config.from.parse()?;
        let mut builder = match config.tls {
            TlsMode::Required => SmtpTransport::relay(&config.host)?,
            TlsMode::Opportunistic => SmtpTransport::starttls_relay(&config.host)?,
            TlsMode::None => SmtpTransport::builder_dangerous(&config.host),
        };
        if let Some(port) = config.port {
            builder = builder.port(port);
        }
        if let Some((username, password)) = config.credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }
        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn mailbox(recipient: &Recipient) -> Result<Mailbox, AddressError> {
        let address = recipient.address.parse()?;
        Ok(Mailbox::new(recipient.name.clone(), address))
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(message.subject());
        match message.to() {
            Recipients::Single(address) => {
                builder = builder.to(address.parse::<Mailbox>()?);
            }
            Recipients::Many(entries) => {
                for entry in entries {
                    builder = builder.to(Self::mailbox(entry)?);
                }
            }
        }
        let email = builder.body(message.body().to_owned())?;
        self.transport.send(&email)?;
        Ok(())
    }
}
