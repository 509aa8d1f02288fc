//! Recipient configuration for the email target.

use std::fmt;

use super::ConfigError;

/// Single addressee: an email address with an optional display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipient {
    pub address: String,
    pub name: Option<String>,
}

impl Recipient {
    /// A bare address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    /// An address with a display name.
    pub fn named(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.address),
            None => f.write_str(&self.address),
        }
    }
}

/// The "to" configuration of an [`EmailTarget`](super::EmailTarget).
///
/// Mirrors the two accepted shapes: one bare address, or an ordered set of
/// addressees. The order of `Many` entries is preserved exactly as given,
/// both for delivery and for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recipients {
    /// One bare address.
    Single(String),
    /// An ordered set of addressees.
    Many(Vec<Recipient>),
}

impl Recipients {
    /// One bare address.
    pub fn single(address: impl Into<String>) -> Self {
        Self::Single(address.into())
    }

    /// An ordered list of bare addresses.
    pub fn list<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(addresses.into_iter().map(Recipient::new).collect())
    }

    /// Ordered address/display-name pairs.
    pub fn named<I, A, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, N)>,
        A: Into<String>,
        N: Into<String>,
    {
        Self::Many(
            pairs
                .into_iter()
                .map(|(address, name)| Recipient::named(address, name))
                .collect(),
        )
    }

    /// Check the invariants enforced at target construction: the set is
    /// non-empty, every address is non-empty and a display name, when
    /// present, is non-empty.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Single(address) => {
                if address.is_empty() {
                    return Err(ConfigError::EmptyRecipients);
                }
            }
            Self::Many(entries) => {
                if entries.is_empty() {
                    return Err(ConfigError::EmptyRecipients);
                }
                for entry in entries {
                    if entry.address.is_empty() {
                        return Err(ConfigError::EmptyAddress);
                    }
                    if matches!(&entry.name, Some(name) if name.is_empty()) {
                        return Err(ConfigError::EmptyDisplayName);
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Recipients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(address) => f.write_str(address),
            Self::Many(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{entry}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Self::Single(address.to_owned())
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Self::Single(address)
    }
}

impl From<Vec<Recipient>> for Recipients {
    fn from(entries: Vec<Recipient>) -> Self {
        Self::Many(entries)
    }
}
