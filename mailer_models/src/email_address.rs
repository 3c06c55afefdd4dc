use std::str::FromStr;

use lettre::message::{Mailbox, Mailboxes};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub Mailbox);

/// A non-empty, comma separated list of recipients. Each entry is either a
/// bare address or `Name <address>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct EmailRecipients(pub Mailboxes);

#[derive(Debug, Error)]
pub enum EmailRecipientsError {
    #[error("No recipient given")]
    Empty,
    #[error(transparent)]
    Invalid(#[from] lettre::address::AddressError),
}

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn with_name(self, name: impl Into<String>) -> EmailAddressWithName {
        EmailAddressWithName(Mailbox {
            name: Some(name.into()),
            email: self.0,
        })
    }
}

impl EmailRecipients {
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|mailbox| AsRef::<str>::as_ref(&mailbox.email))
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Display for EmailRecipients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl FromStr for EmailRecipients {
    type Err = EmailRecipientsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmailRecipientsError::Empty);
        }

        let mailboxes = s.parse::<Mailboxes>()?;
        if mailboxes.iter().next().is_none() {
            return Err(EmailRecipientsError::Empty);
        }

        Ok(Self(mailboxes))
    }
}

impl TryFrom<String> for EmailRecipients {
    type Error = EmailRecipientsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
