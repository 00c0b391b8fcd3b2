use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(pub email_address::EmailAddress);

/// An email address paired with an optional display name, as accepted by the
/// mail provider's `from`/`to` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddressWithName {
    pub email: EmailAddress,
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    /// Parses an address after applying the canonical storage normalization:
    /// surrounding whitespace removed and the whole address lower-cased.
    pub fn normalized(input: &str) -> Result<Self, email_address::Error> {
        input.trim().to_lowercase().parse()
    }

    pub fn with_name(self, name: impl Into<String>) -> EmailAddressWithName {
        EmailAddressWithName {
            email: self,
            name: Some(name.into()),
        }
    }
}

impl EmailAddressWithName {
    pub fn into_email_address(self) -> EmailAddress {
        self.email
    }
}

impl From<EmailAddress> for EmailAddressWithName {
    fn from(email: EmailAddress) -> Self {
        Self { email, name: None }
    }
}

impl FromStr for EmailAddress {
    type Err = email_address::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = email_address::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(|email| Self { email, name: None })
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
