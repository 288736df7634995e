//! EmailAddress value object.

use crate::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated email address.
///
/// Construction is the only way to obtain one, so any `EmailAddress` held
/// by a `Lead` is known to satisfy the grammar. The check is deliberately
/// modest: one `@`, a non-empty local part, and a domain with at least one
/// dot and no empty labels.
///
/// # Examples
///
/// ```
/// use prospector_domain::EmailAddress;
///
/// let email = EmailAddress::new("ankit@gmail.com").unwrap();
/// assert_eq!(email.as_str(), "ankit@gmail.com");
/// assert!(EmailAddress::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new `EmailAddress`, rejecting anything that fails the grammar.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    fn is_valid(email: &str) -> bool {
        let mut parts = email.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => return false,
        };

        if local.is_empty() {
            return false;
        }

        // Domain needs at least one dot, and every label must be non-empty
        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    }

    /// The address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value and return the underlying `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}
