//! PhoneNumber value object.

use crate::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum digits in a normalized phone number.
pub const PHONE_DIGITS_MIN: usize = 10;

/// Maximum digits in a normalized phone number (E.164 ceiling).
pub const PHONE_DIGITS_MAX: usize = 15;

/// A phone number normalized to its digits.
///
/// Construction strips every non-digit character (spaces, dashes, parens,
/// a leading `+`), then requires the remainder to be 10-15 digits. The
/// stored form is digits-only, so two differently formatted inputs compare
/// equal.
///
/// # Examples
///
/// ```
/// use prospector_domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("987-654-3210").unwrap();
/// assert_eq!(phone.as_str(), "9876543210");
/// assert!(PhoneNumber::new("123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize and validate a raw phone value.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = phone.into();
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        if digits.is_empty() {
            return Err(ValidationError::InvalidPhone(format!(
                "{raw:?} contains no digits"
            )));
        }
        if digits.len() < PHONE_DIGITS_MIN || digits.len() > PHONE_DIGITS_MAX {
            return Err(ValidationError::InvalidPhone(format!(
                "expected {PHONE_DIGITS_MIN}-{PHONE_DIGITS_MAX} digits, got {}",
                digits.len()
            )));
        }

        Ok(Self(digits))
    }

    /// The normalized digits-only form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value and return the underlying `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: normalization output is always digits-only and in bounds
        #[test]
        fn test_normalized_form_is_digits(raw in "[-+ ().0-9]{1,40}") {
            if let Ok(phone) = PhoneNumber::new(raw) {
                prop_assert!(phone.as_str().chars().all(|c| c.is_ascii_digit()));
                let len = phone.as_str().len();
                prop_assert!((PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&len));
            }
        }

        /// Property: formatting characters never change the normalized value
        #[test]
        fn test_formatting_is_ignored(digits in "[0-9]{10,15}") {
            let spaced = digits
                .chars()
                .flat_map(|c| [c, ' '])
                .collect::<String>();
            let plain = PhoneNumber::new(digits).unwrap();
            let formatted = PhoneNumber::new(spaced).unwrap();
            prop_assert_eq!(plain, formatted);
        }
    }
}
