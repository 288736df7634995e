//! Lead record and its CRM projection.

use crate::email::EmailAddress;
use crate::errors::ValidationError;
use crate::phone::PhoneNumber;
use serde::{Deserialize, Serialize};

/// One extracted contact, fully validated.
///
/// A `Lead` is immutable once constructed. All fields are optional at the
/// type level, but the extraction pipeline only returns leads that carry at
/// least one of email/phone; a draft with neither is turned into a typed
/// failure instead of a `Lead`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    name: Option<String>,
    email: Option<EmailAddress>,
    phone: Option<PhoneNumber>,
}

impl Lead {
    /// Assemble a lead from already-validated parts.
    pub fn new(
        name: Option<String>,
        email: Option<EmailAddress>,
        phone: Option<PhoneNumber>,
    ) -> Self {
        Self { name, email, phone }
    }

    /// Display name, free text, unvalidated.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Validated email address, if one was extracted.
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Normalized phone number, if one was extracted.
    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// True iff at least one of email or phone is present.
    ///
    /// The pipeline uses this for the empty-lead rule: a lead without
    /// contact info is never surfaced as a success.
    pub fn has_contact(&self) -> bool {
        self.email.is_some() || self.phone.is_some()
    }

    /// Project the lead into a flat payload safe for CRM insertion.
    ///
    /// The payload contains only the three validated scalar fields, never
    /// raw model output.
    pub fn to_crm_payload(&self) -> CrmPayload {
        CrmPayload {
            name: self.name.clone(),
            email: self.email.as_ref().map(|e| e.as_str().to_string()),
            phone: self.phone.as_ref().map(|p| p.as_str().to_string()),
        }
    }
}

/// Flat key-value projection of a [`Lead`] for a downstream store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmPayload {
    /// Display name as extracted
    pub name: Option<String>,
    /// Validated email address
    pub email: Option<String>,
    /// Digits-only phone number
    pub phone: Option<String>,
}

/// The raw field triple as parsed from a model response, before validation.
///
/// All fields are optional so partial input deserializes cleanly; unknown
/// keys in the response are ignored. [`LeadDraft::validate`] is the only
/// path from a draft to a [`Lead`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadDraft {
    /// Raw name value
    pub name: Option<String>,
    /// Raw email value, not yet checked
    pub email: Option<String>,
    /// Raw phone value, not yet normalized
    pub phone: Option<String>,
}

impl LeadDraft {
    /// Validate every field and assemble a [`Lead`].
    ///
    /// Empty or whitespace-only strings normalize to absent before the
    /// field rules apply, so `""` is treated like `null` rather than as a
    /// malformed value. A failure on any field rejects the whole draft;
    /// a partially-validated lead is never produced.
    pub fn validate(self) -> Result<Lead, ValidationError> {
        let name = normalize(self.name);
        let email = normalize(self.email).map(EmailAddress::new).transpose()?;
        let phone = normalize(self.phone).map(PhoneNumber::new).transpose()?;

        Ok(Lead::new(name, email, phone))
    }
}

/// Map empty/whitespace strings to `None`, trimming the rest.
fn normalize(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
