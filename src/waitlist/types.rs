//! The waitlist data types and the validation of incoming signups.
//! Only a `NewWaitlistEntry` produced by `TryFrom<JoinWaitlistInput>` is ever handed to a store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

// ###################################
// ->   STRUCTS
// ###################################
/// A persisted waitlist entry, including the fields generated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WaitlistEntry {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Deserializable signup request.
/// Every field may be missing or `null`, both end up as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JoinWaitlistInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
}

impl JoinWaitlistInput {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }
}

/// Validated signup, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: ValidEmail,
    pub name: Option<String>,
    pub company: Option<String>,
}

impl TryFrom<JoinWaitlistInput> for NewWaitlistEntry {
    type Error = ValidationError;

    fn try_from(input: JoinWaitlistInput) -> Result<Self, Self::Error> {
        let email = input.email.ok_or(ValidationError::EmailMissing)?;

        Ok(NewWaitlistEntry {
            email: ValidEmail::parse(email)?,
            name: optional_text(input.name),
            company: optional_text(input.company),
        })
    }
}

/// Validated Email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmail(String);

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ValidEmail {
    /// Same limit as the `VARCHAR(255)` column.
    pub const MAX_LEN: usize = 255;

    pub fn parse<S>(value: S) -> Result<Self, ValidationError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return Err(ValidationError::EmailMissing);
        }

        if value.chars().count() > Self::MAX_LEN {
            return Err(ValidationError::EmailTooLong);
        }

        if value.validate_email() {
            Ok(ValidEmail(value.to_owned()))
        } else {
            Err(ValidationError::EmailInvalid)
        }
    }
}

// ###################################
// ->   HELPERS
// ###################################

/// Only an empty string is treated as "no value", everything else is stored as sent.
fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("email is required")]
    EmailMissing,
    #[error("email is not a valid email address")]
    EmailInvalid,
    #[error("email is too long")]
    EmailTooLong,
}
