use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{JoinWaitlistInput, NewWaitlistEntry, ValidationError, WaitlistEntry};
use crate::store::{InsertOutcome, StoreError, WaitlistStore};

pub const JOINED_MESSAGE: &str = "Successfully joined the waitlist!";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "This email is already on the waitlist.";

// ###################################
// ->   STRUCTS
// ###################################
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<WaitlistEntry>,
}

impl WaitlistResponse {
    fn joined(entry: WaitlistEntry) -> Self {
        Self {
            success: true,
            message: JOINED_MESSAGE.to_string(),
            entry: Some(entry),
        }
    }

    fn duplicate_email() -> Self {
        Self {
            success: false,
            message: DUPLICATE_EMAIL_MESSAGE.to_string(),
            entry: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistCount {
    pub count: u64,
}

// ###################################
// ->   SERVICES
// ###################################

/// Validates the input and adds it to the waitlist.
/// A duplicate email is a normal outcome (`success: false`), not an `Err`.
#[tracing::instrument(
    name = "Adding a new entry to the waitlist",
    skip(store, input),
    fields(email = input.email.as_deref().unwrap_or_default())
)]
pub async fn join_waitlist(
    store: &dyn WaitlistStore,
    input: JoinWaitlistInput,
) -> WaitlistResult<WaitlistResponse> {
    let new_entry = NewWaitlistEntry::try_from(input)?;

    match store.insert_entry(new_entry).await {
        Ok(InsertOutcome::Inserted(entry)) => {
            info!(id = entry.id, "New entry successfully added to the waitlist.");
            Ok(WaitlistResponse::joined(entry))
        }
        Ok(InsertOutcome::DuplicateEmail) => {
            info!("Email is already on the waitlist.");
            Ok(WaitlistResponse::duplicate_email())
        }
        Err(er) => {
            error!(error = %er, "Failed to join the waitlist");
            Err(er.into())
        }
    }
}

#[tracing::instrument(name = "Counting waitlist entries", skip_all)]
pub async fn waitlist_count(store: &dyn WaitlistStore) -> WaitlistResult<WaitlistCount> {
    let count = store.count_entries().await.inspect_err(|er| {
        error!(error = %er, "Failed to get the waitlist count");
    })?;

    Ok(WaitlistCount { count })
}

// ###################################
// ->   ERROR
// ###################################
pub type WaitlistResult<T> = core::result::Result<T, WaitlistError>;

#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
