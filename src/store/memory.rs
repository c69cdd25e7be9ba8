use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{InsertOutcome, StoreError, StoreResult, WaitlistStore};
use crate::waitlist::{NewWaitlistEntry, WaitlistEntry};

/// In-process `WaitlistStore` with the same uniqueness rules as the Postgres table.
/// Every instance is its own empty arena; used by tests and for running without a database.
#[derive(Debug, Default)]
pub struct MemoryWaitlistStore {
    entries: Mutex<Vec<WaitlistEntry>>,
}

impl MemoryWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Vec<WaitlistEntry>>> {
        self.entries
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("memory store poisoned: {e}")))
    }
}

#[async_trait]
impl WaitlistStore for MemoryWaitlistStore {
    async fn insert_entry(&self, entry: NewWaitlistEntry) -> StoreResult<InsertOutcome> {
        // The lock is held across the check and the insert
        let mut entries = self.lock()?;

        let email = entry.email.as_ref();
        let lowercase_email = email.to_lowercase();
        if entries
            .iter()
            .any(|e| e.email.to_lowercase() == lowercase_email)
        {
            return Ok(InsertOutcome::DuplicateEmail);
        }

        let id = entries.last().map_or(1, |e| e.id + 1);
        let new_entry = WaitlistEntry {
            id,
            email: email.to_owned(),
            name: entry.name,
            company: entry.company,
            created_at: Utc::now(),
        };
        entries.push(new_entry.clone());

        Ok(InsertOutcome::Inserted(new_entry))
    }

    async fn count_entries(&self) -> StoreResult<u64> {
        Ok(self.lock()?.len() as u64)
    }
}
