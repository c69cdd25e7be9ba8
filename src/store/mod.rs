//! The seam between the waitlist services and the persistent store.
//! The store handle is built once per process and handed to the services explicitly.

mod memory;
mod postgres;

pub use memory::MemoryWaitlistStore;
pub use postgres::PgWaitlistStore;

use async_trait::async_trait;

use crate::waitlist::{NewWaitlistEntry, WaitlistEntry};

/// Result of trying to insert a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(WaitlistEntry),
    /// The store rejected the entry because the email is already on the waitlist.
    /// Nothing was written.
    DuplicateEmail,
}

#[async_trait]
pub trait WaitlistStore: Send + Sync {
    /// Inserts exactly one entry, or nothing at all.
    async fn insert_entry(&self, entry: NewWaitlistEntry) -> StoreResult<InsertOutcome>;
    async fn count_entries(&self) -> StoreResult<u64>;
}

// ###################################
// ->   ERROR
// ###################################
pub type StoreResult<T> = core::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
