use async_trait::async_trait;
use sqlx::postgres::PgDatabaseError;

use super::{InsertOutcome, StoreError, StoreResult, WaitlistStore};
use crate::{
    database::DbManager,
    waitlist::{NewWaitlistEntry, WaitlistEntry},
};

/// SQLSTATE of a `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// `WaitlistStore` backed by the `waitlist` Postgres table.
#[derive(Clone, Debug)]
pub struct PgWaitlistStore {
    database_mgr: DbManager,
}

impl PgWaitlistStore {
    pub fn new(database_mgr: DbManager) -> Self {
        Self { database_mgr }
    }

    pub fn database_mgr(&self) -> &DbManager {
        &self.database_mgr
    }
}

#[async_trait]
impl WaitlistStore for PgWaitlistStore {
    #[tracing::instrument(name = "insert_waitlist_entry_postgres", skip_all)]
    async fn insert_entry(&self, entry: NewWaitlistEntry) -> StoreResult<InsertOutcome> {
        let query_result = sqlx::query_as::<_, WaitlistEntry>(
            r#"
            INSERT INTO waitlist (email, name, company)
            VALUES ($1, $2, $3)
            RETURNING id, email, name, company, created_at
        "#,
        )
        .bind(entry.email.as_ref())
        .bind(entry.name)
        .bind(entry.company)
        .fetch_one(self.database_mgr.db())
        .await;

        insert_outcome(query_result)
    }

    #[tracing::instrument(name = "count_waitlist_entries_postgres", skip_all)]
    async fn count_entries(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM waitlist")
            .fetch_one(self.database_mgr.db())
            .await?;

        // COUNT(*) is never negative
        Ok(count.unsigned_abs())
    }
}

// ###################################
// ->   HELPERS
// ###################################

/// Turns a unique violation into `InsertOutcome::DuplicateEmail`, propagates every other error.
fn insert_outcome(
    query_result: std::result::Result<WaitlistEntry, sqlx::Error>,
) -> StoreResult<InsertOutcome> {
    match query_result {
        Ok(entry) => Ok(InsertOutcome::Inserted(entry)),
        Err(sqlx::Error::Database(er))
            if er
                .try_downcast_ref::<PgDatabaseError>()
                .is_some_and(|er| er.code() == UNIQUE_VIOLATION) =>
        {
            Ok(InsertOutcome::DuplicateEmail)
        }
        Err(error) => Err(StoreError::Sqlx(error)),
    }
}
