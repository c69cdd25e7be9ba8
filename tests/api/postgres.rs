//! Runs the waitlist against a real Postgres server, each test in its own freshly created database.
//! Needs the server from `config/base.toml`: `cargo test -- --ignored`.

use std::sync::Arc;

use anyhow::Result;
use claims::{assert_none, assert_some};
use peekr::{
    config::get_or_init_config,
    database::DbManager,
    store::{InsertOutcome, PgWaitlistStore, WaitlistStore},
    waitlist::{join_waitlist, JoinWaitlistInput, NewWaitlistEntry, DUPLICATE_EMAIL_MESSAGE},
};
use serde_json::json;

use crate::helpers::TestApp;

async fn spawn_pg_app() -> Result<(TestApp, DbManager)> {
    let dm = DbManager::init_for_test(get_or_init_config()).await?;
    let app = TestApp::spawn_with_store(Arc::new(PgWaitlistStore::new(dm.clone()))).await?;
    Ok((app, dm))
}

#[tokio::test]
#[ignore = "requires a running Postgres server"]
async fn pg_join_saves_entry_to_database() -> Result<()> {
    let (app, dm) = spawn_pg_app().await?;

    let res = app
        .join_waitlist(&json!({
            "email": "test@example.com",
            "name": "John Doe",
            "company": "Test Company"
        }))
        .await?;
    let entry = assert_some!(res.entry);

    let (email, name, company): (String, Option<String>, Option<String>) =
        sqlx::query_as("SELECT email, name, company FROM waitlist WHERE id = $1")
            .bind(entry.id)
            .fetch_one(dm.db())
            .await?;

    assert_eq!(email, "test@example.com");
    assert_eq!(name.as_deref(), Some("John Doe"));
    assert_eq!(company.as_deref(), Some("Test Company"));

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres server"]
async fn pg_join_without_optional_fields_stores_null() -> Result<()> {
    let (app, dm) = spawn_pg_app().await?;

    app.join_waitlist(&json!({ "email": "optional@example.com", "name": null })).await?;

    let (name, company): (Option<String>, Option<String>) =
        sqlx::query_as("SELECT name, company FROM waitlist WHERE email = $1")
            .bind("optional@example.com")
            .fetch_one(dm.db())
            .await?;

    assert_eq!(name, None);
    assert_eq!(company, None);

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres server"]
async fn pg_duplicate_email_inserts_nothing() -> Result<()> {
    let (app, _dm) = spawn_pg_app().await?;

    let first = app
        .join_waitlist(&json!({ "email": "test@example.com", "name": "John Doe" }))
        .await?;
    assert!(first.success);

    let second = app
        .join_waitlist(&json!({ "email": "TEST@example.com", "name": "Different Name" }))
        .await?;
    assert!(!second.success);
    assert_eq!(second.message, DUPLICATE_EMAIL_MESSAGE);

    assert_eq!(app.waitlist_count().await?, 1);

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres server"]
async fn pg_store_ids_increase_and_count_matches() -> Result<()> {
    let dm = DbManager::init_for_test(get_or_init_config()).await?;
    let store = PgWaitlistStore::new(dm);
    assert_eq!(store.count_entries().await?, 0);

    let mut last_id = 0;
    for i in 0..3 {
        let input = JoinWaitlistInput::new(format!("u{i}@example.com"));
        let entry = NewWaitlistEntry::try_from(input)?;
        let InsertOutcome::Inserted(entry) = store.insert_entry(entry).await? else {
            panic!("expected u{i}@example.com to be inserted");
        };
        assert!(entry.id > last_id);
        last_id = entry.id;
    }

    assert_eq!(store.count_entries().await?, 3);

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres server"]
async fn pg_concurrent_joins_with_same_email_have_a_single_winner() -> Result<()> {
    let dm = DbManager::init_for_test(get_or_init_config()).await?;
    let store = Arc::new(PgWaitlistStore::new(dm));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                join_waitlist(store.as_ref(), JoinWaitlistInput::new("race@example.com")).await
            })
        })
        .collect();

    let mut winners = 0;
    for handle in handles {
        let res = handle.await??;
        if res.success {
            winners += 1;
        } else {
            assert_eq!(res.message, DUPLICATE_EMAIL_MESSAGE);
            assert_none!(res.entry);
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(store.count_entries().await?, 1);

    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Postgres server"]
async fn pg_store_unreachable_fails_with_500() -> Result<()> {
    let dm = DbManager::init_for_test(get_or_init_config()).await?;
    dm.db().close().await;
    let app = TestApp::spawn_with_store(Arc::new(PgWaitlistStore::new(dm))).await?;

    let res = app.post_waitlist(&json!({ "email": "test@example.com" })).await?;
    assert_eq!(res.status().as_u16(), 500);

    let res = app.get_waitlist_count().await?;
    assert_eq!(res.status().as_u16(), 500);

    Ok(())
}
