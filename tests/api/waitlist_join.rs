use std::sync::Arc;

use anyhow::Result;
use claims::{assert_none, assert_some};
use peekr::waitlist::{DUPLICATE_EMAIL_MESSAGE, JOINED_MESSAGE};
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::helpers::{FailingStore, TestApp};

#[tokio::test]
async fn api_waitlist_join_with_full_details_ok() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .join_waitlist(&json!({
            "email": "test@example.com",
            "name": "John Doe",
            "company": "Test Co"
        }))
        .await?;

    assert!(res.success);
    assert_eq!(res.message, JOINED_MESSAGE);
    let entry = assert_some!(res.entry);
    assert_eq!(entry.email, "test@example.com");
    assert_eq!(entry.name.as_deref(), Some("John Doe"));
    assert_eq!(entry.company.as_deref(), Some("Test Co"));
    assert!(entry.id > 0);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_join_optional_fields_are_null() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        (json!({ "email": "absent@example.com" }), "Absent fields"),
        (
            json!({ "email": "null@example.com", "name": null, "company": null }),
            "Null fields",
        ),
        (
            json!({ "email": "empty@example.com", "name": "", "company": "" }),
            "Empty fields",
        ),
    ];

    for (body, description) in cases {
        let res = app.post_waitlist(&body).await?;
        assert_eq!(res.status(), StatusCode::OK, "{description}");

        let body: Value = res.json().await?;
        assert_eq!(body["success"], json!(true), "{description}");
        assert_eq!(body["entry"]["name"], Value::Null, "{description}");
        assert_eq!(body["entry"]["company"], Value::Null, "{description}");
        assert!(body["entry"]["created_at"].is_string(), "{description}");
    }

    assert_eq!(app.waitlist_count().await?, 3);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_join_duplicate_email_is_reported() -> Result<()> {
    let app = TestApp::spawn().await?;

    let first = app
        .join_waitlist(&json!({
            "email": "test@example.com",
            "name": "John Doe",
            "company": "Test Co"
        }))
        .await?;
    assert!(first.success);

    let res = app
        .post_waitlist(&json!({
            "email": "test@example.com",
            "name": "Different Name",
            "company": "Different Company"
        }))
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await?;
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": DUPLICATE_EMAIL_MESSAGE
        })
    );
    assert_eq!(app.waitlist_count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_join_duplicate_email_ignores_case() -> Result<()> {
    let app = TestApp::spawn().await?;

    app.join_waitlist(&json!({ "email": "Jane.Doe@Example.com" })).await?;
    let res = app.join_waitlist(&json!({ "email": "jane.doe@example.com" })).await?;

    assert!(!res.success);
    assert_none!(res.entry);
    assert_eq!(app.waitlist_count().await?, 1);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_join_returns_a_400_for_invalid_email() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        (json!({}), "Empty json"),
        (json!({ "name": "John Doe" }), "Missing email"),
        (json!({ "email": null, "name": "John Doe" }), "Null email"),
        (json!({ "email": "" }), "Empty email"),
        (json!({ "email": "not an email" }), "Invalid email"),
        (json!({ "email": "@domain.com" }), "Missing subject"),
    ];

    for (body, description) in cases {
        let res = app.post_waitlist(&body).await?;
        assert_eq!(
            res.status(),
            StatusCode::BAD_REQUEST,
            "The API did not return a 400 BAD REQUEST when the payload was: {description}"
        );

        let body: Value = res.json().await?;
        assert!(
            body["error"]["message"].is_string(),
            "Missing error message for: {description}"
        );
        assert!(body["error"]["data"]["req_id"].is_string());
    }

    assert_eq!(app.waitlist_count().await?, 0);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_join_stores_names_and_companies_as_sent() -> Result<()> {
    let app = TestApp::spawn().await?;
    let long_company = "a".repeat(300);

    let cases = [
        ("jj@example.com", r#"Jane "JJ" Doe"#, "Acme <Labs>"),
        ("johnny@example.com", "John (Johnny) Smith", long_company.as_str()),
        ("spaces@example.com", " Padded Name ", "   "),
    ];

    for (email, name, company) in cases {
        let res = app
            .post_waitlist(&json!({ "email": email, "name": name, "company": company }))
            .await?;
        assert_eq!(res.status(), StatusCode::OK, "{name}");

        let body: Value = res.json().await?;
        assert_eq!(body["success"], json!(true), "{name}");
        assert_eq!(body["entry"]["name"], json!(name));
        assert_eq!(body["entry"]["company"], json!(company));
    }

    assert_eq!(app.waitlist_count().await?, 3);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_join_rejects_malformed_body() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_waitlist(&json!({ "email": 42 })).await?;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn api_waitlist_join_storage_failure_returns_a_500() -> Result<()> {
    let app = TestApp::spawn_with_store(Arc::new(FailingStore)).await?;

    let res = app.post_waitlist(&json!({ "email": "test@example.com" })).await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = res.json().await?;
    assert_eq!(
        body["error"]["message"],
        json!("Something went wrong. Please try again later.")
    );
    assert_eq!(body["error"]["data"]["detail"], Value::Null);

    Ok(())
}
