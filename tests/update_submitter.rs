//! Submitting an edited record: one call, fresh timestamp, redirect and
//! cache invalidation.

mod common;

use chrono::{FixedOffset, TimeZone};
use common::{fetcher, sample_user, FakeApi, Step};
use guestdesk::commands::{update_user, EditError};
use guestdesk::detail::FetchSource;
use guestdesk::navigation::Route;
use guestdesk::notify::NotificationLevel;
use guestdesk::submit::{SubmitOutcome, UpdateSubmitter, UPDATE_SUCCESS_MESSAGE};
use guestdesk::ui::form::FieldKey;

#[tokio::test(start_paused = true)]
async fn successful_update_sends_one_call_and_redirects() {
    let api = FakeApi::with_users([sample_user("42")]);
    let fetcher = fetcher(api.clone());
    let submitter = UpdateSubmitter::new(fetcher.clone());

    let mut edited = fetcher.fetch("42").await.unwrap().record;
    edited.roles = "admin".to_string();
    let outcome = submitter.submit("42", edited).await;

    assert_eq!(api.update_calls().len(), 1);
    match outcome {
        SubmitOutcome::Saved {
            record,
            notification,
            redirect,
        } => {
            assert_eq!(record.roles, "admin");
            assert_eq!(notification.level, NotificationLevel::Success);
            assert_eq!(notification.message, UPDATE_SUCCESS_MESSAGE);
            assert_eq!(redirect, Route::UserList);
        }
        other => panic!("expected Saved, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn update_body_carries_fresh_timestamp() {
    let api = FakeApi::with_users([sample_user("42")]);
    let fetcher = fetcher(api.clone());
    let submitter = UpdateSubmitter::new(fetcher.clone());
    let now = FixedOffset::east_opt(7 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 19, 9, 30, 5)
        .unwrap();

    let loaded = fetcher.fetch("42").await.unwrap().record;
    submitter.submit_at("42", loaded.clone(), &now).await;

    let (id, body) = api.update_calls().remove(0);
    assert_eq!(id, "42");
    assert_ne!(body.update_at, loaded.update_at);
    assert_eq!(body.update_at, "Mon Oct 19 2026 09:30:05 GMT+0700");
    assert_eq!(body.create_at, loaded.create_at);
    assert_eq!(body.id, "42");
}

#[tokio::test(start_paused = true)]
async fn failed_update_reports_service_message() {
    let api = FakeApi::with_users([sample_user("42")]);
    api.script_update([Step::fail(400, "Email already exists")]);
    let fetcher = fetcher(api.clone());
    let submitter = UpdateSubmitter::new(fetcher.clone());

    let loaded = fetcher.fetch("42").await.unwrap().record;
    let outcome = submitter.submit("42", loaded).await;

    assert!(!outcome.is_saved());
    assert_eq!(outcome.notification().level, NotificationLevel::Error);
    assert_eq!(outcome.notification().message, "Email already exists");
    assert_eq!(api.update_calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_update_is_not_retried() {
    let api = FakeApi::with_users([sample_user("42")]);
    api.script_update([Step::fail(500, "")]);
    let fetcher = fetcher(api.clone());

    let outcome = UpdateSubmitter::new(fetcher)
        .submit("42", sample_user("42"))
        .await;

    assert_eq!(
        outcome.notification().message,
        "Request failed with status code 500"
    );
    assert_eq!(api.update_calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn successful_update_invalidates_cached_detail() {
    let api = FakeApi::with_users([sample_user("42")]);
    let fetcher = fetcher(api.clone());
    let submitter = UpdateSubmitter::new(fetcher.clone());

    let mut edited = fetcher.fetch("42").await.unwrap().record;
    edited.fullname = "Renamed".to_string();
    submitter.submit("42", edited).await;

    let reloaded = fetcher.fetch("42").await.unwrap();
    assert_eq!(reloaded.source, FetchSource::Network);
    assert_eq!(reloaded.record.fullname, "Renamed");
}

#[tokio::test(start_paused = true)]
async fn failed_update_keeps_cached_detail() {
    let api = FakeApi::with_users([sample_user("42")]);
    api.script_update([Step::fail(500, "boom")]);
    let fetcher = fetcher(api.clone());

    let loaded = fetcher.fetch("42").await.unwrap().record;
    UpdateSubmitter::new(fetcher.clone()).submit("42", loaded).await;

    assert_eq!(fetcher.fetch("42").await.unwrap().source, FetchSource::Cache);
}

#[tokio::test(start_paused = true)]
async fn update_user_applies_edits() {
    let api = FakeApi::with_users([sample_user("42")]);
    let fetcher = fetcher(api.clone());

    let outcome = update_user(
        &fetcher,
        "42",
        &[(FieldKey::Nights, "9".to_string())],
    )
    .await
    .unwrap();

    assert!(outcome.is_saved());
    assert_eq!(api.stored("42").unwrap().nights, "9");
}

#[tokio::test(start_paused = true)]
async fn update_user_with_empty_field_sends_nothing() {
    let api = FakeApi::with_users([sample_user("42")]);
    let fetcher = fetcher(api.clone());

    let err = update_user(&fetcher, "42", &[(FieldKey::Phone, String::new())])
        .await
        .unwrap_err();

    assert!(matches!(err, EditError::Missing(FieldKey::Phone)));
    assert!(api.update_calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn update_user_fails_when_user_cannot_be_loaded() {
    let api = FakeApi::with_users([]);
    let fetcher = fetcher(api.clone());

    let err = update_user(&fetcher, "42", &[]).await.unwrap_err();

    assert!(matches!(err, EditError::Fetch(_)));
    assert!(api.update_calls().is_empty());
}
