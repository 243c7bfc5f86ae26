//! Integration tests for the notification feed, the overdue-reminder
//! sweep, and the delete cascade back to reminders.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use uuid::Uuid;

async fn reminder_for(
    app: &helpers::TestApp,
    token: &str,
    event_id: Uuid,
    reminder_time: chrono::DateTime<Utc>,
) -> Uuid {
    let response = app
        .request(
            "POST",
            "/api/reminders",
            Some(serde_json::json!({
                "event_id": event_id,
                "reminder_time": reminder_time.to_rfc3339(),
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.id()
}

#[tokio::test]
async fn test_sweep_processes_overdue_reminders_once() {
    let app = helpers::TestApp::new();
    let admin = helpers::admin_token(Uuid::new_v4());
    let member = helpers::member_token(Uuid::new_v4());

    let event_id = app
        .create_event(&admin, "Finals study night", Utc::now() + Duration::days(1))
        .await;
    reminder_for(&app, &member, event_id, Utc::now() - Duration::hours(1)).await;

    let sweep = app
        .request("POST", "/api/reminders/process-overdue", None, Some(&admin))
        .await;
    assert_eq!(sweep.status, StatusCode::OK);
    assert_eq!(sweep.data()["processed"], 1);
    assert!(sweep.data()["errors"].as_array().unwrap().is_empty());

    // The reminder is now marked sent and the feed has the companion
    // notification plus the sweep one.
    let reminders = app.request("GET", "/api/reminders", None, Some(&member)).await;
    assert_eq!(reminders.data()[0]["is_sent"], true);

    let feed = app
        .request("GET", "/api/notifications", None, Some(&member))
        .await;
    assert_eq!(feed.data().as_array().unwrap().len(), 2);

    // A second sweep finds nothing left to do.
    let sweep = app
        .request("POST", "/api/reminders/process-overdue", None, Some(&admin))
        .await;
    assert_eq!(sweep.data()["processed"], 0);
}

#[tokio::test]
async fn test_sweep_skips_future_reminders() {
    let app = helpers::TestApp::new();
    let admin = helpers::admin_token(Uuid::new_v4());
    let member = helpers::member_token(Uuid::new_v4());

    let event_id = app
        .create_event(&admin, "Welcome week", Utc::now() + Duration::days(10))
        .await;
    reminder_for(&app, &member, event_id, Utc::now() + Duration::days(9)).await;

    let sweep = app
        .request("POST", "/api/reminders/process-overdue", None, Some(&admin))
        .await;
    assert_eq!(sweep.data()["processed"], 0);

    let reminders = app.request("GET", "/api/reminders", None, Some(&member)).await;
    assert_eq!(reminders.data()[0]["is_sent"], false);
}

#[tokio::test]
async fn test_sweep_isolates_failing_reminder() {
    let app = helpers::TestApp::new();
    let admin = helpers::admin_token(Uuid::new_v4());
    let broken_user = Uuid::new_v4();
    let broken = helpers::member_token(broken_user);
    let healthy = helpers::member_token(Uuid::new_v4());

    let event_id = app
        .create_event(&admin, "Open mic", Utc::now() + Duration::days(1))
        .await;
    reminder_for(&app, &broken, event_id, Utc::now() - Duration::hours(2)).await;
    reminder_for(&app, &healthy, event_id, Utc::now() - Duration::hours(2)).await;

    // Notification writes for this user start failing after setup.
    app.notifications.fail_creates_for(broken_user);

    let sweep = app
        .request("POST", "/api/reminders/process-overdue", None, Some(&admin))
        .await;
    assert_eq!(sweep.status, StatusCode::OK);
    assert_eq!(sweep.data()["processed"], 1);
    assert_eq!(sweep.data()["errors"].as_array().unwrap().len(), 1);

    // The failed reminder stays unsent so the next sweep retries it.
    let reminders = app.request("GET", "/api/reminders", None, Some(&broken)).await;
    assert_eq!(reminders.data()[0]["is_sent"], false);
}

#[tokio::test]
async fn test_deleting_reminder_notification_cascades() {
    let app = helpers::TestApp::new();
    let admin = helpers::admin_token(Uuid::new_v4());
    let member = helpers::member_token(Uuid::new_v4());

    let event_id = app
        .create_event(&admin, "Farmers market", Utc::now() + Duration::days(2))
        .await;
    reminder_for(&app, &member, event_id, Utc::now() + Duration::days(1)).await;

    let feed = app
        .request("GET", "/api/notifications", None, Some(&member))
        .await;
    let notification_id = feed.data()[0]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/notifications/{notification_id}"),
            None,
            Some(&member),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The pending reminder went with it.
    let reminders = app.request("GET", "/api/reminders", None, Some(&member)).await;
    assert!(reminders.data().as_array().unwrap().is_empty());

    let feed = app
        .request("GET", "/api/notifications", None, Some(&member))
        .await;
    assert!(feed.data().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_cannot_delete_another_users_notification() {
    let app = helpers::TestApp::new();
    let admin = helpers::admin_token(Uuid::new_v4());
    let owner = helpers::member_token(Uuid::new_v4());
    let other = helpers::member_token(Uuid::new_v4());

    let event_id = app
        .create_event(&admin, "Chess tournament", Utc::now() + Duration::days(3))
        .await;
    reminder_for(&app, &owner, event_id, Utc::now() + Duration::days(1)).await;

    let feed = app
        .request("GET", "/api/notifications", None, Some(&owner))
        .await;
    let notification_id = feed.data()[0]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "DELETE",
            &format!("/api/notifications/{notification_id}"),
            None,
            Some(&other),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_notification_directly() {
    let app = helpers::TestApp::new();
    let member = helpers::member_token(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/notifications",
            Some(serde_json::json!({
                "title": "Semester schedule published",
                "message": "Check the portal for your new schedule.",
            })),
            Some(&member),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["kind"], "general");
    assert_eq!(response.data()["is_read"], false);

    let feed = app
        .request("GET", "/api/notifications", None, Some(&member))
        .await;
    assert_eq!(feed.data().as_array().unwrap().len(), 1);

    let blank = app
        .request(
            "POST",
            "/api/notifications",
            Some(serde_json::json!({ "title": "", "message": "body" })),
            Some(&member),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lookup_reminder_by_event() {
    let app = helpers::TestApp::new();
    let admin = helpers::admin_token(Uuid::new_v4());
    let member = helpers::member_token(Uuid::new_v4());

    let event_id = app
        .create_event(&admin, "Career panel", Utc::now() + Duration::days(6))
        .await;
    let reminder_id = reminder_for(&app, &member, event_id, Utc::now() + Duration::days(5)).await;

    let response = app
        .request(
            "GET",
            &format!("/api/reminders/event/{event_id}"),
            None,
            Some(&member),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], reminder_id.to_string());

    // No reminder for this event yields a null data field, not an error.
    let none = app
        .request(
            "GET",
            &format!("/api/reminders/event/{}", Uuid::new_v4()),
            None,
            Some(&member),
        )
        .await;
    assert_eq!(none.status, StatusCode::OK);
    assert!(none.data().is_null());
}

#[tokio::test]
async fn test_read_state_endpoints() {
    let app = helpers::TestApp::new();
    let admin = helpers::admin_token(Uuid::new_v4());
    let member = helpers::member_token(Uuid::new_v4());

    let first = app
        .create_event(&admin, "Art exhibit", Utc::now() + Duration::days(4))
        .await;
    let second = app
        .create_event(&admin, "Science fair", Utc::now() + Duration::days(5))
        .await;
    reminder_for(&app, &member, first, Utc::now() + Duration::days(1)).await;
    reminder_for(&app, &member, second, Utc::now() + Duration::days(1)).await;

    let count = app
        .request("GET", "/api/notifications/unread-count", None, Some(&member))
        .await;
    assert_eq!(count.data()["count"], 2);

    let feed = app
        .request("GET", "/api/notifications/unread", None, Some(&member))
        .await;
    let notification_id = feed.data()[0]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/notifications/{notification_id}/read"),
            None,
            Some(&member),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let count = app
        .request("GET", "/api/notifications/unread-count", None, Some(&member))
        .await;
    assert_eq!(count.data()["count"], 1);

    let response = app
        .request("PUT", "/api/notifications/read-all", None, Some(&member))
        .await;
    assert_eq!(response.data()["updated"], 1);

    let count = app
        .request("GET", "/api/notifications/unread-count", None, Some(&member))
        .await;
    assert_eq!(count.data()["count"], 0);
}
