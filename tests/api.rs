use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use mergington::services::registration_service::{self, RegistrationError};
use mergington::{bootstrap, web};

// Single connection so every query in a test sees the same in-memory database.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Cannot open in-memory store");
    bootstrap::initialize(&pool).await.expect("Bootstrap failed");
    pool
}

async fn test_app() -> (Router, SqlitePool) {
    let pool = test_pool().await;
    (web::app(pool.clone()), pool)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn root_redirects_to_landing_page() {
    let (app, _pool) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn activities_listing_returns_seeded_roster() {
    let (app, _pool) = test_app().await;

    let (status, json) = send(&app, "GET", "/activities").await;
    assert_eq!(status, StatusCode::OK);

    let activities = json.as_object().unwrap();
    assert_eq!(activities.len(), 9);

    let chess = &activities["Chess Club"];
    assert_eq!(chess["max_participants"], 12);
    assert_eq!(
        chess["schedule"],
        "Fridays, 3:30 PM - 5:00 PM"
    );
    assert_eq!(
        chess["participants"],
        serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
    );
}

#[tokio::test]
async fn signup_adds_participant() {
    let (app, _pool) = test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=newkid@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "Signed up newkid@mergington.edu for Chess Club"
    );

    let (_, json) = send(&app, "GET", "/activities").await;
    let participants = json["Chess Club"]["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 3);
    assert_eq!(participants[2], "newkid@mergington.edu");
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let (app, _pool) = test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Already signed up for this activity");
}

#[tokio::test]
async fn signup_for_unknown_activity_is_not_found() {
    let (app, _pool) = test_app().await;

    let (status, json) = send(
        &app,
        "POST",
        "/activities/Nonexistent%20Club/signup?email=kid@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Activity not found");
}

#[tokio::test]
async fn full_activity_rejects_further_signups() {
    let (app, _pool) = test_app().await;

    // Chess Club seeds with 2 of 12 filled.
    for i in 0..10 {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/activities/Chess%20Club/signup?email=student{}@mergington.edu", i),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=late@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Activity is full");

    // Capacity invariant holds after the rejected attempt.
    let (_, json) = send(&app, "GET", "/activities").await;
    let chess = &json["Chess Club"];
    assert_eq!(chess["participants"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn unregister_removes_participant_then_conflicts() {
    let (app, _pool) = test_app().await;

    let (status, json) = send(
        &app,
        "DELETE",
        "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "Unregistered michael@mergington.edu from Chess Club"
    );

    let (_, listing) = send(&app, "GET", "/activities").await;
    assert_eq!(
        listing["Chess Club"]["participants"],
        serde_json::json!(["daniel@mergington.edu"])
    );

    // Second attempt hits the not-registered conflict.
    let (status, json) = send(
        &app,
        "DELETE",
        "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Student not registered for this activity");
}

#[tokio::test]
async fn unregister_from_unknown_activity_is_not_found() {
    let (app, _pool) = test_app().await;

    let (status, json) = send(
        &app,
        "DELETE",
        "/activities/Nonexistent%20Club/unregister?email=kid@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Activity not found");
}

#[tokio::test]
async fn bootstrap_seeds_only_an_empty_store() {
    let pool = test_pool().await;

    registration_service::signup(&pool, "Chess Club", "extra@mergington.edu")
        .await
        .expect("signup");

    // Second initialize must not reseed or duplicate anything.
    bootstrap::initialize(&pool).await.expect("re-initialize");

    let activities = registration_service::list_activities(&pool).await.expect("list");
    assert_eq!(activities.len(), 9);
    assert_eq!(activities["Chess Club"].participants.len(), 3);
}

#[tokio::test]
async fn roster_stays_within_capacity_across_mixed_operations() {
    let pool = test_pool().await;

    registration_service::unregister(&pool, "Chess Club", "daniel@mergington.edu")
        .await
        .expect("unregister");
    for i in 0..11 {
        registration_service::signup(
            &pool,
            "Chess Club",
            &format!("student{}@mergington.edu", i),
        )
        .await
        .expect("signup");
    }

    let err = registration_service::signup(&pool, "Chess Club", "late@mergington.edu")
        .await
        .expect_err("activity should be full");
    assert!(matches!(err, RegistrationError::ActivityFull));

    let activities = registration_service::list_activities(&pool).await.expect("list");
    let chess = &activities["Chess Club"];
    assert!(chess.participants.len() as i64 <= chess.max_participants);
    assert_eq!(chess.participants.len(), 12);
}
