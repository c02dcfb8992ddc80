//! API Integration Tests
//!
//! Start a real server on the in-memory store and drive it over HTTP.
//! The PostgreSQL test at the bottom needs DATABASE_URL and is skipped otherwise.
//!
//! Run with: cargo test -p integration-tests

use integration_tests::{assert_json, assert_status, fixtures::*, postgres_config, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/health").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["storage"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_storage_failure() {
    let server = TestServer::start().await.unwrap();
    server.store().fail_reads(true);

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_event_details() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/event").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["host"], "Rocío");
    assert_eq!(body["time_range"], "18:00 - 21:00");
    assert!(body["location"].as_str().unwrap().contains("Jummpark"));
}

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
async fn test_accept_then_listed() {
    let server = TestServer::start().await.unwrap();

    let request = RsvpRequest {
        email: Some("ana@example.com".to_string()),
        ..RsvpRequest::accept("Ana", 3)
    };
    let response = server.post("/api/v1/rsvp", &request).await.unwrap();
    let confirmation: ConfirmationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(confirmation.success);
    assert!(confirmation.message.starts_with("RSVP sent!"));
    assert_eq!(confirmation.guest.name, "Ana");
    assert_eq!(confirmation.guest.number_of_guests, Some(3));
    assert!(confirmation.guest.attending);
    assert!(!confirmation.guest.attended);

    let response = server.get("/api/v1/guests").await.unwrap();
    let roster: RosterResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(roster.attending.len(), 1);
    assert_eq!(roster.attending[0].id, confirmation.guest.id);
    assert_eq!(roster.attending[0].email.as_deref(), Some("ana@example.com"));
    assert_eq!(
        roster.stats,
        RosterStats {
            confirmed_count: 1,
            total_people: 3,
            checked_in_count: 0,
            checked_in_people: 0,
            declined_count: 0,
        }
    );
}

#[tokio::test]
async fn test_decline_drops_headcount() {
    let server = TestServer::start().await.unwrap();

    let request = RsvpRequest {
        number_of_guests: Some(json!(4)),
        ..RsvpRequest::decline("Beto", Some("Estoy de viaje"))
    };
    let response = server.post("/api/v1/rsvp", &request).await.unwrap();
    let confirmation: ConfirmationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(!confirmation.guest.attending);
    assert_eq!(confirmation.guest.number_of_guests, None);
    assert_eq!(confirmation.guest.comments.as_deref(), Some("Estoy de viaje"));
    assert!(confirmation.message.starts_with("Thanks for letting us know!"));

    let response = server.get("/api/v1/guests").await.unwrap();
    let roster: RosterResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(roster.attending.is_empty());
    assert_eq!(roster.declined.len(), 1);
    assert_eq!(roster.stats.declined_count, 1);
    assert_eq!(roster.stats.total_people, 0);
}

#[tokio::test]
async fn test_missing_party_size_rejected() {
    let server = TestServer::start().await.unwrap();

    let request = RsvpRequest {
        number_of_guests: None,
        ..RsvpRequest::accept("Ana", 1)
    };
    let response = server.post("/api/v1/rsvp", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "VALIDATION_ERROR");
    let details = body.error.details.unwrap();
    assert!(details.get("number_of_guests").is_some());
    assert!(server.store().is_empty());
}

#[tokio::test]
async fn test_blank_name_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/v1/rsvp", &RsvpRequest::accept("   ", 2))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert!(body.error.details.unwrap().get("name").is_some());
    assert_eq!(server.store().calls(), 0);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .client
        .post(format!("{}/api/v1/rsvp", server.base_url()))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_store_failure_leaves_no_record() {
    let server = TestServer::start().await.unwrap();
    server.store().fail_writes(true);

    let response = server
        .post("/api/v1/rsvp", &RsvpRequest::unique_accept(2))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();

    assert_eq!(body.error.message, "We couldn't send your RSVP. Please try again.");
    // Backend detail stays in the logs
    assert!(!body.error.message.contains("unavailable"));
    assert!(server.store().is_empty());

    server.store().fail_writes(false);
    let response = server
        .post("/api/v1/rsvp", &RsvpRequest::unique_accept(2))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(server.store().len(), 1);
}

#[tokio::test]
async fn test_guest_list_read_failure() {
    let server = TestServer::start().await.unwrap();
    server.store().fail_reads(true);

    let response = server.get("/api/v1/guests").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body.error.message, "Failed to load the guest list");
}

#[tokio::test]
async fn test_guest_list_newest_first() {
    let server = TestServer::start().await.unwrap();

    for name in ["first", "second", "third"] {
        let response = server
            .post("/api/v1/rsvp", &RsvpRequest::accept(name, 1))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/api/v1/guests").await.unwrap();
    let roster: RosterResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<_> = roster.attending.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["third", "second", "first"]);
}

// ============================================================================
// Check-in Tests
// ============================================================================

#[tokio::test]
async fn test_check_in_is_idempotent() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/v1/rsvp", &RsvpRequest::accept("Ana", 3))
        .await
        .unwrap();
    let confirmation: ConfirmationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/guests/{}/check-in", confirmation.guest.id);

    let response = server.post_empty(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let calls = server.store().calls();
    let response = server.post_empty(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    // Second check-in is answered from the roster snapshot
    assert_eq!(server.store().calls(), calls);

    let response = server.get("/api/v1/guests").await.unwrap();
    let roster: RosterResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(roster.find(&confirmation.guest.id).unwrap().attended);
    assert_eq!(roster.stats.checked_in_count, 1);
    assert_eq!(roster.stats.checked_in_people, 3);
}

#[tokio::test]
async fn test_check_in_declined_guest() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/v1/rsvp", &RsvpRequest::decline("Beto", None))
        .await
        .unwrap();
    let confirmation: ConfirmationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_empty(&format!("/api/v1/guests/{}/check-in", confirmation.guest.id))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "GUEST_DECLINED");
}

#[tokio::test]
async fn test_check_in_unknown_guest() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_empty("/api/v1/guests/00000000-0000-4000-8000-000000000000/check-in")
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_GUEST");

    let response = server
        .post_empty("/api/v1/guests/not-a-uuid/check-in")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_check_in_store_failure() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/v1/rsvp", &RsvpRequest::accept("Ana", 2))
        .await
        .unwrap();
    let confirmation: ConfirmationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/api/v1/guests").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    server.store().fail_writes(true);
    let path = format!("/api/v1/guests/{}/check-in", confirmation.guest.id);
    let response = server.post_empty(&path).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body.error.message, "We couldn't check in this guest. Please try again.");

    server.store().fail_writes(false);
    let response = server.get("/api/v1/guests").await.unwrap();
    let roster: RosterResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!roster.find(&confirmation.guest.id).unwrap().attended);
    assert_eq!(roster.stats.checked_in_count, 0);
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_round_trip() {
    let Some(config) = postgres_config() else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };
    let server = TestServer::start_with_config(config).await.unwrap();

    let request = RsvpRequest::unique_accept(2);
    let response = server.post("/api/v1/rsvp", &request).await.unwrap();
    let confirmation: ConfirmationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/guests/{}/check-in", confirmation.guest.id);
    let response = server.post_empty(&path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/api/v1/guests").await.unwrap();
    let roster: RosterResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let guest = roster.find(&confirmation.guest.id).unwrap();
    assert_eq!(guest.name, request.name);
    assert!(guest.attended);
}
