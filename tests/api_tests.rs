//! API integration tests
//!
//! These run against a live server backed by a scratch database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:10000";

/// Helper to create a log entry and return the created row
async fn create_log(client: &Client, date: &str, timer_leftover: &str, description: &str) -> Value {
    let response = client
        .post(format!("{}/logs/create", BASE_URL))
        .json(&json!({
            "date": date,
            "timer_leftover": timer_leftover,
            "description": description
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn list_dates(client: &Client) -> Vec<Value> {
    let response = client
        .get(format!("{}/dates", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    body.as_array().expect("Expected a date array").clone()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_log_returns_created_entry() {
    let client = Client::new();

    let log = create_log(&client, "2031-01-05", "01:30:00", "Read a book").await;
    assert!(log["id"].is_number());
    assert!(log["date_id"].is_number());
    assert_eq!(log["timer_leftover"], "01:30:00");
    assert_eq!(log["description"], "Read a book");
    assert!(log["created_at"].is_string());

    // The owning date record is visible through /dates
    let dates = list_dates(&client).await;
    let owning = dates
        .iter()
        .find(|d| d["date"] == "2031-01-05")
        .expect("Date record not listed");
    assert_eq!(owning["id"], log["date_id"]);
}

#[tokio::test]
#[ignore]
async fn test_same_date_reuses_date_record() {
    let client = Client::new();

    let first = create_log(&client, "2031-02-11", "01:30:00", "Read a book").await;
    let second = create_log(&client, "2031-02-11", "00:20:00", "Walk").await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["date_id"], second["date_id"]);

    // Still exactly one date record for the day
    let dates = list_dates(&client).await;
    let count = dates.iter().filter(|d| d["date"] == "2031-02-11").count();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore]
async fn test_list_logs_filters_by_date() {
    let client = Client::new();

    let ours = create_log(&client, "2031-03-01", "00:05:00", "Stretch").await;
    let other = create_log(&client, "2031-03-02", "00:10:00", "Make tea").await;
    assert_ne!(ours["date_id"], other["date_id"]);

    let response = client
        .get(format!("{}/logs", BASE_URL))
        .query(&[("dateId", ours["date_id"].to_string())])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let logs: Value = response.json().await.expect("Failed to parse response");
    let logs = logs.as_array().expect("Expected a log array");

    assert!(logs.iter().all(|l| l["date_id"] == ours["date_id"]));
    assert!(logs.iter().any(|l| l["id"] == ours["id"]));
    assert!(logs.iter().all(|l| l["id"] != other["id"]));
}

#[tokio::test]
#[ignore]
async fn test_list_logs_in_insertion_order() {
    let client = Client::new();

    let first = create_log(&client, "2031-04-20", "00:15:00", "First session").await;
    let second = create_log(&client, "2031-04-20", "00:10:00", "Second session").await;

    let response = client
        .get(format!("{}/logs", BASE_URL))
        .query(&[("dateId", first["date_id"].to_string())])
        .send()
        .await
        .expect("Failed to send request");

    let logs: Value = response.json().await.expect("Failed to parse response");
    let ids: Vec<i64> = logs
        .as_array()
        .expect("Expected a log array")
        .iter()
        .map(|l| l["id"].as_i64().expect("No log ID"))
        .collect();

    let first_pos = ids
        .iter()
        .position(|id| Some(*id) == first["id"].as_i64())
        .expect("First entry missing");
    let second_pos = ids
        .iter()
        .position(|id| Some(*id) == second["id"].as_i64())
        .expect("Second entry missing");
    assert!(first_pos < second_pos);
}

#[tokio::test]
#[ignore]
async fn test_list_logs_requires_date_id() {
    let client = Client::new();

    let response = client
        .get(format!("{}/logs", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .get(format!("{}/logs?dateId=not-a-number", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid or missing dateId parameter");
}

#[tokio::test]
#[ignore]
async fn test_create_log_rejects_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/logs/create", BASE_URL))
        .json(&json!({
            "date": "2031-05-09",
            "timer_leftover": "00:30:00"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "Missing required fields: date, timer_leftover, description"
    );

    // Validation failed before the date was resolved, so no record was created
    let dates = list_dates(&client).await;
    assert!(dates.iter().all(|d| d["date"] != "2031-05-09"));
}

#[tokio::test]
#[ignore]
async fn test_create_log_rejects_blank_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/logs/create", BASE_URL))
        .json(&json!({
            "date": "2031-05-10",
            "timer_leftover": "   ",
            "description": "Blank leftover"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let dates = list_dates(&client).await;
    assert!(dates.iter().all(|d| d["date"] != "2031-05-10"));
}
