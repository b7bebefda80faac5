//! API integration tests
//!
//! These run against a live server started beforehand with a writable data
//! file (see config/default.toml).

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

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
async fn test_get_missing_book_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book/0000000000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "The book does not exist.");
}

#[tokio::test]
#[ignore]
async fn test_create_get_edit_delete_book() {
    let client = Client::new();
    let isbn = "5554443331112";

    // Create book
    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&json!({
            "isbn": isbn,
            "title": "Integration Test Book",
            "authors": "Author One, Author Two",
            "year": 2021,
            "price": "19.99",
            "category": "Fiction",
            "cover": null
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isbn"], isbn);

    // Get it back
    let response = client
        .get(format!("{}/book/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Integration Test Book");
    assert_eq!(body["authors"], "Author One, Author Two");

    // Edit it
    let response = client
        .put(format!("{}/book/{}", BASE_URL, isbn))
        .json(&json!({
            "isbn": isbn,
            "title": "Updated Title",
            "authors": "Updated Author",
            "year": 2022,
            "price": "29.99",
            "category": "Non-Fiction",
            "cover": null
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    // Delete it
    let response = client
        .delete(format!("{}/book/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_invalid_isbn_returns_400() {
    let client = Client::new();

    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&json!({
            "isbn": "123456789",
            "title": "Bad ISBN",
            "authors": "",
            "year": 2021,
            "price": "10.00",
            "category": null,
            "cover": null
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "ISBN code is not valid.");
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_book_returns_204() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/book/0000000000", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_report_is_html() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book/report", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("<h1>Bookstore Report</h1>"));
}
