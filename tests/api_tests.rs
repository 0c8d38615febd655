//! API integration tests
//!
//! These tests expect a running server backed by a migrated database.
//! Run with: cargo test -- --ignored

use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080";

/// Client that does not follow redirects, so 303 responses can be inspected.
fn no_redirect_client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

fn location(response: &reqwest::Response) -> String {
    response
        .headers()
        .get("location")
        .expect("No location header")
        .to_str()
        .expect("Invalid location header")
        .to_string()
}

#[tokio::test]
#[ignore]
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
}

#[tokio::test]
#[ignore]
async fn test_catalog_home_counts() {
    let client = Client::new();

    let response = client
        .get(format!("{}/catalog", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["view"], "index");
    assert!(body["model"]["book_count"].is_number());
    assert!(body["model"]["book_instance_count"].is_number());
    assert!(body["model"]["book_instance_available_count"].is_number());
    assert!(body["model"]["author_count"].is_number());
    assert!(body["model"]["genre_count"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_author_create_redirects_to_detail() {
    let client = no_redirect_client();

    let response = client
        .post(format!("{}/catalog/authors/create", BASE_URL))
        .form(&[
            ("first_name", "Ursula"),
            ("family_name", "LeGuin"),
            ("date_of_birth", "1929-10-21"),
            ("date_of_death", "2018-01-22"),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/catalog/authors/"));
}

#[tokio::test]
#[ignore]
async fn test_author_create_invalid_rerenders() {
    let client = no_redirect_client();

    // Missing family name and a malformed birth date: no redirect, the form
    // comes back with the ordered failure list and sanitized echoes.
    let response = client
        .post(format!("{}/catalog/authors/create", BASE_URL))
        .form(&[
            ("first_name", "  <Ada> "),
            ("family_name", ""),
            ("date_of_birth", "not-a-date"),
            ("date_of_death", ""),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["view"], "author_form");
    assert_eq!(body["model"]["author"]["first_name"], "&lt;Ada&gt;");
    let errors = body["model"]["errors"].as_array().expect("No errors array");
    assert!(!errors.is_empty());
    assert!(errors
        .iter()
        .any(|e| e["msg"] == "Family name is required."));
    assert!(errors.iter().any(|e| e["msg"] == "Invalid date of birth"));
}

#[tokio::test]
#[ignore]
async fn test_genre_create_is_idempotent_by_name() {
    let client = no_redirect_client();

    let first = client
        .post(format!("{}/catalog/genres/create", BASE_URL))
        .form(&[("name", "Solarpunk")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    let first_location = location(&first);

    // Same name, different case: no second row, redirect to the existing genre.
    let second = client
        .post(format!("{}/catalog/genres/create", BASE_URL))
        .form(&[("name", "SOLARPUNK")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&second), first_location);
}

#[tokio::test]
#[ignore]
async fn test_book_create_with_repeated_genre_fields() {
    let client = no_redirect_client();

    let author = client
        .post(format!("{}/catalog/authors/create", BASE_URL))
        .form(&[
            ("first_name", "Iain"),
            ("family_name", "Banks"),
            ("date_of_birth", ""),
            ("date_of_death", ""),
        ])
        .send()
        .await
        .expect("Failed to send request");
    let author_id = location(&author)
        .rsplit('/')
        .next()
        .expect("No author id")
        .to_string();

    let genre = client
        .post(format!("{}/catalog/genres/create", BASE_URL))
        .form(&[("name", "Space Opera")])
        .send()
        .await
        .expect("Failed to send request");
    let genre_id = location(&genre)
        .rsplit('/')
        .next()
        .expect("No genre id")
        .to_string();

    // Submitting the same genre key twice collapses to one association.
    let response = client
        .post(format!("{}/catalog/books/create", BASE_URL))
        .form(&[
            ("title", "Consider Phlebas"),
            ("author", author_id.as_str()),
            ("summary", "A Culture novel."),
            ("isbn", "9780316005388"),
            ("genre", genre_id.as_str()),
            ("genre", genre_id.as_str()),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let book_url = location(&response);

    let detail_client = Client::new();
    let detail: Value = detail_client
        .get(format!("{}{}", BASE_URL, book_url))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let genres = detail["model"]["book"]["genres"]
        .as_array()
        .expect("No genres array");
    assert_eq!(genres.len(), 1);
}

#[tokio::test]
#[ignore]
async fn test_missing_detail_returns_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/catalog/authors/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
#[ignore]
async fn test_missing_update_form_redirects_to_list() {
    let client = no_redirect_client();

    // Unlike detail pages, edit forms for missing rows bounce back to the list.
    let response = client
        .get(format!("{}/catalog/books/999999/update", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/catalog/books");
}

#[tokio::test]
#[ignore]
async fn test_author_delete_blocked_by_books() {
    let client = no_redirect_client();

    let author = client
        .post(format!("{}/catalog/authors/create", BASE_URL))
        .form(&[
            ("first_name", "Terry"),
            ("family_name", "Pratchett"),
            ("date_of_birth", ""),
            ("date_of_death", ""),
        ])
        .send()
        .await
        .expect("Failed to send request");
    let author_url = location(&author);
    let author_id = author_url.rsplit('/').next().expect("No author id").to_string();

    let book = client
        .post(format!("{}/catalog/books/create", BASE_URL))
        .form(&[
            ("title", "Guards! Guards!"),
            ("author", author_id.as_str()),
            ("summary", "A Discworld novel."),
            ("isbn", "9780062225757"),
        ])
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(book.status(), StatusCode::SEE_OTHER);

    // Deletion is refused while books reference the author.
    let response = client
        .post(format!("{}{}/delete", BASE_URL, author_url))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["view"], "author_delete");

    let check = Client::new()
        .get(format!("{}{}", BASE_URL, author_url))
        .send()
        .await
        .expect("Failed to send request");
    assert!(check.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_book_instance_requires_due_date_when_unavailable() {
    let client = no_redirect_client();

    let response = client
        .post(format!("{}/catalog/bookinstances/create", BASE_URL))
        .form(&[
            ("book", "1"),
            ("imprint", "First edition"),
            ("status", "Loaned"),
            ("due_back", ""),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["view"], "book_instance_form");
    let errors = body["model"]["errors"].as_array().expect("No errors array");
    assert!(errors.iter().any(|e| {
        e["msg"] == "If book status is not Available, you should indicate a due date"
    }));
}

#[tokio::test]
#[ignore]
async fn test_root_redirects_to_catalog() {
    let client = no_redirect_client();

    let response = client
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/catalog");
}
