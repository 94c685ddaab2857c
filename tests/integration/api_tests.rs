//! API integration tests

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use library_catalog::{
    api,
    config::{AppConfig, AuthorNamePolicy},
    repository::Repository,
    AppState,
};

/// Router backed by a fresh in-memory database
async fn test_app(config: AppConfig) -> (Router, Repository) {
    let repository = Repository::in_memory().await.expect("Failed to open in-memory database");
    let app = api::router(AppState::new(&config, repository.clone()));
    (app, repository)
}

async fn post_form(app: &Router, body: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/form")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .expect("Failed to send request");
    read(response).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .expect("Failed to send request");
    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"))
}

async fn count(repository: &Repository, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&repository.pool)
        .await
        .unwrap()
}

const ALEPH: &str = "title=The+Aleph&author=Jorge+Luis+Borges&isbn=1234567891234";

#[tokio::test]
async fn test_create_book() {
    let (app, repository) = test_app(AppConfig::default()).await;

    let (status, body) = post_form(&app, ALEPH).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Book successfully saved!"));
    // Inputs are cleared after a successful save
    assert!(!body.contains(r#"value="The Aleph""#));

    let books: Vec<(i64, String, String, i64)> =
        sqlx::query_as("SELECT id, title, isbn, author_id FROM book")
            .fetch_all(&repository.pool)
            .await
            .unwrap();
    let authors: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM author")
        .fetch_all(&repository.pool)
        .await
        .unwrap();

    assert_eq!(authors, vec![(1, "Jorge Luis Borges".to_string())]);
    assert_eq!(
        books,
        vec![(1, "The Aleph".to_string(), "1234567891234".to_string(), 1)]
    );
}

#[tokio::test]
async fn test_missing_fields_fail_the_request() {
    let (app, repository) = test_app(AppConfig::default()).await;

    for body in [
        "author=Jorge+Luis+Borges&isbn=1234567891234",
        "title=The+Aleph&isbn=1234567891234",
        "title=The+Aleph&author=Jorge+Luis+Borges",
    ] {
        let (status, _) = post_form(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", body);
    }

    assert_eq!(count(&repository, "book").await, 0);
    assert_eq!(count(&repository, "author").await, 0);
}

#[tokio::test]
async fn test_empty_fields_redisplay_form() {
    let (app, repository) = test_app(AppConfig::default()).await;

    let (status, body) = post_form(&app, "title=&author=Jorge+Luis+Borges&isbn=1234567891234").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Title field must not be empty."));
    assert!(body.contains(r#"value="Jorge Luis Borges""#));

    let (_, body) = post_form(&app, "title=The+Aleph&author=&isbn=1234567891234").await;
    assert!(body.contains("Author name can not be empty or contain digits."));

    let (_, body) = post_form(&app, "title=The+Aleph&author=Jorge+Luis+Borges&isbn=").await;
    assert!(body.contains("ISBN must contain exactly 13 digits."));

    assert_eq!(count(&repository, "book").await, 0);
    assert_eq!(count(&repository, "author").await, 0);
}

#[tokio::test]
async fn test_invalid_isbn() {
    let (app, repository) = test_app(AppConfig::default()).await;

    let (status, body) = post_form(&app, "title=The+Aleph&author=Jorge+Luis+Borges&isbn=1234").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ISBN must contain exactly 13 digits."));
    assert!(body.contains(r#"value="1234""#));
    assert_eq!(count(&repository, "book").await, 0);
}

#[tokio::test]
async fn test_author_with_digits_and_symbols() {
    let (app, repository) = test_app(AppConfig::default()).await;
    let (_, body) = post_form(
        &app,
        "title=The+Aleph&author=Jorge+Luis+Borges+123%21&isbn=1234567891234",
    )
    .await;
    assert!(body.contains("Author name can not be empty or contain digits."));
    assert_eq!(count(&repository, "book").await, 0);

    let mut config = AppConfig::default();
    config.validation.author_names = AuthorNamePolicy::LettersOnly;
    let (app, repository) = test_app(config).await;
    let (_, body) = post_form(&app, "title=The+Aleph&author=Jorge+Luis+Borges%21&isbn=1234567891234").await;
    assert!(body.contains("Author name can not be empty or contain digits or symbols."));
    assert_eq!(count(&repository, "book").await, 0);
}

#[tokio::test]
async fn test_same_author_reused() {
    let (app, repository) = test_app(AppConfig::default()).await;

    post_form(&app, ALEPH).await;
    post_form(&app, "title=Ficciones&author=Jorge+Luis+Borges&isbn=9876543210987").await;

    assert_eq!(count(&repository, "author").await, 1);
    assert_eq!(count(&repository, "book").await, 2);
}

#[tokio::test]
async fn test_rejected_insert_shows_notice_and_rolls_back_author() {
    let (app, repository) = test_app(AppConfig::default()).await;
    sqlx::query("CREATE UNIQUE INDEX idx_book_isbn ON book (isbn)")
        .execute(&repository.pool)
        .await
        .unwrap();

    let (_, body) = post_form(&app, ALEPH).await;
    assert!(body.contains("Book successfully saved!"));

    let (status, body) = post_form(&app, "title=B&author=Adolfo+Bioy+Casares&isbn=1234567891234").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Something went wrong while saving your request data"));
    assert!(body.contains(r#"value="B""#));
    assert!(body.contains(r#"value="Adolfo Bioy Casares""#));
    assert!(!body.contains("successfully"));

    // The new author was created in the same transaction as the failed book
    assert_eq!(count(&repository, "author").await, 1);
    assert_eq!(count(&repository, "book").await, 1);
}

#[tokio::test]
async fn test_list_books() {
    let (app, _repository) = test_app(AppConfig::default()).await;
    post_form(&app, ALEPH).await;

    let (status, body) = get(&app, "/books").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<td>The Aleph</td>"));
    assert!(body.contains("<td>Jorge Luis Borges</td>"));
    assert!(body.contains("<td>1234567891234</td>"));
}

#[tokio::test]
async fn test_show_form_does_not_write() {
    let (app, repository) = test_app(AppConfig::default()).await;

    let (status, body) = get(&app, "/form").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"name="title""#));
    assert!(body.contains(r#"name="author""#));
    assert!(body.contains(r#"name="isbn""#));
    assert!(!body.contains(r#"class="error""#));

    assert_eq!(count(&repository, "book").await, 0);
    assert_eq!(count(&repository, "author").await, 0);
}

#[tokio::test]
async fn test_root_redirects_to_form() {
    let (app, _repository) = test_app(AppConfig::default()).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/form");
}

#[tokio::test]
async fn test_health_check() {
    let (app, _repository) = test_app(AppConfig::default()).await;

    for (uri, expected) in [("/health", "healthy"), ("/ready", "ready")] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_str(&body).expect("Failed to parse response");
        assert_eq!(body["status"], expected);
    }
}
