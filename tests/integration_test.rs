use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use uuid::Uuid;

use movie_ingest::{
    db::memory::MemoryDb,
    ingest::function_handler,
    record::{FALLBACK_TITLE, FALLBACK_YEAR},
};

const SUCCESS_BODY: &str = r#"{"message":"Successfully inserted data!"}"#;

fn post_request(body: Body) -> Request {
    lambda_http::http::Request::builder()
        .method("POST")
        .uri("/")
        .header("Content-Type", "application/json")
        .body(body)
        .unwrap()
}

fn body_json(response: &Response<Body>) -> serde_json::Value {
    match response.body() {
        Body::Text(text) => serde_json::from_str(text).expect("response body should be JSON"),
        other => panic!("unexpected body variant: {other:?}"),
    }
}

// --- Payload present ---

#[tokio::test]
async fn valid_payload_is_stored_and_acknowledged() {
    let db = MemoryDb::new();

    let request = post_request(Body::from(
        r#"{"year": 2020, "title": "Inception", "id": "abc123"}"#,
    ));
    let response = function_handler(&db, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("Content-Type")
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(
        body_json(&response),
        serde_json::from_str::<serde_json::Value>(SUCCESS_BODY).unwrap()
    );

    assert_eq!(db.movie_count(), 1);
    let record = db.get_movie("abc123").expect("record should be stored");
    assert_eq!(record.year, 2020);
    assert_eq!(record.title, "Inception");
}

#[tokio::test]
async fn numeric_string_year_is_accepted() {
    let db = MemoryDb::new();

    let request = post_request(Body::from(
        r#"{"year": "2020", "title": "Inception", "id": "abc123"}"#,
    ));
    let response = function_handler(&db, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(db.get_movie("abc123").unwrap().year, 2020);
}

#[tokio::test]
async fn same_id_overwrites_instead_of_duplicating() {
    let db = MemoryDb::new();

    let first = post_request(Body::from(
        r#"{"year": 2010, "title": "Inception", "id": "abc123"}"#,
    ));
    function_handler(&db, first).await.unwrap();

    let second = post_request(Body::from(
        r#"{"year": 2014, "title": "Interstellar", "id": "abc123"}"#,
    ));
    function_handler(&db, second).await.unwrap();

    assert_eq!(db.movie_count(), 1);
    assert_eq!(db.get_movie("abc123").unwrap().title, "Interstellar");
}

// --- Payload absent ---

#[tokio::test]
async fn missing_body_stores_fallback_record() {
    let db = MemoryDb::new();

    let response = function_handler(&db, post_request(Body::Empty))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(&response),
        serde_json::from_str::<serde_json::Value>(SUCCESS_BODY).unwrap()
    );

    assert_eq!(db.movie_count(), 1);
    let record = db.movies().pop().unwrap();
    assert_eq!(record.year, FALLBACK_YEAR);
    assert_eq!(record.title, FALLBACK_TITLE);
    assert!(Uuid::parse_str(&record.id).is_ok());
}

#[tokio::test]
async fn empty_body_stores_fallback_record() {
    let db = MemoryDb::new();

    let response = function_handler(&db, post_request(Body::from("")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(db.movie_count(), 1);
}

#[tokio::test]
async fn repeated_fallback_inserts_get_distinct_ids() {
    let db = MemoryDb::new();

    function_handler(&db, post_request(Body::Empty))
        .await
        .unwrap();
    function_handler(&db, post_request(Body::Empty))
        .await
        .unwrap();

    // Records are keyed by id, so two entries proves the ids differ.
    assert_eq!(db.movie_count(), 2);
    for record in db.movies() {
        assert_eq!(record.title, FALLBACK_TITLE);
    }
}

// --- Malformed payloads ---

#[tokio::test]
async fn malformed_json_is_rejected_without_a_write() {
    let db = MemoryDb::new();

    let response = function_handler(&db, post_request(Body::from("{")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.movie_count(), 0);
}

#[tokio::test]
async fn missing_required_fields_are_rejected_without_a_write() {
    let db = MemoryDb::new();

    let response = function_handler(&db, post_request(Body::from(r#"{"year": 2020}"#)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(db.movie_count(), 0);
}
