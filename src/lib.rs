pub mod db;
pub mod error;
pub mod ingest;
pub mod record;

use lambda_http::{http::StatusCode, Body, Response};
use serde_json::json;

/// Build a JSON error response with the given status and message.
pub fn error_response(status: StatusCode, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "message": message }).to_string()))
        .unwrap()
}
