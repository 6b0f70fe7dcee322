use lambda_http::{
    http::{header::CONTENT_TYPE, StatusCode},
    request::RequestContext,
    Body, Error, Request, RequestExt, Response,
};
use serde_json::json;

use crate::{
    db::{movies_table_name, Database},
    error::IngestError,
    error_response,
    record::MovieRecord,
};

const SUCCESS_MESSAGE: &str = "Successfully inserted data!";

/// Request metadata used only for logging. Never persisted.
struct RequestMeta {
    request_id: String,
    http_method: String,
    source_ip: String,
}

/// Ingest one record: parse the payload if present, fall back to the
/// hardcoded record otherwise, write it to the movies table, and answer 200
/// with a fixed message. Storage faults bubble up to the runtime.
pub async fn function_handler(db: &dyn Database, event: Request) -> Result<Response<Body>, Error> {
    let meta = request_meta(&event);
    tracing::info!(
        request_id = %meta.request_id,
        table_name = movies_table_name(),
        http_method = %meta.http_method,
        source_ip = %meta.source_ip,
        "Processing request"
    );

    let record = match parse_payload(event.body()) {
        Ok(Some(record)) => {
            tracing::info!(
                request_id = %meta.request_id,
                item_id = %record.id,
                year = record.year,
                title = %record.title,
                "Received payload"
            );
            record
        }
        Ok(None) => {
            tracing::info!(
                request_id = %meta.request_id,
                "Request without payload, using fallback record"
            );
            MovieRecord::fallback()
        }
        Err(err) => return Ok(error_response(StatusCode::BAD_REQUEST, &err.to_string())),
    };

    db.put_movie(&record).await?;

    tracing::info!(
        request_id = %meta.request_id,
        item_id = %record.id,
        "Record inserted successfully"
    );

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "message": SUCCESS_MESSAGE }).to_string()))?;

    Ok(response)
}

/// Parse an optional JSON payload. An absent or empty body is `Ok(None)`,
/// which selects the fallback record.
fn parse_payload(body: &Body) -> Result<Option<MovieRecord>, IngestError> {
    let raw = match body {
        Body::Empty => return Ok(None),
        Body::Text(text) => text.as_bytes(),
        Body::Binary(data) => data.as_slice(),
    };

    if raw.is_empty() {
        return Ok(None);
    }

    serde_json::from_slice(raw)
        .map(Some)
        .map_err(|e| IngestError::MalformedPayload(e.to_string()))
}

fn request_meta(event: &Request) -> RequestMeta {
    match event.request_context_ref() {
        Some(RequestContext::ApiGatewayV1(ctx)) => RequestMeta {
            request_id: ctx.request_id.clone().unwrap_or_default(),
            http_method: ctx.http_method.to_string(),
            source_ip: ctx.identity.source_ip.clone().unwrap_or_default(),
        },
        Some(RequestContext::ApiGatewayV2(ctx)) => RequestMeta {
            request_id: ctx.request_id.clone().unwrap_or_default(),
            http_method: ctx.http.method.to_string(),
            source_ip: ctx.http.source_ip.clone().unwrap_or_default(),
        },
        _ => RequestMeta {
            request_id: String::new(),
            http_method: event.method().to_string(),
            source_ip: String::new(),
        },
    }
}
