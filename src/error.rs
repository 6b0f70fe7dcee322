use std::fmt;

/// Unified error type for the ingest service.
///
/// `MalformedPayload` is surfaced by the parsing step and mapped by the
/// handler to a 400 response. `Storage` is not translated: it propagates out
/// of the handler so the hosting runtime produces its generic failure
/// surface.
#[derive(Debug)]
pub enum IngestError {
    MalformedPayload(String),
    Storage(String),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::MalformedPayload(msg) => write!(f, "Malformed payload: {msg}"),
            IngestError::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl std::error::Error for IngestError {}
