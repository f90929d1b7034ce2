//! Request error taxonomy
//!
//! Every variant is reported to the caller as `500` with a `{"error": ...}` body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Error reading the request body: {0}")]
    BodyRead(String),

    #[error("Request body exceeds the limit of {limit} bytes")]
    BodyTooLarge { limit: u64 },

    #[error("Error decoding the request body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Too many identifiers: got {count}, the limit is {limit}")]
    TooManyIdentifiers { count: usize, limit: usize },

    #[error("Could not encode response to JSON: {0}")]
    Encode(#[source] serde_json::Error),
}
