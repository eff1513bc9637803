//! Error types for the API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant so hosts can log "no such post"
//! separately from other statuses. Views never show these to the user: every
//! variant collapses to one fixed message per operation.

use thiserror::Error;

/// Errors returned by `ApiClient` build/parse methods and by hosts that
/// fail to complete a round-trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The host could not complete the round-trip (DNS, connect, TLS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// A page template failed to compile or render.
#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct RenderError(#[from] minijinja::Error);
