//! Error types for the API client.

/// Errors that can occur when talking to the LDA API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request itself failed (connection, timeout, or body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status where a success was required.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A response body could not be decoded into the expected shape.
    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// An assembled request URL failed to parse.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    /// A page-cursor URL had no query component or a keyless pair.
    #[error("URL has no parseable querystring: {url}")]
    MalformedUrl { url: String },
}
