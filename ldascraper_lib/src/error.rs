//! Error types for the scrape layer.

/// Errors produced while collecting and reporting filings.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] lda_api::Error),
    /// A filings page came back outside the 2xx range during pagination.
    /// Fatal for the whole period's collection; there are no retries.
    #[error("collection failed with status {status} at {endpoint}")]
    CollectionFailed { status: u16, endpoint: String },
    /// A filing referenced a type code missing from the period's catalog.
    /// Indicates an upstream data inconsistency.
    #[error("filing type {code:?} missing from catalog")]
    UnknownFilingType { code: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
