//! HTTP client for the Senate LDA API.

use std::time::Duration;

use reqwest::header::HeaderMap;
use url::Url;

use crate::query::FilingsQuery;
use crate::types::{FilingTypeEntry, FilingsPage};
use crate::Error;

const BASE_API_URL: &str = "https://lda.senate.gov/api/v1";

/// Classification of one filings-page response.
///
/// Only a success carries a parsed body; client errors and everything else
/// keep their status and headers so callers can decide what is fatal.
#[derive(Debug)]
pub enum PageResult {
    /// 2xx with a parsed page body.
    Success {
        status: u16,
        headers: HeaderMap,
        body: FilingsPage,
    },
    /// 4xx.
    ClientError { status: u16, headers: HeaderMap },
    /// Anything else (3xx after redirects, 5xx, ...).
    Other { status: u16, headers: HeaderMap },
}

/// Authenticated client for the LDA API.
///
/// Holds a single `reqwest::Client` reused for every request in a scrape
/// run. Compression (gzip/deflate/br) is negotiated by the transport.
pub struct Client {
    base_api_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at the production Senate LDA API.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(BASE_API_URL, api_key)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http,
        })
    }

    /// The filings endpoint URL, without a query. Used in error reporting.
    pub fn filings_endpoint(&self) -> String {
        format!("{}/filings/", self.base_api_url)
    }

    fn parse_url(&self, raw: &str) -> Result<Url, Error> {
        Url::parse(raw).map_err(|e| {
            tracing::error!("invalid URL constructed: {}", e);
            Error::InvalidUrl(raw.to_string())
        })
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, Error> {
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .header("authorization", format!("Token {}", self.api_key))
            .send()
            .await?;
        Ok(resp)
    }

    /// Fetches the full filing-type listing for the current session.
    ///
    /// A non-success status is an [`Error::HttpStatus`]; the caller decides
    /// whether that degrades or aborts.
    pub async fn get_filing_types(&self) -> Result<Vec<FilingTypeEntry>, Error> {
        let url = self.parse_url(&format!(
            "{}/constants/filing/filingtypes/",
            self.base_api_url
        ))?;
        let resp = self.get(url).await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!(
                "filing-type listing failed with status {}: {}",
                status,
                snippet
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Issues one paginated filings request and classifies the response.
    ///
    /// Transport failures and success-body decode failures are `Err`; any
    /// HTTP status becomes a [`PageResult`] variant.
    pub async fn get_filings_page(&self, query: &FilingsQuery) -> Result<PageResult, Error> {
        let url = self.parse_url(&format!(
            "{}?{}",
            self.filings_endpoint(),
            query.to_querystring()
        ))?;
        let resp = self.get(url).await?;

        let status = resp.status();
        let headers = resp.headers().clone();

        if status.is_success() {
            let body = resp.text().await?;
            let page: FilingsPage = serde_json::from_str(&body).map_err(|e| {
                tracing::error!(
                    "failed to parse filings page: {} | body: {}",
                    e,
                    truncate_body(&body)
                );
                Error::Decode(e)
            })?;
            return Ok(PageResult::Success {
                status: status.as_u16(),
                headers,
                body: page,
            });
        }

        if status.is_client_error() {
            return Ok(PageResult::ClientError {
                status: status.as_u16(),
                headers,
            });
        }

        Ok(PageResult::Other {
            status: status.as_u16(),
            headers,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
