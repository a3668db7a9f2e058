//! Query construction for the filings endpoint, plus the querystring codec
//! used to encode requests and decode the API's page-cursor URLs.

use crate::types::{FilingPeriod, RESULTS_PER_PAGE};
use crate::Error;

/// The fixed query dimensions for one filing-type iteration.
#[derive(Debug, Clone)]
pub struct TimePeriodConfig {
    pub filing_year: i32,
    pub filing_period: FilingPeriod,
    pub filing_type: String,
}

impl TimePeriodConfig {
    /// The query keys this config owns, stripped from page-cursor diffs
    /// along with `ordering` and `page_size`.
    pub const PARAM_KEYS: [&'static str; 3] = ["filing_year", "filing_period", "filing_type"];
}

/// Query builder for `GET /filings/`.
///
/// Serializes the time-period dimensions first, then the fixed ordering and
/// page size, then any extra params (in practice the `page` cursor).
#[derive(Debug, Clone)]
pub struct FilingsQuery {
    time: TimePeriodConfig,
    extra: Vec<(String, String)>,
}

impl FilingsQuery {
    pub fn new(time: &TimePeriodConfig) -> Self {
        Self {
            time: time.clone(),
            extra: Vec::new(),
        }
    }

    pub fn with_extra_params(mut self, extra: &[(String, String)]) -> Self {
        self.extra.extend_from_slice(extra);
        self
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("filing_year".to_string(), self.time.filing_year.to_string()),
            (
                "filing_period".to_string(),
                self.time.filing_period.slug().to_string(),
            ),
            ("filing_type".to_string(), self.time.filing_type.clone()),
            ("ordering".to_string(), "dt_posted,id".to_string()),
            ("page_size".to_string(), RESULTS_PER_PAGE.to_string()),
        ];
        pairs.extend_from_slice(&self.extra);
        pairs
    }

    pub fn to_querystring(&self) -> String {
        encode_querystring(&self.to_pairs())
    }
}

/// Joins `key=value` pairs with `&`, order preserved. Values are assumed
/// URL-safe; nothing is percent-escaped.
pub fn encode_querystring(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Splits a URL's query component back into ordered `key=value` pairs.
///
/// Splits on the first `?`, then on `&`, then each pair on its first `=`.
/// No unescaping is performed. A URL without a query component, or a pair
/// without `=`, is a [`Error::MalformedUrl`].
pub fn decode_querystring(url: &str) -> Result<Vec<(String, String)>, Error> {
    let (_, query) = url.split_once('?').ok_or_else(|| Error::MalformedUrl {
        url: url.to_string(),
    })?;

    let mut pairs = Vec::new();
    for piece in query.split('&') {
        let (key, value) = piece.split_once('=').ok_or_else(|| Error::MalformedUrl {
            url: url.to_string(),
        })?;
        pairs.push((key.to_string(), value.to_string()));
    }
    Ok(pairs)
}
