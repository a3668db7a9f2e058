//! Filing-type resolution and the per-period code → label catalog.

use std::collections::HashMap;

use lda_api::{Client, Error, FilingPeriod, FilingTypeEntry};

use crate::error::ScrapeError;

/// Fetches the filing-type listing and keeps the entries whose names start
/// with the period's label prefix, API order preserved.
///
/// A non-success listing status degrades to an empty listing rather than an
/// error; callers see "no filing types available". Transport and decode
/// failures still propagate.
pub async fn resolve_types(
    client: &Client,
    period: FilingPeriod,
) -> Result<Vec<FilingTypeEntry>, ScrapeError> {
    match client.get_filing_types().await {
        Ok(all_types) => Ok(all_types
            .into_iter()
            .filter(|entry| entry.name.starts_with(period.label_prefix()))
            .collect()),
        Err(Error::HttpStatus { status, .. }) => {
            tracing::warn!(
                "filing-type listing returned status {}; treating as no types available",
                status
            );
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Code → human-readable name for every filing type in one reporting
/// period. Every code seen in a filing must resolve here; a miss is fatal.
#[derive(Debug, Clone, Default)]
pub struct FilingTypeCatalog {
    labels: HashMap<String, String>,
}

impl FilingTypeCatalog {
    pub fn from_entries(entries: &[FilingTypeEntry]) -> Self {
        Self {
            labels: entries
                .iter()
                .map(|entry| (entry.value.clone(), entry.name.clone()))
                .collect(),
        }
    }

    pub fn label(&self, code: &str) -> Result<&str, ScrapeError> {
        self.labels
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| ScrapeError::UnknownFilingType {
                code: code.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
