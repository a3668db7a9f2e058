//! The pagination/aggregation driver: walks every page of every filing
//! type for one (year, period) and accumulates normalized rows.

use std::path::Path;
use std::time::Duration;

use lda_api::{
    Client, FilingPeriod, FilingsPage, FilingsQuery, PageResult, TimePeriodConfig,
    RESULTS_PER_PAGE,
};

use crate::catalog::{resolve_types, FilingTypeCatalog};
use crate::error::ScrapeError;
use crate::normalize::{normalize, NormalizedFiling};
use crate::overrides::OverrideList;
use crate::progress::{NullProgress, ProgressObserver};
use crate::report;

/// Courtesy delay between consecutive page fetches.
pub const PAGE_DELAY: Duration = Duration::from_secs(1);

static NULL_PROGRESS: NullProgress = NullProgress;

/// All normalized filings for one filing type, in API return order.
#[derive(Debug, Clone)]
pub struct FilingGroup {
    pub code: String,
    pub name: String,
    pub filings: Vec<NormalizedFiling>,
}

/// Drives collection for one scrape run.
///
/// Owns nothing: the transport, override list, and observer are borrowed
/// from the caller and shared across every filing type in the run.
pub struct Scraper<'a> {
    client: &'a Client,
    overrides: &'a OverrideList,
    observer: &'a dyn ProgressObserver,
    page_delay: Duration,
}

impl<'a> Scraper<'a> {
    pub fn new(client: &'a Client, overrides: &'a OverrideList) -> Self {
        Self {
            client,
            overrides,
            observer: &NULL_PROGRESS,
            page_delay: PAGE_DELAY,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn ProgressObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Collects every page for one filing type, in page-then-within-page
    /// order.
    ///
    /// Any non-success page classification aborts the collection with
    /// [`ScrapeError::CollectionFailed`]; there are no retries and no
    /// partial results.
    pub async fn collect(
        &self,
        time_config: &TimePeriodConfig,
        catalog: &FilingTypeCatalog,
    ) -> Result<Vec<NormalizedFiling>, ScrapeError> {
        let mut page = self.fetch_page(time_config, &[]).await?;

        let total_pages = (page.count + RESULTS_PER_PAGE - 1) / RESULTS_PER_PAGE;
        self.observer.on_filings_counted(page.count, total_pages);

        let mut filings = Vec::with_capacity(page.count.max(0) as usize);
        for raw in &page.results {
            filings.push(normalize(raw, catalog, self.overrides)?);
        }

        let mut page_index = 1;
        self.observer.on_page_fetched(page_index, total_pages);

        while let Some(next_url) = page.next.take() {
            let extra_params = next_cursor_diff(&next_url)?;

            tokio::time::sleep(self.page_delay).await;

            page = self.fetch_page(time_config, &extra_params).await?;
            page_index += 1;
            self.observer.on_page_fetched(page_index, total_pages);

            for raw in &page.results {
                filings.push(normalize(raw, catalog, self.overrides)?);
            }
        }

        Ok(filings)
    }

    /// Resolves the period's filing types and collects each in API order.
    pub async fn scrape(
        &self,
        year: i32,
        period: FilingPeriod,
    ) -> Result<Vec<FilingGroup>, ScrapeError> {
        let types_for_period = resolve_types(self.client, period).await?;
        let catalog = FilingTypeCatalog::from_entries(&types_for_period);

        let mut groups = Vec::with_capacity(types_for_period.len());
        for entry in &types_for_period {
            self.observer.on_filing_type_started(&entry.name, &entry.value);
            tracing::info!("collecting {} ({})", entry.name, entry.value);

            let time_config = TimePeriodConfig {
                filing_year: year,
                filing_period: period,
                filing_type: entry.value.clone(),
            };
            let filings = self.collect(&time_config, &catalog).await?;

            groups.push(FilingGroup {
                code: entry.value.clone(),
                name: entry.name.clone(),
                filings,
            });
        }
        Ok(groups)
    }

    /// Scrapes one (year, period) and writes the CSV report under
    /// `out_dir`, returning the grouped rows for further use.
    pub async fn run(
        &self,
        year: i32,
        period: FilingPeriod,
        out_dir: &Path,
    ) -> Result<Vec<FilingGroup>, ScrapeError> {
        let groups = self.scrape(year, period).await?;
        let path = report::report_path(out_dir, year, period);
        report::write_report(&path, &groups)?;
        tracing::info!("wrote report to {}", path.display());
        Ok(groups)
    }

    async fn fetch_page(
        &self,
        time_config: &TimePeriodConfig,
        extra_params: &[(String, String)],
    ) -> Result<FilingsPage, ScrapeError> {
        let query = FilingsQuery::new(time_config).with_extra_params(extra_params);
        match self.client.get_filings_page(&query).await? {
            PageResult::Success { body, .. } => Ok(body),
            PageResult::ClientError { status, .. } | PageResult::Other { status, .. } => {
                Err(ScrapeError::CollectionFailed {
                    status,
                    endpoint: self.client.filings_endpoint(),
                })
            }
        }
    }
}

/// Decodes a next-page URL and drops the keys the query builder already
/// fixes. What remains (the `page` cursor) feeds the next fetch.
fn next_cursor_diff(next_url: &str) -> Result<Vec<(String, String)>, ScrapeError> {
    let pairs = lda_api::decode_querystring(next_url)?;
    Ok(pairs
        .into_iter()
        .filter(|(key, _)| {
            !TimePeriodConfig::PARAM_KEYS.contains(&key.as_str())
                && key != "ordering"
                && key != "page_size"
        })
        .collect())
}
