//! Progress reporting seam for the pagination driver.

/// Receives progress callbacks while a scrape runs.
///
/// All methods default to no-ops so implementors only pick up the events
/// they present. The driver never writes to stdout/stderr itself.
pub trait ProgressObserver {
    /// A filing type's collection is starting.
    fn on_filing_type_started(&self, _name: &str, _code: &str) {}

    /// The first page revealed the total filing and page counts.
    fn on_filings_counted(&self, _filings: i64, _pages: i64) {}

    /// A page was fetched and its records normalized.
    fn on_page_fetched(&self, _page: i64, _total_pages: i64) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressObserver for NullProgress {}
