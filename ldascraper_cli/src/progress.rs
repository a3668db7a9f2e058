//! Console progress reporting backed by indicatif.

use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressStyle};
use ldascraper_lib::ProgressObserver;

/// Prints a heading per filing type and keeps a page-progress bar while
/// that type's pages are walked.
pub struct ConsoleProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn finish_current(&self) {
        if let Some(bar) = self.bar.lock().unwrap_or_else(|e| e.into_inner()).take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ConsoleProgress {
    fn on_filing_type_started(&self, name: &str, code: &str) {
        self.finish_current();
        eprintln!("\n{} ({}):", name, code);
    }

    fn on_filings_counted(&self, filings: i64, pages: i64) {
        let filings_lang = if filings == 1 { "filing" } else { "filings" };
        let pages_lang = if pages == 1 { "page" } else { "pages" };
        eprintln!("  {} {} / {} {}", filings, filings_lang, pages, pages_lang);

        let bar = ProgressBar::new(pages.max(0) as u64);
        bar.set_style(
            ProgressStyle::with_template("  [{bar:30}] page {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        *self.bar.lock().unwrap_or_else(|e| e.into_inner()) = Some(bar);
    }

    fn on_page_fetched(&self, page: i64, _total_pages: i64) {
        if let Some(bar) = self.bar.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
            bar.set_position(page.max(0) as u64);
        }
    }
}
