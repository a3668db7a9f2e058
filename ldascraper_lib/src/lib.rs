//! Library layer for the LDA filings scraper: filing-type resolution,
//! record normalization, the pagination driver, and CSV report emission.
//!
//! Wraps the `lda_api` crate with the scrape semantics: the self-lobbying
//! amount-attribution heuristic, the per-period filing-type catalog, and
//! the page-cursor walk with its fixed inter-page delay.

pub mod catalog;
pub mod collect;
pub mod error;
pub mod normalize;
pub mod overrides;
pub mod progress;
pub mod report;

pub use lda_api;

pub use catalog::{resolve_types, FilingTypeCatalog};
pub use collect::{FilingGroup, Scraper, PAGE_DELAY};
pub use error::ScrapeError;
pub use normalize::{commonize, normalize, AmountType, NormalizedFiling};
pub use overrides::{OverrideList, SelfLobbyingOverride};
pub use progress::{NullProgress, ProgressObserver};
