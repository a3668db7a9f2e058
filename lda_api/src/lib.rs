mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, PageResult};
pub use self::errors::Error;
pub use self::query::{decode_querystring, encode_querystring, FilingsQuery, TimePeriodConfig};
pub use self::types::{FilingPeriod, FilingTypeEntry, FilingsPage, RawFiling, RESULTS_PER_PAGE};
