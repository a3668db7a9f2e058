use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The API caps `page_size` at 25.
pub const RESULTS_PER_PAGE: i64 = 25;

/// A reporting period recognized by the LDA API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilingPeriod {
    FirstQuarter,
    SecondQuarter,
    ThirdQuarter,
    FourthQuarter,
    MidYear,
    YearEnd,
}

impl FilingPeriod {
    pub const ALL: [FilingPeriod; 6] = [
        FilingPeriod::FirstQuarter,
        FilingPeriod::SecondQuarter,
        FilingPeriod::ThirdQuarter,
        FilingPeriod::FourthQuarter,
        FilingPeriod::MidYear,
        FilingPeriod::YearEnd,
    ];

    /// Short code, e.g. `Q1` or `YE`. Also what [`FromStr`] accepts.
    pub fn code(&self) -> &'static str {
        match self {
            FilingPeriod::FirstQuarter => "Q1",
            FilingPeriod::SecondQuarter => "Q2",
            FilingPeriod::ThirdQuarter => "Q3",
            FilingPeriod::FourthQuarter => "Q4",
            FilingPeriod::MidYear => "MY",
            FilingPeriod::YearEnd => "YE",
        }
    }

    /// The `filing_period` query value, e.g. `first_quarter`.
    pub fn slug(&self) -> &'static str {
        match self {
            FilingPeriod::FirstQuarter => "first_quarter",
            FilingPeriod::SecondQuarter => "second_quarter",
            FilingPeriod::ThirdQuarter => "third_quarter",
            FilingPeriod::FourthQuarter => "fourth_quarter",
            FilingPeriod::MidYear => "mid_year",
            FilingPeriod::YearEnd => "year_end",
        }
    }

    /// The prefix filing-type names carry for this period, e.g. `1st Quarter`.
    pub fn label_prefix(&self) -> &'static str {
        match self {
            FilingPeriod::FirstQuarter => "1st Quarter",
            FilingPeriod::SecondQuarter => "2nd Quarter",
            FilingPeriod::ThirdQuarter => "3rd Quarter",
            FilingPeriod::FourthQuarter => "4th Quarter",
            FilingPeriod::MidYear => "Mid-Year",
            FilingPeriod::YearEnd => "Year-End",
        }
    }
}

impl std::fmt::Display for FilingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for FilingPeriod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "Q1" => Ok(FilingPeriod::FirstQuarter),
            "Q2" => Ok(FilingPeriod::SecondQuarter),
            "Q3" => Ok(FilingPeriod::ThirdQuarter),
            "Q4" => Ok(FilingPeriod::FourthQuarter),
            "MY" => Ok(FilingPeriod::MidYear),
            "YE" => Ok(FilingPeriod::YearEnd),
            _ => Err(()),
        }
    }
}

/// One entry of the filing-type listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingTypeEntry {
    pub value: String,
    pub name: String,
}

/// The registrant (lobbying firm or individual) on a filing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registrant {
    pub id: Option<i64>,
    pub name: String,
}

/// The client the registrant lobbies for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingClient {
    pub id: Option<i64>,
    pub name: String,
}

/// One filing as the API returns it.
///
/// `income` and `expenses` are nullable decimal strings and pass through
/// untouched; the API's own formatting is what lands in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFiling {
    pub filing_uuid: String,
    pub filing_type: String,
    pub filing_year: i32,
    pub dt_posted: DateTime<FixedOffset>,
    pub income: Option<String>,
    pub expenses: Option<String>,
    pub registrant: Registrant,
    pub client: FilingClient,
}

/// One page of the filings endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingsPage {
    /// Total records matching the query, across all pages.
    pub count: i64,
    /// Full URL of the next page, absent on the last page.
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<RawFiling>,
}
