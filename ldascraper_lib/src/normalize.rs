//! Flattens raw filings into report rows, attributing the reported amount
//! to income or expenses.
//!
//! Registrants lobbying on their own behalf report expenses instead of
//! income, so an absent income with matching registrant/client names flips
//! the row to expenses. Known self-lobbying pairs whose names do not match
//! are caught by the override list and flagged distinctly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lda_api::RawFiling;

use crate::catalog::FilingTypeCatalog;
use crate::error::ScrapeError;
use crate::overrides::OverrideList;

/// Which figure `AmountReported` was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountType {
    /// Income reported by the registrant (the default).
    #[serde(rename = "income")]
    Income,
    /// Expenses, inferred from registrant/client name equality.
    #[serde(rename = "expenses")]
    Expenses,
    /// Expenses, inferred from an explicit manual override.
    #[serde(rename = "expenses*")]
    ExpensesOverride,
}

impl std::fmt::Display for AmountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AmountType::Income => "income",
                AmountType::Expenses => "expenses",
                AmountType::ExpensesOverride => "expenses*",
            }
        )
    }
}

/// One flat report row. Field serialization order is the report's column
/// order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFiling {
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(rename = "RegistrantName")]
    pub registrant_name: String,
    #[serde(rename = "ClientName")]
    pub client_name: String,
    #[serde(rename = "FilingType")]
    pub filing_type: String,
    #[serde(rename = "AmountReported")]
    pub amount_reported: Option<String>,
    #[serde(rename = "DatePosted")]
    pub date_posted: NaiveDate,
    #[serde(rename = "FilingYear")]
    pub filing_year: i32,
    #[serde(rename = "AmountType")]
    pub amount_type: AmountType,
}

/// Normalizes an organization name for the self-lobbying equality check.
///
/// Lower-cases, strips periods/commas/parentheses, collapses spaced-out
/// "U S"/"U S A" forms, then applies suffix and prefix rules ("the " is
/// dropped, leading/trailing US forms unify). Only used for comparison;
/// never surfaced in output.
pub fn commonize(raw_value: &str) -> String {
    let mut value = raw_value
        .to_lowercase()
        .replace('.', "")
        .replace(',', "")
        .replace('(', "")
        .replace(')', "")
        .replace(" u s a ", " usa ")
        .replace(" u.s. ", " us ")
        .replace(" u s ", " us ")
        .replace("  ", " ")
        .trim()
        .to_string();

    if let Some(stem) = value.strip_suffix(" us a") {
        value = format!("{} usa", stem);
    } else if let Some(stem) = value.strip_suffix(" u s") {
        value = format!("{} us", stem);
    }

    if let Some(rest) = value.strip_prefix("the ") {
        return rest.to_string();
    }
    if let Some(rest) = value.strip_prefix("u.s. ") {
        return format!("us {}", rest);
    }
    if let Some(rest) = value.strip_prefix("u s ") {
        return format!("us {}", rest);
    }
    value
}

/// Maps one raw filing to a report row.
///
/// The reported amount defaults to income. When income is absent, the row
/// switches to expenses if the commonized registrant and client names are
/// equal, or (failing that) if the raw pair appears in the override list.
/// A filing-type code missing from the catalog is fatal.
pub fn normalize(
    raw: &RawFiling,
    catalog: &FilingTypeCatalog,
    overrides: &OverrideList,
) -> Result<NormalizedFiling, ScrapeError> {
    let registrant_name = raw.registrant.name.clone();
    let client_name = raw.client.name.clone();

    let mut amount_reported = raw.income.clone();
    let mut amount_type = AmountType::Income;

    if raw.income.is_none() && commonize(&registrant_name) == commonize(&client_name) {
        amount_reported = raw.expenses.clone();
        amount_type = AmountType::Expenses;
    }

    if amount_type == AmountType::Income
        && raw.income.is_none()
        && overrides.is_self_lobbying(&registrant_name, &client_name)
    {
        amount_reported = raw.expenses.clone();
        amount_type = AmountType::ExpensesOverride;
    }

    let filing_type = catalog.label(&raw.filing_type)?.replace(" - ", " ");

    Ok(NormalizedFiling {
        uuid: raw.filing_uuid.clone(),
        registrant_name,
        client_name,
        filing_type,
        amount_reported,
        date_posted: raw.dt_posted.date_naive(),
        filing_year: raw.filing_year,
        amount_type,
    })
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use lda_api::types::{FilingClient, Registrant};

    use super::*;
    use crate::overrides::SelfLobbyingOverride;

    fn raw_filing(registrant: &str, client: &str, income: Option<&str>) -> RawFiling {
        RawFiling {
            filing_uuid: "8d1e9f46-99d5-4b31-8d1a-4f1c0a2b5c77".to_string(),
            filing_type: "Q1".to_string(),
            filing_year: 2023,
            dt_posted: DateTime::parse_from_rfc3339("2023-04-20T23:59:59-04:00").unwrap(),
            income: income.map(String::from),
            expenses: Some("120000.00".to_string()),
            registrant: Registrant {
                id: Some(1),
                name: registrant.to_string(),
            },
            client: FilingClient {
                id: Some(2),
                name: client.to_string(),
            },
        }
    }

    fn catalog() -> FilingTypeCatalog {
        FilingTypeCatalog::from_entries(&[lda_api::FilingTypeEntry {
            value: "Q1".to_string(),
            name: "1st Quarter - Report".to_string(),
        }])
    }

    #[test]
    fn commonize_unifies_prefix_forms() {
        assert_eq!(
            commonize("The U.S. Example Co."),
            commonize("us example co")
        );
    }

    #[test]
    fn commonize_unifies_spaced_suffix() {
        assert_eq!(commonize("Acme U S A"), "acme usa");
        assert_eq!(commonize("Acme USA"), "acme usa");
    }

    #[test]
    fn commonize_unifies_spaced_prefix() {
        assert_eq!(commonize("U S Widget Assn"), "us widget assn");
    }

    #[test]
    fn commonize_strips_punctuation_and_double_spaces() {
        assert_eq!(commonize("Acme,  Inc. (formerly Apex)"), "acme inc formerly apex");
    }

    #[test]
    fn name_match_attributes_expenses() {
        let raw = raw_filing("Acme LLC", "Acme LLC", None);
        let row = normalize(&raw, &catalog(), &OverrideList::default()).unwrap();
        assert_eq!(row.amount_type, AmountType::Expenses);
        assert_eq!(row.amount_reported.as_deref(), Some("120000.00"));
    }

    #[test]
    fn commonized_match_attributes_expenses() {
        let raw = raw_filing("The Acme Co.", "Acme Co", None);
        let row = normalize(&raw, &catalog(), &OverrideList::default()).unwrap();
        assert_eq!(row.amount_type, AmountType::Expenses);
    }

    #[test]
    fn override_match_is_flagged_distinctly() {
        let raw = raw_filing("Apex Government Affairs", "Apex Industries", None);
        let overrides = OverrideList::new(vec![SelfLobbyingOverride {
            registrant_name: "Apex Government Affairs".to_string(),
            client_name: "Apex Industries".to_string(),
        }]);
        let row = normalize(&raw, &catalog(), &overrides).unwrap();
        assert_eq!(row.amount_type, AmountType::ExpensesOverride);
        assert_eq!(row.amount_reported.as_deref(), Some("120000.00"));
    }

    #[test]
    fn name_match_takes_precedence_over_override() {
        let raw = raw_filing("Acme LLC", "Acme LLC", None);
        let overrides = OverrideList::new(vec![SelfLobbyingOverride {
            registrant_name: "Acme LLC".to_string(),
            client_name: "Acme LLC".to_string(),
        }]);
        let row = normalize(&raw, &catalog(), &overrides).unwrap();
        assert_eq!(row.amount_type, AmountType::Expenses);
    }

    #[test]
    fn absent_income_without_match_stays_income() {
        let raw = raw_filing("Meridian Strategies", "Lakeshore Freight", None);
        let row = normalize(&raw, &catalog(), &OverrideList::default()).unwrap();
        assert_eq!(row.amount_type, AmountType::Income);
        assert!(row.amount_reported.is_none());
    }

    #[test]
    fn present_income_is_reported_even_for_matching_names() {
        let raw = raw_filing("Acme LLC", "Acme LLC", Some("50000.00"));
        let row = normalize(&raw, &catalog(), &OverrideList::default()).unwrap();
        assert_eq!(row.amount_type, AmountType::Income);
        assert_eq!(row.amount_reported.as_deref(), Some("50000.00"));
    }

    #[test]
    fn filing_type_label_drops_dash_separator() {
        let raw = raw_filing("Acme LLC", "Other Co", Some("1.00"));
        let row = normalize(&raw, &catalog(), &OverrideList::default()).unwrap();
        assert_eq!(row.filing_type, "1st Quarter Report");
    }

    #[test]
    fn date_posted_keeps_the_filing_offset() {
        let raw = raw_filing("Acme LLC", "Other Co", Some("1.00"));
        let row = normalize(&raw, &catalog(), &OverrideList::default()).unwrap();
        assert_eq!(row.date_posted.to_string(), "2023-04-20");
    }

    #[test]
    fn unknown_filing_type_is_fatal() {
        let mut raw = raw_filing("Acme LLC", "Other Co", Some("1.00"));
        raw.filing_type = "ZZ".to_string();
        let err = normalize(&raw, &catalog(), &OverrideList::default()).unwrap_err();
        assert!(matches!(err, ScrapeError::UnknownFilingType { code } if code == "ZZ"));
    }
}
