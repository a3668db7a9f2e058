use lda_api::types::{FilingTypeEntry, FilingsPage};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_filings_page_full() {
    let json = load_fixture("filings_page.json");
    let page: FilingsPage = serde_json::from_str(&json).unwrap();
    assert_eq!(page.count, 2);
    assert!(page.next.is_none());
    assert!(page.previous.is_none());
    assert_eq!(page.results.len(), 2);

    let filing = &page.results[0];
    assert_eq!(filing.filing_uuid, "8d1e9f46-99d5-4b31-8d1a-4f1c0a2b5c77");
    assert_eq!(filing.filing_type, "Q1");
    assert_eq!(filing.filing_year, 2023);
    assert_eq!(filing.income.as_deref(), Some("50000.00"));
    assert!(filing.expenses.is_none());
    assert_eq!(filing.registrant.id, Some(401104893));
    assert_eq!(filing.registrant.name, "Meridian Policy Strategies LLC");
    assert_eq!(filing.client.name, "Lakeshore Freight Holdings");
    assert_eq!(filing.dt_posted.to_rfc3339(), "2023-04-20T14:06:32.862361-04:00");

    let self_filer = &page.results[1];
    assert!(self_filer.income.is_none());
    assert_eq!(self_filer.expenses.as_deref(), Some("120000.00"));
}

#[test]
fn deserialize_filing_types() {
    let json = load_fixture("filing_types.json");
    let types: Vec<FilingTypeEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(types.len(), 9);
    assert_eq!(types[0].value, "RR");
    assert_eq!(types[8].name, "Year-End - Report");
}

#[test]
fn deserialize_empty_page() {
    let json = r#"{"count": 0, "next": null, "previous": null, "results": []}"#;
    let page: FilingsPage = serde_json::from_str(&json).unwrap();
    assert_eq!(page.count, 0);
    assert!(page.results.is_empty());
}

#[test]
fn deserialize_missing_registrant_name_is_error() {
    let json = r#"{
        "count": 1,
        "next": null,
        "previous": null,
        "results": [{
            "filing_uuid": "u-1",
            "filing_type": "Q1",
            "filing_year": 2023,
            "dt_posted": "2023-04-20T14:06:32-04:00",
            "income": null,
            "expenses": null,
            "registrant": {"id": 1},
            "client": {"id": 2, "name": "Acme"}
        }]
    }"#;
    let result = serde_json::from_str::<FilingsPage>(json);
    assert!(result.is_err());
}

#[test]
fn deserialize_malformed_json_is_error() {
    let result = serde_json::from_str::<FilingsPage>(r#"{"count": not valid}"#);
    assert!(result.is_err());
}
