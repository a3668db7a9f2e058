//! The manually curated self-lobbying exception list.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

/// One registrant/client pair known to be self-lobbying despite the names
/// not matching. Compared against the raw, unnormalized filing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfLobbyingOverride {
    pub registrant_name: String,
    pub client_name: String,
}

/// The override list, loaded once at startup and read-only for the run.
#[derive(Debug, Clone, Default)]
pub struct OverrideList {
    entries: Vec<SelfLobbyingOverride>,
}

impl OverrideList {
    pub fn new(entries: Vec<SelfLobbyingOverride>) -> Self {
        Self { entries }
    }

    /// Loads a JSON array of `{registrantName, clientName}` objects.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScrapeError> {
        let raw = std::fs::read_to_string(path)?;
        let entries = serde_json::from_str(&raw)?;
        Ok(Self { entries })
    }

    /// Exact match on the raw strings, both fields.
    pub fn is_self_lobbying(&self, registrant_name: &str, client_name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.registrant_name == registrant_name && entry.client_name == client_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_entries() {
        let json = r#"[
            {"registrantName": "Acme Corp", "clientName": "Acme Corporation"}
        ]"#;
        let entries: Vec<SelfLobbyingOverride> = serde_json::from_str(json).unwrap();
        let list = OverrideList::new(entries);
        assert_eq!(list.len(), 1);
        assert!(list.is_self_lobbying("Acme Corp", "Acme Corporation"));
    }

    #[test]
    fn match_is_exact_and_case_sensitive() {
        let list = OverrideList::new(vec![SelfLobbyingOverride {
            registrant_name: "Acme Corp".to_string(),
            client_name: "Acme Corporation".to_string(),
        }]);
        assert!(!list.is_self_lobbying("acme corp", "Acme Corporation"));
        assert!(!list.is_self_lobbying("Acme Corp", "Acme Corp"));
    }

    #[test]
    fn empty_list_matches_nothing() {
        let list = OverrideList::default();
        assert!(!list.is_self_lobbying("A", "A"));
    }
}
