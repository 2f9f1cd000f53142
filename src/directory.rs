//! Static company directory.
//!
//! The directory is an ordered list of records loaded once at startup. It is
//! seeded from the built-in `data/companies.toml` table, or from a file of the
//! same shape when `companies_file` is configured.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Built-in directory table.
const BUILTIN_COMPANIES: &str = include_str!("../data/companies.toml");

/// A preconfigured company entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyRecord {
    /// Lowercase identifier used for matching.
    pub key: String,
    /// Display name.
    pub name: String,
    /// URL or embedded image reference.
    pub logo_url: String,
    /// Free-text summary.
    pub description: String,
}

/// On-disk layout of a directory file.
#[derive(Debug, Default, Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    company: Vec<CompanyRecord>,
}

/// Errors that can occur while loading a directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read directory file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse directory table: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("company record #{index} has an empty key")]
    EmptyKey { index: usize },
    #[error("duplicate company key: {0}")]
    DuplicateKey(String),
}

/// Immutable, ordered set of company records.
#[derive(Debug, Clone)]
pub struct CompanyDirectory {
    records: Vec<CompanyRecord>,
}

impl CompanyDirectory {
    /// Build a directory from records, normalizing keys to lowercase.
    pub fn new(records: Vec<CompanyRecord>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(records.len());

        for (index, mut record) in records.into_iter().enumerate() {
            record.key = record.key.trim().to_lowercase();
            if record.key.is_empty() {
                return Err(DirectoryError::EmptyKey { index });
            }
            if !seen.insert(record.key.clone()) {
                return Err(DirectoryError::DuplicateKey(record.key));
            }
            normalized.push(record);
        }

        Ok(Self {
            records: normalized,
        })
    }

    /// The directory shipped with the binary.
    pub fn builtin() -> Result<Self, DirectoryError> {
        Self::from_toml_str(BUILTIN_COMPANIES)
    }

    /// Parse a directory from TOML text (`[[company]]` tables).
    pub fn from_toml_str(text: &str) -> Result<Self, DirectoryError> {
        let file: DirectoryFile = toml::from_str(text)?;
        Self::new(file.company)
    }

    /// Load a directory from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let text = fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let directory = Self::from_toml_str(&text)?;
        info!(
            "Loaded {} companies from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// Load from `path` if given, otherwise use the built-in table.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, DirectoryError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Find the first record matching an already-normalized query.
    ///
    /// A record matches when the query contains its key or its key contains
    /// the query. Records are scanned in directory order, so short keys can
    /// shadow later entries.
    pub fn find(&self, normalized: &str) -> Option<&CompanyRecord> {
        let found = self
            .records
            .iter()
            .find(|r| normalized.contains(r.key.as_str()) || r.key.contains(normalized));
        if let Some(record) = found {
            debug!("Query {:?} matched key {:?}", normalized, record.key);
        }
        found
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str, name: &str) -> CompanyRecord {
        CompanyRecord {
            key: key.to_string(),
            name: name.to_string(),
            logo_url: format!("https://example.com/{key}.svg"),
            description: format!("{name} makes things."),
        }
    }

    #[test]
    fn test_builtin_directory() {
        let directory = CompanyDirectory::builtin().unwrap();
        assert_eq!(directory.len(), 10);
        assert_eq!(directory.records()[0].key, "microsoft");
        assert_eq!(directory.records()[9].key, "nvidia");
    }

    #[test]
    fn test_keys_are_normalized() {
        let directory = CompanyDirectory::new(vec![record("  Acme ", "Acme Corp")]).unwrap();
        assert_eq!(directory.records()[0].key, "acme");
    }

    #[test]
    fn test_rejects_empty_and_duplicate_keys() {
        let err = CompanyDirectory::new(vec![record("acme", "A"), record("  ", "B")]).unwrap_err();
        assert!(matches!(err, DirectoryError::EmptyKey { index: 1 }));

        let err = CompanyDirectory::new(vec![record("acme", "A"), record("ACME", "B")]).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateKey(ref k) if k == "acme"));
    }

    #[test]
    fn test_find_matches_in_both_directions() {
        let directory =
            CompanyDirectory::new(vec![record("acme", "Acme"), record("globex", "Globex")])
                .unwrap();

        // Query contains key
        assert_eq!(directory.find("acme rockets").unwrap().name, "Acme");
        // Key contains query
        assert_eq!(directory.find("glob").unwrap().name, "Globex");
        assert!(directory.find("initech").is_none());
    }

    #[test]
    fn test_find_first_match_wins() {
        // "ibm" appears inside the query, but "tesla" comes first in order.
        let directory =
            CompanyDirectory::new(vec![record("tesla", "Tesla"), record("ibm", "IBM")]).unwrap();
        assert_eq!(directory.find("tesla ibm").unwrap().name, "Tesla");
    }

    #[test]
    fn test_parse_error() {
        let err = CompanyDirectory::from_toml_str("[[company]]\nkey = 1").unwrap_err();
        assert!(matches!(err, DirectoryError::Parse(_)));
    }
}
