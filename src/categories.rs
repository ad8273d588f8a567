//! Shop-category keyword mapping.
//!
//! A flat JSON object maps lowercase shop keywords to category display
//! names, e.g. `{"lidl": "Groceries", "orlen": "Fuel"}`. A transaction's
//! descriptive text is matched by substring containment against each
//! keyword; the keywords are kept in sorted order so that when several of
//! them match the same description, the winner is the same on every run.

use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Category applied when no keyword matches a description.
pub const OTHER_CATEGORY: &str = "Other";

/// Mapping from lowercase shop keyword to category display name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<String, String>);

impl CategoryMap {
    /// Loads the mapping from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads the mapping from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Finds the first keyword contained in `search` as a substring.
    ///
    /// Keywords are tried in sorted order, so the match is deterministic
    /// even when several keywords are present in the same description.
    /// Returns the matched keyword and its category name.
    pub fn find_match(&self, search: &str) -> Option<(&str, &str)> {
        self.0
            .iter()
            .find(|(keyword, _)| search.contains(keyword.as_str()))
            .map(|(keyword, category)| (keyword.as_str(), category.as_str()))
    }

    /// Number of keywords in the mapping.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the mapping holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CategoryMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        CategoryMap(
            iter.into_iter()
                .map(|(keyword, category)| (keyword.into(), category.into()))
                .collect(),
        )
    }
}
