//! Variable names excluded from domain listings

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// TASE.2 bilateral table identifier, reported per domain rather than as a variable
pub const BILATERAL_TABLE_ID: &str = "Bilateral_Table_ID";

/// Case-insensitive set of variable names to leave out of a domain's
/// variable list.
///
/// Matching folds ASCII case only. The default set holds
/// [`BILATERAL_TABLE_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SuppressedNames {
    /// Folded name -> name as configured
    names: BTreeMap<String, String>,
}

impl SuppressedNames {
    /// An empty set: nothing is suppressed
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
        }
    }

    /// Build a set from names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::empty();
        for name in names {
            set.insert(name);
        }
        set
    }

    /// Add a name; returns `false` if an equal name (ignoring case) was present
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let key = name.to_ascii_lowercase();
        if self.names.contains_key(&key) {
            return false;
        }
        self.names.insert(key, name);
        true
    }

    /// Check whether `name` is suppressed
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of names in the set
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names as configured
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.values().map(String::as_str)
    }

    /// Keep only the names that are not suppressed, preserving order
    pub fn retain_visible<S: AsRef<str>>(&self, names: Vec<S>) -> Vec<S> {
        names
            .into_iter()
            .filter(|name| !self.contains(name.as_ref()))
            .collect()
    }
}

impl Default for SuppressedNames {
    fn default() -> Self {
        Self::new([BILATERAL_TABLE_ID])
    }
}

impl From<Vec<String>> for SuppressedNames {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<SuppressedNames> for Vec<String> {
    fn from(set: SuppressedNames) -> Self {
        set.names.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suppresses_bilateral_table_id() {
        let set = SuppressedNames::default();
        assert!(set.contains("Bilateral_Table_ID"));
        assert!(set.contains("BILATERAL_TABLE_ID"));
        assert!(set.contains("bilateral_table_id"));
        assert!(!set.contains("Bilateral_Table"));
    }

    #[test]
    fn test_retain_visible_removes_entries() {
        let set = SuppressedNames::default();
        let names = vec!["Voltage", "bilateral_table_id", "Current"];
        assert_eq!(set.retain_visible(names), vec!["Voltage", "Current"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let set = SuppressedNames::new(["A", "b"]);
        let once = set.retain_visible(vec!["a", "B", "c", "A"]);
        let twice = set.retain_visible(once.clone());
        assert_eq!(once, vec!["c"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_insert_ignores_case_duplicates() {
        let mut set = SuppressedNames::empty();
        assert!(set.insert("Foo"));
        assert!(!set.insert("FOO"));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Foo"]);
    }

    #[test]
    fn test_serde_as_list() {
        let set: SuppressedNames = serde_json::from_str(r#"["X", "y"]"#).unwrap();
        assert!(set.contains("x"));
        assert!(set.contains("Y"));
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["X","y"]"#);
    }
}
