//! Category set
//!
//! Categories are bare labels. The set is not linked to expenses: an expense
//! may use a label that is not in the set, and the set may hold labels no
//! expense uses.

use std::collections::BTreeSet;

/// A set of distinct category labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    names: BTreeSet<String>,
}

impl CategorySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label; duplicates are absorbed. Returns true if it was new.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Remove a label. Returns true if it was present.
    pub fn delete(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    /// Whether the label is in the set
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// All labels, sorted
    pub fn list(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CategorySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_absorbed() {
        let mut set = CategorySet::new();
        assert!(set.add("food"));
        assert!(!set.add("food"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_delete_non_member_is_noop() {
        let mut set: CategorySet = ["food", "rent"].into_iter().collect();
        assert!(!set.delete("travel"));
        assert_eq!(set.len(), 2);
        assert!(set.delete("food"));
        assert!(!set.contains("food"));
    }

    #[test]
    fn test_case_sensitive() {
        let mut set = CategorySet::new();
        set.add("Food");
        set.add("food");
        assert_eq!(set.list(), vec!["Food".to_string(), "food".to_string()]);
    }
}
