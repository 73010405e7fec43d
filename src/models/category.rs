//! Category set model
//!
//! Maintains the growable set of category labels offered to the user. The
//! set is seeded with five defaults and grows whenever a record introduces a
//! previously-unseen label; it never shrinks during a session. It is not
//! persisted: a fresh session starts again from the defaults.

use std::slice::Iter;

/// The default category labels every session starts with
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["Food", "Transport", "Entertainment", "Bills", "Shopping"];

/// Normalize a raw category label to leading-capital form
///
/// `"food"` and `"FOOD"` both become `"Food"`. The input is trimmed first.
pub fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut label: String = first.to_uppercase().collect();
            label.extend(chars.flat_map(|c| c.to_lowercase()));
            label
        }
    }
}

/// An insertion-ordered set of category labels
///
/// Presentation order is insertion order: the defaults first, then discovered
/// categories in first-seen order.
#[derive(Debug, Clone)]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    /// Create a set containing only the default categories
    pub fn new() -> Self {
        Self {
            labels: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Check whether a (normalized) label is already known
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Add a label if it is not already present
    ///
    /// Returns `true` if the label was newly inserted.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// All known labels, in presentation order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Iterate over the labels in presentation order
    pub fn iter(&self) -> Iter<'_, String> {
        self.labels.iter()
    }

    /// Number of known labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is empty (never true in practice; the defaults remain)
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("food"), "Food");
        assert_eq!(normalize_label("FOOD"), "Food");
        assert_eq!(normalize_label("fOoD"), "Food");
        assert_eq!(normalize_label("  travel  "), "Travel");
        assert_eq!(normalize_label(""), "");
        assert_eq!(normalize_label("   "), "");
    }

    #[test]
    fn test_defaults_in_order() {
        let set = CategorySet::new();
        assert_eq!(
            set.labels(),
            &["Food", "Transport", "Entertainment", "Bills", "Shopping"]
        );
    }

    #[test]
    fn test_insert_grows_in_first_seen_order() {
        let mut set = CategorySet::new();
        assert!(set.insert("Travel"));
        assert!(set.insert("Gifts"));
        assert_eq!(set.len(), 7);
        assert_eq!(set.labels()[5], "Travel");
        assert_eq!(set.labels()[6], "Gifts");
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = CategorySet::new();
        assert!(!set.insert("Food"));
        assert!(set.insert("Travel"));
        assert!(!set.insert("Travel"));
        assert_eq!(set.len(), 6);
    }
}
