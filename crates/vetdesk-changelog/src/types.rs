//! Changelog types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vetdesk_core::config::Language;

/// Unreleased sentinel, English spelling
pub const UNRELEASED_EN: &str = "Unreleased";

/// Unreleased sentinel, Spanish spelling
pub const UNRELEASED_ES: &str = "Sin Publicar";

/// Check whether a version token is the unreleased sentinel in any language
pub fn is_unreleased_token(version: &str) -> bool {
    version.eq_ignore_ascii_case(UNRELEASED_EN) || version.eq_ignore_ascii_case(UNRELEASED_ES)
}

/// Unreleased sentinel for a display language
pub fn unreleased_label(language: Language) -> &'static str {
    match language {
        Language::Es => UNRELEASED_ES,
        Language::En => UNRELEASED_EN,
    }
}

/// Change classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// New functionality
    Added,
    /// Changes to existing functionality
    Changed,
    /// Bug fixes
    Fixed,
    /// Vulnerability fixes
    Security,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Added,
        Category::Changed,
        Category::Fixed,
        Category::Security,
    ];

    /// Serialized key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Changed => "changed",
            Self::Fixed => "fixed",
            Self::Security => "security",
        }
    }

    /// Heading text in the given language
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Added, Language::En) => "Added",
            (Self::Added, Language::Es) => "Agregado",
            (Self::Changed, Language::En) => "Changed",
            (Self::Changed, Language::Es) => "Modificado",
            (Self::Fixed, Language::En) => "Fixed",
            (Self::Fixed, Language::Es) => "Corregido",
            (Self::Security, Language::En) => "Security",
            (Self::Security, Language::Es) => "Seguridad",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// A changelog entry for a version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Version token as written (semver or unreleased sentinel)
    pub version: String,
    /// ISO date, empty when the heading has none
    pub date: String,
    /// Items per category; a key exists only with at least one item
    pub categories: BTreeMap<Category, Vec<String>>,
}

impl ChangelogEntry {
    /// Create an empty entry
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: String::new(),
            categories: BTreeMap::new(),
        }
    }

    /// Set the date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Append an item to a category
    pub fn add_item(&mut self, category: Category, item: impl Into<String>) {
        self.categories.entry(category).or_default().push(item.into());
    }

    /// Items of a category, empty if absent
    pub fn items(&self, category: Category) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of items across categories
    pub fn item_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Check if entry has any content
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Check if this entry is the unreleased block
    pub fn is_unreleased(&self) -> bool {
        is_unreleased_token(&self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("added".parse::<Category>().unwrap(), Category::Added);
        assert_eq!("Security".parse::<Category>().unwrap(), Category::Security);
        assert!("removed".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Fixed.label(Language::Es), "Corregido");
        assert_eq!(Category::Fixed.label(Language::En), "Fixed");
    }

    #[test]
    fn test_entry_items() {
        let mut entry = ChangelogEntry::new("1.0.0").with_date("2024-01-15");
        assert!(entry.is_empty());
        assert!(entry.items(Category::Added).is_empty());

        entry.add_item(Category::Added, "Agenda de citas");
        entry.add_item(Category::Added, "Historial clínico");
        entry.add_item(Category::Fixed, "Cálculo de IVA");

        assert_eq!(entry.item_count(), 3);
        assert_eq!(entry.items(Category::Added)[1], "Historial clínico");
        assert!(!entry.categories.contains_key(&Category::Security));
    }

    #[test]
    fn test_unreleased_detection() {
        assert!(ChangelogEntry::new("Unreleased").is_unreleased());
        assert!(ChangelogEntry::new("Sin Publicar").is_unreleased());
        assert!(!ChangelogEntry::new("2.1.0").is_unreleased());
    }

    #[test]
    fn test_entry_json_shape() {
        let mut entry = ChangelogEntry::new("1.0.0").with_date("2024-01-15");
        entry.add_item(Category::Security, "Rotación de tokens");

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["categories"]["security"][0], "Rotación de tokens");
        assert!(json["categories"].get("added").is_none());
    }
}
