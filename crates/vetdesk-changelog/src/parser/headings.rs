//! Category heading lookup

use std::collections::HashMap;

use crate::types::Category;

/// Built-in headings, English and Spanish
const BUILTIN_HEADINGS: [(&str, Category); 8] = [
    ("added", Category::Added),
    ("agregado", Category::Added),
    ("changed", Category::Changed),
    ("modificado", Category::Changed),
    ("fixed", Category::Fixed),
    ("corregido", Category::Fixed),
    ("security", Category::Security),
    ("seguridad", Category::Security),
];

/// Maps normalized third-level heading text to a category
#[derive(Debug, Clone)]
pub struct HeadingTable {
    headings: HashMap<String, Category>,
}

impl HeadingTable {
    /// Create a table with the built-in bilingual headings
    pub fn new() -> Self {
        let mut table = Self::empty();
        for (heading, category) in BUILTIN_HEADINGS {
            table.insert(heading, category);
        }
        table
    }

    /// Create an empty table
    pub fn empty() -> Self {
        Self {
            headings: HashMap::new(),
        }
    }

    /// Register a heading; later registrations win
    pub fn insert(&mut self, heading: &str, category: Category) {
        self.headings.insert(normalize(heading), category);
    }

    /// Look up a heading, ignoring case and surrounding whitespace
    pub fn lookup(&self, heading: &str) -> Option<Category> {
        self.headings.get(&normalize(heading)).copied()
    }

    /// Number of known headings
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}

impl Default for HeadingTable {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(heading: &str) -> String {
    heading.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_headings() {
        let table = HeadingTable::new();
        assert_eq!(table.len(), 8);
        assert_eq!(table.lookup("Added"), Some(Category::Added));
        assert_eq!(table.lookup("Agregado"), Some(Category::Added));
        assert_eq!(table.lookup("MODIFICADO"), Some(Category::Changed));
        assert_eq!(table.lookup("  corregido "), Some(Category::Fixed));
        assert_eq!(table.lookup("Seguridad"), Some(Category::Security));
    }

    #[test]
    fn test_unknown_heading() {
        let table = HeadingTable::new();
        assert_eq!(table.lookup("Removed"), None);
        assert_eq!(table.lookup("Deprecated"), None);
    }

    #[test]
    fn test_insert_alias() {
        let mut table = HeadingTable::new();
        table.insert("Ajouté", Category::Added);
        assert_eq!(table.lookup("ajouté"), Some(Category::Added));
    }

    #[test]
    fn test_empty_table() {
        let table = HeadingTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.lookup("Added"), None);
    }
}
