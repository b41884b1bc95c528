//! Quote and category types
//!
//! This module defines the quote record surfaced to the UI and persisted
//! in the favorites collection, plus the fixed category enumeration.

use serde::{Deserialize, Serialize};

/// Category labels for quotes
///
/// The set is fixed at compile time; quotes always belong to exactly one
/// category. Serialized as the display string (e.g. `"Success"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Achievement and ambition
    Success,
    /// Contentment and wellbeing
    Happiness,
    /// Endurance through setbacks
    Perseverance,
    /// Guiding and lifting others
    Leadership,
    /// Insight and reflection
    Wisdom,
    /// Learning and becoming
    Growth,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Success,
        Category::Happiness,
        Category::Perseverance,
        Category::Leadership,
        Category::Wisdom,
        Category::Growth,
    ];

    /// Get the display name for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Success => "Success",
            Category::Happiness => "Happiness",
            Category::Perseverance => "Perseverance",
            Category::Leadership => "Leadership",
            Category::Wisdom => "Wisdom",
            Category::Growth => "Growth",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single quote
///
/// Catalog entries are immutable once loaded; the favorite flag is not part
/// of the catalog data and is attached when the quote is surfaced as the
/// daily selection or stored in the favorites collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Unique identifier, stable across runs
    pub id: u32,

    /// Display text
    pub text: String,

    /// Author name
    pub author: String,

    /// Category label
    pub category: Category,

    /// Whether the user has marked this quote as a favorite
    #[serde(default)]
    pub is_favorite: bool,
}

impl Quote {
    /// Create a quote with the favorite flag cleared
    pub fn new(
        id: u32,
        text: impl Into<String>,
        author: impl Into<String>,
        category: Category,
    ) -> Self {
        Quote {
            id,
            text: text.into(),
            author: author.into(),
            category,
            is_favorite: false,
        }
    }

    /// Return a copy of this quote with the favorite flag set
    pub fn as_favorite(&self) -> Self {
        Quote { is_favorite: true, ..self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec!["Success", "Happiness", "Perseverance", "Leadership", "Wisdom", "Growth"]
        );
    }

    #[test]
    fn test_category_serializes_as_display_string() {
        let json = serde_json::to_string(&Category::Perseverance).unwrap();
        assert_eq!(json, "\"Perseverance\"");

        let parsed: Category = serde_json::from_str("\"Wisdom\"").unwrap();
        assert_eq!(parsed, Category::Wisdom);
    }

    #[test]
    fn test_quote_new_clears_favorite_flag() {
        let quote = Quote::new(1, "text", "author", Category::Success);
        assert!(!quote.is_favorite);
    }

    #[test]
    fn test_quote_as_favorite() {
        let quote = Quote::new(3, "text", "author", Category::Growth);
        let favorite = quote.as_favorite();

        assert!(favorite.is_favorite);
        assert_eq!(favorite.id, quote.id);
        assert_eq!(favorite.text, quote.text);
        // Original is untouched
        assert!(!quote.is_favorite);
    }

    #[test]
    fn test_quote_serialization_is_camel_case() {
        let quote = Quote::new(7, "The mind is everything.", "Buddha", Category::Wisdom);
        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["isFavorite"], false);
        assert_eq!(json["category"], "Wisdom");
    }

    #[test]
    fn test_quote_round_trip() {
        let quote = Quote::new(2, "Success is not final.", "Winston Churchill", Category::Perseverance)
            .as_favorite();

        let json = serde_json::to_string(&quote).unwrap();
        let parsed: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, quote);
    }

    #[test]
    fn test_quote_tolerates_missing_favorite_flag() {
        // Records written before the flag existed deserialize with it cleared
        let json = r#"{"id":4,"text":"t","author":"a","category":"Leadership"}"#;
        let parsed: Quote = serde_json::from_str(json).unwrap();
        assert!(!parsed.is_favorite);
    }
}
