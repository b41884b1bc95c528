//! The favorites collection
//!
//! Favorites are quotes the user has marked as liked. The collection is
//! unique by id and iterates in insertion order for display.

use serde::{Deserialize, Serialize};

use crate::quote::Quote;

/// Insertion-ordered set of favorite quotes, unique by id
///
/// Entries always carry a set favorite flag, no matter what the inserted
/// copy carried. Serializes transparently as the array of quote records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    entries: Vec<Quote>,
}

impl FavoriteSet {
    /// Create an empty favorites collection
    pub fn new() -> Self {
        FavoriteSet::default()
    }

    /// Insert a quote, forcing its favorite flag on
    ///
    /// Inserting an id that is already present leaves the collection
    /// unchanged.
    pub fn insert(&mut self, quote: &Quote) {
        if !self.contains(quote.id) {
            self.entries.push(quote.as_favorite());
        }
    }

    /// Remove the entry with the given id
    ///
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|q| q.id != id);
        self.entries.len() < before
    }

    /// Check membership by id
    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|q| q.id == id)
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order
    pub fn as_slice(&self) -> &[Quote] {
        &self.entries
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.entries.iter()
    }

    /// Number of favorites
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::Category;

    fn make_quote(id: u32) -> Quote {
        Quote::new(id, format!("text {id}"), "author", Category::Wisdom)
    }

    #[test]
    fn test_new_is_empty() {
        let favorites = FavoriteSet::new();
        assert!(favorites.is_empty());
        assert_eq!(favorites.len(), 0);
    }

    #[test]
    fn test_insert_sets_flag() {
        let mut favorites = FavoriteSet::new();
        favorites.insert(&make_quote(1));

        assert!(favorites.contains(1));
        assert!(favorites.as_slice()[0].is_favorite);
    }

    #[test]
    fn test_insert_duplicate_is_ignored() {
        let mut favorites = FavoriteSet::new();
        favorites.insert(&make_quote(1));
        favorites.insert(&make_quote(1));

        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut favorites = FavoriteSet::new();
        favorites.insert(&make_quote(1));
        favorites.insert(&make_quote(2));

        assert!(favorites.remove(1));
        assert!(!favorites.contains(1));
        assert!(favorites.contains(2));

        assert!(!favorites.remove(1));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut favorites = FavoriteSet::new();
        favorites.insert(&make_quote(3));
        favorites.insert(&make_quote(1));
        favorites.insert(&make_quote(2));

        let ids: Vec<u32> = favorites.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut favorites = FavoriteSet::new();
        favorites.insert(&make_quote(1));
        favorites.insert(&make_quote(2));

        favorites.clear();
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut favorites = FavoriteSet::new();
        favorites.insert(&make_quote(5));

        let json = serde_json::to_value(&favorites).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], 5);
        assert_eq!(json[0]["isFavorite"], true);
    }

    #[test]
    fn test_round_trip() {
        let mut favorites = FavoriteSet::new();
        favorites.insert(&make_quote(1));
        favorites.insert(&make_quote(4));

        let json = serde_json::to_string(&favorites).unwrap();
        let parsed: FavoriteSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, favorites);
    }
}
