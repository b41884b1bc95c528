//! The built-in quote catalog
//!
//! The catalog is constructed once at startup and never mutated. Every
//! selection draws from it; favorites reference it by id.

use crate::quote::{Category, Quote};

/// The fixed, ordered collection of all quotes known to the application
///
/// A catalog is never empty. Entries are distinct by id and carry a cleared
/// favorite flag; the flag is attached to copies when they are surfaced.
#[derive(Debug, Clone)]
pub struct Catalog {
    quotes: Vec<Quote>,
}

impl Catalog {
    /// Create a catalog from a list of quotes
    ///
    /// # Panics
    ///
    /// Panics if `quotes` is empty. An empty catalog would leave the
    /// selection rule with nothing to return.
    pub fn new(quotes: Vec<Quote>) -> Self {
        assert!(!quotes.is_empty(), "catalog must contain at least one quote");
        debug_assert!(
            {
                let mut ids: Vec<u32> = quotes.iter().map(|q| q.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "catalog ids must be distinct"
        );
        Catalog { quotes }
    }

    /// The built-in catalog shipped with the application
    pub fn built_in() -> Self {
        Catalog::new(vec![
            Quote::new(
                1,
                "The only way to do great work is to love what you do.",
                "Steve Jobs",
                Category::Success,
            ),
            Quote::new(
                2,
                "Success is not final, failure is not fatal: it is the courage to continue that counts.",
                "Winston Churchill",
                Category::Perseverance,
            ),
            Quote::new(
                3,
                "The future belongs to those who believe in the beauty of their dreams.",
                "Eleanor Roosevelt",
                Category::Growth,
            ),
            Quote::new(
                4,
                "Leadership is not about being the best. Leadership is about making everyone else better.",
                "Jack Welch",
                Category::Leadership,
            ),
            Quote::new(
                5,
                "Happiness is not something ready made. It comes from your own actions.",
                "Dalai Lama",
                Category::Happiness,
            ),
            Quote::new(
                6,
                "The best way to predict the future is to create it.",
                "Peter Drucker",
                Category::Success,
            ),
            Quote::new(
                7,
                "What you get by achieving your goals is not as important as what you become by achieving your goals.",
                "Zig Ziglar",
                Category::Growth,
            ),
            Quote::new(
                8,
                "The mind is everything. What you think you become.",
                "Buddha",
                Category::Wisdom,
            ),
        ])
    }

    /// All quotes in catalog order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Look up a quote by id
    pub fn get(&self, id: u32) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.id == id)
    }

    /// Check whether an id belongs to the catalog
    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Number of quotes in the catalog
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// A catalog is never empty; this exists for the conventional pairing
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::built_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_catalog_shape() {
        let catalog = Catalog::built_in();

        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());

        let ids: Vec<u32> = catalog.quotes().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_built_in_entries_are_not_favorites() {
        let catalog = Catalog::built_in();
        assert!(catalog.quotes().iter().all(|q| !q.is_favorite));
    }

    #[test]
    fn test_built_in_categories_are_members_of_the_fixed_set() {
        let catalog = Catalog::built_in();
        for quote in catalog.quotes() {
            assert!(Category::ALL.contains(&quote.category));
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::built_in();

        let quote = catalog.get(8).unwrap();
        assert_eq!(quote.author, "Buddha");

        assert!(catalog.get(99).is_none());
        assert!(catalog.contains(1));
        assert!(!catalog.contains(0));
    }

    #[test]
    #[should_panic(expected = "at least one quote")]
    fn test_empty_catalog_rejected() {
        Catalog::new(Vec::new());
    }
}
