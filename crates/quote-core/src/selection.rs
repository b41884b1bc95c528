//! Daily-quote selection rule
//!
//! The daily quote is drawn uniformly from the catalog entries not yet in
//! favorites. When every entry has been favorited the pool is exhausted:
//! the cycle resets, favorites are cleared by the caller, and the draw
//! falls back to the entire catalog.

use crate::catalog::Catalog;
use crate::favorites::FavoriteSet;
use crate::quote::Quote;
use crate::random::RandomSource;

/// Outcome of a daily-quote draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Drawn from the remaining (non-favorite) pool
    Fresh(Quote),

    /// The pool was exhausted; the caller must clear favorites. The quote
    /// was drawn from the full catalog, so it may coincide with an entry
    /// the reset just released.
    CycleReset(Quote),
}

impl Selection {
    /// The selected quote, whichever branch produced it
    pub fn quote(&self) -> &Quote {
        match self {
            Selection::Fresh(q) | Selection::CycleReset(q) => q,
        }
    }

    /// Whether this draw exhausted the pool and requires a favorites reset
    pub fn is_cycle_reset(&self) -> bool {
        matches!(self, Selection::CycleReset(_))
    }
}

/// Draw the next daily quote
///
/// The returned quote always carries a cleared favorite flag: a fresh draw
/// is by construction not a favorite, and a reset draw happens after the
/// favorites collection is emptied.
pub fn next_daily(
    catalog: &Catalog,
    favorites: &FavoriteSet,
    random: &mut dyn RandomSource,
) -> Selection {
    let remaining: Vec<&Quote> = catalog
        .quotes()
        .iter()
        .filter(|q| !favorites.contains(q.id))
        .collect();

    if remaining.is_empty() {
        let all = catalog.quotes();
        let index = random.pick_index(all.len());
        Selection::CycleReset(all[index].clone())
    } else {
        let index = random.pick_index(remaining.len());
        Selection::Fresh(remaining[index].clone())
    }
}
