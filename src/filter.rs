//! Filter engine: case-insensitive substring matching over item names.
//!
//! Pure functions only. The picker caches the index form and recomputes it
//! exclusively when the committed term or the roster changes.

use crate::Item;

/// Check if a name matches a search term.
/// Case-insensitive substring; an empty term matches everything.
pub fn matches_term(name: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Filter a roster down to the items whose name contains `term`,
/// preserving the original order.
pub fn filter<'a>(items: &'a [Item], term: &str) -> Vec<&'a Item> {
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&term))
        .collect()
}

/// Index form of [`filter`], used to keep a cached filtered view without
/// cloning items.
pub fn filter_indices(items: &[Item], term: &str) -> Vec<usize> {
    let term = term.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.name.to_lowercase().contains(&term))
        .map(|(idx, _)| idx)
        .collect()
}
