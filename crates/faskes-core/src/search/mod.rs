//! Province list search
//!
//! Case-insensitive substring matching over province names. The page calls
//! this on every keystroke, so it works on the precomputed list and never
//! touches the dataset.

use crate::models::ProvinceListItem;

/// Filter provinces whose name contains `query`, ignoring case.
///
/// An empty query keeps every item. The query is matched as typed, without
/// trimming, and the relative order of `items` is kept.
#[must_use]
pub fn filter_provinces(items: &[ProvinceListItem], query: &str) -> Vec<ProvinceListItem> {
    let normalized_query = normalize_query(query);
    items
        .iter()
        .filter(|item| name_matches_query(&item.name, &normalized_query))
        .cloned()
        .collect()
}

fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

fn name_matches_query(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(query)
}
