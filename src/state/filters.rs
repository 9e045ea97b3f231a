//! Dashboard filter state and the visibility predicate.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use super::items::{Category, ListedItem};
use crate::net::types::ItemType;

/// Filter controls above the listing grid.
///
/// `None` in either filter slot means "All".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    pub search_term: String,
    pub type_filter: Option<ItemType>,
    pub category_filter: Option<Category>,
}

impl Filters {
    /// Whether `entry` passes every active filter clause.
    pub fn matches(&self, entry: &ListedItem) -> bool {
        self.matches_search(entry) && self.matches_type(entry) && self.matches_category(entry)
    }

    /// Case-insensitive substring match against title or location. An empty
    /// search term matches everything.
    fn matches_search(&self, entry: &ListedItem) -> bool {
        let term = self.search_term.to_lowercase();
        entry.title.to_lowercase().contains(&term)
            || entry.location.to_lowercase().contains(&term)
    }

    fn matches_type(&self, entry: &ListedItem) -> bool {
        self.type_filter.is_none_or(|kind| entry.kind == kind)
    }

    fn matches_category(&self, entry: &ListedItem) -> bool {
        self.category_filter.is_none_or(|category| entry.category == category)
    }
}

/// Entries the dashboard shows for the current filters, in listing order.
pub fn visible_entries(entries: &[ListedItem], filters: &Filters) -> Vec<ListedItem> {
    entries
        .iter()
        .filter(|entry| entry.is_listed() && filters.matches(entry))
        .cloned()
        .collect()
}
