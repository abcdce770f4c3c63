//! Media page state: fetched items, their grouping by state, and the search term.
//!
//! DESIGN
//! ======
//! Grouping happens once per fetch; filtering by title happens on every render
//! of the cards so typing in the search box never re-requests data.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use std::collections::HashMap;

use crate::net::types::{ItemState, MediaItem};

/// Items bucketed by their raw state label, preserving response order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedItems {
    groups: HashMap<String, Vec<MediaItem>>,
}

impl GroupedItems {
    /// Items carrying `label`, empty when no item has that state.
    pub fn get(&self, label: &str) -> &[MediaItem] {
        self.groups.get(label).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of distinct labels seen, known or not.
    pub fn label_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Bucket `items` by their `state` label.
pub fn group_by_state(items: &[MediaItem]) -> GroupedItems {
    let mut groups: HashMap<String, Vec<MediaItem>> = HashMap::new();
    for item in items {
        groups.entry(item.state.clone()).or_default().push(item.clone());
    }
    GroupedItems { groups }
}

/// Whether `item` has a non-empty title containing `needle`.
///
/// `needle` must already be lowercased.
fn title_matches(item: &MediaItem, needle: &str) -> bool {
    item.display_title()
        .is_some_and(|title| title.to_lowercase().contains(needle))
}

/// Keep items whose title contains `term`, ignoring case.
///
/// Items without a title never match, even for an empty term.
pub fn filter_by_title(items: &[MediaItem], term: &str) -> Vec<MediaItem> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| title_matches(item, &needle))
        .cloned()
        .collect()
}

/// One filtered entry per known state, in display order.
pub fn visible_groups(grouped: &GroupedItems, term: &str) -> Vec<(ItemState, Vec<MediaItem>)> {
    ItemState::ALL
        .into_iter()
        .map(|state| (state, filter_by_title(grouped.get(state.label()), term)))
        .collect()
}

/// Media page state shared through context.
///
/// Starts out loading: the first fetch is issued on mount, so nothing is
/// rendered as "empty" before it resolves.
#[derive(Clone, Debug)]
pub struct MediaState {
    pub items: Vec<MediaItem>,
    pub grouped: GroupedItems,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    fetch_generation: u64,
}

impl Default for MediaState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            grouped: GroupedItems::default(),
            loading: true,
            error: None,
            search_term: String::new(),
            fetch_generation: 0,
        }
    }
}

impl MediaState {
    /// Mark a fetch as in flight and clear any previous failure.
    ///
    /// Returns the generation the caller must present when applying the result.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation = self.fetch_generation.wrapping_add(1);
        self.loading = true;
        self.error = None;
        self.fetch_generation
    }

    /// Replace the item list and regroup it.
    pub fn set_items(&mut self, items: Vec<MediaItem>) {
        self.grouped = group_by_state(&items);
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed fetch. Items from an earlier fetch are dropped.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.items.clear();
        self.grouped = GroupedItems::default();
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Apply a fetch result unless a newer fetch has started since.
    pub fn apply_items(&mut self, generation: u64, items: Vec<MediaItem>) -> bool {
        if generation != self.fetch_generation {
            return false;
        }
        self.set_items(items);
        true
    }

    /// Apply a fetch failure unless a newer fetch has started since.
    pub fn apply_error(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if generation != self.fetch_generation {
            return false;
        }
        self.set_error(message);
        true
    }

    pub fn cards(&self) -> Vec<(ItemState, Vec<MediaItem>)> {
        visible_groups(&self.grouped, &self.search_term)
    }
}
