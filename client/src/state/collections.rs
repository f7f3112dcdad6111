//! Keyed collections backing the personalization store.
//!
//! DESIGN
//! ======
//! Both collections are ordered newest-first and unique by a string key that
//! a plain function pointer extracts from each item. Liked videos and
//! subscribed channels share `ToggleSet`; search and watch history share
//! `RecentList` with different insert policies.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

use std::collections::HashSet;
use std::fmt;

/// Extracts the natural key of an item.
pub type KeyFn<T> = fn(&T) -> &str;

/// Keep the first occurrence of every key, preserving order.
fn dedup_by_key<T>(items: Vec<T>, key: KeyFn<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item).to_owned()))
        .collect()
}

// =============================================================
// ToggleSet
// =============================================================

/// Ordered set with toggle membership, unique by key.
#[derive(Clone)]
pub struct ToggleSet<T> {
    items: Vec<T>,
    key: KeyFn<T>,
}

impl<T> ToggleSet<T> {
    #[must_use]
    pub fn new(key: KeyFn<T>) -> Self {
        Self { items: Vec::new(), key }
    }

    /// Rebuild from stored items, dropping later duplicates.
    #[must_use]
    pub fn from_items(items: Vec<T>, key: KeyFn<T>) -> Self {
        Self { items: dedup_by_key(items, key), key }
    }

    /// Remove the entry with `item`'s key if present, otherwise prepend `item`.
    ///
    /// Returns whether the key is a member afterwards.
    pub fn toggle(&mut self, item: T) -> bool {
        let key = self.key;
        if let Some(index) = self.position(key(&item)) {
            self.items.remove(index);
            false
        } else {
            self.items.insert(0, item);
            true
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| (self.key)(item) == key)
    }
}

impl<T: PartialEq> PartialEq for ToggleSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ToggleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

// =============================================================
// RecentList
// =============================================================

/// Bounded newest-first list, unique by key.
///
/// Once `len() == capacity` every insert evicts the oldest entry.
#[derive(Clone)]
pub struct RecentList<T> {
    items: Vec<T>,
    capacity: usize,
    key: KeyFn<T>,
}

impl<T> RecentList<T> {
    #[must_use]
    pub fn new(capacity: usize, key: KeyFn<T>) -> Self {
        Self { items: Vec::new(), capacity, key }
    }

    /// Rebuild from stored items: drop later duplicates, then truncate.
    #[must_use]
    pub fn from_items(items: Vec<T>, capacity: usize, key: KeyFn<T>) -> Self {
        let mut items = dedup_by_key(items, key);
        items.truncate(capacity);
        Self { items, capacity, key }
    }

    /// Prepend `item` unless its key is already present. Existing entries
    /// keep their position. Returns whether the list changed.
    pub fn insert_if_absent(&mut self, item: T) -> bool {
        if self.contains((self.key)(&item)) {
            return false;
        }
        self.push_front(item);
        true
    }

    /// Move `item` to the front, replacing any entry with the same key.
    pub fn promote(&mut self, item: T) {
        let key = self.key;
        self.items.retain(|existing| key(existing) != key(&item));
        self.push_front(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|item| (self.key)(item) == key)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push_front(&mut self, item: T) {
        self.items.insert(0, item);
        self.items.truncate(self.capacity);
    }
}

impl<T: PartialEq> PartialEq for RecentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for RecentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecentList")
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}
