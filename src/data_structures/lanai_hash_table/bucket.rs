// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Buckets of the Lanai Hash Table.
//!
//! A bucket is an ordered run of entries whose keys hashed to the same slot.
//! Lookups are linear scans; removal keeps the relative order of the rest.

/// A single key-value pair stored in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) key: i32,
    pub(crate) value: String,
}

/// Entries that share one hash slot, in insertion order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Bucket {
    entries: Vec<Entry>,
}

impl Bucket {
    /// Finds the value stored under `key`.
    pub(crate) fn find(&self, key: i32) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Overwrites the value under `key` in place or appends a new entry.
    ///
    /// # Returns
    ///
    /// `true` if a new entry was appended, `false` if an existing one was updated.
    pub(crate) fn upsert(&mut self, key: i32, value: String) -> bool {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => {
                entry.value = value;
                false
            }
            None => {
                self.entries.push(Entry { key, value });
                true
            }
        }
    }

    /// Appends an entry without looking for an existing key.
    ///
    /// Only used while redistributing entries that are already unique.
    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Removes the entry under `key` and returns its value.
    pub(crate) fn remove(&mut self, key: i32) -> Option<String> {
        let position = self.entries.iter().position(|entry| entry.key == key)?;
        Some(self.entries.remove(position).value)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub(crate) fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}
