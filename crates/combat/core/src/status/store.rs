//! Per-combatant counter map.

use std::collections::BTreeMap;

/// Effect key → small non-negative counter.
///
/// The store is deliberately type-agnostic: whether a key is a toggle, a
/// duration or a cooldown is decided by whoever manages it (see
/// [`super::StatusKind`]). The contract every module relies on:
///
/// - no operation panics or fails,
/// - `get` on an absent key returns the caller's default,
/// - a key whose value would reach 0 is removed, never stored as 0,
/// - values never go negative.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusStore {
    entries: BTreeMap<String, u32>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value`. Writing 0 clears the key.
    pub fn set(&mut self, key: impl AsRef<str>, value: u32) {
        let key = key.as_ref();
        if value == 0 {
            self.entries.remove(key);
        } else {
            self.entries.insert(key.to_string(), value);
        }
    }

    /// Sets a toggle (value 1).
    pub fn enable(&mut self, key: impl AsRef<str>) {
        self.set(key, 1);
    }

    pub fn get(&self, key: impl AsRef<str>) -> u32 {
        self.get_or(key, 0)
    }

    pub fn get_or(&self, key: impl AsRef<str>, default: u32) -> u32 {
        self.entries.get(key.as_ref()).copied().unwrap_or(default)
    }

    pub fn has(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Adds `by` (saturating) and returns the new value.
    pub fn increment(&mut self, key: impl AsRef<str>, by: u32) -> u32 {
        let key = key.as_ref();
        let value = self.get(key).saturating_add(by);
        self.set(key, value);
        value
    }

    /// Subtracts `by`, floored at 0; reaching 0 clears the key.
    /// Returns the new value (0 if the key is now absent).
    pub fn decrement(&mut self, key: impl AsRef<str>, by: u32) -> u32 {
        let key = key.as_ref();
        let Some(current) = self.entries.get(key).copied() else {
            return 0;
        };
        let value = current.saturating_sub(by);
        self.set(key, value);
        value
    }

    pub fn clear(&mut self, key: impl AsRef<str>) {
        self.entries.remove(key.as_ref());
    }

    /// Drops every entry. Used by the end-of-fight hook.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
