//! Ordered mapping of daily keys to session snapshots

use super::Snapshot;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Every day ever played, in the order the days were first saved
///
/// Serializes as a single JSON object whose key order is the insertion order.
/// Overwriting a day keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<(String, Snapshot)>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot stored for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Snapshot> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, snapshot)| snapshot)
    }

    /// Set the snapshot for `key`, appending new keys at the end
    pub fn insert(&mut self, key: impl Into<String>, snapshot: Snapshot) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = snapshot;
        } else {
            self.entries.push((key, snapshot));
        }
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Snapshot)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, Snapshot)> for History {
    fn from_iter<I: IntoIterator<Item = (K, Snapshot)>>(iter: I) -> Self {
        let mut history = Self::new();
        for (key, snapshot) in iter {
            history.insert(key, snapshot);
        }
        history
    }
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, snapshot) in &self.entries {
            map.serialize_entry(key, snapshot)?;
        }
        map.end()
    }
}

struct HistoryVisitor;

impl<'de> Visitor<'de> for HistoryVisitor {
    type Value = History;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of daily keys to session snapshots")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut history = History {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((key, snapshot)) = access.next_entry::<String, Snapshot>()? {
            history.insert(key, snapshot);
        }
        Ok(history)
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HistoryVisitor)
    }
}
