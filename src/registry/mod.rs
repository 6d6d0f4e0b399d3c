//! Entity registries
//!
//! Each registry is a keyed map that also remembers insertion order, so
//! traversal runs newest-first. Winner selection breaks ties on that order.

use std::borrow::Borrow;
use std::hash::Hash;

use ahash::AHashMap;

use crate::entity::{Building, BuildingKey, Faction, Unit};

pub type FactionRegistry = Registry<String, Faction>;
pub type UnitRegistry = Registry<String, Unit>;
pub type BuildingRegistry = Registry<BuildingKey, Building>;

/// Keyed collection with newest-first iteration
#[derive(Debug, Clone)]
pub struct Registry<K, V> {
    entries: AHashMap<K, V>,
    /// Oldest first; iteration walks it backwards
    order: Vec<K>,
}

impl<K, V> Default for Registry<K, V> {
    fn default() -> Self {
        Self {
            entries: AHashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Registry<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Insert at the front. Re-inserting an existing key replaces the value,
    /// moves it to the front and returns the old value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.entries.insert(key.clone(), value);
        if previous.is_some() {
            self.order.retain(|k| *k != key);
        }
        self.order.push(key);
        previous
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.entries.remove(key)?;
        self.order.retain(|k| k.borrow() != key);
        Some(removed)
    }

    /// Entries, most recently inserted first
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.order
            .iter()
            .rev()
            .filter_map(|key| self.entries.get_key_value(key))
    }

    /// Values, most recently inserted first
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.order.iter().rev()
    }
}
