//! `Map`: an insertion-ordered sequence of named fields with two lazy caches.
//!
//! `Map` stands for both structs and dictionaries. The fields are kept in a
//! `Vec` so iteration and rendering follow insertion order, and two derived
//! caches are built on first use:
//!
//! - **index**: field name → position, backing O(1) amortized [`Map::get`]
//! - **order**: positions stably sorted by field name, backing [`Map::less`]
//!   and [`Map::sorted_iter`]
//!
//! Both caches sit in [`OnceCell`]s, so lookups and comparisons work through
//! `&self`. Every operation that can change the key set or the positions
//! ([`Map::set`] on a new key, [`Map::delete`], [`Map::items_mut`]) resets
//! both cells before returning. Overwriting the value of an existing key
//! leaves them alone: names and positions are unchanged.
//!
//! `OnceCell` makes `Map` `!Sync`; sharing one across threads requires
//! wrapping it in external synchronization.
//!
//! # Duplicate names
//!
//! Every constructor follows [`Map::set`] semantics, so a map never holds two
//! fields with the same name unless the caller introduces them through
//! [`Map::items_mut`]. In that case [`Map::get`] resolves to the last one,
//! and the ordering sees all of them in their original relative order.

use std::cell::OnceCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::compare;
use crate::value::Value;

/// A single named entry of a [`Map`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// An insertion-ordered map of [`Field`]s with unique names.
#[derive(Clone, Default)]
pub struct Map {
    items: Vec<Field>,
    index: OnceCell<HashMap<String, usize>>,
    order: OnceCell<Vec<usize>>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from fields with the semantics of calling [`Map::set`] on
    /// each one in turn.
    ///
    /// A repeated name keeps its first position and takes the later value.
    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut map = Self::new();
        map.merge(fields.into_iter().map(|field| (field.name, field.value)));
        map
    }

    /// Fields in insertion order.
    pub fn items(&self) -> &[Field] {
        &self.items
    }

    /// Direct access to the underlying fields.
    ///
    /// Both caches are dropped before the borrow is handed out, so any edit
    /// made through it is picked up by the next lookup or comparison.
    pub fn items_mut(&mut self) -> &mut Vec<Field> {
        self.invalidate();
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Field> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a field by name, building the index if it is absent.
    pub fn get(&self, key: &str) -> Option<&Field> {
        let position = self.position(key)?;
        Some(&self.items[position])
    }

    /// Mutable access to the value stored under `key`.
    ///
    /// Only the value is exposed; renaming a field in place would break the
    /// index. Writing through the reference needs no invalidation.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        let position = self.position(key)?;
        Some(&mut self.items[position].value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert `value` under `key`, or overwrite the value already there.
    ///
    /// Overwriting keeps the field's position and both caches. Appending a new
    /// field invalidates them.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if let Some(slot) = self.get_mut(&key) {
            *slot = value;
            return;
        }
        self.items.push(Field { name: key, value });
        self.invalidate();
    }

    /// Remove every field named `key`, keeping survivors in their relative
    /// order. Removing an absent key is a no-op apart from the invalidation.
    pub fn delete(&mut self, key: &str) {
        self.items.retain(|field| field.name != key);
        self.invalidate();
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.items.iter()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|field| field.name.as_str())
    }

    /// Fields in ascending name order, ties in insertion order.
    pub fn sorted_iter(&self) -> impl Iterator<Item = &Field> {
        self.order().iter().map(move |&position| &self.items[position])
    }

    /// Lexicographic comparison over the name-sorted fields: names first, then
    /// values. A strict prefix is less than the longer map.
    pub fn less(&self, other: &Map) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Three-way form of [`Map::less`].
    pub fn compare(&self, other: &Map) -> Ordering {
        compare::compare_maps(self, other)
    }

    /// Batch form of [`Map::set`]. The name lookup is built once for the whole
    /// batch, and the caches are dropped at most once at the end.
    fn merge(&mut self, entries: impl IntoIterator<Item = (String, Value)>) {
        let mut positions = match self.index.take() {
            Some(index) => index,
            None => self
                .items
                .iter()
                .enumerate()
                .map(|(position, field)| (field.name.clone(), position))
                .collect::<HashMap<_, _>>(),
        };

        let before = self.items.len();
        for (name, value) in entries {
            match positions.get(&name) {
                Some(&position) => self.items[position].value = value,
                None => {
                    positions.insert(name.clone(), self.items.len());
                    self.items.push(Field { name, value });
                }
            }
        }

        if self.items.len() == before {
            // Only values changed, so the lookup is still the index.
            let _ = self.index.set(positions);
        } else {
            self.invalidate();
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.index().get(key).copied()
    }

    fn index(&self) -> &HashMap<String, usize> {
        self.index.get_or_init(|| {
            trace!(fields = self.items.len(), "building map index");
            // Later duplicates overwrite earlier ones.
            self.items
                .iter()
                .enumerate()
                .map(|(position, field)| (field.name.clone(), position))
                .collect()
        })
    }

    pub(crate) fn order(&self) -> &[usize] {
        let order = self.order.get_or_init(|| {
            trace!(fields = self.items.len(), "building map sort order");
            let mut order: Vec<usize> = (0..self.items.len()).collect();
            // `sort_by` is stable, which keeps duplicate names in insertion order.
            order.sort_by(|&a, &b| self.items[a].name.cmp(&self.items[b].name));
            order
        });
        debug_assert_eq!(order.len(), self.items.len(), "stale map order");
        order
    }

    fn invalidate(&mut self) {
        let had_index = self.index.take().is_some();
        let had_order = self.order.take().is_some();
        if had_index || had_order {
            trace!(fields = self.items.len(), "invalidated map caches");
        }
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.items.iter().map(|field| (&field.name, &field.value)))
            .finish()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for Map {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>> Extend<(K, Value)> for Map {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        self.merge(iter.into_iter().map(|(key, value)| (key.into(), value)));
    }
}

impl IntoIterator for Map {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
