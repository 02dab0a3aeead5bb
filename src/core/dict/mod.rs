//! String-keyed dictionaries whose values may be individually absent
//!
//! A [`Dict`] keeps its keys in insertion order and stores each value as an
//! `Option<T>` slot. `None` marks an entry whose key is known but whose value
//! is absent; transforms and folds skip such entries.

mod fold;
mod transform;

pub use fold::{fold_dict, try_fold_dict};
pub use transform::{map_values, transform_dict, try_transform_dict};

use crate::error::{DictError, ErrorCode};
use indexmap::IndexMap;
use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Insertion-ordered map from `String` keys to optional values
#[derive(Debug, Clone)]
pub struct Dict<T> {
    entries: IndexMap<String, Option<T>>,
}

impl<T> Dict<T> {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create an empty dictionary with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Build a dictionary in which every value is present
    pub fn from_present<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        entries
            .into_iter()
            .map(|(key, value)| (key, Some(value)))
            .collect()
    }

    /// Build a dictionary, rejecting any key that appears more than once
    pub fn try_from_entries<K, I>(entries: I) -> crate::error::Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Option<T>)>,
    {
        let entries = entries.into_iter();
        let mut dict = Self::with_capacity(entries.size_hint().0);

        for (key, slot) in entries {
            let key = key.into();
            if dict.entries.contains_key(&key) {
                return Err(DictError::validation_with_code(
                    ErrorCode::VALIDATION_DUPLICATE_KEY,
                    format!("key '{}' appears more than once", key),
                    Some(key),
                ));
            }
            dict.entries.insert(key, slot);
        }

        Ok(dict)
    }

    /// Store a present value, returning the previous slot if the key existed.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<Option<T>> {
        self.set(key, Some(value))
    }

    /// Store an absent slot, returning the previous slot if the key existed
    pub fn insert_absent(&mut self, key: impl Into<String>) -> Option<Option<T>> {
        self.set(key, None)
    }

    /// Store any slot, returning the previous slot if the key existed
    pub fn set(&mut self, key: impl Into<String>, slot: Option<T>) -> Option<Option<T>> {
        self.entries.insert(key.into(), slot)
    }

    /// Remove a key, keeping the relative order of the remaining keys
    pub fn remove(&mut self, key: &str) -> Option<Option<T>> {
        self.entries.shift_remove(key)
    }

    /// The present value stored under `key`
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    /// The slot stored under `key`: `Some(None)` for an absent entry,
    /// `None` for a key the dictionary does not hold
    pub fn slot(&self, key: &str) -> Option<Option<&T>> {
        self.entries.get(key).map(Option::as_ref)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys, present or absent
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys holding a present value
    pub fn present_len(&self) -> usize {
        self.entries.values().filter(|slot| slot.is_some()).count()
    }

    /// Zero-based enumeration position of `key`
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// All entries in enumeration order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Present entries in enumeration order
    pub fn present(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries
            .iter()
            .filter_map(|(key, slot)| slot.as_ref().map(|value| (key.as_str(), value)))
    }

    /// See [`transform_dict`]
    pub fn transform<U, F>(&self, f: F) -> Dict<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        transform_dict(self, f)
    }

    /// See [`try_transform_dict`]
    pub fn try_transform<U, E, F>(&self, f: F) -> Result<Dict<U>, E>
    where
        F: FnMut(&T, usize) -> Result<U, E>,
    {
        try_transform_dict(self, f)
    }

    /// See [`map_values`]
    pub fn map_values<U, F>(&self, f: F) -> Dict<U>
    where
        F: FnMut(&T) -> U,
    {
        map_values(self, f)
    }

    /// See [`fold_dict`]. Takes the initial accumulator first, like
    /// [`Iterator::fold`].
    pub fn fold<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, &T, &str) -> A,
    {
        fold_dict(self, f, initial)
    }

    /// See [`try_fold_dict`]
    pub fn try_fold<A, E, F>(&self, initial: A, f: F) -> Result<A, E>
    where
        F: FnMut(A, &T, &str) -> Result<A, E>,
    {
        try_fold_dict(self, f, initial)
    }
}

impl<T: DeserializeOwned> Dict<T> {
    /// Parse a JSON object; `null` values become absent slots
    pub fn from_json_str(input: &str) -> crate::error::Result<Self> {
        let entries: Entries<T> = serde_json::from_str(input)?;
        match entries.duplicate {
            Some(key) => Err(DictError::parse_with_code(
                ErrorCode::PARSE_DUPLICATE_KEY,
                format!("Duplicate key '{}'", key),
            )),
            None => Ok(entries.dict),
        }
    }
}

impl<T: Serialize> Dict<T> {
    /// Render as a JSON object; absent slots are written as `null`
    pub fn to_json_string(&self) -> crate::error::Result<String> {
        serde_json::to_string(self).map_err(|e| {
            DictError::serialize_with_code(
                ErrorCode::SERIALIZE_VALUE_FAILED,
                "Failed to serialize dictionary",
            )
            .with_source(e)
        })
    }

    pub fn to_json_string_pretty(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DictError::serialize_with_code(
                ErrorCode::SERIALIZE_VALUE_FAILED,
                "Failed to serialize dictionary",
            )
            .with_source(e)
        })
    }
}

impl<T> Default for Dict<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two dictionaries are equal when they hold equal slots in the same order
impl<T: PartialEq> PartialEq for Dict<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Dict<T> {}

/// A repeated key overwrites the earlier slot but keeps its first position
impl<K: Into<String>, T> FromIterator<(K, Option<T>)> for Dict<T> {
    fn from_iter<I: IntoIterator<Item = (K, Option<T>)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<String>, T> Extend<(K, Option<T>)> for Dict<T> {
    fn extend<I: IntoIterator<Item = (K, Option<T>)>>(&mut self, iter: I) {
        for (key, slot) in iter {
            self.set(key, slot);
        }
    }
}

impl<T> IntoIterator for Dict<T> {
    type Item = (String, Option<T>);
    type IntoIter = indexmap::map::IntoIter<String, Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Dict<T> {
    type Item = (&'a str, Option<&'a T>);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over every entry of a [`Dict`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: indexmap::map::Iter<'a, String, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, Option<&'a T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, slot)| (key.as_str(), slot.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T: Serialize> Serialize for Dict<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, slot) in &self.entries {
            map.serialize_entry(key, slot)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Dict<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Entries::deserialize(deserializer)?;
        match entries.duplicate {
            Some(key) => Err(de::Error::custom(format_args!("duplicate key `{}`", key))),
            None => Ok(entries.dict),
        }
    }
}

/// Every entry of a serialized map, plus the first key that repeated
struct Entries<T> {
    dict: Dict<T>,
    duplicate: Option<String>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

struct EntriesVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
    type Value = Entries<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut dict = Dict::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        let mut duplicate = None;

        // the whole map is consumed so the input is still fully validated
        while let Some((key, slot)) = access.next_entry::<String, Option<T>>()? {
            if dict.contains_key(&key) {
                duplicate.get_or_insert(key);
                continue;
            }
            dict.entries.insert(key, slot);
        }

        Ok(Entries { dict, duplicate })
    }
}
