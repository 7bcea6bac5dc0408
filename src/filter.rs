//! Filter set
//!
//! The accumulated predicates of a query before it is executed: caller
//! supplied filters plus the reserved control keys for sorting, paging and
//! random sampling. Keys are unique (last write wins) and the encoded form
//! is sorted by key, so two sets holding the same pairs always encode to
//! the same query string.

use std::collections::BTreeMap;
use url::form_urlencoded;

/// Reserved key holding the sort column
pub const ORDER_BY: &str = "orderBy";

/// Reserved key holding the page number
pub const PAGE: &str = "page";

/// Reserved key holding the page size
pub const PAGE_SIZE: &str = "pageSize";

/// Reserved key enabling random sampling
pub const RANDOM: &str = "random";

/// Mapping from filter key to filter value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: BTreeMap<String, String>,
}

impl FilterSet {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the value for `key`
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Value stored for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Remove `key`, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy of this set with `overrides` written on top
    ///
    /// Used for the reserved paging keys, which always replace a caller
    /// predicate of the same name.
    pub fn with_overrides<K, V>(&self, overrides: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut copy = self.clone();
        for (key, value) in overrides {
            copy.set(key, value);
        }
        copy
    }

    /// Encode as an `application/x-www-form-urlencoded` query string
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.entries.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for FilterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.set(key, value);
        }
        set
    }
}
