//! Ordered map with case-insensitive keys.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;

use indexmap::IndexMap;
use tracing::trace;

use crate::error::{MapError, Result};
use crate::fold::CaseFold;

/// An insertion-ordered map whose text keys compare case-insensitively.
///
/// Every key is passed through [`CaseFold`] before it is hashed or compared.
/// The map stores, per lookup key, the original key of the most recent write
/// together with its value:
///
/// - writing `"VALUE"` after `"Value"` replaces both the stored key and the
///   value, but the entry keeps its position in iteration order;
/// - reads never change the stored key;
/// - [`len`](Self::len) counts lookup keys, not spellings.
///
/// Non-text keys (integers, [`ByValue`](crate::ByValue), ...) fold to
/// themselves, so the map then behaves like an ordinary ordered hash map.
///
/// ```
/// use kibom_map::CaseInsensitiveMap;
///
/// let mut columns = CaseInsensitiveMap::new();
/// columns.insert("Footprint", 1);
/// columns.insert("value", 2);
/// columns.insert("FOOTPRINT", 3);
///
/// assert_eq!(columns.get("footprint"), Some(&3));
/// assert_eq!(columns.keys().copied().collect::<Vec<_>>(), ["FOOTPRINT", "value"]);
/// ```
pub struct CaseInsensitiveMap<K: CaseFold, V> {
    entries: IndexMap<K::Folded, (K, V)>,
}

impl<K: CaseFold, V> CaseInsensitiveMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` lookup keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Builds a map where every key from `keys` maps to a clone of `value`.
    ///
    /// Keys that fold to the same lookup key collapse into one entry holding
    /// the last spelling, at the position of the first.
    pub fn from_keys<I>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Clone,
    {
        keys.into_iter().map(|key| (key, value.clone())).collect()
    }

    /// Returns the number of distinct lookup keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: CaseFold<Folded = K::Folded> + ?Sized,
    {
        self.entries.get(&key.case_fold()).map(|(_, value)| value)
    }

    /// Returns the stored key and value for `key`.
    ///
    /// The returned key carries the casing of the most recent write, which
    /// may differ from the casing of `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: CaseFold<Folded = K::Folded> + ?Sized,
    {
        self.entries
            .get(&key.case_fold())
            .map(|(stored, value)| (stored, value))
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: CaseFold<Folded = K::Folded> + ?Sized,
    {
        self.entries
            .get_mut(&key.case_fold())
            .map(|(_, value)| value)
    }

    /// Returns the value stored for `key`, or [`MapError::KeyNotFound`].
    ///
    /// # Errors
    ///
    /// Fails when no entry exists for the folded form of `key`.
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V>
    where
        Q: CaseFold<Folded = K::Folded> + fmt::Debug + ?Sized,
    {
        self.get(key).ok_or_else(|| MapError::key_not_found(key))
    }

    /// Returns the entry at `index` in iteration order.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries
            .get_index(index)
            .map(|(_, (stored, value))| (stored, value))
    }

    /// Returns true if an entry exists for the folded form of `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: CaseFold<Folded = K::Folded> + ?Sized,
    {
        self.entries.contains_key(&key.case_fold())
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// When the lookup key already exists, both the stored key and the value
    /// are replaced and the entry keeps its position. New lookup keys are
    /// appended at the end.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let folded = key.case_fold();
        match self.entries.get_full_mut(&folded) {
            Some((position, _, slot)) => {
                trace!(position, "replacing existing entry");
                let (_, previous) = std::mem::replace(slot, (key, value));
                Some(previous)
            }
            None => {
                self.entries.insert(folded, (key, value));
                None
            }
        }
    }

    /// Applies [`insert`](Self::insert) to every pair, in order.
    pub fn update<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        self.entries.reserve(pairs.size_hint().0);
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// Remaining entries keep their relative order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: CaseFold<Folded = K::Folded> + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry for `key` and returns the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: CaseFold<Folded = K::Folded> + ?Sized,
    {
        self.entries.shift_remove(&key.case_fold())
    }

    /// Removes the entry for `key`, or fails with [`MapError::KeyNotFound`].
    ///
    /// # Errors
    ///
    /// Fails when no entry exists for the folded form of `key`.
    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        Q: CaseFold<Folded = K::Folded> + fmt::Debug + ?Sized,
    {
        self.remove(key).ok_or_else(|| MapError::key_not_found(key))
    }

    /// Removes the last entry and returns its stored key and value.
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.entries.pop().map(|(_, entry)| entry)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.entries.retain(|_, (key, value)| keep(key, value));
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    ///
    /// Keys are yielded with their stored casing. Each call starts a fresh
    /// pass over the current contents; the iterator borrows the map, so the
    /// map cannot be modified while a pass is in progress.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.values(),
        }
    }

    /// Iterates over `(key, &mut value)` pairs in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.entries.values_mut(),
        }
    }

    /// Iterates over stored keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.entries.values(),
        }
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.entries.values(),
        }
    }

    /// Iterates mutably over values in insertion order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.entries.values_mut(),
        }
    }

    /// Consumes the map, yielding stored keys in insertion order.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.entries.into_values(),
        }
    }

    /// Consumes the map, yielding values in insertion order.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.entries.into_values(),
        }
    }

    pub(crate) fn get_folded(&self, folded: &K::Folded) -> Option<&V> {
        self.entries.get(folded).map(|(_, value)| value)
    }

    pub(crate) fn folded_values(&self) -> impl Iterator<Item = (&K::Folded, &V)> {
        self.entries
            .iter()
            .map(|(folded, (_, value))| (folded, value))
    }
}

impl<K: CaseFold, V> Default for CaseInsensitiveMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies are rebuilt from the current entries, so the copy folds its keys
/// afresh and shares no storage with the source.
impl<K, V> Clone for CaseInsensitiveMap<K, V>
where
    K: CaseFold + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<K: CaseFold, V> FromIterator<(K, V)> for CaseInsensitiveMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut map = Self::new();
        map.update(pairs);
        map
    }
}

impl<K: CaseFold, V, const N: usize> From<[(K, V); N]> for CaseInsensitiveMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: CaseFold, V> Extend<(K, V)> for CaseInsensitiveMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        self.update(pairs);
    }
}

impl<K, Q, V> Index<&Q> for CaseInsensitiveMap<K, V>
where
    K: CaseFold,
    Q: CaseFold<Folded = K::Folded> + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if no entry exists for `key`.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in CaseInsensitiveMap"),
        }
    }
}

impl<'a, K: CaseFold, V> IntoIterator for &'a CaseInsensitiveMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: CaseFold, V> IntoIterator for &'a mut CaseInsensitiveMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: CaseFold, V> IntoIterator for CaseInsensitiveMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_values(),
        }
    }
}

/// Renders as `{"a": 1, "B": 2}` using the stored keys.
impl<K, V> fmt::Display for CaseInsensitiveMap<K, V>
where
    K: CaseFold + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders as `CaseInsensitiveMap({"a": 1, "B": 2})` using the stored keys.
impl<K, V> fmt::Debug for CaseInsensitiveMap<K, V>
where
    K: CaseFold + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Entries<'a, K: CaseFold, V>(&'a CaseInsensitiveMap<K, V>);

        impl<K, V> fmt::Debug for Entries<'_, K, V>
        where
            K: CaseFold + fmt::Debug,
            V: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.0.iter()).finish()
            }
        }

        f.debug_tuple("CaseInsensitiveMap")
            .field(&Entries(self))
            .finish()
    }
}

// Iterators

macro_rules! entry_iterator {
    ($name:ident<$($lt:lifetime,)? K, V>, $item:ty, |$entry:pat_param| $map:expr) => {
        impl<$($lt,)? K: CaseFold, V> Iterator for $name<$($lt,)? K, V> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|$entry| $map)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$($lt,)? K: CaseFold, V> DoubleEndedIterator for $name<$($lt,)? K, V> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|$entry| $map)
            }
        }

        impl<$($lt,)? K: CaseFold, V> ExactSizeIterator for $name<$($lt,)? K, V> {
            fn len(&self) -> usize {
                self.inner.len()
            }
        }

        impl<$($lt,)? K: CaseFold, V> FusedIterator for $name<$($lt,)? K, V> {}
    };
}

/// Borrowing iterator over `(key, value)` pairs. See [`CaseInsensitiveMap::iter`].
pub struct Iter<'a, K: CaseFold, V> {
    inner: indexmap::map::Values<'a, K::Folded, (K, V)>,
}

impl<K: CaseFold, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

entry_iterator!(Iter<'a, K, V>, (&'a K, &'a V), |(key, value)| (key, value));

/// Mutable iterator over `(key, value)` pairs. See [`CaseInsensitiveMap::iter_mut`].
pub struct IterMut<'a, K: CaseFold, V> {
    inner: indexmap::map::ValuesMut<'a, K::Folded, (K, V)>,
}

entry_iterator!(IterMut<'a, K, V>, (&'a K, &'a mut V), |(key, value)| (&*key, value));

/// Iterator over stored keys. See [`CaseInsensitiveMap::keys`].
pub struct Keys<'a, K: CaseFold, V> {
    inner: indexmap::map::Values<'a, K::Folded, (K, V)>,
}

impl<K: CaseFold, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

entry_iterator!(Keys<'a, K, V>, &'a K, |(key, _)| key);

/// Iterator over values. See [`CaseInsensitiveMap::values`].
pub struct Values<'a, K: CaseFold, V> {
    inner: indexmap::map::Values<'a, K::Folded, (K, V)>,
}

impl<K: CaseFold, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

entry_iterator!(Values<'a, K, V>, &'a V, |(_, value)| value);

/// Mutable iterator over values. See [`CaseInsensitiveMap::values_mut`].
pub struct ValuesMut<'a, K: CaseFold, V> {
    inner: indexmap::map::ValuesMut<'a, K::Folded, (K, V)>,
}

entry_iterator!(ValuesMut<'a, K, V>, &'a mut V, |(_, value)| value);

/// Owning iterator over `(key, value)` pairs.
pub struct IntoIter<K: CaseFold, V> {
    inner: indexmap::map::IntoValues<K::Folded, (K, V)>,
}

entry_iterator!(IntoIter<K, V>, (K, V), |entry| entry);

/// Owning iterator over stored keys. See [`CaseInsensitiveMap::into_keys`].
pub struct IntoKeys<K: CaseFold, V> {
    inner: indexmap::map::IntoValues<K::Folded, (K, V)>,
}

entry_iterator!(IntoKeys<K, V>, K, |(key, _)| key);

/// Owning iterator over values. See [`CaseInsensitiveMap::into_values`].
pub struct IntoValues<K: CaseFold, V> {
    inner: indexmap::map::IntoValues<K::Folded, (K, V)>,
}

entry_iterator!(IntoValues<K, V>, V, |(_, value)| value);
