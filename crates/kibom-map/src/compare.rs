//! Equality between case-insensitive maps and plain mappings.
//!
//! Two maps are equal when they hold the same set of (lookup key, value)
//! pairs. Stored casing and iteration order play no part.
//!
//! Plain mappings may hold several keys that fold to the same lookup key:
//!
//! - a `BTreeMap` is wrapped in a temporary case-insensitive view before
//!   comparing, so colliding keys collapse and the last one in key order
//!   wins, exactly as if the pairs had been inserted one by one;
//! - a `HashMap` has no stable order, so every one of its pairs must match
//!   this map and its distinct lookup keys must number [`len`]. Colliding
//!   keys with different values therefore never compare equal.
//!
//! [`len`]: CaseInsensitiveMap::len

use std::any::Any;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::fold::CaseFold;
use crate::map::CaseInsensitiveMap;

/// Outcome of [`CaseInsensitiveMap::compare_any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Same lookup keys with equal values.
    Equal,
    /// Both sides are mappings, but their contents differ.
    Unequal,
    /// The other value is not a mapping this map knows how to compare with.
    NotComparable,
}

impl Comparison {
    /// Collapses the outcome to a plain boolean; `NotComparable` is unequal.
    pub fn is_equal(self) -> bool {
        matches!(self, Self::Equal)
    }
}

impl From<bool> for Comparison {
    fn from(equal: bool) -> Self {
        if equal { Self::Equal } else { Self::Unequal }
    }
}

impl<K, V> CaseInsensitiveMap<K, V>
where
    K: CaseFold,
    V: PartialEq,
{
    fn eq_pairs<'a, Q, I>(&self, pairs: I) -> bool
    where
        Q: CaseFold<Folded = K::Folded> + ?Sized + 'a,
        V: 'a,
        I: IntoIterator<Item = (&'a Q, &'a V)>,
    {
        let view: CaseInsensitiveMap<&Q, &V> = pairs.into_iter().collect();
        self.len() == view.len()
            && self
                .folded_values()
                .all(|(folded, value)| view.get_folded(folded) == Some(&value))
    }

    fn eq_unordered_pairs<'a, Q, I>(&self, pairs: I) -> bool
    where
        Q: CaseFold<Folded = K::Folded> + ?Sized + 'a,
        V: 'a,
        I: IntoIterator<Item = (&'a Q, &'a V)>,
    {
        let mut seen = HashSet::with_capacity(self.len());
        for (key, value) in pairs {
            let folded = key.case_fold();
            if self.get_folded(&folded) != Some(value) {
                return false;
            }
            seen.insert(folded);
        }
        seen.len() == self.len()
    }
}

impl<K, V> CaseInsensitiveMap<K, V>
where
    K: CaseFold + 'static,
    V: PartialEq + 'static,
{
    /// Compares against a dynamically typed value.
    ///
    /// Recognizes another `CaseInsensitiveMap<K, V>`, a `HashMap<K, V>` and a
    /// `BTreeMap<K, V>`. Anything else yields [`Comparison::NotComparable`].
    pub fn compare_any(&self, other: &dyn Any) -> Comparison {
        let equal = if let Some(map) = other.downcast_ref::<Self>() {
            self == map
        } else if let Some(map) = other.downcast_ref::<HashMap<K, V>>() {
            self == map
        } else if let Some(map) = other.downcast_ref::<BTreeMap<K, V>>() {
            self == map
        } else {
            return Comparison::NotComparable;
        };
        Comparison::from(equal)
    }

    /// Like [`compare_any`](Self::compare_any), treating non-mappings as unequal.
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        self.compare_any(other).is_equal()
    }
}

impl<K, K2, V> PartialEq<CaseInsensitiveMap<K2, V>> for CaseInsensitiveMap<K, V>
where
    K: CaseFold,
    K2: CaseFold<Folded = K::Folded>,
    V: PartialEq,
{
    fn eq(&self, other: &CaseInsensitiveMap<K2, V>) -> bool {
        self.len() == other.len()
            && self
                .folded_values()
                .all(|(folded, value)| other.get_folded(folded) == Some(value))
    }
}

impl<K: CaseFold, V: Eq> Eq for CaseInsensitiveMap<K, V> {}

impl<K, K2, V, S> PartialEq<HashMap<K2, V, S>> for CaseInsensitiveMap<K, V>
where
    K: CaseFold,
    K2: CaseFold<Folded = K::Folded>,
    V: PartialEq,
{
    fn eq(&self, other: &HashMap<K2, V, S>) -> bool {
        self.eq_unordered_pairs(other)
    }
}

impl<K, K2, V, S> PartialEq<CaseInsensitiveMap<K2, V>> for HashMap<K, V, S>
where
    K: CaseFold,
    K2: CaseFold<Folded = K::Folded>,
    V: PartialEq,
{
    fn eq(&self, other: &CaseInsensitiveMap<K2, V>) -> bool {
        other == self
    }
}

impl<K, K2, V> PartialEq<BTreeMap<K2, V>> for CaseInsensitiveMap<K, V>
where
    K: CaseFold,
    K2: CaseFold<Folded = K::Folded>,
    V: PartialEq,
{
    fn eq(&self, other: &BTreeMap<K2, V>) -> bool {
        self.eq_pairs(other)
    }
}

impl<K, K2, V> PartialEq<CaseInsensitiveMap<K2, V>> for BTreeMap<K, V>
where
    K: CaseFold,
    K2: CaseFold<Folded = K::Folded>,
    V: PartialEq,
{
    fn eq(&self, other: &CaseInsensitiveMap<K2, V>) -> bool {
        other == self
    }
}
