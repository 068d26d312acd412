//! Serde support.
//!
//! A map serializes as a plain map of stored keys in iteration order.
//! Deserializing applies insert semantics per entry, so keys that differ
//! only in case collapse into one entry.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::fold::CaseFold;
use crate::map::CaseInsensitiveMap;

impl<K, V> Serialize for CaseInsensitiveMap<K, V>
where
    K: CaseFold + Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self)
    }
}

impl<'de, K, V> Deserialize<'de> for CaseInsensitiveMap<K, V>
where
    K: CaseFold + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MapVisitor {
            marker: PhantomData,
        })
    }
}

struct MapVisitor<K, V> {
    marker: PhantomData<fn() -> (K, V)>,
}

impl<'de, K, V> Visitor<'de> for MapVisitor<K, V>
where
    K: CaseFold + Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = CaseInsensitiveMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // Cap the preallocation; the hint comes from untrusted input.
        let capacity = access.size_hint().unwrap_or(0).min(1024);
        let mut map = CaseInsensitiveMap::with_capacity(capacity);
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}
