//! Property-based tests for `CaseInsensitiveMap`.

use std::collections::HashSet;

use kibom_map::CaseInsensitiveMap;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{1,12}"
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), any::<i32>()), 0..40)
}

fn swap_case(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

// =============================================================================
// Lookups are invariant under case changes
// =============================================================================

proptest! {
    #[test]
    fn prop_get_ignores_case(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in any::<i32>()
    ) {
        let mut map: CaseInsensitiveMap<String, i32> = entries.into_iter().collect();
        map.insert(key.clone(), value);

        prop_assert_eq!(map.get(key.as_str()), Some(&value));
        prop_assert_eq!(map.get(swap_case(&key).as_str()), Some(&value));
        prop_assert_eq!(map.get(key.to_uppercase().as_str()), Some(&value));
    }
}

// =============================================================================
// Length equals the number of distinct folded keys
// =============================================================================

proptest! {
    #[test]
    fn prop_len_counts_folded_keys(entries in arbitrary_entries()) {
        let distinct: HashSet<String> = entries.iter().map(|(k, _)| k.to_lowercase()).collect();
        let map: CaseInsensitiveMap<String, i32> = entries.into_iter().collect();

        prop_assert_eq!(map.len(), distinct.len());
        prop_assert_eq!(map.iter().count(), distinct.len());
    }
}

// =============================================================================
// Iteration order is first insertion of each folded key, last write wins
// =============================================================================

proptest! {
    #[test]
    fn prop_order_is_first_insertion_with_last_spelling(entries in arbitrary_entries()) {
        let mut expected: Vec<(String, i32)> = Vec::new();
        for (key, value) in &entries {
            match expected.iter_mut().find(|(k, _)| k.to_lowercase() == key.to_lowercase()) {
                Some(slot) => *slot = (key.clone(), *value),
                None => expected.push((key.clone(), *value)),
            }
        }

        let map: CaseInsensitiveMap<String, i32> = entries.into_iter().collect();
        let actual: Vec<(String, i32)> = map.into_iter().collect();

        prop_assert_eq!(actual, expected);
    }
}

// =============================================================================
// Copies are equal and independent
// =============================================================================

proptest! {
    #[test]
    fn prop_copy_is_equal_and_independent(
        entries in arbitrary_entries(),
        key in arbitrary_key()
    ) {
        let original: CaseInsensitiveMap<String, i32> = entries.into_iter().collect();
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        let had_key = original.contains_key(key.as_str());
        copy.remove(swap_case(&key).as_str());

        prop_assert_eq!(original.contains_key(key.as_str()), had_key);
        prop_assert!(!copy.contains_key(key.as_str()));
        prop_assert_eq!(copy == original, !had_key);
    }
}

// =============================================================================
// Equality ignores casing but not values
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_ignores_casing(entries in arbitrary_entries()) {
        let map: CaseInsensitiveMap<String, i32> = entries.iter().cloned().collect();
        let swapped: CaseInsensitiveMap<String, i32> = entries
            .into_iter()
            .map(|(key, value)| (swap_case(&key), value))
            .collect();

        prop_assert_eq!(&map, &swapped);
    }

    #[test]
    fn prop_equality_respects_values(
        entries in arbitrary_entries(),
        key in arbitrary_key()
    ) {
        let map: CaseInsensitiveMap<String, i32> = entries.into_iter().collect();
        let mut changed = map.clone();
        let bumped = map.get(key.as_str()).map_or(0, |value| value.wrapping_add(1));
        changed.insert(key.to_uppercase(), bumped);

        prop_assert_ne!(&changed, &map);
    }
}

// =============================================================================
// Remove then get
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_then_get_is_none(
        entries in arbitrary_entries(),
        key in arbitrary_key()
    ) {
        let mut map: CaseInsensitiveMap<String, i32> = entries.into_iter().collect();
        let before = map.len();
        let removed = map.remove(swap_case(&key).as_str());

        prop_assert_eq!(map.get(key.as_str()), None);
        prop_assert_eq!(map.len(), before - usize::from(removed.is_some()));
    }
}
