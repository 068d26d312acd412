//! Tests for the built-in column registry.

use kibom_columns::ColumnRegistry;
use kibom_columns::columns::{
    COL_DESCRIPTION, COL_GRP_BUILD_QUANTITY, COL_GRP_QUANTITY, DEFAULT_COLUMNS,
    GENERATED_COLUMNS,
};
use proptest::prelude::*;

#[test]
fn generated_set_contains_group_columns() {
    let generated = ColumnRegistry::global().generated();
    assert_eq!(generated.len(), 2);
    assert!(generated.contains_key("quantity per pcb"));
    assert!(generated.contains_key(COL_GRP_QUANTITY));
    assert!(generated.contains_key(COL_GRP_BUILD_QUANTITY));
}

#[test]
fn default_set_keeps_declared_order_and_spelling() {
    let registry = ColumnRegistry::global();
    let keys: Vec<&str> = registry.defaults().keys().copied().collect();
    assert_eq!(keys, DEFAULT_COLUMNS);
    assert_eq!(registry.default_columns(), DEFAULT_COLUMNS.as_slice());
    assert_eq!(registry.default_columns().first(), Some(&COL_DESCRIPTION));
}

#[test]
fn defaults_are_a_superset_of_generated() {
    let registry = ColumnRegistry::global();
    assert!(GENERATED_COLUMNS.iter().all(|column| registry.is_default(column)));
    assert!(registry.defaults().len() > registry.generated().len());
}

#[test]
fn unknown_columns_are_user_settable() {
    let registry = ColumnRegistry::global();
    assert!(!registry.is_default("Manufacturer"));
    assert!(registry.is_user_settable("Manufacturer"));
    assert_eq!(registry.canonical("Manufacturer"), None);
}

fn any_default_column() -> impl Strategy<Value = &'static str> {
    prop::sample::select(DEFAULT_COLUMNS.to_vec())
}

fn recase(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_any_casing_resolves_to_canonical(
        column in any_default_column(),
        mask in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        let registry = ColumnRegistry::global();
        let spelled = recase(column, &mask);

        prop_assert!(registry.is_default(&spelled));
        prop_assert_eq!(registry.canonical(&spelled), Some(column));
        prop_assert_eq!(
            registry.is_generated(&spelled),
            GENERATED_COLUMNS.contains(&column)
        );
    }
}
