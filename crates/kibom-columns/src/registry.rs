//! Process-wide column registry.
//!
//! The registry is built once, on first access, from the constants in
//! [`columns`](crate::columns) and never changes afterwards. Both sets are
//! [`CaseInsensitiveMap`]s with unit values, so membership checks ignore the
//! casing of user-supplied column names.

use std::sync::OnceLock;

use kibom_map::CaseInsensitiveMap;
use tracing::debug;

use crate::columns::{DEFAULT_COLUMNS, GENERATED_COLUMNS};

/// Case-insensitive set of static column names.
pub type ColumnSet = CaseInsensitiveMap<&'static str, ()>;

/// Lookup tables for the built-in BOM columns.
#[derive(Debug)]
pub struct ColumnRegistry {
    default_columns: &'static [&'static str],
    generated: ColumnSet,
    defaults: ColumnSet,
}

static GLOBAL_REGISTRY: OnceLock<ColumnRegistry> = OnceLock::new();

impl ColumnRegistry {
    /// Builds a registry from the built-in column constants.
    pub fn new() -> Self {
        Self {
            default_columns: &DEFAULT_COLUMNS,
            generated: CaseInsensitiveMap::from_keys(GENERATED_COLUMNS, ()),
            defaults: CaseInsensitiveMap::from_keys(DEFAULT_COLUMNS, ()),
        }
    }

    /// Returns the shared registry, building it on first access.
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(|| {
            let registry = Self::new();
            debug!(
                generated = registry.generated.len(),
                defaults = registry.defaults.len(),
                "built column registry"
            );
            registry
        })
    }

    /// Default column names in output order.
    pub fn default_columns(&self) -> &'static [&'static str] {
        self.default_columns
    }

    /// Columns computed by the grouping stage.
    pub fn generated(&self) -> &ColumnSet {
        &self.generated
    }

    /// All default columns, generated ones included.
    pub fn defaults(&self) -> &ColumnSet {
        &self.defaults
    }

    pub fn is_generated(&self, name: &str) -> bool {
        self.generated.contains_key(name)
    }

    pub fn is_default(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    /// Returns true unless the column is computed by the grouping stage.
    pub fn is_user_settable(&self, name: &str) -> bool {
        !self.is_generated(name)
    }

    /// Returns the canonical spelling of a default column.
    ///
    /// ```
    /// use kibom_columns::ColumnRegistry;
    ///
    /// let registry = ColumnRegistry::global();
    /// assert_eq!(registry.canonical("quantity per pcb"), Some("Quantity Per PCB"));
    /// assert_eq!(registry.canonical("MPN"), None);
    /// ```
    pub fn canonical(&self, name: &str) -> Option<&'static str> {
        self.defaults.get_key_value(name).map(|(column, _)| *column)
    }
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{COL_DATASHEET, COL_GRP_BUILD_QUANTITY, COL_GRP_QUANTITY, COL_VALUE};

    #[test]
    fn generated_columns_are_defaults() {
        let registry = ColumnRegistry::new();
        for column in registry.generated().keys() {
            assert!(registry.is_default(column), "{column} missing from defaults");
        }
    }

    #[test]
    fn membership_ignores_case() {
        let registry = ColumnRegistry::new();
        assert!(registry.is_generated("BUILD QUANTITY"));
        assert!(registry.is_default("datasheet"));
        assert!(!registry.is_generated(COL_VALUE));
        assert!(registry.is_user_settable("value"));
        assert!(!registry.is_user_settable("quantity per pcb"));
    }

    #[test]
    fn canonical_returns_constant_spelling() {
        let registry = ColumnRegistry::new();
        assert_eq!(registry.canonical("DATASHEET"), Some(COL_DATASHEET));
        assert_eq!(registry.canonical("build quantity"), Some(COL_GRP_BUILD_QUANTITY));
        assert_eq!(registry.canonical("Manufacturer"), None);
    }

    #[test]
    fn global_registry_is_shared() {
        let first = ColumnRegistry::global();
        let second = ColumnRegistry::global();
        assert!(std::ptr::eq(first, second));
        assert!(first.is_generated(COL_GRP_QUANTITY));
    }
}
