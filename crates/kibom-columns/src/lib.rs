//! Built-in BOM column names.
//!
//! This crate provides:
//!
//! - [`columns`]: the canonical column name constants and their default order
//! - [`ColumnRegistry`]: case-insensitive sets of default and generated
//!   columns, shared process-wide through [`ColumnRegistry::global`]
//!
//! # Example
//!
//! ```
//! use kibom_columns::{ColumnRegistry, columns};
//!
//! let registry = ColumnRegistry::global();
//! assert!(registry.is_default("footprint lib"));
//! assert!(registry.is_generated(columns::COL_GRP_QUANTITY));
//! assert_eq!(registry.default_columns()[0], columns::COL_DESCRIPTION);
//! ```

#![deny(unsafe_code)]

pub mod columns;
pub mod registry;

pub use registry::{ColumnRegistry, ColumnSet};
