//! Case-insensitive, insertion-ordered map for column names.
//!
//! Column and field names reach the BOM pipeline from configuration files and
//! schematic fields in whatever casing the author used. [`CaseInsensitiveMap`]
//! looks them up case-insensitively while remembering the casing of the most
//! recent write, so output can show names the way the user spelled them.
//!
//! # Module Organization
//!
//! - [`fold`]: the [`CaseFold`] key normalization trait
//! - [`map`]: [`CaseInsensitiveMap`] and its iterators
//! - [`compare`]: equality against other maps and dynamically typed values
//! - [`error`]: [`MapError`] for the fallible accessors
//!
//! # Example
//!
//! ```
//! use kibom_map::CaseInsensitiveMap;
//!
//! let mut widths = CaseInsensitiveMap::new();
//! widths.insert("References", 40);
//! widths.insert("Value", 12);
//!
//! assert_eq!(widths.get("VALUE"), Some(&12));
//! assert_eq!(widths.to_string(), r#"{"References": 40, "Value": 12}"#);
//! ```
//!
//! The map does no locking of its own. Wrap it in a mutex (or keep one map
//! per worker) when it has to be shared between threads.

#![deny(unsafe_code)]

pub mod compare;
pub mod error;
pub mod fold;
pub mod map;
mod serialize;

pub use compare::Comparison;
pub use error::{MapError, Result};
pub use fold::{ByValue, CaseFold};
pub use map::CaseInsensitiveMap;
