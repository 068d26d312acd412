//! Key folding.
//!
//! [`CaseFold`] turns a logical key into the lookup key the map hashes and
//! compares. Text folds to its lower-cased form, byte strings fold to their
//! ASCII lower-cased form, and everything else folds to itself.
//!
//! Lower-casing is the only transform applied. There is no locale handling
//! and no full Unicode case folding, so `"STRASSE"` and `"straße"` remain
//! distinct keys.

use std::borrow::Cow;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Normalizes a key into the form used for hashing and comparison.
///
/// Two keys address the same entry exactly when their folded forms are
/// equal. Query types only need to share the [`Folded`](CaseFold::Folded)
/// type with the stored key type, so a map keyed by `String` can be queried
/// with `&str`.
pub trait CaseFold {
    /// The lookup key type.
    type Folded: Hash + Eq;

    /// Returns the lookup key for `self`.
    fn case_fold(&self) -> Self::Folded;
}

impl<T: CaseFold + ?Sized> CaseFold for &T {
    type Folded = T::Folded;

    fn case_fold(&self) -> Self::Folded {
        (**self).case_fold()
    }
}

// Text

impl CaseFold for str {
    type Folded = String;

    fn case_fold(&self) -> String {
        self.to_lowercase()
    }
}

macro_rules! fold_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CaseFold for $ty {
                type Folded = String;

                fn case_fold(&self) -> String {
                    str::case_fold(self)
                }
            }
        )*
    };
}

fold_as_str!(String, Box<str>, Rc<str>, Arc<str>, Cow<'_, str>);

// Byte strings

impl CaseFold for [u8] {
    type Folded = Vec<u8>;

    fn case_fold(&self) -> Vec<u8> {
        self.to_ascii_lowercase()
    }
}

macro_rules! fold_as_bytes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CaseFold for $ty {
                type Folded = Vec<u8>;

                fn case_fold(&self) -> Vec<u8> {
                    <[u8]>::case_fold(self)
                }
            }
        )*
    };
}

fold_as_bytes!(Vec<u8>, Box<[u8]>, Cow<'_, [u8]>);

// Everything else compares as-is.

macro_rules! fold_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CaseFold for $ty {
                type Folded = $ty;

                fn case_fold(&self) -> $ty {
                    *self
                }
            }
        )*
    };
}

fold_identity!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
);

/// Wrapper that opts any hashable key into identity folding.
///
/// Use this for key types that have no [`CaseFold`] impl of their own; the
/// map then behaves exactly like an ordinary ordered hash map for them.
///
/// ```
/// use kibom_map::{ByValue, CaseInsensitiveMap};
///
/// let mut map = CaseInsensitiveMap::new();
/// map.insert(ByValue((1, 'a')), "first");
/// assert_eq!(map.get(&ByValue((1, 'a'))), Some(&"first"));
/// assert!(!map.contains_key(&ByValue((1, 'A'))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ByValue<T>(pub T);

impl<T: Hash + Eq + Clone> CaseFold for ByValue<T> {
    type Folded = T;

    fn case_fold(&self) -> T {
        self.0.clone()
    }
}
