//! Canonical BOM column names.
//!
//! These spellings are what the BOM writers emit in headers. Lookups against
//! user-supplied names go through [`ColumnRegistry`](crate::ColumnRegistry),
//! which ignores case.

pub const COL_REFERENCE: &str = "References";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_VALUE: &str = "Value";
pub const COL_FP: &str = "Footprint";
pub const COL_FP_LIB: &str = "Footprint Lib";
pub const COL_PART: &str = "Part";
pub const COL_PART_LIB: &str = "Part Lib";
pub const COL_SHEETPATH: &str = "Sheetpath";
pub const COL_DATASHEET: &str = "Datasheet";

// Group columns
pub const COL_GRP_QUANTITY: &str = "Quantity Per PCB";
pub const COL_GRP_BUILD_QUANTITY: &str = "Build Quantity";

/// Columns computed per component group; users cannot set them.
pub const GENERATED_COLUMNS: [&str; 2] = [COL_GRP_QUANTITY, COL_GRP_BUILD_QUANTITY];

/// Columns present in every BOM, in default output order.
pub const DEFAULT_COLUMNS: [&str; 11] = [
    COL_DESCRIPTION,
    COL_PART,
    COL_PART_LIB,
    COL_REFERENCE,
    COL_VALUE,
    COL_FP,
    COL_FP_LIB,
    COL_SHEETPATH,
    COL_GRP_QUANTITY,
    COL_GRP_BUILD_QUANTITY,
    COL_DATASHEET,
];
