//! Shared vocabulary for column ordering: physical storage types, sort
//! orders, and the per-type capability registry.
#[macro_use]
mod macros;


use serde::{Deserialize, Serialize};
use std::fmt;

///
/// PhysicalType
///
/// On-disk scalar representation of a column's values.
///
/// IMPORTANT:
/// Wire tags come from the file footer and must never be renumbered.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum PhysicalType {
    Boolean,
    Int32,
    Int64,
    Int96,
    Float,
    Double,
    ByteArray,
    FixedLenByteArray,
}

impl PhysicalType {
    /// Return the full metadata descriptor for one physical type.
    #[must_use]
    pub const fn metadata(self) -> PhysicalTypeMetadata {
        physical_type_registry!(metadata_from_registry, self)
    }

    /// Resolve a footer wire tag, returning `None` for tags this crate does
    /// not know.
    #[must_use]
    pub const fn from_wire_tag(tag: i32) -> Option<Self> {
        physical_type_registry!(from_wire_tag_from_registry, tag)
    }

    #[must_use]
    pub const fn wire_tag(self) -> i32 {
        self.metadata().wire_tag
    }

    /// Stable upper-case label used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    /// Sort order used when no logical annotation overrides it.
    #[must_use]
    pub const fn default_sort_order(self) -> SortOrder {
        self.metadata().default_sort_order
    }

    /// Return whether an unsigned ordering is meaningful for this type.
    #[must_use]
    pub const fn supports_unsigned_order(self) -> bool {
        self.metadata().supports_unsigned_order
    }

    #[must_use]
    pub const fn is_byte_sequence(self) -> bool {
        self.metadata().is_byte_sequence
    }

    /// Return whether values carry a schema-declared fixed byte length.
    #[must_use]
    pub const fn requires_type_length(self) -> bool {
        self.metadata().requires_type_length
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// PhysicalTypeMetadata
///
/// Capability metadata shared by descriptor validation and comparator
/// selection.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PhysicalTypeMetadata {
    pub wire_tag: i32,
    pub label: &'static str,
    pub default_sort_order: SortOrder,
    pub supports_unsigned_order: bool,
    pub is_byte_sequence: bool,
    pub requires_type_length: bool,
}

///
/// SortOrder
///
/// How the bytes of a physical value are interpreted for ordering.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SortOrder {
    Signed,
    Unsigned,
}

impl SortOrder {
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Signed)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Signed => "signed",
            Self::Unsigned => "unsigned",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered list of all physical types in registry order.
pub const ALL_PHYSICAL_TYPES: [PhysicalType; 8] = physical_type_registry!(all_types_from_registry);
