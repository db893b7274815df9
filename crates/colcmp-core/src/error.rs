use colcmp_primitives::{PhysicalType, SortOrder};
use thiserror::Error as ThisError;

///
/// ComparatorError
///
/// Failure raised by comparator selection. Deterministic: the same
/// descriptor always fails the same way.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ComparatorError {
    #[error("column '{column}' has no comparator: {reason}")]
    UnsupportedType {
        column: String,
        reason: UnsupportedTypeReason,
    },
}

impl ComparatorError {
    pub(crate) fn unsupported(column: impl Into<String>, reason: UnsupportedTypeReason) -> Self {
        Self::UnsupportedType {
            column: column.into(),
            reason,
        }
    }

    #[must_use]
    pub const fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }

    #[must_use]
    pub const fn reason(&self) -> &UnsupportedTypeReason {
        match self {
            Self::UnsupportedType { reason, .. } => reason,
        }
    }
}

///
/// UnsupportedTypeReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum UnsupportedTypeReason {
    #[error("unknown physical type tag {wire_tag}")]
    UnknownPhysicalType { wire_tag: i32 },

    #[error("{physical_type} has no {sort_order} ordering")]
    UnorderableSortOrder {
        physical_type: PhysicalType,
        sort_order: SortOrder,
    },

    #[error("{physical_type} declares invalid type length {type_length:?}")]
    InvalidTypeLength {
        physical_type: PhysicalType,
        type_length: Option<usize>,
    },
}
