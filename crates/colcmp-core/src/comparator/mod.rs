//! Comparator selection.
//!
//! A column's descriptor is resolved to one `Comparator` variant exactly
//! once; per-value comparisons then dispatch on that fixed variant.

#[cfg(test)]
mod tests;

use crate::{
    compare::{
        BooleanComparator, ByteArrayComparator, DoubleComparator, FloatComparator,
        Int32Comparator, Int64Comparator, Int96Comparator, SignedByteArrayComparator,
        TypedComparator, UnsignedInt32Comparator, UnsignedInt64Comparator,
        UnsignedInt96Comparator,
    },
    descriptor::ColumnDescriptor,
    error::{ComparatorError, UnsupportedTypeReason},
    obs::sink::{self, MetricsEvent},
    value::ValueRef,
};
use colcmp_primitives::{PhysicalType, SortOrder};
use derive_more::Display;
use std::cmp::Ordering;

///
/// ComparatorKind
///
/// The (physical type, sort order) pair a comparator is bound to.
/// The label (`INT32/unsigned`) is stable and used as a metrics key.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{physical_type}/{sort_order}")]
pub struct ComparatorKind {
    physical_type: PhysicalType,
    sort_order: SortOrder,
}

impl ComparatorKind {
    #[must_use]
    pub const fn new(physical_type: PhysicalType, sort_order: SortOrder) -> Self {
        Self {
            physical_type,
            sort_order,
        }
    }

    #[must_use]
    pub const fn physical_type(self) -> PhysicalType {
        self.physical_type
    }

    #[must_use]
    pub const fn sort_order(self) -> SortOrder {
        self.sort_order
    }
}

///
/// Comparator
///
/// Closed set of comparators, one variant per supported
/// (physical type, sort order) pair. Immutable, `Copy`, and safe to share.
///
/// Passing a `ValueRef` of a different physical type than the one the
/// comparator is bound to is a caller error; such calls return `false`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Comparator {
    Boolean(BooleanComparator),
    Int32(Int32Comparator),
    UnsignedInt32(UnsignedInt32Comparator),
    Int64(Int64Comparator),
    UnsignedInt64(UnsignedInt64Comparator),
    Int96(Int96Comparator),
    UnsignedInt96(UnsignedInt96Comparator),
    Float(FloatComparator),
    Double(DoubleComparator),
    ByteArray(ByteArrayComparator),
    SignedByteArray(SignedByteArrayComparator),
    FixedLenByteArray(ByteArrayComparator),
    SignedFixedLenByteArray(SignedByteArrayComparator),
}

impl Comparator {
    /// Select the comparator for one column.
    ///
    /// Fails with `UnsupportedType` for unknown physical tags, for unsigned
    /// float columns, and for descriptors whose type length contradicts
    /// their physical type.
    pub fn try_from_descriptor(descr: &ColumnDescriptor) -> Result<Self, ComparatorError> {
        match Self::select(descr) {
            Ok(comparator) => {
                sink::record(MetricsEvent::ComparatorBuilt {
                    kind: comparator.kind(),
                });

                Ok(comparator)
            }
            Err(reason) => {
                sink::record(MetricsEvent::ComparatorRejected {
                    wire_tag: descr.wire_tag(),
                });

                Err(ComparatorError::unsupported(descr.path(), reason))
            }
        }
    }

    fn select(descr: &ColumnDescriptor) -> Result<Self, UnsupportedTypeReason> {
        let physical_type = descr.physical_type().ok_or(
            UnsupportedTypeReason::UnknownPhysicalType {
                wire_tag: descr.wire_tag(),
            },
        )?;
        validate_type_length(physical_type, descr.type_length())?;

        let comparator = match (physical_type, descr.sort_order()) {
            // There is no unsigned boolean; the order is ignored.
            (PhysicalType::Boolean, _) => Self::Boolean(BooleanComparator),

            (PhysicalType::Int32, SortOrder::Signed) => Self::Int32(Int32Comparator),
            (PhysicalType::Int32, SortOrder::Unsigned) => {
                Self::UnsignedInt32(UnsignedInt32Comparator)
            }
            (PhysicalType::Int64, SortOrder::Signed) => Self::Int64(Int64Comparator),
            (PhysicalType::Int64, SortOrder::Unsigned) => {
                Self::UnsignedInt64(UnsignedInt64Comparator)
            }
            (PhysicalType::Int96, SortOrder::Signed) => Self::Int96(Int96Comparator),
            (PhysicalType::Int96, SortOrder::Unsigned) => {
                Self::UnsignedInt96(UnsignedInt96Comparator)
            }

            (PhysicalType::Float, SortOrder::Signed) => Self::Float(FloatComparator),
            (PhysicalType::Double, SortOrder::Signed) => Self::Double(DoubleComparator),
            (physical_type @ (PhysicalType::Float | PhysicalType::Double), sort_order) => {
                return Err(UnsupportedTypeReason::UnorderableSortOrder {
                    physical_type,
                    sort_order,
                });
            }

            (PhysicalType::ByteArray, SortOrder::Unsigned) => {
                Self::ByteArray(ByteArrayComparator)
            }
            (PhysicalType::ByteArray, SortOrder::Signed) => {
                Self::SignedByteArray(SignedByteArrayComparator)
            }
            (PhysicalType::FixedLenByteArray, SortOrder::Unsigned) => {
                Self::FixedLenByteArray(ByteArrayComparator)
            }
            (PhysicalType::FixedLenByteArray, SortOrder::Signed) => {
                Self::SignedFixedLenByteArray(SignedByteArrayComparator)
            }
        };

        Ok(comparator)
    }

    #[must_use]
    pub const fn kind(self) -> ComparatorKind {
        ComparatorKind::new(self.physical_type(), self.sort_order())
    }

    #[must_use]
    pub const fn physical_type(self) -> PhysicalType {
        match self {
            Self::Boolean(_) => PhysicalType::Boolean,
            Self::Int32(_) | Self::UnsignedInt32(_) => PhysicalType::Int32,
            Self::Int64(_) | Self::UnsignedInt64(_) => PhysicalType::Int64,
            Self::Int96(_) | Self::UnsignedInt96(_) => PhysicalType::Int96,
            Self::Float(_) => PhysicalType::Float,
            Self::Double(_) => PhysicalType::Double,
            Self::ByteArray(_) | Self::SignedByteArray(_) => PhysicalType::ByteArray,
            Self::FixedLenByteArray(_) | Self::SignedFixedLenByteArray(_) => {
                PhysicalType::FixedLenByteArray
            }
        }
    }

    /// Order this comparator applies. Boolean and floats only have a
    /// signed form.
    #[must_use]
    pub const fn sort_order(self) -> SortOrder {
        match self {
            Self::UnsignedInt32(_)
            | Self::UnsignedInt64(_)
            | Self::UnsignedInt96(_)
            | Self::ByteArray(_)
            | Self::FixedLenByteArray(_) => SortOrder::Unsigned,
            Self::Boolean(_)
            | Self::Int32(_)
            | Self::Int64(_)
            | Self::Int96(_)
            | Self::Float(_)
            | Self::Double(_)
            | Self::SignedByteArray(_)
            | Self::SignedFixedLenByteArray(_) => SortOrder::Signed,
        }
    }

    /// Strict less-than between two values of the bound physical type.
    #[must_use]
    pub fn less_than(self, a: ValueRef<'_>, b: ValueRef<'_>) -> bool {
        match (self, a, b) {
            (Self::Boolean(c), ValueRef::Boolean(a), ValueRef::Boolean(b)) => c.less_than(&a, &b),
            (Self::Int32(c), ValueRef::Int32(a), ValueRef::Int32(b)) => c.less_than(&a, &b),
            (Self::UnsignedInt32(c), ValueRef::Int32(a), ValueRef::Int32(b)) => {
                c.less_than(&a, &b)
            }
            (Self::Int64(c), ValueRef::Int64(a), ValueRef::Int64(b)) => c.less_than(&a, &b),
            (Self::UnsignedInt64(c), ValueRef::Int64(a), ValueRef::Int64(b)) => {
                c.less_than(&a, &b)
            }
            (Self::Int96(c), ValueRef::Int96(a), ValueRef::Int96(b)) => c.less_than(&a, &b),
            (Self::UnsignedInt96(c), ValueRef::Int96(a), ValueRef::Int96(b)) => {
                c.less_than(&a, &b)
            }
            (Self::Float(c), ValueRef::Float(a), ValueRef::Float(b)) => c.less_than(&a, &b),
            (Self::Double(c), ValueRef::Double(a), ValueRef::Double(b)) => c.less_than(&a, &b),
            (Self::ByteArray(c), ValueRef::ByteArray(a), ValueRef::ByteArray(b))
            | (
                Self::FixedLenByteArray(c),
                ValueRef::FixedLenByteArray(a),
                ValueRef::FixedLenByteArray(b),
            ) => c.less_than(a, b),
            (Self::SignedByteArray(c), ValueRef::ByteArray(a), ValueRef::ByteArray(b))
            | (
                Self::SignedFixedLenByteArray(c),
                ValueRef::FixedLenByteArray(a),
                ValueRef::FixedLenByteArray(b),
            ) => c.less_than(a, b),
            _ => false,
        }
    }

    /// Three-way comparison derived from `less_than`.
    #[must_use]
    pub fn compare(self, a: ValueRef<'_>, b: ValueRef<'_>) -> Ordering {
        if self.less_than(a, b) {
            Ordering::Less
        } else if self.less_than(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Single-pass min/max; ties keep the first value seen.
    ///
    /// Callers drop nulls (and NaN for float columns) beforehand.
    #[must_use]
    pub fn min_max<'v>(self, values: &[ValueRef<'v>]) -> Option<(ValueRef<'v>, ValueRef<'v>)> {
        let (&first, rest) = values.split_first()?;
        let (mut min, mut max) = (first, first);

        for &value in rest {
            if self.less_than(value, min) {
                min = value;
            }
            if self.less_than(max, value) {
                max = value;
            }
        }

        Some((min, max))
    }
}

impl TryFrom<&ColumnDescriptor> for Comparator {
    type Error = ComparatorError;

    fn try_from(descr: &ColumnDescriptor) -> Result<Self, Self::Error> {
        Self::try_from_descriptor(descr)
    }
}

/// Select the comparator for one column.
pub fn make_comparator(descr: &ColumnDescriptor) -> Result<Comparator, ComparatorError> {
    Comparator::try_from_descriptor(descr)
}

// A fixed-length byte array needs a positive length; nothing else may carry one.
const fn validate_type_length(
    physical_type: PhysicalType,
    type_length: Option<usize>,
) -> Result<(), UnsupportedTypeReason> {
    let valid = match type_length {
        Some(len) => physical_type.requires_type_length() && len > 0,
        None => !physical_type.requires_type_length(),
    };

    if valid {
        Ok(())
    } else {
        Err(UnsupportedTypeReason::InvalidTypeLength {
            physical_type,
            type_length,
        })
    }
}
