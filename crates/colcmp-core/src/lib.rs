//! Core ordering runtime for colcmp: the comparator contract, per-type
//! comparison rules, comparator selection from a column descriptor, and the
//! metrics sink.
#![warn(unreachable_pub)]

pub mod comparator;
pub mod compare;
pub mod descriptor;
pub mod error;
pub mod obs;
pub mod types;
pub mod value;

// re-exports
pub use colcmp_primitives::{ALL_PHYSICAL_TYPES, PhysicalType, SortOrder};

///
/// Prelude
///
/// Domain vocabulary only: descriptors, comparators, values.
///

pub mod prelude {
    pub use crate::{
        comparator::{Comparator, ComparatorKind, make_comparator},
        compare::TypedComparator,
        descriptor::{ColumnDescriptor, ColumnOrder},
        types::Int96,
        value::ValueRef,
    };
    pub use colcmp_primitives::{PhysicalType, SortOrder};
}
