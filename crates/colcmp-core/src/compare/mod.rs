//! Per-type ordering rules.
//!
//! Every comparator here is a zero-sized, stateless value bound to one
//! (physical type, sort order) pair. Selection happens once, in
//! `comparator`; these types only answer `less_than`.

mod bytes;
mod int96;
mod numeric;


use std::cmp::Ordering;

// re-exports
pub use bytes::{ByteArrayComparator, SignedByteArrayComparator};
pub use int96::{Int96Comparator, UnsignedInt96Comparator};
pub use numeric::{
    BooleanComparator, DoubleComparator, FloatComparator, Int32Comparator, Int64Comparator,
    UnsignedInt32Comparator, UnsignedInt64Comparator,
};

///
/// TypedComparator
///
/// Strict weak ordering over values of one physical type.
///
/// `less_than` must be irreflexive, asymmetric and transitive, and must not
/// depend on anything but its two arguments. The float comparators are the
/// documented exception: IEEE `<` is false whenever either side is NaN, so
/// callers exclude NaN before relying on ordering laws.
///

pub trait TypedComparator {
    type Value: ?Sized;

    fn less_than(&self, a: &Self::Value, b: &Self::Value) -> bool;

    /// Three-way comparison derived from `less_than`.
    ///
    /// Values that are mutually not-less (including NaN pairs) report `Equal`.
    fn compare(&self, a: &Self::Value, b: &Self::Value) -> Ordering {
        if self.less_than(a, b) {
            Ordering::Less
        } else if self.less_than(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Single-pass min/max under this ordering.
    ///
    /// Ties keep the first value seen. Returns `None` for empty input.
    fn min_max<'v, I>(&self, values: I) -> Option<(&'v Self::Value, &'v Self::Value)>
    where
        I: IntoIterator<Item = &'v Self::Value>,
        Self::Value: 'v,
    {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);

        for value in iter {
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
