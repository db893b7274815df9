use crate::{compare::TypedComparator, types::Int96};

///
/// Int96Comparator
///
/// Signed 96-bit ordering. Only the high word carries the sign; the middle
/// and low words are magnitude bits and always compare unsigned.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Int96Comparator;

impl TypedComparator for Int96Comparator {
    type Value = Int96;

    #[inline]
    fn less_than(&self, a: &Int96, b: &Int96) -> bool {
        if a.high() != b.high() {
            return a.high().cast_signed() < b.high().cast_signed();
        }
        if a.mid() != b.mid() {
            return a.mid() < b.mid();
        }

        a.low() < b.low()
    }
}

///
/// UnsignedInt96Comparator
///
/// All three words unsigned, most significant first.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnsignedInt96Comparator;

impl TypedComparator for UnsignedInt96Comparator {
    type Value = Int96;

    #[inline]
    fn less_than(&self, a: &Int96, b: &Int96) -> bool {
        if a.high() != b.high() {
            return a.high() < b.high();
        }
        if a.mid() != b.mid() {
            return a.mid() < b.mid();
        }

        a.low() < b.low()
    }
}
