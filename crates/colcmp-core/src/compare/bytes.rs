use crate::compare::TypedComparator;

///
/// ByteArrayComparator
///
/// Lexicographic over unsigned bytes; an exhausted prefix orders first.
/// Used for both variable- and fixed-length byte sequences, and for every
/// text-like annotation.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ByteArrayComparator;

impl TypedComparator for ByteArrayComparator {
    type Value = [u8];

    #[inline]
    fn less_than(&self, a: &[u8], b: &[u8]) -> bool {
        a < b
    }
}

///
/// SignedByteArrayComparator
///
/// Lexicographic with each byte read as `i8`. Differs from the unsigned
/// variant only where two bytes disagree on the high bit.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SignedByteArrayComparator;

impl TypedComparator for SignedByteArrayComparator {
    type Value = [u8];

    #[inline]
    fn less_than(&self, a: &[u8], b: &[u8]) -> bool {
        a.iter()
            .map(|byte| byte.cast_signed())
            .lt(b.iter().map(|byte| byte.cast_signed()))
    }
}
