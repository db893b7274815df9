use crate::compare::TypedComparator;

// Native ordering: `<` on the value type itself.
macro_rules! native_comparator {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        impl TypedComparator for $name {
            type Value = $ty;

            #[inline]
            fn less_than(&self, a: &$ty, b: &$ty) -> bool {
                a < b
            }
        }
    };
}

// Unsigned ordering over a signed storage type: bit-cast, then `<`.
macro_rules! unsigned_comparator {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        impl TypedComparator for $name {
            type Value = $ty;

            #[inline]
            fn less_than(&self, a: &$ty, b: &$ty) -> bool {
                a.cast_unsigned() < b.cast_unsigned()
            }
        }
    };
}

native_comparator!(
    /// `false` orders before `true`. There is no unsigned boolean.
    BooleanComparator,
    bool
);
native_comparator!(
    /// Two's-complement ordering.
    Int32Comparator,
    i32
);
native_comparator!(
    /// Two's-complement ordering.
    Int64Comparator,
    i64
);
native_comparator!(
    /// IEEE-754 ordered `<`. Not total when NaN is present.
    FloatComparator,
    f32
);
native_comparator!(
    /// IEEE-754 ordered `<`. Not total when NaN is present.
    DoubleComparator,
    f64
);

unsigned_comparator!(
    /// Same bits as `i32`, ordered as `u32`.
    UnsignedInt32Comparator,
    i32
);
unsigned_comparator!(
    /// Same bits as `i64`, ordered as `u64`.
    UnsignedInt64Comparator,
    i64
);
