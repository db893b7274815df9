use crate::types::Int96;
use colcmp_primitives::PhysicalType;

///
/// ValueRef
///
/// Borrowed, already-decoded scalar tagged with its physical type.
/// Used by the uniform comparator entry point; statically typed callers can
/// skip it and use a `TypedComparator` directly.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueRef<'a> {
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Int96(Int96),
    Float(f32),
    Double(f64),
    ByteArray(&'a [u8]),
    FixedLenByteArray(&'a [u8]),
}

impl ValueRef<'_> {
    #[must_use]
    pub const fn physical_type(&self) -> PhysicalType {
        match self {
            Self::Boolean(_) => PhysicalType::Boolean,
            Self::Int32(_) => PhysicalType::Int32,
            Self::Int64(_) => PhysicalType::Int64,
            Self::Int96(_) => PhysicalType::Int96,
            Self::Float(_) => PhysicalType::Float,
            Self::Double(_) => PhysicalType::Double,
            Self::ByteArray(_) => PhysicalType::ByteArray,
            Self::FixedLenByteArray(_) => PhysicalType::FixedLenByteArray,
        }
    }
}

impl From<bool> for ValueRef<'_> {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for ValueRef<'_> {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<i64> for ValueRef<'_> {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<Int96> for ValueRef<'_> {
    fn from(value: Int96) -> Self {
        Self::Int96(value)
    }
}

impl From<f32> for ValueRef<'_> {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for ValueRef<'_> {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

// Byte slices map to the variable-length type; fixed-length values are
// built explicitly.
impl<'a> From<&'a [u8]> for ValueRef<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::ByteArray(value)
    }
}
