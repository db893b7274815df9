use derive_more::From;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Int96
///
/// Legacy 96-bit integer stored as three 32-bit sub-words, little-endian:
/// `value[0]` is least significant, `value[2]` most significant and the only
/// word that carries a sign bit.
///
/// `Int96` deliberately has no `Ord`; ordering depends on the column's sort
/// order and is chosen through a comparator.
///

#[derive(Clone, Copy, Default, Deserialize, Eq, From, Hash, PartialEq, Serialize)]
pub struct Int96 {
    pub value: [u32; 3],
}

impl Int96 {
    #[must_use]
    pub const fn new(value: [u32; 3]) -> Self {
        Self { value }
    }

    /// Build from sub-words, least significant first.
    #[must_use]
    pub const fn from_words(low: u32, mid: u32, high: u32) -> Self {
        Self {
            value: [low, mid, high],
        }
    }

    #[must_use]
    pub const fn low(&self) -> u32 {
        self.value[0]
    }

    #[must_use]
    pub const fn mid(&self) -> u32 {
        self.value[1]
    }

    #[must_use]
    pub const fn high(&self) -> u32 {
        self.value[2]
    }
}

impl fmt::Debug for Int96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Int96[{:#010x}, {:#010x}, {:#010x}]",
            self.value[0], self.value[1], self.value[2]
        )
    }
}
