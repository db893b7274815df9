//! ## Crate layout
//! - `core`: comparator contract, per-type rules, selection, observability.
//! - `primitives`: physical types, sort orders, and the type registry.
//!
//! The `prelude` mirrors what statistics and pruning code needs to pick a
//! comparator for a column and order its values.

pub use colcmp_core as core;
pub use colcmp_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use colcmp_core::{
    comparator::{Comparator, make_comparator},
    error::{ComparatorError, UnsupportedTypeReason},
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::core::error::ComparatorError;
}
