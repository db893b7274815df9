use colcmp_primitives::{PhysicalType, SortOrder};
use serde::{Deserialize, Serialize};

///
/// ColumnOrder
///
/// Footer-level statement of how a column's statistics were ordered.
/// `Undefined` is the legacy pre-column-order behaviour, which always
/// compared signed.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ColumnOrder {
    TypeDefined(SortOrder),
    Undefined,
}

impl ColumnOrder {
    #[must_use]
    pub const fn sort_order(self) -> SortOrder {
        match self {
            Self::TypeDefined(order) => order,
            Self::Undefined => SortOrder::Signed,
        }
    }
}

///
/// ColumnDescriptor
///
/// What the schema layer hands over for one leaf column: a physical type
/// tag, an optional fixed length, and an already-resolved sort order.
/// The tag is kept raw so descriptors decoded from newer footers survive
/// until comparator selection rejects them.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    path: String,
    wire_tag: i32,
    type_length: Option<usize>,
    sort_order: SortOrder,
}

impl ColumnDescriptor {
    /// Describe a column using the physical type's default sort order.
    pub fn new(path: impl Into<String>, physical_type: PhysicalType) -> Self {
        Self {
            path: path.into(),
            wire_tag: physical_type.wire_tag(),
            type_length: None,
            sort_order: physical_type.default_sort_order(),
        }
    }

    /// Describe a column exactly as decoded from a file footer.
    pub fn from_footer(
        path: impl Into<String>,
        wire_tag: i32,
        type_length: Option<usize>,
        column_order: ColumnOrder,
    ) -> Self {
        Self {
            path: path.into(),
            wire_tag,
            type_length,
            sort_order: column_order.sort_order(),
        }
    }

    #[must_use]
    pub const fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    #[must_use]
    pub const fn with_type_length(mut self, type_length: usize) -> Self {
        self.type_length = Some(type_length);
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn wire_tag(&self) -> i32 {
        self.wire_tag
    }

    /// Resolve the physical type, or `None` for an unknown tag.
    #[must_use]
    pub const fn physical_type(&self) -> Option<PhysicalType> {
        PhysicalType::from_wire_tag(self.wire_tag)
    }

    #[must_use]
    pub const fn type_length(&self) -> Option<usize> {
        self.type_length
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}
