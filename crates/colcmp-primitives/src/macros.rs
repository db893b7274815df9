#[macro_export]
macro_rules! physical_type_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Boolean,
                wire_tag = 0,
                label = "BOOLEAN",
                default_sort_order = Signed,
                supports_unsigned_order = false,
                is_byte_sequence = false,
                requires_type_length = false
            ),
            (
                Int32,
                wire_tag = 1,
                label = "INT32",
                default_sort_order = Signed,
                supports_unsigned_order = true,
                is_byte_sequence = false,
                requires_type_length = false
            ),
            (
                Int64,
                wire_tag = 2,
                label = "INT64",
                default_sort_order = Signed,
                supports_unsigned_order = true,
                is_byte_sequence = false,
                requires_type_length = false
            ),
            (
                Int96,
                wire_tag = 3,
                label = "INT96",
                default_sort_order = Signed,
                supports_unsigned_order = true,
                is_byte_sequence = false,
                requires_type_length = false
            ),
            (
                Float,
                wire_tag = 4,
                label = "FLOAT",
                default_sort_order = Signed,
                supports_unsigned_order = false,
                is_byte_sequence = false,
                requires_type_length = false
            ),
            (
                Double,
                wire_tag = 5,
                label = "DOUBLE",
                default_sort_order = Signed,
                supports_unsigned_order = false,
                is_byte_sequence = false,
                requires_type_length = false
            ),
            (
                ByteArray,
                wire_tag = 6,
                label = "BYTE_ARRAY",
                default_sort_order = Unsigned,
                supports_unsigned_order = true,
                is_byte_sequence = true,
                requires_type_length = false
            ),
            (
                FixedLenByteArray,
                wire_tag = 7,
                label = "FIXED_LEN_BYTE_ARRAY",
                default_sort_order = Unsigned,
                supports_unsigned_order = true,
                is_byte_sequence = true,
                requires_type_length = true
            ),
        }
    };
}

#[macro_export]
macro_rules! physical_type_registry {
    ($macro:ident) => {
        $crate::physical_type_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::physical_type_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($ty:ident, wire_tag = $tag:literal, label = $label:literal, default_sort_order = $order:ident, supports_unsigned_order = $unsigned:expr, is_byte_sequence = $bytes:expr, requires_type_length = $len:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::PhysicalType::$ty => $crate::PhysicalTypeMetadata {
                    wire_tag: $tag,
                    label: $label,
                    default_sort_order: $crate::SortOrder::$order,
                    supports_unsigned_order: $unsigned,
                    is_byte_sequence: $bytes,
                    requires_type_length: $len,
                },
            )*
        }
    };
}

macro_rules! from_wire_tag_from_registry {
    ( @args $tag_in:expr; @entries $( ($ty:ident, wire_tag = $tag:literal, label = $label:literal, default_sort_order = $order:ident, supports_unsigned_order = $unsigned:expr, is_byte_sequence = $bytes:expr, requires_type_length = $len:expr) ),* $(,)? ) => {
        match $tag_in {
            $(
                $tag => Some($crate::PhysicalType::$ty),
            )*
            _ => None,
        }
    };
}

macro_rules! all_types_from_registry {
    ( @entries $( ($ty:ident, wire_tag = $tag:literal, label = $label:literal, default_sort_order = $order:ident, supports_unsigned_order = $unsigned:expr, is_byte_sequence = $bytes:expr, requires_type_length = $len:expr) ),* $(,)? ) => {
        [ $( $crate::PhysicalType::$ty ),* ]
    };
}
