use crate::{
    comparator::{Comparator, ComparatorKind, make_comparator},
    descriptor::{ColumnDescriptor, ColumnOrder},
    error::UnsupportedTypeReason,
    obs::{MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink},
    types::Int96,
    value::ValueRef,
};
use colcmp_primitives::{ALL_PHYSICAL_TYPES, PhysicalType, SortOrder};
use std::{cell::RefCell, cmp::Ordering, rc::Rc};

// ---- helpers -----------------------------------------------------------

fn descr(physical_type: PhysicalType, sort_order: SortOrder) -> ColumnDescriptor {
    let descr = ColumnDescriptor::new("col", physical_type).with_sort_order(sort_order);
    if physical_type.requires_type_length() {
        descr.with_type_length(4)
    } else {
        descr
    }
}

fn build(physical_type: PhysicalType, sort_order: SortOrder) -> Comparator {
    make_comparator(&descr(physical_type, sort_order)).expect("comparator should build")
}

#[derive(Default)]
struct RecordingSink {
    events: RefCell<Vec<MetricsEvent>>,
}

impl MetricsSink for RecordingSink {
    fn record(&self, event: MetricsEvent) {
        self.events.borrow_mut().push(event);
    }
}

// ---- selection ---------------------------------------------------------

#[test]
fn dispatch_table_covers_every_supported_pair() {
    let cases = [
        (PhysicalType::Boolean, SortOrder::Signed, Comparator::Boolean(Default::default())),
        (PhysicalType::Boolean, SortOrder::Unsigned, Comparator::Boolean(Default::default())),
        (PhysicalType::Int32, SortOrder::Signed, Comparator::Int32(Default::default())),
        (
            PhysicalType::Int32,
            SortOrder::Unsigned,
            Comparator::UnsignedInt32(Default::default()),
        ),
        (PhysicalType::Int64, SortOrder::Signed, Comparator::Int64(Default::default())),
        (
            PhysicalType::Int64,
            SortOrder::Unsigned,
            Comparator::UnsignedInt64(Default::default()),
        ),
        (PhysicalType::Int96, SortOrder::Signed, Comparator::Int96(Default::default())),
        (
            PhysicalType::Int96,
            SortOrder::Unsigned,
            Comparator::UnsignedInt96(Default::default()),
        ),
        (PhysicalType::Float, SortOrder::Signed, Comparator::Float(Default::default())),
        (PhysicalType::Double, SortOrder::Signed, Comparator::Double(Default::default())),
        (
            PhysicalType::ByteArray,
            SortOrder::Signed,
            Comparator::SignedByteArray(Default::default()),
        ),
        (
            PhysicalType::ByteArray,
            SortOrder::Unsigned,
            Comparator::ByteArray(Default::default()),
        ),
        (
            PhysicalType::FixedLenByteArray,
            SortOrder::Signed,
            Comparator::SignedFixedLenByteArray(Default::default()),
        ),
        (
            PhysicalType::FixedLenByteArray,
            SortOrder::Unsigned,
            Comparator::FixedLenByteArray(Default::default()),
        ),
    ];

    for (physical_type, sort_order, expected) in cases {
        let comparator = build(physical_type, sort_order);

        assert_eq!(comparator, expected, "{physical_type}/{sort_order}");
        assert_eq!(comparator.physical_type(), physical_type);
    }
}

#[test]
fn default_descriptor_order_builds_for_every_type() {
    for physical_type in ALL_PHYSICAL_TYPES {
        let comparator = build(physical_type, physical_type.default_sort_order());

        assert_eq!(comparator.sort_order(), physical_type.default_sort_order());
    }
}

#[test]
fn boolean_kind_ignores_requested_order() {
    let comparator = build(PhysicalType::Boolean, SortOrder::Unsigned);

    assert_eq!(
        comparator.kind(),
        ComparatorKind::new(PhysicalType::Boolean, SortOrder::Signed)
    );
    assert_eq!(comparator.kind().to_string(), "BOOLEAN/signed");
}

#[test]
fn unknown_physical_type_is_unsupported() {
    let descr = ColumnDescriptor::from_footer("future", 8, None, ColumnOrder::Undefined);

    let err = make_comparator(&descr).expect_err("unknown tag should be rejected");

    assert!(err.is_unsupported_type());
    assert_eq!(
        err.reason(),
        &UnsupportedTypeReason::UnknownPhysicalType { wire_tag: 8 }
    );
}

#[test]
fn unsigned_float_columns_are_unsupported() {
    for physical_type in [PhysicalType::Float, PhysicalType::Double] {
        let err = make_comparator(&descr(physical_type, SortOrder::Unsigned))
            .expect_err("unsigned float should be rejected");

        assert_eq!(
            err.reason(),
            &UnsupportedTypeReason::UnorderableSortOrder {
                physical_type,
                sort_order: SortOrder::Unsigned,
            }
        );
    }
}

#[test]
fn fixed_len_byte_array_requires_positive_length() {
    let missing = ColumnDescriptor::new("hash", PhysicalType::FixedLenByteArray);
    let zero = missing.clone().with_type_length(0);

    for descr in [missing, zero] {
        let err = make_comparator(&descr).expect_err("length must be positive");
        assert!(matches!(
            err.reason(),
            UnsupportedTypeReason::InvalidTypeLength {
                physical_type: PhysicalType::FixedLenByteArray,
                ..
            }
        ));
    }
}

#[test]
fn type_length_on_variable_width_type_is_inconsistent() {
    let descr = ColumnDescriptor::new("name", PhysicalType::ByteArray).with_type_length(8);

    let err = Comparator::try_from(&descr).expect_err("stray length should be rejected");

    assert_eq!(
        err.reason(),
        &UnsupportedTypeReason::InvalidTypeLength {
            physical_type: PhysicalType::ByteArray,
            type_length: Some(8),
        }
    );
    assert!(err.to_string().starts_with("column 'name' has no comparator"));
}

#[test]
fn legacy_column_order_selects_signed_bytes() {
    let descr = ColumnDescriptor::from_footer("legacy", 6, None, ColumnOrder::Undefined);

    let comparator = make_comparator(&descr).expect("legacy byte array should build");

    assert_eq!(comparator.kind().to_string(), "BYTE_ARRAY/signed");
    assert!(comparator.less_than(ValueRef::ByteArray(&[0xFF]), ValueRef::ByteArray(&[0x7F])));
}

// ---- uniform entry point -----------------------------------------------

#[test]
fn uniform_entry_point_applies_bound_semantics() {
    let signed = build(PhysicalType::Int32, SortOrder::Signed);
    let unsigned = build(PhysicalType::Int32, SortOrder::Unsigned);

    assert!(signed.less_than((-1i32).into(), 1i32.into()));
    assert!(unsigned.less_than(1i32.into(), (-1i32).into()));

    let wide = build(PhysicalType::Int96, SortOrder::Signed);
    assert!(wide.less_than(
        Int96::from_words(0, 0, u32::MAX).into(),
        Int96::default().into()
    ));

    let wide_unsigned = build(PhysicalType::Int96, SortOrder::Unsigned);
    assert!(wide_unsigned.less_than(
        Int96::from_words(0, 0, 0x7FFF_FFFF).into(),
        Int96::from_words(0, 0, u32::MAX).into()
    ));

    let double = build(PhysicalType::Double, SortOrder::Signed);
    assert!(!double.less_than(f64::NAN.into(), 1.0f64.into()));
    assert!(!double.less_than(1.0f64.into(), f64::NAN.into()));
}

#[test]
fn fixed_len_values_use_fixed_len_variants() {
    let comparator = build(PhysicalType::FixedLenByteArray, SortOrder::Unsigned);

    assert!(comparator.less_than(
        ValueRef::FixedLenByteArray(&[0x00, 0x00, 0x00, 0x01]),
        ValueRef::FixedLenByteArray(&[0x00, 0x00, 0x00, 0xFF]),
    ));
}

#[test]
fn mismatched_value_types_never_order() {
    let comparator = build(PhysicalType::Int64, SortOrder::Signed);

    assert!(!comparator.less_than(1i32.into(), 2i32.into()));
    assert!(!comparator.less_than(1i64.into(), 2i32.into()));

    let bytes = build(PhysicalType::ByteArray, SortOrder::Unsigned);
    assert!(!bytes.less_than(
        ValueRef::FixedLenByteArray(&[0x01]),
        ValueRef::FixedLenByteArray(&[0x02]),
    ));
}

#[test]
fn compare_and_min_max_follow_less_than() {
    let comparator = build(PhysicalType::ByteArray, SortOrder::Unsigned);
    let raw: [&[u8]; 4] = [b"m", b"\xFF", b"a", b"a\x00"];
    let values: Vec<ValueRef<'_>> = raw.into_iter().map(ValueRef::from).collect();

    assert_eq!(comparator.compare(values[2], values[3]), Ordering::Less);
    assert_eq!(comparator.compare(values[0], values[0]), Ordering::Equal);
    assert_eq!(
        comparator.min_max(&values),
        Some((ValueRef::ByteArray(b"a"), ValueRef::ByteArray(b"\xFF")))
    );
    assert_eq!(comparator.min_max(&[]), None);
}

// ---- observability -----------------------------------------------------

#[test]
fn factory_reports_each_attempt_to_the_sink() {
    let sink = Rc::new(RecordingSink::default());

    with_metrics_sink(sink.clone(), || {
        let _ = build(PhysicalType::Int64, SortOrder::Unsigned);
        let _ = make_comparator(&descr(PhysicalType::Float, SortOrder::Unsigned));
    });

    assert_eq!(
        *sink.events.borrow(),
        vec![
            MetricsEvent::ComparatorBuilt {
                kind: ComparatorKind::new(PhysicalType::Int64, SortOrder::Unsigned),
            },
            MetricsEvent::ComparatorRejected {
                wire_tag: PhysicalType::Float.wire_tag(),
            },
        ]
    );
}

#[test]
fn factory_updates_default_counters() {
    metrics_reset_all();

    let _ = build(PhysicalType::ByteArray, SortOrder::Unsigned);
    let _ = build(PhysicalType::ByteArray, SortOrder::Unsigned);
    let _ = make_comparator(&ColumnDescriptor::from_footer(
        "x",
        -3,
        None,
        ColumnOrder::Undefined,
    ));

    let report = metrics_report();
    assert_eq!(report.ops.comparators_built, 2);
    assert_eq!(report.ops.comparators_rejected, 1);
    assert_eq!(report.built_by_kind.get("BYTE_ARRAY/unsigned"), Some(&2));
    assert_eq!(report.rejected_by_tag.get(&-3), Some(&1));
}
