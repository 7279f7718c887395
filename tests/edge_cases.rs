//! Edge case tests for fieldstone.

use fieldstone::{field_path, DocumentValue, DocumentValueBuilder, FieldMask, FieldPath, Value};

fn built(ops: impl FnOnce(&mut DocumentValueBuilder)) -> DocumentValue {
    let mut builder = DocumentValueBuilder::new();
    ops(&mut builder);
    builder.build()
}

// ============================================================================
// set edge cases
// ============================================================================

#[test]
fn test_set_then_get_returns_value() {
    let doc = built(|b| {
        b.set(&field_path!("a", "b", "c", "d"), 42i64).unwrap();
    });
    assert_eq!(
        doc.get(&field_path!("a", "b", "c", "d")),
        Some(&Value::Integer(42))
    );
}

#[test]
fn test_set_is_idempotent() {
    let once = built(|b| {
        b.set(&field_path!("a", "b"), 1i64).unwrap();
    });
    let twice = built(|b| {
        b.set(&field_path!("a", "b"), 1i64).unwrap();
        b.set(&field_path!("a", "b"), 1i64).unwrap();
    });
    assert_eq!(once, twice);
}

#[test]
fn test_set_converts_each_non_map_along_the_path() {
    // Both `a` and what would be `a.b` hold scalars; a deep set replaces the
    // whole chain with maps.
    let doc = built(|b| {
        b.set(&field_path!("a"), 1i64).unwrap();
        b.set(&field_path!("a", "b"), 2i64).unwrap();
        b.set(&field_path!("a", "b", "c"), 3i64).unwrap();
    });
    assert_eq!(
        doc.get(&field_path!("a", "b", "c")),
        Some(&Value::Integer(3))
    );
    assert!(doc.get(&field_path!("a")).unwrap().is_map());
    assert!(doc.get(&field_path!("a", "b")).unwrap().is_map());
}

#[test]
fn test_set_replaces_array_like_any_other_value() {
    let doc = built(|b| {
        b.set(
            &field_path!("a"),
            Value::Array([Value::from(1i64)].into_iter().collect()),
        )
        .unwrap();
        b.set(&field_path!("a", "b"), 2i64).unwrap();
    });
    // The array was discarded, not descended into.
    assert!(doc.get(&field_path!("a")).unwrap().is_map());
    assert_eq!(doc.get(&field_path!("a", "b")), Some(&Value::Integer(2)));
}

#[test]
fn test_last_set_wins() {
    let doc = built(|b| {
        b.set(&field_path!("x"), 1i64).unwrap();
        b.set(&field_path!("x"), 2i64).unwrap();
        b.set(&field_path!("x"), 3i64).unwrap();
    });
    assert_eq!(doc.get(&field_path!("x")), Some(&Value::Integer(3)));
}

// ============================================================================
// delete edge cases
// ============================================================================

#[test]
fn test_delete_then_get_is_absent() {
    let doc = built(|b| {
        b.set(&field_path!("a", "b"), 1i64).unwrap();
        b.delete(&field_path!("a", "b")).unwrap();
    });
    assert_eq!(doc.get(&field_path!("a", "b")), None);
}

#[test]
fn test_delete_through_scalar_changes_nothing() {
    let doc = built(|b| {
        b.set(&field_path!("a"), 1i64).unwrap();
        b.delete(&field_path!("a", "b")).unwrap();
    });
    assert_eq!(doc.get(&field_path!("a")), Some(&Value::Integer(1)));
}

#[test]
fn test_delete_keeps_siblings() {
    let doc = built(|b| {
        b.set(&field_path!("a", "b"), 1i64).unwrap();
        b.set(&field_path!("a", "c"), 2i64).unwrap();
        b.delete(&field_path!("a", "b")).unwrap();
    });
    assert_eq!(doc.get(&field_path!("a", "b")), None);
    assert_eq!(doc.get(&field_path!("a", "c")), Some(&Value::Integer(2)));
}

#[test]
fn test_delete_never_prunes_emptied_maps() {
    let doc = built(|b| {
        b.set(&field_path!("a", "b", "c"), 1i64).unwrap();
        b.delete(&field_path!("a", "b", "c")).unwrap();
    });
    // `a` and `a.b` survive as (now empty) maps.
    assert_eq!(doc.get(&field_path!("a", "b")), Some(&Value::empty_map()));
    // And the emptied map shows up in the mask as its own leaf.
    assert_eq!(
        doc.field_mask(),
        FieldMask::from_paths([field_path!("a", "b")])
    );
}

#[test]
fn test_interleaved_set_and_delete() {
    let doc = built(|b| {
        b.set(&field_path!("a", "b"), 1i64).unwrap();
        b.delete(&field_path!("a", "b")).unwrap();
        b.set(&field_path!("a", "b"), 2i64).unwrap();
    });
    assert_eq!(doc.get(&field_path!("a", "b")), Some(&Value::Integer(2)));
}

// ============================================================================
// read-path edge cases
// ============================================================================

#[test]
fn test_get_root_of_empty_document() {
    let doc = DocumentValue::empty();
    assert_eq!(doc.get(&FieldPath::root()), Some(&Value::empty_map()));
}

#[test]
fn test_get_prefix_of_deeper_data() {
    let doc = built(|b| {
        b.set(&field_path!("a", "b", "c"), 1i64).unwrap();
    });
    // A strict prefix resolves to the intermediate map.
    assert!(doc.get(&field_path!("a", "b")).unwrap().is_map());
    // A path longer than the data is absent, uniformly.
    assert_eq!(doc.get(&field_path!("a", "b", "c", "d")), None);
}

#[test]
fn test_absence_is_uniform_across_shapes() {
    let doc = built(|b| {
        b.set(&field_path!("scalar"), 1i64).unwrap();
        b.set(&field_path!("map", "x"), 1i64).unwrap();
    });
    // Missing key, wrong-shape intermediate, missing nested key: all None.
    assert_eq!(doc.get(&field_path!("missing")), None);
    assert_eq!(doc.get(&field_path!("scalar", "x")), None);
    assert_eq!(doc.get(&field_path!("map", "y")), None);
}

// ============================================================================
// field mask edge cases
// ============================================================================

#[test]
fn test_mask_matches_spec_example() {
    // {"a": {"b": 1, "c": {}}, "d": 2} -> {a.b, a.c, d}
    let doc = built(|b| {
        b.set(&field_path!("a", "b"), 1i64).unwrap();
        b.set(&field_path!("a", "c"), Value::empty_map()).unwrap();
        b.set(&field_path!("d"), 2i64).unwrap();
    });
    assert_eq!(
        doc.field_mask(),
        FieldMask::from_paths([
            field_path!("a", "b"),
            field_path!("a", "c"),
            field_path!("d"),
        ])
    );
}

#[test]
fn test_mask_never_contains_intermediate_paths() {
    let doc = built(|b| {
        b.set(&field_path!("a", "b", "c"), 1i64).unwrap();
    });
    let mask = doc.field_mask();
    assert!(mask.contains(&field_path!("a", "b", "c")));
    assert!(!mask.contains(&field_path!("a")));
    assert!(!mask.contains(&field_path!("a", "b")));
    assert_eq!(mask.len(), 1);
}

#[test]
fn test_mask_counts_explicit_null_as_assigned() {
    let doc = built(|b| {
        b.set(&field_path!("gone"), Value::Null).unwrap();
    });
    assert_eq!(doc.field_mask(), FieldMask::from_paths([field_path!("gone")]));
}

#[test]
fn test_mask_after_overwriting_map_with_scalar() {
    let doc = built(|b| {
        b.set(&field_path!("a", "b"), 1i64).unwrap();
        b.set(&field_path!("a"), 7i64).unwrap();
    });
    assert_eq!(doc.field_mask(), FieldMask::from_paths([field_path!("a")]));
}

// ============================================================================
// builder lineage
// ============================================================================

#[test]
fn test_building_never_mutates_the_source_document() {
    let doc1 = built(|b| {
        b.set(&field_path!("keep"), 1i64).unwrap();
    });
    let mut builder = doc1.to_builder();
    builder.set(&field_path!("x"), 1i64).unwrap();
    builder.delete(&field_path!("keep")).unwrap();
    let doc2 = builder.build();

    assert_eq!(doc1.get(&field_path!("x")), None);
    assert_eq!(doc1.get(&field_path!("keep")), Some(&Value::Integer(1)));
    assert_eq!(doc2.get(&field_path!("x")), Some(&Value::Integer(1)));
    assert_eq!(doc2.get(&field_path!("keep")), None);
}

#[test]
fn test_successive_builders_from_one_document() {
    let base = built(|b| {
        b.set(&field_path!("n"), 0i64).unwrap();
    });

    let mut b1 = base.to_builder();
    b1.set(&field_path!("n"), 1i64).unwrap();
    let v1 = b1.build();

    let mut b2 = base.to_builder();
    b2.set(&field_path!("n"), 2i64).unwrap();
    let v2 = b2.build();

    assert_eq!(base.get(&field_path!("n")), Some(&Value::Integer(0)));
    assert_eq!(v1.get(&field_path!("n")), Some(&Value::Integer(1)));
    assert_eq!(v2.get(&field_path!("n")), Some(&Value::Integer(2)));
}

#[test]
fn test_builder_round_trip_is_identity() {
    let doc = built(|b| {
        b.set(&field_path!("a", "b"), 1i64).unwrap();
        b.set(&field_path!("c"), Value::Null).unwrap();
        b.set(&field_path!("d"), "s").unwrap();
    });
    assert_eq!(doc.to_builder().build(), doc);
}
