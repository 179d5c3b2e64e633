use std::cmp::Ordering;
use std::collections::HashMap;

use serde_json::json;
use tabula::prelude::*;

#[test]
fn test_numbers_compare_across_int_and_float() {
    assert_eq!(Value::Int(2).natural_cmp(&Value::Float(2.5)), Ordering::Less);
    assert_eq!(Value::Float(3.0).natural_cmp(&Value::Int(3)), Ordering::Equal);
    assert_eq!(Value::Int(10).natural_cmp(&Value::Int(9)), Ordering::Greater);
}

#[test]
fn test_mixed_kinds_have_a_total_order() {
    let ordered = [Value::Bool(true), Value::Int(-5), Value::from("a")];
    for pair in ordered.windows(2) {
        assert_eq!(pair[0].natural_cmp(&pair[1]), Ordering::Less, "{pair:?}");
    }
    assert_eq!(Value::Bool(false).natural_cmp(&Value::Bool(true)), Ordering::Less);
}

#[test]
fn test_nan_orders_after_numbers_before_text() {
    let nan = Value::Float(f64::NAN);
    assert_eq!(nan.natural_cmp(&Value::Int(1)), Ordering::Greater);
    assert_eq!(Value::Float(f64::INFINITY).natural_cmp(&nan), Ordering::Less);
    assert_eq!(nan.natural_cmp(&Value::Float(f64::NAN)), Ordering::Equal);
    assert_eq!(nan.natural_cmp(&Value::from("a")), Ordering::Less);
}

#[test]
fn test_sort_with_nan_keeps_numbers_monotone() {
    let rows: Vec<Row> = (0..200)
        .map(|i| {
            let value = if i % 7 == 0 { f64::NAN } else { ((i * 37) % 101) as f64 - 50.0 };
            row! { "id" => i, "score" => value }
        })
        .collect();
    let columns = vec![Column::new("score", "Score", "score").sortable()];

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let sorted = sort_rows(&rows, &columns, &SortState::new("score", direction));
        let scores: Vec<f64> = sorted.iter().filter_map(|r| r.field("score").as_f64()).collect();
        let numbers: Vec<f64> = scores.iter().copied().filter(|x| !x.is_nan()).collect();

        assert_eq!(sorted.len(), rows.len());
        assert_eq!(numbers.len(), 200 - 29);
        let monotone = numbers.windows(2).all(|w| match direction {
            SortDirection::Ascending => w[0] <= w[1],
            SortDirection::Descending => w[0] >= w[1],
        });
        assert!(monotone, "{direction:?}: {numbers:?}");
    }
}

#[test]
fn test_display_stringifies_like_a_cell() {
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::Int(42).to_string(), "42");
    assert_eq!(Value::Float(85000.0).to_string(), "85000");
    assert_eq!(Value::Float(199.99).to_string(), "199.99");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::from("x").to_string(), "x");
}

#[test]
fn test_from_json() {
    assert_eq!(Value::from(json!(null)), Value::Null);
    assert_eq!(Value::from(json!(7)), Value::Int(7));
    assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
    assert_eq!(Value::from(json!("s")), Value::from("s"));
    assert_eq!(Value::from(json!([1, 2])), Value::from("[1,2]"));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(3)), Value::Int(3));
}

#[test]
fn test_value_deserializes_untagged() {
    let values: Vec<Value> = serde_json::from_str(r#"[null, true, 3, 2.5, "x"]"#).unwrap();
    assert_eq!(
        values,
        vec![
            Value::Null,
            Value::Bool(true),
            Value::Int(3),
            Value::Float(2.5),
            Value::from("x"),
        ]
    );
}

// ============================================================================
// Records
// ============================================================================

#[test]
fn test_missing_fields_read_as_null() {
    let row = row! { "a" => 1 };
    assert_eq!(row.field("a"), Value::Int(1));
    assert!(row.field("b").is_null());

    let mut map = HashMap::new();
    map.insert("a".to_string(), Value::from("x"));
    assert_eq!(map.field("a"), Value::from("x"));
    assert!(map.field("b").is_null());
}

#[test]
fn test_json_records() {
    let value = json!({ "id": 1, "name": "Ann", "tags": ["a"] });
    assert_eq!(value.field("id"), Value::Int(1));
    assert_eq!(value.field("missing"), Value::Null);

    let object = value.as_object().unwrap().clone();
    assert_eq!(object.field("name"), Value::from("Ann"));
    assert_eq!(object.field("tags"), Value::from(r#"["a"]"#));
}

#[test]
fn test_json_rows_sort_like_maps() {
    let rows: Vec<serde_json::Value> = vec![
        json!({ "name": "Bob" }),
        json!({ "name": null }),
        json!({ "name": "Ann" }),
    ];
    let cols = vec![Column::new("name", "Name", "name").sortable()];

    let sorted = sort_rows(&rows, &cols, &SortState::new("name", SortDirection::Ascending));
    let names: Vec<Value> = sorted.iter().map(|r| r.field("name")).collect();
    assert_eq!(names, vec![Value::from("Ann"), Value::from("Bob"), Value::Null]);
}
