use tabula::prelude::*;

fn user(id: i64, name: &str) -> Row {
    row! { "id" => id, "name" => name }
}

// ============================================================================
// Single mode
// ============================================================================

#[test]
fn test_single_selection_is_exclusive() {
    let a = user(1, "Ann");
    let b = user(2, "Bob");

    let none: Vec<Row> = Vec::new();
    let r = SelectionReconciler::new(SelectionMode::Single, Some("id"), &none);
    assert_eq!(r.toggle(&a), Some(vec![a.clone()]));

    let only_a = vec![a.clone()];
    let r = SelectionReconciler::new(SelectionMode::Single, Some("id"), &only_a);
    assert_eq!(r.toggle(&b), Some(vec![b.clone()]));

    let only_b = vec![b.clone()];
    let r = SelectionReconciler::new(SelectionMode::Single, Some("id"), &only_b);
    assert_eq!(r.toggle(&b), Some(vec![]));
}

#[test]
fn test_mode_none_has_no_toggle() {
    let a = user(1, "Ann");
    let r = SelectionReconciler::new(SelectionMode::None, None, &[]);
    assert_eq!(r.toggle(&a), None);
    assert!(!SelectionMode::None.is_enabled());
}

#[test]
fn test_selection_mode_from_bool() {
    assert_eq!(SelectionMode::from(true), SelectionMode::Single);
    assert_eq!(SelectionMode::from(false), SelectionMode::None);
}

// ============================================================================
// Multiple mode
// ============================================================================

#[test]
fn test_multiple_replace_reuses_single_rule() {
    let a = user(1, "Ann");
    let b = user(2, "Bob");
    let selected = vec![a.clone()];

    let r = SelectionReconciler::new(SelectionMode::Multiple, Some("id"), &selected);
    assert_eq!(r.toggle(&b), Some(vec![b.clone()]));
    assert_eq!(r.toggle(&a), Some(vec![]));
}

#[test]
fn test_multiple_accumulate_adds_and_removes() {
    let a = user(1, "Ann");
    let b = user(2, "Bob");
    let c = user(3, "Cid");
    let selected = vec![a.clone(), b.clone()];

    let r = SelectionReconciler::new(SelectionMode::Multiple, Some("id"), &selected)
        .with_multi(MultiSelect::Accumulate);
    assert_eq!(r.toggle(&c), Some(vec![a.clone(), b.clone(), c.clone()]));
    assert_eq!(r.toggle(&a), Some(vec![b.clone()]));
}

#[test]
fn test_accumulate_only_applies_to_multiple_mode() {
    let a = user(1, "Ann");
    let b = user(2, "Bob");
    let selected = vec![a.clone()];

    let r = SelectionReconciler::new(SelectionMode::Single, Some("id"), &selected)
        .with_multi(MultiSelect::Accumulate);
    assert_eq!(r.toggle(&b), Some(vec![b.clone()]));
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_key_field_matches_rows_with_other_differences() {
    let stale = vec![user(1, "Ann")];
    let fresh = user(1, "Ann Smith");

    let r = SelectionReconciler::new(SelectionMode::Single, Some("id"), &stale);
    assert!(r.is_selected(&fresh));
    assert_eq!(r.toggle(&fresh), Some(vec![]));
}

#[test]
fn test_without_key_field_uses_structural_equality() {
    let stale = vec![user(1, "Ann")];

    let r = SelectionReconciler::new(SelectionMode::Single, None, &stale);
    assert!(r.is_selected(&user(1, "Ann")));
    assert!(!r.is_selected(&user(1, "Ann Smith")));
}

#[test]
fn test_missing_key_field_falls_back_to_equality() {
    let selected = vec![row! { "name" => "Ann" }];

    let r = SelectionReconciler::new(SelectionMode::Single, Some("id"), &selected);
    assert!(r.is_selected(&row! { "name" => "Ann" }));
    assert!(!r.is_selected(&row! { "name" => "Bob" }));
}

#[test]
fn test_multi_select_serde_names() {
    let options: TableOptions =
        serde_json::from_str(r#"{ "selectable": "multiple", "multi_select": "accumulate" }"#).unwrap();
    assert_eq!(options.selectable, SelectionMode::Multiple);
    assert_eq!(options.multi_select, MultiSelect::Accumulate);
    assert!(options.hoverable);
    assert_eq!(options.size, TableSize::Md);
}
