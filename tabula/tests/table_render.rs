use tabula::data_table::{EMPTY_BODY, EMPTY_HEADING, ERROR_HEADING, SKELETON_ROWS};
use tabula::prelude::*;
use tabula::tabula_dom::{Color, Element, Rect, find_element, layout, render_to_string};

fn users() -> Vec<Row> {
    vec![
        row! { "id" => 1, "name" => "Bob", "email" => "bob@example.com" },
        row! { "id" => 2, "name" => "Ann", "email" => Value::Null },
        row! { "id" => 3, "name" => Value::Null },
    ]
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("id", "ID", "id").width(ColumnWidth::Fixed(5)),
        Column::new("name", "Name", "name").sortable(),
        Column::new("email", "Email", "email"),
    ]
}

// ============================================================================
// State priority
// ============================================================================

#[test]
fn test_loading_wins_over_error_and_empty() {
    let rows: Vec<Row> = Vec::new();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols).loading(true).error("x");
    let table = DataTable::new();

    assert_eq!(table.render_state(&props), RenderState::Loading);

    let text = render_to_string(&table.view(&props), 50, 12);
    assert!(text.contains('░'));
    assert!(!text.contains(ERROR_HEADING));
    assert!(!text.contains(EMPTY_HEADING));
}

#[test]
fn test_error_wins_over_empty() {
    let rows: Vec<Row> = Vec::new();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols).error("connection refused");
    let table = DataTable::new();

    assert_eq!(table.render_state(&props), RenderState::Error("connection refused"));

    let text = render_to_string(&table.view(&props), 50, 8);
    assert!(text.contains(ERROR_HEADING));
    assert!(text.contains("connection refused"));
    assert!(!text.contains(EMPTY_HEADING));
}

#[test]
fn test_empty_error_string_is_not_an_error() {
    let rows = users();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols).error("");
    let table = DataTable::new();

    assert_eq!(table.render_state(&props).name(), "populated");
}

#[test]
fn test_empty_panel() {
    let rows: Vec<Row> = Vec::new();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols);
    let table = DataTable::new();

    assert_eq!(table.render_state(&props), RenderState::Empty);
    let text = render_to_string(&table.view(&props), 50, 8);
    assert!(text.contains(EMPTY_HEADING));
    assert!(text.contains(EMPTY_BODY));
}

// ============================================================================
// Loading skeleton
// ============================================================================

#[test]
fn test_skeleton_has_five_rows_with_selection_column() {
    let rows = users();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols)
        .loading(true)
        .selectable(SelectionMode::Single);
    let table = DataTable::new();
    let root = table.view(&props);

    // header placeholder + body placeholders
    assert_eq!(root.child_elements().len(), SKELETON_ROWS + 1);
    for row in root.child_elements() {
        assert_eq!(row.child_elements().len(), cols.len() + 1);
    }
    assert!(!root.text_content().contains("Bob"));
}

#[test]
fn test_skeleton_rows_follow_size() {
    let rows = users();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols)
        .loading(true)
        .size(TableSize::Lg);
    let table = DataTable::new();
    let root = table.view(&props);

    let layout = layout(&root, Rect::from_size(60, 30));
    let first = &root.child_elements()[1];
    assert_eq!(layout[&first.id].height, 3);
}

// ============================================================================
// Populated
// ============================================================================

#[test]
fn test_populated_renders_header_and_rows_in_sort_order() {
    let rows = users();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols).sort_by("name");
    let table = DataTable::from_props(&props);

    let text = render_to_string(&table.view(&props), 60, 8);
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[1].contains("ID") && lines[1].contains("Name") && lines[1].contains("Email"));
    assert!(lines[2].contains("Ann"));
    assert!(lines[3].contains("Bob"));
    assert!(lines[3].contains("bob@example.com"));
    assert!(lines[4].contains('3'));
}

#[test]
fn test_null_fields_render_empty() {
    let rows = users();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols);
    let table = DataTable::new();
    let root = table.view(&props);

    let cell = find_element(&root, &table.id().cell(2, "name")).unwrap();
    assert_eq!(cell.text_content(), "");
    assert!(!root.text_content().contains("null"));
}

#[test]
fn test_huge_tables_render_into_a_small_viewport() {
    let cols = vec![Column::new("id", "ID", "id").sortable(), Column::new("name", "Name", "name")];

    for (count, size) in [(70_000, TableSize::Md), (30_000, TableSize::Lg)] {
        let rows: Vec<Row> = (0..count)
            .map(|i| row! { "id" => i, "name" => format!("user {i}") })
            .collect();
        let props = DataTableProps::new(&rows, &cols).size(size).selectable(true);
        let table = DataTable::new();

        let text = render_to_string(&table.view(&props), 40, 10);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(text.contains("user 0"), "{size:?}: {text}");
        assert!(!text.contains(&format!("user {}", count - 1)));
    }
}

#[test]
fn test_no_columns_renders() {
    let rows = users();
    let cols: Vec<Column<Row>> = Vec::new();
    let props = DataTableProps::new(&rows, &cols).selectable(true);
    let table = DataTable::new();

    let text = render_to_string(&table.view(&props), 20, 8);
    assert!(text.contains('□'));
}

#[test]
fn test_duplicate_keys_still_render() {
    let rows = users();
    let cols = vec![
        Column::new("name", "First", "name").sortable(),
        Column::new("name", "Second", "name"),
    ];
    let props = DataTableProps::new(&rows, &cols);
    let table = DataTable::new();

    let text = render_to_string(&table.view(&props), 40, 8);
    assert!(text.contains("First"));
    assert!(text.contains("Second"));
}

#[test]
fn test_custom_renderer_output_is_used_verbatim() {
    let rows = users();
    let cols = vec![
        Column::<Row>::new("name", "Name", "name")
            .render(|value, row, index| {
                Element::text(format!("{index}:{value}:{}", row.field("id"))).id(format!("custom-{index}"))
            }),
    ];
    let props = DataTableProps::new(&rows, &cols);
    let table = DataTable::new();
    let root = table.view(&props);

    let custom = find_element(&root, "custom-1").unwrap();
    assert_eq!(custom.text_content(), "1:Ann:2");
    assert_eq!(find_element(&root, "custom-2").unwrap().text_content(), "2::3");
}

#[test]
fn test_header_indicators() {
    let rows = users();
    let cols = columns();
    let table = DataTable::new();

    let unsorted = DataTableProps::new(&rows, &cols);
    let root = table.view(&unsorted);
    let name = find_element(&root, &table.id().header("name")).unwrap();
    assert!(name.clickable && name.focusable);
    assert!(name.text_content().contains('↕'));
    assert_eq!(name.get_data("aria-sort").map(String::as_str), Some("none"));

    let id = find_element(&root, &table.id().header("id")).unwrap();
    assert!(!id.clickable);
    assert_eq!(id.text_content(), "ID");

    let desc = DataTableProps::new(&rows, &cols)
        .sort_by("name")
        .sort_order(SortDirection::Descending);
    let root = table.view(&desc);
    let name = find_element(&root, &table.id().header("name")).unwrap();
    assert!(name.text_content().contains('▼'));
    assert_eq!(name.get_data("aria-sort").map(String::as_str), Some("descending"));
}

#[test]
fn test_selection_controls_reflect_selected_rows() {
    let rows = users();
    let cols = columns();
    let selected = vec![row! { "id" => 2 }];
    let props = DataTableProps::new(&rows, &cols)
        .key_field("id")
        .selectable(SelectionMode::Multiple)
        .selected_rows(&selected);
    let table = DataTable::new();
    let root = table.view(&props);

    let control = |i: usize| find_element(&root, &table.id().select(i)).unwrap().text_content();
    assert_eq!(control(0), "□");
    assert_eq!(control(1), "■");
    assert_eq!(control(2), "□");

    let row = find_element(&root, &table.id().row(1)).unwrap();
    assert_eq!(row.style.background, Some(Color::var("selection")));
}

#[test]
fn test_no_selection_controls_when_disabled() {
    let rows = users();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols);
    let table = DataTable::new();
    let root = table.view(&props);

    assert!(find_element(&root, &table.id().select(0)).is_none());
    assert!(!root.text_content().contains('□'));
}

#[test]
fn test_striped_and_hover_backgrounds() {
    let rows = users();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols).striped(true);
    let mut table = DataTable::new();

    let root = table.view(&props);
    let bg = |root: &Element, i: usize| {
        find_element(root, &table.id().row(i)).unwrap().style.background.clone()
    };
    assert_eq!(bg(&root, 0), None);
    assert_eq!(bg(&root, 1), Some(Color::var("surface")));

    let row_id = table.id().row(0);
    assert!(table.on_mouse_move(Some(&row_id)));
    let root = table.view(&props);
    assert_eq!(
        find_element(&root, &table.id().row(0)).unwrap().style.background,
        Some(Color::var("hover"))
    );

    let not_hoverable = DataTableProps::new(&rows, &cols).hoverable(false);
    let root = table.view(&not_hoverable);
    assert_eq!(find_element(&root, &table.id().row(0)).unwrap().style.background, None);
}

#[test]
fn test_large_rows_are_three_lines() {
    let rows = users();
    let cols = columns();
    let props = DataTableProps::new(&rows, &cols).size(TableSize::Lg);
    let table = DataTable::new();
    let root = table.view(&props);

    let layout = layout(&root, Rect::from_size(60, 20));
    assert_eq!(layout[&table.id().row(0)].height, 3);
    assert_eq!(layout[&table.id().part("header")].height, 3);
}

#[test]
fn test_options_apply_to_props() {
    let rows = users();
    let cols = columns();
    let options = TableOptions {
        size: TableSize::Sm,
        striped: true,
        hoverable: false,
        selectable: SelectionMode::Single,
        multi_select: MultiSelect::Replace,
    };
    let props = DataTableProps::new(&rows, &cols).options(&options).class("users");

    assert_eq!(props.size, TableSize::Sm);
    assert!(props.striped && !props.hoverable);
    assert_eq!(props.selectable, SelectionMode::Single);

    let table = DataTable::new();
    assert_eq!(
        table.view(&props).get_data("class").map(String::as_str),
        Some("users")
    );
}
