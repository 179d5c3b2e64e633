//! Sample records and the column set shown by the demo.

use tabula::prelude::*;
use tabula::row;
use tabula_dom::{Element, Size, Style, TextWrap};

pub fn sample_users() -> Vec<Row> {
    vec![
        row! { "id" => 1, "name" => "Ada Lovelace", "email" => "ada@example.com", "role" => "Admin", "status" => "active", "salary" => 98000, "joined" => "2019-03-14" },
        row! { "id" => 2, "name" => "Grace Hopper", "email" => "grace@example.com", "role" => "Engineer", "status" => "active", "salary" => 105000, "joined" => "2018-07-02" },
        row! { "id" => 3, "name" => "Alan Turing", "email" => "alan@example.com", "role" => "Engineer", "status" => "away", "salary" => 101500, "joined" => "2020-01-20" },
        row! { "id" => 4, "name" => "Katherine Johnson", "email" => "katherine@example.com", "role" => "Analyst", "status" => "active", "salary" => 87000, "joined" => "2021-11-08" },
        row! { "id" => 5, "name" => "Edsger Dijkstra", "email" => "edsger@example.com", "role" => "Engineer", "status" => "inactive", "salary" => Value::Null, "joined" => "2017-05-30" },
        row! { "id" => 6, "name" => "Barbara Liskov", "email" => "barbara@example.com", "role" => "Manager", "status" => "active", "salary" => 120000, "joined" => "2016-09-12" },
        row! { "id" => 7, "name" => "Donald Knuth", "email" => Value::Null, "role" => "Analyst", "status" => "away", "salary" => 93250, "joined" => "2022-02-01" },
        row! { "id" => 8, "name" => "Margaret Hamilton", "email" => "margaret@example.com", "role" => "Manager", "status" => "active", "salary" => 118000, "joined" => "2015-04-18" },
    ]
}

pub fn user_columns() -> Vec<Column<Row>> {
    vec![
        Column::new("id", "ID", "id")
            .sortable()
            .align(Alignment::Right)
            .width(ColumnWidth::Fixed(6)),
        Column::new("name", "Name", "name").sortable().width(ColumnWidth::Flex(2)),
        Column::new("email", "Email", "email").width(ColumnWidth::Flex(3)),
        Column::new("role", "Role", "role").sortable().width(ColumnWidth::Fixed(10)),
        Column::new("status", "Status", "status")
            .sortable()
            .width(ColumnWidth::Fixed(10))
            .render(status_cell),
        Column::new("salary", "Salary", "salary")
            .sortable()
            .align(Alignment::Right)
            .width(ColumnWidth::Fixed(10)),
        Column::new("joined", "Joined", "joined")
            .sortable()
            .align(Alignment::Center)
            .width(ColumnWidth::Fixed(12)),
    ]
}

fn status_cell(value: &Value, _row: &Row, _index: usize) -> Element {
    let color = match value.as_str() {
        Some("active") => "primary",
        Some("inactive") => "error",
        _ => "muted",
    };
    Element::text(format!("● {value}"))
        .width(Size::Fill)
        .text_wrap(TextWrap::Truncate)
        .style(Style::fg(color))
}

/// Rows where any field contains `query`, ignoring case.
pub fn filter_rows(rows: &[Row], query: &str) -> Vec<Row> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| {
            row.values()
                .any(|value| value.to_string().to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}
