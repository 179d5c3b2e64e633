//! The interactive demo: a search box over a user table.

use std::time::Duration;

use tabula::prelude::*;
use tabula_dom::event::translate;
use tabula_dom::{
    DefaultTheme, Edges, Element, Event, FocusState, Key, Modifiers, MouseButton, Size,
    Style, Terminal,
};

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::users;

const SEARCH_ID: &str = "search";
const LOAD_ERROR: &str = "The user directory did not respond. Press e to retry.";
const HELP: &str =
    "tab focus · l loading · e error · m selection · z size · t stripes · q quit";

/// Everything the props borrow from. Kept apart from the components so a
/// handler can hold `&mut DataTable` while props borrow this.
struct DemoState {
    users: Vec<Row>,
    columns: Vec<Column<Row>>,
    selected: Vec<Row>,
    query: String,
    table: TableOptions,
    search: InputOptions,
    loading: bool,
    error: bool,
}

impl DemoState {
    fn visible_rows(&self) -> Vec<Row> {
        users::filter_rows(&self.users, &self.query)
    }

    fn table_props<'a>(&'a self, rows: &'a [Row]) -> DataTableProps<'a, Row> {
        let props = DataTableProps::new(rows, &self.columns)
            .options(&self.table)
            .key_field("id")
            .loading(self.loading)
            .selected_rows(&self.selected);
        if self.error {
            props.error(LOAD_ERROR)
        } else {
            props
        }
    }

    fn search_props(&self) -> InputFieldProps<'_> {
        InputFieldProps::new()
            .options(&self.search)
            .id(SEARCH_ID)
            .label("Search")
            .placeholder("Filter by any field")
            .value(&self.query)
            .disabled(self.loading)
    }
}

pub struct App {
    state: DemoState,
    table: DataTable,
    search: InputField,
    focus: FocusState,
    status: String,
    quit: bool,
}

impl App {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            state: DemoState {
                users: users::sample_users(),
                columns: users::user_columns(),
                selected: Vec::new(),
                query: String::new(),
                table: config.table,
                search: config.search,
                loading: false,
                error: false,
            },
            table: DataTable::with_id(TableId::new("users")),
            search: InputField::new(),
            focus: FocusState::new(),
            status: String::from("Ready"),
            quit: false,
        }
    }

    pub fn run(mut self) -> Result<(), DemoError> {
        let mut terminal = Terminal::new()?;
        let theme = DefaultTheme::new();

        while !self.quit {
            let root = self.view();
            self.focus.retain_in(&root);
            self.sync_search_focus();
            terminal.render(&root, &theme)?;

            for raw in terminal.poll(Duration::from_millis(100))? {
                let Some(event) = translate(&raw, &root, terminal.layout(), self.focus.focused())
                else {
                    continue;
                };
                self.handle(event, &root);
            }
        }

        log::info!("demo closed");
        Ok(())
    }

    fn view(&self) -> Element {
        let rows = self.state.visible_rows();
        let table = self.table.view(&self.state.table_props(&rows));
        let search = self.search.view(&self.state.search_props());

        let summary = format!(
            "{} · {} of {} users · {} selected",
            self.status,
            rows.len(),
            self.state.users.len(),
            self.state.selected.len()
        );

        Element::col()
            .id("app")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::all(1))
            .gap(1)
            .style(Style::bg("background"))
            .child(
                Element::text("Users")
                    .style(Style::fg("primary").bold()),
            )
            .child(search)
            .child(table)
            .child(Element::text(summary).style(Style::fg("foreground")))
            .child(Element::text(HELP).style(Style::fg("muted")))
    }

    fn handle(&mut self, event: Event, root: &Element) {
        match event {
            Event::Key { target, key, modifiers } => {
                self.on_key(target.as_deref(), key, modifiers, root);
            }
            Event::Click {
                target,
                button: MouseButton::Left,
                ..
            } => self.on_click(target.as_deref(), root),
            Event::MouseMove { target, .. } => {
                self.table.on_mouse_move(target.as_deref());
            }
            _ => {}
        }
    }

    fn on_key(&mut self, target: Option<&str>, key: Key, modifiers: Modifiers, root: &Element) {
        if modifiers.ctrl && key == Key::Char('c') {
            self.quit = true;
            return;
        }

        match key {
            Key::Tab => {
                self.focus.focus_next(root);
                self.sync_search_focus();
                return;
            }
            Key::BackTab => {
                self.focus.focus_prev(root);
                self.sync_search_focus();
                return;
            }
            Key::Escape => {
                self.focus.blur();
                self.sync_search_focus();
                return;
            }
            _ => {}
        }

        if let Some(target) = target {
            let handled = if target == SEARCH_ID {
                self.with_search(|input, props| input.on_key(props, target, key, modifiers))
            } else {
                self.with_table(|table, props| table.on_key(props, target, key))
            };
            if handled.is_handled() {
                return;
            }
        }

        if let Key::Char(c) = key {
            self.on_command(c);
        }
    }

    fn on_command(&mut self, c: char) {
        match c {
            'q' => self.quit = true,
            'l' => {
                self.state.loading = !self.state.loading;
                self.status = format!("Loading {}", on_off(self.state.loading));
            }
            'e' => {
                self.state.error = !self.state.error;
                self.status = format!("Error {}", on_off(self.state.error));
            }
            'm' => {
                let mode = match self.state.table.selectable {
                    SelectionMode::None => SelectionMode::Single,
                    SelectionMode::Single => SelectionMode::Multiple,
                    SelectionMode::Multiple => SelectionMode::None,
                };
                self.state.table.selectable = mode;
                self.state.selected.clear();
                self.status = format!("Selection mode {mode:?}");
            }
            'z' => {
                let size = match self.state.table.size {
                    TableSize::Sm => TableSize::Md,
                    TableSize::Md => TableSize::Lg,
                    TableSize::Lg => TableSize::Sm,
                };
                self.state.table.size = size;
                self.status = format!("Size {size:?}");
            }
            't' => {
                self.state.table.striped = !self.state.table.striped;
                self.status = format!("Stripes {}", on_off(self.state.table.striped));
            }
            _ => return,
        }
        log::debug!("command {c}: {}", self.status);
    }

    fn on_click(&mut self, target: Option<&str>, root: &Element) {
        let Some(target) = target else {
            self.focus.blur();
            self.sync_search_focus();
            return;
        };

        if tabula_dom::find_element(root, target).is_some_and(|el| el.focusable) {
            self.focus.focus(target);
        }

        let handled = self.with_search(|input, props| input.on_click(props, target));
        if handled.is_handled() {
            self.focus.focus(SEARCH_ID);
        } else {
            self.with_table(|table, props| table.on_click(props, target));
        }
        self.sync_search_focus();
    }

    fn sync_search_focus(&mut self) {
        let focused = self.focus.focused().map(str::to_string);
        self.with_search(|input, props| input.on_focus_change(props, focused.as_deref()));
    }

    /// Run `f` against the search field with change callbacks wired back into
    /// the demo state.
    fn with_search<R>(&mut self, f: impl FnOnce(&mut InputField, &mut InputFieldProps<'_>) -> R) -> R {
        let mut changed = None;
        let result = {
            let mut props = self
                .state
                .search_props()
                .on_change(|value: &str| changed = Some(value.to_string()));
            f(&mut self.search, &mut props)
        };

        if let Some(query) = changed {
            log::debug!("search query {query:?}");
            self.state.query = query;
            self.table.on_mouse_move(None);
        }
        result
    }

    /// Run `f` against the table with its callbacks wired back into the demo
    /// state.
    fn with_table<R>(&mut self, f: impl FnOnce(&mut DataTable, &mut DataTableProps<'_, Row>) -> R) -> R {
        let rows = self.state.visible_rows();
        let mut selection = None;
        let mut sorted = None;
        let mut clicked = None;

        let result = {
            let mut props = self
                .state
                .table_props(&rows)
                .on_row_select(|picked: Vec<Row>| selection = Some(picked))
                .on_sort(|key: &str, direction| sorted = Some((key.to_string(), direction)))
                .on_row_click(|row: &Row, index| clicked = Some((row.field("name"), index)));
            f(&mut self.table, &mut props)
        };

        if let Some(picked) = selection {
            self.status = format!("Selected {} row(s)", picked.len());
            self.state.selected = picked;
        }
        if let Some((key, direction)) = sorted {
            self.status = format!("Sorted by {key} {}", direction.as_str());
        }
        if let Some((name, index)) = clicked {
            self.status = format!("Clicked {name} at row {}", index + 1);
        }
        result
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
