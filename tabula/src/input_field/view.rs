//! Element tree for the input.

use tabula_dom::{Align, Border, Color, Direction, Edges, Element, Size, Style, TextWrap};

use super::props::{InputFieldProps, InputKind, InputVariant};
use super::InputField;

const MASK: char = '•';
const SPINNER: &str = "⟳";
const CLEAR: &str = "×";

impl InputField {
    /// Build the element tree for the current props.
    pub fn view(&self, props: &InputFieldProps<'_>) -> Element {
        let id = self.element_id(props);

        let mut root = Element::col()
            .id(format!("{id}:root"))
            .width(Size::Fill)
            .data("type", props.kind.as_str());
        if let Some(class) = props.class {
            root = root.data("class", class);
        }

        if let Some(label) = props.label {
            root = root.child(self.label(props, &id, label));
        }

        root = root.child(self.input_box(props, &id));

        if let Some(message) = props.message() {
            let color = if props.error_text().is_some() { "error" } else { "muted" };
            root = root.child(
                Element::text(message)
                    .id(format!("{id}:message"))
                    .width(Size::Fill)
                    .text_wrap(TextWrap::WordWrap)
                    .style(Style::fg(color)),
            );
        }

        root
    }

    fn label(&self, props: &InputFieldProps<'_>, id: &str, label: &str) -> Element {
        let color = if props.disabled {
            "muted"
        } else if props.has_error() {
            "error"
        } else {
            "foreground"
        };

        let mut row = Element::row().id(format!("{id}:label")).width(Size::Fill).child(
            Element::text(label).style(Style::fg(color).bold()),
        );
        if props.required {
            row = row.child(Element::text(" *").style(Style::fg("error")));
        }
        row
    }

    fn input_box(&self, props: &InputFieldProps<'_>, id: &str) -> Element {
        let border_color = if props.has_error() {
            "error"
        } else if self.focused {
            "primary"
        } else {
            match props.variant {
                InputVariant::Outlined => "border",
                InputVariant::Filled => "surface",
                InputVariant::Ghost => "background",
            }
        };

        let mut style = Style::new()
            .border(Border::Rounded)
            .border_color(Color::var(border_color));
        if props.variant == InputVariant::Filled || props.read_only {
            style = style.background(Color::var("surface"));
        }

        let mut input = Element::box_()
            .id(id)
            .direction(Direction::Row)
            .width(Size::Fill)
            .height(Size::Fixed(3))
            .padding(Edges::horizontal(props.size.padding()))
            .gap(1)
            .align(Align::Center)
            .clickable(true)
            .focusable(true)
            .disabled(props.disabled || props.loading)
            .role("textbox")
            .style(style)
            .data("aria-invalid", props.has_error().to_string())
            .data("aria-required", props.required.to_string())
            .data("readonly", props.read_only.to_string())
            .child(self.text_area(props, id));

        if let Some(name) = props.name {
            input = input.data("name", name);
        }

        if props.loading {
            input = input.child(
                Element::text(SPINNER)
                    .id(format!("{id}:spinner"))
                    .role("status")
                    .style(Style::fg("muted")),
            );
        }

        if props.show_clear_button && !self.value(props).is_empty() && !props.loading {
            input = input.child(
                Element::text(CLEAR)
                    .id(format!("{id}:clear"))
                    .clickable(true)
                    .disabled(props.disabled)
                    .role("button")
                    .data("aria-label", "Clear input")
                    .style(Style::fg("muted")),
            );
        }

        if props.show_password_toggle && props.kind == InputKind::Password && !props.loading {
            let (label, aria) = if self.show_password {
                ("hide", "Hide password")
            } else {
                ("show", "Show password")
            };
            input = input.child(
                Element::text(label)
                    .id(format!("{id}:toggle"))
                    .clickable(true)
                    .disabled(props.disabled)
                    .role("button")
                    .data("aria-label", aria)
                    .style(Style::fg("muted")),
            );
        }

        input
    }

    /// Value (masked for passwords) or placeholder, with a cursor block when
    /// focused.
    fn text_area(&self, props: &InputFieldProps<'_>, id: &str) -> Element {
        let value = self.value(props);
        let shown: String = if self.masks_value(props) {
            value.chars().map(|_| MASK).collect()
        } else {
            value.to_string()
        };

        let area = Element::row().id(format!("{id}:text")).width(Size::Fill);

        if shown.is_empty() && !self.focused {
            let placeholder = props.placeholder.unwrap_or_default();
            return area.child(
                Element::text(placeholder)
                    .width(Size::Fill)
                    .text_wrap(TextWrap::Truncate)
                    .style(Style::fg("muted").dim()),
            );
        }

        let text_style = if props.disabled {
            Style::fg("muted").dim()
        } else {
            Style::fg("foreground")
        };

        if !self.focused {
            return area.child(
                Element::text(shown)
                    .width(Size::Fill)
                    .text_wrap(TextWrap::Truncate)
                    .style(text_style),
            );
        }

        let cursor = self.cursor(props);
        let before: String = shown.chars().take(cursor).collect();
        let at: String = shown.chars().nth(cursor).map_or_else(|| " ".to_string(), String::from);
        let after: String = shown.chars().skip(cursor + 1).collect();

        let cursor_style = text_style.clone().background(Color::var("primary")).bold();

        area.child(Element::text(before).style(text_style.clone()))
            .child(Element::text(at).id(format!("{id}:cursor")).style(cursor_style))
            .child(Element::text(after).width(Size::Fill).style(text_style))
    }
}
