//! Event handling for the InputField component.

use tabula_dom::{Key, Modifiers};

use super::props::{InputFieldProps, InputKind};
use super::InputField;
use crate::events::EventResult;

impl InputField {
    /// Handle a key press targeted at `target`.
    pub fn on_key(
        &mut self,
        props: &mut InputFieldProps<'_>,
        target: &str,
        key: Key,
        modifiers: Modifiers,
    ) -> EventResult {
        if target != self.element_id(props) || !props.interactive() {
            return EventResult::Ignored;
        }
        // Only handle keys without modifiers (except Shift)
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        let value = self.value(props).to_string();
        let len = value.chars().count();
        let cursor = self.cursor(props);

        match key {
            Key::Left => self.cursor = cursor.saturating_sub(1),
            Key::Right => self.cursor = (cursor + 1).min(len),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = len,
            Key::Char(c) if props.editable() => {
                let at = byte_offset(&value, cursor);
                let mut next = value;
                next.insert(at, c);
                self.cursor = cursor + 1;
                self.commit(props, next);
            }
            Key::Backspace if props.editable() => {
                if cursor == 0 {
                    return EventResult::Consumed;
                }
                let mut next = value;
                next.remove(byte_offset(&next, cursor - 1));
                self.cursor = cursor - 1;
                self.commit(props, next);
            }
            Key::Delete if props.editable() => {
                if cursor >= len {
                    return EventResult::Consumed;
                }
                let mut next = value;
                next.remove(byte_offset(&next, cursor));
                self.cursor = cursor;
                self.commit(props, next);
            }
            // Read-only inputs swallow edits but keep focus
            Key::Char(_) | Key::Backspace | Key::Delete => {}
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    /// Handle a click on the element with id `target`.
    pub fn on_click(&mut self, props: &mut InputFieldProps<'_>, target: &str) -> EventResult {
        let id = self.element_id(props);
        if !props.interactive() {
            return EventResult::Ignored;
        }

        if target == format!("{id}:clear") {
            self.clear(props);
            return EventResult::Consumed;
        }
        if target == format!("{id}:toggle") {
            self.toggle_password();
            return EventResult::Consumed;
        }
        if target == id {
            self.focus(props);
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    /// Sync focus with the id the application reports as focused.
    pub fn on_focus_change(&mut self, props: &mut InputFieldProps<'_>, focused: Option<&str>) {
        if focused == Some(self.element_id(props).as_str()) {
            self.focus(props);
        } else {
            self.blur(props);
        }
    }

    pub fn focus(&mut self, props: &mut InputFieldProps<'_>) {
        if self.focused || !props.interactive() {
            return;
        }
        self.focused = true;
        if let Some(on_focus) = props.on_focus.as_mut() {
            on_focus();
        }
    }

    pub fn blur(&mut self, props: &mut InputFieldProps<'_>) {
        if !self.focused {
            return;
        }
        self.focused = false;
        if let Some(on_blur) = props.on_blur.as_mut() {
            on_blur();
        }
    }

    /// Empty the value and report `""` through `on_change`.
    pub fn clear(&mut self, props: &mut InputFieldProps<'_>) {
        if !props.editable() {
            return;
        }
        self.cursor = 0;
        self.commit(props, String::new());
    }

    /// Flip password visibility, returning the new state.
    pub fn toggle_password(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    /// Store the new value if uncontrolled, then report it.
    fn commit(&mut self, props: &mut InputFieldProps<'_>, next: String) {
        if props.value.is_none() {
            self.internal.clone_from(&next);
        }
        if let Some(on_change) = props.on_change.as_mut() {
            on_change(&next);
        }
    }

    pub(crate) fn masks_value(&self, props: &InputFieldProps<'_>) -> bool {
        props.kind == InputKind::Password && !self.show_password
    }
}

/// Byte offset of the char at `index`, or the end of `s`.
fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(at, _)| at)
}
