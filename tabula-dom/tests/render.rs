use tabula_dom::{
    layout, render_to_buffer, render_to_string, Border, Buffer, Cell, Color, DefaultTheme, Element, Rect,
    Rgb, Size, Style, TextAlign, TextWrap, Theme,
};

struct FlatTheme {
    surface: Color,
}

impl Theme for FlatTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        (name == "surface").then_some(&self.surface)
    }
}

fn render(root: &Element, width: u16, height: u16, theme: &dyn Theme) -> Buffer {
    let layout = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut buf, theme);
    buf
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_text_renders_at_origin() {
    let root = Element::text("Hello").id("t");
    assert_eq!(render_to_string(&root, 10, 1), "Hello");
}

#[test]
fn test_text_alignment() {
    let right = Element::text("ab").width(Size::Fill).text_align(TextAlign::Right);
    assert_eq!(render_to_string(&right, 6, 1), "    ab");

    let center = Element::text("ab").width(Size::Fill).text_align(TextAlign::Center);
    assert_eq!(render_to_string(&center, 6, 1), "  ab");
}

#[test]
fn test_truncate_adds_ellipsis() {
    let root = Element::row().width(Size::Fill).height(Size::Fixed(1)).child(
        Element::text("alice@example.com")
            .width(Size::Fixed(8))
            .text_wrap(TextWrap::Truncate),
    );
    assert_eq!(render_to_string(&root, 20, 1), "alice@e…");
}

#[test]
fn test_nowrap_is_clipped_to_cell() {
    let root = Element::row()
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .child(Element::text("abcdef").width(Size::Fixed(3)))
        .child(Element::text("XYZ").width(Size::Fixed(3)));
    assert_eq!(render_to_string(&root, 10, 1), "abcXYZ");
}

#[test]
fn test_word_wrap_uses_height() {
    let root = Element::text("no records here")
        .width(Size::Fixed(10))
        .height(Size::Fixed(2))
        .text_wrap(TextWrap::WordWrap);
    assert_eq!(render_to_string(&root, 10, 2), "no records\nhere");
}

// ============================================================================
// Borders and backgrounds
// ============================================================================

#[test]
fn test_rounded_border() {
    let root = Element::col()
        .width(Size::Fixed(6))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Rounded))
        .child(Element::text("ok"));

    assert_eq!(render_to_string(&root, 6, 3), "╭────╮\n│ok  │\n╰────╯");
}

#[test]
fn test_children_are_clipped_inside_border() {
    let root = Element::col()
        .width(Size::Fixed(5))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Single))
        .child(Element::text("toolong"));

    assert_eq!(render_to_string(&root, 5, 3), "┌───┐\n│too│\n└───┘");
}

#[test]
fn test_background_resolves_theme_variable() {
    let theme = FlatTheme {
        surface: Color::rgb(10, 20, 30),
    };
    let root = Element::box_()
        .width(Size::Fixed(2))
        .height(Size::Fixed(1))
        .style(Style::bg("surface"));

    let buf = render(&root, 4, 1, &theme);
    assert_eq!(buf.get(0, 0).and_then(|c| c.bg), Some(Rgb::new(10, 20, 30)));
    assert_eq!(buf.get(1, 0).and_then(|c| c.bg), Some(Rgb::new(10, 20, 30)));
    assert_eq!(buf.get(2, 0).and_then(|c| c.bg), None);
}

#[test]
fn test_unknown_variable_falls_back_to_black() {
    let theme = FlatTheme {
        surface: Color::rgb(1, 1, 1),
    };
    let root = Element::box_()
        .width(Size::Fixed(1))
        .height(Size::Fixed(1))
        .style(Style::bg("nope"));

    let buf = render(&root, 1, 1, &theme);
    assert_eq!(buf.get(0, 0).and_then(|c| c.bg), Some(Rgb::default()));
}

#[test]
fn test_text_keeps_parent_background() {
    let root = Element::row()
        .width(Size::Fixed(4))
        .height(Size::Fixed(1))
        .style(Style::new().background(Color::rgb(5, 5, 5)))
        .child(Element::text("ab"));

    let buf = render(&root, 4, 1, &DefaultTheme::new());
    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.char, 'a');
    assert_eq!(cell.bg, Some(Color::rgb(5, 5, 5).to_rgb()));
}

#[test]
fn test_default_theme_resolves_component_slots() {
    let theme = DefaultTheme::new();
    for name in [
        "background", "foreground", "surface", "border", "primary", "muted", "error", "selection", "hover",
    ] {
        assert!(theme.resolve(name).is_some(), "{name}");
    }
    assert!(theme.resolve("unknown").is_none());
}

#[test]
fn test_oklch_converts_to_rgb() {
    let white = Color::oklch(1.0, 0.0, 0.0).to_rgb();
    assert!(white.r >= 254 && white.g >= 254 && white.b >= 254, "{white:?}");
    let black = Color::oklch(0.0, 0.0, 0.0).to_rgb();
    assert_eq!(black, Rgb::new(0, 0, 0));
}

// ============================================================================
// Buffer
// ============================================================================

#[test]
fn test_buffer_diff_reports_changed_cells() {
    let a = Buffer::new(3, 2);
    let mut b = Buffer::new(3, 2);
    b.set(1, 1, Cell::new('x'));

    let changes: Vec<_> = b.diff(&a).collect();
    assert_eq!(changes.len(), 1);
    assert_eq!((changes[0].0, changes[0].1, changes[0].2.char), (1, 1, 'x'));
}

#[test]
fn test_wide_chars_take_two_cells() {
    let root = Element::text("日x");
    let buf = render(&root, 4, 1, &DefaultTheme::new());

    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.get(2, 0).unwrap().char, 'x');
    assert_eq!(buf.line(0), "日x");
}

#[test]
fn test_style_shorthands_name_theme_slots() {
    let style = Style::fg("muted").bold();
    assert_eq!(style.foreground, Some(Color::var("muted")));
    assert!(style.text_style.bold);
    assert_eq!(Style::bg("surface").background, Some(Color::var("surface")));
    assert_eq!(Cell::default(), Cell::BLANK);
    assert!(Cell::continuation(Rgb::new(1, 2, 3), None).wide_continuation);
}
