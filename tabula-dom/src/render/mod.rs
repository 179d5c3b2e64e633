use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{inner_rect, layout, LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width, wrap_words};
use crate::types::{ColorContext, DefaultTheme, Rgb, TextWrap, Theme};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

/// Paint `element` and its descendants into `buf` in tree order.
///
/// Children are clipped to the inner area of every ancestor, so content that
/// does not fit a cell is cut instead of bleeding into its neighbour.
pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer, theme: &dyn Theme) {
    let colors = ColorContext::new(theme);
    let screen = Rect::from_size(buf.width(), buf.height());
    render_element(element, layout, buf, screen, &colors);
}

/// Lay out and render into a fresh buffer, returning its text.
pub fn render_to_string(element: &Element, width: u16, height: u16) -> String {
    let layout = layout(element, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(element, &layout, &mut buf, &DefaultTheme::new());
    buf.to_text()
}

fn render_element(
    element: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    clip: Rect,
    colors: &ColorContext,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };

    let visible = rect.intersect(clip);
    if visible.is_empty() {
        return;
    }

    if let Some(bg) = &element.style.background {
        fill_rect(buf, visible, colors.resolve(bg));
    }

    render_border(element, rect, visible, buf, colors);

    match &element.content {
        Content::None => {}
        Content::Text(text) => render_text(text, element, rect, visible, buf, colors),
        Content::Children(children) => {
            let child_clip = inner_rect(element, rect).intersect(clip);
            for child in children {
                render_element(child, layout, buf, child_clip, colors);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.char = ' ';
                cell.bg = Some(bg);
                cell.wide_continuation = false;
            }
        }
    }
}

fn render_border(element: &Element, rect: Rect, visible: Rect, buf: &mut Buffer, colors: &ColorContext) {
    let Some([tl, tr, bl, br, h, v]) = element.style.border.glyphs() else {
        return;
    };
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = element
        .style
        .border_color
        .as_ref()
        .or(element.style.foreground.as_ref())
        .map(|c| colors.resolve(c))
        .unwrap_or(DEFAULT_FG);

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let mut put = |x: u16, y: u16, ch: char| {
        if visible.contains(x, y) {
            let bg = buf.get(x, y).and_then(|c| c.bg);
            buf.set(x, y, Cell::painted(ch, fg, bg));
        }
    };

    put(rect.x, rect.y, tl);
    put(right, rect.y, tr);
    put(rect.x, bottom, bl);
    put(right, bottom, br);
    for x in rect.x + 1..right {
        put(x, rect.y, h);
        put(x, bottom, h);
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, v);
        put(right, y, v);
    }
}

fn render_text(
    text: &str,
    element: &Element,
    rect: Rect,
    visible: Rect,
    buf: &mut Buffer,
    colors: &ColorContext,
) {
    let fg = element
        .style
        .foreground
        .as_ref()
        .map(|c| colors.resolve(c))
        .unwrap_or(DEFAULT_FG);
    let explicit_bg = element.style.background.as_ref().map(|c| colors.resolve(c));

    let inner = inner_rect(element, rect);
    if inner.is_empty() {
        return;
    }
    let max_width = inner.width as usize;

    let lines: Vec<String> = match element.text_wrap {
        TextWrap::NoWrap => text.lines().map(str::to_string).collect(),
        TextWrap::WordWrap => wrap_words(text, max_width),
        TextWrap::Truncate => text
            .lines()
            .map(|line| truncate_to_width(line, max_width))
            .collect(),
    };

    for (line_idx, line) in lines.iter().enumerate() {
        let Some(y) = u16::try_from(line_idx).ok().and_then(|i| inner.y.checked_add(i)) else {
            break;
        };
        if y >= inner.bottom() {
            break;
        }
        if y < visible.y || y >= visible.bottom() {
            continue;
        }

        let x_offset = align_offset(display_width(line), max_width, element.text_align) as u16;
        let mut x = inner.x + x_offset;

        for ch in line.chars() {
            let ch_w = char_width(ch) as u16;
            if ch_w == 0 {
                continue;
            }
            if x + ch_w > inner.right() {
                break;
            }
            if x < visible.x || x + ch_w > visible.right() {
                x += ch_w;
                continue;
            }

            // Keep the background painted by ancestors unless one is set here
            let bg = explicit_bg.or_else(|| buf.get(x, y).and_then(|c| c.bg));
            buf.set(
                x,
                y,
                Cell::painted(ch, fg, bg).with_style(element.style.text_style),
            );

            if ch_w == 2 {
                buf.set(x + 1, y, Cell::continuation(fg, bg));
            }

            x += ch_w;
        }
    }
}
