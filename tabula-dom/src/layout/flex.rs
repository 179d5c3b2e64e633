use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Direction, Justify, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, &mut result);
    result
}

/// The area inside border and padding.
pub(crate) fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border.size();
    rect.shrink(
        element.padding.top.saturating_add(border),
        element.padding.right.saturating_add(border),
        element.padding.bottom.saturating_add(border),
        element.padding.left.saturating_add(border),
    )
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let inner = inner_rect(element, rect);

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: fixed sizes and flex weights
    let mut fixed_total = 0u16;
    let mut weight_total = 0u16;
    let gap_total = gap_total(element.gap, children.len());

    for child in children {
        let child_main_size = if is_row { child.width } else { child.height };
        match child_main_size {
            Size::Fixed(n) => fixed_total = fixed_total.saturating_add(n),
            Size::Auto => {
                fixed_total = fixed_total.saturating_add(estimate_size(child, is_row));
            }
            Size::Fill => weight_total = weight_total.saturating_add(1),
            Size::Flex(weight) => weight_total = weight_total.saturating_add(weight.max(1)),
            Size::Percent(p) => {
                fixed_total = fixed_total.saturating_add((main_size as f32 * p) as u16);
            }
        }
    }

    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total));

    // Leftover cells from integer division go to the first flex items
    let mut flex_sizes = Vec::new();
    if weight_total > 0 {
        let mut handed_out = 0u16;
        for child in children {
            let child_main_size = if is_row { child.width } else { child.height };
            let weight = match child_main_size {
                Size::Fill => 1,
                Size::Flex(weight) => weight.max(1),
                _ => continue,
            };
            let share = (remaining as u32 * weight as u32 / weight_total as u32) as u16;
            handed_out = handed_out.saturating_add(share);
            flex_sizes.push(share);
        }
        let mut leftover = remaining.saturating_sub(handed_out);
        for share in flex_sizes.iter_mut() {
            if leftover == 0 {
                break;
            }
            *share += 1;
            leftover -= 1;
        }
    }
    let mut flex_iter = flex_sizes.into_iter();

    let mut child_sizes: Vec<u16> = Vec::with_capacity(children.len());
    for child in children {
        let child_main_size = if is_row { child.width } else { child.height };
        let main = match child_main_size {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill | Size::Flex(_) => flex_iter.next().unwrap_or(0),
            Size::Percent(p) => (main_size as f32 * p) as u16,
        };
        let main = if is_row { clamp_width(child, main) } else { main };
        child_sizes.push(main);
    }

    let total_child_size: u16 = child_sizes.iter().fold(0u16, |acc, s| acc.saturating_add(*s));
    let extra_space = main_size.saturating_sub(total_child_size.saturating_add(gap_total));

    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::End => (extra_space, element.gap),
        Justify::Center => (extra_space / 2, element.gap),
        Justify::SpaceBetween => {
            if children.len() > 1 {
                (0, (extra_space / count_u16(children.len() - 1)).saturating_add(element.gap))
            } else {
                (0, element.gap)
            }
        }
    };

    // Second pass: assign rects
    let mut offset = start_offset;

    for (child, main) in children.iter().zip(child_sizes) {
        let child_cross_size = if is_row { child.height } else { child.width };

        let cross = match child_cross_size {
            Size::Fixed(n) => n,
            Size::Fill | Size::Flex(_) => cross_size,
            Size::Auto => {
                if element.align == Align::Stretch {
                    cross_size
                } else {
                    estimate_size(child, !is_row).min(cross_size)
                }
            }
            Size::Percent(p) => (cross_size as f32 * p) as u16,
        };
        let cross = if is_row { cross } else { clamp_width(child, cross) };

        let clamped_main = main.min(main_size.saturating_sub(offset));
        let clamped_cross = cross.min(cross_size);

        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => cross_size.saturating_sub(clamped_cross) / 2,
            Align::End => cross_size.saturating_sub(clamped_cross),
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x.saturating_add(offset),
                inner.y.saturating_add(cross_offset),
                clamped_main,
                clamped_cross,
            )
        } else {
            Rect::new(
                inner.x.saturating_add(cross_offset),
                inner.y.saturating_add(offset),
                clamped_cross,
                clamped_main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(between_gap);
    }
}

/// `n` as a cell count, capped at `u16::MAX`.
fn count_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn gap_total(gap: u16, children: usize) -> u16 {
    gap.saturating_mul(count_u16(children.saturating_sub(1)))
}

fn clamp_width(element: &Element, width: u16) -> u16 {
    let width = element.min_width.map_or(width, |m| width.max(m));
    element.max_width.map_or(width, |m| width.min(m))
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n,
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate_size(element, is_width),
        Size::Percent(p) => (available as f32 * p) as u16,
    };
    let base = if is_width { clamp_width(element, base) } else { base };
    base.min(available)
}

/// Intrinsic size of an element along one axis.
fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let fixed = if is_width { element.width } else { element.height };
    if let Size::Fixed(n) = fixed {
        return n;
    }

    let border = element.style.border.size().saturating_mul(2);
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                count_u16(text.lines().map(display_width).max().unwrap_or(0))
            } else {
                count_u16(text.lines().count().max(1))
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along main axis
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .fold(gap_total(element.gap, children.len()), u16::saturating_add)
            } else {
                // Max along cross axis
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size.saturating_add(padding).saturating_add(border)
}
