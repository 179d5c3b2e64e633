use tabula_dom::{layout, Align, Border, Direction, Edges, Element, Justify, LayoutResult, Rect, Size, Style};

fn layout_root(root: &Element, width: u16, height: u16) -> LayoutResult {
    layout(root, Rect::new(0, 0, width, height))
}

// ============================================================================
// Sizing
// ============================================================================

#[test]
fn test_fill_takes_available_space() {
    let root = Element::box_().id("root").width(Size::Fill).height(Size::Fill);

    let layout = layout_root(&root, 80, 24);
    assert_eq!(layout["root"], Rect::new(0, 0, 80, 24));
}

#[test]
fn test_fixed_and_fill_in_row() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(30))
        .height(Size::Fixed(1))
        .child(Element::box_().id("fixed").width(Size::Fixed(10)))
        .child(Element::box_().id("fill").width(Size::Fill));

    let layout = layout_root(&root, 100, 10);
    assert_eq!(layout["fixed"].width, 10);
    assert_eq!(layout["fill"].x, 10);
    assert_eq!(layout["fill"].width, 20);
}

#[test]
fn test_flex_weights_and_leftover() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .child(Element::box_().id("a").width(Size::Fill))
        .child(Element::box_().id("b").width(Size::Fill))
        .child(Element::box_().id("c").width(Size::Fill));

    let layout = layout_root(&root, 10, 1);
    // 10 / 3 leaves one cell for the first item
    assert_eq!(layout["a"].width, 4);
    assert_eq!(layout["b"].width, 3);
    assert_eq!(layout["c"].width, 3);
    assert_eq!(layout["c"].x, 7);

    let weighted = Element::row()
        .id("root")
        .width(Size::Fixed(12))
        .height(Size::Fixed(1))
        .child(Element::box_().id("one").width(Size::Flex(1)))
        .child(Element::box_().id("two").width(Size::Flex(2)));
    let layout = layout_root(&weighted, 12, 1);
    assert_eq!(layout["one"].width, 4);
    assert_eq!(layout["two"].width, 8);
}

#[test]
fn test_auto_sizes_to_text() {
    let root = Element::row()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .child(Element::text("Email").id("label"))
        .child(Element::text(" *").id("star"));

    let layout = layout_root(&root, 40, 1);
    assert_eq!(layout["label"].width, 5);
    assert_eq!(layout["star"].x, 5);
}

#[test]
fn test_auto_height_sums_children_and_border() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .style(Style::new().border(Border::Rounded))
        .child(Element::box_().id("a").width(Size::Fill).height(Size::Fixed(1)))
        .child(Element::box_().id("b").width(Size::Fill).height(Size::Fixed(3)));

    let layout = layout_root(&root, 40, 20);
    assert_eq!(layout["root"].height, 6);
    assert_eq!(layout["a"], Rect::new(1, 1, 38, 1));
    assert_eq!(layout["b"].y, 2);
}

#[test]
fn test_min_and_max_width() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(100))
        .height(Size::Fixed(1))
        .child(Element::box_().id("min").width(Size::Fixed(5)).min_width(10))
        .child(Element::box_().id("max").width(Size::Fill).max_width(20));

    let layout = layout_root(&root, 100, 1);
    assert_eq!(layout["min"].width, 10);
    assert_eq!(layout["max"].width, 20);
}

// ============================================================================
// Padding, gap, alignment
// ============================================================================

#[test]
fn test_padding_and_gap() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(3))
        .padding(Edges::symmetric(1, 2))
        .gap(1)
        .child(Element::box_().id("a").width(Size::Fixed(3)))
        .child(Element::box_().id("b").width(Size::Fixed(3)));

    let layout = layout_root(&root, 20, 3);
    assert_eq!((layout["a"].x, layout["a"].y, layout["a"].width), (2, 1, 3));
    assert_eq!(layout["b"].x, 6);
}

#[test]
fn test_align_center_on_cross_axis() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(3))
        .align(Align::Center)
        .child(Element::text("x").id("x"));

    let layout = layout_root(&root, 10, 3);
    assert_eq!(layout["x"].y, 1);
    assert_eq!(layout["x"].height, 1);
}

#[test]
fn test_justify_center_and_end() {
    let centered = Element::box_()
        .id("root")
        .direction(Direction::Row)
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .justify(Justify::Center)
        .child(Element::box_().id("a").width(Size::Fixed(4)));
    assert_eq!(layout_root(&centered, 10, 1)["a"].x, 3);

    let end = Element::row()
        .id("root")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .justify(Justify::End)
        .child(Element::box_().id("a").width(Size::Fixed(4)));
    assert_eq!(layout_root(&end, 10, 1)["a"].x, 6);
}

#[test]
fn test_children_clamped_to_parent() {
    let root = Element::row()
        .id("root")
        .width(Size::Fixed(5))
        .height(Size::Fixed(1))
        .child(Element::box_().id("wide").width(Size::Fixed(8)));

    let layout = layout_root(&root, 5, 1);
    assert_eq!(layout["wide"].width, 5);
}

// ============================================================================
// Overflow
// ============================================================================

#[test]
fn test_auto_height_saturates_with_many_children() {
    let root = Element::col()
        .id("root")
        .width(Size::Fill)
        .gap(1)
        .padding(Edges::all(1))
        .style(Style::new().border(Border::Rounded))
        .children((0..40_000).map(|i| {
            Element::row()
                .id(format!("row{i}"))
                .width(Size::Fill)
                .height(Size::Fixed(3))
        }));

    let layout = layout_root(&root, 20, 12);

    assert_eq!(layout["root"].height, 12);
    assert_eq!(layout["row0"], Rect::new(2, 2, 16, 3));
    assert_eq!(layout["row39999"].height, 0);
}

#[test]
fn test_auto_size_of_long_text_is_capped() {
    let text = "x\n".repeat(70_000);
    let root = Element::col()
        .id("root")
        .child(Element::text(text).id("text").style(Style::new().border(Border::Rounded)));

    let layout = layout_root(&root, 10, 5);

    assert_eq!(layout["text"].height, 5);
}
