use crate::style::{ComputedStyle, DEFAULT_FONT_FAMILY};
use flexa_style::{
    AlignContent, AlignItems, AlignSelf, Dimension, Display, Edges, ElementStyle, FlexDirection,
    FlexWrap, JustifyContent, Overflow, Position, TextAlign, parse_inline_css,
};

fn computed(css: &str) -> ComputedStyle {
    let mut style = ElementStyle::default();
    parse_inline_css(css, &mut style).unwrap();
    ComputedStyle::from_element(&style)
}

#[test]
fn test_defaults_are_filled() {
    let style = ComputedStyle::from_element(&ElementStyle::default());

    assert_eq!(style.flex.direction, FlexDirection::Column);
    assert_eq!(style.flex.wrap, FlexWrap::NoWrap);
    assert_eq!(style.flex.justify_content, JustifyContent::Start);
    assert_eq!(style.flex.align_items, AlignItems::Start);
    assert_eq!(style.flex.align_content, AlignContent::Start);
    assert_eq!(style.flex.align_self, AlignSelf::Auto);
    assert_eq!(style.flex.grow, 0.0);
    assert_eq!(style.flex.shrink, 0.0);
    assert_eq!(style.flex.basis, Dimension::Auto);
    assert_eq!(style.position.position, Position::Relative);
    assert_eq!(style.position.display, Display::Flex);
    assert_eq!(style.position.z_index, 0);
    assert_eq!(style.overflow.x, Overflow::Visible);
    assert_eq!(style.overflow.y, Overflow::Visible);
    assert_eq!(style.box_model.width, Dimension::Auto);
    assert_eq!(style.box_model.max_height, Dimension::Auto);
    assert_eq!(style.box_model.aspect_ratio, None);
    assert_eq!(style.text.font_family, DEFAULT_FONT_FAMILY);
    assert_eq!(style.text.font_size, 16.0);
    assert!((style.text.line_height - 19.2).abs() < 0.001);
    assert_eq!(style.text.text_align, TextAlign::Left);
}

#[test]
fn test_edge_precedence() {
    let style = computed("padding: 1; padding-x: 2; padding-left: 3");
    assert_eq!(style.box_model.padding, Edges::new(1.0, 2.0, 1.0, 3.0));

    let style = computed("margin: 1 2 3 4; margin-y: 9");
    assert_eq!(style.box_model.margin, Edges::new(9.0, 2.0, 9.0, 4.0));

    let style = computed("border-width: 2; border-bottom-width: 0");
    assert_eq!(style.box_model.border, Edges::new(2.0, 2.0, 0.0, 2.0));
    assert_eq!(style.inset_y(), 2.0);
}

#[test]
fn test_gap_and_overflow_precedence() {
    let style = computed("gap: 4; column-gap: 10; overflow: hidden; overflow-y: auto");
    assert_eq!(style.flex.row_gap, 4.0);
    assert_eq!(style.flex.column_gap, 10.0);
    assert_eq!(style.overflow.x, Overflow::Hidden);
    assert_eq!(style.overflow.y, Overflow::Auto);
    assert!(style.is_scroll_container());
    assert!(style.clips());
}

#[test]
fn test_main_gap_follows_direction() {
    let row = computed("flex-direction: row; row-gap: 1; column-gap: 2");
    assert_eq!(row.main_gap(), 2.0);
    assert_eq!(row.cross_gap(), 1.0);
    let column = computed("row-gap: 1; column-gap: 2");
    assert_eq!(column.main_gap(), 1.0);
    assert_eq!(column.cross_gap(), 2.0);
}

#[test]
fn test_negative_weights_are_clamped() {
    let _ = env_logger::builder().is_test(true).try_init();
    let style = computed("flex-grow: -1; flex-shrink: -2");
    assert_eq!(style.flex.grow, 0.0);
    assert_eq!(style.flex.shrink, 0.0);
}

#[test]
fn test_non_positive_aspect_ratio_is_discarded() {
    let _ = env_logger::builder().is_test(true).try_init();
    let style = ComputedStyle::from_element(&ElementStyle {
        aspect_ratio: Some(-1.5),
        ..Default::default()
    });
    assert_eq!(style.box_model.aspect_ratio, None);
}

#[test]
fn test_line_height_follows_font_size() {
    let style = computed("font-size: 10");
    assert!((style.text.line_height - 12.0).abs() < 0.01);

    let style = computed("font-size: 10; line-height: 20");
    assert_eq!(style.text.line_height, 20.0);
}

#[test]
fn test_equal_styles_compare_equal() {
    let a = computed("width: 50%; flex-grow: 1");
    let b = computed("flex-grow: 1; width: 50%");
    let c = computed("width: 51%; flex-grow: 1");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_default_style_matches_empty_author_style() {
    let empty = ComputedStyle::from_element(&ElementStyle::default());
    assert_eq!(empty, ComputedStyle::default());
    assert_ne!(empty, computed("padding-left: 0.5"));
    assert_ne!(computed("width: 50"), computed("width: 50%"));
}
