//! Low-level nom parser functions for CSS-like style values.
//!
//! This module provides composable parser functions for lengths, dimensions and edge
//! shorthands, keyword parsers for every style enum, and the property dispatcher used
//! by inline declaration blocks.

use crate::dimension::{Dimension, Edges};
use crate::element::ElementStyle;
use crate::flex::{AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
use crate::overflow::Overflow;
use crate::position::{Display, Position};
use crate::text::TextAlign;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_while_m_n},
    character::complete::{char, space0, space1},
    combinator::{map, map_res, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, preceded},
};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },

    #[error("Unknown style property '{0}'")]
    UnknownProperty(String),
}

fn invalid(property: &str, value: &str) -> StyleParseError {
    StyleParseError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    }
}

// --- Helper Parsers ---

fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(space0, inner, space0)
}

fn digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()).parse(input)
}

/// Parses a plain decimal number such as `12`, `-4.5` or `.25`.
pub fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(pair(digits, opt(pair(char('.'), digits)))),
                recognize(pair(char('.'), digits)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Length & Dimension Parsers ---

/// Parses a pixel length with an optional `px` unit (e.g. `12`, `12px`).
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, _) = opt(tag_no_case("px")).parse(input)?;
    Ok((input, value))
}

/// Parses a dimension value (`auto`, a percentage, or a length).
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        map(tag_no_case("auto"), |_| Dimension::Auto),
        map(pair(parse_f32, char('%')), |(val, _)| Dimension::Percent(val)),
        map(parse_length, Dimension::Px),
    ))
    .parse(input)
}

/// Parses an aspect ratio written as `16/9` or as a single number.
fn aspect_ratio(input: &str) -> IResult<&str, (f32, Option<f32>)> {
    pair(parse_f32, opt(preceded(ws(char('/')), parse_f32))).parse(input)
}

/// Parses an aspect ratio into a single width/height factor.
pub fn parse_aspect_ratio(s: &str) -> Result<f32, StyleParseError> {
    match run_parser(aspect_ratio, s)? {
        (_, Some(den)) if den == 0.0 => Err(invalid("aspect-ratio", s)),
        (num, Some(den)) => Ok(num / den),
        (num, None) => Ok(num),
    }
}

/// Parses CSS edge shorthands (1, 2, 3 or 4 lengths) in top/right/bottom/left order.
pub fn parse_edges(input: &str) -> Result<Edges, StyleParseError> {
    let parts_res = separated_list1(space1, parse_length).parse(input.trim());

    match parts_res {
        Ok(("", parts)) => match parts.as_slice() {
            [all] => Ok(Edges::all(*all)),
            [vertical, horizontal] => Ok(Edges::new(*vertical, *horizontal, *vertical, *horizontal)),
            [top, horizontal, bottom] => Ok(Edges::new(*top, *horizontal, *bottom, *horizontal)),
            [top, right, bottom, left] => Ok(Edges::new(*top, *right, *bottom, *left)),
            _ => Err(StyleParseError::Parse(format!(
                "Invalid number of values for edge shorthand: got {}, expected 1 to 4.",
                parts.len()
            ))),
        },
        _ => Err(StyleParseError::Parse(format!(
            "Failed to parse edges value: '{}'",
            input
        ))),
    }
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

fn parse_number(property: &str, value: &str) -> Result<f32, StyleParseError> {
    run_parser(parse_f32, value).map_err(|_| invalid(property, value))
}

fn parse_px(property: &str, value: &str) -> Result<f32, StyleParseError> {
    run_parser(parse_length, value).map_err(|_| invalid(property, value))
}

fn parse_dim(property: &str, value: &str) -> Result<Dimension, StyleParseError> {
    run_parser(parse_dimension, value).map_err(|_| invalid(property, value))
}

// --- Keyword Parsers ---

/// Parses a display value.
pub fn parse_display(s: &str) -> Result<Display, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "flex" => Ok(Display::Flex),
        "none" => Ok(Display::None),
        _ => Err(invalid("display", s)),
    }
}

/// Parses a position value.
pub fn parse_position(s: &str) -> Result<Position, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "relative" => Ok(Position::Relative),
        "absolute" => Ok(Position::Absolute),
        _ => Err(invalid("position", s)),
    }
}

/// Parses an overflow value.
pub fn parse_overflow(s: &str) -> Result<Overflow, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "visible" => Ok(Overflow::Visible),
        "hidden" => Ok(Overflow::Hidden),
        "scroll" => Ok(Overflow::Scroll),
        "auto" => Ok(Overflow::Auto),
        _ => Err(invalid("overflow", s)),
    }
}

/// Parses a text-align value.
pub fn parse_text_align(s: &str) -> Result<TextAlign, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "left" => Ok(TextAlign::Left),
        "right" => Ok(TextAlign::Right),
        "center" => Ok(TextAlign::Center),
        "justify" => Ok(TextAlign::Justify),
        _ => Err(invalid("text-align", s)),
    }
}

/// Parses a flex-direction value.
pub fn parse_flex_direction(s: &str) -> Result<FlexDirection, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "row" => Ok(FlexDirection::Row),
        "row-reverse" => Ok(FlexDirection::RowReverse),
        "column" => Ok(FlexDirection::Column),
        "column-reverse" => Ok(FlexDirection::ColumnReverse),
        _ => Err(invalid("flex-direction", s)),
    }
}

/// Parses a flex-wrap value.
pub fn parse_flex_wrap(s: &str) -> Result<FlexWrap, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "nowrap" => Ok(FlexWrap::NoWrap),
        "wrap" => Ok(FlexWrap::Wrap),
        "wrap-reverse" => Ok(FlexWrap::WrapReverse),
        _ => Err(invalid("flex-wrap", s)),
    }
}

/// Parses a justify-content value.
pub fn parse_justify_content(s: &str) -> Result<JustifyContent, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "start" | "flex-start" => Ok(JustifyContent::Start),
        "end" | "flex-end" => Ok(JustifyContent::End),
        "center" => Ok(JustifyContent::Center),
        "space-between" => Ok(JustifyContent::SpaceBetween),
        "space-around" => Ok(JustifyContent::SpaceAround),
        "space-evenly" => Ok(JustifyContent::SpaceEvenly),
        _ => Err(invalid("justify-content", s)),
    }
}

/// Parses an align-items value.
pub fn parse_align_items(s: &str) -> Result<AlignItems, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "stretch" => Ok(AlignItems::Stretch),
        "start" | "flex-start" => Ok(AlignItems::Start),
        "end" | "flex-end" => Ok(AlignItems::End),
        "center" => Ok(AlignItems::Center),
        _ => Err(invalid("align-items", s)),
    }
}

/// Parses an align-content value.
pub fn parse_align_content(s: &str) -> Result<AlignContent, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "stretch" => Ok(AlignContent::Stretch),
        "start" | "flex-start" => Ok(AlignContent::Start),
        "end" | "flex-end" => Ok(AlignContent::End),
        "center" => Ok(AlignContent::Center),
        "space-between" => Ok(AlignContent::SpaceBetween),
        "space-around" => Ok(AlignContent::SpaceAround),
        "space-evenly" => Ok(AlignContent::SpaceEvenly),
        _ => Err(invalid("align-content", s)),
    }
}

/// Parses an align-self value.
pub fn parse_align_self(s: &str) -> Result<AlignSelf, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "auto" => Ok(AlignSelf::Auto),
        "stretch" => Ok(AlignSelf::Stretch),
        "start" | "flex-start" => Ok(AlignSelf::Start),
        "end" | "flex-end" => Ok(AlignSelf::End),
        "center" => Ok(AlignSelf::Center),
        _ => Err(invalid("align-self", s)),
    }
}

// --- High-level Style Application Functions ---

/// Applies a single kebab-case style property to an `ElementStyle` struct.
/// This is the central dispatcher for applying individual CSS-like properties.
pub fn apply_style_property(
    style: &mut ElementStyle,
    attr_name: &str,
    value: &str,
) -> Result<(), StyleParseError> {
    let value = value.trim();
    match attr_name.trim() {
        "display" => style.display = Some(parse_display(value)?),
        "position" => style.position = Some(parse_position(value)?),
        "left" => style.left = Some(parse_px(attr_name, value)?),
        "top" => style.top = Some(parse_px(attr_name, value)?),
        "right" => style.right = Some(parse_px(attr_name, value)?),
        "bottom" => style.bottom = Some(parse_px(attr_name, value)?),
        "z-index" => {
            style.z_index = Some(value.parse::<i32>().map_err(|_| invalid(attr_name, value))?)
        }
        "width" => style.width = Some(parse_dim(attr_name, value)?),
        "height" => style.height = Some(parse_dim(attr_name, value)?),
        "min-width" => style.min_width = Some(parse_dim(attr_name, value)?),
        "min-height" => style.min_height = Some(parse_dim(attr_name, value)?),
        "max-width" => style.max_width = Some(parse_dim(attr_name, value)?),
        "max-height" => style.max_height = Some(parse_dim(attr_name, value)?),
        "aspect-ratio" => style.aspect_ratio = Some(parse_aspect_ratio(value)?),

        "padding" => style.padding = Some(parse_edges(value)?),
        "padding-x" => style.padding_x = Some(parse_px(attr_name, value)?),
        "padding-y" => style.padding_y = Some(parse_px(attr_name, value)?),
        "padding-top" => style.padding_top = Some(parse_px(attr_name, value)?),
        "padding-right" => style.padding_right = Some(parse_px(attr_name, value)?),
        "padding-bottom" => style.padding_bottom = Some(parse_px(attr_name, value)?),
        "padding-left" => style.padding_left = Some(parse_px(attr_name, value)?),
        "margin" => style.margin = Some(parse_edges(value)?),
        "margin-x" => style.margin_x = Some(parse_px(attr_name, value)?),
        "margin-y" => style.margin_y = Some(parse_px(attr_name, value)?),
        "margin-top" => style.margin_top = Some(parse_px(attr_name, value)?),
        "margin-right" => style.margin_right = Some(parse_px(attr_name, value)?),
        "margin-bottom" => style.margin_bottom = Some(parse_px(attr_name, value)?),
        "margin-left" => style.margin_left = Some(parse_px(attr_name, value)?),
        "border-width" => style.border_width = Some(parse_edges(value)?),
        "border-x-width" => style.border_x_width = Some(parse_px(attr_name, value)?),
        "border-y-width" => style.border_y_width = Some(parse_px(attr_name, value)?),
        "border-top-width" => style.border_top_width = Some(parse_px(attr_name, value)?),
        "border-right-width" => style.border_right_width = Some(parse_px(attr_name, value)?),
        "border-bottom-width" => style.border_bottom_width = Some(parse_px(attr_name, value)?),
        "border-left-width" => style.border_left_width = Some(parse_px(attr_name, value)?),
        "gap" => style.gap = Some(parse_px(attr_name, value)?),
        "row-gap" => style.row_gap = Some(parse_px(attr_name, value)?),
        "column-gap" => style.column_gap = Some(parse_px(attr_name, value)?),

        "overflow" => style.overflow = Some(parse_overflow(value)?),
        "overflow-x" => style.overflow_x = Some(parse_overflow(value)?),
        "overflow-y" => style.overflow_y = Some(parse_overflow(value)?),

        "flex-direction" => style.flex_direction = Some(parse_flex_direction(value)?),
        "flex-wrap" => style.flex_wrap = Some(parse_flex_wrap(value)?),
        "justify-content" => style.justify_content = Some(parse_justify_content(value)?),
        "align-items" => style.align_items = Some(parse_align_items(value)?),
        "align-content" => style.align_content = Some(parse_align_content(value)?),
        "align-self" => style.align_self = Some(parse_align_self(value)?),
        "flex-grow" => style.flex_grow = Some(parse_number(attr_name, value)?),
        "flex-shrink" => style.flex_shrink = Some(parse_number(attr_name, value)?),
        "flex-basis" => style.flex_basis = Some(parse_dim(attr_name, value)?),

        "font-family" => style.font_family = Some(value.trim_matches(['"', '\'']).to_string()),
        "font-size" => style.font_size = Some(parse_px(attr_name, value)?),
        "line-height" => style.line_height = Some(parse_px(attr_name, value)?),
        "text-align" => style.text_align = Some(parse_text_align(value)?),
        other => return Err(StyleParseError::UnknownProperty(other.to_string())),
    };
    Ok(())
}

/// Parses an inline `key: value; ...` declaration block into `style_override`.
pub fn parse_inline_css(
    css: &str,
    style_override: &mut ElementStyle,
) -> Result<(), StyleParseError> {
    for declaration in css.split(';') {
        if declaration.trim().is_empty() {
            continue;
        }
        match declaration.split_once(':') {
            Some((key, value)) => apply_style_property(style_override, key.trim(), value.trim())?,
            None => {
                return Err(StyleParseError::Parse(format!(
                    "Declaration without ':' separator: '{}'",
                    declaration.trim()
                )));
            }
        }
    }
    Ok(())
}
