pub mod dimension;
pub mod element;
pub mod flex;
pub mod overflow;
pub mod parsers;
pub mod position;
pub mod text;

pub use dimension::{Dimension, Edges};
pub use element::ElementStyle;
pub use flex::{AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
pub use overflow::Overflow;
pub use parsers::{StyleParseError, apply_style_property, parse_inline_css};
pub use position::{Display, Position};
pub use text::TextAlign;
