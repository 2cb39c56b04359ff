use flexa_style::{
    AlignContent, AlignItems, AlignSelf, Dimension, Display, Edges, ElementStyle, FlexDirection,
    FlexWrap, JustifyContent, Overflow, Position, TextAlign,
};

// Grouped Style Structures

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxModel {
    pub margin: Edges,
    pub padding: Edges,
    pub border: Edges,
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub max_width: Dimension,
    pub max_height: Dimension,
    /// Width divided by height. Always positive when set.
    pub aspect_ratio: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionModel {
    pub display: Display,
    pub position: Position,
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub z_index: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlexModel {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub row_gap: f32,
    pub column_gap: f32,
    // Item properties
    pub grow: f32,
    pub shrink: f32,
    pub basis: Dimension,
    pub align_self: AlignSelf,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverflowModel {
    pub x: Overflow,
    pub y: Overflow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextModel {
    pub font_family: String,
    pub font_size: f32,
    pub line_height: f32,
    pub text_align: TextAlign,
}

impl Default for TextModel {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_FONT_SIZE * LINE_HEIGHT_FACTOR,
            text_align: TextAlign::Left,
        }
    }
}

pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_FONT_SIZE: f32 = 16.0;
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Every style property with shorthands expanded and defaults filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyleData {
    pub box_model: BoxModel,
    pub position: PositionModel,
    pub flex: FlexModel,
    pub overflow: OverflowModel,
    pub text: TextModel,
}

impl ComputedStyleData {
    /// Returns the total width of horizontal padding.
    pub fn padding_x(&self) -> f32 {
        self.box_model.padding.horizontal()
    }

    /// Returns the total height of vertical padding.
    pub fn padding_y(&self) -> f32 {
        self.box_model.padding.vertical()
    }

    /// Returns the total width of horizontal borders.
    pub fn border_x(&self) -> f32 {
        self.box_model.border.horizontal()
    }

    /// Returns the total height of vertical borders.
    pub fn border_y(&self) -> f32 {
        self.box_model.border.vertical()
    }

    /// Horizontal space between the border-box edge and the content box.
    pub fn inset_x(&self) -> f32 {
        self.padding_x() + self.border_x()
    }

    /// Vertical space between the border-box edge and the content box.
    pub fn inset_y(&self) -> f32 {
        self.padding_y() + self.border_y()
    }

    pub fn is_displayed(&self) -> bool {
        self.position.display != Display::None
    }

    pub fn is_absolute(&self) -> bool {
        self.position.position == Position::Absolute
    }

    /// True when either axis is `scroll` or `auto`.
    pub fn is_scroll_container(&self) -> bool {
        self.overflow.x.is_scrollable() || self.overflow.y.is_scrollable()
    }

    /// True when either axis clips its content.
    pub fn clips(&self) -> bool {
        self.overflow.x.clips() || self.overflow.y.clips()
    }

    /// The gap between items along the main axis.
    pub fn main_gap(&self) -> f32 {
        if self.flex.direction.is_row() {
            self.flex.column_gap
        } else {
            self.flex.row_gap
        }
    }

    /// The gap between wrapped lines.
    pub fn cross_gap(&self) -> f32 {
        if self.flex.direction.is_row() {
            self.flex.row_gap
        } else {
            self.flex.column_gap
        }
    }
}

/// A normalized style, as stored on each tree node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    pub inner: ComputedStyleData,
}

impl ComputedStyle {
    pub fn new(data: ComputedStyleData) -> Self {
        Self { inner: data }
    }

    /// Normalizes a sparse author style: expands shorthands and fills every default.
    pub fn from_element(style: &ElementStyle) -> Self {
        Self::new(normalize(style))
    }
}

// Allows accessing style data directly (e.g. style.box_model)
impl std::ops::Deref for ComputedStyle {
    type Target = ComputedStyleData;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Resolves one edge: specific edge > specific axis > shorthand > 0.
fn edge(specific: Option<f32>, axis: Option<f32>, shorthand: Option<f32>) -> f32 {
    specific.or(axis).or(shorthand).unwrap_or(0.0)
}

#[allow(clippy::too_many_arguments)]
fn edges(
    shorthand: Option<Edges>,
    x: Option<f32>,
    y: Option<f32>,
    top: Option<f32>,
    right: Option<f32>,
    bottom: Option<f32>,
    left: Option<f32>,
) -> Edges {
    Edges {
        top: edge(top, y, shorthand.map(|e| e.top)),
        right: edge(right, x, shorthand.map(|e| e.right)),
        bottom: edge(bottom, y, shorthand.map(|e| e.bottom)),
        left: edge(left, x, shorthand.map(|e| e.left)),
    }
}

fn non_negative_weight(name: &str, value: Option<f32>) -> f32 {
    match value {
        Some(v) if v < 0.0 => {
            log::warn!("Negative {} ({}) clamped to 0.", name, v);
            0.0
        }
        Some(v) => v,
        None => 0.0,
    }
}

fn normalize(s: &ElementStyle) -> ComputedStyleData {
    let font_size = s.font_size.unwrap_or(DEFAULT_FONT_SIZE);
    let aspect_ratio = match s.aspect_ratio {
        Some(r) if r > 0.0 && r.is_finite() => Some(r),
        Some(r) => {
            log::warn!("Discarding non-positive aspect ratio {}.", r);
            None
        }
        None => None,
    };
    let overflow = s.overflow.unwrap_or_default();

    ComputedStyleData {
        box_model: BoxModel {
            margin: edges(
                s.margin,
                s.margin_x,
                s.margin_y,
                s.margin_top,
                s.margin_right,
                s.margin_bottom,
                s.margin_left,
            ),
            padding: edges(
                s.padding,
                s.padding_x,
                s.padding_y,
                s.padding_top,
                s.padding_right,
                s.padding_bottom,
                s.padding_left,
            ),
            border: edges(
                s.border_width,
                s.border_x_width,
                s.border_y_width,
                s.border_top_width,
                s.border_right_width,
                s.border_bottom_width,
                s.border_left_width,
            ),
            width: s.width.unwrap_or_default(),
            height: s.height.unwrap_or_default(),
            min_width: s.min_width.unwrap_or_default(),
            min_height: s.min_height.unwrap_or_default(),
            max_width: s.max_width.unwrap_or_default(),
            max_height: s.max_height.unwrap_or_default(),
            aspect_ratio,
        },
        position: PositionModel {
            display: s.display.unwrap_or_default(),
            position: s.position.unwrap_or_default(),
            left: s.left,
            top: s.top,
            right: s.right,
            bottom: s.bottom,
            z_index: s.z_index.unwrap_or(0),
        },
        flex: FlexModel {
            direction: s.flex_direction.unwrap_or_default(),
            wrap: s.flex_wrap.unwrap_or_default(),
            justify_content: s.justify_content.unwrap_or_default(),
            align_items: s.align_items.unwrap_or_default(),
            align_content: s.align_content.unwrap_or_default(),
            row_gap: s.row_gap.or(s.gap).unwrap_or(0.0),
            column_gap: s.column_gap.or(s.gap).unwrap_or(0.0),
            grow: non_negative_weight("flex-grow", s.flex_grow),
            shrink: non_negative_weight("flex-shrink", s.flex_shrink),
            basis: s.flex_basis.unwrap_or_default(),
            align_self: s.align_self.unwrap_or_default(),
        },
        overflow: OverflowModel {
            x: s.overflow_x.unwrap_or(overflow),
            y: s.overflow_y.unwrap_or(overflow),
        },
        text: TextModel {
            font_family: s
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            font_size,
            line_height: s.line_height.unwrap_or(font_size * LINE_HEIGHT_FACTOR),
            text_align: s.text_align.unwrap_or_default(),
        },
    }
}
