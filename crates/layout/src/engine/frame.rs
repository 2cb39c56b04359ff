//! Per-run scratch state shared by the layout passes.

use crate::style::ComputedStyleData;
use crate::tree::NodeTree;
use flexa_style::Dimension;
use flexa_types::NodeId;
use std::ops::{Index, IndexMut};

/// Tolerance for comparing accumulated float extents against a limit.
pub(crate) const EPSILON: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    pub fn idx(self) -> usize {
        self as usize
    }
}

/// One wrap line of a container.
#[derive(Debug, Clone, Default)]
pub(crate) struct Line {
    pub items: Vec<NodeId>,
    /// Sum of outer main extents plus gaps.
    pub main: f32,
    /// Thickness along the cross axis.
    pub cross: f32,
    /// Cross offset of the line inside the content box.
    pub offset: f32,
}

/// Everything the engine knows about a node during one run. Indexed by axis.
#[derive(Debug, Clone, Default)]
pub(crate) struct Frame {
    /// Border-box size.
    pub size: [f32; 2],
    /// Screen-space border-box origin.
    pub pos: [f32; 2],
    /// The size came from an explicit or fully resolved value.
    pub definite: [bool; 2],
    /// Content hugging must leave the size alone.
    pub settled: [bool; 2],
    /// The size was derived from the aspect ratio in the current container pass.
    pub aspect_locked: [bool; 2],
    /// Scrollbar thickness taken out of the border box on each axis.
    pub reserved: [f32; 2],
    pub has_horizontal_scrollbar: bool,
    pub has_vertical_scrollbar: bool,
    pub scroll_size: [f32; 2],
    pub lines: Vec<Line>,
}

impl Frame {
    pub fn client(&self, axis: Axis) -> f32 {
        (self.size[axis.idx()] - self.reserved[axis.idx()]).max(0.0)
    }
}

/// Scratch frames for every node of the arena, addressed by `NodeId`.
pub(crate) struct Frames(Vec<Frame>);

impl Frames {
    pub fn new(len: usize) -> Self {
        Self(vec![Frame::default(); len])
    }
}

impl Index<NodeId> for Frames {
    type Output = Frame;
    fn index(&self, id: NodeId) -> &Frame {
        &self.0[id.index()]
    }
}

impl IndexMut<NodeId> for Frames {
    fn index_mut(&mut self, id: NodeId) -> &mut Frame {
        &mut self.0[id.index()]
    }
}

// --- Axis-aware style accessors ---

pub(crate) fn main_axis(style: &ComputedStyleData) -> Axis {
    if style.flex.direction.is_row() {
        Axis::X
    } else {
        Axis::Y
    }
}

pub(crate) fn size_dim(style: &ComputedStyleData, axis: Axis) -> Dimension {
    match axis {
        Axis::X => style.box_model.width,
        Axis::Y => style.box_model.height,
    }
}

pub(crate) fn min_dim(style: &ComputedStyleData, axis: Axis) -> Dimension {
    match axis {
        Axis::X => style.box_model.min_width,
        Axis::Y => style.box_model.min_height,
    }
}

pub(crate) fn max_dim(style: &ComputedStyleData, axis: Axis) -> Dimension {
    match axis {
        Axis::X => style.box_model.max_width,
        Axis::Y => style.box_model.max_height,
    }
}

pub(crate) fn margin_start(style: &ComputedStyleData, axis: Axis) -> f32 {
    match axis {
        Axis::X => style.box_model.margin.left,
        Axis::Y => style.box_model.margin.top,
    }
}

pub(crate) fn margin_end(style: &ComputedStyleData, axis: Axis) -> f32 {
    match axis {
        Axis::X => style.box_model.margin.right,
        Axis::Y => style.box_model.margin.bottom,
    }
}

pub(crate) fn margins(style: &ComputedStyleData, axis: Axis) -> f32 {
    margin_start(style, axis) + margin_end(style, axis)
}

/// Padding plus border on the leading edge.
pub(crate) fn inset_start(style: &ComputedStyleData, axis: Axis) -> f32 {
    match axis {
        Axis::X => style.box_model.padding.left + style.box_model.border.left,
        Axis::Y => style.box_model.padding.top + style.box_model.border.top,
    }
}

/// Padding plus border on the trailing edge.
pub(crate) fn inset_end(style: &ComputedStyleData, axis: Axis) -> f32 {
    match axis {
        Axis::X => style.box_model.padding.right + style.box_model.border.right,
        Axis::Y => style.box_model.padding.bottom + style.box_model.border.bottom,
    }
}

pub(crate) fn inset(style: &ComputedStyleData, axis: Axis) -> f32 {
    inset_start(style, axis) + inset_end(style, axis)
}

/// The `(start, end)` offsets along an axis: `(left, right)` or `(top, bottom)`.
pub(crate) fn offsets(style: &ComputedStyleData, axis: Axis) -> (Option<f32>, Option<f32>) {
    match axis {
        Axis::X => (style.position.left, style.position.right),
        Axis::Y => (style.position.top, style.position.bottom),
    }
}

/// The content-box size of `id` along `axis`, if its size is definite.
pub(crate) fn content_size(tree: &NodeTree, frames: &Frames, id: NodeId, axis: Axis) -> Option<f32> {
    let frame = &frames[id];
    frame.definite[axis.idx()]
        .then(|| (frame.size[axis.idx()] - inset(tree.style(id), axis)).max(0.0))
}

/// Applies `max` then `min`, so `min` wins when they conflict. Percentages resolve
/// against `reference` when it is known and are ignored otherwise.
pub(crate) fn clamp(
    style: &ComputedStyleData,
    axis: Axis,
    value: f32,
    reference: Option<f32>,
) -> f32 {
    let resolve = |d: Dimension| match d {
        Dimension::Percent(_) => reference.and_then(|r| d.resolve(r)),
        _ => d.resolve(0.0),
    };
    let mut v = value;
    if let Some(max) = resolve(max_dim(style, axis)) {
        v = v.min(max);
    }
    if let Some(min) = resolve(min_dim(style, axis)) {
        v = v.max(min);
    }
    v.max(0.0)
}

/// Derives one dimension from the other through `ratio = width / height`, floored to whole
/// pixels.
pub(crate) fn aspect_derive(ratio: f32, known: f32, derive: Axis) -> f32 {
    match derive {
        Axis::Y => (known / ratio).floor(),
        Axis::X => (known * ratio).floor(),
    }
}
