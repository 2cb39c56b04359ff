//! Pass 3: scroll extents and `overflow: auto` scrollbar reservation.

use super::frame::{Axis, Frames, inset_end, margin_end};
use crate::config::LayoutConfig;
use crate::tree::NodeTree;
use flexa_style::Overflow;
use flexa_types::NodeId;

pub(crate) fn run(tree: &NodeTree, frames: &mut Frames, order: &[NodeId], config: &LayoutConfig) {
    for &id in order {
        if tree.style(id).is_scroll_container() {
            measure_extents(tree, frames, id, config);
        } else {
            let frame = &mut frames[id];
            frame.scroll_size = [frame.client(Axis::X), frame.client(Axis::Y)];
        }
    }
}

/// Bounding extent of the displayed children relative to the node's border-box origin,
/// padded by the node's own trailing padding and border.
fn content_extent(tree: &NodeTree, frames: &Frames, id: NodeId) -> [f32; 2] {
    let style = tree.style(id);
    let origin = frames[id].pos;
    let mut extent = [0.0f32; 2];
    for child in tree.children(id).filter(|&c| tree.style(c).is_displayed()) {
        let frame = &frames[child];
        for axis in Axis::BOTH {
            let i = axis.idx();
            let edge = frame.pos[i] - origin[i] + frame.size[i] + margin_end(tree.style(child), axis);
            extent[i] = extent[i].max(edge);
        }
    }
    for axis in Axis::BOTH {
        extent[axis.idx()] += inset_end(style, axis);
    }
    extent
}

fn measure_extents(tree: &NodeTree, frames: &mut Frames, id: NodeId, config: &LayoutConfig) {
    let style = tree.style(id);
    let extent = content_extent(tree, frames, id);
    let frame = &mut frames[id];

    // Both axes are tested against the client box as it was before this pass reserved
    // anything.
    let client = [frame.client(Axis::X), frame.client(Axis::Y)];
    if style.overflow.y == Overflow::Auto && extent[Axis::Y.idx()] > client[Axis::Y.idx()] {
        frame.has_vertical_scrollbar = true;
        frame.reserved[Axis::X.idx()] += config.scrollbar_size;
    }
    if style.overflow.x == Overflow::Auto && extent[Axis::X.idx()] > client[Axis::X.idx()] {
        frame.has_horizontal_scrollbar = true;
        frame.reserved[Axis::Y.idx()] += config.scrollbar_size;
    }

    for axis in Axis::BOTH {
        let i = axis.idx();
        frame.scroll_size[i] = extent[i].max(frame.client(axis));
    }
    log::trace!(
        "Scroll extent of {}: {}x{}",
        id,
        frame.scroll_size[0],
        frame.scroll_size[1]
    );
}
