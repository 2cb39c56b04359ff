//! Pass 1: hug content bottom-up and form wrap lines.

use super::frame::{Axis, Frames, clamp, content_size, inset, main_axis};
use super::lines::{form_lines, stacked_cross};
use crate::tree::NodeTree;
use flexa_types::NodeId;

pub(crate) fn run(tree: &NodeTree, frames: &mut Frames, order: &[NodeId]) {
    for &id in order.iter().rev() {
        if tree.kind(id).is_text() {
            continue;
        }
        hug_container(tree, frames, id);
    }
}

/// Relatively positioned, displayed children in sibling order.
pub(crate) fn flow_children(tree: &NodeTree, id: NodeId) -> Vec<NodeId> {
    tree.children(id)
        .filter(|&c| {
            let style = tree.style(c);
            style.is_displayed() && !style.is_absolute()
        })
        .collect()
}

fn hug_container(tree: &NodeTree, frames: &mut Frames, id: NodeId) {
    let style = tree.style(id);
    let main = main_axis(style);
    let cross = main.other();
    let children = flow_children(tree, id);

    let gap = if style.flex.justify_content.is_space_distribution() {
        0.0
    } else {
        style.main_gap()
    };
    let frame = &frames[id];
    let limit = (style.flex.wrap.is_wrapping() && frame.definite[main.idx()])
        .then(|| (frame.size[main.idx()] - inset(style, main)).max(0.0));

    let lines = form_lines(tree, frames, &children, main, gap, limit);

    let reference = match tree.parent(id) {
        Some(p) => [
            content_size(tree, frames, p, Axis::X),
            content_size(tree, frames, p, Axis::Y),
        ],
        None => [None, None],
    };

    let hugged_main = lines.iter().map(|l| l.main).fold(0.0, f32::max) + inset(style, main);
    let hugged_cross = stacked_cross(&lines, style.cross_gap()) + inset(style, cross);

    let frame = &mut frames[id];
    if !frame.settled[main.idx()] {
        frame.size[main.idx()] = clamp(style, main, hugged_main, reference[main.idx()]);
    }
    if !frame.settled[cross.idx()] {
        frame.size[cross.idx()] = clamp(style, cross, hugged_cross, reference[cross.idx()]);
    }
    log::trace!(
        "Hugged {}: {}x{} over {} line(s)",
        id,
        frame.size[0],
        frame.size[1],
        lines.len()
    );
    frame.lines = lines;
}
