//! Pass 0: seed sizes top-down from explicit values, percentage chains and text metrics.

use super::frame::{
    Axis, Frames, aspect_derive, clamp, content_size, inset, main_axis, margin_start, margins,
    size_dim,
};
use crate::node_kind::NodeKind;
use crate::tree::NodeTree;
use flexa_style::Dimension;
use flexa_traits::{MeasureError, TextMeasureRequest, TextMeasurer};
use flexa_types::{NodeId, Size};

pub(crate) fn run(
    tree: &NodeTree,
    frames: &mut Frames,
    order: &[NodeId],
    root: NodeId,
    root_size: Size,
    measurer: &dyn TextMeasurer,
) -> Result<(), MeasureError> {
    for &id in order {
        if id == root {
            seed_root(tree, frames, root, root_size);
            continue;
        }
        seed_node(tree, frames, root, id);
        if let NodeKind::Text(content) = tree.kind(id) {
            measure_text(tree, frames, root, id, &content.text, measurer)?;
        }
    }
    Ok(())
}

fn seed_root(tree: &NodeTree, frames: &mut Frames, root: NodeId, root_size: Size) {
    let style = tree.style(root);
    let available = [root_size.width, root_size.height];
    let frame = &mut frames[root];
    for axis in Axis::BOTH {
        let i = axis.idx();
        let size = match size_dim(style, axis) {
            Dimension::Px(v) => v,
            Dimension::Percent(p) => available[i] * p / 100.0,
            Dimension::Auto => available[i] - margins(style, axis),
        };
        frame.size[i] = clamp(style, axis, size, Some(available[i]));
        frame.pos[i] = margin_start(style, axis);
        frame.definite[i] = true;
        frame.settled[i] = true;
    }

    // An auto axis on the root follows the explicit one through the aspect ratio.
    if let Some(ratio) = style.box_model.aspect_ratio {
        let auto = [size_dim(style, Axis::X).is_auto(), size_dim(style, Axis::Y).is_auto()];
        let derive = match auto {
            [false, true] => Some(Axis::Y),
            [true, false] => Some(Axis::X),
            _ => None,
        };
        if let Some(axis) = derive {
            let i = axis.idx();
            let known = frame.size[axis.other().idx()];
            let size = aspect_derive(ratio, known, axis);
            frame.size[i] = clamp(style, axis, size, Some(available[i]));
        }
    }
}

fn seed_node(tree: &NodeTree, frames: &mut Frames, root: NodeId, id: NodeId) {
    let style = tree.style(id);
    let parent = tree.parent(id);
    let parent_main = parent.map(|p| main_axis(tree.style(p)));

    for axis in Axis::BOTH {
        let basis = if !style.is_absolute() && parent_main == Some(axis) {
            style.flex.basis
        } else {
            Dimension::Auto
        };
        let dim = if basis.is_auto() {
            size_dim(style, axis)
        } else {
            basis
        };

        let (size, definite, settled) = match dim {
            Dimension::Px(v) => (v, true, true),
            Dimension::Percent(p) => match resolve_percent_chain(tree, frames, root, id, axis, p) {
                Some(v) => (v, true, true),
                // Revisited once the parent's size is final.
                None => (0.0, false, true),
            },
            Dimension::Auto => (0.0, false, false),
        };

        let reference = parent.and_then(|p| content_size(tree, frames, p, axis));
        let frame = &mut frames[id];
        frame.size[axis.idx()] = if settled {
            clamp(style, axis, size, reference)
        } else {
            size
        };
        frame.definite[axis.idx()] = definite;
        frame.settled[axis.idx()] = settled;
    }

    if let Some(ratio) = style.box_model.aspect_ratio {
        let frame = &mut frames[id];
        if frame.definite[0] && !frame.settled[1] {
            frame.size[1] = aspect_derive(ratio, frame.size[0], Axis::Y);
            frame.settled[1] = true;
        } else if frame.definite[1] && !frame.settled[0] {
            frame.size[0] = aspect_derive(ratio, frame.size[1], Axis::X);
            frame.settled[0] = true;
        }
    }
}

/// Multiplies nested percentages up the parent chain until an ancestor with an explicit
/// pixel size (or the layout root) is found, then resolves against its content box.
/// Returns `None` when an `auto` ancestor interrupts the chain.
pub(crate) fn resolve_percent_chain(
    tree: &NodeTree,
    frames: &Frames,
    root: NodeId,
    id: NodeId,
    axis: Axis,
    percent: f32,
) -> Option<f32> {
    let mut factor = percent / 100.0;
    let mut current = tree.parent(id)?;
    loop {
        let style = tree.style(current);
        let frame = &frames[current];
        let dim = size_dim(style, axis);
        if current == root || matches!(dim, Dimension::Px(_)) {
            let content = (frame.size[axis.idx()] - inset(style, axis)).max(0.0);
            return Some(content * factor);
        }
        match dim {
            Dimension::Percent(p) => {
                factor *= p / 100.0;
                current = tree.parent(current)?;
            }
            _ => return None,
        }
    }
}

/// Width available to a text leaf: the nearest definite ancestor's content width.
fn available_text_width(tree: &NodeTree, frames: &Frames, root: NodeId, id: NodeId) -> Option<f32> {
    let mut current = tree.parent(id);
    while let Some(ancestor) = current {
        if let Some(width) = content_size(tree, frames, ancestor, Axis::X) {
            return Some(width);
        }
        if ancestor == root {
            break;
        }
        current = tree.parent(ancestor);
    }
    None
}

fn measure_text(
    tree: &NodeTree,
    frames: &mut Frames,
    root: NodeId,
    id: NodeId,
    text: &str,
    measurer: &dyn TextMeasurer,
) -> Result<(), MeasureError> {
    let style = tree.style(id);
    let own_x = inset(style, Axis::X);
    let own_y = inset(style, Axis::Y);
    let frame = &frames[id];
    let (settled_w, settled_h) = (frame.settled[0], frame.settled[1]);
    if settled_w && settled_h {
        return Ok(());
    }

    let available = if frame.definite[0] {
        Some(frame.size[0])
    } else {
        available_text_width(tree, frames, root, id)
    }
    .map(|w| (w - own_x).max(0.0));

    let request = TextMeasureRequest {
        font_family: &style.text.font_family,
        font_size: style.text.font_size,
        line_height: style.text.line_height,
        text,
        align: style.text.text_align,
        max_width: available,
        no_wrap: available.is_none(),
    };
    let measured = measurer.measure(&request)?;
    log::trace!(
        "Measured text {} with {}: {}x{}",
        id,
        measurer.name(),
        measured.width,
        measured.height
    );

    let frame = &mut frames[id];
    if !settled_w {
        frame.size[0] = measured.width + own_x;
    }
    if !settled_h {
        frame.size[1] = measured.height + own_y;
    }
    Ok(())
}
