//! Pass 2: flex distribution, alignment and positioning, top-down.
//!
//! When a container is visited its own size and position are final. It resolves its
//! children's sizes against its content box, places them, and leaves their own children to
//! later iterations.

use super::frame::{
    Axis, Frame, Frames, Line, aspect_derive, clamp, inset, inset_start, main_axis, margin_end,
    margin_start, margins, offsets, size_dim,
};
use super::hug::flow_children;
use super::lines::{distribute_lines, form_lines, outer};
use crate::config::LayoutConfig;
use crate::style::ComputedStyleData;
use crate::tree::NodeTree;
use flexa_style::{AlignItems, Dimension, FlexWrap, JustifyContent, Overflow};
use flexa_types::NodeId;

/// The resolved content box of the container being laid out.
struct Content {
    /// Screen-space origin of the content box.
    origin: [f32; 2],
    /// Content-box size after scrollbar reservation.
    size: [f32; 2],
    main: Axis,
}

impl Content {
    fn cross(&self) -> Axis {
        self.main.other()
    }

    fn inner(&self, axis: Axis) -> f32 {
        self.size[axis.idx()]
    }
}

pub(crate) fn run(tree: &NodeTree, frames: &mut Frames, order: &[NodeId], config: &LayoutConfig) {
    for &id in order {
        if tree.kind(id).is_text() {
            continue;
        }
        layout_container(tree, frames, id, config);
    }
}

fn layout_container(tree: &NodeTree, frames: &mut Frames, id: NodeId, config: &LayoutConfig) {
    let style = tree.style(id);
    let content = reserve_scrollbars(style, &mut frames[id], config);
    let children = flow_children(tree, id);

    for &child in &children {
        resolve_percentages(tree, frames, child, &content);
    }

    let gap = if style.flex.justify_content.is_space_distribution() {
        0.0
    } else {
        style.main_gap()
    };
    let wrapping = style.flex.wrap.is_wrapping();
    let limit = wrapping.then(|| content.inner(content.main));
    let mut lines = form_lines(tree, frames, &children, content.main, gap, limit);

    for line in &lines {
        distribute_flex(tree, frames, line, &content, gap);
    }
    for &child in &children {
        clamp_and_aspect(tree, frames, child, &content);
    }

    if wrapping {
        for line in lines.iter_mut() {
            line.cross = line
                .items
                .iter()
                .map(|&c| outer(tree, frames, c, content.cross()))
                .fold(0.0, f32::max);
        }
        distribute_lines(
            &mut lines,
            content.inner(content.cross()),
            style.cross_gap(),
            style.flex.align_content,
            style.flex.wrap == FlexWrap::WrapReverse,
        );
    } else if let Some(line) = lines.first_mut() {
        line.cross = content.inner(content.cross());
        line.offset = 0.0;
    }

    for line in &lines {
        stretch_line(tree, frames, style, line, &content);
        justify_line(tree, frames, style, line, &content, gap);
        align_line(tree, frames, style, line, &content);
    }

    for &child in &children {
        apply_relative_offsets(tree, frames, child);
    }

    let absolute: Vec<NodeId> = tree
        .children(id)
        .filter(|&c| {
            let s = tree.style(c);
            s.is_displayed() && s.is_absolute()
        })
        .collect();
    for child in absolute {
        place_absolute(tree, frames, id, child, &content);
    }

    frames[id].lines = lines;
}

/// Takes scrollbar thickness out of the box for `overflow: scroll` axes and returns the
/// remaining content box.
fn reserve_scrollbars(
    style: &ComputedStyleData,
    frame: &mut Frame,
    config: &LayoutConfig,
) -> Content {
    frame.reserved = [0.0, 0.0];
    frame.has_vertical_scrollbar = style.overflow.y == Overflow::Scroll;
    frame.has_horizontal_scrollbar = style.overflow.x == Overflow::Scroll;
    if frame.has_vertical_scrollbar {
        frame.reserved[Axis::X.idx()] = config.scrollbar_size;
    }
    if frame.has_horizontal_scrollbar {
        frame.reserved[Axis::Y.idx()] = config.scrollbar_size;
    }

    let mut origin = [0.0; 2];
    let mut size = [0.0; 2];
    for axis in Axis::BOTH {
        let i = axis.idx();
        origin[i] = frame.pos[i] + inset_start(style, axis);
        size[i] = (frame.size[i] - inset(style, axis) - frame.reserved[i]).max(0.0);
    }
    Content {
        origin,
        size,
        main: main_axis(style),
    }
}

/// The size a child's flex-basis asks for along the main axis, if any.
fn basis_size(style: &ComputedStyleData, content: &Content) -> Option<f32> {
    style.flex.basis.resolve(content.inner(content.main))
}

/// Second-chance resolution of percentages against the container's final content box.
fn resolve_percentages(tree: &NodeTree, frames: &mut Frames, child: NodeId, content: &Content) {
    let style = tree.style(child);
    let frame = &mut frames[child];
    frame.aspect_locked = [false, false];
    for axis in Axis::BOTH {
        let inner = content.inner(axis);
        let dim = if axis == content.main && !style.flex.basis.is_auto() {
            style.flex.basis
        } else {
            size_dim(style, axis)
        };
        if let Dimension::Percent(p) = dim {
            frame.size[axis.idx()] = inner * p / 100.0;
            frame.definite[axis.idx()] = true;
        }
    }
}

/// Grows or shrinks the members of one line along the main axis.
fn distribute_flex(tree: &NodeTree, frames: &mut Frames, line: &Line, content: &Content, gap: f32) {
    let main = content.main;
    let mut used = 0.0;
    let mut total_grow = 0.0;
    let mut total_shrink = 0.0;

    for &child in &line.items {
        let style = tree.style(child);
        if style.flex.grow > 0.0 {
            frames[child].size[main.idx()] = basis_size(style, content).unwrap_or(0.0);
            total_grow += style.flex.grow;
        }
        total_shrink += style.flex.shrink;
        used += outer(tree, frames, child, main);
    }

    let gaps = gap * line.items.len().saturating_sub(1) as f32;
    let available = content.inner(main) - used - gaps;

    if available > 0.0 && total_grow > 0.0 {
        let flexible: Vec<NodeId> = line
            .items
            .iter()
            .copied()
            .filter(|&c| tree.style(c).flex.grow > 0.0)
            .collect();
        let mut assigned = 0.0;
        for (i, &child) in flexible.iter().enumerate() {
            let share = if i + 1 == flexible.len() {
                available - assigned
            } else {
                (available * tree.style(child).flex.grow / total_grow).round()
            };
            assigned += share;
            frames[child].size[main.idx()] += share;
        }
    } else if available < 0.0 && total_shrink > 0.0 {
        for &child in &line.items {
            let shrink = tree.style(child).flex.shrink;
            if shrink > 0.0 {
                let size = &mut frames[child].size[main.idx()];
                *size = (*size + available * shrink / total_shrink).max(0.0);
            }
        }
    }
}

/// True when a dimension of a flow child is fixed by style or by flexing.
fn is_defined(style: &ComputedStyleData, axis: Axis, content: &Content) -> bool {
    if !size_dim(style, axis).is_auto() {
        return true;
    }
    axis == content.main && (!style.flex.basis.is_auto() || style.flex.grow > 0.0)
}

fn clamp_and_aspect(tree: &NodeTree, frames: &mut Frames, child: NodeId, content: &Content) {
    let style = tree.style(child);
    let frame = &mut frames[child];
    for axis in Axis::BOTH {
        let i = axis.idx();
        frame.size[i] = clamp(style, axis, frame.size[i], Some(content.inner(axis)));
    }

    let Some(ratio) = style.box_model.aspect_ratio else {
        return;
    };
    let w_defined = is_defined(style, Axis::X, content);
    let h_defined = is_defined(style, Axis::Y, content);
    let derived = match (w_defined, h_defined) {
        (true, true) => None,
        (true, false) => Some(Axis::Y),
        (false, true) => Some(Axis::X),
        (false, false) => {
            // The container's cross size stands in for the missing definition.
            let cross = content.cross();
            let i = cross.idx();
            let fill = (content.inner(cross) - margins(style, cross)).max(0.0);
            frame.size[i] = clamp(style, cross, fill, Some(content.inner(cross)));
            frame.aspect_locked[i] = true;
            Some(content.main)
        }
    };
    if let Some(axis) = derived {
        let known = frame.size[axis.other().idx()];
        let value = aspect_derive(ratio, known, axis);
        frame.size[axis.idx()] = clamp(style, axis, value, Some(content.inner(axis)));
        frame.aspect_locked[axis.idx()] = true;
    }
}

fn stretch_line(
    tree: &NodeTree,
    frames: &mut Frames,
    container: &ComputedStyleData,
    line: &Line,
    content: &Content,
) {
    let cross = content.cross();
    for &child in &line.items {
        let style = tree.style(child);
        let frame = &mut frames[child];
        let align = style.flex.align_self.resolve(container.flex.align_items);
        if align != AlignItems::Stretch
            || !size_dim(style, cross).is_auto()
            || frame.aspect_locked[cross.idx()]
        {
            continue;
        }
        let fill = (line.cross - margins(style, cross)).max(0.0);
        frame.size[cross.idx()] = clamp(style, cross, fill, Some(content.inner(cross)));
    }
}

/// Main-axis placement of one line per `justify-content`.
fn justify_line(
    tree: &NodeTree,
    frames: &mut Frames,
    container: &ComputedStyleData,
    line: &Line,
    content: &Content,
    gap: f32,
) {
    let main = content.main;
    let n = line.items.len();
    if n == 0 {
        return;
    }
    let count = n as f32;
    let used: f32 = line
        .items
        .iter()
        .map(|&c| outer(tree, frames, c, main))
        .sum();
    let available = content.inner(main) - used - gap * (count - 1.0);
    let reversed = container.flex.direction.is_reversed();
    let start = if reversed { available } else { 0.0 };

    let (lead, between) = match container.flex.justify_content {
        JustifyContent::Start => (start, 0.0),
        JustifyContent::End => (if reversed { 0.0 } else { available }, 0.0),
        JustifyContent::Center => (available / 2.0, 0.0),
        JustifyContent::SpaceBetween if available >= 0.0 && n > 1 => (0.0, available / (count - 1.0)),
        JustifyContent::SpaceAround if available >= 0.0 => {
            (available / (2.0 * count), available / count)
        }
        JustifyContent::SpaceEvenly if available >= 0.0 => {
            (available / (count + 1.0), available / (count + 1.0))
        }
        _ => (start, 0.0),
    };

    let mut cursor = lead;
    let mut place = |child: NodeId| {
        let style = tree.style(child);
        let extent = outer(tree, frames, child, main);
        frames[child].pos[main.idx()] =
            content.origin[main.idx()] + cursor + margin_start(style, main);
        cursor += extent + gap + between;
    };
    if reversed {
        line.items.iter().rev().copied().for_each(&mut place);
    } else {
        line.items.iter().copied().for_each(&mut place);
    }
}

/// Cross-axis placement of one line per `align-self` / `align-items`.
fn align_line(
    tree: &NodeTree,
    frames: &mut Frames,
    container: &ComputedStyleData,
    line: &Line,
    content: &Content,
) {
    let cross = content.cross();
    for &child in &line.items {
        let style = tree.style(child);
        let extent = outer(tree, frames, child, cross);
        let offset = match style.flex.align_self.resolve(container.flex.align_items) {
            AlignItems::Start | AlignItems::Stretch => 0.0,
            AlignItems::Center => (line.cross - extent) / 2.0,
            AlignItems::End => line.cross - extent,
        };
        frames[child].pos[cross.idx()] =
            content.origin[cross.idx()] + line.offset + offset + margin_start(style, cross);
    }
}

/// Visual shift for relative children. `left` wins over `right`, `top` over `bottom`.
fn apply_relative_offsets(tree: &NodeTree, frames: &mut Frames, child: NodeId) {
    let style = tree.style(child);
    let frame = &mut frames[child];
    for axis in Axis::BOTH {
        match offsets(style, axis) {
            (Some(start), _) => frame.pos[axis.idx()] += start,
            (None, Some(end)) => frame.pos[axis.idx()] -= end,
            (None, None) => {}
        }
    }
}

/// Positions an absolute child against the container's border box.
fn place_absolute(
    tree: &NodeTree,
    frames: &mut Frames,
    parent: NodeId,
    child: NodeId,
    content: &Content,
) {
    let base = frames[parent].pos;
    let reference = frames[parent].size;
    let style = tree.style(child);
    let frame = &mut frames[child];
    frame.aspect_locked = [false, false];

    let mut defined = [false; 2];
    for axis in Axis::BOTH {
        let i = axis.idx();
        let (start, end) = offsets(style, axis);
        let size = match (size_dim(style, axis), start, end) {
            (Dimension::Px(v), _, _) => Some(v),
            (Dimension::Percent(p), _, _) => Some(reference[i] * p / 100.0),
            (Dimension::Auto, Some(s), Some(e)) => {
                Some((reference[i] - s - e - margins(style, axis)).max(0.0))
            }
            (Dimension::Auto, _, _) => None,
        };
        defined[i] = size.is_some();
        let value = size.unwrap_or(frame.size[i]);
        frame.size[i] = clamp(style, axis, value, Some(reference[i]));
    }

    if let Some(ratio) = style.box_model.aspect_ratio {
        let derived = match defined {
            [true, false] => Some(Axis::Y),
            [false, true] => Some(Axis::X),
            _ => None,
        };
        if let Some(axis) = derived {
            let known = frame.size[axis.other().idx()];
            let value = aspect_derive(ratio, known, axis);
            frame.size[axis.idx()] = clamp(style, axis, value, Some(reference[axis.idx()]));
        }
    }

    for axis in Axis::BOTH {
        let i = axis.idx();
        frame.pos[i] = match offsets(style, axis) {
            (Some(start), _) => base[i] + start + margin_start(style, axis),
            (None, Some(end)) => base[i] + reference[i] - end - frame.size[i] - margin_end(style, axis),
            (None, None) => content.origin[i] + margin_start(style, axis),
        };
    }
}
