//! Wrap-line formation and cross-axis line distribution.

use super::frame::{Axis, EPSILON, Frames, Line, margins};
use crate::tree::NodeTree;
use flexa_style::AlignContent;
use flexa_types::NodeId;

/// The outer extent (size plus margins) of `id` along `axis`.
pub(crate) fn outer(tree: &NodeTree, frames: &Frames, id: NodeId, axis: Axis) -> f32 {
    frames[id].size[axis.idx()] + margins(tree.style(id), axis)
}

/// Greedily partitions `children` into lines no longer than `limit` along `main`.
///
/// Without a limit every child lands on a single line. A child that is longer than the
/// limit on its own still gets a line of its own.
pub(crate) fn form_lines(
    tree: &NodeTree,
    frames: &Frames,
    children: &[NodeId],
    main: Axis,
    gap: f32,
    limit: Option<f32>,
) -> Vec<Line> {
    let cross = main.other();
    let mut lines = Vec::new();
    let mut current = Line::default();

    for &child in children {
        let child_main = outer(tree, frames, child, main);
        let child_cross = outer(tree, frames, child, cross);
        if let Some(limit) = limit {
            if !current.items.is_empty() && current.main + gap + child_main > limit + EPSILON {
                lines.push(std::mem::take(&mut current));
            }
        }
        if !current.items.is_empty() {
            current.main += gap;
        }
        current.main += child_main;
        current.cross = current.cross.max(child_cross);
        current.items.push(child);
    }

    if !current.items.is_empty() {
        lines.push(current);
    }
    lines
}

/// Total cross extent of a set of lines including the gaps between them.
pub(crate) fn stacked_cross(lines: &[Line], gap: f32) -> f32 {
    let sum: f32 = lines.iter().map(|l| l.cross).sum();
    sum + gap * lines.len().saturating_sub(1) as f32
}

/// Assigns each line its cross offset inside a content box of `available` thickness.
///
/// Space modes with no free space fall back to `start`. With `reverse` the lines stack
/// from the cross end.
pub(crate) fn distribute_lines(
    lines: &mut [Line],
    available: f32,
    gap: f32,
    mode: AlignContent,
    reverse: bool,
) {
    let n = lines.len();
    if n == 0 {
        return;
    }
    let free = available - stacked_cross(lines, gap);
    let count = n as f32;

    let (lead, between) = match mode {
        AlignContent::Start => (0.0, 0.0),
        AlignContent::Center => (free / 2.0, 0.0),
        AlignContent::End => (free, 0.0),
        AlignContent::Stretch => {
            if free > 0.0 {
                for line in lines.iter_mut() {
                    line.cross += free / count;
                }
            }
            (0.0, 0.0)
        }
        AlignContent::SpaceBetween if free > 0.0 && n > 1 => (0.0, free / (count - 1.0)),
        AlignContent::SpaceAround if free > 0.0 => (free / (2.0 * count), free / count),
        AlignContent::SpaceEvenly if free > 0.0 => (free / (count + 1.0), free / (count + 1.0)),
        _ => (0.0, 0.0),
    };

    let mut cursor = lead;
    for line in lines.iter_mut() {
        line.offset = cursor;
        cursor += line.cross + gap + between;
    }

    if reverse {
        for line in lines.iter_mut() {
            line.offset = available - line.offset - line.cross;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(thickness: &[f32]) -> Vec<Line> {
        thickness
            .iter()
            .map(|&cross| Line {
                cross,
                ..Default::default()
            })
            .collect()
    }

    fn offsets(lines: &[Line]) -> Vec<f32> {
        lines.iter().map(|l| l.offset).collect()
    }

    #[test]
    fn test_distribute_start_and_end() {
        let mut ls = lines(&[10.0, 20.0]);
        distribute_lines(&mut ls, 100.0, 5.0, AlignContent::Start, false);
        assert_eq!(offsets(&ls), vec![0.0, 15.0]);

        distribute_lines(&mut ls, 100.0, 5.0, AlignContent::End, false);
        assert_eq!(offsets(&ls), vec![65.0, 80.0]);
    }

    #[test]
    fn test_distribute_space_modes() {
        let mut ls = lines(&[10.0, 10.0]);
        distribute_lines(&mut ls, 100.0, 0.0, AlignContent::SpaceBetween, false);
        assert_eq!(offsets(&ls), vec![0.0, 90.0]);

        distribute_lines(&mut ls, 100.0, 0.0, AlignContent::SpaceAround, false);
        assert_eq!(offsets(&ls), vec![20.0, 70.0]);

        let mut ls = lines(&[10.0, 10.0, 10.0]);
        distribute_lines(&mut ls, 110.0, 0.0, AlignContent::SpaceEvenly, false);
        assert_eq!(offsets(&ls), vec![20.0, 50.0, 80.0]);
    }

    #[test]
    fn test_distribute_stretch_grows_lines() {
        let mut ls = lines(&[10.0, 30.0]);
        distribute_lines(&mut ls, 100.0, 0.0, AlignContent::Stretch, false);
        assert_eq!(ls[0].cross, 40.0);
        assert_eq!(ls[1].cross, 60.0);
        assert_eq!(offsets(&ls), vec![0.0, 40.0]);
    }

    #[test]
    fn test_negative_free_space_falls_back_to_start() {
        let mut ls = lines(&[60.0, 60.0]);
        distribute_lines(&mut ls, 100.0, 0.0, AlignContent::SpaceEvenly, false);
        assert_eq!(offsets(&ls), vec![0.0, 60.0]);
    }

    #[test]
    fn test_reverse_stacks_from_cross_end() {
        let mut ls = lines(&[10.0, 20.0]);
        distribute_lines(&mut ls, 100.0, 0.0, AlignContent::Start, true);
        assert_eq!(offsets(&ls), vec![90.0, 70.0]);
    }

    #[test]
    fn test_stacked_cross_counts_gaps() {
        assert_eq!(stacked_cross(&lines(&[10.0, 20.0, 30.0]), 5.0), 70.0);
        assert_eq!(stacked_cross(&[], 5.0), 0.0);
    }
}
