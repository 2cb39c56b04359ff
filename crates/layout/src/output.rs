//! Read-only views over computed geometry for painters.
//!
//! The engine stores unscrolled positions. These helpers apply ancestor scroll offsets,
//! compute clip rectangles and produce the order in which nodes should be painted.

use crate::traversal::ancestors;
use crate::tree::NodeTree;
use flexa_types::{NodeId, Rect};

/// Depth-first paint order of the displayed subtree under `root`.
///
/// Siblings are stably sorted by `z_index`, so equal values keep sibling order. A parent
/// is always painted before its children.
pub fn paint_order(tree: &NodeTree, root: NodeId) -> Vec<NodeId> {
    let mut order = Vec::new();
    if !tree.style(root).is_displayed() {
        return order;
    }

    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        order.push(id);
        let mut children: Vec<NodeId> = tree
            .children(id)
            .filter(|&c| tree.style(c).is_displayed())
            .collect();
        children.sort_by_key(|&c| tree.style(c).position.z_index);
        // Reversed so the lowest z-index is popped first.
        stack.extend(children.into_iter().rev());
    }
    order
}

/// The client rectangle of `id` shifted by the scroll offsets of all its ancestors.
pub fn visual_rect(tree: &NodeTree, id: NodeId) -> Rect {
    let (dx, dy) = ancestors(tree, id).fold((0.0, 0.0), |(dx, dy), a| {
        let state = &tree.node(a).state;
        (dx + state.scroll_x, dy + state.scroll_y)
    });
    tree.node(id).state.client_rect().translate(-dx, -dy)
}

/// The visible area `id` is clipped to, or `None` when no ancestor clips.
pub fn clip_rect(tree: &NodeTree, id: NodeId) -> Option<Rect> {
    ancestors(tree, id)
        .filter(|&a| tree.style(a).clips())
        .map(|a| visual_rect(tree, a))
        .reduce(|acc, r| acc.intersect(&r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::layout;
    use flexa_style::{ElementStyle, parse_inline_css};
    use flexa_traits::MonospaceMeasurer;
    use flexa_types::Size;

    fn css(s: &str) -> ElementStyle {
        let mut style = ElementStyle::default();
        parse_inline_css(s, &mut style).unwrap();
        style
    }

    #[test]
    fn test_paint_order_respects_z_index_and_sibling_order() {
        let mut tree = NodeTree::new();
        let root = tree.new_container(ElementStyle::default());
        let a = tree.new_container(css("z-index: 2"));
        let b = tree.new_container(ElementStyle::default());
        let c = tree.new_container(ElementStyle::default());
        let hidden = tree.new_container(css("display: none"));
        let b1 = tree.new_container(ElementStyle::default());
        for child in [a, b, c, hidden] {
            tree.add(root, child);
        }
        tree.add(b, b1);

        assert_eq!(paint_order(&tree, root), vec![root, b, b1, c, a]);
    }

    #[test]
    fn test_visual_and_clip_rects_follow_scroll() {
        let mut tree = NodeTree::new();
        let root = tree.new_container(css("width: 200; height: 200"));
        let viewport = tree.new_container(css("height: 100; overflow: hidden"));
        let content = tree.new_container(css("height: 300"));
        tree.add(root, viewport);
        tree.add(viewport, content);

        layout(&mut tree, root, Size::new(200.0, 200.0), &MonospaceMeasurer::default()).unwrap();
        assert_eq!(clip_rect(&tree, viewport), None);
        assert_eq!(clip_rect(&tree, content), Some(Rect::new(0.0, 0.0, 0.0, 100.0)));

        tree.scroll_to(viewport, 0.0, 40.0);
        // Hidden overflow is not a scroll container, so the offset is clamped away.
        layout(&mut tree, root, Size::new(200.0, 200.0), &MonospaceMeasurer::default()).unwrap();
        assert_eq!(visual_rect(&tree, content).y, 0.0);
    }

    #[test]
    fn test_visual_rect_subtracts_ancestor_scroll() {
        let mut tree = NodeTree::new();
        let root = tree.new_container(css("width: 100; height: 100"));
        let scroller = tree.new_container(css("height: 50; width: 100; overflow-y: scroll"));
        let content = tree.new_container(css("height: 200; width: 20"));
        tree.add(root, scroller);
        tree.add(scroller, content);

        tree.scroll_to(scroller, 0.0, 30.0);
        layout(&mut tree, root, Size::new(100.0, 100.0), &MonospaceMeasurer::default()).unwrap();

        let state = tree.geometry(scroller);
        assert!(state.has_vertical_scrollbar);
        assert_eq!(state.client_width, 92.0);
        assert_eq!(state.scroll_height, 200.0);
        assert_eq!(state.scroll_y, 30.0);

        let rect = visual_rect(&tree, content);
        assert_eq!((rect.x, rect.y), (0.0, -30.0));
        assert_eq!(clip_rect(&tree, content), Some(Rect::new(0.0, 0.0, 92.0, 50.0)));
    }
}
