#![allow(dead_code)]

pub mod fixtures;

use flexa::{ElementStyle, MonospaceMeasurer, NodeId, NodeState, NodeTree, Size, layout, parse_inline_css};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses an inline declaration block into a style.
pub fn css(declarations: &str) -> ElementStyle {
    let mut style = ElementStyle::default();
    parse_inline_css(declarations, &mut style)
        .unwrap_or_else(|e| panic!("bad test css '{declarations}': {e}"));
    style
}

/// Creates a container with `declarations` and appends it to `parent`.
pub fn child(tree: &mut NodeTree, parent: NodeId, declarations: &str) -> NodeId {
    let id = tree.new_container(css(declarations));
    tree.add(parent, id);
    id
}

/// Lays out `root` with the default engine and a monospace measurer.
pub fn run(tree: &mut NodeTree, root: NodeId, width: f32, height: f32) {
    layout(tree, root, Size::new(width, height), &MonospaceMeasurer::default())
        .expect("layout with the monospace measurer cannot fail");
}

pub fn widths(tree: &NodeTree, ids: &[NodeId]) -> Vec<f32> {
    ids.iter().map(|&id| tree.geometry(id).client_width).collect()
}

pub fn heights(tree: &NodeTree, ids: &[NodeId]) -> Vec<f32> {
    ids.iter().map(|&id| tree.geometry(id).client_height).collect()
}

pub fn xs(tree: &NodeTree, ids: &[NodeId]) -> Vec<f32> {
    ids.iter().map(|&id| tree.geometry(id).x).collect()
}

pub fn ys(tree: &NodeTree, ids: &[NodeId]) -> Vec<f32> {
    ids.iter().map(|&id| tree.geometry(id).y).collect()
}

pub fn states(tree: &NodeTree) -> Vec<NodeState> {
    (0..tree.len()).map(|i| tree.geometry(NodeId::new(i))).collect()
}
