//! Layout engine micro-benchmarks
//!
//! Measures full four-pass layout runs over trees of increasing size and shape.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use flexa::{
    CachedMeasurer, ElementStyle, LayoutEngine, MonospaceMeasurer, NodeId, NodeTree, Size,
    parse_inline_css,
};
use std::hint::black_box;

fn css(declarations: &str) -> ElementStyle {
    let mut style = ElementStyle::default();
    parse_inline_css(declarations, &mut style).expect("benchmark css is valid");
    style
}

/// A wrapping row of `count` fixed-size tiles, each holding a caption.
fn tile_grid(count: usize) -> (NodeTree, NodeId) {
    let mut tree = NodeTree::with_capacity(count * 2 + 1);
    let root = tree.new_container(css(
        "flex-direction: row; flex-wrap: wrap; gap: 8; padding: 8; overflow-y: auto",
    ));
    for i in 0..count {
        let tile = tree.new_container(css("width: 120; height: 80; padding: 4"));
        let caption = tree.new_text(format!("Tile number {i}"), css("font-size: 12"));
        tree.add(tile, caption);
        tree.add(root, tile);
    }
    (tree, root)
}

/// Nested columns `depth` levels deep, each level splitting space between two growing
/// children.
fn nested_columns(depth: usize) -> (NodeTree, NodeId) {
    fn grow(tree: &mut NodeTree, parent: NodeId, depth: usize) {
        if depth == 0 {
            return;
        }
        for direction in ["row", "column"] {
            let style = format!("flex-grow: 1; flex-direction: {direction}; align-items: stretch");
            let child = tree.new_container(css(&style));
            tree.add(parent, child);
            grow(tree, child, depth - 1);
        }
    }

    let mut tree = NodeTree::new();
    let root = tree.new_container(css("align-items: stretch"));
    grow(&mut tree, root, depth);
    (tree, root)
}

fn bench_tile_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile_grid");
    let engine = LayoutEngine::default();
    let measurer = CachedMeasurer::new(MonospaceMeasurer::default());

    for count in [10, 100, 1000] {
        let (mut tree, root) = tile_grid(count);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                engine
                    .layout(&mut tree, root, Size::new(1280.0, 720.0), &measurer)
                    .expect("monospace measurement cannot fail");
                black_box(tree.geometry(root))
            })
        });
    }
    group.finish();
}

fn bench_nested_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_columns");
    let engine = LayoutEngine::default();
    let measurer = MonospaceMeasurer::default();

    for depth in [4, 8, 12] {
        let (mut tree, root) = nested_columns(depth);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| {
                engine
                    .layout(&mut tree, root, Size::new(1920.0, 1080.0), &measurer)
                    .expect("no text to measure");
                black_box(tree.geometry(root))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tile_grid, bench_nested_columns);
criterion_main!(benches);
