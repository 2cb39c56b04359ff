//! The four-pass layout engine.
//!
//! A run computes everything into per-node scratch [`frame::Frame`]s and only writes the
//! results into [`NodeState`] once every pass has succeeded.

mod flex;
mod frame;
mod hug;
mod lines;
mod scroll;
mod seed;

use self::frame::{Axis, Frames};
use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::interface::NodeState;
use crate::perf::{DebugProfiler, NoOpProfiler, Profiler};
use crate::traversal::{hidden_nodes, level_order};
use crate::tree::NodeTree;
use flexa_traits::TextMeasurer;
use flexa_types::{NodeId, Size};
use std::sync::Arc;

pub struct LayoutEngine {
    config: LayoutConfig,
    profiler: Arc<dyn Profiler>,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        let profiler: Arc<dyn Profiler> = if cfg!(feature = "profiling") {
            Arc::new(DebugProfiler::new())
        } else {
            Arc::new(NoOpProfiler)
        };
        Self { config, profiler }
    }

    /// Replaces the profiler, e.g. with a shared [`DebugProfiler`] the caller inspects.
    pub fn with_profiler(mut self, profiler: Arc<dyn Profiler>) -> Self {
        self.profiler = profiler;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn profiler(&self) -> &dyn Profiler {
        self.profiler.as_ref()
    }

    /// Lays out the subtree under `root` into a viewport of `root_size`.
    ///
    /// Every displayed node of the subtree has its [`NodeState`] overwritten; hidden nodes
    /// are zeroed. When the measurer fails nothing is written.
    pub fn layout(
        &self,
        tree: &mut NodeTree,
        root: NodeId,
        root_size: Size,
        measurer: &dyn TextMeasurer,
    ) -> Result<(), LayoutError> {
        #[cfg(feature = "profiling")]
        let start = instant::Instant::now();

        let order = level_order(tree, root);
        log::debug!(
            "Layout of {} over {}x{}: {} visible node(s)",
            root,
            root_size.width,
            root_size.height,
            order.len()
        );

        let mut frames = Frames::new(tree.len());
        let tree_ref: &NodeTree = tree;
        self.timed("seed", || {
            seed::run(tree_ref, &mut frames, &order, root, root_size, measurer)
        })?;
        log::trace!("Pass 0 (seed) done");
        self.timed("hug", || hug::run(tree_ref, &mut frames, &order));
        log::trace!("Pass 1 (hug) done");
        self.timed("flex", || flex::run(tree_ref, &mut frames, &order, &self.config));
        log::trace!("Pass 2 (flex) done");
        self.timed("scroll", || {
            scroll::run(tree_ref, &mut frames, &order, &self.config)
        });
        log::trace!("Pass 3 (scroll) done");

        let hidden = hidden_nodes(tree, root);
        self.write_back(tree, &frames, &order, &hidden);

        #[cfg(feature = "profiling")]
        self.profiler.record_run(order.len(), start.elapsed());
        Ok(())
    }

    #[cfg(feature = "profiling")]
    fn timed<T>(&self, key: &str, f: impl FnOnce() -> T) -> T {
        let start = instant::Instant::now();
        let result = f();
        self.profiler.record(key, start.elapsed());
        result
    }

    #[cfg(not(feature = "profiling"))]
    #[inline(always)]
    fn timed<T>(&self, _key: &str, f: impl FnOnce() -> T) -> T {
        f()
    }

    fn write_back(&self, tree: &mut NodeTree, frames: &Frames, order: &[NodeId], hidden: &[NodeId]) {
        let round = |v: f32| if self.config.round_output { v.round() } else { v };
        for &id in order {
            let frame = &frames[id];
            let scrolls = tree.style(id).is_scroll_container();
            let node = tree.node_mut(id);
            let previous = node.state;
            let client_width = round(frame.client(Axis::X));
            let client_height = round(frame.client(Axis::Y));
            // Non-scroll nodes report their client box so no scroll range appears.
            let (scroll_width, scroll_height) = if scrolls {
                (
                    round(frame.scroll_size[0]).max(client_width),
                    round(frame.scroll_size[1]).max(client_height),
                )
            } else {
                (client_width, client_height)
            };
            let mut state = NodeState {
                x: round(frame.pos[0]),
                y: round(frame.pos[1]),
                client_width,
                client_height,
                scroll_x: previous.scroll_x,
                scroll_y: previous.scroll_y,
                scroll_width,
                scroll_height,
                has_horizontal_scrollbar: frame.has_horizontal_scrollbar,
                has_vertical_scrollbar: frame.has_vertical_scrollbar,
            };
            state.clamp_scroll();
            node.state = state;
        }
        for &id in hidden {
            tree.node_mut(id).state = NodeState::default();
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// Runs a layout with the default configuration.
pub fn layout(
    tree: &mut NodeTree,
    root: NodeId,
    root_size: Size,
    measurer: &dyn TextMeasurer,
) -> Result<(), LayoutError> {
    LayoutEngine::default().layout(tree, root, root_size, measurer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf::DebugProfiler;
    use flexa_style::{ElementStyle, parse_inline_css};
    use flexa_traits::{FnMeasurer, MeasureError, MonospaceMeasurer};

    fn css(s: &str) -> ElementStyle {
        let mut style = ElementStyle::default();
        parse_inline_css(s, &mut style).unwrap();
        style
    }

    fn setup() -> NodeTree {
        let _ = env_logger::builder().is_test(true).try_init();
        NodeTree::new()
    }

    #[test]
    fn test_root_fills_viewport_minus_margins() {
        let mut tree = setup();
        let root = tree.new_container(css("margin: 10"));
        layout(&mut tree, root, Size::new(200.0, 100.0), &MonospaceMeasurer::default()).unwrap();
        let s = tree.geometry(root);
        assert_eq!((s.x, s.y), (10.0, 10.0));
        assert_eq!((s.client_width, s.client_height), (180.0, 80.0));
    }

    #[test]
    fn test_row_grow_partition() {
        let mut tree = setup();
        let root = tree.new_container(css("flex-direction: row; width: 400; height: 50"));
        let kids: Vec<_> = [1, 2, 1]
            .iter()
            .map(|g| tree.new_container(css(&format!("flex-grow: {g}"))))
            .collect();
        for &k in &kids {
            tree.add(root, k);
        }
        layout(&mut tree, root, Size::new(800.0, 600.0), &MonospaceMeasurer::default()).unwrap();
        let widths: Vec<f32> = kids.iter().map(|&k| tree.geometry(k).client_width).collect();
        let xs: Vec<f32> = kids.iter().map(|&k| tree.geometry(k).x).collect();
        assert_eq!(widths, vec![100.0, 200.0, 100.0]);
        assert_eq!(xs, vec![0.0, 100.0, 300.0]);
    }

    #[test]
    fn test_shrink_by_weight() {
        let mut tree = setup();
        let root = tree.new_container(css("flex-direction: row; width: 100; height: 10"));
        let a = tree.new_container(css("width: 80; flex-shrink: 1"));
        let b = tree.new_container(css("width: 80; flex-shrink: 3"));
        let c = tree.new_container(css("width: 20"));
        tree.add(root, a);
        tree.add(root, b);
        tree.add(root, c);
        layout(&mut tree, root, Size::new(100.0, 100.0), &MonospaceMeasurer::default()).unwrap();
        // 80 px of overflow split 1:3, `c` does not shrink.
        assert_eq!(tree.geometry(a).client_width, 60.0);
        assert_eq!(tree.geometry(b).client_width, 20.0);
        assert_eq!(tree.geometry(c).client_width, 20.0);
    }

    #[test]
    fn test_measure_error_leaves_state_untouched() {
        let mut tree = setup();
        let root = tree.new_container(ElementStyle::default());
        let text = tree.new_text("boom", ElementStyle::default());
        tree.add(root, text);
        layout(&mut tree, root, Size::new(100.0, 100.0), &MonospaceMeasurer::default()).unwrap();
        let before = tree.geometry(root);

        let failing = FnMeasurer::new(|_req| Err(MeasureError::FontNotFound("nope".into())));
        let err = layout(&mut tree, root, Size::new(50.0, 50.0), &failing).unwrap_err();
        assert!(matches!(err, LayoutError::Measure(_)));
        assert_eq!(tree.geometry(root), before);
    }

    #[test]
    fn test_custom_profiler_is_used() {
        let mut tree = setup();
        let root = tree.new_container(ElementStyle::default());
        let profiler = Arc::new(DebugProfiler::new());
        let engine = LayoutEngine::default().with_profiler(profiler.clone());
        engine
            .layout(&mut tree, root, Size::new(10.0, 10.0), &MonospaceMeasurer::default())
            .unwrap();
        if cfg!(feature = "profiling") {
            assert_eq!(profiler.runs(), 1);
            assert!(profiler.total("flex").is_some());
        } else {
            assert_eq!(profiler.runs(), 0);
        }
    }
}
