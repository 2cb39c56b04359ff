use flexa_traits::MeasureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Text measurement failed: {0}")]
    Measure(#[from] MeasureError),
}

pub mod cache;
pub mod config;
pub mod engine;
pub mod interface;
pub mod node_kind;
pub mod output;
pub mod perf;
pub mod style;
pub mod traversal;
pub mod tree;

// Re-exports for convenience
pub use self::cache::CachedMeasurer;
pub use self::config::LayoutConfig;
pub use self::engine::{LayoutEngine, layout};
pub use self::interface::NodeState;
pub use self::node_kind::{NodeKind, TextContent};
pub use self::perf::{DebugProfiler, NoOpProfiler, Profiler};
pub use self::style::{ComputedStyle, ComputedStyleData};
pub use self::tree::{Children, Node, NodeTree};

// Re-export the foundation types so callers need a single import
pub use flexa_types::{NodeId, Rect, Size};

#[cfg(test)]
mod style_test;
