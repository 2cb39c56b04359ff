//! `flexa`: a retained-mode flexbox layout engine.
//!
//! Build a [`NodeTree`] (directly or from a JSON [`Scene`]), call [`layout`] with a
//! viewport size and a [`TextMeasurer`], then read each node's [`NodeState`].

pub mod error;
pub mod scene;

pub use error::FlexaError;
pub use scene::{Scene, SceneNode};

pub use flexa_layout::{
    CachedMeasurer, ComputedStyle, DebugProfiler, LayoutConfig, LayoutEngine, LayoutError,
    NoOpProfiler, NodeKind, NodeState, NodeTree, Profiler, layout, output, traversal,
};
pub use flexa_style::{
    AlignContent, AlignItems, AlignSelf, Dimension, Display, Edges, ElementStyle,
    FlexDirection, FlexWrap, JustifyContent, Overflow, Position, StyleParseError, TextAlign,
    apply_style_property, parse_inline_css,
};
pub use flexa_traits::{FnMeasurer, MeasureError, MonospaceMeasurer, TextMeasureRequest, TextMeasurer};
pub use flexa_types::{NodeId, Rect, Size};
