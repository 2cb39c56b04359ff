// src/error.rs
use flexa_layout::LayoutError;
use flexa_style::StyleParseError;
use thiserror::Error;

/// Errors surfaced by the facade: building a scene and laying it out.
#[derive(Error, Debug)]
pub enum FlexaError {
    #[error("Style is invalid: {0}")]
    Style(#[from] StyleParseError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Scene JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Text node '{0}' cannot have children")]
    TextWithChildren(String),

    #[error("Node name '{0}' is used more than once")]
    DuplicateName(String),
}
