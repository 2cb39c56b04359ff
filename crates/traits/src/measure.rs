//! TextMeasurer trait for abstracting text metrics.
//!
//! The layout engine never shapes text itself. Text leaves are sized by asking a
//! measurer for the bounding box of their content under a width constraint, which
//! keeps the engine free of any font stack.

use flexa_style::TextAlign;
use flexa_types::Size;
use thiserror::Error;

/// Error type for text measurement.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to measure text '{text}': {message}")]
    Failed { text: String, message: String },
}

/// Everything a measurer needs to size one text leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMeasureRequest<'a> {
    pub font_family: &'a str,
    pub font_size: f32,
    /// Absolute line height in pixels.
    pub line_height: f32,
    pub text: &'a str,
    pub align: TextAlign,
    /// Width available for wrapping. `None` means unbounded.
    pub max_width: Option<f32>,
    /// When set, the text must be laid out on a single line per hard break.
    pub no_wrap: bool,
}

/// A source of text metrics.
///
/// Implementations must be deterministic: the same request always yields the same
/// size, otherwise repeated layouts of an unchanged tree would drift.
///
/// # Example
///
/// ```ignore
/// let measurer = MonospaceMeasurer::default();
/// let size = measurer.measure(&request)?;
/// ```
pub trait TextMeasurer {
    /// Returns the bounding box of the laid-out text, excluding padding and borders.
    fn measure(&self, request: &TextMeasureRequest<'_>) -> Result<Size, MeasureError>;

    /// Returns a human-readable name for this measurer (for logging/debugging).
    fn name(&self) -> &'static str {
        "TextMeasurer"
    }
}

/// Adapts a closure into a `TextMeasurer`.
pub struct FnMeasurer<F>(F);

impl<F> FnMeasurer<F>
where
    F: Fn(&TextMeasureRequest<'_>) -> Result<Size, MeasureError>,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> TextMeasurer for FnMeasurer<F>
where
    F: Fn(&TextMeasureRequest<'_>) -> Result<Size, MeasureError>,
{
    fn measure(&self, request: &TextMeasureRequest<'_>) -> Result<Size, MeasureError> {
        (self.0)(request)
    }

    fn name(&self) -> &'static str {
        "FnMeasurer"
    }
}
