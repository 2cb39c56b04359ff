pub mod measure;
pub mod monospace;

pub use measure::{FnMeasurer, MeasureError, TextMeasureRequest, TextMeasurer};
pub use monospace::MonospaceMeasurer;
