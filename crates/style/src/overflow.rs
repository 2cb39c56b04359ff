use serde::{Deserialize, Serialize};

/// Per-axis overflow behavior.
///
/// `Scroll` always reserves a scrollbar; `Auto` reserves one only once the content
/// is known to exceed the box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
}

impl Overflow {
    pub fn is_scrollable(self) -> bool {
        matches!(self, Overflow::Scroll | Overflow::Auto)
    }

    pub fn clips(self) -> bool {
        !matches!(self, Overflow::Visible)
    }
}
