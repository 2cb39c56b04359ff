use flexa_types::Rect;
use serde::{Deserialize, Serialize};

// --- Computed Geometry ---

/// The geometry computed for one node.
///
/// The engine overwrites every field on each run except the scroll offsets, which are
/// owned by the application and only clamped into range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeState {
    /// Screen-space border-box origin, before any ancestor scroll offset is applied.
    pub x: f32,
    pub y: f32,
    /// Border-box size minus reserved scrollbar thickness.
    pub client_width: f32,
    pub client_height: f32,
    pub scroll_x: f32,
    pub scroll_y: f32,
    /// Content bounding box. Never smaller than the client size.
    pub scroll_width: f32,
    pub scroll_height: f32,
    pub has_horizontal_scrollbar: bool,
    pub has_vertical_scrollbar: bool,
}

impl NodeState {
    /// The client rectangle in unscrolled screen space.
    pub fn client_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.client_width, self.client_height)
    }

    /// Largest valid horizontal scroll offset.
    pub fn max_scroll_x(&self) -> f32 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Largest valid vertical scroll offset.
    pub fn max_scroll_y(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Clamps the scroll offsets into `[0, max_scroll]`.
    pub fn clamp_scroll(&mut self) {
        self.scroll_x = self.scroll_x.clamp(0.0, self.max_scroll_x());
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll_y());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll_into_range() {
        let mut state = NodeState {
            client_width: 100.0,
            client_height: 50.0,
            scroll_width: 300.0,
            scroll_height: 40.0,
            scroll_x: 500.0,
            scroll_y: 10.0,
            ..Default::default()
        };
        state.clamp_scroll();
        assert_eq!(state.scroll_x, 200.0);
        assert_eq!(state.scroll_y, 0.0);

        state.scroll_x = -5.0;
        state.clamp_scroll();
        assert_eq!(state.scroll_x, 0.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(NodeState::default()).unwrap();
        assert!(json.get("clientWidth").is_some());
        assert!(json.get("hasVerticalScrollbar").is_some());
    }
}
