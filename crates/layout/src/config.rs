use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Thickness reserved inside the border box for each visible scrollbar.
    ///
    /// Applies to `overflow: scroll` axes up front and to `overflow: auto` axes once their
    /// content is found to exceed the box.
    ///
    /// Defaults to `8.0`.
    pub scrollbar_size: f32,

    /// Rounds `x`, `y`, `client_width` and `client_height` to whole pixels as the last step of
    /// every run. Disable to inspect the raw fractional geometry.
    ///
    /// Defaults to `true`.
    pub round_output: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scrollbar_size: 8.0,
            round_output: true,
        }
    }
}
