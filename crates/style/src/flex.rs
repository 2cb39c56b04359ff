//! Defines enums for flexbox container and item properties.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FlexDirection {
    Row,
    RowReverse,
    #[default]
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// True when children are placed along the horizontal axis.
    pub fn is_row(self) -> bool {
        matches!(self, FlexDirection::Row | FlexDirection::RowReverse)
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, FlexDirection::RowReverse | FlexDirection::ColumnReverse)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum FlexWrap {
    #[default]
    #[serde(rename = "nowrap")]
    NoWrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    pub fn is_wrapping(self) -> bool {
        !matches!(self, FlexWrap::NoWrap)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum JustifyContent {
    #[default]
    #[serde(alias = "flex-start")]
    Start,
    Center,
    #[serde(alias = "flex-end")]
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    /// Space-distribution modes place their own spacing and ignore `gap`.
    pub fn is_space_distribution(self) -> bool {
        matches!(
            self,
            JustifyContent::SpaceBetween | JustifyContent::SpaceAround | JustifyContent::SpaceEvenly
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum AlignItems {
    #[default]
    #[serde(alias = "flex-start")]
    Start,
    Center,
    #[serde(alias = "flex-end")]
    End,
    Stretch,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum AlignContent {
    #[default]
    #[serde(alias = "flex-start")]
    Start,
    Center,
    #[serde(alias = "flex-end")]
    End,
    Stretch,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// `Auto` defers to the parent's `align-items`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum AlignSelf {
    #[default]
    Auto,
    #[serde(alias = "flex-start")]
    Start,
    Center,
    #[serde(alias = "flex-end")]
    End,
    Stretch,
}

impl AlignSelf {
    /// Resolves `auto` against the container's `align-items`.
    pub fn resolve(self, parent: AlignItems) -> AlignItems {
        match self {
            AlignSelf::Auto => parent,
            AlignSelf::Start => AlignItems::Start,
            AlignSelf::Center => AlignItems::Center,
            AlignSelf::End => AlignItems::End,
            AlignSelf::Stretch => AlignItems::Stretch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_axes() {
        assert!(FlexDirection::Row.is_row());
        assert!(FlexDirection::RowReverse.is_row());
        assert!(!FlexDirection::Column.is_row());
        assert!(FlexDirection::ColumnReverse.is_reversed());
        assert!(!FlexDirection::Row.is_reversed());
    }

    #[test]
    fn test_align_self_auto_defers_to_parent() {
        assert_eq!(AlignSelf::Auto.resolve(AlignItems::Center), AlignItems::Center);
        assert_eq!(AlignSelf::End.resolve(AlignItems::Center), AlignItems::End);
    }

    #[test]
    fn test_serde_accepts_flex_prefixed_aliases() {
        let j: JustifyContent = serde_json::from_str("\"flex-end\"").unwrap();
        assert_eq!(j, JustifyContent::End);
        let a: AlignItems = serde_json::from_str("\"stretch\"").unwrap();
        assert_eq!(a, AlignItems::Stretch);
        let w: FlexWrap = serde_json::from_str("\"nowrap\"").unwrap();
        assert_eq!(w, FlexWrap::NoWrap);
        let d: FlexDirection = serde_json::from_str("\"row-reverse\"").unwrap();
        assert_eq!(d, FlexDirection::RowReverse);
    }
}
