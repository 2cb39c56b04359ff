/// The content carried by a text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextContent {
    pub text: String,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Represents the specific type of a layout node.
///
/// Containers lay out children with the flex algorithm. Text leaves have no children and
/// are sized by the text measurer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Text(TextContent),
}

impl NodeKind {
    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text(_))
    }

    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Container => "Container",
            NodeKind::Text(_) => "Text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(NodeKind::Container.as_str(), "Container");
        assert_eq!(NodeKind::Text(TextContent::new("hi")).as_str(), "Text");
        assert!(NodeKind::Text(TextContent::default()).is_text());
        assert!(!NodeKind::Container.is_text());
    }
}
