//! Declarative scene descriptions.
//!
//! A scene is a JSON tree of nodes that is turned into a [`NodeTree`] in one go:
//!
//! ```json
//! { "name": "root", "css": "flex-direction: row; gap: 8",
//!   "children": [ { "style": { "flexGrow": 1 } }, { "text": "hello" } ] }
//! ```
//!
//! `style` takes the camelCase [`ElementStyle`] form and `css` an inline declaration block
//! applied on top of it.

use crate::error::FlexaError;
use flexa_layout::{LayoutEngine, NodeState, NodeTree};
use flexa_style::{ElementStyle, parse_inline_css};
use flexa_traits::TextMeasurer;
use flexa_types::{NodeId, Size};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Optional handle for looking the node up after the scene is built.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub style: ElementStyle,
    #[serde(default)]
    pub css: Option<String>,
    /// Makes the node a text leaf.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// A built tree together with its root and named nodes.
pub struct Scene {
    pub tree: NodeTree,
    pub root: NodeId,
    names: HashMap<String, NodeId>,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, FlexaError> {
        let description: SceneNode = serde_json::from_str(json)?;
        Self::build(&description)
    }

    pub fn build(description: &SceneNode) -> Result<Self, FlexaError> {
        let mut tree = NodeTree::new();
        let mut names = HashMap::new();
        let root = build_node(&mut tree, &mut names, description)?;
        log::debug!("Built scene with {} node(s)", tree.len());
        Ok(Self { tree, root, names })
    }

    /// Looks up a node by the `name` given in the description.
    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn geometry(&self, name: &str) -> Option<NodeState> {
        self.node(name).map(|id| self.tree.geometry(id))
    }

    pub fn layout(&mut self, root_size: Size, measurer: &dyn TextMeasurer) -> Result<(), FlexaError> {
        self.layout_with(&LayoutEngine::default(), root_size, measurer)
    }

    pub fn layout_with(
        &mut self,
        engine: &LayoutEngine,
        root_size: Size,
        measurer: &dyn TextMeasurer,
    ) -> Result<(), FlexaError> {
        engine.layout(&mut self.tree, self.root, root_size, measurer)?;
        Ok(())
    }
}

fn build_node(
    tree: &mut NodeTree,
    names: &mut HashMap<String, NodeId>,
    description: &SceneNode,
) -> Result<NodeId, FlexaError> {
    let mut style = description.style.clone();
    if let Some(css) = &description.css {
        parse_inline_css(css, &mut style)?;
    }

    let label = || description.name.clone().unwrap_or_default();
    let id = match &description.text {
        Some(text) => {
            if !description.children.is_empty() {
                return Err(FlexaError::TextWithChildren(label()));
            }
            tree.new_text(text.as_str(), style)
        }
        None => tree.new_container(style),
    };

    if let Some(name) = &description.name {
        if names.insert(name.clone(), id).is_some() {
            return Err(FlexaError::DuplicateName(name.clone()));
        }
    }

    for child in &description.children {
        let child_id = build_node(tree, names, child)?;
        tree.add(id, child_id);
    }
    Ok(id)
}
