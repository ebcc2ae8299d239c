//! Node dispatch and recursive traversal.

use rayon::prelude::*;
use scenegraft_core::{ConvertError, Container, NodeType, OutputNode, Result, SourceNode};
use scenegraft_layout::{assemble, layout_format, ConvertedChild, LayoutError};

use crate::builders;
use crate::resources::{texture_hash, ResourceTables};
use crate::tag::{parse_name, Role};
use crate::ExportOptions;

/// Builder selected for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builder {
    Frame,
    Button,
    Label,
    TextField,
    Image,
    NinePatch,
    Solid,
    Ellipse,
}

/// Pick the builder for a node from its tag role and structural type.
///
/// Slot tags (`up`, `down`) only matter to an enclosing button, so nodes
/// carrying them are dispatched on their structural type.
pub(crate) fn route(node: &SourceNode, role: Option<Role>) -> Result<Builder> {
    match role {
        Some(Role::Edit) => {
            if node.node_type == NodeType::Text {
                Ok(Builder::TextField)
            } else {
                Err(ConvertError::structural(
                    &node.name,
                    format!("'edit' requires a TEXT node, found {}", node.node_type),
                ))
            }
        }
        Some(Role::Button) => Ok(Builder::Button),
        Some(Role::NinePatch) => {
            if texture_hash(node).is_some() {
                Ok(Builder::NinePatch)
            } else {
                Err(ConvertError::unsupported(
                    &node.name,
                    node.node_type.as_str(),
                    "nine-patch requires a rectangle with a single image fill",
                ))
            }
        }
        Some(Role::Up | Role::Down) | None => route_structural(node),
    }
}

fn route_structural(node: &SourceNode) -> Result<Builder> {
    match node.node_type {
        NodeType::Text => Ok(Builder::Label),
        NodeType::Rectangle if texture_hash(node).is_some() => Ok(Builder::Image),
        NodeType::Rectangle => Ok(Builder::Solid),
        NodeType::Ellipse => Ok(Builder::Ellipse),
        kind if kind.is_container() => Ok(Builder::Frame),
        kind => Err(ConvertError::unsupported(
            &node.name,
            kind.as_str(),
            "no builder for this node type",
        )),
    }
}

/// Attach the node name to a layout error.
pub(crate) fn layout_error(node: &SourceNode, err: LayoutError) -> ConvertError {
    ConvertError::UnsupportedLayoutValue {
        node: node.name.clone(),
        value: err.value().to_string(),
    }
}

/// Conversion context of one export.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Converter<'a> {
    pub tables: &'a ResourceTables,
    pub options: &'a ExportOptions,
}

impl<'a> Converter<'a> {
    pub fn new(tables: &'a ResourceTables, options: &'a ExportOptions) -> Self {
        Self { tables, options }
    }

    /// Convert the document root.
    ///
    /// The root's name is not required to be a valid identifier; a
    /// recognizable tag is still honored.
    pub fn convert_root(&self, root: &SourceNode) -> Result<OutputNode> {
        let role = parse_name(&root.name)
            .ok()
            .and_then(|parsed| parsed.role(&root.name).ok().flatten());
        self.build(root, role, None)
    }

    fn convert_child<'s>(
        &self,
        node: &'s SourceNode,
        parent_height: f64,
    ) -> Result<ConvertedChild<'s>> {
        let parsed = parse_name(&node.name)?;
        let role = parsed.role(&node.name)?;
        let output = self.build(node, role, Some(parent_height))?;
        Ok(ConvertedChild {
            source: node,
            name: parsed.base,
            node: output,
        })
    }

    fn build(
        &self,
        node: &SourceNode,
        role: Option<Role>,
        parent_height: Option<f64>,
    ) -> Result<OutputNode> {
        let builder = route(node, role)?;
        tracing::debug!(
            name = %node.name,
            node_type = %node.node_type,
            ?builder,
            "dispatching node"
        );
        match builder {
            Builder::Frame => builders::build_frame(self, node, parent_height),
            Builder::Button => builders::build_button(self, node, parent_height),
            Builder::Label => builders::build_text(self, node, parent_height, false),
            Builder::TextField => builders::build_text(self, node, parent_height, true),
            Builder::Image => builders::build_image(self, node, parent_height, false),
            Builder::NinePatch => builders::build_image(self, node, parent_height, true),
            Builder::Solid => builders::build_shape(self, node, parent_height, builders::Shape::Rect),
            Builder::Ellipse => {
                builders::build_shape(self, node, parent_height, builders::Shape::Ellipse)
            }
        }
    }

    /// Convert every child of `node`, in document order.
    ///
    /// With `parallel` set, siblings are converted concurrently; results are
    /// still collected by position, so the first error in document order wins.
    pub fn children<'s>(&self, node: &'s SourceNode) -> Result<Vec<ConvertedChild<'s>>> {
        let height = node.height;
        let results: Vec<Result<ConvertedChild<'s>>> = if self.options.parallel {
            node.children
                .par_iter()
                .map(|child| self.convert_child(child, height))
                .collect()
        } else {
            node.children
                .iter()
                .map(|child| self.convert_child(child, height))
                .collect()
        };
        results.into_iter().collect()
    }

    /// Convert the children of a container node and lay them out.
    pub fn container(&self, node: &SourceNode) -> Result<Container> {
        // Reject the container's own layout values before descending.
        layout_format(&node.auto_layout).map_err(|err| layout_error(node, err))?;
        let children = self.children(node)?;
        assemble(node, children, self.options.positioning).map_err(|err| layout_error(node, err))
    }
}
