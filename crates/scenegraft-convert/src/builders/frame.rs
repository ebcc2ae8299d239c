use scenegraft_core::{NodeData, NodeKind, OutputNode, Result, SourceNode};

use super::base_transform;
use crate::dispatch::Converter;

/// Frames, groups and other structural containers.
pub(crate) fn build_frame(
    cx: &Converter<'_>,
    node: &SourceNode,
    parent_height: Option<f64>,
) -> Result<OutputNode> {
    let transform = base_transform(node, parent_height);
    let container = cx.container(node)?;
    Ok(OutputNode::container(
        NodeKind::Node(NodeData { transform }),
        container,
    ))
}
