use scenegraft_core::{
    ConvertError, ImageData, NinePatchData, NodeKind, OutputNode, Padding, Result, SourceNode,
};

use super::base_transform;
use crate::dispatch::Converter;
use crate::resources::{layer_base, texture_hash};

/// Image rectangle, or a nine-patch with zero slices.
pub(crate) fn build_image(
    cx: &Converter<'_>,
    node: &SourceNode,
    parent_height: Option<f64>,
    nine_patch: bool,
) -> Result<OutputNode> {
    let hash = texture_hash(node).ok_or_else(|| {
        ConvertError::unsupported(
            &node.name,
            node.node_type.as_str(),
            "no resolvable image fill",
        )
    })?;
    let texture = cx.tables.texture(hash, &layer_base(&node.name));
    let transform = base_transform(node, parent_height);

    let kind = if nine_patch {
        NodeKind::NinePatch(NinePatchData {
            transform,
            texture,
            slices: Padding::ZERO,
        })
    } else {
        NodeKind::Image(ImageData { transform, texture })
    };
    Ok(OutputNode::leaf(kind))
}
