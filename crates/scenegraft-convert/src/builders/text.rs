use scenegraft_core::{
    Color, ConvertError, NodeKind, OutputNode, Padding, Result, SourceNode, TextData,
};
use scenegraft_layout::{text_halign, text_valign};

use super::{base_transform, solid_fill};
use crate::dispatch::{layout_error, Converter};
use crate::resources::text_font;

/// Label, or text field when `editable`.
pub(crate) fn build_text(
    cx: &Converter<'_>,
    node: &SourceNode,
    parent_height: Option<f64>,
    editable: bool,
) -> Result<OutputNode> {
    let (font, size) = text_font(node).ok_or_else(|| {
        ConvertError::unsupported(&node.name, node.node_type.as_str(), "text node has no font")
    })?;
    let fgcolor = solid_fill(node)?;
    let halign = text_halign(node.text_align_horizontal).map_err(|err| layout_error(node, err))?;

    let data = TextData {
        transform: base_transform(node, parent_height),
        font: cx.tables.font(font, size),
        text: node.characters.clone().unwrap_or_default(),
        fgcolor,
        bgcolor: Color::TRANSPARENT,
        padding: Padding::ZERO,
        halign,
        valign: text_valign(node.text_align_vertical),
    };
    Ok(OutputNode::leaf(if editable {
        NodeKind::TextField(data)
    } else {
        NodeKind::Label(data)
    }))
}
