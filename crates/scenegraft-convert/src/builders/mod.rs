//! Node builders, one per output variant.

mod button;
mod frame;
mod image;
mod shape;
mod text;

pub(crate) use button::build_button;
pub(crate) use frame::build_frame;
pub(crate) use image::build_image;
pub(crate) use shape::{build_shape, Shape};
pub(crate) use text::build_text;

use scenegraft_core::{Color, ConvertError, Paint, Result, SourceNode, Transform};
use scenegraft_geometry::round2;
use scenegraft_layout::flip_y;

/// Placement record before the parent's layout assigns anchor and position.
///
/// Children are repositioned by their container; the position computed here
/// only survives at the document root.
pub(crate) fn base_transform(node: &SourceNode, parent_height: Option<f64>) -> Transform {
    let mut transform = Transform::new(round2(node.width), round2(node.height));
    transform.angle = node.rotation;
    transform.visible = node.visible;
    transform.position = [
        round2(node.x),
        round2(flip_y(parent_height, node.y, node.height)),
    ];
    transform
}

/// Color of the node's single visible solid fill.
pub(crate) fn solid_fill(node: &SourceNode) -> Result<Color> {
    node.sole_fill()
        .and_then(Paint::solid_color)
        .ok_or_else(|| {
            ConvertError::unsupported(
                &node.name,
                node.node_type.as_str(),
                "missing or mixed fill, expected a single solid fill",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegraft_core::NodeType;

    #[test]
    fn test_base_transform_at_root() {
        let node = SourceNode::new("root", NodeType::Frame, 5.0, 10.0, 300.0, 200.0);
        let transform = base_transform(&node, None);
        assert_eq!(transform.position, [5.0, -10.0]);
        assert_eq!(transform.size, [300.0, 200.0]);
        assert_eq!(transform.anchor, [0.0, 0.0]);
    }

    #[test]
    fn test_solid_fill_requires_single_paint() {
        let none = SourceNode::new("bg", NodeType::Rectangle, 0.0, 0.0, 1.0, 1.0);
        assert!(solid_fill(&none).is_err());

        let mixed = none
            .clone()
            .with_fill(Paint::solid(1.0, 0.0, 0.0))
            .with_fill(Paint::solid(0.0, 1.0, 0.0));
        assert!(solid_fill(&mixed).is_err());

        let mut hidden = Paint::solid(0.0, 1.0, 0.0);
        hidden.visible = false;
        let single = none.with_fill(Paint::solid(1.0, 0.0, 0.0)).with_fill(hidden);
        assert_eq!(solid_fill(&single).unwrap(), Color::rgb(1.0, 0.0, 0.0));
    }
}
