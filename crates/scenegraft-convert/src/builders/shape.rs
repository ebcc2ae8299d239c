//! Solid rectangles and ellipses, with optional stroke.

use scenegraft_core::{
    Child, ChildLayout, Color, Container, ConvertError, LayoutFormat, NodeData, NodeKind,
    OutputNode, PathData, Result, SolidData, SourceNode, StrokeAlign, Transform, XAnchor,
    YAnchor,
};
use scenegraft_geometry::{
    ellipse_in_box, round2, rounded_rect_points, to_pairs, CornerRadii, StrokePlacement,
    StrokedBox,
};
use scenegraft_layout::Positioning;

use super::{base_transform, solid_fill};
use crate::dispatch::Converter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Rect,
    Ellipse,
}

fn corner_radii(node: &SourceNode) -> CornerRadii {
    CornerRadii::from_y_down(
        node.top_left_radius,
        node.top_right_radius,
        node.bottom_right_radius,
        node.bottom_left_radius,
    )
}

fn placement(align: StrokeAlign) -> StrokePlacement {
    match align {
        StrokeAlign::Inside => StrokePlacement::Inside,
        StrokeAlign::Outside => StrokePlacement::Outside,
        StrokeAlign::Center => StrokePlacement::Center,
    }
}

fn stroke_color(node: &SourceNode) -> Result<Color> {
    let mut strokes = node.visible_strokes();
    let color = match (strokes.next(), strokes.next()) {
        (Some(paint), None) => paint.solid_color(),
        _ => None,
    };
    color.ok_or_else(|| {
        ConvertError::unsupported(
            &node.name,
            node.node_type.as_str(),
            "stroke must be a single solid paint",
        )
    })
}

/// Solid shape; stroked shapes become a `fill` + `stroke` composite.
pub(crate) fn build_shape(
    cx: &Converter<'_>,
    node: &SourceNode,
    parent_height: Option<f64>,
    shape: Shape,
) -> Result<OutputNode> {
    let color = solid_fill(node)?;
    let (width, height) = (node.width, node.height);
    let points = match shape {
        Shape::Rect => rounded_rect_points(width, height, corner_radii(node)),
        Shape::Ellipse => ellipse_in_box(width, height),
    };
    let transform = base_transform(node, parent_height);

    if !node.has_stroke() {
        return Ok(OutputNode::leaf(NodeKind::Solid(SolidData {
            transform,
            points: to_pairs(&points),
            color,
        })));
    }

    let outline_color = stroke_color(node)?;
    let stroked = StrokedBox::new(width, height, corner_radii(node), placement(node.stroke_align));
    let outline = match shape {
        Shape::Rect => stroked.rect_outline(),
        Shape::Ellipse => stroked.ellipse_outline(),
    };
    tracing::trace!(
        name = %node.name,
        fill_points = points.len(),
        stroke_points = outline.len(),
        "stroked shape"
    );

    let center = [round2(width / 2.0), round2(height / 2.0)];
    let layout = ChildLayout::Anchored {
        x_anchor: XAnchor::Center,
        y_anchor: YAnchor::Middle,
        x_offset: 0.0,
        y_offset: 0.0,
        absolute: cx.options.positioning == Positioning::Absolute,
    };

    let fill = NodeKind::Solid(SolidData {
        transform: Transform::new(transform.width(), transform.height())
            .centered_at(center[0], center[1]),
        points: to_pairs(&points),
        color,
    });
    let stroke = NodeKind::Path(PathData {
        transform: Transform::new(round2(stroked.width), round2(stroked.height))
            .centered_at(center[0], center[1]),
        points: to_pairs(&outline),
        color: outline_color,
        width: node.stroke_weight,
        closed: true,
    });

    let mut container = Container::new(LayoutFormat::Anchored);
    container.children.insert(
        "fill".to_string(),
        Child {
            layout,
            node: OutputNode::leaf(fill),
        },
    );
    container.children.insert(
        "stroke".to_string(),
        Child {
            layout,
            node: OutputNode::leaf(stroke),
        },
    );
    Ok(OutputNode::container(
        NodeKind::Node(NodeData { transform }),
        container,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radii_follow_flipped_axis() {
        let mut node =
            SourceNode::new("card", scenegraft_core::NodeType::Rectangle, 0.0, 0.0, 10.0, 10.0);
        node.top_left_radius = 3.0;
        let radii = corner_radii(&node);
        assert_eq!(radii.bottom_left, 3.0);
        assert_eq!(radii.top_left, 0.0);
    }
}
