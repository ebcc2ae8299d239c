//! Float layout: children placed in sequence along one axis.

use scenegraft_core::{Child, ChildLayout, Container, LayoutFormat, Orientation, Padding, SourceNode};
use scenegraft_geometry::round2;

use crate::coords::flipped_center;
use crate::keys::KeyAllocator;
use crate::ConvertedChild;

/// Inset of the child at `index` among `count` floated siblings.
///
/// Spacing goes on the trailing side of every child but the last, and the
/// container's edge padding goes on whichever sides face the container edge.
/// The last child's trailing cross-axis side is 0. A lone child gets the full
/// edge padding.
pub fn float_padding(
    orientation: Orientation,
    index: usize,
    count: usize,
    edge: Padding,
    spacing: f64,
) -> Padding {
    let first = index == 0;
    let last = index + 1 >= count;
    let open_end = last && !first;
    match orientation {
        Orientation::Horizontal => Padding {
            top: edge.top,
            bottom: if open_end { 0.0 } else { edge.bottom },
            left: if first { edge.left } else { 0.0 },
            right: if last { edge.right } else { spacing },
        },
        Orientation::Vertical => Padding {
            left: edge.left,
            right: if open_end { 0.0 } else { edge.right },
            top: if first { edge.top } else { 0.0 },
            bottom: if last { edge.bottom } else { spacing },
        },
    }
}

/// Float every child in document order, anchored at its true center.
pub fn assemble_float(
    parent: &SourceNode,
    format: LayoutFormat,
    orientation: Orientation,
    children: Vec<ConvertedChild<'_>>,
) -> Container {
    let edge = parent.auto_layout.padding();
    let spacing = parent.auto_layout.item_spacing;
    let count = children.len();
    let mut keys = KeyAllocator::new();
    let mut container = Container::new(format);

    for (index, child) in children.into_iter().enumerate() {
        let ConvertedChild { source, name, mut node } = child;
        let center = flipped_center(source, Some(parent.height));

        let transform = node.transform_mut();
        transform.anchor = [0.5, 0.5];
        transform.position = [round2(center.x), round2(center.y)];

        let layout = ChildLayout::Float {
            priority: index,
            padding: float_padding(orientation, index, count, edge, spacing),
        };

        let key = keys.assign(&name, index);
        tracing::trace!(key = %key, priority = index, "floated child");
        container.children.insert(key, Child { layout, node });
    }

    container
}
