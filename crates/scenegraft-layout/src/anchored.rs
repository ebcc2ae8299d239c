//! Anchored layout: each child pinned to a parent edge or center.

use scenegraft_core::{Child, ChildLayout, Container, LayoutFormat, SourceNode, XAnchor, YAnchor};
use scenegraft_geometry::round2;

use crate::align::{horizontal_anchor, vertical_anchor};
use crate::coords::{flip_y, flipped_center};
use crate::keys::KeyAllocator;
use crate::{ConvertedChild, Positioning};

/// Parent x that a horizontal anchor measures from.
fn x_origin(anchor: XAnchor, parent_width: f64) -> f64 {
    match anchor {
        XAnchor::Left => 0.0,
        XAnchor::Center | XAnchor::Fill => parent_width / 2.0,
        XAnchor::Right => parent_width,
    }
}

/// Parent y that a vertical anchor measures from.
fn y_origin(anchor: YAnchor, parent_height: f64) -> f64 {
    match anchor {
        YAnchor::Bottom => 0.0,
        YAnchor::Middle | YAnchor::Fill => parent_height / 2.0,
        YAnchor::Top => parent_height,
    }
}

fn normalize(offset: f64, extent: f64, positioning: Positioning) -> f64 {
    match positioning {
        Positioning::Relative if extent != 0.0 => offset / extent,
        _ => offset,
    }
}

/// Pin every child to the parent edge named by its constraints.
///
/// Unrotated children keep the constraint's anchor fraction and are placed by
/// their flipped box. Rotated children are re-anchored at their true center.
pub fn assemble_anchored(
    parent: &SourceNode,
    children: Vec<ConvertedChild<'_>>,
    positioning: Positioning,
) -> Container {
    let parent_width = parent.width;
    let parent_height = parent.height;
    let mut keys = KeyAllocator::new();
    let mut container = Container::new(LayoutFormat::Anchored);

    for (index, child) in children.into_iter().enumerate() {
        let ConvertedChild { source, name, mut node } = child;
        let constraints = source.constraints;
        let (x_fraction, x_anchor) = horizontal_anchor(constraints.map(|c| c.horizontal));
        let (y_fraction, y_anchor) = vertical_anchor(constraints.map(|c| c.vertical));

        let transform = node.transform_mut();
        let (x, y) = if source.is_rotated() {
            let center = flipped_center(source, Some(parent_height));
            transform.anchor = [0.5, 0.5];
            (center.x, center.y)
        } else {
            let bottom = flip_y(Some(parent_height), source.y, source.height);
            transform.anchor = [x_fraction, y_fraction];
            (
                source.x + x_fraction * source.width,
                bottom + y_fraction * source.height,
            )
        };
        transform.position = [round2(x), round2(y)];

        let x_offset = round2(x - x_origin(x_anchor, parent_width));
        let y_offset = round2(y - y_origin(y_anchor, parent_height));
        let layout = ChildLayout::Anchored {
            x_anchor,
            y_anchor,
            x_offset: normalize(x_offset, parent_width, positioning),
            y_offset: normalize(y_offset, parent_height, positioning),
            absolute: positioning == Positioning::Absolute,
        };

        let key = keys.assign(&name, index);
        tracing::trace!(key = %key, ?layout, "anchored child");
        container.children.insert(key, Child { layout, node });
    }

    container
}
