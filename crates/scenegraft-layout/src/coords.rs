//! Coordinate-system conversion.
//!
//! Source space: origin at the parent's top-left, y down.
//! Target space: origin at the parent's bottom-left, y up.

use glam::{DAffine2, DMat2, DVec2};
use scenegraft_core::SourceNode;

/// Target y of a box's bottom edge.
///
/// `parent_height - height - y` inside a parent, `-y` at the document root.
pub fn flip_y(parent_height: Option<f64>, y: f64, height: f64) -> f64 {
    match parent_height {
        Some(parent_height) => parent_height - height - y,
        None => -y,
    }
}

/// Center of the node's box under its own transform, in source space.
pub fn true_center(node: &SourceNode) -> DVec2 {
    let [[a, c, tx], [b, d, ty]] = node.transform();
    let affine = DAffine2::from_mat2_translation(
        DMat2::from_cols(DVec2::new(a, b), DVec2::new(c, d)),
        DVec2::new(tx, ty),
    );
    affine.transform_point2(DVec2::new(node.width / 2.0, node.height / 2.0))
}

/// Center of the node's box in target space.
pub fn flipped_center(node: &SourceNode, parent_height: Option<f64>) -> DVec2 {
    let center = true_center(node);
    let y = match parent_height {
        Some(parent_height) => parent_height - center.y,
        None => -center.y,
    };
    DVec2::new(center.x, y)
}
