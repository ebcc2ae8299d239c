//! Polygon generation for scenegraft.
//!
//! The target engine draws shapes as flat polygons, so every rounded
//! rectangle and ellipse is tessellated here. All coordinates are in the
//! target's y-up space and rounded to two decimal places.

mod shapes;
mod stroke;

pub use shapes::{
    ellipse_in_box, ellipse_points, rounded_rect_points, segments_for_arc, CornerRadii,
    ARC_TOLERANCE, MAX_ARC_SEGMENTS,
};
pub use stroke::{StrokePlacement, StrokedBox, STROKE_EPSILON};

use glam::DVec2;

/// Round to two decimal places, the precision of every emitted coordinate.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Normalize -0.0 so it serializes as 0.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round both components of a point.
pub fn round_point(point: DVec2) -> DVec2 {
    DVec2::new(round2(point.x), round2(point.y))
}

/// Convert points to the `[x, y]` pairs of the output document.
pub fn to_pairs(points: &[DVec2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| p.to_array()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(2.675000001), 2.68);
        assert!(round2(-0.001).is_sign_positive());
    }

    #[test]
    fn test_to_pairs() {
        let pairs = to_pairs(&[DVec2::new(1.0, 2.0), DVec2::new(3.5, -4.0)]);
        assert_eq!(pairs, vec![[1.0, 2.0], [3.5, -4.0]]);
    }
}
