//! Arc tessellation for rounded rectangles and ellipses.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;

use crate::round_point;

/// Maximum distance between a true arc and its chord, in output units.
pub const ARC_TOLERANCE: f64 = 0.5;

/// Upper bound on the chords of a single arc.
pub const MAX_ARC_SEGMENTS: usize = 256;

/// Number of chords needed to approximate an arc within `ARC_TOLERANCE`.
///
/// `ceil(arc / (2 * acos(r / (r + tolerance))))`, clamped to
/// `2..=MAX_ARC_SEGMENTS`. Radii so large that the chord step underflows to 0
/// get the maximum.
pub fn segments_for_arc(radius: f64, arc_radians: f64) -> usize {
    if radius.is_nan() || arc_radians.is_nan() || radius <= 0.0 || arc_radians <= 0.0 {
        return 2;
    }
    let step = 2.0 * (radius / (radius + ARC_TOLERANCE)).acos();
    let segments = arc_radians / step;
    if segments.is_finite() {
        (segments.ceil() as usize).clamp(2, MAX_ARC_SEGMENTS)
    } else {
        MAX_ARC_SEGMENTS
    }
}

/// `segment_count * 2` points around an ellipse centered at the origin.
pub fn ellipse_points(width: f64, height: f64, segment_count: usize) -> Vec<DVec2> {
    let total = segment_count * 2;
    let radii = DVec2::new(width / 2.0, height / 2.0);
    (0..total)
        .map(|i| {
            let angle = i as f64 * PI / segment_count as f64;
            let (sin, cos) = angle.sin_cos();
            round_point(radii * DVec2::new(cos, sin))
        })
        .collect()
}

/// Ellipse filling `[0, width] x [0, height]`, sampled as a half-turn arc of
/// the larger radius.
pub fn ellipse_in_box(width: f64, height: f64) -> Vec<DVec2> {
    let segments = segments_for_arc(width.max(height) / 2.0, PI);
    let offset = DVec2::new(width / 2.0, height / 2.0);
    ellipse_points(width, height, segments)
        .into_iter()
        .map(|point| round_point(point + offset))
        .collect()
}

/// Corner radii in the output's y-up orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Remap radii named in the design tool's y-down space.
    ///
    /// The tool's top corners are the output's bottom corners.
    pub const fn from_y_down(
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    ) -> Self {
        Self {
            top_left: bottom_left,
            top_right: bottom_right,
            bottom_right: top_right,
            bottom_left: top_left,
        }
    }

    /// Add `delta` to every radius, flooring at zero.
    pub fn offset(&self, delta: f64) -> Self {
        Self {
            top_left: (self.top_left + delta).max(0.0),
            top_right: (self.top_right + delta).max(0.0),
            bottom_right: (self.bottom_right + delta).max(0.0),
            bottom_left: (self.bottom_left + delta).max(0.0),
        }
    }

    /// Limit every radius to half of the shorter box side.
    pub fn clamped(&self, width: f64, height: f64) -> Self {
        let limit = (width.min(height) / 2.0).max(0.0);
        Self {
            top_left: self.top_left.clamp(0.0, limit),
            top_right: self.top_right.clamp(0.0, limit),
            bottom_right: self.bottom_right.clamp(0.0, limit),
            bottom_left: self.bottom_left.clamp(0.0, limit),
        }
    }
}

/// Outline of a rounded rectangle spanning `[0, width] x [0, height]`.
///
/// Corners are walked counter-clockwise starting at the bottom-left. A zero
/// radius emits the corner vertex; a positive radius emits
/// `segments_for_arc(r, PI / 2) + 1` vertices on the quarter circle.
pub fn rounded_rect_points(width: f64, height: f64, radii: CornerRadii) -> Vec<DVec2> {
    let radii = radii.clamped(width, height);
    // (corner, direction from corner to arc center, start angle)
    let corners = [
        (DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0), PI, radii.bottom_left),
        (DVec2::new(width, 0.0), DVec2::new(-1.0, 1.0), 3.0 * FRAC_PI_2, radii.bottom_right),
        (DVec2::new(width, height), DVec2::new(-1.0, -1.0), 0.0, radii.top_right),
        (DVec2::new(0.0, height), DVec2::new(1.0, -1.0), FRAC_PI_2, radii.top_left),
    ];

    let mut points = Vec::new();
    for (corner, inward, start, radius) in corners {
        if radius <= 0.0 {
            points.push(round_point(corner));
            continue;
        }
        let segments = segments_for_arc(radius, FRAC_PI_2);
        tracing::trace!(radius, segments, "tessellating corner");
        let center = corner + inward * radius;
        points.extend((0..=segments).map(|k| {
            let angle = start + FRAC_PI_2 * k as f64 / segments as f64;
            let (sin, cos) = angle.sin_cos();
            round_point(center + DVec2::new(cos, sin) * radius)
        }));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_segments_for_arc_small_radius() {
        assert_eq!(segments_for_arc(5.0, FRAC_PI_2), 2);
        assert_eq!(segments_for_arc(0.0, FRAC_PI_2), 2);
        assert_eq!(segments_for_arc(-1.0, PI), 2);
    }

    #[test]
    fn test_segments_for_arc_large_radius() {
        // acos(100 / 100.5) ~= 0.0998, so a quarter turn needs 8 chords.
        assert_eq!(segments_for_arc(100.0, FRAC_PI_2), 8);
        assert_eq!(segments_for_arc(100.0, PI), 16);
    }

    #[test]
    fn test_ellipse_point_count_and_extremes() {
        let points = ellipse_points(20.0, 10.0, 4);
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], DVec2::new(10.0, 0.0));
        assert_eq!(points[2], DVec2::new(0.0, 5.0));
        assert_eq!(points[4], DVec2::new(-10.0, 0.0));
        assert_eq!(points[6], DVec2::new(0.0, -5.0));
    }

    #[test]
    fn test_segments_for_arc_is_capped() {
        assert_eq!(segments_for_arc(1e7, PI), MAX_ARC_SEGMENTS);
        // r / (r + 0.5) rounds to 1.0, so the chord step is 0.
        assert_eq!(segments_for_arc(1e20, FRAC_PI_2), MAX_ARC_SEGMENTS);
        assert_eq!(segments_for_arc(f64::INFINITY, PI), MAX_ARC_SEGMENTS);
    }

    #[test]
    fn test_ellipse_fills_its_box() {
        let points = ellipse_in_box(20.0, 10.0);
        assert_eq!(points.len() % 2, 0);
        assert_eq!(points[0], DVec2::new(20.0, 5.0));
        for point in &points {
            assert!(point.x >= 0.0 && point.x <= 20.0);
            assert!(point.y >= 0.0 && point.y <= 10.0);
        }
    }

    #[test]
    fn test_square_corners_without_radius() {
        let points = rounded_rect_points(10.0, 10.0, CornerRadii::default());
        assert_eq!(
            points,
            vec![
                DVec2::new(0.0, 0.0),
                DVec2::new(10.0, 0.0),
                DVec2::new(10.0, 10.0),
                DVec2::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_full_radius_approximates_circle() {
        let points = rounded_rect_points(10.0, 10.0, CornerRadii::uniform(5.0));
        let per_corner = segments_for_arc(5.0, FRAC_PI_2) + 1;
        assert_eq!(points.len(), 4 * per_corner);

        // With r = w / 2 every arc shares the box center.
        let center = DVec2::new(5.0, 5.0);
        for point in &points {
            let distance = point.distance(center);
            assert!((distance - 5.0).abs() < 0.01, "{point} is {distance} from center");
        }
    }

    #[test]
    fn test_arc_vertices_lie_on_their_corner_arc() {
        let radii = CornerRadii {
            top_left: 2.0,
            top_right: 0.0,
            bottom_right: 6.0,
            bottom_left: 0.0,
        };
        let points = rounded_rect_points(40.0, 20.0, radii);
        // bottom-left vertex, bottom-right arc, top-right vertex, top-left arc
        let br = segments_for_arc(6.0, FRAC_PI_2) + 1;
        let tl = segments_for_arc(2.0, FRAC_PI_2) + 1;
        assert_eq!(points.len(), 1 + br + 1 + tl);
        assert_eq!(points[0], DVec2::ZERO);

        let br_center = DVec2::new(34.0, 6.0);
        for point in &points[1..1 + br] {
            assert!((point.distance(br_center) - 6.0).abs() < 0.01);
        }
        assert_eq!(points[1 + br], DVec2::new(40.0, 20.0));
        let tl_center = DVec2::new(2.0, 18.0);
        for point in &points[2 + br..] {
            assert!((point.distance(tl_center) - 2.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_radius_remap_from_y_down() {
        let radii = CornerRadii::from_y_down(1.0, 2.0, 3.0, 4.0);
        assert_eq!(radii.bottom_left, 1.0);
        assert_eq!(radii.bottom_right, 2.0);
        assert_eq!(radii.top_right, 3.0);
        assert_eq!(radii.top_left, 4.0);
    }

    #[test]
    fn test_radii_are_clamped() {
        let radii = CornerRadii::uniform(50.0).clamped(20.0, 10.0);
        assert_eq!(radii, CornerRadii::uniform(5.0));
        assert_eq!(CornerRadii::uniform(0.2).offset(-0.5), CornerRadii::default());
    }

    proptest! {
        #[test]
        fn prop_segments_within_bounds(radius in 0.0f64..1e12, arc in 0.0f64..7.0) {
            let segments = segments_for_arc(radius, arc);
            prop_assert!((2..=MAX_ARC_SEGMENTS).contains(&segments));
        }

        #[test]
        fn prop_rounded_rect_stays_in_box(
            width in 1.0f64..500.0,
            height in 1.0f64..500.0,
            radius in 0.0f64..300.0,
        ) {
            let points = rounded_rect_points(width, height, CornerRadii::uniform(radius));
            for p in points {
                prop_assert!(p.x >= -0.01 && p.x <= width + 0.01);
                prop_assert!(p.y >= -0.01 && p.y <= height + 0.01);
            }
        }
    }
}
