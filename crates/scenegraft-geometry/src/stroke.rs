//! Stroke outline sizing.

use glam::DVec2;

use crate::shapes::{ellipse_in_box, rounded_rect_points, CornerRadii};

/// Amount the stroke outline is pulled in or pushed out so no seam shows
/// between the fill and the stroke.
pub const STROKE_EPSILON: f64 = 0.5;

/// Where a stroke is drawn relative to the shape's edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokePlacement {
    #[default]
    Inside,
    Outside,
    Center,
}

impl StrokePlacement {
    /// Signed change applied to width, height and radii.
    pub fn delta(&self) -> f64 {
        match self {
            Self::Inside => -STROKE_EPSILON,
            Self::Outside => STROKE_EPSILON,
            Self::Center => 0.0,
        }
    }
}

/// Box of a stroke outline after the placement offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokedBox {
    pub width: f64,
    pub height: f64,
    pub radii: CornerRadii,
}

impl StrokedBox {
    pub fn new(width: f64, height: f64, radii: CornerRadii, placement: StrokePlacement) -> Self {
        let delta = placement.delta();
        Self {
            width: (width + delta).max(0.0),
            height: (height + delta).max(0.0),
            radii: radii.offset(delta),
        }
    }

    /// Rounded-rectangle outline, origin at the bottom-left of the offset box.
    pub fn rect_outline(&self) -> Vec<DVec2> {
        rounded_rect_points(self.width, self.height, self.radii)
    }

    /// Elliptical outline inscribed in the offset box.
    pub fn ellipse_outline(&self) -> Vec<DVec2> {
        ellipse_in_box(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_stroke_shrinks() {
        let stroked = StrokedBox::new(10.0, 20.0, CornerRadii::uniform(4.0), StrokePlacement::Inside);
        assert_eq!(stroked.width, 9.5);
        assert_eq!(stroked.height, 19.5);
        assert_eq!(stroked.radii, CornerRadii::uniform(3.5));
    }

    #[test]
    fn test_outside_stroke_grows() {
        let stroked = StrokedBox::new(10.0, 20.0, CornerRadii::default(), StrokePlacement::Outside);
        assert_eq!(stroked.width, 10.5);
        assert_eq!(stroked.height, 20.5);
        // Radii grow with the box, square corners included.
        assert_eq!(stroked.radii, CornerRadii::uniform(0.5));
    }

    #[test]
    fn test_center_stroke_keeps_box() {
        let stroked = StrokedBox::new(10.0, 20.0, CornerRadii::uniform(2.0), StrokePlacement::Center);
        assert_eq!((stroked.width, stroked.height), (10.0, 20.0));
        assert_eq!(stroked.radii, CornerRadii::uniform(2.0));
    }

    #[test]
    fn test_outlines() {
        let stroked = StrokedBox::new(10.0, 10.0, CornerRadii::default(), StrokePlacement::Inside);
        let rect = stroked.rect_outline();
        assert_eq!(rect.len(), 4);
        assert_eq!(rect[2], DVec2::new(9.5, 9.5));

        let ellipse = stroked.ellipse_outline();
        assert_eq!(ellipse.len() % 2, 0);
        assert_eq!(ellipse[0], DVec2::new(9.5, 4.75));
    }
}
