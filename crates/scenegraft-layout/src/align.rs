//! Mapping of the design tool's layout enumerations to target vocabulary.

use scenegraft_core::{
    AutoLayout, AxisAlign, Constraint, HorizontalAlign, LayoutFormat, LayoutMode, Orientation,
    TextAlignHorizontal, TextAlignVertical, VerticalAlign, XAnchor, YAnchor,
};

use crate::error::LayoutError;

/// Map an auto-layout axis alignment onto the horizontal axis.
pub fn horizontal_align(align: AxisAlign) -> Result<HorizontalAlign, LayoutError> {
    match align {
        AxisAlign::Min => Ok(HorizontalAlign::Left),
        AxisAlign::Center => Ok(HorizontalAlign::Center),
        AxisAlign::Max => Ok(HorizontalAlign::Right),
        AxisAlign::SpaceBetween | AxisAlign::Baseline => {
            Err(LayoutError::unsupported(align.as_str()))
        }
    }
}

/// Map an auto-layout axis alignment onto the vertical axis.
pub fn vertical_align(align: AxisAlign) -> Result<VerticalAlign, LayoutError> {
    match align {
        AxisAlign::Min => Ok(VerticalAlign::Top),
        AxisAlign::Center => Ok(VerticalAlign::Middle),
        AxisAlign::Max => Ok(VerticalAlign::Bottom),
        AxisAlign::SpaceBetween | AxisAlign::Baseline => {
            Err(LayoutError::unsupported(align.as_str()))
        }
    }
}

/// Choose the container format from its auto-layout descriptor.
pub fn layout_format(auto_layout: &AutoLayout) -> Result<LayoutFormat, LayoutError> {
    let primary = auto_layout.primary_axis_align_items;
    let counter = auto_layout.counter_axis_align_items;
    match auto_layout.layout_mode {
        LayoutMode::None => Ok(LayoutFormat::Anchored),
        LayoutMode::Horizontal => Ok(LayoutFormat::Float {
            orientation: Orientation::Horizontal,
            x_alignment: horizontal_align(primary)?,
            y_alignment: vertical_align(counter)?,
        }),
        LayoutMode::Vertical => Ok(LayoutFormat::Float {
            orientation: Orientation::Vertical,
            x_alignment: horizontal_align(counter)?,
            y_alignment: vertical_align(primary)?,
        }),
    }
}

/// Anchor fraction and symbolic anchor for a horizontal constraint.
///
/// Missing or unmapped constraints fall back to the axis minimum.
pub fn horizontal_anchor(constraint: Option<Constraint>) -> (f64, XAnchor) {
    match constraint {
        Some(Constraint::Center) => (0.5, XAnchor::Center),
        Some(Constraint::Max) => (1.0, XAnchor::Right),
        Some(Constraint::Stretch) => (0.5, XAnchor::Fill),
        Some(Constraint::Min | Constraint::Scale | Constraint::Unknown) | None => {
            (0.0, XAnchor::Left)
        }
    }
}

/// Anchor fraction and symbolic anchor for a vertical constraint.
pub fn vertical_anchor(constraint: Option<Constraint>) -> (f64, YAnchor) {
    match constraint {
        Some(Constraint::Center) => (0.5, YAnchor::Middle),
        Some(Constraint::Max) => (1.0, YAnchor::Bottom),
        Some(Constraint::Stretch) => (0.5, YAnchor::Fill),
        Some(Constraint::Min | Constraint::Scale | Constraint::Unknown) | None => {
            (0.0, YAnchor::Top)
        }
    }
}

/// Horizontal text alignment of a label.
pub fn text_halign(align: Option<TextAlignHorizontal>) -> Result<HorizontalAlign, LayoutError> {
    match align.unwrap_or_default() {
        TextAlignHorizontal::Left => Ok(HorizontalAlign::Left),
        TextAlignHorizontal::Center => Ok(HorizontalAlign::Center),
        TextAlignHorizontal::Right => Ok(HorizontalAlign::Right),
        TextAlignHorizontal::Justified => Err(LayoutError::unsupported("JUSTIFIED")),
    }
}

/// Vertical text alignment of a label.
pub fn text_valign(align: Option<TextAlignVertical>) -> VerticalAlign {
    match align.unwrap_or_default() {
        TextAlignVertical::Top => VerticalAlign::Top,
        TextAlignVertical::Center => VerticalAlign::Middle,
        TextAlignVertical::Bottom => VerticalAlign::Bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_alignment_mapping() {
        assert_eq!(horizontal_align(AxisAlign::Min), Ok(HorizontalAlign::Left));
        assert_eq!(horizontal_align(AxisAlign::Max), Ok(HorizontalAlign::Right));
        assert_eq!(vertical_align(AxisAlign::Center), Ok(VerticalAlign::Middle));
        assert_eq!(vertical_align(AxisAlign::Max), Ok(VerticalAlign::Bottom));
    }

    #[test]
    fn test_distribution_values_are_rejected() {
        let err = horizontal_align(AxisAlign::SpaceBetween).unwrap_err();
        assert_eq!(err.value(), "SPACE_BETWEEN");
        let err = vertical_align(AxisAlign::Baseline).unwrap_err();
        assert_eq!(err.value(), "BASELINE");
    }

    #[test]
    fn test_format_swaps_axes_for_vertical_mode() {
        let layout = AutoLayout::vertical().with_alignment(AxisAlign::Max, AxisAlign::Center);
        assert_eq!(
            layout_format(&layout),
            Ok(LayoutFormat::Float {
                orientation: Orientation::Vertical,
                x_alignment: HorizontalAlign::Center,
                y_alignment: VerticalAlign::Bottom,
            })
        );

        let layout = AutoLayout::horizontal().with_alignment(AxisAlign::Max, AxisAlign::Center);
        assert_eq!(
            layout_format(&layout),
            Ok(LayoutFormat::Float {
                orientation: Orientation::Horizontal,
                x_alignment: HorizontalAlign::Right,
                y_alignment: VerticalAlign::Middle,
            })
        );
    }

    #[test]
    fn test_no_layout_mode_is_anchored() {
        assert_eq!(layout_format(&AutoLayout::default()), Ok(LayoutFormat::Anchored));
        // Alignment values are ignored without a layout mode.
        let layout = AutoLayout {
            primary_axis_align_items: AxisAlign::SpaceBetween,
            ..Default::default()
        };
        assert_eq!(layout_format(&layout), Ok(LayoutFormat::Anchored));
    }

    #[test]
    fn test_constraint_anchors() {
        assert_eq!(horizontal_anchor(Some(Constraint::Min)), (0.0, XAnchor::Left));
        assert_eq!(horizontal_anchor(Some(Constraint::Center)), (0.5, XAnchor::Center));
        assert_eq!(horizontal_anchor(Some(Constraint::Max)), (1.0, XAnchor::Right));
        assert_eq!(horizontal_anchor(Some(Constraint::Stretch)), (0.5, XAnchor::Fill));
        assert_eq!(horizontal_anchor(None), (0.0, XAnchor::Left));
        assert_eq!(vertical_anchor(Some(Constraint::Max)), (1.0, YAnchor::Bottom));
        assert_eq!(vertical_anchor(Some(Constraint::Scale)), (0.0, YAnchor::Top));
        assert_eq!(vertical_anchor(None), (0.0, YAnchor::Top));
    }

    #[test]
    fn test_text_alignment() {
        assert_eq!(text_halign(None), Ok(HorizontalAlign::Left));
        assert_eq!(text_halign(Some(TextAlignHorizontal::Right)), Ok(HorizontalAlign::Right));
        assert!(text_halign(Some(TextAlignHorizontal::Justified)).is_err());
        assert_eq!(text_valign(Some(TextAlignVertical::Center)), VerticalAlign::Middle);
    }
}
