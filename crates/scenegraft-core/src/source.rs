//! Source document model.
//!
//! Mirrors the node dump produced by the design tool. The converter only ever
//! reads these types; field names follow the tool's camelCase JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Color, Padding};

fn default_true() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}

/// A visual element in the design tool's document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNode {
    /// Display name, optionally prefixed by a `tag:`.
    #[serde(default)]
    pub name: String,
    /// Structural type.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Rotation in degrees, counter-clockwise.
    #[serde(default)]
    pub rotation: f64,
    /// 2x3 affine transform relative to the parent, when the tool provides it.
    #[serde(default)]
    pub relative_transform: Option<[[f64; 3]; 2]>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub stroke_weight: f64,
    #[serde(default)]
    pub stroke_align: StrokeAlign,
    #[serde(default)]
    pub top_left_radius: f64,
    #[serde(default)]
    pub top_right_radius: f64,
    #[serde(default)]
    pub bottom_right_radius: f64,
    #[serde(default)]
    pub bottom_left_radius: f64,
    #[serde(default)]
    pub constraints: Option<Constraints>,
    #[serde(flatten)]
    pub auto_layout: AutoLayout,
    #[serde(default)]
    pub children: Vec<SourceNode>,

    // Text nodes only.
    #[serde(default)]
    pub font_name: Option<FontName>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    #[serde(default)]
    pub text_align_vertical: Option<TextAlignVertical>,
}

impl SourceNode {
    /// Create a node of the given type and box.
    pub fn new(
        name: impl Into<String>,
        node_type: NodeType,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            name: name.into(),
            node_type,
            x,
            y,
            width,
            height,
            visible: true,
            ..Default::default()
        }
    }

    /// Parse a node tree from the tool's JSON dump.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_child(mut self, child: SourceNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint, weight: f64, align: StrokeAlign) -> Self {
        self.strokes.push(paint);
        self.stroke_weight = weight;
        self.stroke_align = align;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.top_left_radius = radius;
        self.top_right_radius = radius;
        self.bottom_right_radius = radius;
        self.bottom_left_radius = radius;
        self
    }

    pub fn with_constraints(mut self, horizontal: Constraint, vertical: Constraint) -> Self {
        self.constraints = Some(Constraints {
            horizontal,
            vertical,
        });
        self
    }

    pub fn with_auto_layout(mut self, auto_layout: AutoLayout) -> Self {
        self.auto_layout = auto_layout;
        self
    }

    /// Set the text properties of a `TEXT` node.
    pub fn with_text(mut self, characters: impl Into<String>, family: &str, style: &str, size: f64) -> Self {
        self.characters = Some(characters.into());
        self.font_name = Some(FontName {
            family: family.to_string(),
            style: style.to_string(),
        });
        self.font_size = Some(size);
        self
    }

    /// Paints that are actually rendered.
    pub fn visible_fills(&self) -> impl Iterator<Item = &Paint> {
        self.fills.iter().filter(|p| p.visible)
    }

    pub fn visible_strokes(&self) -> impl Iterator<Item = &Paint> {
        self.strokes.iter().filter(|p| p.visible)
    }

    /// The single visible fill, if there is exactly one.
    pub fn sole_fill(&self) -> Option<&Paint> {
        let mut fills = self.visible_fills();
        match (fills.next(), fills.next()) {
            (Some(paint), None) => Some(paint),
            _ => None,
        }
    }

    /// Whether this node has a visible stroke of positive weight.
    pub fn has_stroke(&self) -> bool {
        self.stroke_weight > 0.0 && self.visible_strokes().next().is_some()
    }

    /// Whether this node is rotated away from the axis-aligned position.
    pub fn is_rotated(&self) -> bool {
        self.rotation != 0.0
    }

    /// The node's 2x3 transform relative to its parent.
    ///
    /// Uses `relativeTransform` when present, otherwise derives it from the
    /// position and rotation.
    pub fn transform(&self) -> [[f64; 3]; 2] {
        if let Some(matrix) = self.relative_transform {
            return matrix;
        }
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        [[cos, sin, self.x], [-sin, cos, self.y]]
    }
}

/// Structural node types of the design tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Page,
    #[default]
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Section,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Line,
    Star,
    Polygon,
    BooleanOperation,
    Slice,
    #[serde(other)]
    Unknown,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Page => "PAGE",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Instance => "INSTANCE",
            Self::Section => "SECTION",
            Self::Text => "TEXT",
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Vector => "VECTOR",
            Self::Line => "LINE",
            Self::Star => "STAR",
            Self::Polygon => "POLYGON",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Slice => "SLICE",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Types converted by the frame/group builder.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::Page
                | Self::Frame
                | Self::Group
                | Self::Component
                | Self::ComponentSet
                | Self::Instance
                | Self::Section
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paint kinds of the design tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    #[default]
    Solid,
    Image,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Video,
    #[serde(other)]
    Unknown,
}

/// An RGB color as the tool stores it; alpha lives in the paint opacity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    #[serde(default)]
    pub color: Option<Rgb>,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Content hash of the image bytes for `IMAGE` paints.
    #[serde(default)]
    pub image_hash: Option<String>,
}

impl Paint {
    pub fn solid(r: f64, g: f64, b: f64) -> Self {
        Self {
            paint_type: PaintType::Solid,
            color: Some(Rgb { r, g, b }),
            opacity: 1.0,
            visible: true,
            image_hash: None,
        }
    }

    pub fn image(hash: impl Into<String>) -> Self {
        Self {
            paint_type: PaintType::Image,
            color: None,
            opacity: 1.0,
            visible: true,
            image_hash: Some(hash.into()),
        }
    }

    /// The output color of a solid paint, with opacity folded into alpha.
    pub fn solid_color(&self) -> Option<Color> {
        match (self.paint_type, self.color) {
            (PaintType::Solid, Some(rgb)) => Some(Color::rgba(
                rgb.r as f32,
                rgb.g as f32,
                rgb.b as f32,
                self.opacity as f32,
            )),
            _ => None,
        }
    }
}

/// Where a stroke sits relative to the shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    #[default]
    Inside,
    Outside,
    Center,
}

/// Per-axis pinning of a child to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Constraint {
    #[default]
    Min,
    Center,
    Max,
    Stretch,
    Scale,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Constraints {
    pub horizontal: Constraint,
    pub vertical: Constraint,
}

/// Auto-layout mode of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Alignment of children along an auto-layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
    Baseline,
}

impl AxisAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Center => "CENTER",
            Self::Max => "MAX",
            Self::SpaceBetween => "SPACE_BETWEEN",
            Self::Baseline => "BASELINE",
        }
    }
}

/// Auto-layout descriptor of a container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoLayout {
    pub layout_mode: LayoutMode,
    pub primary_axis_align_items: AxisAlign,
    pub counter_axis_align_items: AxisAlign,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub item_spacing: f64,
}

impl AutoLayout {
    pub fn horizontal() -> Self {
        Self {
            layout_mode: LayoutMode::Horizontal,
            ..Default::default()
        }
    }

    pub fn vertical() -> Self {
        Self {
            layout_mode: LayoutMode::Vertical,
            ..Default::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding_top = padding.top;
        self.padding_right = padding.right;
        self.padding_bottom = padding.bottom;
        self.padding_left = padding.left;
        self
    }

    pub fn with_alignment(mut self, primary: AxisAlign, counter: AxisAlign) -> Self {
        self.primary_axis_align_items = primary;
        self.counter_axis_align_items = counter;
        self
    }

    /// Edge padding of the container.
    pub fn padding(&self) -> Padding {
        Padding::new(
            self.padding_top,
            self.padding_right,
            self.padding_bottom,
            self.padding_left,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    #[default]
    Top,
    Center,
    Bottom,
}
