//! Target scene-graph model.
//!
//! Serializes to the JSON document read by the rendering engine. Field names
//! are part of that contract: `type`, `data`, `format`, `children`, `layout`
//! and the per-variant fields below.

use indexmap::IndexMap;
use serde::Serialize;

use crate::types::{Color, Padding};

/// Placement record shared by every node variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Fraction of the node's size that `position` refers to, origin bottom-left.
    pub anchor: [f64; 2],
    pub size: [f64; 2],
    pub scale: [f64; 2],
    /// Rotation in degrees, counter-clockwise.
    pub angle: f64,
    pub visible: bool,
    /// Position of the anchor point in the parent's bottom-left, y-up space.
    pub position: [f64; 2],
}

impl Transform {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            anchor: [0.0, 0.0],
            size: [width, height],
            scale: [1.0, 1.0],
            angle: 0.0,
            visible: true,
            position: [0.0, 0.0],
        }
    }

    pub fn width(&self) -> f64 {
        self.size[0]
    }

    pub fn height(&self) -> f64 {
        self.size[1]
    }

    /// Anchor the node at its center.
    pub fn centered_at(mut self, x: f64, y: f64) -> Self {
        self.anchor = [0.5, 0.5];
        self.position = [x, y];
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeData {
    #[serde(flatten)]
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageData {
    #[serde(flatten)]
    pub transform: Transform,
    /// Canonical texture name from the texture manifest.
    pub texture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NinePatchData {
    #[serde(flatten)]
    pub transform: Transform,
    pub texture: String,
    /// Slice insets; always zero, which renders as a plain textured rectangle.
    pub slices: Padding,
}

/// Shared by `Label` and `TextField`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextData {
    #[serde(flatten)]
    pub transform: Transform,
    /// Canonical font key from the font manifest.
    pub font: String,
    pub text: String,
    pub fgcolor: Color,
    pub bgcolor: Color,
    pub padding: Padding,
    pub halign: HorizontalAlign,
    pub valign: VerticalAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonData {
    #[serde(flatten)]
    pub transform: Transform,
    pub upnode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downnode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidData {
    #[serde(flatten)]
    pub transform: Transform,
    /// Polygon in node-local coordinates, origin at the bottom-left of the box.
    pub points: Vec<[f64; 2]>,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathData {
    #[serde(flatten)]
    pub transform: Transform,
    pub points: Vec<[f64; 2]>,
    pub color: Color,
    /// Line width.
    pub width: f64,
    pub closed: bool,
}

/// Node variants of the target engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum NodeKind {
    Node(NodeData),
    Image(ImageData),
    Label(TextData),
    TextField(TextData),
    Button(ButtonData),
    Solid(SolidData),
    Path(PathData),
    NinePatch(NinePatchData),
}

impl NodeKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Node(_) => "Node",
            Self::Image(_) => "Image",
            Self::Label(_) => "Label",
            Self::TextField(_) => "TextField",
            Self::Button(_) => "Button",
            Self::Solid(_) => "Solid",
            Self::Path(_) => "Path",
            Self::NinePatch(_) => "NinePatch",
        }
    }

    pub fn transform(&self) -> &Transform {
        match self {
            Self::Node(d) => &d.transform,
            Self::Image(d) => &d.transform,
            Self::Label(d) | Self::TextField(d) => &d.transform,
            Self::Button(d) => &d.transform,
            Self::Solid(d) => &d.transform,
            Self::Path(d) => &d.transform,
            Self::NinePatch(d) => &d.transform,
        }
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        match self {
            Self::Node(d) => &mut d.transform,
            Self::Image(d) => &mut d.transform,
            Self::Label(d) | Self::TextField(d) => &mut d.transform,
            Self::Button(d) => &mut d.transform,
            Self::Solid(d) => &mut d.transform,
            Self::Path(d) => &mut d.transform,
            Self::NinePatch(d) => &mut d.transform,
        }
    }
}

/// How a container places its children.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum LayoutFormat {
    Anchored,
    Float {
        orientation: Orientation,
        x_alignment: HorizontalAlign,
        y_alignment: VerticalAlign,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Symbolic horizontal anchor of an anchored child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum XAnchor {
    Left,
    Center,
    Right,
    Fill,
}

/// Symbolic vertical anchor of an anchored child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YAnchor {
    Top,
    Middle,
    Bottom,
    Fill,
}

/// Per-child layout metadata, matching the parent's `LayoutFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ChildLayout {
    Anchored {
        x_anchor: XAnchor,
        y_anchor: YAnchor,
        x_offset: f64,
        y_offset: f64,
        absolute: bool,
    },
    Float {
        /// Document order; defines placement and wrap order.
        priority: usize,
        padding: Padding,
    },
}

/// A keyed child of a container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Child {
    pub layout: ChildLayout,
    pub node: OutputNode,
}

/// Children and layout format of a container node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    pub format: LayoutFormat,
    /// Keyed children, kept in document order.
    pub children: IndexMap<String, Child>,
}

impl Container {
    pub fn new(format: LayoutFormat) -> Self {
        Self {
            format,
            children: IndexMap::new(),
        }
    }

    /// Key of the child at a document position.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.children.get_index(index).map(|(key, _)| key.as_str())
    }
}

/// A node of the target scene graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputNode {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(flatten)]
    pub container: Option<Container>,
}

impl OutputNode {
    /// A node without children.
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            container: None,
        }
    }

    /// A container node.
    pub fn container(kind: NodeKind, container: Container) -> Self {
        Self {
            kind,
            container: Some(container),
        }
    }

    pub fn transform(&self) -> &Transform {
        self.kind.transform()
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        self.kind.transform_mut()
    }

    /// Look up a direct child by key.
    pub fn child(&self, key: &str) -> Option<&Child> {
        self.container.as_ref()?.children.get(key)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.container.as_ref().map_or(0, |c| c.children.len())
    }
}

/// Wrapper emitted in `widget` output mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Widget {
    pub variables: serde_json::Map<String, serde_json::Value>,
    pub contents: OutputNode,
}

impl Widget {
    pub fn new(contents: OutputNode) -> Self {
        Self {
            variables: serde_json::Map::new(),
            contents,
        }
    }
}
