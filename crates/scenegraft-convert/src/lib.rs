//! Scene-graph conversion for scenegraft.
//!
//! Converts a design tool's node tree into the scene graph of a 2-D engine,
//! together with manifests of the textures and fonts the graph references.
//!
//! # Architecture
//!
//! 1. **Tags**: display names select a semantic role (`button:ok`, `edit:name`)
//! 2. **Dispatch**: each node is routed to a builder by role, else by type
//! 3. **Builders**: one per output variant; containers recurse into their
//!    children and hand them to the layout assemblers
//! 4. **Resources**: images and fonts are deduplicated by fingerprint and
//!    emitted as manifests once the tree is built
//!
//! # Example
//!
//! ```ignore
//! use scenegraft_convert::{export_json, ExportOptions};
//!
//! let export = export_json(&dump, &ExportOptions::default())?;
//! std::fs::write("scene.json", export.document_json()?)?;
//! std::fs::write("textures.json", export.textures_json()?)?;
//! ```

mod builders;
mod dispatch;
pub mod resources;
pub mod tag;

pub use resources::{FontEntry, FontManifest, ResourceTables, TextureManifest};
pub use scenegraft_layout::Positioning;
pub use tag::{is_identifier, parse_name, NameTag, Role};

use scenegraft_core::{OutputNode, Result, SourceNode, Widget};
use serde::{Deserialize, Serialize};

use dispatch::Converter;

/// Shape of the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// The converted tree itself.
    #[default]
    Node,
    /// The tree wrapped as `{ "variables": {}, "contents": ... }`.
    Widget,
}

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub mode: OutputMode,
    /// Convert sibling subtrees concurrently.
    pub parallel: bool,
    pub positioning: Positioning,
    /// Directory of texture file references in the manifest.
    pub texture_dir: String,
    pub texture_extension: String,
    /// Directory of font file references in the manifest.
    pub font_dir: String,
    pub font_extension: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            mode: OutputMode::Node,
            parallel: true,
            positioning: Positioning::Relative,
            texture_dir: "textures".to_string(),
            texture_extension: "png".to_string(),
            font_dir: "fonts".to_string(),
            font_extension: "ttf".to_string(),
        }
    }
}

/// The exported document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Node(OutputNode),
    Widget(Widget),
}

impl Document {
    /// The converted root node.
    pub fn root(&self) -> &OutputNode {
        match self {
            Self::Node(node) => node,
            Self::Widget(widget) => &widget.contents,
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub document: Document,
    pub textures: TextureManifest,
    pub fonts: FontManifest,
}

impl Export {
    pub fn document_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    pub fn textures_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.textures)?)
    }

    pub fn fonts_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.fonts)?)
    }
}

/// Convert a root node against caller-owned resource tables.
///
/// The tables are not drained; use [`export`] for a complete export.
pub fn convert(
    root: &SourceNode,
    tables: &ResourceTables,
    options: &ExportOptions,
) -> Result<OutputNode> {
    Converter::new(tables, options).convert_root(root)
}

/// Convert a document tree and emit its manifests.
///
/// Any failure aborts the whole export. When several nodes are invalid the
/// error is the first one in depth-first document order.
pub fn export(root: &SourceNode, options: &ExportOptions) -> Result<Export> {
    tracing::info!(
        root = %root.name,
        mode = ?options.mode,
        parallel = options.parallel,
        "export started"
    );

    let tables = ResourceTables::new();
    tables.reserve(root);
    let tree = convert(root, &tables, options)?;

    let textures = tables.drain_textures(&options.texture_dir, &options.texture_extension);
    let fonts = tables.drain_fonts(&options.font_dir, &options.font_extension);
    tracing::info!(
        root = %root.name,
        textures = textures.len(),
        fonts = fonts.len(),
        "export finished"
    );

    let document = match options.mode {
        OutputMode::Node => Document::Node(tree),
        OutputMode::Widget => Document::Widget(Widget::new(tree)),
    };
    Ok(Export {
        document,
        textures,
        fonts,
    })
}

/// Parse the tool's JSON dump and export it.
pub fn export_json(json: &str, options: &ExportOptions) -> Result<Export> {
    let root = SourceNode::from_json(json)?;
    export(&root, options)
}
