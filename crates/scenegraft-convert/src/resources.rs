//! Texture and font tables shared by one export.
//!
//! Both tables map a content fingerprint to the canonical name under which the
//! resource is exported. The first writer wins: later nodes with the same
//! fingerprint reuse the first name. Lookups are atomic insert-if-absent so
//! sibling subtrees can be converted concurrently.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use indexmap::IndexMap;
use scenegraft_core::{FontName, NodeType, PaintType, SourceNode};
use serde::Serialize;

use crate::tag::parse_name;

/// Canonical texture name to file reference.
pub type TextureManifest = IndexMap<String, String>;

/// Canonical font key to file reference and point size.
pub type FontManifest = IndexMap<String, FontEntry>;

/// A font manifest entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontEntry {
    pub file: String,
    pub size: f64,
}

#[derive(Debug, Default)]
struct TextureTable {
    names: IndexMap<String, String>,
    used: HashSet<String>,
}

#[derive(Debug)]
struct FontSlot {
    key: String,
    family: String,
    style: String,
    size: f64,
}

#[derive(Debug, Default)]
struct FontTable {
    slots: IndexMap<String, FontSlot>,
    used: HashSet<String>,
}

/// Resource tables for a single export.
#[derive(Debug, Default)]
pub struct ResourceTables {
    textures: Mutex<TextureTable>,
    fonts: Mutex<FontTable>,
}

impl ResourceTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical name for the image with content hash `hash`.
    ///
    /// `layer_name` names the texture if this is the first time the hash is
    /// seen; a `_<n>` suffix keeps names unique across different hashes.
    pub fn texture(&self, hash: &str, layer_name: &str) -> String {
        let mut table = self
            .textures
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(name) = table.names.get(hash) {
            tracing::trace!(hash, name = %name, "texture table hit");
            return name.clone();
        }
        let name = unique(sanitize(layer_name), &mut table.used);
        tracing::trace!(hash, name = %name, "texture table miss");
        table.names.insert(hash.to_string(), name.clone());
        name
    }

    /// Canonical key for a font face at a point size.
    pub fn font(&self, font: &FontName, size: f64) -> String {
        let fingerprint = format!("{}+{}+{}", font.family, font.style, size);
        let mut table = self.fonts.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = table.slots.get(&fingerprint) {
            tracing::trace!(fingerprint = %fingerprint, key = %slot.key, "font table hit");
            return slot.key.clone();
        }
        let base = sanitize(&format!("{}_{}_{}", font.family, font.style, format_size(size)));
        let key = unique(base, &mut table.used);
        tracing::trace!(fingerprint = %fingerprint, key = %key, "font table miss");
        table.slots.insert(
            fingerprint,
            FontSlot {
                key: key.clone(),
                family: font.family.clone(),
                style: font.style.clone(),
                size,
            },
        );
        key
    }

    pub fn texture_count(&self) -> usize {
        self.textures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .names
            .len()
    }

    pub fn font_count(&self) -> usize {
        self.fonts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .slots
            .len()
    }

    /// Reserve every texture and font of a tree in document order.
    ///
    /// Running this before a parallel conversion makes first-writer-wins
    /// naming independent of the order in which siblings finish.
    pub fn reserve(&self, root: &SourceNode) {
        if let Some(hash) = texture_hash(root) {
            self.texture(hash, &layer_base(&root.name));
        }
        if let Some((font, size)) = text_font(root) {
            self.font(font, size);
        }
        for child in &root.children {
            self.reserve(child);
        }
    }

    /// Emit the texture manifest and clear the table.
    pub fn drain_textures(&self, dir: &str, extension: &str) -> TextureManifest {
        let mut table = self
            .textures
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let table = std::mem::take(&mut *table);
        table
            .names
            .into_values()
            .map(|name| {
                let file = format!("{dir}/{name}.{extension}");
                (name, file)
            })
            .collect()
    }

    /// Emit the font manifest and clear the table.
    pub fn drain_fonts(&self, dir: &str, extension: &str) -> FontManifest {
        let mut table = self.fonts.lock().unwrap_or_else(PoisonError::into_inner);
        let table = std::mem::take(&mut *table);
        table
            .slots
            .into_values()
            .map(|slot| {
                let file = format!(
                    "{dir}/{}-{}.{extension}",
                    strip_spaces(&slot.family),
                    strip_spaces(&slot.style)
                );
                (slot.key, FontEntry { file, size: slot.size })
            })
            .collect()
    }
}

/// Image hash of a rectangle whose sole visible fill is an image.
pub(crate) fn texture_hash(node: &SourceNode) -> Option<&str> {
    if node.node_type != NodeType::Rectangle {
        return None;
    }
    let paint = node.sole_fill()?;
    match paint.paint_type {
        PaintType::Image => paint.image_hash.as_deref(),
        _ => None,
    }
}

/// Font face and size of a text node.
pub(crate) fn text_font(node: &SourceNode) -> Option<(&FontName, f64)> {
    if node.node_type != NodeType::Text {
        return None;
    }
    Some((node.font_name.as_ref()?, node.font_size?))
}

/// Base name used for resources named after a layer.
pub(crate) fn layer_base(name: &str) -> String {
    parse_name(name).map_or_else(|_| name.to_string(), |parsed| parsed.base)
}

fn unique(base: String, used: &mut HashSet<String>) -> String {
    let mut name = base.clone();
    let mut n = 1;
    while used.contains(&name) {
        name = format!("{base}_{n}");
        n += 1;
    }
    used.insert(name.clone());
    name
}

fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "_".to_string()
    } else {
        cleaned
    }
}

fn strip_spaces(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

fn format_size(size: f64) -> String {
    if size.fract() == 0.0 {
        format!("{}", size as i64)
    } else {
        format!("{size}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegraft_core::Paint;

    fn font(family: &str, style: &str) -> FontName {
        FontName {
            family: family.to_string(),
            style: style.to_string(),
        }
    }

    #[test]
    fn test_first_writer_wins() {
        let tables = ResourceTables::new();
        assert_eq!(tables.texture("abc", "hero"), "hero");
        assert_eq!(tables.texture("abc", "banner"), "hero");
        assert_eq!(tables.texture_count(), 1);

        let manifest = tables.drain_textures("textures", "png");
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest["hero"], "textures/hero.png");
        assert_eq!(tables.texture_count(), 0);
    }

    #[test]
    fn test_texture_names_stay_unique() {
        let tables = ResourceTables::new();
        assert_eq!(tables.texture("a", "icon"), "icon");
        assert_eq!(tables.texture("b", "icon"), "icon_1");
        assert_eq!(tables.texture("c", "icon"), "icon_2");
        assert_eq!(tables.texture("d", "my icon"), "my_icon");
    }

    #[test]
    fn test_font_keys_and_manifest() {
        let tables = ResourceTables::new();
        let inter = font("Inter", "Semi Bold");
        assert_eq!(tables.font(&inter, 14.0), "Inter_Semi_Bold_14");
        assert_eq!(tables.font(&inter, 14.0), "Inter_Semi_Bold_14");
        assert_eq!(tables.font(&inter, 12.5), "Inter_Semi_Bold_12_5");

        let manifest = tables.drain_fonts("fonts", "ttf");
        assert_eq!(manifest.len(), 2);
        let entry = &manifest["Inter_Semi_Bold_14"];
        assert_eq!(entry.file, "fonts/Inter-SemiBold.ttf");
        assert_eq!(entry.size, 14.0);
        assert_eq!(tables.font_count(), 0);
    }

    #[test]
    fn test_reserve_walks_in_document_order() {
        let root = SourceNode::new("root", NodeType::Frame, 0.0, 0.0, 100.0, 100.0)
            .with_child(
                SourceNode::new("first", NodeType::Rectangle, 0.0, 0.0, 10.0, 10.0)
                    .with_fill(Paint::image("same")),
            )
            .with_child(
                SourceNode::new("group", NodeType::Group, 0.0, 0.0, 10.0, 10.0).with_child(
                    SourceNode::new("second", NodeType::Rectangle, 0.0, 0.0, 10.0, 10.0)
                        .with_fill(Paint::image("same")),
                ),
            )
            .with_child(
                SourceNode::new("label", NodeType::Text, 0.0, 0.0, 10.0, 10.0)
                    .with_text("Hi", "Inter", "Regular", 12.0),
            );

        let tables = ResourceTables::new();
        tables.reserve(&root);
        assert_eq!(tables.texture("same", "other"), "first");
        assert_eq!(tables.texture_count(), 1);
        assert_eq!(tables.font_count(), 1);
    }

    #[test]
    fn test_only_image_rectangles_carry_textures() {
        let frame = SourceNode::new("frame", NodeType::Frame, 0.0, 0.0, 1.0, 1.0)
            .with_fill(Paint::image("h"));
        assert_eq!(texture_hash(&frame), None);
        let solid = SourceNode::new("bg", NodeType::Rectangle, 0.0, 0.0, 1.0, 1.0)
            .with_fill(Paint::solid(1.0, 0.0, 0.0));
        assert_eq!(texture_hash(&solid), None);
        let image = SourceNode::new("img", NodeType::Rectangle, 0.0, 0.0, 1.0, 1.0)
            .with_fill(Paint::image("h"));
        assert_eq!(texture_hash(&image), Some("h"));
    }

    #[test]
    fn test_layer_base_strips_tag() {
        assert_eq!(layer_base("ninepatch:panel"), "panel");
        assert_eq!(layer_base("not valid"), "not valid");
    }
}
