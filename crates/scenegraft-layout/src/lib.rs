//! Layout translation for scenegraft.
//!
//! The design tool positions children from the parent's top-left corner with
//! y growing downward, using per-axis constraints or box-based auto-layout.
//! The target engine positions them from the bottom-left with y growing
//! upward, either anchored to a parent edge or floated in sequence.
//!
//! # Architecture
//!
//! 1. **Coordinates**: origin flip and rotation-center computation
//! 2. **Vocabulary**: alignment and constraint enumerations mapped to target names
//! 3. **Assembly**: per-child layout metadata and collision-free keys for a
//!    container whose children are already converted
//!
//! # Example
//!
//! ```ignore
//! use scenegraft_layout::{assemble, ConvertedChild, Positioning};
//!
//! let container = assemble(&frame, children, Positioning::Relative)?;
//! for (key, child) in &container.children {
//!     println!("{key}: {:?}", child.layout);
//! }
//! ```

mod align;
mod anchored;
mod coords;
mod error;
mod float;
mod keys;

pub use align::{
    horizontal_align, horizontal_anchor, layout_format, text_halign, text_valign,
    vertical_align, vertical_anchor,
};
pub use anchored::assemble_anchored;
pub use coords::{flip_y, flipped_center, true_center};
pub use error::LayoutError;
pub use float::{assemble_float, float_padding};
pub use keys::KeyAllocator;

use scenegraft_core::{Container, LayoutFormat, OutputNode, SourceNode};
use serde::Deserialize;

/// Whether anchored offsets are fractions of the parent or raw units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Positioning {
    #[default]
    Relative,
    Absolute,
}

/// A child that has already been converted, paired with its source.
#[derive(Debug, Clone)]
pub struct ConvertedChild<'a> {
    pub source: &'a SourceNode,
    /// Parsed base name, used as the preferred key.
    pub name: String,
    pub node: OutputNode,
}

/// Assemble converted children into a container, choosing the layout
/// format from the parent's auto-layout descriptor.
pub fn assemble(
    parent: &SourceNode,
    children: Vec<ConvertedChild<'_>>,
    positioning: Positioning,
) -> Result<Container, LayoutError> {
    match layout_format(&parent.auto_layout)? {
        LayoutFormat::Anchored => Ok(assemble_anchored(parent, children, positioning)),
        format @ LayoutFormat::Float { orientation, .. } => {
            Ok(assemble_float(parent, format, orientation, children))
        }
    }
}
