//! Core types for scenegraft.
//!
//! This crate provides the types shared by every other scenegraft crate:
//! - The source document model produced by the design tool (`SourceNode`)
//! - The target scene-graph model consumed by the rendering engine (`OutputNode`)
//! - Value types (colors, paddings)
//! - Error types

pub mod errors;
pub mod output;
pub mod source;
pub mod types;

pub use errors::*;
pub use output::*;
pub use source::*;
pub use types::*;
