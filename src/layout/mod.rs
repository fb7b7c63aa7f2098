//! Line reconstruction from positioned text chunks.
//!
//! This module turns the unordered bag of glyph runs collected during a
//! page's rendering pass into ordered, searchable lines:
//! - [`TextChunk`]: one run with derived orientation/alignment metrics
//! - [`reconstruct_lines`]: sorting, line grouping, and heuristic spacing

pub mod chunk;
pub mod lines;

pub use chunk::TextChunk;
pub use lines::{reconstruct_lines, ChunkSpan, Line};
