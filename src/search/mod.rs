//! Text search over reconstructed lines, with position information.
//!
//! Split into three pieces:
//! - [`locator`]: literal substring matching per line and resolution of
//!   match offsets back to the owning chunks
//! - [`projector`]: interpolation from matched character ranges to physical
//!   page-space rectangles
//! - [`refine`]: policies widening a raw match rectangle for overlay
//!   placement (margins, neighboring words, vertical anchoring)

pub mod locator;
pub mod projector;
pub mod refine;

pub use locator::TextComparison;
pub use refine::{
    EndLocationStrategy, LocationOptions, PlacementRect, StartLocationStrategy,
    VerticalFineStrategy,
};
