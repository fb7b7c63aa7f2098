//! # PDF Locate
//!
//! Find text on rendered PDF pages and map it back to page coordinates.
//!
//! PDF content streams render text as positioned glyph runs in an order that
//! has nothing to do with reading order, and often without explicit space
//! glyphs. This crate reconstructs line and word geometry from those runs,
//! searches the reconstructed lines for substrings, and projects each match
//! back into a physical page-space rectangle — including interpolation to
//! crop the rectangle when a run contains more text than the match.
//!
//! The PDF engine itself is out of scope: the host renderer feeds
//! [`LocationExtractor::ingest`] one [`TextRun`] per rendered glyph run and
//! supplies per-font advance widths through the [`fonts::GlyphWidths`]
//! trait.
//!
//! ## Pipeline
//!
//! 1. **Accumulate** — the rendering pass pushes runs into a
//!    [`LocationExtractor`] (one per page).
//! 2. **Reconstruct** — [`LocationExtractor::finish`] sorts chunks by
//!    orientation and perpendicular distance, groups them into lines, and
//!    joins line text with heuristic spacing.
//! 3. **Search** — [`PageIndex::find`] enumerates non-overlapping
//!    occurrences per line and resolves each back to its owning chunks.
//! 4. **Project** — matched character ranges become page-space rectangles
//!    via an empirical text-space/page-space scale factor.
//! 5. **Refine** (optional) — [`PageIndex::refine`] widens a match
//!    rectangle toward margins or neighboring words for overlay placement.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use pdf_locate::{LocationExtractor, TextComparison, TextRun};
//! use pdf_locate::fonts::UniformWidths;
//! use pdf_locate::geometry::Point;
//!
//! let mut extractor = LocationExtractor::new();
//! extractor.ingest(
//!     TextRun {
//!         text: "Hello #TAG# world".to_string(),
//!         baseline_start: Point::new(0.0, 100.0),
//!         baseline_end: Point::new(170.0, 100.0),
//!         ascent_end: Point::new(170.0, 108.0),
//!         descent_start: Point::new(0.0, 98.0),
//!         single_space_width: 5.0,
//!         font_name: "Helvetica".to_string(),
//!         font_size: 10.0,
//!     },
//!     Arc::new(UniformWidths(0.5)),
//! )?;
//!
//! let page = extractor.finish();
//! let found = page.find("#TAG#", TextComparison::Exact);
//! assert_eq!(found.len(), 1);
//! # Ok::<(), pdf_locate::error::Error>(())
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Geometric primitives
pub mod geometry;

// Per-page font table and width lookup
pub mod fonts;

// Chunk model and line reconstruction
pub mod layout;

// Substring matching, rectangle projection, refinement policies
pub mod search;

// Run accumulation and the queryable page index
pub mod extract;

pub use error::{Error, Result};
pub use extract::{LocationExtractor, PageIndex, TextLocation, TextRun};
pub use search::{
    EndLocationStrategy, LocationOptions, PlacementRect, StartLocationStrategy, TextComparison,
    VerticalFineStrategy,
};
