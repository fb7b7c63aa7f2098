//! Error types for the text-location library.
//!
//! This module defines all error types that can occur while ingesting glyph
//! runs and projecting matches back into page coordinates.

/// Result type alias for text-location operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during text-location processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A glyph run carried unusable geometry (non-finite coordinate,
    /// non-positive font size).
    #[error("Invalid glyph run: {0}")]
    InvalidRun(String),

    /// A chunk references a font index that was never registered.
    ///
    /// Every chunk's font must be registered by the time a query runs; this
    /// indicates a programming error in the ingestion layer.
    #[error("Font not registered: index {0}")]
    MissingFont(usize),

    /// The text spanned by a match measured to zero width in text space, so
    /// the text-to-page scale factor is undefined.
    #[error("Degenerate zero-width text run on line {line}: {spanned:?}")]
    DegenerateRun {
        /// Index of the reconstructed line containing the match
        line: usize,
        /// The spanned text whose measured width was zero
        spanned: String,
    },

    /// A projected coordinate came out non-finite.
    #[error("Non-finite projection result on line {0}")]
    NonFiniteProjection(usize),
}
