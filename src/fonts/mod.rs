//! Per-page font table and glyph-width lookup.
//!
//! The projection step (see [`crate::search`]) needs per-character advance
//! widths to interpolate between text space and page space. Font metrics
//! themselves belong to the host PDF engine; this module only defines the
//! lookup abstraction and a memoizing table keyed by font name and size.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Advance-width lookup for one font.
///
/// Implementations are supplied by the host rendering layer (typically a thin
/// adapter over its font-metrics objects). Widths are expressed as a fraction
/// of the em square, so callers multiply by the font size to obtain text-space
/// units.
pub trait GlyphWidths {
    /// Advance width of `ch` as a fraction of the em square.
    ///
    /// Zero is a valid answer (zero-advance marks, unmapped glyphs).
    fn advance(&self, ch: char) -> f32;
}

/// A [`GlyphWidths`] where every character has the same advance.
///
/// Useful for tests and for monospaced fonts where the host engine exposes
/// no per-glyph metrics.
#[derive(Debug, Clone, Copy)]
pub struct UniformWidths(pub f32);

impl GlyphWidths for UniformWidths {
    fn advance(&self, _ch: char) -> f32 {
        self.0
    }
}

/// Key identifying one font-metrics entry: PostScript name plus font size
/// quantized to centipoints.
///
/// Quantizing the size makes the key hashable and collapses float noise from
/// the rendering pass (8.0 vs 7.9999996).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    /// PostScript font name as reported by the rendering pass
    pub name: String,
    /// Font size in centipoints (size * 100, rounded)
    pub size_centi: i32,
}

impl FontKey {
    /// Build a key from a font name and an unquantized size.
    pub fn new(name: &str, size: f32) -> Self {
        Self {
            name: name.to_string(),
            size_centi: (size * 100.0).round() as i32,
        }
    }
}

/// Memoizing table of glyph-width lookups observed during one page's
/// rendering pass.
///
/// Registration returns a stable index that chunks carry instead of the key,
/// so measuring during projection is a plain indexed lookup. The table is
/// per-page state; it is built by [`crate::extract::LocationExtractor`] and
/// frozen inside [`crate::extract::PageIndex`].
#[derive(Default)]
pub struct FontTable {
    entries: IndexMap<FontKey, Arc<dyn GlyphWidths>>,
}

impl std::fmt::Debug for FontTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontTable")
            .field("fonts", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FontTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a font, returning its stable index.
    ///
    /// Registering the same `(name, size)` twice returns the existing index;
    /// the first width lookup wins.
    pub fn register(&mut self, name: &str, size: f32, widths: Arc<dyn GlyphWidths>) -> usize {
        let key = FontKey::new(name, size);
        if let Some(index) = self.entries.get_index_of(&key) {
            return index;
        }
        self.entries.insert_full(key, widths).0
    }

    /// Number of registered fonts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Measure `text` in text space at `font_size`, using the font at
    /// `index`: the sum of per-character advances times the font size.
    ///
    /// Returns [`Error::MissingFont`] if `index` was never registered.
    pub fn measure(&self, index: usize, text: &str, font_size: f32) -> Result<f32> {
        let (_, widths) = self
            .entries
            .get_index(index)
            .ok_or(Error::MissingFont(index))?;
        Ok(text.chars().map(|ch| widths.advance(ch) * font_size).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_key_quantizes_size() {
        assert_eq!(FontKey::new("Helvetica", 8.0), FontKey::new("Helvetica", 7.9999996));
        assert_ne!(FontKey::new("Helvetica", 8.0), FontKey::new("Helvetica", 8.01));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut table = FontTable::new();
        let a = table.register("Courier", 10.0, Arc::new(UniformWidths(0.6)));
        let b = table.register("Courier", 10.0, Arc::new(UniformWidths(0.5)));
        assert_eq!(a, b);
        assert_eq!(table.len(), 1);
        // First registration wins.
        assert_eq!(table.measure(a, "x", 10.0).unwrap(), 6.0);
    }

    #[test]
    fn test_distinct_sizes_get_distinct_entries() {
        let mut table = FontTable::new();
        let a = table.register("Courier", 10.0, Arc::new(UniformWidths(0.6)));
        let b = table.register("Courier", 12.0, Arc::new(UniformWidths(0.6)));
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_measure_sums_advances() {
        let mut table = FontTable::new();
        let idx = table.register("Courier", 10.0, Arc::new(UniformWidths(0.5)));
        let w = table.measure(idx, "abcd", 10.0).unwrap();
        assert_eq!(w, 20.0);
    }

    #[test]
    fn test_measure_empty_text_is_zero() {
        let mut table = FontTable::new();
        let idx = table.register("Courier", 10.0, Arc::new(UniformWidths(0.5)));
        assert_eq!(table.measure(idx, "", 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_measure_missing_font() {
        let table = FontTable::new();
        let err = table.measure(0, "abc", 10.0).unwrap_err();
        assert!(matches!(err, Error::MissingFont(0)));
    }
}
