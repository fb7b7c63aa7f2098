//! Glyph-run accumulation and location queries.
//!
//! The host PDF engine drives a push-style rendering pass: it calls
//! [`LocationExtractor::ingest`] once per rendered glyph run, in rendering
//! order (not reading order). When the page is done, [`LocationExtractor::finish`]
//! sorts the accumulated chunks, reconstructs lines, and freezes everything
//! into an immutable [`PageIndex`] that answers any number of
//! [`find`](PageIndex::find) queries. One extractor processes exactly one
//! page; nothing survives into the next page.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fonts::{FontTable, GlyphWidths};
use crate::geometry::{Point, Rect};
use crate::layout::{reconstruct_lines, Line, TextChunk};
use crate::search::locator::{self, LineMatch};
use crate::search::refine::{self, token_after, token_before};
use crate::search::{
    projector, EndLocationStrategy, LocationOptions, PlacementRect, StartLocationStrategy,
    TextComparison,
};

/// One positioned glyph run as reported by the host rendering pass.
#[derive(Debug, Clone)]
pub struct TextRun {
    /// Decoded text of the run
    pub text: String,
    /// Baseline start point in page space
    pub baseline_start: Point,
    /// Baseline end point in page space
    pub baseline_end: Point,
    /// Endpoint of the run's ascent line
    pub ascent_end: Point,
    /// Start point of the run's descent line
    pub descent_start: Point,
    /// Width of one space glyph in this font and size, in page units
    pub single_space_width: f32,
    /// PostScript font name
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
}

/// Accumulates glyph runs for one page of a rendering pass.
#[derive(Default)]
pub struct LocationExtractor {
    chunks: Vec<TextChunk>,
    fonts: FontTable,
}

impl LocationExtractor {
    /// Create an extractor for one page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one glyph run.
    ///
    /// `widths` is the advance-width lookup for the run's font; it is
    /// registered in the page's font table the first time this
    /// `(font name, size)` pair is seen.
    ///
    /// Fails with [`Error::InvalidRun`] when the run carries non-finite
    /// geometry or a non-positive font size; such a run would poison line
    /// grouping for the whole page.
    pub fn ingest(&mut self, run: TextRun, widths: Arc<dyn GlyphWidths>) -> Result<()> {
        if !(run.baseline_start.is_finite()
            && run.baseline_end.is_finite()
            && run.ascent_end.is_finite()
            && run.descent_start.is_finite())
        {
            return Err(Error::InvalidRun(format!(
                "non-finite coordinates for {:?}",
                run.text
            )));
        }
        if !run.font_size.is_finite() || run.font_size <= 0.0 {
            return Err(Error::InvalidRun(format!(
                "font size {} for {:?}",
                run.font_size, run.text
            )));
        }
        if !run.single_space_width.is_finite() || run.single_space_width < 0.0 {
            return Err(Error::InvalidRun(format!(
                "space width {} for {:?}",
                run.single_space_width, run.text
            )));
        }

        let font_index = self.fonts.register(&run.font_name, run.font_size, widths);
        self.chunks.push(TextChunk::new(
            run.text,
            run.baseline_start,
            run.baseline_end,
            run.ascent_end,
            run.descent_start,
            run.single_space_width,
            run.font_size,
            font_index,
        ));
        Ok(())
    }

    /// Number of runs ingested so far.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether any run has been ingested.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Finish the page: sort chunks, reconstruct lines, and freeze the
    /// result for querying.
    pub fn finish(mut self) -> PageIndex {
        let lines = reconstruct_lines(&mut self.chunks);
        PageIndex {
            chunks: self.chunks,
            lines,
            fonts: self.fonts,
        }
    }
}

/// One located occurrence of a query on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLocation {
    /// The matched text as it appears in the reconstructed line
    pub text: String,
    /// Bounding rectangle of the match in page space
    pub rect: Rect,
    /// Index of the owning line in [`PageIndex::lines`]
    pub line: usize,
    /// Match start byte offset within the line text
    pub start_offset: usize,
    /// Match end byte offset (exclusive) within the line text
    pub end_offset: usize,
    /// Index into [`PageIndex::chunks`] of the chunk owning the match start
    pub first_chunk: usize,
    /// Index into [`PageIndex::chunks`] of the chunk owning the match end
    pub last_chunk: usize,
    /// Baseline start point of the first owning chunk
    pub start: Point,
    /// Baseline end point of the last owning chunk
    pub end: Point,
}

/// Immutable, queryable index of one page's text.
///
/// Produced by [`LocationExtractor::finish`]. Queries never mutate the
/// index, so repeated identical queries return identical results.
pub struct PageIndex {
    chunks: Vec<TextChunk>,
    lines: Vec<Line>,
    fonts: FontTable,
}

impl PageIndex {
    /// The page's chunks in reading order.
    pub fn chunks(&self) -> &[TextChunk] {
        &self.chunks
    }

    /// The reconstructed lines in reading order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The page's font table.
    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    /// Find all occurrences of `query` on the page.
    ///
    /// Occurrences are reported in line order, then left to right within a
    /// line, counted non-overlapping. The empty query matches nothing, as
    /// does a query too large for the match engine to compile (warned).
    /// Occurrences whose rectangle cannot be projected (zero-width spanned
    /// text, unregistered font) are skipped with a warning rather than
    /// surfacing degenerate geometry.
    pub fn find(&self, query: &str, comparison: TextComparison) -> Vec<TextLocation> {
        let regex = match locator::build_query(query, comparison) {
            Some(regex) => regex,
            None => return Vec::new(),
        };

        let mut locations = Vec::new();
        for (line_index, line) in self.lines.iter().enumerate() {
            for m in locator::matches_in_line(&regex, line, line_index) {
                match self.project_match(line, &m) {
                    Ok(rect) => locations.push(self.location_from(line, &m, rect)),
                    Err(err) => {
                        debug_assert!(
                            !matches!(err, Error::MissingFont(_)),
                            "chunk references unregistered font: {err}"
                        );
                        log::warn!("skipping occurrence on line {}: {err}", m.line);
                    }
                }
            }
        }
        locations
    }

    /// Widen a match rectangle for overlay placement according to `options`.
    ///
    /// The neighbor-based strategies look up the previous/next word on the
    /// match's line and extend to its edge; when no neighbor exists, or the
    /// neighbor does not strictly precede/follow the match horizontally, the
    /// corresponding margin strategy is used instead.
    pub fn refine(&self, location: &TextLocation, options: &LocationOptions) -> PlacementRect {
        let line = &self.lines[location.line];

        let left = match options.start {
            StartLocationStrategy::LeftMargin => options.left_margin,
            StartLocationStrategy::PreviousElement => token_before(&line.text, location.start_offset)
                .and_then(|range| self.project_line_range(location.line, range.start, range.end))
                .filter(|neighbor| neighbor.right < location.rect.left)
                .map(|neighbor| neighbor.right)
                .unwrap_or(options.left_margin),
        };

        let right = match options.end {
            EndLocationStrategy::RightMargin => options.right_margin,
            EndLocationStrategy::NextElement => token_after(&line.text, location.end_offset)
                .and_then(|range| self.project_line_range(location.line, range.start, range.end))
                .filter(|neighbor| neighbor.left > location.rect.right)
                .map(|neighbor| neighbor.left)
                .unwrap_or(options.right_margin),
        };

        let rect = Rect::new(left, location.rect.bottom, right, location.rect.top);
        PlacementRect {
            rect,
            anchor_y: refine::anchor_y(&rect, options.vertical),
        }
    }

    /// Project an arbitrary byte range of one line, used for neighbor
    /// lookups. Returns `None` when the range cannot be resolved or
    /// projected; the caller falls back to its margin strategy.
    fn project_line_range(&self, line_index: usize, start: usize, end: usize) -> Option<Rect> {
        let line = &self.lines[line_index];
        let (first_span, last_span) = locator::resolve_spans(line, start, end)?;
        let m = LineMatch {
            line: line_index,
            start,
            end,
            first_span,
            last_span,
        };
        match self.project_match(line, &m) {
            Ok(rect) => Some(rect),
            Err(err) => {
                log::debug!("neighbor projection failed on line {line_index}: {err}");
                None
            }
        }
    }

    /// Compute the unmatched left/right substrings of a match's spanned text
    /// and run the interpolation.
    fn project_match(&self, line: &Line, m: &LineMatch) -> Result<Rect> {
        let first = &line.spans[m.first_span];
        let last = &line.spans[m.last_span];

        let spanned = &line.text[first.start..last.end];
        // The entering-side boundary rule can place the match start at the
        // first span's end (or the match end past the last span's end), so
        // both crops are clamped to the spanned range.
        let left = &line.text[first.start..m.start.max(first.start).min(last.end)];
        let right = if m.end >= last.end {
            ""
        } else {
            &line.text[m.end..last.end]
        };

        projector::project(
            &self.chunks[first.chunk],
            &self.chunks[last.chunk],
            spanned,
            left,
            right,
            &self.fonts,
            m.line,
        )
    }

    fn location_from(&self, line: &Line, m: &LineMatch, rect: Rect) -> TextLocation {
        let first = &line.spans[m.first_span];
        let last = &line.spans[m.last_span];
        TextLocation {
            text: line.text[m.start..m.end].to_string(),
            rect,
            line: m.line,
            start_offset: m.start,
            end_offset: m.end,
            first_chunk: first.chunk,
            last_chunk: last.chunk,
            start: self.chunks[first.chunk].start,
            end: self.chunks[last.chunk].end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::UniformWidths;

    fn run(text: &str, x0: f32, x1: f32, y: f32) -> TextRun {
        TextRun {
            text: text.to_string(),
            baseline_start: Point::new(x0, y),
            baseline_end: Point::new(x1, y),
            ascent_end: Point::new(x1, y + 8.0),
            descent_start: Point::new(x0, y - 2.0),
            single_space_width: 5.0,
            font_name: "Test".to_string(),
            font_size: 10.0,
        }
    }

    fn widths() -> Arc<dyn GlyphWidths> {
        Arc::new(UniformWidths(0.5))
    }

    #[test]
    fn test_ingest_rejects_non_finite_geometry() {
        let mut extractor = LocationExtractor::new();
        let mut bad = run("x", 0.0, 10.0, 0.0);
        bad.baseline_end = Point::new(f32::NAN, 0.0);
        let err = extractor.ingest(bad, widths()).unwrap_err();
        assert!(matches!(err, Error::InvalidRun(_)));
        assert!(extractor.is_empty());
    }

    #[test]
    fn test_ingest_rejects_non_positive_font_size() {
        let mut extractor = LocationExtractor::new();
        let mut bad = run("x", 0.0, 10.0, 0.0);
        bad.font_size = 0.0;
        assert!(extractor.ingest(bad, widths()).is_err());
    }

    #[test]
    fn test_find_on_empty_page() {
        let index = LocationExtractor::new().finish();
        assert!(index.find("anything", TextComparison::Exact).is_empty());
    }

    #[test]
    fn test_empty_query_returns_empty() {
        let mut extractor = LocationExtractor::new();
        extractor.ingest(run("some text", 0.0, 90.0, 0.0), widths()).unwrap();
        let index = extractor.finish();
        assert!(index.find("", TextComparison::Exact).is_empty());
    }

    #[test]
    fn test_find_reports_line_then_position_order() {
        let mut extractor = LocationExtractor::new();
        // Ingested out of reading order on purpose.
        extractor.ingest(run("x two", 100.0, 150.0, 100.0), widths()).unwrap();
        extractor.ingest(run("x one", 0.0, 50.0, 200.0), widths()).unwrap();
        let index = extractor.finish();

        let found = index.find("x", TextComparison::Exact);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].line, 0);
        assert_eq!(found[1].line, 1);
        assert!(found[0].rect.top > found[1].rect.top);
    }
}
