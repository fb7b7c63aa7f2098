//! Rectangle projection: from a matched character range back to page space.
//!
//! A matched chunk may contain more text than the match itself (a chunk
//! `"Hello #TAG# world"` matching only `"#TAG#"`), so the match rectangle
//! must be cropped out of the chunk's physical extent. The transformation
//! matrix that produced the chunk is not available at this layer; instead the
//! scale between text space and page space is estimated empirically from the
//! spanned text's physical width versus its measured text-space width, and
//! the unmatched left/right substrings are trimmed at that scale.

use crate::error::{Error, Result};
use crate::fonts::FontTable;
use crate::geometry::Rect;
use crate::layout::TextChunk;

/// Project a match onto the page.
///
/// `spanned` is the full text covered by `first` through `last`; `left` and
/// `right` are the unmatched substrings of `spanned` on either side of the
/// match (either may be empty). All three are measured with the last chunk's
/// font and size.
///
/// Fails with [`Error::DegenerateRun`] when `spanned` measures to zero width
/// in text space (the scale factor would be a division by zero) and with
/// [`Error::NonFiniteProjection`] if any resulting edge is non-finite. Both
/// are recoverable: the caller skips the affected occurrence.
pub(crate) fn project(
    first: &TextChunk,
    last: &TextChunk,
    spanned: &str,
    left: &str,
    right: &str,
    fonts: &FontTable,
    line: usize,
) -> Result<Rect> {
    let line_real_width = last.pos_right - first.pos_left;
    let line_text_width = fonts.measure(last.font_index, spanned, last.font_size)?;
    if line_text_width <= 0.0 {
        return Err(Error::DegenerateRun {
            line,
            spanned: spanned.to_string(),
        });
    }
    let transformation = line_real_width / line_text_width;

    let left_width = if left.is_empty() {
        0.0
    } else {
        fonts.measure(last.font_index, left, last.font_size)? * transformation
    };
    let right_width = if right.is_empty() {
        0.0
    } else {
        fonts.measure(last.font_index, right, last.font_size)? * transformation
    };

    let rect = Rect::new(
        first.dist_parallel_start + left_width,
        first.pos_bottom,
        last.dist_parallel_end - right_width,
        first.pos_top,
    );
    if !rect.is_finite() {
        return Err(Error::NonFiniteProjection(line));
    }
    Ok(rect)
}
