//! Line reconstruction from unordered chunks.
//!
//! The rendering pass emits glyph runs in content-stream order, which is not
//! reading order. Reconstruction sorts chunks by their orientation metrics,
//! groups consecutive chunks that share a printed line, and joins their texts
//! into one searchable string per line, inserting spaces where the renderer
//! dropped explicit space glyphs.

use crate::layout::chunk::TextChunk;

/// One chunk's byte range inside its line's joined text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpan {
    /// Index of the chunk in the page's sorted chunk list
    pub chunk: usize,
    /// Start byte offset in [`Line::text`]
    pub start: usize,
    /// End byte offset (exclusive) in [`Line::text`]
    pub end: usize,
}

/// A reconstructed line: chunks in reading order plus their joined text.
///
/// Inserted heuristic spaces appear in `text` but belong to no chunk, so
/// consecutive spans may leave one-byte gaps.
#[derive(Debug, Clone)]
pub struct Line {
    /// The line's text, joined from its chunks in reading order
    pub text: String,
    /// Chunk byte ranges, in reading order
    pub spans: Vec<ChunkSpan>,
}

/// Whether a heuristic space must be inserted before appending `cur` after
/// `prev` on the same line.
///
/// Two cases reconstruct word spacing the renderer did not emit as a glyph:
/// a gap wider than half a space, and an overlap deeper than a full space
/// width (the renderer backed up over an implicit space).
fn needs_space(prev: &TextChunk, cur: &TextChunk, joined: &str) -> bool {
    let gap = cur.distance_from_end_of(prev);
    if gap < -cur.char_space_width {
        return true;
    }
    gap > cur.char_space_width / 2.0 && !joined.ends_with(' ') && !cur.text.starts_with(' ')
}

/// Sort `chunks` into reading order and group them into lines.
///
/// Returned [`ChunkSpan::chunk`] indices refer to the sorted `chunks` slice.
/// Every chunk is assigned to exactly one line; consecutive sorted chunks
/// share a line iff their quantized orientation and perpendicular distance
/// are equal.
pub fn reconstruct_lines(chunks: &mut [TextChunk]) -> Vec<Line> {
    chunks.sort_by(|a, b| a.location_cmp(b));

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Option<Line> = None;

    for (index, chunk) in chunks.iter().enumerate() {
        let same_line = current
            .as_ref()
            .and_then(|line| line.spans.last())
            .map(|span| chunk.same_line(&chunks[span.chunk]))
            .unwrap_or(false);

        if !same_line {
            if let Some(line) = current.take() {
                lines.push(line);
            }
            current = Some(Line {
                text: String::new(),
                spans: Vec::new(),
            });
        }

        let line = current.as_mut().expect("line started above");
        if let Some(last_span) = line.spans.last() {
            let prev = &chunks[last_span.chunk];
            if needs_space(prev, chunk, &line.text) {
                line.text.push(' ');
            }
        }
        let start = line.text.len();
        line.text.push_str(&chunk.text);
        line.spans.push(ChunkSpan {
            chunk: index,
            start,
            end: line.text.len(),
        });
    }

    if let Some(line) = current {
        lines.push(line);
    }

    log::debug!("reconstructed {} lines from {} chunks", lines.len(), chunks.len());
    lines
}
