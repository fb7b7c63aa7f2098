//! Per-line substring matching and chunk-range resolution.
//!
//! Queries are literal strings compiled through `regex` with escaping, which
//! gives the non-overlapping left-to-right enumeration the location results
//! are defined in terms of: each found occurrence advances the scan past its
//! own end, so periodic patterns are counted non-overlapping (`"aa"` in
//! `"aaa"` is one match, not two).

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::layout::Line;

/// Comparison rules applied when matching a query against line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextComparison {
    /// Exact byte-for-byte comparison
    #[default]
    Exact,
    /// Unicode case-insensitive comparison
    IgnoreCase,
}

/// One occurrence of the query within a reconstructed line, resolved to the
/// chunk spans that own its first and last characters.
#[derive(Debug, Clone)]
pub(crate) struct LineMatch {
    /// Index of the line in the page's line list
    pub line: usize,
    /// Match start byte offset in the line text
    pub start: usize,
    /// Match end byte offset (exclusive) in the line text
    pub end: usize,
    /// Index into the line's spans of the chunk owning the match start
    pub first_span: usize,
    /// Index into the line's spans of the chunk owning the match end
    pub last_span: usize,
}

/// Compile a literal query under the given comparison rules.
///
/// Returns `None` for the empty query, which is defined to match nothing.
/// Compilation can also fail on valid input (the escaped literal may exceed
/// the engine's compiled-size limit); that is a recoverable fault handled
/// like the other skip-with-warning paths, so it returns `None` as well.
pub(crate) fn build_query(query: &str, comparison: TextComparison) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(comparison == TextComparison::IgnoreCase)
        .build()
    {
        Ok(regex) => Some(regex),
        Err(err) => {
            log::warn!(
                "query of {} bytes failed to compile, matching nothing: {err}",
                query.len()
            );
            None
        }
    }
}

/// Resolve the chunk span owning each end of a match range.
///
/// Walking the line's spans in order, a span is consumed as "first" the
/// instant its cumulative end offset reaches the match start, even when the
/// start is one past the span's last byte; the same entering-side rule picks
/// the "last" span at the offset of the match's final byte. This keeps
/// boundary matches attached to the chunk on the entering side.
pub(crate) fn resolve_spans(line: &Line, start: usize, end: usize) -> Option<(usize, usize)> {
    debug_assert!(start < end, "empty match ranges are filtered out earlier");
    let to_char = end - 1;

    let first = line.spans.iter().position(|span| span.end >= start)?;
    let last = line.spans[first..]
        .iter()
        .position(|span| span.end >= to_char)
        .map(|offset| first + offset)?;
    Some((first, last))
}

/// Enumerate all non-overlapping occurrences of `regex` in one line.
///
/// Occurrences whose chunk range cannot be resolved (possible only for
/// degenerate lines with no spans) are skipped.
pub(crate) fn matches_in_line(regex: &Regex, line: &Line, line_index: usize) -> Vec<LineMatch> {
    let mut matches = Vec::new();
    for found in regex.find_iter(&line.text) {
        if found.start() == found.end() {
            continue;
        }
        match resolve_spans(line, found.start(), found.end()) {
            Some((first_span, last_span)) => matches.push(LineMatch {
                line: line_index,
                start: found.start(),
                end: found.end(),
                first_span,
                last_span,
            }),
            None => {
                log::warn!(
                    "match at {}..{} on line {} has no owning chunk, skipping",
                    found.start(),
                    found.end(),
                    line_index
                );
            }
        }
    }
    matches
}
