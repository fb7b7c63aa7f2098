//! Match-rectangle refinement policies.
//!
//! A raw match rectangle covers exactly the matched text. Overlay placement
//! usually wants a wider region: out to the page margins, or out to the
//! neighboring word on the same line. The policies here describe how each
//! horizontal edge is extended and where inside the refined rectangle the
//! overlay anchors vertically. The extension itself runs in
//! [`crate::extract::PageIndex::refine`], which has access to the
//! reconstructed lines.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// How the left edge of the refined rectangle is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartLocationStrategy {
    /// Extend to the page's left margin
    #[default]
    LeftMargin,
    /// Extend to the right edge of the previous word on the line, falling
    /// back to the left margin when there is none
    PreviousElement,
}

/// How the right edge of the refined rectangle is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EndLocationStrategy {
    /// Extend to the page's right margin
    #[default]
    RightMargin,
    /// Extend to the left edge of the next word on the line, falling back to
    /// the right margin when there is none
    NextElement,
}

/// Where inside the refined rectangle the overlay anchors vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalFineStrategy {
    /// Anchor at the rectangle's top edge
    Top,
    /// Anchor at the rectangle's vertical center
    #[default]
    Middle,
    /// Anchor at the rectangle's bottom edge
    Bottom,
}

/// Refinement policy plus the page margins the fallback strategies extend to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationOptions {
    /// Left-edge policy
    pub start: StartLocationStrategy,
    /// Right-edge policy
    pub end: EndLocationStrategy,
    /// Vertical anchor policy
    pub vertical: VerticalFineStrategy,
    /// Left page margin x-coordinate
    pub left_margin: f32,
    /// Right page margin x-coordinate
    pub right_margin: f32,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            start: StartLocationStrategy::default(),
            end: EndLocationStrategy::default(),
            vertical: VerticalFineStrategy::default(),
            left_margin: 0.0,
            right_margin: 0.0,
        }
    }
}

impl LocationOptions {
    /// Create options with the given page margins and default strategies.
    pub fn new(left_margin: f32, right_margin: f32) -> Self {
        Self {
            left_margin,
            right_margin,
            ..Default::default()
        }
    }

    /// Set the left-edge strategy.
    pub fn with_start(mut self, start: StartLocationStrategy) -> Self {
        self.start = start;
        self
    }

    /// Set the right-edge strategy.
    pub fn with_end(mut self, end: EndLocationStrategy) -> Self {
        self.end = end;
        self
    }

    /// Set the vertical anchor strategy.
    pub fn with_vertical(mut self, vertical: VerticalFineStrategy) -> Self {
        self.vertical = vertical;
        self
    }
}

/// A refined placement region: the widened rectangle plus the vertical
/// anchor selected by the [`VerticalFineStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRect {
    /// The refined rectangle
    pub rect: Rect,
    /// Vertical anchor line inside `rect`
    pub anchor_y: f32,
}

/// Anchor y-coordinate for `rect` under the given vertical strategy.
pub(crate) fn anchor_y(rect: &Rect, vertical: VerticalFineStrategy) -> f32 {
    match vertical {
        VerticalFineStrategy::Top => rect.top,
        VerticalFineStrategy::Middle => (rect.top + rect.bottom) / 2.0,
        VerticalFineStrategy::Bottom => rect.bottom,
    }
}

/// Byte range of the last whitespace-delimited token ending at or before
/// `at` in `text`.
pub(crate) fn token_before(text: &str, at: usize) -> Option<std::ops::Range<usize>> {
    let head = text[..at].trim_end();
    if head.is_empty() {
        return None;
    }
    let start = head
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_whitespace())
        .map(|(index, ch)| index + ch.len_utf8())
        .unwrap_or(0);
    Some(start..head.len())
}

/// Byte range of the first whitespace-delimited token starting at or after
/// `from` in `text`.
pub(crate) fn token_after(text: &str, from: usize) -> Option<std::ops::Range<usize>> {
    let tail = &text[from..];
    let start_offset = tail.find(|ch: char| !ch.is_whitespace())?;
    let start = from + start_offset;
    let end = text[start..]
        .find(char::is_whitespace)
        .map(|offset| start + offset)
        .unwrap_or(text.len());
    Some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = LocationOptions::default();
        assert_eq!(opts.start, StartLocationStrategy::LeftMargin);
        assert_eq!(opts.end, EndLocationStrategy::RightMargin);
        assert_eq!(opts.vertical, VerticalFineStrategy::Middle);
    }

    #[test]
    fn test_options_builder() {
        let opts = LocationOptions::new(36.0, 559.0)
            .with_start(StartLocationStrategy::PreviousElement)
            .with_end(EndLocationStrategy::NextElement)
            .with_vertical(VerticalFineStrategy::Bottom);
        assert_eq!(opts.left_margin, 36.0);
        assert_eq!(opts.right_margin, 559.0);
        assert_eq!(opts.start, StartLocationStrategy::PreviousElement);
        assert_eq!(opts.end, EndLocationStrategy::NextElement);
        assert_eq!(opts.vertical, VerticalFineStrategy::Bottom);
    }

    #[test]
    fn test_anchor_y() {
        let rect = Rect::new(0.0, 10.0, 50.0, 20.0);
        assert_eq!(anchor_y(&rect, VerticalFineStrategy::Top), 20.0);
        assert_eq!(anchor_y(&rect, VerticalFineStrategy::Middle), 15.0);
        assert_eq!(anchor_y(&rect, VerticalFineStrategy::Bottom), 10.0);
    }

    #[test]
    fn test_token_before() {
        let text = "alpha beta gamma";
        assert_eq!(token_before(text, 11), Some(6..10)); // "beta"
        assert_eq!(token_before(text, 6), Some(0..5)); // "alpha"
        assert_eq!(token_before(text, 0), None);
        assert_eq!(token_before("   x", 3), None);
    }

    #[test]
    fn test_token_after() {
        let text = "alpha beta gamma";
        assert_eq!(token_after(text, 5), Some(6..10)); // "beta"
        assert_eq!(token_after(text, 10), Some(11..16)); // "gamma"
        assert_eq!(token_after(text, 16), None);
    }

    #[test]
    fn test_token_scan_is_multibyte_safe() {
        let text = "héllo wörld";
        let range = token_after(text, 0).unwrap();
        assert_eq!(&text[range], "héllo");
        let range = token_before(text, text.len()).unwrap();
        assert_eq!(&text[range], "wörld");
    }
}
