//! Text chunk representation.
//!
//! A [`TextChunk`] records one glyph run emitted by the rendering pass along
//! with derived orientation metrics. The derived values decompose the chunk's
//! position into components perpendicular and parallel to its writing
//! direction: the perpendicular component identifies which printed line the
//! chunk belongs to, the parallel component how far along that line it sits.

use std::cmp::Ordering;

use crate::geometry::Point;

/// Scale applied to the orientation angle before quantizing, giving roughly
/// 0.06-degree buckets.
const ORIENTATION_SCALE: f32 = 1000.0;

/// One rendered text fragment with a single consistent orientation.
#[derive(Debug, Clone)]
pub struct TextChunk {
    /// The fragment's text as decoded by the rendering pass
    pub text: String,
    /// Baseline start point in page space
    pub start: Point,
    /// Baseline end point in page space
    pub end: Point,
    /// Width of a single space glyph in this font and size
    pub char_space_width: f32,
    /// Unit vector of the writing direction; `(1, 0)` for zero-length runs
    pub orientation: Point,
    /// Quantized orientation angle (atan2 * 1000, rounded)
    pub orientation_magnitude: i32,
    /// Perpendicular offset from the origin along the orientation normal,
    /// rounded to the nearest integer. Identifies the printed line.
    pub dist_perpendicular: i32,
    /// Projection of the start point onto the orientation vector
    pub dist_parallel_start: f32,
    /// Projection of the end point onto the orientation vector
    pub dist_parallel_end: f32,
    /// Font size in points
    pub font_size: f32,
    /// Index into the page's font table
    pub font_index: usize,
    /// Left boundary (descent-line start x)
    pub pos_left: f32,
    /// Right boundary (ascent-line end x)
    pub pos_right: f32,
    /// Top boundary (ascent-line end y)
    pub pos_top: f32,
    /// Bottom boundary (descent-line start y)
    pub pos_bottom: f32,
}

impl TextChunk {
    /// Build a chunk from raw run geometry, deriving the orientation metrics.
    ///
    /// `ascent_end` is the endpoint of the run's ascent line, `descent_start`
    /// the start point of its descent line; together they bound the glyphs
    /// vertically.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        text: String,
        start: Point,
        end: Point,
        ascent_end: Point,
        descent_start: Point,
        char_space_width: f32,
        font_size: f32,
        font_index: usize,
    ) -> Self {
        let orientation = end.sub(&start).normalized();
        let orientation_magnitude =
            (orientation.y.atan2(orientation.x) * ORIENTATION_SCALE).round() as i32;
        // Perpendicular distance is the cross product of the start location
        // (relative to the origin) with the orientation vector, quantized to
        // integer page units. Chunks on the same printed line share it.
        let dist_perpendicular = start.cross(&orientation).round() as i32;

        Self {
            text,
            start,
            end,
            char_space_width,
            orientation,
            orientation_magnitude,
            dist_perpendicular,
            dist_parallel_start: orientation.dot(&start),
            dist_parallel_end: orientation.dot(&end),
            font_size,
            font_index,
            pos_left: descent_start.x,
            pos_right: ascent_end.x,
            pos_top: ascent_end.y,
            pos_bottom: descent_start.y,
        }
    }

    /// Whether this chunk lies on the same printed line as `other`.
    ///
    /// Exact integer equality on both quantized values; no epsilon. Lines
    /// that differ by sub-unit amounts land in different buckets.
    pub fn same_line(&self, other: &TextChunk) -> bool {
        self.orientation_magnitude == other.orientation_magnitude
            && self.dist_perpendicular == other.dist_perpendicular
    }

    /// Gap between the end of `prev` and the start of this chunk, measured
    /// along the orientation vector. Negative when the chunks overlap.
    pub fn distance_from_end_of(&self, prev: &TextChunk) -> f32 {
        self.dist_parallel_start - prev.dist_parallel_end
    }

    /// Ordering used to bring chunks into reading order:
    /// `(orientation_magnitude, dist_perpendicular, dist_parallel_start)`
    /// ascending. The float component uses total ordering, so truly equal
    /// positions compare equal and keep their relative order (which is
    /// arbitrary but stable).
    pub fn location_cmp(&self, other: &TextChunk) -> Ordering {
        self.orientation_magnitude
            .cmp(&other.orientation_magnitude)
            .then(self.dist_perpendicular.cmp(&other.dist_perpendicular))
            .then(self.dist_parallel_start.total_cmp(&other.dist_parallel_start))
    }
}
