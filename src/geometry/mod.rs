//! Geometric primitives for text-location analysis.
//!
//! This module provides the basic geometric types used throughout the line
//! reconstruction and rectangle projection algorithms. Coordinates live in
//! page space (PDF user space): x grows right, y grows up.

use serde::{Deserialize, Serialize};

/// A 2D point in page space, also used as a 2D vector where the algorithms
/// need dot/cross products (chunk orientation decomposition).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_locate::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector difference `self - other`.
    pub fn sub(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Dot product, treating both points as vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_locate::geometry::Point;
    ///
    /// let a = Point::new(1.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.dot(&b), 3.0);
    /// ```
    pub fn dot(&self, other: &Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of two 2D vectors.
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    pub fn cross(&self, other: &Point) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean length, treating the point as a vector.
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Returns `(1, 0)` for the zero vector, matching the default writing
    /// direction used for zero-length glyph runs.
    pub fn normalized(&self) -> Point {
        let len = self.length();
        if len == 0.0 {
            Point::new(1.0, 0.0)
        } else {
            Point::new(self.x / len, self.y / len)
        }
    }

    /// Check that both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An axis-aligned rectangle in page space.
///
/// Stored as its four edges because projection computes them independently.
/// `bottom <= top` and `left <= right` for well-formed rectangles (y grows
/// up in page space).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge x-coordinate
    pub left: f32,
    /// Bottom edge y-coordinate
    pub bottom: f32,
    /// Right edge x-coordinate
    pub right: f32,
    /// Top edge y-coordinate
    pub top: f32,
}

impl Rect {
    /// Create a new rectangle from its four edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_locate::geometry::Rect;
    ///
    /// let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Check that all four edges are finite.
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.bottom.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
    }
}
