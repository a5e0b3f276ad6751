//! Axis-aligned rectangles in canvas coordinates

/// Axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its origin and extents
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Surface area
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True when either extent is zero, negative or NaN
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// True when both extents are no larger than `limit`
    pub fn fits_within(&self, limit: f64) -> bool {
        self.width <= limit && self.height <= limit
    }

    /// True when the interiors of both rectangles share any point
    ///
    /// Rectangles that only touch along an edge or corner do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True when `other` lies entirely inside `self`
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when every edge lies on an integer coordinate
    pub fn is_integer_aligned(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite() && v.fract() == 0.0)
    }

    /// Split with a vertical cut `offset` units from the left edge
    ///
    /// Returns the (left, right) halves.
    pub fn split_vertical(&self, offset: f64) -> (Self, Self) {
        (
            Self::new(self.x, self.y, offset, self.height),
            Self::new(self.x + offset, self.y, self.width - offset, self.height),
        )
    }

    /// Split with a horizontal cut `offset` units from the top edge
    ///
    /// Returns the (top, bottom) halves.
    pub fn split_horizontal(&self, offset: f64) -> (Self, Self) {
        (
            Self::new(self.x, self.y, self.width, offset),
            Self::new(self.x, self.y + offset, self.width, self.height - offset),
        )
    }
}
