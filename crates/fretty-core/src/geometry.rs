//! Geometric primitives for fretboard rendering.
//!
//! Fretty uses the SVG coordinate system: origin at the top-left corner,
//! X increasing rightward and Y increasing downward.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use fretty_core::geometry::Point;
/// let p = Point::new(10.0, 20.0).add_point(Point::new(5.0, 5.0));
/// assert_eq!(p.x(), 15.0);
/// assert_eq!(p.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point's coordinates to this point
    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Returns the point halfway between this point and `other`
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size with the specified dimensions
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a square size with both sides equal to `side`
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the top-left corner of a box of this size centred on `center`
    pub fn min_point_around(self, center: Point) -> Point {
        Point::new(center.x() - self.width / 2.0, center.y() - self.height / 2.0)
    }
}
