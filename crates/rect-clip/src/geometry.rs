//! Core geometry types for rect-clip.
//!
//! ## Rust Lesson #1: Value Types
//!
//! `Point`, `Segment` and `Window` are all small, `Copy` structs.
//! Passing them around by value is as cheap as passing a reference,
//! and nobody can mutate a value they were handed - they get their own copy.

use std::fmt;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Coordinate selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A line segment defined by two endpoints.
///
/// `p1 == p2` is allowed (a degenerate, zero-length segment).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

/// An axis-aligned clipping window.
///
/// Always satisfies `x_min <= x_max` and `y_min <= y_max` when built
/// through [`Window::new`]. Zero width or height is legal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

/// Why a set of window bounds was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowError {
    NonFinite,
    Inverted,
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::NonFinite => write!(f, "window bounds must be finite"),
            WindowError::Inverted => write!(f, "min bound exceeds max bound"),
        }
    }
}

impl std::error::Error for WindowError {}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The coordinate along `axis`.
    #[inline]
    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Point on the segment's line at parameter `t` (`P(t) = p1 + t*(p2-p1)`).
    #[inline]
    pub fn point_at(&self, t: f64) -> Point {
        Point::new(
            self.p1.x + t * (self.p2.x - self.p1.x),
            self.p1.y + t * (self.p2.y - self.p1.y),
        )
    }

    /// Difference `p2 - p1` along `axis`.
    #[inline]
    pub fn delta(&self, axis: Axis) -> f64 {
        self.p2.coord(axis) - self.p1.coord(axis)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.p1.distance(self.p2)
    }
}

impl Window {
    /// Build a window, rejecting non-finite or inverted bounds.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self, WindowError> {
        if ![x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite()) {
            return Err(WindowError::NonFinite);
        }
        if x_min > x_max || y_min > y_max {
            return Err(WindowError::Inverted);
        }
        Ok(Self { x_min, y_min, x_max, y_max })
    }

    /// Closed-interval membership: points on the boundary are inside.
    #[inline]
    pub fn is_inside(&self, p: Point) -> bool {
        self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
    }

    #[inline]
    pub fn min(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_min,
            Axis::Y => self.y_min,
        }
    }

    #[inline]
    pub fn max(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_max,
            Axis::Y => self.y_max,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Zero width and/or zero height.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Corners in counter-clockwise order starting at `(x_min, y_min)`.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_min, self.y_min),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_max, self.y_max),
            Point::new(self.x_min, self.y_max),
        ]
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Point on the edge `p0 -> p1` whose `axis` coordinate equals `value`.
///
/// Returns `None` when the edge has no extent along `axis`: it runs
/// parallel to the boundary and cannot cross it. The crossing coordinate
/// is set to `value` exactly, and the other coordinate is clamped to the
/// edge's extent so rounding never lands outside the edge.
///
/// ## Rust Lesson #2: Option instead of a sentinel
///
/// Dividing by a zero delta would give `inf` or `NaN` and silently poison
/// every point computed from it. Returning `Option` makes the caller
/// decide what "no crossing" means.
pub fn interpolate_to(p0: Point, p1: Point, axis: Axis, value: f64) -> Option<Point> {
    let delta = p1.coord(axis) - p0.coord(axis);
    if delta == 0.0 {
        return None;
    }

    let t = (value - p0.coord(axis)) / delta;
    let other = axis.other();
    let (a, b) = (p0.coord(other), p1.coord(other));
    let along = (a + t * (b - a)).clamp(a.min(b), a.max(b));

    Some(match axis {
        Axis::X => Point::new(value, along),
        Axis::Y => Point::new(along, value),
    })
}

/// Signed area of a point sequence using the shoelace formula.
///
/// Positive for counter-clockwise winding, negative for clockwise.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

// ============================================================================
// TESTS
// ============================================================================
