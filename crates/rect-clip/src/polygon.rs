//! Sutherland-Hodgman polygon clipping against a rectangular window.
//!
//! The polygon is clipped against one window edge at a time. Each stage
//! takes the previous stage's output, so the order of the stages is fixed:
//! left, bottom, right, top.

use crate::geometry::{interpolate_to, Axis, Point, Window};

/// Which side of a boundary line is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Keep points whose coordinate is `>=` the boundary.
    AtLeast,
    /// Keep points whose coordinate is `<=` the boundary.
    AtMost,
}

/// One edge of the clipping window, as a half-plane.
///
/// ## Rust Lesson #5: Enums as Lookup Tables
///
/// Each variant maps to an axis and a side through a `match`. Adding a
/// fifth boundary would make every one of those matches fail to compile
/// until it is handled - no stringly-typed "edge" names to mistype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Left,
    Bottom,
    Right,
    Top,
}

impl Boundary {
    /// Stage order of the clipping pipeline.
    pub const ORDER: [Boundary; 4] = [Boundary::Left, Boundary::Bottom, Boundary::Right, Boundary::Top];

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Boundary::Left | Boundary::Right => Axis::X,
            Boundary::Bottom | Boundary::Top => Axis::Y,
        }
    }

    #[inline]
    pub fn side(self) -> Side {
        match self {
            Boundary::Left | Boundary::Bottom => Side::AtLeast,
            Boundary::Right | Boundary::Top => Side::AtMost,
        }
    }

    /// Position of this boundary line in `window`.
    #[inline]
    pub fn value(self, window: &Window) -> f64 {
        match self.side() {
            Side::AtLeast => window.min(self.axis()),
            Side::AtMost => window.max(self.axis()),
        }
    }

    /// Closed half-plane test: points on the line are accepted.
    #[inline]
    pub fn accepts(self, p: Point, window: &Window) -> bool {
        let coord = p.coord(self.axis());
        let value = self.value(window);
        match self.side() {
            Side::AtLeast => coord >= value,
            Side::AtMost => coord <= value,
        }
    }

    /// Crossing point of the edge `prev -> curr` with this boundary.
    ///
    /// `accepted` is whichever endpoint lies on the kept side. When it sits
    /// exactly on the line it already is the crossing and has been (or will
    /// be) emitted as a vertex, so no extra point is produced.
    fn crossing(self, prev: Point, curr: Point, accepted: Point, window: &Window) -> Option<Point> {
        let value = self.value(window);
        if accepted.coord(self.axis()) == value {
            return None;
        }
        interpolate_to(prev, curr, self.axis(), value)
    }

    /// Clip `polygon` against this single boundary.
    pub fn clip(self, polygon: &[Point], window: &Window) -> Vec<Point> {
        let Some(&last) = polygon.last() else {
            return Vec::new();
        };

        let mut output = Vec::with_capacity(polygon.len() + 1);
        let mut prev = last;
        let mut prev_accepted = self.accepts(prev, window);

        for &curr in polygon {
            let curr_accepted = self.accepts(curr, window);

            match (prev_accepted, curr_accepted) {
                (false, true) => {
                    // Entering: crossing first, then the vertex.
                    output.extend(self.crossing(prev, curr, curr, window));
                    output.push(curr);
                }
                (true, true) => output.push(curr),
                (true, false) => output.extend(self.crossing(prev, curr, prev, window)),
                (false, false) => {}
            }

            prev = curr;
            prev_accepted = curr_accepted;
        }

        output
    }
}

/// Clip a polygon against `window`.
///
/// The polygon is implicitly closed. The result may be empty when the
/// polygon and window are disjoint; a polygon already inside the window
/// comes back unchanged, vertex for vertex.
pub fn clip_polygon(polygon: &[Point], window: &Window) -> Vec<Point> {
    let mut current = polygon.to_vec();

    for boundary in Boundary::ORDER {
        if current.is_empty() {
            break;
        }
        current = boundary.clip(&current, window);
        log::trace!("{:?} stage: {} vertices", boundary, current.len());
    }

    current
}

// ============================================================================
// TESTS
// ============================================================================
