//! Cohen-Sutherland segment clipping against a rectangular window.
//!
//! The segment is treated parametrically, `P(t) = p1 + t*(p2 - p1)` for
//! `t` in `[0, 1]`. Each window boundary contributes at most one candidate
//! `t` where the segment's line crosses it; the endpoint classification then
//! picks which candidates become the clipped endpoints.

use crate::geometry::{Axis, Point, Segment, Window};

// ============================================================================
// REGION CODES
// ============================================================================

/// The classic 4-bit Cohen-Sutherland outcode of a point.
///
/// ## Rust Lesson #3: Newtype Wrappers
///
/// A bare `u8` would let anyone OR arbitrary bits into it. Wrapping it in a
/// struct with named constants keeps the bit layout private to this module
/// while still costing nothing at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionCode(u8);

impl RegionCode {
    pub const INSIDE: RegionCode = RegionCode(0);
    pub const LEFT: RegionCode = RegionCode(1);
    pub const RIGHT: RegionCode = RegionCode(2);
    pub const BOTTOM: RegionCode = RegionCode(4);
    pub const TOP: RegionCode = RegionCode(8);

    #[inline]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, other: RegionCode) -> bool {
        self.0 & other.0 == other.0
    }

    /// Both codes lie beyond the same boundary: nothing between them is visible.
    #[inline]
    pub fn shares_outside(self, other: RegionCode) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for RegionCode {
    type Output = RegionCode;

    fn bitor(self, rhs: RegionCode) -> RegionCode {
        RegionCode(self.0 | rhs.0)
    }
}

/// Compute the outcode of `p` against `window`.
#[inline]
pub fn region_code(p: Point, window: &Window) -> RegionCode {
    let mut code = RegionCode::INSIDE;
    if p.x < window.x_min {
        code = code | RegionCode::LEFT;
    } else if p.x > window.x_max {
        code = code | RegionCode::RIGHT;
    }
    if p.y < window.y_min {
        code = code | RegionCode::BOTTOM;
    } else if p.y > window.y_max {
        code = code | RegionCode::TOP;
    }
    code
}

// ============================================================================
// BOUNDARY CROSSINGS
// ============================================================================

/// Relative slack for testing a rounded crossing against the window.
const EPSILON: f64 = 1e-9;

/// A point where the segment crosses a window boundary line, on the window.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Crossing {
    t: f64,
    point: Point,
}

fn on_boundary(axis: Axis, value: f64, along: f64) -> Point {
    match axis {
        Axis::X => Point::new(value, along),
        Axis::Y => Point::new(along, value),
    }
}

/// `value` clamped into `[lo, hi]` if it misses the range by no more than
/// rounding error at magnitude `scale`.
fn snap_to_range(value: f64, lo: f64, hi: f64, scale: f64) -> Option<f64> {
    let slack = EPSILON * scale;
    (value >= lo - slack && value <= hi + slack).then(|| value.clamp(lo, hi))
}

/// Crossing of `segment` with the boundary line `axis == value`.
///
/// `None` when the segment is parallel to the boundary, when the crossing
/// falls outside `[0, 1]`, or when the crossing point is off the window.
fn crossing(segment: &Segment, axis: Axis, value: f64, window: &Window) -> Option<Crossing> {
    let delta = segment.delta(axis);
    if delta == 0.0 {
        return None;
    }

    let t = (value - segment.p1.coord(axis)) / delta;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    // The boundary coordinate is exact by construction; only the other
    // coordinate comes from the interpolation and may be an ulp off the edge.
    let other = axis.other();
    let (lo, hi) = (window.min(other), window.max(other));
    let scale = [lo, hi, segment.p1.coord(other), segment.p2.coord(other)]
        .iter()
        .fold(0.0_f64, |m, v| m.max(v.abs()));
    let along = snap_to_range(segment.point_at(t).coord(other), lo, hi, scale)?;

    Some(Crossing { t, point: on_boundary(axis, value, along) })
}

/// Where the walk from `from` (on the window) toward `to` leaves the window.
///
/// Each axis the walk moves along has exactly one boundary it can leave
/// through; the smaller of those `t` values wins. A coordinate whose axis is
/// the one left through is the boundary value itself, so a corner exit lands
/// exactly on the corner. `None` only when `from == to`.
fn exit_point(from: Point, to: Point, window: &Window) -> Option<Point> {
    let walk = Segment::new(from, to);
    let exits = [Axis::X, Axis::Y].map(|axis| {
        let delta = walk.delta(axis);
        let value = if delta < 0.0 { window.min(axis) } else { window.max(axis) };
        (delta != 0.0).then(|| ((value - from.coord(axis)) / delta, value))
    });

    let t = exits.iter().flatten().map(|&(t, _)| t).min_by(f64::total_cmp)?;
    let coord = |axis: Axis, exit: Option<(f64, f64)>| match exit {
        Some((exit_t, value)) if exit_t == t => value,
        _ => walk
            .point_at(t)
            .coord(axis)
            .clamp(window.min(axis), window.max(axis)),
    };

    Some(Point::new(coord(Axis::X, exits[0]), coord(Axis::Y, exits[1])))
}

/// Retained crossings sorted by ascending `t`.
///
/// Boundaries are evaluated left, right, bottom, top. The sort is stable, so
/// equal `t` values (a corner crossing) keep that evaluation order.
fn crossings(segment: &Segment, window: &Window) -> Vec<Crossing> {
    let boundaries = [
        (Axis::X, window.x_min),
        (Axis::X, window.x_max),
        (Axis::Y, window.y_min),
        (Axis::Y, window.y_max),
    ];

    let mut found: Vec<Crossing> = boundaries
        .iter()
        .filter_map(|&(axis, value)| crossing(segment, axis, value, window))
        .collect();

    found.sort_by(|a, b| a.t.total_cmp(&b.t));
    found
}

// ============================================================================
// CLIPPING
// ============================================================================

/// Clip one segment against `window`.
///
/// Returns the visible part of the segment, or `None` when it lies entirely
/// outside. Boundary contact counts as visible, so a segment touching a
/// corner clips to a zero-length segment at that corner.
pub fn clip_segment(segment: Segment, window: &Window) -> Option<Segment> {
    let code1 = region_code(segment.p1, window);
    let code2 = region_code(segment.p2, window);

    // Trivial accept / reject.
    if code1.is_inside() && code2.is_inside() {
        return Some(segment);
    }
    if code1.shares_outside(code2) || segment.is_degenerate() {
        return None;
    }

    // ## Rust Lesson #4: Matching on Tuples
    //
    // Matching `(bool, bool)` lays the four endpoint cases out as a table,
    // and the compiler checks that none is missing.
    match (code1.is_inside(), code2.is_inside()) {
        (true, true) => Some(segment),
        // With one endpoint inside, the visible part runs from it to the first
        // boundary the walk toward the other endpoint leaves through.
        (true, false) => {
            exit_point(segment.p1, segment.p2, window).map(|exit| Segment::new(segment.p1, exit))
        }
        (false, true) => {
            exit_point(segment.p2, segment.p1, window).map(|entry| Segment::new(entry, segment.p2))
        }
        (false, false) => {
            let found = crossings(&segment, window);
            match (found.first(), found.last()) {
                (Some(first), Some(last)) if found.len() >= 2 => {
                    Some(Segment::new(first.point, last.point))
                }
                _ => None,
            }
        }
    }
}

/// Clip multiple segments, preserving input order.
///
/// Each segment is independent of the others.
pub fn clip_segments(segments: &[Segment], window: &Window) -> Vec<Option<Segment>> {
    segments
        .iter()
        .map(|segment| clip_segment(*segment, window))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window {
        Window::new(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::from_coords(x1, y1, x2, y2)
    }

    fn assert_close(actual: Segment, expected: Segment) {
        for (a, e) in [(actual.p1, expected.p1), (actual.p2, expected.p2)] {
            assert!(
                (a.x - e.x).abs() < 1e-10 && (a.y - e.y).abs() < 1e-10,
                "expected {:?}, got {:?}",
                expected,
                actual
            );
        }
    }

    #[test]
    fn region_codes() {
        let w = window();
        assert_eq!(region_code(Point::new(5.0, 5.0), &w), RegionCode::INSIDE);
        assert_eq!(region_code(Point::new(0.0, 10.0), &w), RegionCode::INSIDE);
        assert_eq!(region_code(Point::new(-1.0, 5.0), &w), RegionCode::LEFT);
        let corner = region_code(Point::new(11.0, 12.0), &w);
        assert!(corner.contains(RegionCode::RIGHT));
        assert!(corner.contains(RegionCode::TOP));
        assert!(!corner.contains(RegionCode::LEFT));
    }

    #[test]
    fn inside_segment_is_unchanged() {
        let s = seg(2.0, 3.0, 8.0, 7.0);
        assert_eq!(clip_segment(s, &window()), Some(s));
    }

    #[test]
    fn segment_on_boundary_is_unchanged() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        assert_eq!(clip_segment(s, &window()), Some(s));
    }

    #[test]
    fn enters_from_left() {
        let clipped = clip_segment(seg(-5.0, 5.0, 5.0, 5.0), &window()).unwrap();
        assert_eq!(clipped, seg(0.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn exits_through_top() {
        let clipped = clip_segment(seg(5.0, 5.0, 5.0, 20.0), &window()).unwrap();
        assert_eq!(clipped, seg(5.0, 5.0, 5.0, 10.0));
    }

    #[test]
    fn exits_through_corner_region() {
        // Crosses x = 10 at (10, 9) before the line y = 10 at (11, 10).
        let clipped = clip_segment(seg(5.0, 4.0, 15.0, 14.0), &window()).unwrap();
        assert_close(clipped, seg(5.0, 4.0, 10.0, 9.0));
    }

    #[test]
    fn passes_through_window() {
        let clipped = clip_segment(seg(-5.0, 5.0, 15.0, 5.0), &window()).unwrap();
        assert_eq!(clipped, seg(0.0, 5.0, 10.0, 5.0));

        let clipped = clip_segment(seg(-2.0, 1.0, 4.0, 13.0), &window()).unwrap();
        assert_close(clipped, seg(0.0, 5.0, 2.5, 10.0));
    }

    #[test]
    fn fully_outside_is_none() {
        assert_eq!(clip_segment(seg(20.0, 20.0, 30.0, 30.0), &window()), None);
        assert_eq!(clip_segment(seg(-5.0, -1.0, 15.0, -1.0), &window()), None);
    }

    #[test]
    fn line_crossing_extended_boundaries_only_is_none() {
        // Left of the window but spanning y = 0 .. 10: both horizontal
        // boundary lines are crossed off the window.
        assert_eq!(clip_segment(seg(-3.0, -5.0, -1.0, 15.0), &window()), None);
        // Misses the corner diagonally.
        assert_eq!(clip_segment(seg(8.0, 13.0, 13.0, 8.0), &window()), None);
    }

    #[test]
    fn corner_crossings() {
        let clipped = clip_segment(seg(-5.0, 15.0, 5.0, 5.0), &window()).unwrap();
        assert_eq!(clipped, seg(0.0, 10.0, 5.0, 5.0));

        let clipped = clip_segment(seg(-5.0, 5.0, 5.0, -5.0), &window()).unwrap();
        assert_close(clipped, seg(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn endpoint_on_boundary_leaving_window() {
        // p1 sits on the left edge and the segment runs right out of the window.
        let clipped = clip_segment(seg(0.0, 5.0, 20.0, 5.0), &window()).unwrap();
        assert_eq!(clipped, seg(0.0, 5.0, 10.0, 5.0));

        // p1 sits on the left edge and the segment heads away from the window.
        let clipped = clip_segment(seg(0.0, 5.0, -10.0, 5.0), &window()).unwrap();
        assert_eq!(clipped, seg(0.0, 5.0, 0.0, 5.0));
    }

    #[test]
    fn p2_inside_uses_last_crossing() {
        let clipped = clip_segment(seg(20.0, 5.0, 5.0, 5.0), &window()).unwrap();
        assert_eq!(clipped, seg(10.0, 5.0, 5.0, 5.0));

        let clipped = clip_segment(seg(-10.0, 5.0, 0.0, 5.0), &window()).unwrap();
        assert_eq!(clipped, seg(0.0, 5.0, 0.0, 5.0));
    }

    #[test]
    fn corner_exit_lands_on_corner() {
        let w = Window::new(0.1, 0.3, 0.7, 0.9).unwrap();
        let start = Point::new(0.4, 0.6);
        let clipped = clip_segment(Segment::new(start, Point::new(1.3, 1.5)), &w).unwrap();

        assert_eq!(clipped.p1, start);
        assert_close(clipped, Segment::new(start, Point::new(0.7, 0.9)));
        assert!(w.is_inside(clipped.p2), "{:?} escaped", clipped.p2);
    }

    #[test]
    fn interior_start_never_collapses() {
        for i in 1..200 {
            let f = i as f64 / 201.0;
            let w = Window::new(0.1 + f, 0.05 * f, 0.7 + f * 1.3, 0.4 + f).unwrap();
            let inside = Point::new(
                w.x_min + w.width() * 0.37,
                w.y_min + w.height() * 0.61,
            );
            for corner in w.corners() {
                let beyond = Point::new(
                    corner.x + (corner.x - inside.x) * f * 3.0,
                    corner.y + (corner.y - inside.y) * f * 3.0,
                );
                for s in [Segment::new(inside, beyond), Segment::new(beyond, inside)] {
                    let c = clip_segment(s, &w).unwrap();
                    assert_ne!(c.p1, c.p2, "{:?} collapsed in {:?}", s, w);
                    assert!(w.is_inside(c.p1) && w.is_inside(c.p2), "{:?} -> {:?}", s, c);
                }
            }
        }
    }

    #[test]
    fn near_miss_crossing_is_snapped_onto_edge() {
        assert_eq!(snap_to_range(10.0 + 1e-14, 0.0, 10.0, 10.0), Some(10.0));
        assert_eq!(snap_to_range(-1e-14, 0.0, 10.0, 10.0), Some(0.0));
        assert_eq!(snap_to_range(10.001, 0.0, 10.0, 10.0), None);
        assert_eq!(snap_to_range(5.0, 0.0, 10.0, 10.0), Some(5.0));
    }

    #[test]
    fn degenerate_segment_is_point_test() {
        let inside = seg(4.0, 4.0, 4.0, 4.0);
        assert_eq!(clip_segment(inside, &window()), Some(inside));
        assert_eq!(clip_segment(seg(-4.0, 4.0, -4.0, 4.0), &window()), None);
    }

    #[test]
    fn degenerate_window() {
        let strip = Window::new(5.0, 0.0, 5.0, 10.0).unwrap();
        let clipped = clip_segment(seg(0.0, 2.0, 10.0, 2.0), &strip).unwrap();
        assert_eq!(clipped, seg(5.0, 2.0, 5.0, 2.0));

        let point = Window::new(5.0, 5.0, 5.0, 5.0).unwrap();
        let clipped = clip_segment(seg(0.0, 0.0, 10.0, 10.0), &point).unwrap();
        assert_eq!(clipped, seg(5.0, 5.0, 5.0, 5.0));
        assert_eq!(clip_segment(seg(0.0, 1.0, 10.0, 11.0), &point), None);
    }

    #[test]
    fn batch_preserves_order() {
        let segments = [
            seg(20.0, 20.0, 30.0, 30.0),
            seg(-5.0, 5.0, 5.0, 5.0),
            seg(1.0, 1.0, 2.0, 2.0),
        ];
        let clipped = clip_segments(&segments, &window());
        assert_eq!(clipped.len(), 3);
        assert_eq!(clipped[0], None);
        assert_eq!(clipped[1], Some(seg(0.0, 5.0, 5.0, 5.0)));
        assert_eq!(clipped[2], Some(segments[2]));
    }
}
