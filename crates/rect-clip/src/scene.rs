//! A parsed input and its clipped counterpart.
//!
//! This is what the presentation layer consumes: the original geometry,
//! the window, and what survived clipping.

use crate::geometry::{signed_area, Point, Segment, Window};
use crate::polygon::clip_polygon;
use crate::segment::clip_segment;

/// Everything read from one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub segments: Vec<Segment>,
    pub window: Window,
    /// Polygon vertices; empty when the input had no polygon line.
    pub polygon: Vec<Point>,
}

/// One input segment and its visible part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentResult {
    pub original: Segment,
    pub clipped: Option<Segment>,
}

/// Result of clipping a whole [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClippedScene {
    pub window: Window,
    /// In input order.
    pub segments: Vec<SegmentResult>,
    pub polygon: Vec<Point>,
    pub clipped_polygon: Vec<Point>,
}

impl Scene {
    pub fn has_polygon(&self) -> bool {
        !self.polygon.is_empty()
    }

    /// Clip every segment and the polygon against the scene's window.
    pub fn clip(&self) -> ClippedScene {
        let segments = self
            .segments
            .iter()
            .map(|&original| SegmentResult {
                original,
                clipped: clip_segment(original, &self.window),
            })
            .collect();

        let clipped_polygon = if self.has_polygon() {
            clip_polygon(&self.polygon, &self.window)
        } else {
            Vec::new()
        };

        ClippedScene {
            window: self.window,
            segments,
            polygon: self.polygon.clone(),
            clipped_polygon,
        }
    }
}

impl ClippedScene {
    /// Number of segments with a visible part.
    pub fn visible_count(&self) -> usize {
        self.segments.iter().filter(|s| s.clipped.is_some()).count()
    }

    /// Unsigned area of the clipped polygon.
    pub fn clipped_area(&self) -> f64 {
        signed_area(&self.clipped_polygon).abs()
    }
}
