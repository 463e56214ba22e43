//! # rect-clip
//!
//! Classical 2D clipping against an axis-aligned rectangular window:
//!
//! - [`clip_segment`] - Cohen-Sutherland, one line segment at a time
//! - [`clip_polygon`] - Sutherland-Hodgman, one polygon edge-plane at a time
//! - [`parse`] - the line-oriented input format feeding both
//!
//! Everything here is a pure function over small value types. There is no
//! global state, so segments can be clipped in any order or on any thread.

pub mod geometry;
pub mod parse;
pub mod polygon;
pub mod scene;
pub mod segment;

// Re-export common types at crate root for convenience.
pub use geometry::{Axis, Point, Segment, Window, WindowError};
pub use parse::{parse, parse_str, ParseError};
pub use polygon::{clip_polygon, Boundary};
pub use scene::{ClippedScene, Scene, SegmentResult};
pub use segment::{clip_segment, clip_segments, region_code, RegionCode};
