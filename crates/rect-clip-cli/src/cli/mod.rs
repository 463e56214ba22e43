//! CLI command implementations.
//!
//! - `clip` - clip segments and polygon, print text, JSON or SVG
//! - `check` - validate input and print a summary

pub mod check;
pub mod clip;
pub mod common;
pub mod render;
pub mod style;

pub use check::cmd_check;
pub use clip::cmd_clip;
