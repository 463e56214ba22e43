//! SVG styling, loadable from a YAML file.
//!
//! Every field is optional in the file; missing ones fall back to the
//! defaults below.
//!
//! ```yaml
//! window: red
//! clipped_segment: green
//! stroke_width: 0.05
//! margin: 2
//! ```

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    /// Window outline colour
    pub window: String,
    /// Input segments (drawn dashed)
    pub original_segment: String,
    /// Visible parts of segments
    pub clipped_segment: String,
    /// Input polygon outline (drawn dashed)
    pub original_polygon: String,
    /// Clipped polygon outline
    pub clipped_polygon: String,
    /// Stroke width in input units
    pub stroke_width: f64,
    /// Space around the window in input units
    pub margin: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            window: "red".to_string(),
            original_segment: "blue".to_string(),
            clipped_segment: "green".to_string(),
            original_polygon: "purple".to_string(),
            clipped_polygon: "orange".to_string(),
            stroke_width: 0.1,
            margin: 1.0,
        }
    }
}

impl Style {
    /// Parse a style from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let style: Style = serde_yaml::from_str(content).context("failed to parse style YAML")?;
        ensure!(
            style.stroke_width.is_finite() && style.stroke_width > 0.0,
            "stroke_width must be a positive number"
        );
        ensure!(
            style.margin.is_finite() && style.margin >= 0.0,
            "margin must be a non-negative number"
        );
        Ok(style)
    }

    /// Load a style from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read style file {}", path.display()))?;
        let style = Self::from_yaml(&content)?;
        log::debug!("loaded style from {}: {:?}", path.display(), style);
        Ok(style)
    }
}
