//! Input parsing - turn the line-oriented text format into a [`Scene`].
//!
//! ```text
//! 2                  <- segment count n
//! -5 5 5 5           <- n lines of x1 y1 x2 y2
//! 20 20 30 30
//! 0 0 10 10          <- window: Xmin Ymin Xmax Ymax
//! P-5 5 5 15 15 5    <- optional polygon, 'P' then x y pairs
//! ```
//!
//! Parsing is all-or-nothing: the first problem found is returned and no
//! partial scene is produced.

use std::fmt;

use crate::geometry::{Point, Segment, Window, WindowError};
use crate::scene::Scene;

/// Error type for input parsing.
///
/// Line numbers are 1-based, as a text editor shows them.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Empty,
    InvalidSegmentCount { token: String },
    MissingSegment { line: usize },
    InvalidSegment { line: usize, found: usize },
    MissingWindow { line: usize },
    InvalidWindow { line: usize, found: usize },
    InvertedWindow { line: usize },
    ExpectedPolygon { line: usize },
    EmptyPolygon { line: usize },
    OddPolygon { line: usize, found: usize },
    InvalidNumber { line: usize, token: String },
    NonFiniteNumber { line: usize, token: String },
    TrailingData { line: usize },
}

impl ParseError {
    /// The offending line, when the error can be attributed to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Empty => None,
            ParseError::InvalidSegmentCount { .. } => Some(1),
            ParseError::MissingSegment { line }
            | ParseError::InvalidSegment { line, .. }
            | ParseError::MissingWindow { line }
            | ParseError::InvalidWindow { line, .. }
            | ParseError::InvertedWindow { line }
            | ParseError::ExpectedPolygon { line }
            | ParseError::EmptyPolygon { line }
            | ParseError::OddPolygon { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::NonFiniteNumber { line, .. }
            | ParseError::TrailingData { line } => Some(*line),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "no input data."),
            ParseError::InvalidSegmentCount { token } => {
                write!(f, "invalid segment count '{}' at line 1.", token)
            }
            ParseError::MissingSegment { line } => {
                write!(f, "missing segment data at line {}.", line)
            }
            ParseError::InvalidSegment { line, found } => write!(
                f,
                "invalid segment data at line {}: expected 4 coordinates, found {}.",
                line, found
            ),
            ParseError::MissingWindow { line } => {
                write!(f, "missing clipping window at line {}.", line)
            }
            ParseError::InvalidWindow { line, found } => write!(
                f,
                "invalid clipping window at line {}: expected 4 coordinates, found {}.",
                line, found
            ),
            ParseError::InvertedWindow { line } => write!(
                f,
                "invalid clipping window at line {}: min bound exceeds max bound.",
                line
            ),
            ParseError::ExpectedPolygon { line } => write!(
                f,
                "expected polygon data starting with 'P' at line {}.",
                line
            ),
            ParseError::EmptyPolygon { line } => write!(
                f,
                "invalid polygon data at line {}: at least one vertex required.",
                line
            ),
            ParseError::OddPolygon { line, found } => write!(
                f,
                "invalid polygon data at line {}: coordinates must be in pairs, found {}.",
                line, found
            ),
            ParseError::InvalidNumber { line, token } => {
                write!(f, "invalid number '{}' at line {}.", token, line)
            }
            ParseError::NonFiniteNumber { line, token } => {
                write!(f, "non-finite number '{}' at line {}.", token, line)
            }
            ParseError::TrailingData { line } => {
                write!(f, "unexpected data after polygon at line {}.", line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

// ============================================================================
// PARSING
// ============================================================================

/// Parse whitespace-separated finite numbers.
///
/// `line` is the 1-based line number used in errors.
fn parse_numbers(text: &str, line: usize) -> Result<Vec<f64>, ParseError> {
    // ## Rust Lesson #6: Collecting Results
    //
    // An iterator of `Result<T, E>` collects into `Result<Vec<T>, E>`.
    // Collection stops at the first `Err`, which becomes the whole result.
    text.split_whitespace()
        .map(|token| {
            let value: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
                line,
                token: token.to_string(),
            })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ParseError::NonFiniteNumber { line, token: token.to_string() })
            }
        })
        .collect()
}

fn parse_segment(text: &str, line: usize) -> Result<Segment, ParseError> {
    match parse_numbers(text, line)?.as_slice() {
        &[x1, y1, x2, y2] => Ok(Segment::from_coords(x1, y1, x2, y2)),
        other => Err(ParseError::InvalidSegment { line, found: other.len() }),
    }
}

fn parse_window(text: &str, line: usize) -> Result<Window, ParseError> {
    match parse_numbers(text, line)?.as_slice() {
        &[x_min, y_min, x_max, y_max] => {
            Window::new(x_min, y_min, x_max, y_max).map_err(|e| match e {
                WindowError::Inverted => ParseError::InvertedWindow { line },
                // parse_numbers has already rejected non-finite values.
                WindowError::NonFinite => ParseError::NonFiniteNumber {
                    line,
                    token: text.trim().to_string(),
                },
            })
        }
        other => Err(ParseError::InvalidWindow { line, found: other.len() }),
    }
}

fn parse_polygon(text: &str, line: usize) -> Result<Vec<Point>, ParseError> {
    let body = text
        .trim_start()
        .strip_prefix('P')
        .ok_or(ParseError::ExpectedPolygon { line })?;

    let coords = parse_numbers(body, line)?;
    if coords.is_empty() {
        return Err(ParseError::EmptyPolygon { line });
    }
    if coords.len() % 2 != 0 {
        return Err(ParseError::OddPolygon { line, found: coords.len() });
    }

    Ok(coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

/// Line `index`, unless it is absent or blank.
fn non_blank<S: AsRef<str>>(lines: &[S], index: usize) -> Option<&str> {
    lines
        .get(index)
        .map(|l| l.as_ref())
        .filter(|t| !t.trim().is_empty())
}

/// Parse input split into lines.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Scene, ParseError> {
    if lines.iter().all(|l| l.as_ref().trim().is_empty()) {
        return Err(ParseError::Empty);
    }

    let header = lines[0].as_ref().trim();
    let count: usize = header.parse().map_err(|_| ParseError::InvalidSegmentCount {
        token: header.to_string(),
    })?;

    // `lines[i]` is printed as line `i + 1`.
    let mut segments = Vec::with_capacity(count.min(lines.len()));
    for i in 1..=count {
        let text = non_blank(lines, i).ok_or(ParseError::MissingSegment { line: i + 1 })?;
        segments.push(parse_segment(text, i + 1)?);
    }

    let window_index = count + 1;
    let window_text = non_blank(lines, window_index)
        .ok_or(ParseError::MissingWindow { line: window_index + 1 })?;
    let window = parse_window(window_text, window_index + 1)?;

    let rest: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .skip(window_index + 1)
        .map(|(i, l)| (i + 1, l.as_ref()))
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();

    let polygon = match rest.as_slice() {
        [] => Vec::new(),
        [(line, text), more @ ..] => {
            let polygon = parse_polygon(text, *line)?;
            if let Some((extra, _)) = more.first() {
                return Err(ParseError::TrailingData { line: *extra });
            }
            polygon
        }
    };

    log::debug!(
        "parsed {} segments, window {:?}, polygon with {} vertices",
        segments.len(),
        window,
        polygon.len()
    );

    Ok(Scene { segments, window, polygon })
}

/// Parse a whole text blob.
pub fn parse_str(input: &str) -> Result<Scene, ParseError> {
    let lines: Vec<&str> = input.lines().collect();
    parse(&lines)
}

// ============================================================================
// TESTS
// ============================================================================
