//! Error types for grid construction and access.

use glam::Vec2;
use thiserror::Error;

use crate::geom::Point;

/// Errors reported by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// A coordinate outside `[0, width) x [0, height)`.
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        cell: Point,
        width: i32,
        height: i32,
    },
    /// Width or height below one.
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    /// Cell size that is zero, negative, or not finite.
    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f32),
    /// Origin with a NaN or infinite component.
    #[error("grid origin must be finite, got {0}")]
    InvalidOrigin(Vec2),
}

/// Errors raised while parsing an ASCII layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// No rows at all.
    #[error("layout is empty")]
    Empty,
    /// Rows have different widths.
    #[error("layout row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the layout alphabet.
    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    /// More than one start or goal marker.
    #[error("layout has more than one \u{201c}{0}\u{201d} marker")]
    DuplicateMarker(char),
    /// The parsed rows could not form a grid (bad cell size).
    #[error(transparent)]
    Grid(#[from] GridError),
}
