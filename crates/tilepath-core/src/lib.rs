//! **tilepath-core**: the walkability grid behind tilepath's pathfinding.
//!
//! This crate provides the grid-side types used by `tilepath-paths`: integer
//! cell geometry, per-cell walkability and occupant handles, the affine
//! mapping between cells and world positions, the corner-cut neighbor rule,
//! and ASCII layouts for tests and tools.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::{Cell, OccupantId};
pub use config::{Connectivity, CornerRule, GridConfig};
pub use error::{GridError, LayoutError};
pub use geom::{Point, Range};
pub use glam::Vec2;
pub use grid::Grid;
pub use layout::Layout;
