//! Grid construction parameters and movement rules.

use glam::Vec2;

/// Parameters for building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of columns. Must be at least 1.
    pub width: i32,
    /// Number of rows. Must be at least 1.
    pub height: i32,
    /// World-space edge length of one cell. Must be positive.
    pub cell_size: f32,
    /// World-space position of the outer corner of cell (0, 0). Must be
    /// finite.
    pub origin: Vec2,
}

impl GridConfig {
    /// A configuration with the origin at `Vec2::ZERO`.
    pub const fn new(width: i32, height: i32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            origin: Vec2::ZERO,
        }
    }

    /// A configuration whose grid is centered on the world origin.
    pub fn centered(width: i32, height: i32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            origin: Vec2::new(width as f32, height as f32) * cell_size * -0.5,
        }
    }

    /// Set the origin (builder).
    pub const fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(10, 10, 1.0)
    }
}

/// Which diagonal moves survive the corner-cut check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CornerRule {
    /// A diagonal to `(x±1, y±1)` needs only `(x±1, y)` to be walkable.
    #[default]
    HorizontalGate,
    /// A diagonal needs both `(x±1, y)` and `(x, y±1)` to be walkable.
    BothGates,
}

/// Movement model used when enumerating neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Orthogonal steps only.
    Cardinal,
    /// Orthogonal plus diagonal steps, filtered by a [`CornerRule`].
    Diagonal(CornerRule),
}

impl Connectivity {
    /// Whether diagonal steps are ever offered.
    #[inline]
    pub const fn allows_diagonals(self) -> bool {
        matches!(self, Self::Diagonal(_))
    }
}

impl Default for Connectivity {
    fn default() -> Self {
        Self::Diagonal(CornerRule::default())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_config_round_trip() {
        let cfg = GridConfig::centered(8, 5, 0.5);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn connectivity_round_trip() {
        let c = Connectivity::Diagonal(CornerRule::BothGates);
        let json = serde_json::to_string(&c).unwrap();
        let back: Connectivity = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
