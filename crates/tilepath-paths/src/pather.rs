use tilepath_core::{Connectivity, Grid, Point};

use crate::distance::{STRAIGHT_COST, diagonal_distance, manhattan, step_cost};
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Adapts a [`Grid`] to the pather traits.
///
/// Neighbors come from [`Grid::neighbors`], passability from cell
/// walkability. Steps cost 10 (orthogonal) or 14 (diagonal); the estimate is
/// the diagonal distance, or Manhattan distance scaled by 10 under
/// [`Connectivity::Cardinal`].
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
    connectivity: Connectivity,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid, connectivity: Connectivity) -> Self {
        Self { grid, connectivity }
    }

    #[inline]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }
}

impl Pather for GridPather<'_> {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.grid.neighbors(p, self.connectivity, buf);
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.grid.walkable_at(p)
    }
}

impl WeightedPather for GridPather<'_> {
    #[inline]
    fn cost(&self, from: Point, to: Point) -> i32 {
        step_cost(from, to)
    }
}

impl AstarPather for GridPather<'_> {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        match self.connectivity {
            Connectivity::Diagonal(_) => diagonal_distance(from, to),
            Connectivity::Cardinal => STRAIGHT_COST * manhattan(from, to),
        }
    }
}
