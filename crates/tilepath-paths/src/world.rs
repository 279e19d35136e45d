//! World-space entry points: positions in, waypoints out.

use tilepath_core::{Connectivity, Grid, GridError, Point, Vec2};

use crate::pather::GridPather;
use crate::path::Path;
use crate::search::PathSearch;

impl PathSearch {
    /// Run A* over `grid` between two cells, adapting the scratch buffer to
    /// the grid's size first.
    pub fn find_grid_path(
        &mut self,
        grid: &Grid,
        start: Point,
        goal: Point,
        connectivity: Connectivity,
    ) -> Result<Option<Path>, GridError> {
        self.set_range(grid.bounds());
        self.find_path(&GridPather::new(grid, connectivity), start, goal)
    }

    /// Find a route between two world positions.
    ///
    /// Both positions are mapped to their cells (an
    /// [`OutOfBounds`](GridError::OutOfBounds) error if either falls outside
    /// the grid); the resulting cell path is returned as cell-center
    /// waypoints. `Ok(None)` means the goal is unreachable.
    pub fn find_world_path(
        &mut self,
        grid: &Grid,
        from: Vec2,
        to: Vec2,
        connectivity: Connectivity,
    ) -> Result<Option<Vec<Vec2>>, GridError> {
        let start = grid.world_to_cell(from)?;
        let goal = grid.world_to_cell(to)?;
        match self.find_grid_path(grid, start, goal, connectivity)? {
            Some(path) => path.to_world(grid).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::GridConfig;

    #[test]
    fn world_path_uses_cell_centers() {
        let grid = Grid::new(GridConfig::centered(4, 4, 1.0)).unwrap();
        let mut ps = PathSearch::for_grid(&grid);
        let path = ps
            .find_world_path(
                &grid,
                Vec2::new(-1.9, -1.9),
                Vec2::new(1.2, 1.7),
                Connectivity::default(),
            )
            .unwrap()
            .unwrap();
        assert_eq!(
            path,
            vec![
                Vec2::new(-1.5, -1.5),
                Vec2::new(-0.5, -0.5),
                Vec2::new(0.5, 0.5),
                Vec2::new(1.5, 1.5),
            ]
        );
    }

    #[test]
    fn world_path_reports_unreachable_as_none() {
        let mut grid = Grid::with_size(3, 1, 1.0, Vec2::ZERO).unwrap();
        grid.set_walkable(Point::new(1, 0), false).unwrap();
        let mut ps = PathSearch::for_grid(&grid);
        let res = ps.find_world_path(
            &grid,
            Vec2::new(0.5, 0.5),
            Vec2::new(2.5, 0.5),
            Connectivity::default(),
        );
        assert_eq!(res, Ok(None));
    }

    #[test]
    fn world_path_outside_grid_is_an_error() {
        let grid = Grid::with_size(3, 3, 1.0, Vec2::ZERO).unwrap();
        let mut ps = PathSearch::for_grid(&grid);
        let res = ps.find_world_path(
            &grid,
            Vec2::new(0.5, 0.5),
            Vec2::new(3.5, 0.5),
            Connectivity::default(),
        );
        assert!(matches!(res, Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn grid_path_adapts_scratch_size() {
        let small = Grid::with_size(2, 2, 1.0, Vec2::ZERO).unwrap();
        let big = Grid::with_size(6, 3, 1.0, Vec2::ZERO).unwrap();
        let mut ps = PathSearch::for_grid(&small);
        let p = ps
            .find_grid_path(&big, Point::new(0, 0), Point::new(5, 2), Connectivity::default())
            .unwrap()
            .unwrap();
        assert_eq!(ps.range(), big.bounds());
        assert_eq!(p.cost(), 2 * 14 + 3 * 10);
    }
}
