//! The [`Grid`] type: a fixed-size walkability map anchored in world space.
//!
//! Cells are addressed by integer [`Point`]s and stored row-major. The grid
//! maps onto world space with a translation (`origin`) and a uniform scale
//! (`cell_size`); [`cell_to_world`](Grid::cell_to_world) returns cell centers
//! and [`world_to_cell`](Grid::world_to_cell) is its inverse.

use glam::Vec2;

use crate::cell::{Cell, OccupantId};
use crate::config::{Connectivity, CornerRule, GridConfig};
use crate::error::GridError;
use crate::geom::{Point, Range, RangeIter};

/// A fixed-size 2D grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    bounds: Range,
    cell_size: f32,
    origin: Vec2,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build an all-walkable grid from `config`.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        let GridConfig {
            width,
            height,
            cell_size,
            origin,
        } = config;
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        if !origin.is_finite() {
            return Err(GridError::InvalidOrigin(origin));
        }
        let bounds = Range::new(0, 0, width, height);
        Ok(Self {
            bounds,
            cell_size,
            origin,
            cells: vec![Cell::default(); bounds.len()],
        })
    }

    /// Shorthand for [`Grid::new`] with explicit parameters.
    pub fn with_size(
        width: i32,
        height: i32,
        cell_size: f32,
        origin: Vec2,
    ) -> Result<Self, GridError> {
        Self::new(GridConfig::new(width, height, cell_size).with_origin(origin))
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> GridConfig {
        GridConfig::new(self.width(), self.height(), self.cell_size).with_origin(self.origin)
    }

    /// The bounding range `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// World-space edge length of one cell.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World-space position of the outer corner of cell (0, 0).
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    fn out_of_bounds(&self, cell: Point) -> GridError {
        GridError::OutOfBounds {
            cell,
            width: self.width(),
            height: self.height(),
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Result<usize, GridError> {
        self.bounds.index(p).ok_or_else(|| self.out_of_bounds(p))
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// Read the cell at `p`.
    pub fn cell(&self, p: Point) -> Result<Cell, GridError> {
        Ok(self.cells[self.index(p)?])
    }

    /// Whether the cell at `p` is walkable.
    pub fn is_walkable(&self, p: Point) -> Result<bool, GridError> {
        Ok(self.cells[self.index(p)?].walkable)
    }

    /// Walkability at `p`, treating anything outside the grid as blocked.
    #[inline]
    pub fn walkable_at(&self, p: Point) -> bool {
        self.bounds
            .index(p)
            .is_some_and(|i| self.cells[i].walkable)
    }

    /// Set walkability at `p`, returning the previous value.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> Result<bool, GridError> {
        let i = self.index(p)?;
        Ok(std::mem::replace(&mut self.cells[i].walkable, walkable))
    }

    /// Set the occupant at `p`, returning the previous one.
    pub fn set_occupant(
        &mut self,
        p: Point,
        occupant: Option<OccupantId>,
    ) -> Result<Option<OccupantId>, GridError> {
        let i = self.index(p)?;
        Ok(std::mem::replace(&mut self.cells[i].occupant, occupant))
    }

    /// Replace the whole cell at `p`, returning the previous one.
    pub fn set_cell(&mut self, p: Point, cell: Cell) -> Result<Cell, GridError> {
        let i = self.index(p)?;
        Ok(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Set every cell's walkability to `walkable`. Occupants are untouched.
    pub fn fill_walkable(&mut self, walkable: bool) {
        for c in &mut self.cells {
            c.walkable = walkable;
        }
    }

    /// Remove every occupant. Walkability is untouched.
    pub fn clear_occupants(&mut self) {
        for c in &mut self.cells {
            c.occupant = None;
        }
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.walkable).count()
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    // -----------------------------------------------------------------------
    // World transform
    // -----------------------------------------------------------------------

    /// The cell containing world position `pos`.
    ///
    /// Positions on a shared edge belong to the cell with the larger index.
    pub fn world_to_cell(&self, pos: Vec2) -> Result<Point, GridError> {
        let local = ((pos - self.origin) / self.cell_size).floor();
        if !local.is_finite() {
            return Err(self.out_of_bounds(Point::new(i32::MIN, i32::MIN)));
        }
        // `as` saturates, so far-away positions stay out of bounds.
        let p = Point::new(local.x as i32, local.y as i32);
        if !self.contains(p) {
            return Err(self.out_of_bounds(p));
        }
        Ok(p)
    }

    /// World-space center of cell `p`.
    pub fn cell_to_world(&self, p: Point) -> Result<Vec2, GridError> {
        if !self.contains(p) {
            return Err(self.out_of_bounds(p));
        }
        Ok(self.origin + (Vec2::new(p.x as f32, p.y as f32) + 0.5) * self.cell_size)
    }

    // -----------------------------------------------------------------------
    // Neighbors
    // -----------------------------------------------------------------------

    /// Append the candidate neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// Order is fixed: left, left-below, left-above, right, right-below,
    /// right-above, below, above. Orthogonal neighbors are offered whenever
    /// they are inside the grid, walkable or not. Diagonals are offered only
    /// under [`Connectivity::Diagonal`], and only when the horizontal
    /// neighbor on the same side is walkable; [`CornerRule::BothGates`] also
    /// requires the vertical neighbor to be walkable.
    pub fn neighbors(&self, p: Point, connectivity: Connectivity, buf: &mut Vec<Point>) {
        let rule = match connectivity {
            Connectivity::Cardinal => None,
            Connectivity::Diagonal(rule) => Some(rule),
        };

        for dx in [-1, 1] {
            let side = p.shift(dx, 0);
            if !self.contains(side) {
                continue;
            }
            buf.push(side);

            let Some(rule) = rule else {
                continue;
            };
            if !self.walkable_at(side) {
                continue;
            }
            for dy in [-1, 1] {
                let corner = p.shift(dx, dy);
                if !self.contains(corner) {
                    continue;
                }
                if rule == CornerRule::BothGates && !self.walkable_at(p.shift(0, dy)) {
                    continue;
                }
                buf.push(corner);
            }
        }

        for dy in [-1, 1] {
            let n = p.shift(0, dy);
            if self.contains(n) {
                buf.push(n);
            }
        }
    }
}

/// Iterator over `(Point, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let i = self.grid.bounds.index(p)?;
        Some((p, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
