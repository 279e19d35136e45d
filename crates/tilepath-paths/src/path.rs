use tilepath_core::{Grid, GridError, Point, Vec2};

/// A found route: cells from start to goal inclusive, with its total cost.
///
/// A `Path` always holds at least one cell. "No path" is expressed as
/// `None` by the search, never as an empty `Path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPath"))]
pub struct Path {
    cells: Vec<Point>,
    cost: i32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath {
    cells: Vec<Point>,
    cost: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPath> for Path {
    type Error = &'static str;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        if raw.cells.is_empty() {
            return Err("a path holds at least one cell");
        }
        Ok(Self::new(raw.cells, raw.cost))
    }
}

impl Path {
    pub(crate) fn new(cells: Vec<Point>, cost: i32) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells, cost }
    }

    /// Cells from start to goal inclusive.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Total cost under the 10 / 14 step model.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves (one less than the number of cells).
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.cells[0]
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.cells[self.cells.len() - 1]
    }

    /// Whether the route passes through `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    pub fn into_cells(self) -> Vec<Point> {
        self.cells
    }

    /// World-space waypoints: the center of each cell, in order.
    pub fn to_world(&self, grid: &Grid) -> Result<Vec<Vec2>, GridError> {
        self.cells.iter().map(|&p| grid.cell_to_world(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = Path::new(
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 1)],
            24,
        );
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.start(), Point::new(0, 0));
        assert_eq!(p.goal(), Point::new(2, 1));
        assert!(p.contains(Point::new(1, 1)));
        assert_eq!(p.cost(), 24);
        assert_eq!(
            p.into_cells(),
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 1)]
        );
    }

    #[test]
    fn to_world_uses_cell_centers() {
        let grid = Grid::with_size(3, 3, 2.0, Vec2::new(10.0, 0.0)).unwrap();
        let p = Path::new(vec![Point::new(0, 0), Point::new(1, 0)], 10);
        assert_eq!(
            p.to_world(&grid),
            Ok(vec![Vec2::new(11.0, 1.0), Vec2::new(13.0, 1.0)])
        );
    }

    #[test]
    fn to_world_rejects_foreign_cells() {
        let grid = Grid::with_size(2, 2, 1.0, Vec2::ZERO).unwrap();
        let p = Path::new(vec![Point::new(0, 0), Point::new(5, 5)], 56);
        assert!(p.to_world(&grid).is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path::new(vec![Point::new(0, 0), Point::new(1, 1)], 14);
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn empty_path_is_rejected() {
        let res: Result<Path, _> = serde_json::from_str(r#"{"cells":[],"cost":0}"#);
        assert!(res.is_err());
    }
}
