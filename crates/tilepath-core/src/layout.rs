//! ASCII layouts: build a [`Grid`] from a small text map and draw it back.
//!
//! ```text
//! ....G
//! .###.
//! S....
//! ```
//!
//! `.` is walkable, `#` is blocked, `S` and `G` mark the start and goal (both
//! walkable). The first text row is the top of the map, so it holds the
//! largest `y`.

use glam::Vec2;

use crate::config::GridConfig;
use crate::error::LayoutError;
use crate::geom::Point;
use crate::grid::Grid;

pub const OPEN: char = '.';
pub const WALL: char = '#';
pub const START: char = 'S';
pub const GOAL: char = 'G';
/// Drawn by [`Layout::render`] for route cells that are not endpoints.
pub const ROUTE: char = '*';

/// A grid parsed from text, together with its optional endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

impl Layout {
    /// Parse `text` into a grid with unit cells anchored at the world origin.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        Self::parse_with(text, 1.0, Vec2::ZERO)
    }

    /// Parse `text` with an explicit cell size and origin. Surrounding
    /// whitespace and blank lines are ignored.
    pub fn parse_with(text: &str, cell_size: f32, origin: Vec2) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(LayoutError::Empty);
        };
        let width = first.chars().count();
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        let height = rows.len() as i32;
        let config = GridConfig::new(width as i32, height, cell_size).with_origin(origin);
        let mut grid = Grid::new(config)?;
        let mut start = None;
        let mut goal = None;

        for (row, line) in rows.iter().enumerate() {
            let y = height - 1 - row as i32;
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y);
                match ch {
                    OPEN => {}
                    WALL => {
                        grid.set_walkable(pos, false)?;
                    }
                    START => set_marker(&mut start, pos, START)?,
                    GOAL => set_marker(&mut goal, pos, GOAL)?,
                    _ => return Err(LayoutError::InvalidChar { ch, pos }),
                }
            }
        }

        Ok(Self { grid, start, goal })
    }

    /// Draw the layout, marking every cell of `route` that is not an endpoint
    /// with [`ROUTE`].
    pub fn render(&self, route: &[Point]) -> String {
        let w = self.grid.width();
        let h = self.grid.height();
        let mut out = String::with_capacity(((w + 1) * h) as usize);
        for y in (0..h).rev() {
            for x in 0..w {
                let p = Point::new(x, y);
                let ch = if Some(p) == self.start {
                    START
                } else if Some(p) == self.goal {
                    GOAL
                } else if !self.grid.walkable_at(p) {
                    WALL
                } else if route.contains(&p) {
                    ROUTE
                } else {
                    OPEN
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

fn set_marker(slot: &mut Option<Point>, pos: Point, marker: char) -> Result<(), LayoutError> {
    if slot.is_some() {
        return Err(LayoutError::DuplicateMarker(marker));
    }
    *slot = Some(pos);
    Ok(())
}
