//! Caller-side route planning on top of tilepath.
//!
//! [`RoutePlanner`] plays the part of a tower-defense map manager: it owns
//! the grid and the search, keeps the current start-to-end route, recomputes
//! it only when the grid has changed, and answers "what happens if I build
//! here?" before a placement is committed.

use thiserror::Error;
use tilepath_core::{Connectivity, Grid, GridError, Layout, OccupantId, Point, Vec2};
use tilepath_paths::{Path, PathSearch, same_path};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a planner could not be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// The layout lacks a start or goal marker.
    #[error("layout has no `{0}` marker")]
    MissingMarker(char),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Why a placement was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// Blocking the cell would leave no route from start to end.
    #[error("placing at {0} would seal the route")]
    SealsRoute(Point),
    /// The cell is already blocked or occupied.
    #[error("cell {0} is already taken")]
    Taken(Point),
    #[error(transparent)]
    Grid(#[from] GridError),
}

// ---------------------------------------------------------------------------
// Route / Placement
// ---------------------------------------------------------------------------

/// The current route, as cells and as world-space waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Path,
    pub waypoints: Vec<Vec2>,
}

/// Outcome of a speculative placement.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// The route would stay the same.
    Unchanged,
    /// The route would change to these waypoints.
    Rerouted(Vec<Vec2>),
    /// No route would remain; the placement must be refused.
    Blocked,
}

// ---------------------------------------------------------------------------
// RoutePlanner
// ---------------------------------------------------------------------------

pub struct RoutePlanner {
    grid: Grid,
    search: PathSearch,
    start: Point,
    end: Point,
    connectivity: Connectivity,
    route: Option<Route>,
    dirty: bool,
}

impl RoutePlanner {
    /// Create a planner routing from `start` to `end` over `grid`.
    pub fn new(
        grid: Grid,
        start: Point,
        end: Point,
        connectivity: Connectivity,
    ) -> Result<Self, GridError> {
        grid.cell(start)?;
        grid.cell(end)?;
        let search = PathSearch::for_grid(&grid);
        Ok(Self {
            grid,
            search,
            start,
            end,
            connectivity,
            route: None,
            dirty: true,
        })
    }

    /// Create a planner from a layout's grid and its `S` / `G` markers.
    pub fn from_layout(layout: Layout, connectivity: Connectivity) -> Result<Self, PlannerError> {
        let start = layout
            .start
            .ok_or(PlannerError::MissingMarker(tilepath_core::layout::START))?;
        let end = layout
            .goal
            .ok_or(PlannerError::MissingMarker(tilepath_core::layout::GOAL))?;
        Ok(Self::new(layout.grid, start, end, connectivity)?)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Whether the next [`route`](RoutePlanner::route) call will search again.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force a recomputation on the next [`route`](RoutePlanner::route) call,
    /// e.g. after editing the grid through some other channel.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Current route from start to end, recomputed if the grid changed or if
    /// the last search found nothing.
    pub fn route(&mut self) -> Result<Option<&Route>, GridError> {
        if self.dirty || self.route.is_none() {
            self.route = self.search_route()?;
            self.dirty = false;
        }
        Ok(self.route.as_ref())
    }

    fn search_route(&mut self) -> Result<Option<Route>, GridError> {
        let found = self
            .search
            .find_grid_path(&self.grid, self.start, self.end, self.connectivity)?;
        let Some(path) = found else {
            return Ok(None);
        };
        let waypoints = path.to_world(&self.grid)?;
        Ok(Some(Route { path, waypoints }))
    }

    /// Report what blocking `cell` would do to the route, leaving the grid
    /// as it was.
    pub fn preview_placement(&mut self, cell: Point) -> Result<Placement, GridError> {
        let current = self.grid.cell(cell)?;
        if cell == self.start || cell == self.end {
            return Ok(Placement::Blocked);
        }
        let before = self.route()?.map(|r| r.waypoints.clone());
        if !current.walkable {
            return Ok(match before {
                Some(_) => Placement::Unchanged,
                None => Placement::Blocked,
            });
        }

        self.grid.set_walkable(cell, false)?;
        let candidate = self.search_route();
        self.grid.set_walkable(cell, true)?;

        let placement = match (candidate?, before) {
            (None, _) => Placement::Blocked,
            (Some(after), Some(before)) if same_path(&before, &after.waypoints) => {
                Placement::Unchanged
            }
            (Some(after), _) => Placement::Rerouted(after.waypoints),
        };
        log::debug!("preview {cell}: {placement:?}");
        Ok(placement)
    }

    /// Block `cell` and record `occupant` on it, unless that would seal the
    /// route.
    pub fn place(&mut self, cell: Point, occupant: OccupantId) -> Result<Placement, PlacementError> {
        let current = self.grid.cell(cell)?;
        if !current.walkable || current.is_occupied() {
            return Err(PlacementError::Taken(cell));
        }
        let placement = self.preview_placement(cell)?;
        if placement == Placement::Blocked {
            log::debug!("refusing placement at {cell}");
            return Err(PlacementError::SealsRoute(cell));
        }
        self.grid.set_walkable(cell, false)?;
        self.grid.set_occupant(cell, Some(occupant))?;
        self.dirty = true;
        Ok(placement)
    }

    /// Undo a placement at `cell`, returning the removed occupant. Cells
    /// without an occupant, including walls from the layout, are left as
    /// they are.
    pub fn remove(&mut self, cell: Point) -> Result<Option<OccupantId>, GridError> {
        let Some(previous) = self.grid.set_occupant(cell, None)? else {
            return Ok(None);
        };
        if !self.grid.set_walkable(cell, true)? {
            self.dirty = true;
        }
        Ok(Some(previous))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: &str = "
        .....
        S...G
        .....
    ";

    fn planner() -> RoutePlanner {
        RoutePlanner::from_layout(Layout::parse(FIELD).unwrap(), Connectivity::default())
            .unwrap()
    }

    #[test]
    fn initial_route_is_straight() {
        let mut p = planner();
        assert!(p.is_dirty());
        let route = p.route().unwrap().unwrap();
        assert_eq!(route.path.cost(), 40);
        assert_eq!(route.waypoints.len(), 5);
        assert_eq!(route.waypoints[0], Vec2::new(0.5, 1.5));
        assert!(!p.is_dirty());
    }

    #[test]
    fn off_route_placement_is_unchanged() {
        let mut p = planner();
        assert_eq!(
            p.preview_placement(Point::new(2, 2)),
            Ok(Placement::Unchanged)
        );
        // The grid is restored after previewing.
        assert!(p.grid().walkable_at(Point::new(2, 2)));
    }

    #[test]
    fn on_route_placement_reroutes() {
        let mut p = planner();
        let placement = p.place(Point::new(2, 1), OccupantId(1)).unwrap();
        let Placement::Rerouted(waypoints) = placement else {
            panic!("expected a reroute, got {placement:?}");
        };
        assert!(p.is_dirty());
        let route = p.route().unwrap().unwrap();
        assert_eq!(route.waypoints, waypoints);
        assert!(!route.path.contains(Point::new(2, 1)));
        assert_eq!(
            p.grid().cell(Point::new(2, 1)).unwrap().occupant,
            Some(OccupantId(1))
        );
    }

    #[test]
    fn sealing_placement_is_refused() {
        let mut p = planner();
        p.place(Point::new(2, 0), OccupantId(1)).unwrap();
        p.place(Point::new(2, 2), OccupantId(2)).unwrap();
        assert_eq!(p.preview_placement(Point::new(2, 1)), Ok(Placement::Blocked));
        assert_eq!(
            p.place(Point::new(2, 1), OccupantId(3)),
            Err(PlacementError::SealsRoute(Point::new(2, 1)))
        );
        assert!(p.grid().walkable_at(Point::new(2, 1)));
        assert!(p.route().unwrap().is_some());
    }

    #[test]
    fn endpoints_cannot_be_built_on() {
        let mut p = planner();
        assert_eq!(p.preview_placement(p.start()), Ok(Placement::Blocked));
        assert_eq!(
            p.place(p.end(), OccupantId(9)),
            Err(PlacementError::SealsRoute(p.end()))
        );
    }

    #[test]
    fn taken_cells_are_refused() {
        let mut p = planner();
        p.place(Point::new(1, 0), OccupantId(1)).unwrap();
        assert_eq!(
            p.place(Point::new(1, 0), OccupantId(2)),
            Err(PlacementError::Taken(Point::new(1, 0)))
        );
    }

    #[test]
    fn remove_reopens_and_marks_dirty() {
        let mut p = planner();
        p.place(Point::new(2, 1), OccupantId(4)).unwrap();
        p.route().unwrap();
        assert_eq!(p.remove(Point::new(2, 1)), Ok(Some(OccupantId(4))));
        assert!(p.is_dirty());
        assert_eq!(p.route().unwrap().unwrap().path.cost(), 40);
    }

    #[test]
    fn remove_leaves_layout_walls_alone() {
        let layout = Layout::parse("S#G").unwrap();
        let mut p = RoutePlanner::from_layout(layout, Connectivity::default()).unwrap();
        assert!(p.route().unwrap().is_none());
        assert_eq!(p.remove(Point::new(1, 0)), Ok(None));
        assert!(!p.grid().walkable_at(Point::new(1, 0)));
        assert!(!p.is_dirty());
        assert!(p.route().unwrap().is_none());
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let mut p = planner();
        assert!(p.preview_placement(Point::new(9, 9)).is_err());
        assert!(matches!(
            p.place(Point::new(-1, 0), OccupantId(0)),
            Err(PlacementError::Grid(GridError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn layout_without_goal_is_rejected() {
        let layout = Layout::parse("S..").unwrap();
        assert_eq!(
            RoutePlanner::from_layout(layout, Connectivity::default()).err(),
            Some(PlannerError::MissingMarker('G'))
        );
    }
}
