//! The bundled layouts route the way the demo describes them.

use tilepath_core::{Connectivity, Layout, OccupantId, Point};
use tilepath_demos::{PlacementError, RoutePlanner};

fn planner(text: &str) -> RoutePlanner {
    RoutePlanner::from_layout(Layout::parse(text).unwrap(), Connectivity::default()).unwrap()
}

#[test]
fn field_routes_around_the_wall() {
    let mut p = planner(include_str!("../maps/field.txt"));
    let route = p.route().unwrap().unwrap();
    assert_eq!(route.path.start(), Point::new(0, 3));
    assert_eq!(route.path.goal(), Point::new(15, 3));
    for c in route.path.cells() {
        assert!(
            !(c.x == 7 && (1..=5).contains(&c.y)),
            "route crosses the wall at {c}"
        );
    }
}

#[test]
fn maze_has_a_route() {
    let mut p = planner(include_str!("../maps/maze.txt"));
    let route = p.route().unwrap().unwrap();
    assert_eq!(route.waypoints.len(), route.path.len());
}

#[test]
fn sealed_layout_has_no_route() {
    let mut p = planner(include_str!("../maps/sealed.txt"));
    assert!(p.route().unwrap().is_none());
    // With no route to protect, every placement counts as sealing.
    assert_eq!(
        p.place(Point::new(1, 1), OccupantId(0)),
        Err(PlacementError::SealsRoute(Point::new(1, 1)))
    );
}

#[test]
fn field_gap_cannot_be_closed() {
    let mut p = planner(include_str!("../maps/field.txt"));
    p.place(Point::new(7, 0), OccupantId(1)).unwrap();
    assert_eq!(
        p.place(Point::new(7, 6), OccupantId(2)),
        Err(PlacementError::SealsRoute(Point::new(7, 6)))
    );
}
