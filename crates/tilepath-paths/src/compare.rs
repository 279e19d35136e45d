//! Route equivalence checks used to skip no-op re-routes.

use tilepath_core::Vec2;

/// Default per-waypoint tolerance, in world units.
pub const PATH_TOLERANCE: f32 = 0.1;

/// Whether two waypoint routes are the same within [`PATH_TOLERANCE`].
///
/// Routes match when they have the same number of waypoints and every pair
/// of corresponding waypoints is at most the tolerance apart.
pub fn same_path(a: &[Vec2], b: &[Vec2]) -> bool {
    same_path_within(a, b, PATH_TOLERANCE)
}

/// [`same_path`] with an explicit tolerance.
pub fn same_path_within(a: &[Vec2], b: &[Vec2], tolerance: f32) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| p.distance(*q) <= tolerance)
}

/// Compare two search outcomes. Two missing routes are the same; a missing
/// route never matches an existing one.
pub fn same_route(a: Option<&[Vec2]>, b: Option<&[Vec2]>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => same_path(a, b),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> Vec<Vec2> {
        vec![
            Vec2::new(0.5, 0.5),
            Vec2::new(1.5, 1.5),
            Vec2::new(2.5, 1.5),
        ]
    }

    #[test]
    fn identical_routes_match() {
        assert!(same_path(&route(), &route()));
        assert!(same_path(&[], &[]));
    }

    #[test]
    fn small_offset_matches() {
        let mut b = route();
        b[1].x += 0.05;
        assert!(same_path(&route(), &b));
    }

    #[test]
    fn large_offset_differs() {
        let mut b = route();
        b[1].y -= 0.5;
        assert!(!same_path(&route(), &b));
    }

    #[test]
    fn length_mismatch_differs() {
        let a = route();
        assert!(!same_path(&a, &a[..2]));
    }

    #[test]
    fn tolerance_is_configurable() {
        let mut b = route();
        b[2].x += 0.5;
        assert!(same_path_within(&route(), &b, 0.6));
        assert!(!same_path_within(&route(), &b, 0.4));
    }

    #[test]
    fn missing_routes() {
        let a = route();
        assert!(same_route(None, None));
        assert!(!same_route(Some(&a), None));
        assert!(!same_route(None, Some(&a)));
        assert!(same_route(Some(&a), Some(&a)));
    }
}
