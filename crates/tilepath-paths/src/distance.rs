use tilepath_core::Point;

/// Cost of an orthogonal step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of a diagonal step, 10·√2 rounded to an integer.
pub const DIAGONAL_COST: i32 = 14;

/// Manhattan (L1) distance between two points, in cells.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Diagonal ("octile") distance between two points, in cost units.
///
/// Exact cost of the cheapest 8-way route on an open grid, so it is an
/// admissible and consistent A* heuristic for [`STRAIGHT_COST`] /
/// [`DIAGONAL_COST`] steps.
#[inline]
pub fn diagonal_distance(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    DIAGONAL_COST * dx.min(dy) + STRAIGHT_COST * (dx - dy).abs()
}

/// Cost of one step between adjacent cells.
#[inline]
pub fn step_cost(from: Point, to: Point) -> i32 {
    if from.is_diagonal_to(to) {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_distance_mixes_steps() {
        let o = Point::ZERO;
        assert_eq!(diagonal_distance(o, Point::new(4, 4)), 56);
        assert_eq!(diagonal_distance(o, Point::new(5, 2)), 14 * 2 + 10 * 3);
        assert_eq!(diagonal_distance(Point::new(2, 7), Point::new(0, 0)), 14 * 2 + 10 * 5);
        assert_eq!(diagonal_distance(o, o), 0);
    }

    #[test]
    fn manhattan_counts_cells() {
        assert_eq!(manhattan(Point::new(-1, 2), Point::new(3, -1)), 7);
    }

    #[test]
    fn step_costs() {
        let p = Point::new(1, 1);
        assert_eq!(step_cost(p, Point::new(2, 1)), STRAIGHT_COST);
        assert_eq!(step_cost(p, Point::new(1, 0)), STRAIGHT_COST);
        assert_eq!(step_cost(p, Point::new(0, 2)), DIAGONAL_COST);
    }
}
