use tilepath_core::Point;

/// Minimal pathfinding interface: neighbor enumeration and passability.
pub trait Pather {
    /// Append candidate neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling. Candidates may include impassable cells; the search
    /// filters them with [`passable`](Pather::passable).
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether a search may step onto `p`.
    fn passable(&self, p: Point) -> bool;
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
