use tilepath_core::{Grid, GridError, Point, Range};

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel parent index for the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell search bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    Unvisited,
    Open,
    Closed,
}

/// Transient A* metadata for one cell, reset before every search.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) state: NodeState,
    /// Position in the open set's insertion order, set on first insertion.
    pub(crate) seq: u32,
}

impl SearchNode {
    #[inline]
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            parent: NO_PARENT,
            state: NodeState::Unvisited,
            seq: 0,
        }
    }
}

/// Open-set entry, ordered by lowest `f` first and then by earliest
/// insertion, for use in a max-`BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Owner of the A* scratch state for one grid rectangle.
///
/// One `PathSearch` answers one query at a time (`&mut self`); every query
/// starts from fully reset nodes, so nothing leaks between calls. Callers
/// that search concurrently give each thread its own `PathSearch`.
#[derive(Debug, Clone)]
pub struct PathSearch {
    pub(crate) rng: Range,
    pub(crate) nodes: Vec<SearchNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathSearch {
    /// Create a search for the given cell rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![SearchNode::default(); rng.len()],
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Create a search covering all of `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    /// Replace the underlying range. The node buffer keeps its capacity when
    /// shrinking.
    pub fn set_range(&mut self, rng: Range) {
        if rng == self.rng {
            return;
        }
        log::trace!("search range {} -> {}", self.rng, rng);
        self.rng = rng;
        self.nodes.clear();
        self.nodes.resize(rng.len(), SearchNode::default());
    }

    /// The cell rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Best known cost from the last search's start to `p`, or
    /// [`UNREACHABLE`] if the last search never reached it.
    pub fn cost_at(&self, p: Point) -> i32 {
        match self.rng.index(p) {
            Some(i) => self.nodes[i].g,
            None => UNREACHABLE,
        }
    }

    /// Reset every node before a new search.
    pub(crate) fn reset(&mut self) {
        for n in &mut self.nodes {
            n.reset();
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat index of `p`, or `OutOfBounds`.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Result<usize, GridError> {
        self.rng.index(p).ok_or(GridError::OutOfBounds {
            cell: p,
            width: self.rng.width(),
            height: self.rng.height(),
        })
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_f_then_earliest() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 30, seq: 0 });
        heap.push(NodeRef { idx: 1, f: 20, seq: 2 });
        heap.push(NodeRef { idx: 2, f: 20, seq: 1 });
        heap.push(NodeRef { idx: 3, f: 25, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|r| r.idx)).collect();
        assert_eq!(order, vec![2, 1, 3, 0]);
    }

    #[test]
    fn set_range_resizes_nodes() {
        let mut ps = PathSearch::new(Range::new(0, 0, 5, 5));
        assert_eq!(ps.nodes.len(), 25);
        ps.set_range(Range::new(0, 0, 2, 3));
        assert_eq!(ps.range(), Range::new(0, 0, 2, 3));
        assert_eq!(ps.nodes.len(), 6);
        ps.set_range(Range::new(0, 0, 10, 10));
        assert_eq!(ps.nodes.len(), 100);
    }

    #[test]
    fn idx_reports_out_of_bounds() {
        let ps = PathSearch::new(Range::new(0, 0, 3, 4));
        assert_eq!(ps.idx(Point::new(2, 3)), Ok(11));
        assert_eq!(
            ps.idx(Point::new(3, 0)),
            Err(GridError::OutOfBounds {
                cell: Point::new(3, 0),
                width: 3,
                height: 4
            })
        );
    }

    #[test]
    fn reset_restores_sentinels() {
        let mut ps = PathSearch::new(Range::new(0, 0, 2, 2));
        ps.nodes[1].g = 10;
        ps.nodes[1].state = NodeState::Closed;
        ps.nodes[1].parent = 0;
        ps.reset();
        assert_eq!(ps.cost_at(Point::new(1, 0)), UNREACHABLE);
        assert_eq!(ps.nodes[1].state, NodeState::Unvisited);
        assert_eq!(ps.nodes[1].parent, NO_PARENT);
    }
}
