use std::collections::BinaryHeap;

use tilepath_core::{GridError, Point};

use crate::path::Path;
use crate::search::{NO_PARENT, NodeRef, NodeState, PathSearch};
use crate::traits::AstarPather;

impl PathSearch {
    /// Compute the cheapest path from `start` to `goal` using A*.
    ///
    /// Returns `Ok(None)` when the goal cannot be reached, including when
    /// `start` itself is impassable. Both points must lie inside the search
    /// range, otherwise [`GridError::OutOfBounds`] is returned.
    ///
    /// Among open cells with equal `f`, the one that entered the open set
    /// first is expanded first. An impassable neighbor is closed the first
    /// time it is seen and never examined again.
    pub fn find_path<P: AstarPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Option<Path>, GridError> {
        let start_idx = self.idx(start)?;
        let goal_idx = self.idx(goal)?;

        self.reset();

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut next_seq: u32 = 0;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.h = pather.estimate(start, goal);
            node.f = node.h;
            if pather.passable(start) {
                node.state = NodeState::Open;
                node.seq = next_seq;
                next_seq += 1;
                open.push(NodeRef {
                    idx: start_idx,
                    f: node.f,
                    seq: node.seq,
                });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper push or already expanded.
            let node = &self.nodes[ci];
            if node.state != NodeState::Open || node.f != current.f {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].state = NodeState::Closed;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.rng.index(np) else {
                    continue;
                };
                if self.nodes[ni].state == NodeState::Closed {
                    continue;
                }
                if !pather.passable(np) {
                    self.nodes[ni].state = NodeState::Closed;
                    continue;
                }

                let tentative_g = current_g + pather.cost(current_point, np);
                let n = &mut self.nodes[ni];
                if tentative_g >= n.g {
                    continue;
                }

                n.parent = ci;
                n.g = tentative_g;
                n.h = pather.estimate(np, goal);
                n.f = tentative_g + n.h;
                if n.state == NodeState::Unvisited {
                    n.state = NodeState::Open;
                    n.seq = next_seq;
                    next_seq += 1;
                }

                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    seq: n.seq,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!("no path {start} -> {goal} ({expanded} cells expanded)");
            return Ok(None);
        }

        // Reconstruct path.
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            cells.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        cells.reverse();

        let cost = self.nodes[goal_idx].g;
        log::debug!(
            "path {start} -> {goal}: {} cells, cost {cost} ({expanded} cells expanded)",
            cells.len()
        );
        Ok(Some(Path::new(cells, cost)))
    }
}
