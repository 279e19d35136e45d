//! A* pathfinding over tilepath grids.
//!
//! - **A\*** shortest-path search ([`PathSearch::find_path`]) with the
//!   10 / 14 step cost model and a diagonal-distance heuristic
//! - **World-space routing** ([`PathSearch::find_world_path`]) from positions
//!   to cell-center waypoints
//! - **Route comparison** ([`same_path`], [`same_route`]) for deciding
//!   whether a re-route changes anything
//!
//! [`PathSearch`] owns the per-cell search scratch and resets it before every
//! query; "no path" is `Ok(None)`, while out-of-grid input is an error.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor candidates, passability |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible estimate |
//!
//! [`GridPather`] implements all three for a [`Grid`](tilepath_core::Grid).

mod astar;
pub mod compare;
mod distance;
mod path;
mod pather;
mod search;
mod traits;
mod world;

pub use compare::{PATH_TOLERANCE, same_path, same_path_within, same_route};
pub use distance::{DIAGONAL_COST, STRAIGHT_COST, diagonal_distance, manhattan, step_cost};
pub use path::Path;
pub use pather::GridPather;
pub use search::{PathSearch, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
