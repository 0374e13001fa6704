//! Edge pathing for mobile units.
//!
//! Mobile units walk orthogonally towards the edge opposite their spawn
//! quadrant. When that edge is reachable the path ends on its nearest
//! reachable tile. When it is walled off the unit instead heads for the
//! reachable tile that has progressed furthest towards the edge.

use crate::arena::*;
use crate::location::*;
use fnv::FnvHashSet;
use pathfinding::directed::bfs::{bfs, bfs_reach};
use std::cmp::Reverse;

/// Shortest path from `start` towards `edge`, including both endpoints.
///
/// Returns `None` when `start` is outside the arena or blocked.
pub fn path_to_edge<F>(start: Location, edge: Edges, is_blocked: F) -> Option<Vec<Location>>
where
    F: Fn(Location) -> bool,
{
    if !location_in_bounds(start) || is_blocked(start) {
        return None;
    }

    let successors = |loc: &Location| -> Vec<Location> {
        neighbors(*loc).filter(|n| !is_blocked(*n)).collect()
    };

    let targets: FnvHashSet<Location> = edge_locations(edge)
        .into_iter()
        .filter(|loc| !is_blocked(*loc))
        .collect();

    if let Some(path) = bfs(&start, &successors, |loc| targets.contains(loc)) {
        return Some(path);
    }

    // Edge is unreachable; settle for the deepest reachable tile. BFS order
    // breaks ties in favour of the tile closest to the start.
    let deepest = bfs_reach(start, &successors).min_by_key(|loc| Reverse(edge_idealness(*loc, edge)))?;

    bfs(&start, &successors, |loc| *loc == deepest)
}
