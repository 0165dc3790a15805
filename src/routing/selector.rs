//! Picks the working set of interior-disjoint routes.
//!
//! Three passes over owned route values:
//! 1. score every enumerated route by how crowded its interior rooms are,
//! 2. greedy fill up to the capacity, replacing a member when a later route
//!    conflicts with exactly that one and its interior is less crowded,
//! 3. a repair sweep that drops any member sharing an interior room with an
//!    earlier one. The sweep alone guarantees disjointness.

use crate::routing::route::Route;
use tracing::debug;

/// Greedy interior-disjoint route selection bounded by `capacity`
#[derive(Clone, Copy, Debug)]
pub struct RouteSelector {
    capacity: usize,
}

impl RouteSelector {
    /// Create a selector keeping at most `capacity` routes
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Maximum number of routes kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Select from `routes` (in discovery order) over a colony of `room_count` rooms.
    /// The result is sorted by length then discovery order.
    pub fn select(&self, mut routes: Vec<Route>, room_count: usize) -> Vec<Route> {
        if self.capacity == 0 {
            return Vec::new();
        }

        score_repeats(&mut routes, room_count);
        routes.sort_by_key(Route::len);

        let mut selected: Vec<Route> = Vec::with_capacity(self.capacity);
        for candidate in routes {
            debug!(
                order = candidate.order,
                len = candidate.len(),
                repeat_total = candidate.repeat_total,
                "candidate route"
            );
            if selected.len() < self.capacity {
                selected.push(candidate);
                continue;
            }

            let conflicts: Vec<usize> = selected
                .iter()
                .enumerate()
                .filter(|(_, member)| member.conflicts_with(&candidate))
                .map(|(slot, _)| slot)
                .collect();

            // disjoint from every member, or touching several: left out
            if let &[slot] = conflicts.as_slice() {
                if prefers(&candidate, &selected[slot]) {
                    debug!(
                        replaced = selected[slot].order,
                        by = candidate.order,
                        "conflicting route replaced"
                    );
                    selected[slot] = candidate;
                }
            }
        }

        selected.sort_by_key(rank);
        sweep(selected)
    }
}

/// Count, per room, the routes that pass through it, then total those counts
/// over each route's interior.
fn score_repeats(routes: &mut [Route], room_count: usize) {
    let mut repeat = vec![0u32; room_count];
    for route in routes.iter() {
        for &room in &route.rooms {
            repeat[room as usize] += 1;
        }
    }
    for route in routes.iter_mut() {
        route.repeat_total = route.interior().iter().map(|&r| repeat[r as usize]).sum();
    }
}

#[inline]
fn rank(route: &Route) -> (usize, usize) {
    (route.len(), route.order)
}

/// Lower interior crowding wins; a tie keeps the member, which sorted first.
#[inline]
fn prefers(candidate: &Route, member: &Route) -> bool {
    candidate.repeat_total < member.repeat_total
}

/// Keep each route only if it is disjoint from every route kept before it.
fn sweep(selected: Vec<Route>) -> Vec<Route> {
    let mut kept: Vec<Route> = Vec::with_capacity(selected.len());
    for route in selected {
        if kept.iter().any(|k| k.conflicts_with(&route)) {
            debug!(order = route.order, "route dropped by disjointness sweep");
            continue;
        }
        kept.push(route);
    }
    kept
}
