//! Route enumeration over the colony graph.
//!
//! [`shortest_route`] is a breadth-first search used as a reference length;
//! [`all_routes`] is the exhaustive depth-first walk the selector feeds on.
//! Neighbors are visited in tunnel insertion order, so both results are
//! deterministic for a given map.

use crate::colony::Colony;
use crate::routing::route::Route;
use std::collections::VecDeque;

const UNSEEN: u32 = u32::MAX;

/// First route to `end` found breadth-first, or `None` when unreachable
pub fn shortest_route(colony: &Colony, start: u32, end: u32) -> Option<Route> {
    if start == end {
        return Some(Route::new(vec![start], 0));
    }

    let mut parent = vec![UNSEEN; colony.len()];
    let mut queue = VecDeque::with_capacity(colony.len());
    parent[start as usize] = start;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in colony.neighbors(current) {
            if parent[next as usize] != UNSEEN {
                continue;
            }
            parent[next as usize] = current;
            if next == end {
                return Some(Route::new(unwind(&parent, start, end), 0));
            }
            queue.push_back(next);
        }
    }

    None
}

fn unwind(parent: &[u32], start: u32, end: u32) -> Vec<u32> {
    let mut rooms = vec![end];
    let mut cursor = end;
    while cursor != start {
        cursor = parent[cursor as usize];
        rooms.push(cursor);
    }
    rooms.reverse();
    rooms
}

/// Every simple route from `start` to `end`, in depth-first discovery order.
///
/// Exponential in the worst case; anthill maps are small enough that no
/// pruning is attempted.
pub fn all_routes(colony: &Colony, start: u32, end: u32) -> Vec<Route> {
    let mut walker = Walker {
        colony,
        end,
        on_path: vec![false; colony.len()],
        path: Vec::with_capacity(colony.len()),
        found: Vec::new(),
    };
    walker.visit(start);
    walker.found
}

struct Walker<'a> {
    colony: &'a Colony,
    end: u32,
    on_path: Vec<bool>,
    path: Vec<u32>,
    found: Vec<Route>,
}

impl Walker<'_> {
    fn visit(&mut self, room: u32) {
        self.path.push(room);
        self.on_path[room as usize] = true;

        if room == self.end {
            let order = self.found.len();
            self.found.push(Route::new(self.path.clone(), order));
        } else {
            let colony = self.colony;
            for &next in colony.neighbors(room) {
                if !self.on_path[next as usize] {
                    self.visit(next);
                }
            }
        }

        // backtrack: the room is free again for sibling branches
        self.on_path[room as usize] = false;
        self.path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(colony: &Colony, route: &Route) -> String {
        route.describe(colony)
    }

    fn id(colony: &Colony, name: &str) -> u32 {
        colony.room_id(name).expect("name not found")
    }

    #[test]
    fn test_shortest_route_prefers_fewest_hops() {
        let colony = Colony::with_tunnels(
            &["S", "A", "B", "C", "E"],
            &[("S", "A"), ("A", "B"), ("B", "E"), ("S", "C"), ("C", "E")],
        );
        let route = shortest_route(&colony, id(&colony, "S"), id(&colony, "E")).unwrap();

        assert_eq!(names(&colony, &route), "S-C-E");
        assert_eq!(route.hops(), 2);
    }

    #[test]
    fn test_shortest_route_tie_follows_insertion_order() {
        let colony = Colony::with_tunnels(
            &["S", "A", "B", "E"],
            &[("S", "B"), ("S", "A"), ("A", "E"), ("B", "E")],
        );
        let route = shortest_route(&colony, id(&colony, "S"), id(&colony, "E")).unwrap();

        assert_eq!(names(&colony, &route), "S-B-E");
    }

    #[test]
    fn test_shortest_route_unreachable() {
        let colony = Colony::with_tunnels(&["S", "A", "E"], &[("S", "A")]);
        assert!(shortest_route(&colony, id(&colony, "S"), id(&colony, "E")).is_none());
    }

    #[test]
    fn test_shortest_route_same_room() {
        let colony = Colony::with_tunnels(&["S"], &[]);
        let route = shortest_route(&colony, 0, 0).unwrap();
        assert_eq!(route.rooms, vec![0]);
    }

    #[test]
    fn test_all_routes_on_cycle() {
        // S - A - E with a detour A - B - C - A style loop through B and C
        let colony = Colony::with_tunnels(
            &["S", "A", "B", "C", "E"],
            &[("S", "A"), ("A", "B"), ("B", "C"), ("C", "A"), ("A", "E"), ("C", "E")],
        );
        let routes = all_routes(&colony, id(&colony, "S"), id(&colony, "E"));
        let found: Vec<String> = routes.iter().map(|r| names(&colony, r)).collect();

        assert_eq!(found, vec!["S-A-B-C-E", "S-A-C-E", "S-A-E"]);
        for (i, route) in routes.iter().enumerate() {
            assert_eq!(route.order, i);
        }
    }

    #[test]
    fn test_all_routes_backtracks_for_siblings() {
        // Both branches pass through M; M must be reusable after backtracking.
        let colony = Colony::with_tunnels(
            &["S", "A", "B", "M", "E"],
            &[("S", "A"), ("S", "B"), ("A", "M"), ("B", "M"), ("M", "E")],
        );
        let routes = all_routes(&colony, id(&colony, "S"), id(&colony, "E"));
        let found: Vec<String> = routes.iter().map(|r| names(&colony, r)).collect();

        assert_eq!(found, vec!["S-A-M-E", "S-B-M-E"]);
    }

    #[test]
    fn test_all_routes_are_simple() {
        let colony = Colony::with_tunnels(
            &["S", "A", "B", "C", "E"],
            &[
                ("S", "A"),
                ("S", "B"),
                ("A", "B"),
                ("A", "C"),
                ("B", "C"),
                ("C", "E"),
                ("B", "E"),
            ],
        );
        let routes = all_routes(&colony, id(&colony, "S"), id(&colony, "E"));

        assert!(!routes.is_empty());
        for route in &routes {
            let mut seen = route.rooms.clone();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), route.len());
            assert_eq!(route.rooms.first(), Some(&id(&colony, "S")));
            assert_eq!(route.rooms.last(), Some(&id(&colony, "E")));
            for pair in route.rooms.windows(2) {
                assert!(colony.are_adjacent(pair[0], pair[1]));
            }
        }
    }

    #[test]
    fn test_all_routes_disconnected() {
        let colony = Colony::with_tunnels(&["S", "A", "E"], &[("S", "A")]);
        assert!(all_routes(&colony, id(&colony, "S"), id(&colony, "E")).is_empty());
    }

    #[test]
    fn test_all_routes_same_room() {
        let colony = Colony::with_tunnels(&["S", "A"], &[("S", "A")]);
        let routes = all_routes(&colony, 0, 0);

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].rooms, vec![0]);
    }
}
