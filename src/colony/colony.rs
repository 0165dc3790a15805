use crate::colony::room::Room;
use std::collections::HashMap;

/// Room graph: names + rooms, with a name lookup kept for construction
#[derive(Clone, Debug, Default)]
pub struct Colony {
    pub names: Vec<String>,
    pub rooms: Vec<Room>,
    lookup: HashMap<String, u32>,
}

impl Colony {
    /// Create an empty colony
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a room by name, returning its id. An existing name yields the existing id.
    pub fn add_room(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = self.rooms.len() as u32;
        self.names.push(name.to_string());
        self.rooms.push(Room::new(id));
        self.lookup.insert(name.to_string(), id);
        id
    }

    /// Build a colony from room names and tunnel pairs; unknown tunnel ends are created
    pub fn with_tunnels(rooms: &[&str], tunnels: &[(&str, &str)]) -> Self {
        let mut colony = Self::new();
        for name in rooms {
            colony.add_room(name);
        }
        for (a, b) in tunnels {
            let a = colony.add_room(a);
            let b = colony.add_room(b);
            colony.link(a, b);
        }
        colony
    }

    /// Dig a tunnel between two rooms. Both endpoints see each other;
    /// repeated links create parallel entries.
    pub fn link(&mut self, a: u32, b: u32) {
        self.rooms[a as usize].add_neighbor(b);
        self.rooms[b as usize].add_neighbor(a);
    }

    /// Look up a room id by name
    #[inline]
    pub fn room_id(&self, name: &str) -> Option<u32> {
        self.lookup.get(name).copied()
    }

    /// Get a room by id
    #[inline]
    pub fn room(&self, idx: u32) -> Option<&Room> {
        self.rooms.get(idx as usize)
    }

    /// Rooms reachable through one tunnel from `idx`
    #[inline]
    pub fn neighbors(&self, idx: u32) -> &[u32] {
        &self.rooms[idx as usize].neighbors
    }

    /// Number of tunnels leaving `idx`
    #[inline]
    pub fn degree(&self, idx: u32) -> usize {
        self.rooms[idx as usize].degree()
    }

    /// Check whether a tunnel links `a` and `b`
    #[inline]
    pub fn are_adjacent(&self, a: u32, b: u32) -> bool {
        self.rooms[a as usize].is_adjacent(b)
    }

    /// Get the name of a room by id
    pub fn room_name(&self, idx: u32) -> &str {
        &self.names[self.rooms[idx as usize].name_idx as usize]
    }

    /// Number of rooms
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Check whether the colony has no rooms
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// A parsed problem: the colony, its distinguished rooms and the ant population
#[derive(Clone, Debug)]
pub struct Anthill {
    pub colony: Colony,
    pub start: u32,
    pub end: u32,
    pub ants: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Colony {
        let mut colony = Colony::new();
        let s = colony.add_room("S");
        let a = colony.add_room("A");
        let b = colony.add_room("B");
        let e = colony.add_room("E");
        colony.link(s, a);
        colony.link(s, b);
        colony.link(a, e);
        colony.link(b, e);
        colony
    }

    #[test]
    fn test_colony_creation() {
        let colony = diamond();

        assert_eq!(colony.len(), 4);
        assert_eq!(colony.names, vec!["S", "A", "B", "E"]);
    }

    #[test]
    fn test_add_room_is_keyed_by_name() {
        let mut colony = Colony::new();
        let first = colony.add_room("A");
        let again = colony.add_room("A");

        assert_eq!(first, again);
        assert_eq!(colony.len(), 1);
    }

    #[test]
    fn test_link_is_symmetric() {
        let colony = diamond();
        let s = colony.room_id("S").unwrap();
        let a = colony.room_id("A").unwrap();
        let e = colony.room_id("E").unwrap();

        assert!(colony.are_adjacent(s, a));
        assert!(colony.are_adjacent(a, s));
        assert!(!colony.are_adjacent(s, e));
        assert_eq!(colony.degree(s), 2);
        assert_eq!(colony.neighbors(a), &[s, e]);
    }

    #[test]
    fn test_parallel_links_are_kept() {
        let mut colony = Colony::new();
        let a = colony.add_room("A");
        let b = colony.add_room("B");
        colony.link(a, b);
        colony.link(a, b);

        assert_eq!(colony.degree(a), 2);
        assert_eq!(colony.degree(b), 2);
    }

    #[test]
    fn test_with_tunnels() {
        let colony = Colony::with_tunnels(&["S", "E"], &[("S", "E"), ("E", "X")]);

        assert_eq!(colony.len(), 3);
        assert_eq!(colony.room_name(2), "X");
        assert_eq!(colony.degree(1), 2);
    }

    #[test]
    fn test_room_lookup() {
        let colony = diamond();
        let b = colony.room_id("B").unwrap();

        assert_eq!(colony.room_name(b), "B");
        assert!(colony.room(b).is_some());
        assert!(colony.room(99).is_none());
        assert_eq!(colony.room_id("Z"), None);
    }
}
