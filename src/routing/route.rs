use crate::colony::Colony;

/// A simple path from start to end, stored as room ids
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub rooms: Vec<u32>,
    /// Discovery index among all enumerated routes
    pub order: usize,
    /// Sum of the interior rooms' repeat counts over the enumerated route list
    pub repeat_total: u32,
}

impl Route {
    /// Create a route from its room sequence and discovery index
    pub fn new(rooms: Vec<u32>, order: usize) -> Self {
        Self {
            rooms,
            order,
            repeat_total: 0,
        }
    }

    /// Room count, start and end included
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always false for an enumerated route
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Tunnels to cross from start to end
    #[inline]
    pub fn hops(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    /// Rooms strictly between start and end
    #[inline]
    pub fn interior(&self) -> &[u32] {
        if self.rooms.len() <= 2 {
            &[]
        } else {
            &self.rooms[1..self.rooms.len() - 1]
        }
    }

    /// Check whether the two routes share any interior room
    pub fn conflicts_with(&self, other: &Route) -> bool {
        let theirs = other.interior();
        self.interior().iter().any(|room| theirs.contains(room))
    }

    /// Room names joined by `-`
    pub fn describe(&self, colony: &Colony) -> String {
        let names: Vec<&str> = self.rooms.iter().map(|&r| colony.room_name(r)).collect();
        names.join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_metrics() {
        let route = Route::new(vec![0, 3, 4, 1], 2);

        assert_eq!(route.len(), 4);
        assert_eq!(route.hops(), 3);
        assert_eq!(route.interior(), &[3, 4]);
        assert_eq!(route.order, 2);
        assert_eq!(route.repeat_total, 0);
    }

    #[test]
    fn test_direct_route_has_no_interior() {
        let direct = Route::new(vec![0, 1], 0);
        let other = Route::new(vec![0, 2, 1], 1);

        assert!(direct.interior().is_empty());
        assert!(!direct.conflicts_with(&other));
        assert!(!other.conflicts_with(&direct));
    }

    #[test]
    fn test_conflicts_ignore_start_and_end() {
        let a = Route::new(vec![0, 2, 3, 1], 0);
        let b = Route::new(vec![0, 4, 1], 1);
        let c = Route::new(vec![0, 4, 3, 1], 2);

        assert!(!a.conflicts_with(&b));
        assert!(a.conflicts_with(&c));
        assert!(c.conflicts_with(&a));
        assert!(b.conflicts_with(&c));
    }

    #[test]
    fn test_describe() {
        let mut colony = Colony::new();
        let s = colony.add_room("S");
        let a = colony.add_room("A");
        let e = colony.add_room("E");

        assert_eq!(Route::new(vec![s, a, e], 0).describe(&colony), "S-A-E");
    }
}
