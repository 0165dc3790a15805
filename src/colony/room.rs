/// Graph node: a named room and the rooms its tunnels lead to
#[derive(Clone, Debug)]
pub struct Room {
    pub name_idx: u32,       // index into `names`
    pub neighbors: Vec<u32>, // tunnel targets, in insertion order; may repeat
}

impl Room {
    /// Create a new room with the given name index
    #[inline]
    pub fn new(name_idx: u32) -> Self {
        Self {
            name_idx,
            neighbors: Vec::new(),
        }
    }

    /// Record a tunnel towards `neighbor_id`
    #[inline]
    pub fn add_neighbor(&mut self, neighbor_id: u32) {
        self.neighbors.push(neighbor_id);
    }

    /// Check whether a tunnel leads to `room_id`
    #[inline]
    pub fn is_adjacent(&self, room_id: u32) -> bool {
        self.neighbors.contains(&room_id)
    }

    /// Number of tunnels leaving this room
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}
