/// Who holds each room during the simulation
///
/// One slot per room, holding the id of the ant inside or `VACANT`.
/// Start and end are never claimed: the engine only tracks interior rooms.
#[derive(Clone, Debug)]
pub struct OccupancyTable {
    holder: Vec<u32>,
    /// Rooms currently held
    held: usize,
}

impl OccupancyTable {
    const VACANT: u32 = u32::MAX;

    /// Create an empty table for a colony with the given number of rooms
    pub fn new(room_count: usize) -> Self {
        Self {
            holder: vec![Self::VACANT; room_count],
            held: 0,
        }
    }

    /// Check if no ant holds `room`
    #[inline]
    pub fn is_free(&self, room: u32) -> bool {
        self.holder[room as usize] == Self::VACANT
    }

    /// Ant currently holding `room`
    #[inline]
    pub fn holder(&self, room: u32) -> Option<u32> {
        let ant = self.holder[room as usize];
        (ant != Self::VACANT).then_some(ant)
    }

    /// Put `ant` into `room`; the room must be free
    #[inline]
    pub fn claim(&mut self, room: u32, ant: u32) {
        debug_assert!(self.is_free(room), "room {} already held", room);
        self.holder[room as usize] = ant;
        self.held += 1;
    }

    /// Free `room`
    #[inline]
    pub fn release(&mut self, room: u32) {
        if !self.is_free(room) {
            self.holder[room as usize] = Self::VACANT;
            self.held -= 1;
        }
    }

    /// Number of rooms currently held
    #[inline]
    pub fn held(&self) -> usize {
        self.held
    }
}
