/// Where an ant stands along its bound route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntState {
    AtStart,
    InTransit(usize),
    AtEnd,
}

/// An ant bound to one route for its whole trip
#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    pub route: usize, // index into the selected route set
    pub step: usize,  // index into the route's rooms
}

impl Ant {
    /// Create a new ant at the start of the given route
    pub fn new(id: u32, route: usize) -> Self {
        Self { id, route, step: 0 }
    }

    /// State along a route of `route_len` rooms
    #[inline]
    pub fn state(&self, route_len: usize) -> AntState {
        if self.step + 1 >= route_len {
            AntState::AtEnd
        } else if self.step == 0 {
            AntState::AtStart
        } else {
            AntState::InTransit(self.step)
        }
    }

    /// Check if the ant has reached the last room of a route of `route_len` rooms
    #[inline]
    pub fn has_arrived(&self, route_len: usize) -> bool {
        self.state(route_len) == AntState::AtEnd
    }

    /// Step to the next room of the route
    #[inline]
    pub fn advance(&mut self) {
        self.step += 1;
    }
}
