use crate::routing::route::Route;

/// Spreads ants over the selected routes, one at a time.
///
/// A route's worth starts at its room count and grows by one per ant sent
/// down it, so the next ant always takes the route that would finish it
/// soonest. Ties go to the earlier route.
#[derive(Clone, Debug)]
pub struct LoadBalancer {
    worth: Vec<usize>,
    assigned: Vec<usize>,
}

impl LoadBalancer {
    /// Create a balancer over `routes`, with nothing assigned yet
    pub fn new(routes: &[Route]) -> Self {
        Self {
            worth: routes.iter().map(Route::len).collect(),
            assigned: vec![0; routes.len()],
        }
    }

    /// Bind the next ant, returning the chosen route index
    pub fn assign_next(&mut self) -> Option<usize> {
        let (slot, _) = self
            .worth
            .iter()
            .enumerate()
            .min_by_key(|&(slot, &worth)| (worth, slot))?;
        self.worth[slot] += 1;
        self.assigned[slot] += 1;
        Some(slot)
    }

    /// Bind `count` ants in order, returning each ant's route index
    pub fn assign(&mut self, count: usize) -> Vec<usize> {
        (0..count).map_while(|_| self.assign_next()).collect()
    }

    /// Current worth per route
    pub fn worth(&self) -> &[usize] {
        &self.worth
    }

    /// Ants bound so far per route
    pub fn assigned(&self) -> &[usize] {
        &self.assigned
    }
}
