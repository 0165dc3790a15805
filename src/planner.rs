//! End-to-end planning: validate the anthill, enumerate routes, pick a
//! disjoint set, spread the ants over it and simulate the turns.

use crate::ant::Ant;
use crate::colony::{Anthill, Colony};
use crate::error::PlanError;
use crate::routing::{all_routes, shortest_route, LoadBalancer, Route, RouteSelector};
use crate::simulation::{SimulationEngine, Turn};
use tracing::{debug, info};

/// A finished movement plan
#[derive(Clone, Debug)]
pub struct Plan {
    /// Selected interior-disjoint routes, shortest first
    pub routes: Vec<Route>,
    /// Route index per ant, ant `i + 1` at position `i`
    pub assignments: Vec<usize>,
    /// Move batches, one per turn
    pub turns: Vec<Turn>,
    /// Breadth-first reference route
    pub shortest: Option<Route>,
}

impl Plan {
    /// Number of turns needed to bring every ant home
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Number of ants moved
    pub fn ant_count(&self) -> usize {
        self.assignments.len()
    }

    /// Ants bound to each route
    pub fn ants_per_route(&self) -> Vec<usize> {
        let mut counts = vec![0; self.routes.len()];
        for &route in &self.assignments {
            counts[route] += 1;
        }
        counts
    }

    /// The move log, one line per turn
    pub fn lines(&self, colony: &Colony) -> Vec<String> {
        self.turns.iter().map(|t| t.describe(colony)).collect()
    }
}

/// Plan the moves for a parsed anthill
pub fn plan_anthill(hill: &Anthill) -> Result<Plan, PlanError> {
    plan(&hill.colony, hill.start, hill.end, hill.ants)
}

/// Plan how `ants` ants travel from `start` to `end`
pub fn plan(colony: &Colony, start: u32, end: u32, ants: i64) -> Result<Plan, PlanError> {
    let count = match usize::try_from(ants) {
        Ok(n) if n > 0 => n,
        _ => return Err(PlanError::InvalidPopulation(ants)),
    };

    if start == end {
        info!(ants = count, "start is the end room, nothing to move");
        return Ok(Plan {
            routes: vec![Route::new(vec![start], 0)],
            assignments: vec![0; count],
            turns: Vec::new(),
            shortest: Some(Route::new(vec![start], 0)),
        });
    }

    for room in [start, end] {
        if colony.degree(room) == 0 {
            return Err(PlanError::DegenerateCapacity {
                room: colony.room_name(room).to_string(),
            });
        }
    }

    let disconnected = || PlanError::Disconnected {
        start: colony.room_name(start).to_string(),
        end: colony.room_name(end).to_string(),
    };

    let shortest = shortest_route(colony, start, end).ok_or_else(disconnected)?;
    debug!(route = %shortest.describe(colony), "shortest route");

    let selector = RouteSelector::new(count.min(colony.degree(start).min(colony.degree(end))));
    let candidates = all_routes(colony, start, end);
    info!(
        routes = candidates.len(),
        capacity = selector.capacity(),
        "routes enumerated"
    );

    let routes = selector.select(candidates, colony.len());
    if routes.is_empty() {
        return Err(disconnected());
    }
    for route in &routes {
        debug!(
            route = %route.describe(colony),
            repeat_total = route.repeat_total,
            "selected route"
        );
    }

    let assignments = LoadBalancer::new(&routes).assign(count);
    let mut ants = assignments
        .iter()
        .enumerate()
        .map(|(i, &route)| Ok(Ant::new(ant_id(i, ants)?, route)))
        .collect::<Result<Vec<Ant>, PlanError>>()?;

    let mut engine = SimulationEngine::new(&routes, colony.len(), start, end);
    let turns = engine.run(&mut ants)?;
    info!(
        ants = count,
        routes = routes.len(),
        turns = turns.len(),
        "plan complete"
    );

    Ok(Plan {
        routes,
        assignments,
        turns,
        shortest: Some(shortest),
    })
}

/// Ant ids start at 1; a population past `u32::MAX` has no id to give.
fn ant_id(index: usize, ants: i64) -> Result<u32, PlanError> {
    index
        .checked_add(1)
        .and_then(|id| u32::try_from(id).ok())
        .ok_or(PlanError::InvalidPopulation(ants))
}
