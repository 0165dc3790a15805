use crate::ant::Ant;
use crate::error::PlanError;
use crate::routing::Route;
use crate::simulation::occupancy::OccupancyTable;
use crate::simulation::turn::{Move, Turn};
use tracing::trace;

/// Turn-based mover: every turn each ant advances at most one room along
/// its bound route, and no interior room ever holds two ants.
pub struct SimulationEngine<'a> {
    routes: &'a [Route],
    start: u32,
    end: u32,
    occupancy: OccupancyTable,
}

impl<'a> SimulationEngine<'a> {
    /// Create a simulation engine over the selected routes
    pub fn new(routes: &'a [Route], room_count: usize, start: u32, end: u32) -> Self {
        Self {
            routes,
            start,
            end,
            occupancy: OccupancyTable::new(room_count),
        }
    }

    /// Room occupancy at the current turn boundary
    pub fn occupancy(&self) -> &OccupancyTable {
        &self.occupancy
    }

    /// Check whether every ant stands in the end room
    pub fn is_finished(&self, ants: &[Ant]) -> bool {
        ants.iter().all(|a| a.has_arrived(self.routes[a.route].len()))
    }

    /// Run turns until every ant has arrived
    pub fn run(&mut self, ants: &mut [Ant]) -> Result<Vec<Turn>, PlanError> {
        let mut turns = Vec::new();

        while !self.is_finished(ants) {
            let turn = self.step(ants);
            if turn.is_empty() {
                return Err(PlanError::Stalled {
                    turn: turns.len() + 1,
                });
            }
            trace!(
                turn = turns.len() + 1,
                moves = turn.moves.len(),
                held = self.occupancy.held(),
                "turn simulated"
            );
            turns.push(turn);
        }

        Ok(turns)
    }

    /// Simulate one turn, moving ants in slice order
    pub fn step(&mut self, ants: &mut [Ant]) -> Turn {
        let mut moves = Vec::new();
        // only one ant may cross a start-end tunnel per turn
        let mut direct_crossed = false;
        let routes = self.routes;

        for ant in ants.iter_mut() {
            let rooms = &routes[ant.route].rooms;
            if ant.has_arrived(rooms.len()) {
                continue;
            }
            let here = rooms[ant.step];
            let next = rooms[ant.step + 1];

            if next == self.end {
                if here == self.start {
                    if direct_crossed {
                        continue;
                    }
                    direct_crossed = true;
                }
            } else if !self.occupancy.is_free(next) {
                continue;
            }

            if here != self.start {
                self.occupancy.release(here);
            }
            if next != self.end {
                self.occupancy.claim(next, ant.id);
            }
            ant.advance();
            moves.push(Move {
                ant: ant.id,
                room: next,
            });
        }

        Turn { moves }
    }
}
