//! # Lem-in
//!
//! Moves a colony of ants from a start room to an end room in as few turns
//! as possible.
//!
//! This library parses anthill maps, enumerates routes, selects a set of
//! interior-disjoint ones, spreads the ants over them and simulates the
//! turn-by-turn move log.

pub mod ant;
pub mod cli;
pub mod colony;
pub mod error;
pub mod planner;
pub mod routing;
pub mod simulation;

pub use ant::{Ant, AntState};
pub use cli::Args;
pub use colony::{Anthill, Colony, Room};
pub use error::{Error, ParseError, PlanError, Result};
pub use planner::{plan, plan_anthill, Plan};
pub use routing::Route;
pub use simulation::SimulationEngine;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        plan_anthill, Anthill, Args, Colony, Error, ParseError, Plan, PlanError, Result, Route,
    };
}
