pub mod engine;
pub mod occupancy;
pub mod turn;

pub use engine::SimulationEngine;
pub use occupancy::OccupancyTable;
pub use turn::{Move, Turn};
