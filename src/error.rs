use thiserror::Error;

/// Errors raised while reading an anthill description
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The file holds no ant count line
    #[error("missing ant count")]
    MissingAntCount,
    /// The ant count line is not an integer
    #[error("invalid number of ants: {0}")]
    InvalidAntCount(String),
    /// Invalid line format in map file
    #[error("invalid line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
    /// A room name was declared twice
    #[error("duplicate room: {0}")]
    DuplicateRoom(String),
    /// A tunnel refers to an undeclared room
    #[error("unknown room: {0}")]
    UnknownRoom(String),
    /// No `##start` room
    #[error("no start room found")]
    MissingStart,
    /// No `##end` room
    #[error("no end room found")]
    MissingEnd,
    /// `##start` or `##end` not followed by a room line
    #[error("{0} is not followed by a room")]
    DanglingMarker(String),
}

/// Errors raised before or while planning the ant movements
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// Ant count is not positive
    #[error("invalid number of ants: {0}")]
    InvalidPopulation(i64),
    /// Start or end room has no tunnels, so no ant can ever move
    #[error("room {room} has no tunnels")]
    DegenerateCapacity { room: String },
    /// No route links start and end
    #[error("no route from {start} to {end}")]
    Disconnected { start: String, end: String },
    /// A turn produced no move while ants were still travelling
    #[error("simulation stalled at turn {turn}")]
    Stalled { turn: usize },
}

/// Crate-wide error
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
