pub mod colony;
pub mod parser;
pub mod room;

pub use colony::{Anthill, Colony};
pub use parser::{parse_anthill, parse_anthill_from_str};
pub use room::Room;
