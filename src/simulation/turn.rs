use crate::colony::Colony;

/// One ant stepping into one room
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub ant: u32,
    pub room: u32,
}

impl Move {
    /// `L{ant}-{room}` as printed in the move log
    pub fn describe(&self, colony: &Colony) -> String {
        format!("L{}-{}", self.ant, colony.room_name(self.room))
    }
}

/// The moves made during one turn, in the order the ants moved
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Turn {
    pub moves: Vec<Move>,
}

impl Turn {
    /// Check if nobody moved
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The turn as one move-log line
    pub fn describe(&self, colony: &Colony) -> String {
        let mut line = String::with_capacity(self.moves.len() * 8);
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&mv.describe(colony));
        }
        line
    }
}
