use thiserror::Error;

/// Why the engine turned an operation down. These are ordinary game
/// outcomes that the caller reports to the player; none of them leave the
/// session in a different state than before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Please place tiles on the board first!")]
    EmptyBoard,

    #[error("Tiles must be placed consecutively with no gaps!")]
    NonConsecutive,

    #[error("Square {index} already holds a tile")]
    Occupied { index: usize },

    #[error("Square {index} is off the board (width {width})")]
    OutOfBounds { index: usize, width: usize },

    #[error("Square {index} is empty")]
    EmptySquare { index: usize },

    #[error("There is no '{letter}' on your rack")]
    NotInRack { letter: char },

    #[error("You already have {hand_size} tiles. Submit a word first!")]
    RackFull { hand_size: usize },
}

impl Rejection {
    /// Short machine-friendly tag, stable across message wording changes.
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::EmptyBoard => "empty-board",
            Rejection::NonConsecutive => "non-consecutive",
            Rejection::Occupied { .. } => "occupied",
            Rejection::OutOfBounds { .. } => "out-of-bounds",
            Rejection::EmptySquare { .. } => "empty-square",
            Rejection::NotInRack { .. } => "not-in-rack",
            Rejection::RackFull { .. } => "rack-full",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("board layout has no squares")]
    Empty,

    #[error("unknown bonus token '{token}' at square {index}")]
    UnknownToken { token: String, index: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BOARD_LAYOUT: {0}")]
    Layout(#[from] LayoutError),

    #[error("HAND_SIZE must be at least 1")]
    ZeroHandSize,
}
