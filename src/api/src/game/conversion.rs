use super::board::Bonus;
use super::session::{GameSession, Phase, Status};
use rand::Rng;
use serde::{Deserialize, Serialize};

// Read-only views handed to whatever is drawing the game

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableRackTile {
    pub letter: char,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableSquare {
    pub index: usize,
    pub bonus: Bonus,
    pub letter: Option<char>,
    pub value: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub total_score: u32,
    pub current_word_score: u32,
    pub tiles_remaining: u32,
    pub rack: Vec<SerializableRackTile>,
    pub board: Vec<SerializableSquare>,
    pub status: Option<Status>,
}

impl<R: Rng> From<&GameSession<R>> for GameSnapshot {
    fn from(session: &GameSession<R>) -> Self {
        Self {
            phase: session.phase(),
            total_score: session.total_score(),
            current_word_score: session.current_word_score(),
            tiles_remaining: session.tiles_remaining(),
            rack: session
                .rack()
                .letters()
                .iter()
                .map(|&letter| SerializableRackTile {
                    letter,
                    value: session.letter_value(letter),
                })
                .collect(),
            board: session
                .board()
                .squares()
                .iter()
                .map(|square| SerializableSquare {
                    index: square.index,
                    bonus: square.bonus,
                    letter: square.occupant,
                    value: square.occupant.map(|letter| session.letter_value(letter)),
                })
                .collect(),
            status: session.status().cloned(),
        }
    }
}
