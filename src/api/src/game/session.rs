use super::board::Board;
use super::conversion::GameSnapshot;
use super::rack::Rack;
use super::scoring::Scorer;
use super::tiles::TileBag;
use crate::config::GameConfig;
use crate::error::{ConfigError, Rejection};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// Human readable outcome of the last operation, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Nothing dealt yet.
    Idle,
    /// Tiles on the rack, board empty.
    Filled,
    /// At least one tile on the board, not yet submitted.
    Placing,
}

/// One game of single-row Scrabble.
///
/// The session owns the bag, the rack and the board. Tiles move between
/// rack and board only through `place`, `remove_from_board`, `move_tile`,
/// `clear_board` and `submit_word`, so rack plus board never holds more
/// than `hand_size` tiles.
#[derive(Debug, Clone)]
pub struct GameSession<R: Rng = StdRng> {
    bag: TileBag<R>,
    rack: Rack,
    board: Board,
    scorer: Scorer,
    hand_size: usize,
    total_score: u32,
    current_word_score: u32,
    status: Option<Status>,
}

impl GameSession<StdRng> {
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::from_layout(&config.board_layout)?;
        let bag = TileBag::standard(config.rng());
        Ok(Self::new(board, bag, config.hand_size))
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new(board: Board, bag: TileBag<R>, hand_size: usize) -> Self {
        let scorer = Scorer::new(bag.definitions());
        Self {
            bag,
            rack: Rack::new(hand_size),
            board,
            scorer,
            hand_size,
            total_score: 0,
            current_word_score: 0,
            status: None,
        }
    }

    /// Tops the hand back up to `hand_size`, counting tiles already on the
    /// board. Returns how many tiles were drawn.
    pub fn deal_tiles(&mut self) -> usize {
        self.status = None;
        self.refill()
    }

    // Draws the missing tiles; only an empty bag touches the status
    fn refill(&mut self) -> usize {
        let target = self.hand_size.saturating_sub(self.board.occupied_count());
        let wanted = target.saturating_sub(self.rack.len());
        let drawn = self.rack.fill_to(target, &mut self.bag);

        debug!(
            drawn,
            wanted,
            remaining = self.bag.remaining_total(),
            "Dealt tiles"
        );
        if drawn < wanted {
            warn!("Tile bag ran out: wanted {} tiles, drew {}", wanted, drawn);
            self.set_status(StatusKind::Error, "No more tiles available!");
        }
        drawn
    }

    /// Moves one `letter` from the rack onto square `index`.
    pub fn place(&mut self, index: usize, letter: char) -> Result<(), Rejection> {
        if !self.rack.contains(letter) {
            return self.reject(Rejection::NotInRack { letter });
        }
        if let Err(rejection) = self.board.place(index, letter) {
            return self.reject(rejection);
        }

        self.rack.remove(letter);
        self.on_board_changed();
        self.status = None;
        Ok(())
    }

    /// Sends the tile on square `index` back to the rack.
    pub fn remove_from_board(&mut self, index: usize) -> Option<char> {
        let letter = self.board.remove(index)?;
        self.return_to_rack(letter);
        self.on_board_changed();
        self.status = None;
        Some(letter)
    }

    /// Slides a placed tile to another square.
    pub fn move_tile(&mut self, from: usize, to: usize) -> Result<(), Rejection> {
        let width = self.board.width();
        let occupant = self.board.square(from).map(|square| square.occupant);
        let letter = match occupant {
            None => return self.reject(Rejection::OutOfBounds { index: from, width }),
            Some(None) => return self.reject(Rejection::EmptySquare { index: from }),
            Some(Some(letter)) => letter,
        };
        if from == to {
            self.status = None;
            return Ok(());
        }

        if let Err(rejection) = self.board.place(to, letter) {
            return self.reject(rejection);
        }
        self.board.remove(from);
        self.on_board_changed();
        self.status = None;
        Ok(())
    }

    /// Rescores whatever is on the board.
    pub fn on_board_changed(&mut self) -> u32 {
        self.current_word_score = self.scorer.score(&self.board.occupied_in_order());
        self.current_word_score
    }

    /// Banks the word on the board and refills the hand.
    pub fn submit_word(&mut self) -> Result<u32, Rejection> {
        if self.board.is_empty() {
            return self.reject(Rejection::EmptyBoard);
        }
        if !self.board.is_consecutive() {
            return self.reject(Rejection::NonConsecutive);
        }

        let score = self.on_board_changed();
        self.total_score = self.total_score.saturating_add(score);

        // The played tiles already left the rack when they were placed
        let played: String = self.board.clear().into_iter().collect();
        self.current_word_score = 0;

        info!(
            word = %played,
            score,
            total = self.total_score,
            "Word submitted"
        );
        self.set_status(
            StatusKind::Success,
            format!("Word submitted! Score: {} points", score),
        );

        self.refill();
        Ok(score)
    }

    /// Returns every placed tile to the rack without scoring.
    pub fn clear_board(&mut self) -> usize {
        let letters = self.board.clear();
        for &letter in &letters {
            self.return_to_rack(letter);
        }
        self.current_word_score = 0;

        debug!(returned = letters.len(), "Board cleared");
        self.set_status(StatusKind::Info, "Board cleared!");
        letters.len()
    }

    /// Starts over with a full bag, empty board and zero score.
    pub fn restart(&mut self) {
        self.bag.reset();
        self.rack.clear();
        self.board.clear();
        self.total_score = 0;
        self.current_word_score = 0;

        self.refill();
        info!(
            remaining = self.bag.remaining_total(),
            "Game restarted"
        );
        self.set_status(StatusKind::Info, "Game restarted!");
    }

    /// Deals the missing tiles when the hand is short.
    pub fn request_more_tiles(&mut self) -> Result<usize, Rejection> {
        if self.tiles_in_hand() >= self.hand_size {
            return self.reject(Rejection::RackFull {
                hand_size: self.hand_size,
            });
        }

        let drawn = self.refill();
        if drawn > 0 {
            self.set_status(StatusKind::Success, "New tiles dealt!");
        }
        Ok(drawn)
    }

    pub fn phase(&self) -> Phase {
        if !self.board.is_empty() {
            Phase::Placing
        } else if !self.rack.is_empty() {
            Phase::Filled
        } else {
            Phase::Idle
        }
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn current_word_score(&self) -> u32 {
        self.current_word_score
    }

    pub fn tiles_remaining(&self) -> u32 {
        self.bag.remaining_total()
    }

    /// Rack tiles plus tiles placed but not yet submitted.
    pub fn tiles_in_hand(&self) -> usize {
        self.rack.len() + self.board.occupied_count()
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn letter_value(&self, letter: char) -> u32 {
        self.scorer.get_letter_points(letter)
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bag(&self) -> &TileBag<R> {
        &self.bag
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some(Status {
            kind,
            message: message.into(),
        });
    }

    fn return_to_rack(&mut self, letter: char) {
        if !self.rack.push(letter) {
            warn!(
                "Rack full, tile '{}' could not be returned ({} in hand)",
                letter,
                self.tiles_in_hand()
            );
        }
    }

    fn reject<T>(&mut self, rejection: Rejection) -> Result<T, Rejection> {
        debug!(reason = rejection.reason(), "Rejected: {}", rejection);
        self.set_status(StatusKind::Error, rejection.to_string());
        Err(rejection)
    }
}
