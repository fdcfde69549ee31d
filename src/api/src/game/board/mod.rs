use crate::error::{LayoutError, Rejection};
use std::fmt;

pub mod bonus;

pub use bonus::{parse_layout, Bonus};

/// Top row of a standard 15x15 Scrabble board.
pub const STANDARD_LAYOUT: &str = "3w . . 2l . . . 3w . . . 2l . . 3w";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    pub index: usize,
    pub bonus: Bonus,
    pub occupant: Option<char>,
}

impl Square {
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// A single row of squares. Bonuses are fixed at construction; only the
/// occupants change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Vec<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn new(bonuses: Vec<Bonus>) -> Self {
        Self {
            squares: bonuses
                .into_iter()
                .enumerate()
                .map(|(index, bonus)| Square {
                    index,
                    bonus,
                    occupant: None,
                })
                .collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(
            STANDARD_LAYOUT
                .split_whitespace()
                .filter_map(Bonus::from_token)
                .collect(),
        )
    }

    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        Ok(Self::new(parse_layout(layout)?))
    }

    pub fn width(&self) -> usize {
        self.squares.len()
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn square(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    pub fn place(&mut self, index: usize, letter: char) -> Result<(), Rejection> {
        let width = self.width();
        let square = self
            .squares
            .get_mut(index)
            .ok_or(Rejection::OutOfBounds { index, width })?;

        if square.is_occupied() {
            return Err(Rejection::Occupied { index });
        }
        square.occupant = Some(letter);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<char> {
        self.squares.get_mut(index).and_then(|s| s.occupant.take())
    }

    /// Occupied squares as (letter, bonus), left to right.
    pub fn occupied_in_order(&self) -> Vec<(char, Bonus)> {
        self.squares
            .iter()
            .filter_map(|s| s.occupant.map(|letter| (letter, s.bonus)))
            .collect()
    }

    pub fn occupied_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .filter(|s| s.is_occupied())
            .map(|s| s.index)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_occupied()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// True when at least one tile is placed and the placed tiles form an
    /// unbroken run.
    pub fn is_consecutive(&self) -> bool {
        let indices = self.occupied_indices();
        if indices.is_empty() {
            return false;
        }
        indices.windows(2).all(|pair| pair[1] == pair[0] + 1)
    }

    /// Empties every square, returning the removed letters left to right.
    pub fn clear(&mut self) -> Vec<char> {
        self.squares
            .iter_mut()
            .filter_map(|s| s.occupant.take())
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in &self.squares {
            match square.occupant {
                Some(letter) => write!(f, "[{:^2}]", letter)?,
                None => write!(f, "[{:^2}]", square.bonus.token())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils;

    fn board_with(indices: &[usize]) -> Board {
        let mut board = test_utils::plain_board(9);
        for &index in indices {
            board.place(index, 'A').unwrap();
        }
        board
    }

    #[test]
    fn test_standard_board() {
        let board = Board::standard();
        assert_eq!(board.width(), 15);
        assert_eq!(board.square(0).unwrap().bonus, Bonus::TripleWord);
        assert_eq!(board.square(3).unwrap().bonus, Bonus::DoubleLetter);
        assert_eq!(board.square(7).unwrap().bonus, Bonus::TripleWord);
        assert_eq!(board.square(14).unwrap().bonus, Bonus::TripleWord);
        assert_eq!(board, Board::from_layout(STANDARD_LAYOUT).unwrap());
    }

    #[test]
    fn test_place_rejects_occupied_square() {
        let mut board = test_utils::plain_board(7);
        assert!(board.place(2, 'C').is_ok());
        assert_eq!(board.place(2, 'A'), Err(Rejection::Occupied { index: 2 }));
        assert_eq!(board.square(2).unwrap().occupant, Some('C'));
    }

    #[test]
    fn test_place_rejects_out_of_bounds() {
        let mut board = test_utils::plain_board(7);
        assert_eq!(
            board.place(7, 'A'),
            Err(Rejection::OutOfBounds { index: 7, width: 7 })
        );
    }

    #[test]
    fn test_remove_returns_prior_occupant() {
        let mut board = test_utils::plain_board(7);
        board.place(4, 'Q').unwrap();
        assert_eq!(board.remove(4), Some('Q'));
        assert_eq!(board.remove(4), None);
        assert_eq!(board.remove(40), None);
    }

    #[test]
    fn test_occupied_in_order() {
        let mut board = Board::from_layout(". 2l . 3w").unwrap();
        board.place(3, 'T').unwrap();
        board.place(1, 'A').unwrap();

        assert_eq!(
            board.occupied_in_order(),
            vec![('A', Bonus::DoubleLetter), ('T', Bonus::TripleWord)]
        );
        assert_eq!(board.occupied_indices(), vec![1, 3]);
    }

    #[test]
    fn test_is_consecutive() {
        assert!(!board_with(&[]).is_consecutive());
        assert!(board_with(&[2]).is_consecutive());
        assert!(board_with(&[2, 3, 4]).is_consecutive());
        assert!(!board_with(&[2, 4]).is_consecutive());
        assert!(!board_with(&[0, 1, 3]).is_consecutive());
        assert!(board_with(&[6, 7, 8]).is_consecutive());
    }

    #[test]
    fn test_clear_returns_letters() {
        let mut board = test_utils::plain_board(7);
        board.place(5, 'T').unwrap();
        board.place(0, 'C').unwrap();

        assert_eq!(board.clear(), vec!['C', 'T']);
        assert!(board.is_empty());
        assert!(board.clear().is_empty());
    }

    #[test]
    fn test_display() {
        let mut board = Board::from_layout("3w . 2l").unwrap();
        board.place(1, 'A').unwrap();
        assert_eq!(board.to_string(), "[3w][A ][2l]");
    }
}
