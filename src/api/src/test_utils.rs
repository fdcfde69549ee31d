#[cfg(test)]
pub mod test_utils {
    use crate::game::board::{Board, Bonus};
    use crate::game::{GameSession, TileBag, TileDefinition};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A bag holding `count` copies of a single letter, so every draw is known
    pub fn single_letter_bag(letter: char, value: u32, count: u32) -> TileBag<StepRng> {
        TileBag::with_distribution(
            vec![TileDefinition::new(letter, value, count)],
            StepRng::new(0, 1),
        )
    }

    /// Standard 100 tile bag with a fixed seed
    pub fn seeded_standard_bag(seed: u64) -> TileBag<StdRng> {
        TileBag::standard(StdRng::seed_from_u64(seed))
    }

    /// A row of squares with no bonuses
    pub fn plain_board(width: usize) -> Board {
        Board::new(vec![Bonus::None; width])
    }

    /// Session over a plain board and a single-letter bag, hand of 7
    pub fn plain_session(
        letter: char,
        value: u32,
        count: u32,
        width: usize,
    ) -> GameSession<StepRng> {
        GameSession::new(plain_board(width), single_letter_bag(letter, value, count), 7)
    }

    /// Session over the standard board and bag with a fixed seed
    pub fn seeded_session(seed: u64) -> GameSession<StdRng> {
        GameSession::new(Board::standard(), seeded_standard_bag(seed), 7)
    }
}
