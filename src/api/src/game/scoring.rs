use super::board::Bonus;
use super::tiles::TileDefinition;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredTile {
    pub letter: char,
    pub bonus: Bonus,
    pub value: u32,
}

impl ScoredTile {
    pub fn new(letter: char, bonus: Bonus, value: u32) -> Self {
        Self {
            letter,
            bonus,
            value,
        }
    }
}

/// Scores a word laid out on bonus squares.
///
/// Letter bonuses scale their own tile. Word bonuses multiply together and
/// are applied once to the summed tiles, so two double-word squares give x4.
/// Long rows of word bonuses saturate at `u32::MAX` instead of overflowing.
pub fn compute_score(tiles: &[ScoredTile]) -> u32 {
    let mut total: u32 = 0;
    let mut word_multiplier: u32 = 1;

    for tile in tiles {
        total = total.saturating_add(tile.value.saturating_mul(tile.bonus.letter_multiplier()));
        word_multiplier = word_multiplier.saturating_mul(tile.bonus.word_multiplier());
    }

    total.saturating_mul(word_multiplier)
}

/// Looks up tile values for letters and feeds them to `compute_score`.
#[derive(Debug, Clone)]
pub struct Scorer {
    letter_points: HashMap<char, u32>,
}

impl Scorer {
    pub fn new(definitions: &[TileDefinition]) -> Self {
        Self {
            letter_points: definitions.iter().map(|d| (d.letter, d.value)).collect(),
        }
    }

    pub fn score(&self, placed: &[(char, Bonus)]) -> u32 {
        let tiles: Vec<ScoredTile> = placed
            .iter()
            .map(|&(letter, bonus)| ScoredTile::new(letter, bonus, self.get_letter_points(letter)))
            .collect();
        compute_score(&tiles)
    }

    // Letters outside the distribution are worth nothing
    pub fn get_letter_points(&self, letter: char) -> u32 {
        *self.letter_points.get(&letter).unwrap_or(&0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tiles::STANDARD_DISTRIBUTION;

    fn tile(letter: char, bonus: Bonus, value: u32) -> ScoredTile {
        ScoredTile::new(letter, bonus, value)
    }

    fn standard_scorer() -> Scorer {
        let definitions: Vec<TileDefinition> = STANDARD_DISTRIBUTION
            .iter()
            .map(|&(letter, value, count)| TileDefinition::new(letter, value, count))
            .collect();
        Scorer::new(&definitions)
    }

    #[test]
    fn test_empty_word_scores_zero() {
        assert_eq!(compute_score(&[]), 0);
    }

    #[test]
    fn test_plain_squares_sum_values() {
        let word = [tile('A', Bonus::None, 1), tile('T', Bonus::None, 1)];
        assert_eq!(compute_score(&word), 2);
    }

    #[test]
    fn test_letter_bonus_scales_one_tile() {
        let word = [tile('A', Bonus::DoubleLetter, 1), tile('T', Bonus::None, 1)];
        assert_eq!(compute_score(&word), 3);

        let word = [tile('Q', Bonus::TripleLetter, 10), tile('I', Bonus::None, 1)];
        assert_eq!(compute_score(&word), 31);
    }

    #[test]
    fn test_word_bonus_applies_to_total() {
        let word = [
            tile('C', Bonus::None, 3),
            tile('A', Bonus::DoubleWord, 1),
            tile('T', Bonus::None, 1),
        ];
        assert_eq!(compute_score(&word), 10);
    }

    #[test]
    fn test_word_bonuses_compound() {
        let word = [tile('A', Bonus::DoubleWord, 1), tile('T', Bonus::DoubleWord, 1)];
        assert_eq!(compute_score(&word), 8);

        let word = [
            tile('A', Bonus::TripleWord, 1),
            tile('X', Bonus::DoubleLetter, 8),
            tile('E', Bonus::TripleWord, 1),
        ];
        assert_eq!(compute_score(&word), (1 + 16 + 1) * 9);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut word = vec![
            tile('Z', Bonus::TripleLetter, 10),
            tile('A', Bonus::DoubleWord, 1),
            tile('P', Bonus::None, 3),
        ];
        let forward = compute_score(&word);
        word.reverse();
        assert_eq!(compute_score(&word), forward);
        assert_eq!(forward, 68);
    }

    #[test]
    fn test_many_word_bonuses_saturate() {
        // 3^21 overflows u32
        let word: Vec<ScoredTile> = (0..21).map(|_| tile('A', Bonus::TripleWord, 1)).collect();
        assert_eq!(compute_score(&word), u32::MAX);

        let word = [tile('Z', Bonus::TripleLetter, u32::MAX), tile('A', Bonus::None, 1)];
        assert_eq!(compute_score(&word), u32::MAX);
    }

    #[test]
    fn test_blank_is_worth_nothing() {
        let word = [tile('_', Bonus::TripleLetter, 0), tile('A', Bonus::TripleWord, 1)];
        assert_eq!(compute_score(&word), 3);
    }

    #[test]
    fn test_scorer_uses_letter_values() {
        let scorer = standard_scorer();
        assert_eq!(scorer.get_letter_points('Q'), 10);
        assert_eq!(scorer.get_letter_points('_'), 0);
        assert_eq!(scorer.get_letter_points('*'), 0);

        let placed = [
            ('C', Bonus::None),
            ('A', Bonus::DoubleWord),
            ('T', Bonus::None),
        ];
        assert_eq!(scorer.score(&placed), 10);
        assert_eq!(scorer.score(&[]), 0);
    }
}
