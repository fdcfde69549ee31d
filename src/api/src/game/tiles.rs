use rand::rngs::StdRng;
use rand::Rng;
use std::fmt;

pub const BLANK: char = '_';

// (letter, value, count) for a standard English Scrabble set, 100 tiles
pub const STANDARD_DISTRIBUTION: [(char, u32, u32); 27] = [
    ('A', 1, 9),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 9),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
    (BLANK, 0, 2),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDefinition {
    pub letter: char,
    pub value: u32,
    pub original_count: u32,
    pub remaining_count: u32,
}

impl TileDefinition {
    pub fn new(letter: char, value: u32, original_count: u32) -> Self {
        Self {
            letter,
            value,
            original_count,
            remaining_count: original_count,
        }
    }
}

/// The pool of undrawn tiles.
///
/// Randomness lives behind the `R` parameter so a session can be seeded
/// (or driven by a mock generator) for reproducible games.
#[derive(Debug, Clone)]
pub struct TileBag<R: Rng = StdRng> {
    tiles: Vec<TileDefinition>,
    rng: R,
}

impl<R: Rng> TileBag<R> {
    pub fn standard(rng: R) -> Self {
        let tiles = STANDARD_DISTRIBUTION
            .iter()
            .map(|&(letter, value, count)| TileDefinition::new(letter, value, count))
            .collect();
        Self::with_distribution(tiles, rng)
    }

    /// Builds a bag from an arbitrary table. Remaining counts are taken as
    /// given but clamped to the original count.
    pub fn with_distribution(mut tiles: Vec<TileDefinition>, rng: R) -> Self {
        for tile in tiles.iter_mut() {
            tile.remaining_count = tile.remaining_count.min(tile.original_count);
        }
        Self { tiles, rng }
    }

    /// Draws one tile, weighted by how many of each letter are left.
    /// Returns `None` without touching the bag when it is empty.
    pub fn draw(&mut self) -> Option<char> {
        let total = self.remaining_total();
        if total == 0 {
            return None;
        }

        let mut pick = self.rng.gen_range(0..total);
        for tile in self.tiles.iter_mut() {
            if pick < tile.remaining_count {
                tile.remaining_count -= 1;
                return Some(tile.letter);
            }
            pick -= tile.remaining_count;
        }

        // pick < total guarantees a hit above
        None
    }

    pub fn remaining_total(&self) -> u32 {
        self.tiles.iter().map(|t| t.remaining_count).sum()
    }

    pub fn original_total(&self) -> u32 {
        self.tiles.iter().map(|t| t.original_count).sum()
    }

    pub fn remaining_of(&self, letter: char) -> u32 {
        self.definition(letter)
            .map(|t| t.remaining_count)
            .unwrap_or(0)
    }

    pub fn value_of(&self, letter: char) -> Option<u32> {
        self.definition(letter).map(|t| t.value)
    }

    pub fn definition(&self, letter: char) -> Option<&TileDefinition> {
        self.tiles.iter().find(|t| t.letter == letter)
    }

    pub fn definitions(&self) -> &[TileDefinition] {
        &self.tiles
    }

    pub fn is_empty(&self) -> bool {
        self.remaining_total() == 0
    }

    pub fn reset(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.remaining_count = tile.original_count;
        }
    }
}

impl<R: Rng> fmt::Display for TileBag<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tiles left:", self.remaining_total())?;
        for tile in self.tiles.iter().filter(|t| t.remaining_count > 0) {
            write!(f, " {}x{}", tile.letter, tile.remaining_count)?;
        }
        Ok(())
    }
}
