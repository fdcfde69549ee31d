use super::tiles::TileBag;
use rand::Rng;
use std::fmt;

pub const DEFAULT_RACK_SIZE: usize = 7;

/// The player's hand. Duplicates are allowed and order is draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    letters: Vec<char>,
    capacity: usize,
}

impl Default for Rack {
    fn default() -> Self {
        Self::new(DEFAULT_RACK_SIZE)
    }
}

impl Rack {
    pub fn new(capacity: usize) -> Self {
        Self {
            letters: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Draws until the rack holds `target` tiles (never more than its
    /// capacity) or the bag runs dry. Returns how many tiles were drawn.
    pub fn fill_to<R: Rng>(&mut self, target: usize, bag: &mut TileBag<R>) -> usize {
        let target = target.min(self.capacity);
        let wanted = target.saturating_sub(self.letters.len());

        let mut drawn = 0;
        for _ in 0..wanted {
            match bag.draw() {
                Some(letter) => {
                    self.letters.push(letter);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Removes the first occurrence of `letter`.
    pub fn remove(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(index) => {
                self.letters.remove(index);
                true
            }
            None => false,
        }
    }

    /// Puts a tile back at the end of the rack. Refuses when full.
    pub fn push(&mut self, letter: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.letters.push(letter);
        true
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.letters.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "[{}]", letter)?;
        }
        Ok(())
    }
}
