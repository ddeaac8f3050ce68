//! The accepted output of generation.

use crate::dictionary::Dictionary;
use crate::grid::{Bounds, Grid, Placement, Position};
use crate::letters::LetterCounts;
use crate::rng::SeededRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated word wheel crossword.
///
/// Placements are normalised so the top-left occupied cell is (0, 0);
/// `width` and `height` are the extent of the occupied area. The first
/// placement is the base word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub level: u32,
    pub base_word: String,
    pub placements: Vec<Placement>,
    pub width: usize,
    pub height: usize,
    /// Letters offered to the player, in display order.
    pub wheel: Vec<char>,
}

impl Puzzle {
    /// Normalise raw layout coordinates and compute dimensions.
    pub fn from_layout(level: u32, base_word: String, placements: Vec<Placement>, wheel: Vec<char>) -> Self {
        let (placements, width, height) = match Bounds::of(&placements) {
            Some(bounds) => {
                let shifted = placements
                    .iter()
                    .map(|p| p.shifted(bounds.min.row, bounds.min.col))
                    .collect();
                (shifted, bounds.width(), bounds.height())
            }
            None => (placements, 0, 0),
        };

        Self {
            level,
            base_word,
            placements,
            width,
            height,
            wheel,
        }
    }

    /// Rebuild the cell map. Later placements win on (invalid) conflicts.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::new();
        for placement in &self.placements {
            grid.place(placement);
        }
        grid
    }

    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.placements
            .iter()
            .flat_map(|p| p.cells())
            .find(|&(cell, _)| cell == pos)
            .map(|(_, ch)| ch)
    }

    /// Placed words in placement order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(|p| p.word.as_str())
    }

    /// The placement spelling `word`, case-insensitively.
    pub fn placement_for(&self, word: &str) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|p| p.word.eq_ignore_ascii_case(word.trim()))
    }

    pub fn wheel_counts(&self) -> LetterCounts {
        LetterCounts::from_letters(&self.wheel)
    }

    /// Whether `word` is a valid extra find: a dictionary word spelled from
    /// the wheel that is not one of the grid's words.
    pub fn is_bonus_word(&self, dictionary: &Dictionary, word: &str) -> bool {
        let word = word.trim().to_ascii_uppercase();
        word.len() >= 3
            && self.placement_for(&word).is_none()
            && self.wheel_counts().can_form(&word)
            && dictionary.is_valid_word(&word)
    }

    /// Reorder the wheel letters.
    ///
    /// Pass [`SeededRng::from_entropy`] for a cosmetic reshuffle.
    pub fn reshuffle_wheel(&mut self, rng: &mut SeededRng) {
        rng.shuffle(&mut self.wheel);
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid();
        for row in 0..self.height as i32 {
            let line: Vec<String> = (0..self.width as i32)
                .map(|col| grid.get(Position::new(row, col)).unwrap_or('.').to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let wheel: Vec<String> = self.wheel.iter().map(|c| c.to_string()).collect();
        write!(f, "\nWheel: {}", wheel.join(" "))
    }
}
