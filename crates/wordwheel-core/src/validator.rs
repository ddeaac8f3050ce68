//! Independent re-check of a finished puzzle.
//!
//! Nothing here trusts the generator: the grid is rebuilt from the
//! placements, words are looked up in the validation list rather than the
//! curated one, and the wheel is tested against both the placed words and
//! every letter run actually visible on the grid.

use crate::dictionary::Dictionary;
use crate::generator::GeneratorConfig;
use crate::grid::{Grid, Orientation, Position};
use crate::letters::LetterCounts;
use crate::puzzle::Puzzle;
use thiserror::Error;

/// First check a puzzle failed, in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("base word {word} has {actual} letters, expected {expected}")]
    BaseWordLength {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("grid is {width}x{height}, limit is {max} per side")]
    GridTooLarge { width: usize, height: usize, max: usize },

    #[error("wheel has {actual} letters, allowed {min}..={max}")]
    WheelSize { actual: usize, min: usize, max: usize },

    #[error("puzzle has {actual} words, allowed {min}..={max}")]
    WordCount { actual: usize, min: usize, max: usize },

    #[error("{word} has {length} letters, allowed {min}..={max}")]
    WordLength {
        word: String,
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("{word} is not in the dictionary")]
    UnknownWord { word: String },

    #[error("{word} runs outside the {width}x{height} grid at {position}")]
    OutOfBounds {
        word: String,
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("placements disagree at {position}")]
    Conflict { position: Position },

    #[error("wheel cannot spell the {orientation} run {run} at {start}")]
    RunNotCoverable {
        run: String,
        orientation: Orientation,
        start: Position,
    },

    #[error("{word} cannot be spelled from the wheel")]
    NotFormable { word: String },
}

/// Puzzle validator. Uses the same bounds as the generator.
pub struct Validator<'d> {
    dictionary: &'d Dictionary,
    config: GeneratorConfig,
}

impl<'d> Validator<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self::with_config(dictionary, GeneratorConfig::default())
    }

    pub fn with_config(dictionary: &'d Dictionary, config: GeneratorConfig) -> Self {
        Self { dictionary, config }
    }

    /// Whether every check passes.
    pub fn validate(&self, puzzle: &Puzzle) -> bool {
        self.check(puzzle).is_ok()
    }

    /// Run every check in order, stopping at the first failure.
    pub fn check(&self, puzzle: &Puzzle) -> Result<(), ValidationIssue> {
        self.check_base_word(puzzle)?;
        self.check_dimensions(puzzle)?;
        self.check_wheel_size(puzzle)?;
        self.check_word_count(puzzle)?;
        self.check_words(puzzle)?;
        let grid = self.rebuild_grid(puzzle)?;
        self.check_runs(puzzle, &grid)?;
        self.check_formable(puzzle)
    }

    pub fn check_base_word(&self, puzzle: &Puzzle) -> Result<(), ValidationIssue> {
        let actual = puzzle.base_word.chars().count();
        if actual != self.config.base_length {
            return Err(ValidationIssue::BaseWordLength {
                word: puzzle.base_word.clone(),
                expected: self.config.base_length,
                actual,
            });
        }
        Ok(())
    }

    pub fn check_dimensions(&self, puzzle: &Puzzle) -> Result<(), ValidationIssue> {
        let max = self.config.max_grid_size;
        if puzzle.width > max || puzzle.height > max {
            return Err(ValidationIssue::GridTooLarge {
                width: puzzle.width,
                height: puzzle.height,
                max,
            });
        }
        Ok(())
    }

    pub fn check_wheel_size(&self, puzzle: &Puzzle) -> Result<(), ValidationIssue> {
        let (min, max) = (self.config.min_wheel_letters, self.config.max_wheel_letters);
        let actual = puzzle.wheel.len();
        if actual < min || actual > max {
            return Err(ValidationIssue::WheelSize { actual, min, max });
        }
        Ok(())
    }

    pub fn check_word_count(&self, puzzle: &Puzzle) -> Result<(), ValidationIssue> {
        let (min, max) = (self.config.min_words, self.config.max_words);
        let actual = puzzle.placements.len();
        if actual < min || actual > max {
            return Err(ValidationIssue::WordCount { actual, min, max });
        }
        Ok(())
    }

    /// Lengths within bounds and every word in the validation list.
    pub fn check_words(&self, puzzle: &Puzzle) -> Result<(), ValidationIssue> {
        let (min, max) = (self.config.min_word_length, self.config.max_word_length);
        for placement in &puzzle.placements {
            let length = placement.word.chars().count();
            if length < min || length > max {
                return Err(ValidationIssue::WordLength {
                    word: placement.word.clone(),
                    length,
                    min,
                    max,
                });
            }
            if !self.dictionary.is_valid_word(&placement.word) {
                return Err(ValidationIssue::UnknownWord {
                    word: placement.word.clone(),
                });
            }
        }
        Ok(())
    }

    /// Fresh grid from the placements; shared cells must agree and every
    /// cell must lie inside the declared dimensions.
    pub fn rebuild_grid(&self, puzzle: &Puzzle) -> Result<Grid, ValidationIssue> {
        let mut grid = Grid::new();
        for placement in &puzzle.placements {
            for (position, _) in placement.cells() {
                let inside = position.row >= 0
                    && position.col >= 0
                    && (position.row as usize) < puzzle.height
                    && (position.col as usize) < puzzle.width;
                if !inside {
                    return Err(ValidationIssue::OutOfBounds {
                        word: placement.word.clone(),
                        position,
                        width: puzzle.width,
                        height: puzzle.height,
                    });
                }
            }
            grid.try_place(placement)
                .map_err(|position| ValidationIssue::Conflict { position })?;
        }
        Ok(grid)
    }

    /// Every run of letters visible on the grid, each cell counted once per
    /// run, must be coverable by the wheel. This catches words nobody
    /// placed, such as two placements fused end to end.
    pub fn check_runs(&self, puzzle: &Puzzle, grid: &Grid) -> Result<(), ValidationIssue> {
        let wheel = puzzle.wheel_counts();
        for (orientation, start, run) in grid.runs() {
            let fits = LetterCounts::from_word(&run).is_some_and(|counts| counts.is_subset_of(&wheel));
            if !fits {
                return Err(ValidationIssue::RunNotCoverable {
                    run,
                    orientation,
                    start,
                });
            }
        }
        Ok(())
    }

    /// Each placed word on its own is a sub-multiset of the wheel.
    pub fn check_formable(&self, puzzle: &Puzzle) -> Result<(), ValidationIssue> {
        let wheel = puzzle.wheel_counts();
        for word in puzzle.words() {
            if !wheel.can_form(&word.to_ascii_uppercase()) {
                return Err(ValidationIssue::NotFormable { word: word.to_string() });
            }
        }
        Ok(())
    }
}

/// Validate with the default bounds.
pub fn validate_puzzle(dictionary: &Dictionary, puzzle: &Puzzle) -> bool {
    Validator::new(dictionary).validate(puzzle)
}
