//! Word wheel crossword engine.
//!
//! A puzzle is a small crossword grown around a six-letter base word plus
//! a "wheel": the letters from which every word on the grid can be spelled.
//! Generation is deterministic for a given level and seed.
//!
//! ```no_run
//! use wordwheel_core::{Dictionary, Generator, Validator};
//!
//! let dictionary = Dictionary::embedded();
//! let puzzle = Generator::new(&dictionary).generate(1, None).unwrap();
//! assert!(Validator::new(&dictionary).validate(&puzzle));
//! println!("{puzzle}");
//! ```

pub mod dictionary;
pub mod generator;
pub mod grid;
pub mod letters;
pub mod puzzle;
pub mod rng;
pub mod validator;
pub mod wheel;

pub use dictionary::{can_form_word, Dictionary, DictionarySources, ListKind, LoadError, WordSource};
pub use generator::{Generator, GeneratorConfig};
pub use grid::{Bounds, Grid, Orientation, Placement, Position};
pub use letters::LetterCounts;
pub use puzzle::Puzzle;
pub use rng::SeededRng;
pub use validator::{validate_puzzle, ValidationIssue, Validator};
pub use wheel::{derive_wheel, required_letters};

/// Generate a puzzle for `level` with the default configuration.
pub fn generate_puzzle(dictionary: &Dictionary, level: u32, seed: Option<u64>) -> Option<Puzzle> {
    Generator::new(dictionary).generate(level, seed)
}
