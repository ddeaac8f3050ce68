use std::sync::Arc;
use wordwheel_core::{
    Dictionary, DictionarySources, Generator, GeneratorConfig, Orientation, Placement, Position, Puzzle, SeededRng,
    Validator, WordSource,
};

uniffi::setup_scaffolding!();

/// Direction a word runs on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum WordDirection {
    Across,
    Down,
}

impl From<Orientation> for WordDirection {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Horizontal => WordDirection::Across,
            Orientation::Vertical => WordDirection::Down,
        }
    }
}

impl From<WordDirection> for Orientation {
    fn from(d: WordDirection) -> Self {
        match d {
            WordDirection::Across => Orientation::Horizontal,
            WordDirection::Down => Orientation::Vertical,
        }
    }
}

/// A placed word for UI rendering
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct WordPlacement {
    /// Uppercase word
    pub word: String,
    pub direction: WordDirection,
    /// Row of the first letter (0 = top)
    pub row: u32,
    /// Column of the first letter (0 = left)
    pub col: u32,
}

/// A generated puzzle
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct PuzzleData {
    pub level: u32,
    pub base_word: String,
    /// The base word comes first
    pub placements: Vec<WordPlacement>,
    pub width: u32,
    pub height: u32,
    /// One-letter strings, in display order
    pub wheel: Vec<String>,
}

impl TryFrom<&Puzzle> for PuzzleData {
    type Error = String;

    fn try_from(puzzle: &Puzzle) -> Result<Self, Self::Error> {
        let placements = puzzle
            .placements
            .iter()
            .map(|p| {
                Ok(WordPlacement {
                    word: p.word.clone(),
                    direction: p.orientation.into(),
                    row: to_u32(p.start.row, "row")?,
                    col: to_u32(p.start.col, "column")?,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self {
            level: puzzle.level,
            base_word: puzzle.base_word.clone(),
            placements,
            width: to_u32(puzzle.width, "width")?,
            height: to_u32(puzzle.height, "height")?,
            wheel: puzzle.wheel.iter().map(|c| c.to_string()).collect(),
        })
    }
}

impl TryFrom<PuzzleData> for Puzzle {
    type Error = String;

    fn try_from(data: PuzzleData) -> Result<Self, Self::Error> {
        let placements = data
            .placements
            .into_iter()
            .map(|p| {
                let start = Position::new(to_i32(p.row, "row")?, to_i32(p.col, "column")?);
                Ok(Placement::new(p.word.to_ascii_uppercase(), p.direction.into(), start))
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self {
            level: data.level,
            base_word: data.base_word.to_ascii_uppercase(),
            placements,
            width: to_usize(data.width, "width")?,
            height: to_usize(data.height, "height")?,
            wheel: wheel_letters(&data.wheel)?,
        })
    }
}

/// Outcome of checking a puzzle
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum PuzzleCheck {
    Valid,
    Invalid { reason: String },
}

fn to_u32<T>(value: T, what: &str) -> Result<u32, String>
where
    T: Copy + std::fmt::Display + TryInto<u32>,
{
    value.try_into().map_err(|_| format!("{what} {value} out of range"))
}

fn to_i32(value: u32, what: &str) -> Result<i32, String> {
    i32::try_from(value).map_err(|_| format!("{what} {value} out of range"))
}

fn to_usize(value: u32, what: &str) -> Result<usize, String> {
    usize::try_from(value).map_err(|_| format!("{what} {value} out of range"))
}

/// Turn one-letter strings into uppercase wheel letters. Every entry must
/// be exactly one ASCII letter once trimmed.
fn wheel_letters(strings: &[String]) -> Result<Vec<char>, String> {
    strings
        .iter()
        .map(|s| {
            let mut chars = s.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
                _ => Err(format!("wheel entry {s:?} is not a single letter")),
            }
        })
        .collect()
}

/// Word wheel engine for mobile platforms.
///
/// Holds the loaded dictionary; puzzles are plain records passed back and
/// forth, so one instance can serve any number of games.
#[derive(uniffi::Object)]
pub struct WordWheel {
    dictionary: Dictionary,
    config: GeneratorConfig,
}

#[uniffi::export]
impl WordWheel {
    /// Create an engine backed by the compiled-in word lists
    #[uniffi::constructor]
    pub fn new_embedded() -> Arc<Self> {
        Arc::new(Self {
            dictionary: Dictionary::embedded(),
            config: GeneratorConfig::default(),
        })
    }

    /// Create an engine from word-list files bundled by the host app.
    /// Missing or unreadable files fall back to the compiled-in lists.
    #[uniffi::constructor]
    pub fn with_paths(validation_path: String, curated_path: String, base_words_path: String) -> Arc<Self> {
        let sources = DictionarySources {
            validation: vec![WordSource::file(validation_path)],
            curated: vec![WordSource::file(curated_path)],
            base_words: vec![WordSource::file(base_words_path)],
        };
        Arc::new(Self {
            dictionary: Dictionary::load(&sources),
            config: GeneratorConfig::default(),
        })
    }

    /// Generate the puzzle for a level. Without a seed the level number is used.
    pub fn generate_puzzle(&self, level: u32, seed: Option<u64>) -> Option<PuzzleData> {
        Generator::with_config(&self.dictionary, self.config.clone())
            .generate(level, seed)
            .and_then(|puzzle| PuzzleData::try_from(&puzzle).ok())
    }

    pub fn validate_puzzle(&self, puzzle: PuzzleData) -> bool {
        matches!(self.check_puzzle(puzzle), PuzzleCheck::Valid)
    }

    /// Validate with the reason for the first failed check
    pub fn check_puzzle(&self, puzzle: PuzzleData) -> PuzzleCheck {
        let puzzle = match Puzzle::try_from(puzzle) {
            Ok(puzzle) => puzzle,
            Err(reason) => return PuzzleCheck::Invalid { reason },
        };
        match Validator::with_config(&self.dictionary, self.config.clone()).check(&puzzle) {
            Ok(()) => PuzzleCheck::Valid,
            Err(issue) => PuzzleCheck::Invalid {
                reason: issue.to_string(),
            },
        }
    }

    pub fn is_valid_word(&self, word: String) -> bool {
        self.dictionary.is_valid_word(&word)
    }

    /// Whether `word` can be spelled from `letters`, each letter used once.
    /// False when any entry of `letters` is not a single letter.
    pub fn can_form_word(&self, word: String, letters: Vec<String>) -> bool {
        wheel_letters(&letters).is_ok_and(|letters| self.dictionary.can_form_word(&word, &letters))
    }

    /// Whether `word` is an extra find for this puzzle. Malformed puzzles have none.
    pub fn is_bonus_word(&self, puzzle: PuzzleData, word: String) -> bool {
        Puzzle::try_from(puzzle).is_ok_and(|puzzle| puzzle.is_bonus_word(&self.dictionary, &word))
    }

    /// Curated words spellable from `letters`, shortest first
    pub fn find_words(&self, letters: Vec<String>, min_length: u32) -> Vec<String> {
        match (wheel_letters(&letters), usize::try_from(min_length)) {
            (Ok(letters), Ok(min_length)) => self.dictionary.find_words(&letters, min_length, None),
            _ => Vec::new(),
        }
    }

    /// Wheel letters in a fresh random order (not reproducible)
    pub fn shuffled_wheel(&self, wheel: Vec<String>) -> Vec<String> {
        let mut wheel = wheel;
        SeededRng::from_entropy().shuffle(&mut wheel);
        wheel
    }

    pub fn valid_word_count(&self) -> u64 {
        self.dictionary.valid_word_count() as u64
    }
}

/// Serialize a puzzle for saving. Empty when the record cannot be converted.
#[uniffi::export]
pub fn puzzle_to_json(puzzle: PuzzleData) -> String {
    Puzzle::try_from(puzzle)
        .ok()
        .and_then(|puzzle| serde_json::to_string(&puzzle).ok())
        .unwrap_or_default()
}

/// Deserialize a saved puzzle
#[uniffi::export]
pub fn puzzle_from_json(json: String) -> Option<PuzzleData> {
    let puzzle: Puzzle = serde_json::from_str(&json).ok()?;
    PuzzleData::try_from(&puzzle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_validate() {
        let engine = WordWheel::new_embedded();
        let puzzle = engine.generate_puzzle(1, None).unwrap();
        assert_eq!(puzzle.base_word.len(), 6);
        assert_eq!(puzzle.placements[0].word, puzzle.base_word);
        assert_eq!(puzzle.placements[0].direction, WordDirection::Across);
        assert!(engine.validate_puzzle(puzzle.clone()));
        assert_eq!(engine.check_puzzle(puzzle), PuzzleCheck::Valid);
    }

    #[test]
    fn test_seeded_generation_repeats() {
        let engine = WordWheel::new_embedded();
        assert_eq!(engine.generate_puzzle(6, Some(12345)), engine.generate_puzzle(6, Some(12345)));
    }

    #[test]
    fn test_invalid_puzzle_reason() {
        let engine = WordWheel::new_embedded();
        let mut puzzle = engine.generate_puzzle(3, None).unwrap();
        puzzle.wheel.push("Q".to_string());
        puzzle.wheel.push("Z".to_string());
        match engine.check_puzzle(puzzle) {
            PuzzleCheck::Invalid { reason } => assert!(reason.contains("wheel")),
            PuzzleCheck::Valid => panic!("oversized wheel accepted"),
        }
    }

    #[test]
    fn test_malformed_wheel_entries_rejected() {
        let engine = WordWheel::new_embedded();
        let puzzle = engine.generate_puzzle(1, None).unwrap();

        let mut blank = puzzle.clone();
        blank.wheel.push(String::new());
        assert!(matches!(engine.check_puzzle(blank.clone()), PuzzleCheck::Invalid { .. }));
        assert!(!engine.validate_puzzle(blank.clone()));
        assert_eq!(puzzle_to_json(blank), "");

        let mut doubled = puzzle.clone();
        doubled.wheel[0] = format!("{}X", doubled.wheel[0]);
        match engine.check_puzzle(doubled) {
            PuzzleCheck::Invalid { reason } => assert!(reason.contains("single letter")),
            PuzzleCheck::Valid => panic!("multi-letter wheel entry accepted"),
        }

        let mut digit = puzzle;
        digit.wheel[0] = "7".to_string();
        assert!(!engine.validate_puzzle(digit));
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let engine = WordWheel::new_embedded();
        let puzzle = engine.generate_puzzle(1, None).unwrap();
        let base = puzzle.base_word.clone();

        let mut far = puzzle.clone();
        far.placements[0].row = u32::MAX;
        match engine.check_puzzle(far.clone()) {
            PuzzleCheck::Invalid { reason } => assert!(reason.contains("out of range")),
            PuzzleCheck::Valid => panic!("wrapped row accepted"),
        }
        assert!(!engine.is_bonus_word(far, base));

        let mut edge = puzzle;
        edge.placements[0].col = i32::MAX as u32 + 1;
        assert!(!engine.validate_puzzle(edge));
    }

    #[test]
    fn test_word_checks() {
        let engine = WordWheel::new_embedded();
        assert!(engine.is_valid_word("planet".to_string()));
        assert!(engine.is_valid_word("PLANET".to_string()));

        let letters: Vec<String> = "SPRING".chars().map(|c| c.to_string()).collect();
        assert!(engine.can_form_word("spin".to_string(), letters.clone()));
        assert!(!engine.can_form_word("singing".to_string(), letters.clone()));
        assert!(engine.find_words(letters.clone(), 3).iter().all(|w| w.len() >= 3));

        let mut blank = letters;
        blank.push(String::new());
        assert!(!engine.can_form_word("spin".to_string(), blank.clone()));
        assert!(engine.find_words(blank, 3).is_empty());
    }

    #[test]
    fn test_bonus_word_excludes_placed() {
        let engine = WordWheel::new_embedded();
        let puzzle = engine.generate_puzzle(1, None).unwrap();
        let base = puzzle.base_word.clone();
        assert!(!engine.is_bonus_word(puzzle, base));
    }

    #[test]
    fn test_shuffled_wheel_keeps_letters() {
        let engine = WordWheel::new_embedded();
        let wheel: Vec<String> = "PLANET".chars().map(|c| c.to_string()).collect();
        let mut shuffled = engine.shuffled_wheel(wheel.clone());
        let mut sorted = wheel;
        shuffled.sort();
        sorted.sort();
        assert_eq!(shuffled, sorted);
    }

    #[test]
    fn test_json_round_trip() {
        let engine = WordWheel::new_embedded();
        let puzzle = engine.generate_puzzle(2, None).unwrap();
        let json = puzzle_to_json(puzzle.clone());
        assert_eq!(puzzle_from_json(json), Some(puzzle));
        assert_eq!(puzzle_from_json("not json".to_string()), None);
    }

    #[test]
    fn test_missing_paths_fall_back() {
        let engine = WordWheel::with_paths(
            "/nonexistent/validation.txt".to_string(),
            "/nonexistent/curated.txt".to_string(),
            "/nonexistent/base_words.json".to_string(),
        );
        assert_eq!(engine.valid_word_count(), WordWheel::new_embedded().valid_word_count());
        assert!(engine.generate_puzzle(1, None).is_some());
    }
}
