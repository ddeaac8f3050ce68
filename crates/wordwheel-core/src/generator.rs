use crate::dictionary::Dictionary;
use crate::grid::{Bounds, Grid, Orientation, Placement, Position};
use crate::letters::LetterCounts;
use crate::puzzle::Puzzle;
use crate::rng::SeededRng;
use crate::validator::Validator;
use crate::wheel;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Configuration for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Length of the base word
    pub base_length: usize,
    /// Shortest word that may be placed
    pub min_word_length: usize,
    /// Longest word that may be placed
    pub max_word_length: usize,
    /// Fewest placements (including the base word) in an accepted puzzle
    pub min_words: usize,
    /// Most placements in an accepted puzzle
    pub max_words: usize,
    /// Fewest letters on the wheel
    pub min_wheel_letters: usize,
    /// Most letters on the wheel
    pub max_wheel_letters: usize,
    /// Largest allowed width or height of the grid
    pub max_grid_size: usize,
    /// Base words to try before giving up
    pub max_attempts: usize,
    /// Full sweeps of the horizontal pass
    pub max_sweeps: usize,
    /// Row the base word is laid on before normalisation
    pub anchor_row: i32,
    /// Tie-break order for word lengths; earlier is preferred
    pub length_preference: Vec<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_length: 6,
            min_word_length: 3,
            max_word_length: 6,
            min_words: 6,
            max_words: 10,
            min_wheel_letters: 5,
            max_wheel_letters: 6,
            max_grid_size: 10,
            max_attempts: 50,
            max_sweeps: 5,
            anchor_row: 0,
            length_preference: vec![4, 5, 3, 6],
        }
    }
}

impl GeneratorConfig {
    /// Placements to aim for on `level`: one more every four levels,
    /// clamped to `[min_words, max_words]`.
    pub fn target_word_count(&self, level: u32) -> usize {
        let bonus = (level.max(1) as usize - 1) / 4;
        (self.min_words + bonus).clamp(self.min_words, self.max_words.max(self.min_words))
    }

    /// Candidate lengths, least-placed first, ties broken by `length_preference`.
    ///
    /// Only lengths up to `longest` (the longest curated word) are listed.
    fn length_priority(&self, placed: &HashMap<usize, usize>, longest: usize) -> Vec<usize> {
        let rank = |len: usize| {
            self.length_preference
                .iter()
                .position(|&l| l == len)
                .unwrap_or(self.length_preference.len() + len)
        };
        let mut lengths: Vec<usize> = (self.min_word_length..=self.max_word_length.min(longest)).collect();
        lengths.sort_by_key(|&len| (placed.get(&len).copied().unwrap_or(0), rank(len)));
        lengths
    }
}

/// Word wheel puzzle generator
///
/// Borrows a read-only [`Dictionary`]; every call to [`generate`](Self::generate)
/// owns its random state, so one generator can serve many requests.
pub struct Generator<'d> {
    dictionary: &'d Dictionary,
    config: GeneratorConfig,
}

impl<'d> Generator<'d> {
    /// Create a new generator with default configuration
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self::with_config(dictionary, GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(dictionary: &'d Dictionary, config: GeneratorConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a puzzle for `level`.
    ///
    /// With no seed the level number seeds the stream, so a level always
    /// produces the same puzzle. Returns `None` once `max_attempts` base
    /// words have been tried without an acceptable layout.
    pub fn generate(&self, level: u32, seed: Option<u64>) -> Option<Puzzle> {
        let seed = seed.unwrap_or(level as u64);
        let validator = Validator::with_config(self.dictionary, self.config.clone());
        let mut tried: HashSet<String> = HashSet::new();

        for attempt in 0..self.config.max_attempts {
            let mut rng = SeededRng::for_attempt(seed, attempt);
            let base_word = self.dictionary.random_base_word(&tried, &mut rng);
            tried.insert(base_word.clone());

            let Some(puzzle) = self.generate_from_base(level, &base_word, &mut rng) else {
                continue;
            };

            match validator.check(&puzzle) {
                Ok(()) => {
                    log::debug!(
                        "level {} attempt {}: accepted {} with {} words",
                        level,
                        attempt,
                        base_word,
                        puzzle.placements.len()
                    );
                    return Some(puzzle);
                }
                Err(issue) => {
                    log::debug!("level {} attempt {}: {} rejected: {}", level, attempt, base_word, issue);
                }
            }
        }

        log::info!(
            "no puzzle for level {} (seed {}) after {} attempts",
            level,
            seed,
            self.config.max_attempts
        );
        None
    }

    /// Grow a layout around `base_word` and derive its wheel.
    ///
    /// Does not run the validator. `None` if the word count lands outside
    /// bounds or the wheel would be too large.
    pub fn generate_from_base(&self, level: u32, base_word: &str, rng: &mut SeededRng) -> Option<Puzzle> {
        let base_word = base_word.trim().to_ascii_uppercase();
        if base_word.len() != self.config.base_length {
            return None;
        }
        let base_letters = LetterCounts::from_word(&base_word)?;

        let mut layout = Layout::new(self.dictionary, &self.config, base_letters);
        layout.place(Placement::new(
            base_word.clone(),
            Orientation::Horizontal,
            Position::new(self.config.anchor_row, 0),
        ));

        let target = self.config.target_word_count(level);
        layout.cross_base_word(target, rng);
        layout.cross_vertical_words(target, rng);

        let count = layout.placements.len();
        if count < self.config.min_words || count > self.config.max_words {
            log::debug!("{}: placed {} words, need {}..={}", base_word, count, self.config.min_words, self.config.max_words);
            return None;
        }

        let wheel = wheel::derive_wheel(&layout.placements, &self.config, rng)?;
        Some(Puzzle::from_layout(level, base_word, layout.placements, wheel))
    }
}

/// State of one generation attempt. Discarded wholesale on failure.
struct Layout<'a> {
    dictionary: &'a Dictionary,
    config: &'a GeneratorConfig,
    base_letters: LetterCounts,
    grid: Grid,
    placements: Vec<Placement>,
    placed_words: HashSet<String>,
    length_counts: HashMap<usize, usize>,
}

impl<'a> Layout<'a> {
    fn new(dictionary: &'a Dictionary, config: &'a GeneratorConfig, base_letters: LetterCounts) -> Self {
        Self {
            dictionary,
            config,
            base_letters,
            grid: Grid::new(),
            placements: Vec::new(),
            placed_words: HashSet::new(),
            length_counts: HashMap::new(),
        }
    }

    fn place(&mut self, placement: Placement) {
        log::trace!("place {} {} at {}", placement.word, placement.orientation, placement.start);
        self.grid.place(&placement);
        *self.length_counts.entry(placement.len()).or_insert(0) += 1;
        self.placed_words.insert(placement.word.clone());
        self.placements.push(placement);
    }

    /// First pass: one vertical word through each letter of the base word.
    fn cross_base_word(&mut self, target: usize, rng: &mut SeededRng) {
        let Some(base) = self.placements.first().cloned() else {
            return;
        };
        for (i, ch) in base.word.chars().enumerate() {
            if self.placements.len() >= target {
                break;
            }
            self.try_cross(base.position_at(i), ch, Orientation::Vertical, rng);
        }
    }

    /// Second pass: horizontal words through the letters of vertical words.
    fn cross_vertical_words(&mut self, target: usize, rng: &mut SeededRng) {
        for _ in 0..self.config.max_sweeps {
            if self.placements.len() >= target {
                return;
            }

            let verticals: Vec<Placement> = self
                .placements
                .iter()
                .filter(|p| p.orientation == Orientation::Vertical)
                .cloned()
                .collect();

            let mut placed_any = false;
            for vertical in &verticals {
                for (i, ch) in vertical.word.chars().enumerate() {
                    if self.placements.len() >= target {
                        break;
                    }
                    let pos = vertical.position_at(i);
                    let already_crossed = self
                        .placements
                        .iter()
                        .any(|p| p.orientation == Orientation::Horizontal && p.contains(pos));
                    if already_crossed {
                        continue;
                    }
                    if self.try_cross(pos, ch, Orientation::Horizontal, rng) {
                        placed_any = true;
                    }
                }
            }

            // Nothing changed, so another sweep would find nothing either.
            if !placed_any {
                return;
            }
        }
    }

    /// Place one `orientation` word whose letter `ch` lands on `pos`.
    fn try_cross(&mut self, pos: Position, ch: char, orientation: Orientation, rng: &mut SeededRng) -> bool {
        let longest = self.dictionary.longest_word_length();
        for length in self.config.length_priority(&self.length_counts, longest) {
            let mut candidates: Vec<&'a String> = self
                .dictionary
                .words_of_length(length)
                .iter()
                .filter(|word| {
                    word.contains(ch)
                        && self.base_letters.can_form(word)
                        && !self.placed_words.contains(word.as_str())
                })
                .collect();
            rng.shuffle(&mut candidates);

            for word in candidates {
                let offsets = word.char_indices().filter(|&(_, c)| c == ch).map(|(i, _)| i);
                for offset in offsets {
                    let placement = Placement::new(word.clone(), orientation, pos.step(orientation, -(offset as i32)));
                    if self.grid.can_place_word(&placement) && self.fits(&placement) {
                        self.place(placement);
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Whether the layout stays within `max_grid_size` with `placement` added.
    fn fits(&self, placement: &Placement) -> bool {
        match Bounds::of(self.placements.iter().chain(std::iter::once(placement))) {
            Some(bounds) => {
                bounds.width() <= self.config.max_grid_size && bounds.height() <= self.config.max_grid_size
            }
            None => true,
        }
    }
}
