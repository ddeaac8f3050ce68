//! Dictionary index: existence checks, formability, and candidate supply.
//!
//! Built once from [`DictionarySources`] and read-only afterwards, so a
//! single `Dictionary` can be shared by reference across generators,
//! validators and threads.

pub mod source;

use crate::letters::LetterCounts;
use crate::rng::SeededRng;
use std::collections::{HashMap, HashSet};

pub use source::{DictionarySources, ListKind, LoadError, WordSource};

/// Base word used when no 6-letter base word is available at all.
pub const DEFAULT_BASE_WORD: &str = "PLANET";

/// Length of the words the base-word table is filtered to.
pub const BASE_WORD_LENGTH: usize = 6;

/// Word lists indexed for generation and validation.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Every acceptable word, for existence checks.
    valid: HashSet<String>,
    /// Curated words bucketed by length, in source order.
    by_length: HashMap<usize, Vec<String>>,
    /// Length of the longest curated word; 0 when there are none.
    longest: usize,
    /// Seed words for puzzles.
    base_words: Vec<String>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Dictionary {
    /// Build from the compiled-in tables only.
    pub fn embedded() -> Self {
        Self::load(&DictionarySources::embedded())
    }

    /// Build by evaluating each list's fallback chain. Never fails.
    pub fn load(sources: &DictionarySources) -> Self {
        let validation = source::load_chain(&sources.validation, ListKind::Validation);
        let curated = source::load_chain(&sources.curated, ListKind::Curated);
        let base_words = source::load_chain(&sources.base_words, ListKind::BaseWords);
        Self::from_words(validation, curated, base_words)
    }

    /// Build from word lists already in memory.
    ///
    /// Entries are normalised (trimmed, uppercased) and filtered the same
    /// way file sources are; duplicates keep their first position.
    pub fn from_lists<V, C, B>(validation: V, curated: C, base_words: B) -> Self
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Self::from_words(
            clean_list(validation, ListKind::Validation),
            clean_list(curated, ListKind::Curated),
            clean_list(base_words, ListKind::BaseWords),
        )
    }

    fn from_words(validation: Vec<String>, curated: Vec<String>, base_words: Vec<String>) -> Self {
        let valid: HashSet<String> = validation.into_iter().collect();

        let mut by_length: HashMap<usize, Vec<String>> = HashMap::new();
        let mut seen = HashSet::new();
        for word in curated {
            if seen.insert(word.clone()) {
                by_length.entry(word.len()).or_default().push(word);
            }
        }

        let mut seen = HashSet::new();
        let base_words: Vec<String> = base_words
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .collect();

        let longest = by_length.keys().copied().max().unwrap_or(0);

        log::debug!(
            "dictionary ready: {} valid, {} curated, {} base words",
            valid.len(),
            by_length.values().map(Vec::len).sum::<usize>(),
            base_words.len()
        );

        Self {
            valid,
            by_length,
            longest,
            base_words,
        }
    }

    /// Case-insensitive membership in the validation list.
    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = word.trim();
        if word.bytes().any(|b| b.is_ascii_lowercase()) {
            self.valid.contains(&word.to_ascii_uppercase())
        } else {
            self.valid.contains(word)
        }
    }

    /// Curated words of exactly `length` letters; empty if there are none.
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `word` can be spelled from `available`, each letter instance
    /// used at most once. Case-insensitive.
    pub fn can_form_word(&self, word: &str, available: &[char]) -> bool {
        can_form_word(word, available)
    }

    /// Curated words formable from `available`, for each length in
    /// `min_length..=max_length` (default max: `available.len()`).
    ///
    /// Results are grouped by ascending length; within a length they keep
    /// curated-list order. Lengths beyond the longest curated word are
    /// never scanned, so any `max_length` is accepted.
    pub fn find_words(
        &self,
        available: &[char],
        min_length: usize,
        max_length: Option<usize>,
    ) -> Vec<String> {
        let max_length = max_length.unwrap_or(available.len()).min(self.longest);
        let letters = LetterCounts::from_letters(available);
        (min_length..=max_length)
            .flat_map(|len| self.words_of_length(len).iter())
            .filter(|word| letters.can_form(word))
            .cloned()
            .collect()
    }

    /// Length of the longest curated word, 0 for an empty curated list.
    pub fn longest_word_length(&self) -> usize {
        self.longest
    }

    /// Every base word of the standard length, in table order.
    pub fn base_words(&self) -> impl Iterator<Item = &str> {
        self.base_words
            .iter()
            .filter(|w| w.len() == BASE_WORD_LENGTH)
            .map(String::as_str)
    }

    /// Deterministically pick a 6-letter base word not in `excluding`.
    ///
    /// Falls back to the whole 6-letter table once everything has been
    /// excluded, then to [`DEFAULT_BASE_WORD`] if the table is empty.
    pub fn random_base_word(&self, excluding: &HashSet<String>, rng: &mut SeededRng) -> String {
        let fresh: Vec<&str> = self.base_words().filter(|w| !excluding.contains(*w)).collect();
        let pool = if fresh.is_empty() {
            self.base_words().collect()
        } else {
            fresh
        };

        rng.choose(&pool)
            .map(|w| w.to_string())
            .unwrap_or_else(|| DEFAULT_BASE_WORD.to_string())
    }

    /// Number of entries in the validation list.
    pub fn valid_word_count(&self) -> usize {
        self.valid.len()
    }

    /// Number of curated entries across all lengths.
    pub fn curated_word_count(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }
}

fn clean_list<I>(words: I, kind: ListKind) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .filter_map(|w| source::normalize(w.as_ref()))
        .filter(|w| kind.accepts(w))
        .collect()
}

/// Sub-multiset test shared by the dictionary and the validator.
pub fn can_form_word(word: &str, available: &[char]) -> bool {
    let letters = LetterCounts::from_letters(available);
    letters.can_form(&word.to_ascii_uppercase())
}
