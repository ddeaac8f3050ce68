//! Letter multisets over `A..=Z`.

use std::fmt;

/// Per-letter counts for uppercase ASCII letters.
///
/// Characters outside `A..=Z` are not representable; `from_word` reports
/// them by returning `None`, and `can_form` treats such words as unformable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts {
    counts: [u8; 26],
}

impl LetterCounts {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(ch: char) -> Option<usize> {
        if ch.is_ascii_uppercase() {
            Some((ch as u8 - b'A') as usize)
        } else {
            None
        }
    }

    /// Counts for a single uppercase word.
    pub fn from_word(word: &str) -> Option<Self> {
        let mut counts = Self::new();
        for ch in word.chars() {
            if !counts.add(ch) {
                return None;
            }
        }
        Some(counts)
    }

    /// Counts for a bag of letters; non-letters are ignored.
    pub fn from_letters(letters: &[char]) -> Self {
        let mut counts = Self::new();
        for &ch in letters {
            counts.add(ch.to_ascii_uppercase());
        }
        counts
    }

    /// Add one instance of `ch`. Returns false if `ch` is not `A..=Z`.
    pub fn add(&mut self, ch: char) -> bool {
        match Self::slot(ch) {
            Some(i) => {
                self.counts[i] = self.counts[i].saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Remove one instance of `ch`. Returns false if none was left.
    pub fn take(&mut self, ch: char) -> bool {
        match Self::slot(ch) {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn count(&self, ch: char) -> usize {
        Self::slot(ch).map_or(0, |i| self.counts[i] as usize)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.count(ch) > 0
    }

    /// Total number of letters, counting repeats.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Whether `word` is a sub-multiset of these letters.
    ///
    /// Each letter of the word consumes one instance from a scratch copy, so
    /// a doubled letter needs two instances. Stops at the first shortfall.
    pub fn can_form(&self, word: &str) -> bool {
        let mut available = *self;
        word.chars().all(|ch| available.take(ch))
    }

    /// Whether every count in `self` is covered by `other`.
    pub fn is_subset_of(&self, other: &LetterCounts) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| mine <= theirs)
    }

    /// Raise each count to at least the matching count in `other`.
    pub fn max_merge(&mut self, other: &LetterCounts) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine = (*mine).max(*theirs);
        }
    }

    /// Flatten into letters in alphabetical order, repeats adjacent.
    pub fn to_letters(&self) -> Vec<char> {
        let mut letters = Vec::with_capacity(self.len());
        for (i, &count) in self.counts.iter().enumerate() {
            let ch = (b'A' + i as u8) as char;
            letters.extend(std::iter::repeat(ch).take(count as usize));
        }
        letters
    }
}

impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.to_letters() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
