//! Wheel letter derivation.

use crate::generator::GeneratorConfig;
use crate::grid::Placement;
use crate::letters::LetterCounts;
use crate::rng::SeededRng;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest letter multiset from which each placed word can be spelled on
/// its own: the per-letter maximum over the words, not the sum.
pub fn required_letters<'a>(placements: impl IntoIterator<Item = &'a Placement>) -> LetterCounts {
    let mut required = LetterCounts::new();
    for placement in placements {
        if let Some(counts) = LetterCounts::from_word(&placement.word) {
            required.max_merge(&counts);
        }
    }
    required
}

/// Wheel letters for `placements`, shuffled, or `None` if more letters are
/// needed than the wheel can hold.
///
/// Short wheels are padded with random letters not already present.
pub fn derive_wheel(
    placements: &[Placement],
    config: &GeneratorConfig,
    rng: &mut SeededRng,
) -> Option<Vec<char>> {
    let required = required_letters(placements);
    if required.len() > config.max_wheel_letters {
        log::debug!(
            "wheel needs {} letters ({}), limit is {}",
            required.len(),
            required,
            config.max_wheel_letters
        );
        return None;
    }

    let mut letters = required.to_letters();
    let target = config.min_wheel_letters.min(ALPHABET.len());
    while letters.len() < target {
        let ch = ALPHABET[rng.next_usize(ALPHABET.len())] as char;
        if !letters.contains(&ch) {
            letters.push(ch);
        }
    }

    rng.shuffle(&mut letters);
    Some(letters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Orientation, Position};

    fn across(word: &str, row: i32) -> Placement {
        Placement::new(word, Orientation::Horizontal, Position::new(row, 0))
    }

    #[test]
    fn test_required_letters_per_word_max() {
        let placements = [across("TREE", 0), across("RATE", 2), across("TEA", 4)];
        let required = required_letters(&placements);
        assert_eq!(required.to_string(), "AEERT");
    }

    #[test]
    fn test_derive_wheel_exact_fit() {
        let placements = [across("PLANET", 0), across("PLAN", 2), across("NEAT", 4)];
        let config = GeneratorConfig::default();
        let mut wheel = derive_wheel(&placements, &config, &mut SeededRng::new(3)).unwrap();
        wheel.sort();
        assert_eq!(wheel, vec!['A', 'E', 'L', 'N', 'P', 'T']);
    }

    #[test]
    fn test_derive_wheel_pads_short_wheel() {
        let placements = [across("TEA", 0), across("EAT", 2)];
        let config = GeneratorConfig::default();
        let wheel = derive_wheel(&placements, &config, &mut SeededRng::new(11)).unwrap();
        assert_eq!(wheel.len(), config.min_wheel_letters);
        for ch in ['T', 'E', 'A'] {
            assert_eq!(wheel.iter().filter(|&&c| c == ch).count(), 1);
        }
        let mut unique = wheel.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), wheel.len());
    }

    #[test]
    fn test_derive_wheel_rejects_oversized() {
        let placements = [across("PLANET", 0), across("STRIDE", 2)];
        let config = GeneratorConfig::default();
        assert!(derive_wheel(&placements, &config, &mut SeededRng::new(1)).is_none());
    }

    #[test]
    fn test_derive_wheel_is_seeded() {
        let placements = [across("PLANET", 0)];
        let config = GeneratorConfig::default();
        let a = derive_wheel(&placements, &config, &mut SeededRng::new(77));
        let b = derive_wheel(&placements, &config, &mut SeededRng::new(77));
        assert_eq!(a, b);
    }
}
