use std::collections::HashSet;
use wordwheel_core::{
    generate_puzzle, validate_puzzle, Dictionary, Generator, GeneratorConfig, Grid, LetterCounts, Orientation,
    Placement, Position, Puzzle, ValidationIssue, Validator,
};

fn sample_levels(dictionary: &Dictionary) -> Vec<Puzzle> {
    let mut puzzles = Vec::new();
    for level in 1..=24 {
        for seed in [None, Some(1), Some(42), Some(12345)] {
            if let Some(puzzle) = generate_puzzle(dictionary, level, seed) {
                puzzles.push(puzzle);
            }
        }
    }
    puzzles
}

#[test]
fn level_one_end_to_end() {
    let dictionary = Dictionary::embedded();
    let puzzle = generate_puzzle(&dictionary, 1, None).expect("level 1 should generate");

    assert_eq!(puzzle.level, 1);
    assert_eq!(puzzle.base_word.len(), 6);
    assert!((6..=10).contains(&puzzle.placements.len()));
    assert!((5..=6).contains(&puzzle.wheel.len()));
    assert_eq!(puzzle.placements[0].word, puzzle.base_word);
    assert!(validate_puzzle(&dictionary, &puzzle));
}

#[test]
fn same_seed_same_puzzle() {
    let first_dictionary = Dictionary::embedded();
    let second_dictionary = Dictionary::embedded();

    let a = Generator::new(&first_dictionary).generate(6, Some(12345)).unwrap();
    let b = Generator::new(&second_dictionary).generate(6, Some(12345)).unwrap();

    assert_eq!(a.base_word, b.base_word);
    assert_eq!(a.wheel, b.wheel);
    assert_eq!(a, b);
}

#[test]
fn level_number_is_default_seed() {
    let dictionary = Dictionary::embedded();
    let implicit = generate_puzzle(&dictionary, 9, None);
    let explicit = generate_puzzle(&dictionary, 9, Some(9));
    assert_eq!(implicit, explicit);
}

#[test]
fn generated_puzzles_pass_validation() {
    let dictionary = Dictionary::embedded();
    let validator = Validator::new(&dictionary);
    let puzzles = sample_levels(&dictionary);
    assert!(!puzzles.is_empty());

    for puzzle in &puzzles {
        assert_eq!(validator.check(puzzle), Ok(()), "{}", puzzle);
    }
}

#[test]
fn generated_placements_never_collide() {
    let dictionary = Dictionary::embedded();
    for puzzle in sample_levels(&dictionary) {
        let mut grid = Grid::new();
        for placement in &puzzle.placements {
            assert_eq!(grid.try_place(placement), Ok(()), "{}", puzzle);
        }
        let occupied: HashSet<Position> = puzzle.placements.iter().flat_map(|p| p.positions()).collect();
        assert_eq!(occupied.len(), grid.len());
    }
}

#[test]
fn generated_words_spell_from_wheel() {
    let dictionary = Dictionary::embedded();
    for puzzle in sample_levels(&dictionary) {
        let wheel = puzzle.wheel_counts();
        for word in puzzle.words() {
            assert!(wheel.can_form(word), "{} not formable from {:?}", word, puzzle.wheel);
            assert!(dictionary.is_valid_word(word));
        }
        assert!(puzzle.width <= 10 && puzzle.height <= 10);
    }
}

#[test]
fn word_count_grows_with_level() {
    let config = GeneratorConfig::default();
    assert_eq!(config.target_word_count(1), 6);
    assert!(config.target_word_count(40) <= config.max_words);
    assert!(config.target_word_count(40) > config.target_word_count(1));
}

#[test]
fn doubled_letter_needs_two_on_wheel() {
    let one_r = LetterCounts::from_letters(&['E', 'R', 'D', 'S', 'T']);
    assert!(!one_r.can_form("ERRED"));

    let two_r = LetterCounts::from_letters(&['E', 'R', 'D', 'R', 'E']);
    assert!(two_r.can_form("ERRED"));
}

#[test]
fn hand_built_oversized_wheel_is_rejected() {
    let dictionary = Dictionary::from_lists(
        ["planet", "pale", "ant", "tape", "ate", "tap", "strand"],
        Vec::<String>::new(),
        ["planet"],
    );
    let across = |w: &str, r, c| Placement::new(w, Orientation::Horizontal, Position::new(r, c));
    let down = |w: &str, r, c| Placement::new(w, Orientation::Vertical, Position::new(r, c));

    // STRAND along the bottom pushes the letters needed past six.
    let mut puzzle = Puzzle {
        level: 1,
        base_word: "PLANET".to_string(),
        placements: vec![
            across("PLANET", 0, 0),
            down("PALE", 0, 0),
            down("ANT", 0, 2),
            down("TAPE", 0, 5),
            across("ATE", 3, 3),
            down("TAP", 3, 4),
            across("STRAND", 7, 0),
        ],
        width: 6,
        height: 8,
        wheel: vec!['P', 'L', 'A', 'N', 'E', 'T', 'S', 'R', 'D'],
    };
    assert!(matches!(
        Validator::new(&dictionary).check(&puzzle),
        Err(ValidationIssue::WheelSize { actual: 9, .. })
    ));

    puzzle.wheel.truncate(6);
    assert!(!validate_puzzle(&dictionary, &puzzle));
}
