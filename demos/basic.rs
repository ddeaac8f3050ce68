//! Basic example of using the word wheel engine

use wordwheel_core::{can_form_word, Dictionary, Generator, SeededRng, Validator};

fn main() {
    let dictionary = Dictionary::embedded();
    println!(
        "Loaded {} valid words, {} curated\n",
        dictionary.valid_word_count(),
        dictionary.curated_word_count()
    );

    // Generate a puzzle
    println!("Generating level 6...\n");
    let generator = Generator::new(&dictionary);
    let Some(mut puzzle) = generator.generate(6, Some(12345)) else {
        println!("No puzzle could be generated");
        return;
    };

    println!("Base word: {}", puzzle.base_word);
    println!("{}\n", puzzle);

    for placement in &puzzle.placements {
        println!(
            "  {:<6} {:<6} at {}",
            placement.word,
            placement.orientation.to_string(),
            placement.start
        );
    }

    // Check it independently
    let validator = Validator::new(&dictionary);
    match validator.check(&puzzle) {
        Ok(()) => println!("\nValidator: ok"),
        Err(issue) => println!("\nValidator: {}", issue),
    }

    // Extra words the wheel can spell
    let bonus: Vec<String> = dictionary
        .find_words(&puzzle.wheel, 3, None)
        .into_iter()
        .filter(|w| puzzle.is_bonus_word(&dictionary, w))
        .collect();
    println!("Bonus words: {}", bonus.join(", "));

    // Shuffle the wheel for display
    puzzle.reshuffle_wheel(&mut SeededRng::from_entropy());
    let wheel: String = puzzle.wheel.iter().collect();
    println!("Shuffled wheel: {}", wheel);

    println!("\n--- Formability ---\n");
    for (word, letters) in [("ERRED", "REDRE"), ("ERRED", "REDXE"), ("SPIN", "SPINGS")] {
        let available: Vec<char> = letters.chars().collect();
        println!("{} from {}: {}", word, letters, can_form_word(word, &available));
    }
}
