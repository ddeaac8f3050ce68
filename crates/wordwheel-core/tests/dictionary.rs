use std::fs;
use wordwheel_core::{can_form_word, Dictionary, DictionarySources, WordSource};

#[test]
fn validity_ignores_case() {
    let dictionary = Dictionary::from_lists(["spring", "ring"], ["ring"], ["spring"]);
    assert!(dictionary.is_valid_word("spring"));
    assert!(dictionary.is_valid_word("SPRING"));
    assert!(dictionary.is_valid_word("Spring"));
    assert!(!dictionary.is_valid_word("springs"));
}

#[test]
fn formability_counts_letters() {
    let letters = ['S', 'P', 'R', 'I', 'N', 'G'];
    assert!(can_form_word("SPIN", &letters));
    assert!(can_form_word("spin", &letters));
    assert!(!can_form_word("SINGING", &letters));
}

#[test]
fn find_words_from_letters() {
    let dictionary = Dictionary::from_lists(
        Vec::<String>::new(),
        ["pin", "ring", "spin", "grin", "rig", "sprig", "spring", "pig", "gig"],
        ["spring"],
    );
    let letters = ['S', 'P', 'R', 'I', 'N', 'G'];

    let found = dictionary.find_words(&letters, 3, None);
    assert_eq!(found, vec!["PIN", "RIG", "PIG", "RING", "SPIN", "GRIN", "SPRIG", "SPRING"]);

    let fours = dictionary.find_words(&letters, 4, Some(4));
    assert_eq!(fours, vec!["RING", "SPIN", "GRIN"]);

    assert!(dictionary.find_words(&letters, 7, Some(9)).is_empty());
}

#[test]
fn embedded_tables_are_usable() {
    let dictionary = Dictionary::embedded();
    assert!(dictionary.curated_word_count() > 1000);
    assert!(dictionary.base_words().count() > 20);
    for base in dictionary.base_words() {
        assert!(dictionary.is_valid_word(base), "{}", base);
    }
    assert!(dictionary.words_of_length(2).is_empty());
}

#[test]
fn missing_directory_falls_back() {
    let sources = DictionarySources::from_dir("/nonexistent/wordwheel-data");
    let dictionary = Dictionary::load(&sources);
    assert_eq!(dictionary.curated_word_count(), Dictionary::embedded().curated_word_count());
}

#[test]
fn files_override_embedded_lists() {
    let dir = std::env::temp_dir().join(format!("wordwheel-dict-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("validation.txt"), "zebra\nzeal\nbogus1\n").unwrap();
    fs::write(dir.join("curated.txt"), "zeal\nzeta\n").unwrap();
    fs::write(dir.join("base_words.json"), r#"["zigzag"]"#).unwrap();

    let dictionary = Dictionary::load(&DictionarySources::from_dir(&dir));
    assert!(dictionary.is_valid_word("zebra"));
    assert!(!dictionary.is_valid_word("planet"));
    assert_eq!(dictionary.valid_word_count(), 2);
    assert_eq!(dictionary.words_of_length(4), ["ZEAL".to_string(), "ZETA".to_string()]);
    assert_eq!(dictionary.base_words().collect::<Vec<_>>(), vec!["ZIGZAG"]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn text_sources_chain_to_embedded() {
    let sources = DictionarySources {
        validation: vec![WordSource::Text(String::new())],
        ..DictionarySources::embedded()
    };
    let dictionary = Dictionary::load(&sources);
    assert!(dictionary.is_valid_word("planet"));
}
