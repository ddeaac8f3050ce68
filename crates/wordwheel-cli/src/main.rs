mod data;
mod logging;

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use wordwheel_core::{can_form_word, Dictionary, Generator, GeneratorConfig, Validator};

/// Generate and audit word wheel crossword puzzles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding validation.txt, curated.txt and base_words.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON file with generator settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging (also WORDWHEEL_DEBUG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the puzzle for a level
    Generate {
        /// Level number
        #[arg(short, long, default_value_t = 1)]
        level: u32,

        /// Seed for the random stream (defaults to the level number)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pick a fresh seed and print it
        #[arg(long, conflicts_with = "seed")]
        random_seed: bool,

        /// Print JSON instead of the text grid
        #[arg(long)]
        json: bool,

        /// Also write the puzzle JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a puzzle JSON file
    Validate {
        file: PathBuf,
    },

    /// Generate a range of levels and validate each one
    Audit {
        #[arg(long, default_value_t = 1)]
        from: u32,

        #[arg(long, default_value_t = 50)]
        to: u32,

        /// Seed for every level (defaults to each level number)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Check a word against the dictionary and optionally a set of letters
    Check {
        word: String,

        /// Letters to spell it from, e.g. PLANET
        #[arg(short, long)]
        letters: Option<String>,
    },

    /// List curated words spellable from a set of letters
    Words {
        letters: String,

        #[arg(long, default_value_t = 3)]
        min_length: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("WORDWHEEL_DEBUG").is_ok();
    logging::init_logger(debug_enabled);

    match try_main(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run one subcommand. `Ok(false)` means it ran but the answer was "no":
/// no puzzle found, puzzle invalid, word rejected.
fn try_main(cli: Cli) -> Result<bool, Box<dyn Error>> {
    let data_dir = cli.data_dir.unwrap_or_else(data::default_data_dir);
    let config = data::load_config(cli.config.as_deref())?;
    let dictionary = data::load_dictionary(&data_dir);

    match cli.command {
        Command::Generate {
            level,
            seed,
            random_seed,
            json,
            output,
        } => {
            let seed = if random_seed { Some(rand::random::<u64>()) } else { seed };
            if let Some(seed) = seed {
                log::info!("seed {seed}");
            }
            generate(&dictionary, config, level, seed, json, output)
        }
        Command::Validate { file } => {
            let puzzle = data::read_puzzle(&file)?;
            match Validator::with_config(&dictionary, config).check(&puzzle) {
                Ok(()) => {
                    println!("valid: level {} ({} words)", puzzle.level, puzzle.placements.len());
                    Ok(true)
                }
                Err(issue) => {
                    println!("invalid: {issue}");
                    Ok(false)
                }
            }
        }
        Command::Audit { from, to, seed } => audit(&dictionary, config, from, to, seed),
        Command::Check { word, letters } => {
            let valid = dictionary.is_valid_word(&word);
            println!("{}: {}", word.to_ascii_uppercase(), if valid { "in dictionary" } else { "not in dictionary" });
            let formable = match letters {
                Some(letters) => {
                    let available: Vec<char> = letters.chars().collect();
                    let ok = can_form_word(&word, &available);
                    println!("from {}: {}", letters.to_ascii_uppercase(), if ok { "formable" } else { "not formable" });
                    ok
                }
                None => true,
            };
            Ok(valid && formable)
        }
        Command::Words { letters, min_length } => {
            let available: Vec<char> = letters.chars().collect();
            let words = dictionary.find_words(&available, min_length, None);
            for word in &words {
                println!("{word}");
            }
            Ok(!words.is_empty())
        }
    }
}

fn generate(
    dictionary: &Dictionary,
    config: GeneratorConfig,
    level: u32,
    seed: Option<u64>,
    json: bool,
    output: Option<PathBuf>,
) -> Result<bool, Box<dyn Error>> {
    let Some(puzzle) = Generator::with_config(dictionary, config).generate(level, seed) else {
        eprintln!("No puzzle found for level {level}");
        return Ok(false);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&puzzle)?);
    } else {
        println!("Level {} (base word {})\n", puzzle.level, puzzle.base_word);
        println!("{puzzle}\n");
        for placement in &puzzle.placements {
            println!("  {:<6} {} at {}", placement.word, placement.orientation, placement.start);
        }
    }

    if let Some(path) = output {
        data::write_puzzle(&path, &puzzle)?;
        log::info!("wrote {}", path.display());
    }
    Ok(true)
}

fn audit(
    dictionary: &Dictionary,
    config: GeneratorConfig,
    from: u32,
    to: u32,
    seed: Option<u64>,
) -> Result<bool, Box<dyn Error>> {
    if from > to {
        return Err(format!("empty level range {from}..={to}").into());
    }

    let generator = Generator::with_config(dictionary, config.clone());
    let validator = Validator::with_config(dictionary, config);
    let mut failures = 0;

    for level in from..=to {
        match generator.generate(level, seed) {
            Some(puzzle) => match validator.check(&puzzle) {
                Ok(()) => println!(
                    "level {level:>3}: {} {} words, wheel {}",
                    puzzle.base_word,
                    puzzle.placements.len(),
                    puzzle.wheel.iter().collect::<String>()
                ),
                Err(issue) => {
                    failures += 1;
                    println!("level {level:>3}: INVALID {issue}");
                }
            },
            None => {
                failures += 1;
                println!("level {level:>3}: no puzzle");
            }
        }
    }

    eprintln!("{} levels, {} failures", to - from + 1, failures);
    Ok(failures == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["wordwheel", "generate", "--level", "6", "--seed", "12345", "--json"]).unwrap();
        match cli.command {
            Command::Generate { level, seed, json, .. } => {
                assert_eq!(level, 6);
                assert_eq!(seed, Some(12345));
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_seed_conflicts_with_random_seed() {
        assert!(Cli::try_parse_from(["wordwheel", "generate", "--seed", "1", "--random-seed"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["wordwheel", "check", "spin", "--letters", "spring", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Command::Check { letters: Some(_), .. }));
    }

    #[test]
    fn test_audit_rejects_empty_range() {
        let dictionary = Dictionary::embedded();
        assert!(audit(&dictionary, GeneratorConfig::default(), 5, 2, None).is_err());
    }

    #[test]
    fn test_audit_small_range() {
        let dictionary = Dictionary::embedded();
        assert!(audit(&dictionary, GeneratorConfig::default(), 1, 3, None).unwrap());
    }
}
