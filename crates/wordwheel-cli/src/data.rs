use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use wordwheel_core::{Dictionary, DictionarySources, GeneratorConfig, Puzzle};

/// Word lists live here unless `--data-dir` says otherwise.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordwheel")
}

/// Files in `dir` where present, compiled-in lists for the rest.
pub fn load_dictionary(dir: &Path) -> Dictionary {
    log::debug!("looking for word lists in {}", dir.display());
    Dictionary::load(&DictionarySources::from_dir(dir))
}

/// Generator settings from a JSON file; omitted fields keep their defaults.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let json = fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let config = parse_config(&json).map_err(|e| format!("bad config {}: {e}", path.display()))?;
    log::info!("using generator config from {}", path.display());
    Ok(config)
}

fn parse_config(json: &str) -> Result<GeneratorConfig, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn read_puzzle(path: &Path) -> Result<Puzzle, Box<dyn Error>> {
    let json = fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let puzzle = serde_json::from_str(&json).map_err(|e| format!("{} is not a puzzle: {e}", path.display()))?;
    Ok(puzzle)
}

pub fn write_puzzle(path: &Path, puzzle: &Puzzle) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(puzzle)?;
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    Ok(())
}
