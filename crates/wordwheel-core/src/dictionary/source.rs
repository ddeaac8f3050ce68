//! Word-list sources and the fallback chains that feed [`Dictionary`](super::Dictionary).
//!
//! Each of the three lists (validation, curated, base words) is described by
//! an ordered list of [`WordSource`]s. Sources are tried in order; the first
//! one that yields at least one acceptable entry wins. The compiled-in table
//! is always tried last, so a chain never comes back empty.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const EMBEDDED_CURATED: &str = include_str!("../../data/curated_words.txt");
const EMBEDDED_BASE_WORDS: &str = include_str!("../../data/base_words.json");

/// Conventional file names inside a data directory.
pub const VALIDATION_FILE: &str = "validation.txt";
pub const CURATED_FILE: &str = "curated.txt";
pub const BASE_WORDS_FILE: &str = "base_words.json";

/// Which list a source is being read as. Controls format and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Newline-delimited, alphabetic, length >= 3.
    Validation,
    /// Newline-delimited, alphabetic, length 3..=6.
    Curated,
    /// JSON array of strings, alphabetic.
    BaseWords,
}

impl ListKind {
    fn label(self) -> &'static str {
        match self {
            ListKind::Validation => "validation list",
            ListKind::Curated => "curated list",
            ListKind::BaseWords => "base word list",
        }
    }

    pub(crate) fn accepts(self, word: &str) -> bool {
        let len = word.len();
        match self {
            ListKind::Validation => len >= 3,
            ListKind::Curated => (3..=6).contains(&len),
            ListKind::BaseWords => len > 0,
        }
    }
}

/// Errors from a single source. The chain logs these and moves on.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed base word JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{what} contained no usable words")]
    Empty { what: &'static str },
}

/// One place a word list can come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Read from a file on disk.
    File(PathBuf),
    /// Already-loaded text (fetched over the network, bundled by the host app, ...).
    Text(String),
    /// The compiled-in fallback table.
    Embedded,
}

impl WordSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        WordSource::File(path.into())
    }

    fn describe(&self) -> String {
        match self {
            WordSource::File(path) => path.display().to_string(),
            WordSource::Text(_) => "inline text".to_string(),
            WordSource::Embedded => "embedded table".to_string(),
        }
    }

    fn raw_text(&self, kind: ListKind) -> Result<String, LoadError> {
        match self {
            WordSource::File(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            }),
            WordSource::Text(text) => Ok(text.clone()),
            WordSource::Embedded => Ok(match kind {
                ListKind::BaseWords => EMBEDDED_BASE_WORDS.to_string(),
                ListKind::Validation | ListKind::Curated => EMBEDDED_CURATED.to_string(),
            }),
        }
    }

    /// Load and normalise this source as a list of the given kind.
    ///
    /// The embedded validation list is the embedded curated list plus the
    /// embedded base words, so embedded puzzles always validate.
    pub fn load(&self, kind: ListKind) -> Result<Vec<String>, LoadError> {
        let text = self.raw_text(kind)?;
        let mut words = match kind {
            ListKind::BaseWords => parse_json_list(&text, kind)?,
            ListKind::Validation | ListKind::Curated => parse_lines(&text, kind),
        };
        if kind == ListKind::Validation && *self == WordSource::Embedded {
            words.extend(parse_json_list(EMBEDDED_BASE_WORDS, kind)?);
        }
        if words.is_empty() {
            return Err(LoadError::Empty { what: kind.label() });
        }
        Ok(words)
    }
}

/// Uppercase and trim `raw`; `None` unless it is purely alphabetic.
pub(crate) fn normalize(raw: &str) -> Option<String> {
    let word = raw.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_uppercase())
}

fn parse_lines(text: &str, kind: ListKind) -> Vec<String> {
    text.lines()
        .filter_map(normalize)
        .filter(|word| kind.accepts(word))
        .collect()
}

fn parse_json_list(text: &str, kind: ListKind) -> Result<Vec<String>, LoadError> {
    let raw: Vec<String> = serde_json::from_str(text)?;
    Ok(raw
        .iter()
        .filter_map(|w| normalize(w))
        .filter(|word| kind.accepts(word))
        .collect())
}

/// Evaluate a chain, returning the first successful source's words.
///
/// [`WordSource::Embedded`] is appended if the chain does not already end
/// with it, which keeps this infallible.
pub(crate) fn load_chain(chain: &[WordSource], kind: ListKind) -> Vec<String> {
    let embedded = [WordSource::Embedded];
    let tail: &[WordSource] = if chain.last() == Some(&WordSource::Embedded) {
        &[]
    } else {
        &embedded
    };

    for source in chain.iter().chain(tail) {
        match source.load(kind) {
            Ok(words) => {
                log::info!(
                    "loaded {} from {} ({} entries)",
                    kind.label(),
                    source.describe(),
                    words.len()
                );
                return words;
            }
            Err(e) => {
                log::warn!("skipping {} source {}: {}", kind.label(), source.describe(), e);
            }
        }
    }

    // Only reachable if the compiled-in table itself is broken.
    Vec::new()
}

/// Ordered loader strategies for each of the three lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionarySources {
    pub validation: Vec<WordSource>,
    pub curated: Vec<WordSource>,
    pub base_words: Vec<WordSource>,
}

impl DictionarySources {
    /// Only the compiled-in tables.
    pub fn embedded() -> Self {
        Self::default()
    }

    /// The conventional files inside `dir`, falling back to the embedded tables.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            validation: vec![WordSource::File(dir.join(VALIDATION_FILE))],
            curated: vec![WordSource::File(dir.join(CURATED_FILE))],
            base_words: vec![WordSource::File(dir.join(BASE_WORDS_FILE))],
        }
    }

    /// Everything from in-memory text.
    pub fn from_text(
        validation: impl Into<String>,
        curated: impl Into<String>,
        base_words_json: impl Into<String>,
    ) -> Self {
        Self {
            validation: vec![WordSource::Text(validation.into())],
            curated: vec![WordSource::Text(curated.into())],
            base_words: vec![WordSource::Text(base_words_json.into())],
        }
    }
}
