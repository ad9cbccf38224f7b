//! Loading the solution and guess word lists.

use crate::error::WordListError;
use crate::parse_word;
use crate::solver::{entropy, Game};
use log::info;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The full word lists of a puzzle, with the entropy of the solution list cached.
#[derive(Debug, Clone)]
pub struct WordLists {
    solutions: Vec<String>,
    allowed: Vec<String>,
    baseline: f64,
}

impl WordLists {
    /// Build from possible secrets and extra guess-only words.
    ///
    /// Allowed guesses are the extra words followed by the solutions, keeping the first
    /// occurrence of any duplicate.
    pub fn new(solutions: Vec<String>, extra_guesses: Vec<String>) -> Result<Self, WordListError> {
        if solutions.is_empty() {
            return Err(WordListError::NoSolutions);
        }

        let mut seen = HashSet::new();
        let allowed: Vec<String> = extra_guesses
            .into_iter()
            .chain(solutions.iter().cloned())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        let baseline = entropy(&solutions);
        info!(
            "{} solutions and {} valid guesses ({:.3} bits)",
            solutions.len(),
            allowed.len(),
            baseline
        );

        Ok(Self {
            solutions,
            allowed,
            baseline,
        })
    }

    /// Load the solution list and, optionally, the extra guess list from disk.
    pub fn load(solutions: &Path, extra_guesses: Option<&Path>) -> Result<Self, WordListError> {
        let solutions = read_word_list(solutions)?;
        let extra = match extra_guesses {
            Some(path) => read_word_list(path)?,
            None => Vec::new(),
        };
        Self::new(solutions, extra)
    }

    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    pub fn allowed_guesses(&self) -> &[String] {
        &self.allowed
    }

    pub fn baseline_entropy(&self) -> f64 {
        self.baseline
    }

    /// A fresh game over the full lists.
    pub fn new_game(&self) -> Game {
        Game::with_entropy(self.solutions.clone(), self.allowed.clone(), self.baseline)
    }
}

/// Read a word list: a JSON array of strings for `.json` files, otherwise one word per
/// line with blank lines and `#` comments skipped.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, WordListError> {
    let data = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let raw: Vec<String> = if is_json {
        serde_json::from_str(&data).map_err(|source| WordListError::Json {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        data.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect()
    };

    raw.iter()
        .enumerate()
        .map(|(index, word)| {
            parse_word(word).map_err(|source| WordListError::Word {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}
