//! Error types for word parsing, feedback codes, word lists and sessions.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("'{word}' has {len} letters, expected {expected}", expected = crate::WORD_LENGTH)]
    Length { word: String, len: usize },
    #[error("'{word}' contains '{letter}' at position {position}, expected a letter a-z")]
    Symbol {
        word: String,
        letter: char,
        position: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("feedback must be {expected} characters long; got {0}", expected = crate::WORD_LENGTH)]
    Length(usize),
    #[error("feedback may only contain 'g', 'y' and 'b'; got '{symbol}' at position {position}")]
    Symbol { symbol: char, position: usize },
}

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {} is not a JSON array of strings", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid word in {} at entry {index}", .path.display())]
    Word {
        path: PathBuf,
        index: usize,
        #[source]
        source: WordError,
    },
    #[error("solution list is empty")]
    NoSolutions,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no guess is waiting for feedback")]
    NoPendingGuess,
    #[error("a guess is already waiting for feedback: {0}")]
    FeedbackPending(String),
    #[error("the session has already finished")]
    Finished,
    #[error("'{0}' is not an allowed guess")]
    NotAllowed(String),
    #[error(transparent)]
    Word(#[from] WordError),
}
