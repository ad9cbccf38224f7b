//! # Wordle Infogain
//!
//! A Wordle solver that measures guesses by their expected information gain.
//!
//! Knowledge gathered from feedback is kept as a [`Constraint`]: per-letter positional
//! facts plus a set of letters known to be absent. For every allowed guess the solver
//! simulates the constraint each remaining candidate would produce, and averages the
//! entropy reduction over all candidates.

pub mod constraint;
pub mod error;
pub mod feedback;
pub mod session;
pub mod solver;
pub mod words;

pub use constraint::{filter, is_compatible, Constraint};
pub use error::{FeedbackError, SessionError, WordError, WordListError};
pub use feedback::{convert_feedback, simulate, Feedback, FeedbackCode};
pub use session::{Session, SessionState};
pub use solver::{
    entropy, expected_information_gain, select_guesses, select_guesses_sequential, won, Game,
    GuessAnalysis, GuessSelection, Preference,
};
pub use words::WordLists;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Normalize a word to lowercase and check it is exactly [`WORD_LENGTH`] ASCII letters.
pub fn parse_word(raw: &str) -> Result<String, WordError> {
    let word = raw.trim().to_ascii_lowercase();
    let len = word.chars().count();
    if len != WORD_LENGTH {
        return Err(WordError::Length { word, len });
    }
    if let Some((position, letter)) = word
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_lowercase())
    {
        return Err(WordError::Symbol {
            word,
            letter,
            position,
        });
    }
    Ok(word)
}
