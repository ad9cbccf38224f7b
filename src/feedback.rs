//! Feedback for Wordle guesses.
//!
//! This module turns feedback into [`Constraint`]s, either by simulating a guess against a
//! hypothetical secret ([`simulate`]) or by taking a reported `g`/`y`/`b` code at face
//! value ([`convert_feedback`]).
//!
//! Feedback here is presence-based: a guessed letter counts as present whenever the secret
//! contains it at least once, regardless of how many copies either word holds.

use crate::constraint::Constraint;
use crate::error::FeedbackError;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// The letter used for this feedback in a typed code
    pub fn to_code(self) -> char {
        match self {
            Feedback::Correct => 'g',
            Feedback::Present => 'y',
            Feedback::Absent => 'b',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' => Some(Feedback::Correct),
            'y' => Some(Feedback::Present),
            'b' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback code for a 5-letter guess, e.g. `gybbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackCode(pub [Feedback; WORD_LENGTH]);

impl FeedbackCode {
    /// The code indicating all correct (winning)
    pub const ALL_CORRECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    /// Parse a code from a string like "gybbb". Case is ignored.
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let s = s.trim();
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(FeedbackError::Length(len));
        }

        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for (position, (slot, symbol)) in feedbacks.iter_mut().zip(s.chars()).enumerate() {
            *slot = Feedback::from_char(symbol).ok_or(FeedbackError::Symbol { symbol, position })?;
        }
        Ok(Self(feedbacks))
    }

    /// The code that presence-based feedback gives for `guess` against `secret`.
    ///
    /// Agrees with [`simulate`]: converting this code yields the same constraint.
    pub fn observe(secret: &str, guess: &str) -> Self {
        debug_assert_eq!(guess.chars().count(), WORD_LENGTH);

        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for ((slot, g), s) in feedbacks.iter_mut().zip(guess.chars()).zip(secret.chars()) {
            *slot = if g == s {
                Feedback::Correct
            } else if secret.contains(g) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
        }
        Self(feedbacks)
    }

    pub fn feedbacks(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this code represents a win (all correct)
    pub fn is_win(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// The typed form, e.g. "gybbb"
    pub fn to_code_string(&self) -> String {
        self.0.iter().map(|f| f.to_code()).collect()
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|f| f.to_char()).collect()
    }
}

impl std::str::FromStr for FeedbackCode {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Derive the constraint that guessing `guess` against `secret` would produce.
///
/// For each position, a guessed letter that occurs anywhere in `secret` gets a positional
/// fact (`true` when it sits at that position in `secret`); any other letter is excluded.
/// Letter counts are not tracked, so a repeated guess letter is reported as present at
/// every one of its positions even when `secret` holds a single copy.
pub fn simulate(secret: &str, guess: &str) -> Constraint {
    let mut constraint = Constraint::new();
    for ((position, g), s) in guess.chars().enumerate().zip(secret.chars()) {
        if secret.contains(g) {
            constraint.insert_fact(g, position, g == s);
        } else {
            constraint.insert_excluded(g);
        }
    }
    constraint
}

/// Turn a reported feedback code for `guess` into a constraint, taking it at face value.
///
/// `g` records the letter at its position, `y` records it as present elsewhere and `b`
/// excludes it. A letter that is both reported absent and present within one code keeps
/// its positional facts.
pub fn convert_feedback(guess: &str, code: &FeedbackCode) -> Constraint {
    let mut constraint = Constraint::new();
    let mut absent = Vec::new();
    for ((position, letter), feedback) in guess.chars().enumerate().zip(code.0.iter()) {
        match feedback {
            Feedback::Correct => constraint.insert_fact(letter, position, true),
            Feedback::Present => constraint.insert_fact(letter, position, false),
            Feedback::Absent => absent.push(letter),
        }
    }
    for letter in absent {
        constraint.insert_excluded(letter);
    }
    constraint
}
