//! A solving session: guesses, reported feedback and the accumulated constraint.

use crate::constraint::Constraint;
use crate::error::SessionError;
use crate::feedback::{convert_feedback, FeedbackCode};
use crate::parse_word;
use crate::solver::{Game, GuessSelection};
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Full word list, nothing learned yet.
    Init,
    /// A guess has been played and its feedback is outstanding.
    AwaitingFeedback(String),
    /// Feedback was applied and more than one candidate remains.
    Narrowed,
    /// Exactly one candidate remains, or the last guess was all green.
    Solved(String),
    /// No candidate is compatible with the feedback.
    Contradiction,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Solved(_) | SessionState::Contradiction)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    constraint: Constraint,
    learned: Option<Constraint>,
    state: SessionState,
    history: Vec<(String, FeedbackCode)>,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            constraint: Constraint::new(),
            learned: None,
            state: SessionState::Init,
            history: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// The constraint reported by the most recent feedback alone.
    pub fn last_learned(&self) -> Option<&Constraint> {
        self.learned.as_ref()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &[(String, FeedbackCode)] {
        &self.history
    }

    /// The recommendations for the next guess under everything learned so far.
    pub fn recommend(&self) -> GuessSelection {
        self.game.selection(&self.constraint)
    }

    /// Play `word`; its feedback must be reported next.
    pub fn guess(&mut self, word: &str) -> Result<(), SessionError> {
        match &self.state {
            SessionState::Init | SessionState::Narrowed => {}
            SessionState::AwaitingFeedback(pending) => {
                return Err(SessionError::FeedbackPending(pending.clone()))
            }
            SessionState::Solved(_) | SessionState::Contradiction => {
                return Err(SessionError::Finished)
            }
        }

        let word = parse_word(word)?;
        if !self.game.is_allowed(&word) {
            return Err(SessionError::NotAllowed(word));
        }
        self.state = SessionState::AwaitingFeedback(word);
        Ok(())
    }

    /// Apply the feedback for the pending guess and return the new state.
    pub fn feedback(&mut self, code: FeedbackCode) -> Result<&SessionState, SessionError> {
        let guess = match &self.state {
            SessionState::AwaitingFeedback(guess) => guess.clone(),
            SessionState::Solved(_) | SessionState::Contradiction => {
                return Err(SessionError::Finished)
            }
            _ => return Err(SessionError::NoPendingGuess),
        };

        let learned = convert_feedback(&guess, &code);
        self.constraint = self.constraint.merge(&learned);
        self.game.apply(&self.constraint);
        debug!("{} is {}; constraint:\n{}", guess, code.to_code_string(), self.constraint);
        self.history.push((guess.clone(), code));
        self.learned = Some(learned);

        self.state = if code.is_win() {
            SessionState::Solved(guess)
        } else {
            match self.game.candidates() {
                [] => {
                    warn!("no words are compatible with the feedback so far");
                    SessionState::Contradiction
                }
                [word] => SessionState::Solved(word.clone()),
                _ => SessionState::Narrowed,
            }
        };
        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let words: Vec<String> = ["apple", "angle", "ankle"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Session::new(Game::new(words.clone(), words))
    }

    #[test]
    fn feedback_without_guess_is_rejected() {
        let mut session = session();
        let code = FeedbackCode::parse("bbbbb").unwrap();
        assert_eq!(session.feedback(code), Err(SessionError::NoPendingGuess));
    }

    #[test]
    fn second_guess_before_feedback_is_rejected() {
        let mut session = session();
        session.guess("apple").unwrap();
        assert_eq!(
            session.guess("angle"),
            Err(SessionError::FeedbackPending("apple".to_string()))
        );
    }
}
