//! Information-theoretic guess selection.
//!
//! This module implements the entropy engine and the guess selector. Every remaining
//! candidate is treated as an equally likely secret; the value of a guess is the average
//! drop in entropy it would cause across all of those hypothetical secrets.

use crate::constraint::{filter, is_compatible, Constraint};
use crate::feedback::simulate;
use log::{debug, info};
use rayon::prelude::*;

/// Shannon entropy, in bits, of a uniform distribution over `words`.
///
/// The empty set has entropy 0.
pub fn entropy<T>(words: &[T]) -> f64 {
    let n = words.len() as f64;
    let mut entropy = 0.0;
    for _ in words {
        let p = 1.0 / n;
        entropy -= p * p.log2();
    }
    entropy
}

/// Expected reduction in entropy, in bits, from guessing `guess`.
///
/// Each word in `candidates` is taken in turn as the secret: the feedback it would produce
/// is merged into `prior`, the candidates are filtered by the result, and the entropy of
/// what survives is subtracted from `baseline`. The mean over all candidates is returned,
/// which is NaN for an empty candidate set.
pub fn expected_information_gain<W>(
    guess: &str,
    prior: &Constraint,
    candidates: &[W],
    baseline: f64,
) -> f64
where
    W: AsRef<str>,
{
    let words: Vec<&str> = candidates.iter().map(|w| w.as_ref()).collect();

    let total: f64 = words
        .iter()
        .map(|secret| {
            let merged = prior.merge(&simulate(secret, guess));
            baseline - entropy(&filter(&words, &merged))
        })
        .sum();

    total / words.len() as f64
}

/// True when exactly one candidate remains.
pub fn won<T>(candidates: &[T]) -> bool {
    candidates.len() == 1
}

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: String,
    pub gain: f64,
    pub expected_remaining: f64,
    pub is_possible_answer: bool,
}

/// The two recommendations of a round.
///
/// A slot is empty when no allowed guess has a finite, positive gain for it; its gain is
/// then 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuessSelection {
    pub best_info_guess: Option<String>,
    pub best_info_gain: f64,
    pub best_win_guess: Option<String>,
    pub best_win_gain: f64,
}

/// What to play next, given a [`GuessSelection`].
#[derive(Debug, Clone, PartialEq)]
pub enum Preference<'a> {
    /// One guess is at least as good as the alternative.
    Take {
        guess: &'a str,
        gain: f64,
        viable: bool,
    },
    /// The most informative guess cannot win; the viable one carries less information.
    Choose {
        info: &'a str,
        info_gain: f64,
        win: &'a str,
        win_gain: f64,
    },
}

impl GuessSelection {
    pub fn is_empty(&self) -> bool {
        self.best_info_guess.is_none() && self.best_win_guess.is_none()
    }

    /// Prefer the viable guess whenever it gives up no information.
    pub fn preferred(&self) -> Option<Preference<'_>> {
        match (&self.best_info_guess, &self.best_win_guess) {
            (Some(info), Some(win)) if self.best_info_gain > self.best_win_gain => {
                Some(Preference::Choose {
                    info,
                    info_gain: self.best_info_gain,
                    win,
                    win_gain: self.best_win_gain,
                })
            }
            (_, Some(win)) => Some(Preference::Take {
                guess: win,
                gain: self.best_win_gain,
                viable: true,
            }),
            (Some(info), None) => Some(Preference::Take {
                guess: info,
                gain: self.best_info_gain,
                viable: false,
            }),
            (None, None) => None,
        }
    }
}

fn usable(gain: f64) -> bool {
    gain.is_finite() && gain > 0.0
}

/// Reduce per-guess gains, in `allowed` order, to the two best guesses.
fn reduce<W: AsRef<str>>(allowed: &[W], gains: &[f64], prior: &Constraint) -> GuessSelection {
    let mut best_info: Option<(&str, f64)> = None;
    let mut best_win: Option<(&str, f64)> = None;

    for (guess, &gain) in allowed.iter().map(|w| w.as_ref()).zip(gains) {
        if !usable(gain) {
            continue;
        }
        if gain > best_info.map_or(0.0, |(_, best)| best) {
            best_info = Some((guess, gain));
        }
        if gain > best_win.map_or(0.0, |(_, best)| best) && is_compatible(guess, prior) {
            best_win = Some((guess, gain));
        }
    }

    GuessSelection {
        best_info_guess: best_info.map(|(guess, _)| guess.to_string()),
        best_info_gain: best_info.map_or(0.0, |(_, gain)| gain),
        best_win_guess: best_win.map(|(guess, _)| guess.to_string()),
        best_win_gain: best_win.map_or(0.0, |(_, gain)| gain),
    }
}

/// Evaluate every allowed guess and pick the most informative one, plus the most
/// informative one that could still be the secret.
///
/// Gains are computed in parallel; ties go to the guess that comes first in `allowed`.
pub fn select_guesses<W, C>(
    allowed: &[W],
    candidates: &[C],
    prior: &Constraint,
    baseline: f64,
) -> GuessSelection
where
    W: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    let gains: Vec<f64> = allowed
        .par_iter()
        .map(|guess| expected_information_gain(guess.as_ref(), prior, candidates, baseline))
        .collect();
    reduce(allowed, &gains, prior)
}

/// Single-threaded [`select_guesses`].
pub fn select_guesses_sequential<W, C>(
    allowed: &[W],
    candidates: &[C],
    prior: &Constraint,
    baseline: f64,
) -> GuessSelection
where
    W: AsRef<str>,
    C: AsRef<str>,
{
    let gains: Vec<f64> = allowed
        .iter()
        .map(|guess| expected_information_gain(guess.as_ref(), prior, candidates, baseline))
        .collect();
    reduce(allowed, &gains, prior)
}

/// Candidate words, allowed guesses, and the entropy of the candidates.
#[derive(Debug, Clone)]
pub struct Game {
    candidates: Vec<String>,
    allowed: Vec<String>,
    baseline: f64,
}

impl Game {
    pub fn new(candidates: Vec<String>, allowed: Vec<String>) -> Self {
        let baseline = entropy(&candidates);
        Self::with_entropy(candidates, allowed, baseline)
    }

    /// Build a game whose baseline entropy is already known.
    pub fn with_entropy(candidates: Vec<String>, allowed: Vec<String>, baseline: f64) -> Self {
        Self {
            candidates,
            allowed,
            baseline,
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn allowed_guesses(&self) -> &[String] {
        &self.allowed
    }

    pub fn baseline_entropy(&self) -> f64 {
        self.baseline
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_allowed(&self, word: &str) -> bool {
        self.allowed.iter().any(|w| w == word)
    }

    pub fn won(&self) -> bool {
        won(&self.candidates)
    }

    /// Candidates compatible with `constraint`, without narrowing the game.
    pub fn compatible(&self, constraint: &Constraint) -> Vec<String> {
        filter(&self.candidates, constraint)
    }

    /// Narrow the candidates to those compatible with `constraint`.
    pub fn apply(&mut self, constraint: &Constraint) {
        let before = self.candidates.len();
        self.candidates = filter(&self.candidates, constraint);
        self.baseline = entropy(&self.candidates);
        debug!(
            "narrowed candidates from {} to {} ({:.3} bits)",
            before,
            self.candidates.len(),
            self.baseline
        );
    }

    pub fn gain(&self, guess: &str, prior: &Constraint) -> f64 {
        expected_information_gain(guess, prior, &self.candidates, self.baseline)
    }

    pub fn selection(&self, prior: &Constraint) -> GuessSelection {
        let selection = select_guesses(&self.allowed, &self.candidates, prior, self.baseline);
        info!(
            "best information guess {:?} ({:.3} bits), best winning guess {:?} ({:.3} bits)",
            selection.best_info_guess,
            selection.best_info_gain,
            selection.best_win_guess,
            selection.best_win_gain
        );
        selection
    }

    /// The `n` allowed guesses with the highest usable gain, best first.
    pub fn ranked(&self, prior: &Constraint, n: usize) -> Vec<GuessAnalysis> {
        let remaining = self.candidates.len() as f64;
        let mut analyses: Vec<GuessAnalysis> = self
            .allowed
            .par_iter()
            .map(|word| {
                let gain = self.gain(word, prior);
                GuessAnalysis {
                    word: word.clone(),
                    gain,
                    expected_remaining: remaining / 2_f64.powf(gain),
                    is_possible_answer: is_compatible(word, prior),
                }
            })
            .filter(|analysis| usable(analysis.gain))
            .collect();

        analyses.sort_by(|a, b| b.gain.total_cmp(&a.gain));
        analyses.truncate(n);
        analyses
    }
}
