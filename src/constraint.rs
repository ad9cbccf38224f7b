//! Positional knowledge gathered from feedback.
//!
//! A [`Constraint`] records, per letter, the positions where that letter is known to be
//! (`true`) or known not to be (`false`), together with the letters known to be absent
//! from the secret word altogether. Constraints are values: combining two of them with
//! [`Constraint::merge`] yields a new constraint and leaves both inputs untouched.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Everything learned from one or more guesses.
///
/// A letter that has positional facts is never also in the excluded set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    positional: HashMap<char, HashMap<usize, bool>>,
    excluded: HashSet<char>,
}

impl Constraint {
    /// The empty constraint, compatible with every word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `letter` is present and that it is (`true`) or is not (`false`) at
    /// `position`. Any absence entry for the letter is dropped.
    pub fn with_fact(mut self, letter: char, position: usize, at_position: bool) -> Self {
        self.insert_fact(letter, position, at_position);
        self
    }

    /// Record that `letter` does not occur in the word. Ignored if the letter already has
    /// positional facts.
    pub fn with_excluded(mut self, letter: char) -> Self {
        self.insert_excluded(letter);
        self
    }

    pub(crate) fn insert_fact(&mut self, letter: char, position: usize, at_position: bool) {
        self.positional
            .entry(letter)
            .or_default()
            .insert(position, at_position);
        self.excluded.remove(&letter);
    }

    pub(crate) fn insert_excluded(&mut self, letter: char) {
        if !self.positional.contains_key(&letter) {
            self.excluded.insert(letter);
        }
    }

    pub fn positional(&self) -> &HashMap<char, HashMap<usize, bool>> {
        &self.positional
    }

    pub fn excluded(&self) -> &HashSet<char> {
        &self.excluded
    }

    /// Positional facts known for `letter`, if it is known to be present.
    pub fn facts(&self, letter: char) -> Option<&HashMap<usize, bool>> {
        self.positional.get(&letter)
    }

    pub fn is_excluded(&self, letter: char) -> bool {
        self.excluded.contains(&letter)
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.excluded.is_empty()
    }

    /// Combine two constraints.
    ///
    /// Facts are replaced per letter: when both sides know something about a letter, the
    /// facts from `later` replace those from `self` wholesale. Excluded letters are the
    /// union of both sides, minus any letter that ends up with positional facts.
    pub fn merge(&self, later: &Constraint) -> Constraint {
        let mut positional = self.positional.clone();
        for (&letter, facts) in &later.positional {
            positional.insert(letter, facts.clone());
        }

        let excluded = self
            .excluded
            .union(&later.excluded)
            .filter(|letter| !positional.contains_key(*letter))
            .copied()
            .collect();

        Constraint {
            positional,
            excluded,
        }
    }
}

/// Check whether `word` satisfies every fact in `constraint`.
pub fn is_compatible(word: &str, constraint: &Constraint) -> bool {
    for (&letter, facts) in &constraint.positional {
        if !word.contains(letter) {
            return false;
        }
        for (&position, &at_position) in facts {
            if (word.chars().nth(position) == Some(letter)) != at_position {
                return false;
            }
        }
    }

    !word.chars().any(|c| constraint.excluded.contains(&c))
}

/// Keep the words compatible with `constraint`, preserving their order.
pub fn filter<W>(words: &[W], constraint: &Constraint) -> Vec<W>
where
    W: AsRef<str> + Clone,
{
    words
        .iter()
        .filter(|word| is_compatible(word.as_ref(), constraint))
        .cloned()
        .collect()
}

/// Renders one line per present letter, then the absent letters, both sorted so the
/// output is stable.
impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<_> = self.positional.iter().collect();
        letters.sort_by_key(|(letter, _)| **letter);

        for (letter, facts) in letters {
            let mut facts: Vec<_> = facts.iter().collect();
            facts.sort_by_key(|(position, _)| **position);
            let facts: Vec<String> = facts
                .into_iter()
                .map(|(position, at_position)| {
                    if *at_position {
                        format!("in position {}", position)
                    } else {
                        format!("not in position {}", position)
                    }
                })
                .collect();
            writeln!(f, "{} is {}", letter, facts.join(", "))?;
        }

        let mut excluded: Vec<_> = self.excluded.iter().collect();
        excluded.sort();
        let excluded: Vec<String> = excluded.into_iter().map(|c| c.to_string()).collect();
        write!(f, "Not in word: {}", excluded.join(" "))
    }
}
