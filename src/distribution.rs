//! [`Successors`] are the words observed right after one word, and are paired up with that word
//! in a [`TransitionTable`](crate::TransitionTable).

use rand::Rng;
use rand_distr::{Distribution, Uniform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenRef};

/// Every word seen after some other word, in the order they were seen. A successor that appeared
/// three times is stored three times, so picking a uniformly random entry is the same as picking
/// a successor weighted by how often it appeared.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Successors {
    /// Never empty.
    choices: Vec<Token>,
}

impl Successors {
    pub(crate) fn new(first: TokenRef<'_>) -> Self {
        Self {
            choices: vec![first.to_string()],
        }
    }

    /// Add another occurrence.
    pub(crate) fn push(&mut self, token: TokenRef<'_>) {
        self.choices.push(token.to_string());
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Always `false`, there is no way to build empty successors.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Picks one of the observed successors. A single choice is returned without touching `rng`.
    pub fn get_random_token(&self, rng: &mut impl Rng) -> &Token {
        if self.choices.len() == 1 {
            return &self.choices[0];
        }
        let index = Uniform::new(0, self.choices.len()).sample(rng);
        &self.choices[index]
    }
}
