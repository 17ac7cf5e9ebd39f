//! See the top level crate documentation for information about the [`TransitionTable`] type.

use hashbrown::HashMap;

use itertools::Itertools;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distribution::Successors;
use crate::error::{GenerateError, Result};
use crate::token::{Token, TokenRef};

/// Simple first order Markov chain: every word maps to the words seen directly after it.
///
/// ```
/// # use parrotish::TransitionTable;
/// # use rand::thread_rng;
/// let words: Vec<String> = "a b a c a b".split(' ').map(String::from).collect();
/// let table = TransitionTable::from_tokens(&words).unwrap();
///
/// assert_eq!(table.successors("a").unwrap().as_slice(), ["b", "c", "b"]);
/// // "b" is only ever followed by "a"
/// assert_eq!(table.next_word(&mut thread_rng(), "b").unwrap(), "a");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransitionTable {
    map: HashMap<Token, Successors>,
}

impl TransitionTable {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Builds a table from a single token sequence.
    ///
    /// # Errors
    ///
    /// [`GenerateError::EmptyCorpus`] if `tokens` has fewer than two entries.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self> {
        let mut cb = Self::builder();
        cb.feed_tokens(tokens);
        cb.build()
    }

    /// The successors seen after `word`, if it was ever followed by anything.
    pub fn successors(&self, word: TokenRef<'_>) -> Option<&Successors> {
        self.map.get(word)
    }

    pub fn contains(&self, word: TokenRef<'_>) -> bool {
        self.map.contains_key(word)
    }

    /// Number of distinct words with at least one successor.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Always `false` for a built table.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Token> {
        self.map.keys()
    }

    /// Draws the word following `current`, uniformly among its observed successors.
    ///
    /// # Errors
    ///
    /// [`GenerateError::NoSuccessor`] if `current` was never followed by anything.
    pub fn next_word(&self, rng: &mut impl Rng, current: TokenRef<'_>) -> Result<&Token> {
        let successors = self
            .successors(current)
            .ok_or_else(|| GenerateError::NoSuccessor {
                word: current.to_string(),
            })?;
        let next = successors.get_random_token(rng);
        log::trace!("{current:?} -> {next:?}");
        Ok(next)
    }
}

/// Builds a [`TransitionTable`] by being fed tokens and recording, for every token, the one that
/// comes right after it.
#[derive(Clone, Debug, Default)]
pub struct ChainBuilder {
    map: HashMap<Token, Successors>,
    /// Last token of the previous feed, so consecutive feeds form one stream.
    last: Option<Token>,
    fed: usize,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses up the builder and creates a new table.
    ///
    /// # Errors
    ///
    /// [`GenerateError::EmptyCorpus`] if fewer than two tokens were fed in total.
    pub fn build(self) -> Result<TransitionTable> {
        if self.map.is_empty() {
            return Err(GenerateError::EmptyCorpus { tokens: self.fed });
        }
        log::debug!(
            "built transition table with {} keys from {} tokens",
            self.map.len(),
            self.fed
        );
        Ok(TransitionTable { map: self.map })
    }

    /// Add the occurrence of `next` following `prev`.
    pub fn add_occurrence(&mut self, prev: TokenRef<'_>, next: TokenRef<'_>) {
        match self.map.get_mut(prev) {
            Some(s) => s.push(next),
            None => {
                self.map.insert(prev.to_string(), Successors::new(next));
            }
        }
    }

    /// Feeds more tokens. The first token of this feed is recorded as following the last token of
    /// the previous one.
    pub fn feed_tokens(&mut self, tokens: &[Token]) {
        let last = self.last.take();
        for (prev, next) in last.iter().chain(tokens).tuple_windows() {
            self.add_occurrence(prev, next);
        }
        self.fed += tokens.len();
        self.last = tokens.last().cloned().or(last);
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use crate::error::GenerateError;
    use crate::TransitionTable;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn empty_builder_fails() {
        assert_eq!(
            TransitionTable::builder().build(),
            Err(GenerateError::EmptyCorpus { tokens: 0 })
        );
    }

    #[test]
    fn single_token_fails() {
        assert_eq!(
            TransitionTable::from_tokens(&words("alone")),
            Err(GenerateError::EmptyCorpus { tokens: 1 })
        );
    }

    #[test]
    fn successors_keep_duplicates_in_order() {
        let table = TransitionTable::from_tokens(&words("a b a c a b")).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.successors("a").unwrap().as_slice(), ["b", "c", "b"]);
        // The last "b" ends the corpus and adds nothing
        assert_eq!(table.successors("b").unwrap().as_slice(), ["a"]);
        assert_eq!(table.successors("c").unwrap().as_slice(), ["a"]);
    }

    #[test]
    fn every_key_has_successors() {
        let table =
            TransitionTable::from_tokens(&words("the cat sat on the mat and the cat ran")).unwrap();
        for key in table.keys() {
            assert!(!table.successors(key).unwrap().is_empty());
        }
        // The final token was never followed by anything
        assert!(!table.contains("ran"));
    }

    #[test]
    fn next_word_only_from_successors() {
        let table = TransitionTable::from_tokens(&words("a b a c a b")).unwrap();
        let mut rng = thread_rng();
        for _ in 0..100 {
            assert_eq!(table.next_word(&mut rng, "b").unwrap(), "a");
            let after_a = table.next_word(&mut rng, "a").unwrap();
            assert!(after_a == "b" || after_a == "c");
        }
    }

    #[test]
    fn next_word_unknown_fails() {
        let table = TransitionTable::from_tokens(&words("a b")).unwrap();
        assert_eq!(
            table.next_word(&mut thread_rng(), "b"),
            Err(GenerateError::NoSuccessor {
                word: "b".to_string()
            })
        );
    }

    #[test]
    fn consecutive_feeds_are_one_stream() {
        let mut cb = TransitionTable::builder();
        cb.feed_tokens(&words("a b"));
        cb.feed_tokens(&[]);
        cb.feed_tokens(&words("c"));
        let table = cb.build().unwrap();
        assert_eq!(table.successors("a").unwrap().as_slice(), ["b"]);
        assert_eq!(table.successors("b").unwrap().as_slice(), ["c"]);
        assert!(!table.contains("c"));
    }
}
