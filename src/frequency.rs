//! [`FrequencyRanking`] orders the tokens of a corpus by how often they appear. Only the top of the
//! ranking is used, to pick words that sound natural at the start of a sentence.

use hashbrown::HashMap;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenRef};

/// Tokens with their number of occurrences, most common first. Tokens with the same count keep
/// the order in which they first appeared in the corpus.
///
/// ```
/// # use parrotish::FrequencyRanking;
/// let words: Vec<String> = "b a b c a b".split(' ').map(String::from).collect();
/// let ranking = FrequencyRanking::from_tokens(&words, 2);
/// assert_eq!(ranking.as_slice(), [("b".to_string(), 3), ("a".to_string(), 2)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrequencyRanking {
    ranked: Vec<(Token, u64)>,
}

impl FrequencyRanking {
    pub fn builder() -> FrequencyRankingBuilder {
        FrequencyRankingBuilder::new()
    }

    /// Counts `tokens` and keeps the `top` most common. If there are fewer distinct tokens than
    /// `top`, all of them are kept.
    pub fn from_tokens(tokens: &[Token], top: usize) -> Self {
        let mut b = Self::builder();
        for t in tokens {
            b.add_token(t);
        }
        b.build(top)
    }

    pub fn as_slice(&self) -> &[(Token, u64)] {
        &self.ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, u64)> {
        self.ranked.iter().map(|(t, n)| (t, *n))
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// How often `token` appeared, if it made it into the ranking.
    pub fn count(&self, token: TokenRef<'_>) -> Option<u64> {
        self.ranked.iter().find(|(t, _)| t == token).map(|(_, n)| *n)
    }

    /// Picks a ranked token uniformly at random; counts do not weigh in. Only tokens accepted by
    /// `usable` are considered.
    pub fn choose_where(
        &self,
        rng: &mut impl Rng,
        usable: impl Fn(TokenRef<'_>) -> bool,
    ) -> Option<&Token> {
        let candidates: Vec<&Token> = self
            .ranked
            .iter()
            .map(|(t, _)| t)
            .filter(|t| usable(t))
            .collect();
        candidates.choose(rng).copied()
    }
}

/// Builder for [`FrequencyRanking`]. Counts tokens one by one, remembering where each was first
/// seen to break ties.
#[derive(Clone, Debug, Default)]
pub struct FrequencyRankingBuilder {
    /// Token to (occurrences, first position).
    map: HashMap<Token, (u64, usize)>,
    seen: usize,
}

impl FrequencyRankingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an occurrence of this token.
    pub fn add_token(&mut self, token: TokenRef<'_>) {
        match self.map.get_mut(token) {
            Some((n, _)) => {
                *n += 1;
            }
            None => {
                self.map.insert(token.to_string(), (1, self.seen));
            }
        }
        self.seen += 1;
    }

    /// Ranks everything counted so far and keeps the `top` first entries.
    pub fn build(self, top: usize) -> FrequencyRanking {
        let ranked = self
            .map
            .into_iter()
            .sorted_unstable_by_key(|(_, (n, first))| (std::cmp::Reverse(*n), *first))
            .take(top)
            .map(|(t, (n, _))| (t, n))
            .collect();
        FrequencyRanking { ranked }
    }
}
