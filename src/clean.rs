//! Removes tokens that are noise in short posts: links, link fragments and stray markers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenRef};

/// Patterns looked for by [`CleanPolicy::Substring`].
const NOISE_FRAGMENTS: [&str; 3] = ["//", "http", ":"];

/// Tokens dropped by [`CleanPolicy::ExactMatch`].
const NOISE_TOKENS: [&str; 4] = ["//", "http", ":", "''"];

/// How aggressively tokens are thrown away.
///
/// ```
/// # use parrotish::CleanPolicy;
/// assert!(!CleanPolicy::Substring.keeps("check:this"));
/// assert!(CleanPolicy::ExactMatch.keeps("check:this"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CleanPolicy {
    /// Drop every token that contains `//`, `http` or `:` anywhere. Whole links, `https`, and
    /// anything with a colon in it are gone.
    #[default]
    Substring,
    /// Drop a token only if it is exactly `//`, `http`, `:` or `''`.
    ExactMatch,
}

impl CleanPolicy {
    /// Whether `token` survives cleaning.
    pub fn keeps(self, token: TokenRef<'_>) -> bool {
        match self {
            CleanPolicy::Substring => !NOISE_FRAGMENTS.iter().any(|n| token.contains(n)),
            CleanPolicy::ExactMatch => !NOISE_TOKENS.contains(&token),
        }
    }

    /// Filters `tokens`, keeping the relative order of the survivors.
    pub fn clean(self, tokens: Vec<Token>) -> Vec<Token> {
        let before = tokens.len();
        let cleaned: Vec<Token> = tokens.into_iter().filter(|t| self.keeps(t)).collect();
        log::debug!("{:?} cleaning kept {} of {before} tokens", self, cleaned.len());
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::CleanPolicy;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn default_is_substring() {
        assert_eq!(CleanPolicy::default(), CleanPolicy::Substring);
    }

    #[test]
    fn substring_drops_any_colon() {
        assert!(!CleanPolicy::Substring.keeps("check:this"));
        assert!(!CleanPolicy::Substring.keeps(":"));
        assert!(!CleanPolicy::Substring.keeps("https://t.co/x"));
        assert!(!CleanPolicy::Substring.keeps("//t.co"));
        assert!(CleanPolicy::Substring.keeps("''"));
    }

    #[test]
    fn exact_match_only_drops_markers() {
        assert!(CleanPolicy::ExactMatch.keeps("check:this"));
        assert!(CleanPolicy::ExactMatch.keeps("https://t.co/x"));
        assert!(!CleanPolicy::ExactMatch.keeps(":"));
        assert!(!CleanPolicy::ExactMatch.keeps("http"));
        assert!(!CleanPolicy::ExactMatch.keeps("''"));
        assert!(!CleanPolicy::ExactMatch.keeps("//"));
    }

    #[test]
    fn clean_keeps_order() {
        let tokens = owned(&["a", "http", "b", "x:y", "c", "''"]);
        assert_eq!(
            CleanPolicy::Substring.clean(tokens.clone()),
            owned(&["a", "b", "c", "''"])
        );
        assert_eq!(
            CleanPolicy::ExactMatch.clean(tokens),
            owned(&["a", "b", "x:y", "c"])
        );
    }
}
