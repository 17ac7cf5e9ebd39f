//! Turns generated tokens back into text, gluing punctuation and contraction fragments onto the
//! word next to them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token::{Token, TokenRef};

/// Tokens glued onto the following token.
pub const PREFIX_GLUE: [&str; 2] = ["@", "#"];

/// Tokens glued onto the preceding token.
pub const SUFFIX_GLUE: [&str; 12] = [
    ".", ",", "'re", "n't", "'", "'t", "'s", "!", "'m", "?", "!?", "?!",
];

/// Joins tokens with single spaces after gluing.
///
/// Tokens are visited left to right:
///
/// - A prefix glue token is joined with the token after it. The joined token is not looked at
///   again, so `["@", "!"]` becomes `"@!"`.
/// - A suffix glue token is appended to the last word written so far. The token right after it is
///   then copied as is, even if it is glue itself: `["wow", "!", "!"]` becomes `"wow! !"`.
/// - A prefix glue token at the very end, or a suffix glue token at the very start, has no
///   neighbour and stays a word of its own.
///
/// ```
/// # use parrotish::Formatter;
/// let f = Formatter::default();
/// assert_eq!(f.format(&["Hello", "world", "@", "bob", "!"]), "Hello world @bob!");
/// assert_eq!(f.format(&["'s", "ok"]), "'s ok");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Formatter {
    prefix: Vec<Token>,
    suffix: Vec<Token>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(PREFIX_GLUE, SUFFIX_GLUE)
    }
}

impl Formatter {
    pub fn new<P, S>(prefix: P, suffix: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Token>,
        S: IntoIterator,
        S::Item: Into<Token>,
    {
        Self {
            prefix: prefix.into_iter().map(Into::into).collect(),
            suffix: suffix.into_iter().map(Into::into).collect(),
        }
    }

    fn is_prefix(&self, token: TokenRef<'_>) -> bool {
        self.prefix.iter().any(|p| p == token)
    }

    fn is_suffix(&self, token: TokenRef<'_>) -> bool {
        self.suffix.iter().any(|s| s == token)
    }

    /// Glues and joins `tokens`. See [`Formatter`] for the rules.
    pub fn format<T: AsRef<str>>(&self, tokens: &[T]) -> String {
        self.glue(tokens).join(" ")
    }

    /// Glues `tokens` without joining them.
    pub fn glue<T: AsRef<str>>(&self, tokens: &[T]) -> Vec<Token> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut rest = tokens.iter().map(AsRef::as_ref);

        while let Some(token) = rest.next() {
            if self.is_prefix(token) {
                match rest.next() {
                    Some(next) => out.push(format!("{token}{next}")),
                    None => out.push(token.to_string()),
                }
            } else if self.is_suffix(token) {
                match out.last_mut() {
                    Some(prev) => {
                        prev.push_str(token);
                        out.extend(rest.next().map(str::to_string));
                    }
                    None => out.push(token.to_string()),
                }
            } else {
                out.push(token.to_string());
            }
        }

        out
    }
}
