//! At the heart of a [`TransitionTable`](crate::TransitionTable) is a [`Token`]. In fact, this is
//! just a String. But we make a distinction here: A Token is a word, a punctuation mark, or a
//! contraction fragment like `n't`.
//!
//! [`tokenize()`] starts from [`unicode_segmentation::UnicodeSegmentation::split_word_bounds()`]
//! and then reshapes the segments the way an English treebank tokenizer would:
//!
//! - whitespace is dropped,
//! - contractions are split off their stem (`"don't"` becomes `"do"`, `"n't"`),
//! - runs of the same kind of punctuation stay together (`"!?"`, `"//"`, `"..."`),
//! - links are kept whole, so a cleaner can throw them away in one piece.

use unicode_segmentation::UnicodeSegmentation;

/// Representation of a string segment.
pub type Token = String;

/// A borrowed version of [`Token`]; if [`Token`] is [`String`], then [`TokenRef`] is `&str`.
pub type TokenRef<'a> = &'a str;

/// Suffixes split off a word after an apostrophe, in addition to `n't`.
const CLITICS: [&str; 6] = ["s", "re", "m", "ll", "ve", "d"];

/// Splits raw text into [`Token`]s. Empty input (or input that is only whitespace) yields no
/// tokens.
///
/// ```
/// # use parrotish::tokenize;
/// assert_eq!(
///     tokenize("Hello. I don't know!?"),
///     vec!["Hello", ".", "I", "do", "n't", "know", "!?"]
/// );
/// assert_eq!(tokenize("@bob it's #fun"), vec!["@", "bob", "it", "'s", "#", "fun"]);
/// assert!(tokenize(" \n\t").is_empty());
/// ```
pub fn tokenize(content: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for chunk in content.split_whitespace() {
        if is_link(chunk) {
            tokens.push(chunk.to_string());
            continue;
        }

        let mut punct: Option<Token> = None;
        for segment in chunk.split_word_bounds() {
            if is_wordlike(segment) {
                tokens.extend(punct.take());
                split_contraction(segment, &mut tokens);
                continue;
            }

            match punct.as_mut() {
                Some(run) if same_punct_class(run, segment) => run.push_str(segment),
                _ => {
                    tokens.extend(punct.take());
                    punct = Some(segment.to_string());
                }
            }
        }
        tokens.extend(punct);
    }

    tokens
}

fn is_link(chunk: &str) -> bool {
    chunk.contains("://") || chunk.starts_with("www.")
}

fn is_wordlike(segment: TokenRef<'_>) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn punct_class(c: char) -> Option<u8> {
    match c {
        '!' | '?' => Some(0),
        '.' => Some(1),
        '/' => Some(2),
        '\'' | '\u{2019}' => Some(3),
        '-' => Some(4),
        _ => None,
    }
}

fn same_punct_class(run: TokenRef<'_>, next: TokenRef<'_>) -> bool {
    let (Some(last), Some(first)) = (run.chars().last(), next.chars().next()) else {
        return false;
    };
    punct_class(last).is_some() && punct_class(last) == punct_class(first)
}

/// Pushes `word` onto `out`, split into stem and clitic if it is a contraction. Curly apostrophes
/// in the clitic are normalised so the formatter can glue the fragment back on.
fn split_contraction(word: TokenRef<'_>, out: &mut Vec<Token>) {
    let lower = word.to_lowercase();
    // Lowercasing may change byte lengths outside ASCII, only split when it did not.
    if lower.len() != word.len() {
        out.push(word.to_string());
        return;
    }

    let Some((at, apostrophe)) = lower
        .char_indices()
        .rev()
        .find(|&(_, c)| c == '\'' || c == '\u{2019}')
    else {
        out.push(word.to_string());
        return;
    };
    let clitic = &lower[at + apostrophe.len_utf8()..];

    if clitic == "t" && at > 1 && lower[..at].ends_with('n') {
        out.push(word[..at - 1].to_string());
        out.push("n't".to_string());
    } else if at > 0 && CLITICS.contains(&clitic) {
        out.push(word[..at].to_string());
        out.push(format!("'{clitic}"));
    } else {
        out.push(word.to_string());
    }
}
