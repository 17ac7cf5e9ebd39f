//! Short sentences that sound like someone, using markov chains.
//!
//! Feed `parrotish` a corpus of someone's posts and it will make up a sentence that could have been
//! written by them. Or at least by someone who read their posts once and misremembered all of it.
//!
//! The generator is a first order Markov chain over words: it only looks at the current word and
//! guesses what the next might be, weighted by how often each candidate followed the current word
//! in the corpus. A sentence is produced in a few steps:
//!
//! 1. [`tokenize()`] splits the corpus into words, punctuation, and contraction fragments.
//! 2. A [`CleanPolicy`] throws away links and other noise.
//! 3. A [`TransitionTable`] records which word followed which.
//! 4. A [`FrequencyRanking`] finds the most common words, one of which starts the sentence.
//! 5. Words are sampled from the table until the sentence is long enough.
//! 6. A [`Formatter`] glues punctuation and contractions back onto their words.
//!
//! [`Generator`] does all of it in one call:
//!
//! ```
//! # use parrotish::{Generator, GeneratorConfig};
//! let corpus = "I can't believe it's Monday again. I can't wait for the weekend!";
//! let mut generator = Generator::new(GeneratorConfig::default().with_sentence_length(6));
//! if let Ok(sentence) = generator.sentence_at_most(corpus) {
//!     println!("{sentence}");
//! }
//! ```
//!
//! Randomness comes from the operating system by default, see [`Generator::with_rng()`] for how
//! to use something else.
//!
//! # Features
//!
//! - `serde` - Derives `Serialize` and `Deserialize` for the configuration and the built tables.
//! - `inline-more` - Enables `hashbrown/inline-more`. Enabled by default.

pub mod bot;
pub mod chain;
pub mod clean;
pub mod config;
pub mod distribution;
pub mod error;
pub mod format;
pub mod frequency;
pub mod generate;
pub mod token;

pub use chain::{ChainBuilder, TransitionTable};
pub use clean::CleanPolicy;
pub use config::GeneratorConfig;
pub use distribution::Successors;
pub use error::{BotError, GenerateError};
pub use format::Formatter;
pub use frequency::FrequencyRanking;
pub use generate::{generate_sentence, Corpus, Generator};
pub use token::{tokenize, Token, TokenRef};
