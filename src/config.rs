//! Knobs for a [`Generator`](crate::Generator).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clean::CleanPolicy;
use crate::format::Formatter;

/// Words sampled after the starter word, unless told otherwise.
pub const DEFAULT_SENTENCE_LENGTH: usize = 10;

/// How many of the most common tokens may start a sentence.
pub const DEFAULT_STARTER_POOL: usize = 75;

/// Settings for a [`Generator`](crate::Generator).
///
/// ```
/// # use parrotish::{CleanPolicy, GeneratorConfig};
/// let config = GeneratorConfig::default()
///     .with_sentence_length(5)
///     .with_clean_policy(CleanPolicy::ExactMatch);
/// assert_eq!(config.sentence_length, 5);
/// assert_eq!(config.starter_pool, 75);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Words sampled after the starter; a sentence has one more word than this.
    pub sentence_length: usize,
    pub starter_pool: usize,
    pub clean_policy: CleanPolicy,
    pub formatter: Formatter,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sentence_length: DEFAULT_SENTENCE_LENGTH,
            starter_pool: DEFAULT_STARTER_POOL,
            clean_policy: CleanPolicy::default(),
            formatter: Formatter::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_sentence_length(mut self, sentence_length: usize) -> Self {
        self.sentence_length = sentence_length;
        self
    }

    pub fn with_starter_pool(mut self, starter_pool: usize) -> Self {
        self.starter_pool = starter_pool;
        self
    }

    pub fn with_clean_policy(mut self, clean_policy: CleanPolicy) -> Self {
        self.clean_policy = clean_policy;
        self
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }
}
