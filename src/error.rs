//! Errors that end a generation request.

use thiserror::Error;

/// Everything that can go wrong while turning a corpus into a sentence. All of these are terminal
/// for the request that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Fewer than two tokens survived cleaning, so not a single transition could be recorded.
    #[error("corpus has {tokens} usable token(s), at least 2 are needed")]
    EmptyCorpus { tokens: usize },

    /// Sampling reached a word that was never followed by anything.
    #[error("no successor has been observed for {word:?}")]
    NoSuccessor { word: String },

    /// There was no word to start a sentence with.
    #[error("no starter word could be selected")]
    StarterSelection,
}

/// Errors from the reply loop in [`crate::bot`].
#[derive(Debug, Error)]
pub enum BotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("generation failed: {0}")]
    Generate(#[from] GenerateError),
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
