//! Sentence generation: from raw corpus text to a formatted sentence.

use rand::rngs::OsRng;
use rand::Rng;

use crate::chain::TransitionTable;
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::frequency::FrequencyRanking;
use crate::token::{tokenize, Token};

/// One snapshot of a corpus, ready to generate from: the cleaned tokens, their transition table,
/// and the most common tokens.
#[derive(Clone, Debug)]
pub struct Corpus {
    tokens: Vec<Token>,
    table: TransitionTable,
    starters: FrequencyRanking,
}

impl Corpus {
    /// Tokenizes and cleans `text` according to `config`, then builds everything needed for
    /// generation.
    ///
    /// # Errors
    ///
    /// [`GenerateError::EmptyCorpus`] if fewer than two tokens survive cleaning.
    pub fn from_text(text: &str, config: &GeneratorConfig) -> Result<Self> {
        let tokens = tokenize(text);
        log::debug!("tokenized corpus into {} tokens", tokens.len());
        Self::from_tokens(config.clean_policy.clean(tokens), config.starter_pool)
    }

    /// Builds from already cleaned tokens. `starter_pool` is how many of the most common tokens
    /// may start a sentence.
    pub fn from_tokens(tokens: Vec<Token>, starter_pool: usize) -> Result<Self> {
        let table = TransitionTable::from_tokens(&tokens)?;
        let starters = FrequencyRanking::from_tokens(&tokens, starter_pool);
        Ok(Self {
            tokens,
            table,
            starters,
        })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn starters(&self) -> &FrequencyRanking {
        &self.starters
    }

    /// Picks a starter word uniformly among the most common tokens. Tokens that were never
    /// followed by anything (the last token of the corpus, if it appears nowhere else) are passed
    /// over, so a sentence never dead-ends on its first word.
    ///
    /// # Errors
    ///
    /// [`GenerateError::StarterSelection`] if no ranked token can start a sentence.
    pub fn choose_starter(&self, rng: &mut impl Rng) -> Result<&Token> {
        let starter = self
            .starters
            .choose_where(rng, |t| self.table.contains(t))
            .ok_or(GenerateError::StarterSelection)?;
        log::debug!("starting sentence with {starter:?}");
        Ok(starter)
    }

    /// Generates a starter word followed by exactly `length` sampled words.
    ///
    /// # Errors
    ///
    /// [`GenerateError::NoSuccessor`] if a sampled word was never followed by anything; nothing
    /// generated so far is returned.
    ///
    /// # Panics
    ///
    /// Will panic if `length` is so big no vector can hold that many elements.
    pub fn generate(&self, rng: &mut impl Rng, length: usize) -> Result<Vec<&Token>> {
        let mut word = self.choose_starter(rng)?;
        let mut sentence = Vec::with_capacity(length + 1);
        sentence.push(word);

        for _ in 0..length {
            word = self.table.next_word(rng, word)?;
            sentence.push(word);
        }

        Ok(sentence)
    }

    /// Like [`Corpus::generate()`], but stops early instead of failing when a word without
    /// successors is reached. The result has between 1 and `length + 1` words.
    pub fn generate_at_most(&self, rng: &mut impl Rng, length: usize) -> Result<Vec<&Token>> {
        let mut word = self.choose_starter(rng)?;
        let mut sentence = Vec::with_capacity(length + 1);
        sentence.push(word);

        for _ in 0..length {
            let Some(successors) = self.table.successors(word) else {
                // We found a word that was only ever seen at the very end
                log::debug!("stopping early after {} words at {word:?}", sentence.len());
                break;
            };
            word = successors.get_random_token(rng);
            sentence.push(word);
        }

        Ok(sentence)
    }
}

/// Generates sentences from corpus snapshots. Each call rebuilds the table from the text it is
/// given, so no state is shared between requests except the random source.
///
/// By default randomness comes from the operating system ([`OsRng`]); use
/// [`Generator::with_rng()`] for anything else, like a seeded generator in tests.
///
/// ```
/// # use parrotish::{Generator, GeneratorConfig};
/// let mut generator = Generator::new(GeneratorConfig::default().with_sentence_length(3));
/// let sentence = generator.sentence("the cat sat on the mat and the cat ran off").unwrap();
/// assert!(!sentence.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Generator<R = OsRng> {
    config: GeneratorConfig,
    rng: R,
}

impl Generator<OsRng> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rng(config, OsRng)
    }
}

impl Default for Generator<OsRng> {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Prepares a corpus snapshot with this generator's settings.
    pub fn prepare(&self, text: &str) -> Result<Corpus> {
        Corpus::from_text(text, &self.config)
    }

    /// Generates the words of one sentence, `sentence_length + 1` of them, unformatted.
    pub fn words(&mut self, text: &str) -> Result<Vec<Token>> {
        let corpus = self.prepare(text)?;
        let words = corpus.generate(&mut self.rng, self.config.sentence_length)?;
        Ok(words.into_iter().cloned().collect())
    }

    /// Generates and formats one sentence.
    pub fn sentence(&mut self, text: &str) -> Result<String> {
        let corpus = self.prepare(text)?;
        let words = corpus.generate(&mut self.rng, self.config.sentence_length)?;
        Ok(self.config.formatter.format(&words))
    }

    /// Generates and formats one sentence, stopping early rather than failing on a word that was
    /// never followed by anything.
    pub fn sentence_at_most(&mut self, text: &str) -> Result<String> {
        let corpus = self.prepare(text)?;
        let words = corpus.generate_at_most(&mut self.rng, self.config.sentence_length)?;
        Ok(self.config.formatter.format(&words))
    }
}

/// Generates one formatted sentence from `text` in a single call.
pub fn generate_sentence(
    text: &str,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<String> {
    let corpus = Corpus::from_text(text, config)?;
    let words = corpus.generate(rng, config.sentence_length)?;
    Ok(config.formatter.format(&words))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{thread_rng, SeedableRng};

    use super::{generate_sentence, Corpus, Generator};
    use crate::config::GeneratorConfig;
    use crate::error::GenerateError;

    const POSTS: &str = r#"
I don't think the weather is going to hold up today. @sam you coming?
The weather is great for a walk, isn't it? I think I'll go now!
Check this out https://t.co/abc123 it's the best thing I've seen today.
"#;

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn generate_has_length_plus_one_words() {
        // The last "I" also appears earlier, so no word is a dead end
        let text = "I like cats. You like dogs. I";
        let corpus = Corpus::from_text(text, &GeneratorConfig::default()).unwrap();
        assert!(corpus.tokens().iter().all(|t| corpus.table().contains(t)));
        let mut rng = thread_rng();
        for length in [0, 1, 10, 40] {
            for _ in 0..20 {
                assert_eq!(corpus.generate(&mut rng, length).unwrap().len(), length + 1);
            }
        }
    }

    #[test]
    fn cycle_always_succeeds() {
        // Every word has a successor
        let corpus = Corpus::from_tokens(words("a b a c a b a"), 75).unwrap();
        let mut rng = thread_rng();
        for _ in 0..50 {
            let sentence = corpus.generate(&mut rng, 20).unwrap();
            assert_eq!(sentence.len(), 21);
            for pair in sentence.windows(2) {
                let successors = corpus.table().successors(pair[0]).unwrap();
                assert!(successors.as_slice().contains(pair[1]));
            }
        }
    }

    #[test]
    fn dead_end_fails_or_stops_early() {
        // "a" must start, is followed only by "b", which has no successor
        let corpus = Corpus::from_tokens(words("a b"), 75).unwrap();
        let mut rng = thread_rng();
        assert_eq!(
            corpus.generate(&mut rng, 3),
            Err(GenerateError::NoSuccessor {
                word: "b".to_string()
            })
        );
        assert_eq!(corpus.generate_at_most(&mut rng, 3).unwrap(), ["a", "b"]);
        assert_eq!(corpus.generate(&mut rng, 1).unwrap(), ["a", "b"]);
    }

    #[test]
    fn starter_never_dead_ends() {
        let corpus = Corpus::from_tokens(words("x y z"), 75).unwrap();
        let mut rng = thread_rng();
        for _ in 0..50 {
            let s = corpus.choose_starter(&mut rng).unwrap();
            assert!(s == "x" || s == "y");
        }
    }

    #[test]
    fn starter_comes_from_top_of_ranking() {
        let corpus = Corpus::from_tokens(words("a b a b a c d e f a"), 2).unwrap();
        let mut rng = thread_rng();
        for _ in 0..50 {
            let s = corpus.choose_starter(&mut rng).unwrap();
            assert!(s == "a" || s == "b");
        }
    }

    #[test]
    fn empty_starter_pool_fails() {
        let corpus = Corpus::from_tokens(words("a b a"), 0).unwrap();
        assert_eq!(
            corpus.generate(&mut thread_rng(), 2),
            Err(GenerateError::StarterSelection)
        );
    }

    #[test]
    fn noise_only_corpus_is_empty() {
        let config = GeneratorConfig::default();
        assert!(matches!(
            Corpus::from_text("https://t.co/x http: ::", &config),
            Err(GenerateError::EmptyCorpus { tokens: 0 })
        ));
        assert!(matches!(
            Corpus::from_text("", &config),
            Err(GenerateError::EmptyCorpus { tokens: 0 })
        ));
    }

    #[test]
    fn links_never_show_up() {
        let mut generator = Generator::with_rng(
            GeneratorConfig::default().with_sentence_length(15),
            StdRng::seed_from_u64(7),
        );
        for _ in 0..50 {
            if let Ok(sentence) = generator.sentence_at_most(POSTS) {
                assert!(!sentence.contains("http"));
                assert!(!sentence.contains("//"));
            }
        }
    }

    #[test]
    fn seeded_generators_agree() {
        let config = GeneratorConfig::default().with_sentence_length(8);
        let mut a = Generator::with_rng(config.clone(), StdRng::seed_from_u64(42));
        let mut b = Generator::with_rng(config, StdRng::seed_from_u64(42));
        assert_eq!(a.sentence_at_most(POSTS), b.sentence_at_most(POSTS));
    }

    #[test]
    fn words_and_one_shot() {
        let text = "a b a c a b a";
        let config = GeneratorConfig::default().with_sentence_length(4);
        let mut generator = Generator::new(config.clone());
        assert_eq!(generator.words(text).unwrap().len(), 5);

        let sentence = generate_sentence(text, &config, &mut thread_rng()).unwrap();
        assert_eq!(sentence.split(' ').count(), 5);
    }
}
