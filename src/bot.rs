//! Replying to mentions with a sentence that sounds like the person who mentioned us.
//!
//! Nothing in here talks to a network. Fetching posts, remembering which mentions were answered,
//! and delivering replies are behind the [`CorpusSource`], [`Ledger`] and [`ReplySink`] traits, so
//! whoever embeds a [`Responder`] passes in their own authenticated clients.

use std::fs;
use std::io;
use std::path::PathBuf;

use hashbrown::HashSet;
use rand::Rng;

use crate::error::BotError;
use crate::generate::Generator;

/// Someone asking for a sentence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mention {
    /// Screen name of whoever mentioned us.
    pub actor: String,
    /// Identifier of the post that mentioned us.
    pub request_id: String,
}

impl Mention {
    pub fn new(actor: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            request_id: request_id.into(),
        }
    }
}

/// One post from a timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub retweeted: bool,
}

impl Status {
    /// Reposts carry someone else's words.
    pub fn is_repost(&self) -> bool {
        self.retweeted || self.text.contains("RT @")
    }
}

/// Joins a timeline into a corpus, one original post per line.
///
/// ```
/// # use parrotish::bot::{timeline_corpus, Status};
/// let statuses = [
///     Status { text: "mine".into(), retweeted: false },
///     Status { text: "RT @other: theirs".into(), retweeted: false },
///     Status { text: "also theirs".into(), retweeted: true },
/// ];
/// assert_eq!(timeline_corpus(&statuses), "mine\n");
/// ```
pub fn timeline_corpus<'a>(statuses: impl IntoIterator<Item = &'a Status>) -> String {
    let mut corpus = String::new();
    for status in statuses.into_iter().filter(|s| !s.is_repost()) {
        corpus.push_str(&status.text);
        corpus.push('\n');
    }
    corpus
}

/// The text posted back to `actor`.
pub fn compose_reply(actor: &str, sentence: &str) -> String {
    format!("Hey @{actor}\n\n {sentence}")
}

/// Where the text to imitate comes from.
pub trait CorpusSource {
    fn corpus(&mut self, actor: &str) -> io::Result<String>;
}

/// Reads the same file for everyone.
#[derive(Clone, Debug)]
pub struct FileCorpus {
    path: PathBuf,
}

impl FileCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for FileCorpus {
    fn corpus(&mut self, _actor: &str) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// A fixed corpus, handy when the text is already in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticCorpus(pub String);

impl CorpusSource for StaticCorpus {
    fn corpus(&mut self, _actor: &str) -> io::Result<String> {
        Ok(self.0.clone())
    }
}

/// Remembers which mentions have been answered.
pub trait Ledger {
    /// Records the mention. Returns `true` only the first time a given actor and request pair is
    /// claimed.
    fn claim(&mut self, actor: &str, request_id: &str) -> bool;
}

/// A [`Ledger`] that forgets everything when dropped.
#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    claimed: HashSet<(String, String)>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

impl Ledger for MemoryLedger {
    fn claim(&mut self, actor: &str, request_id: &str) -> bool {
        self.claimed.insert((actor.to_string(), request_id.to_string()))
    }
}

/// Where replies go.
pub trait ReplySink {
    fn deliver(&mut self, target: &str, text: &str) -> io::Result<()>;
}

/// Collects replies instead of sending them anywhere.
#[derive(Clone, Debug, Default)]
pub struct Outbox {
    pub sent: Vec<(String, String)>,
}

impl ReplySink for Outbox {
    fn deliver(&mut self, target: &str, text: &str) -> io::Result<()> {
        self.sent.push((target.to_string(), text.to_string()));
        Ok(())
    }
}

/// Answers mentions: claims them in the ledger, reads the corpus, generates, and delivers.
#[derive(Debug)]
pub struct Responder<C, L, S, R> {
    pub generator: Generator<R>,
    pub source: C,
    pub ledger: L,
    pub sink: S,
}

impl<C, L, S, R> Responder<C, L, S, R>
where
    C: CorpusSource,
    L: Ledger,
    S: ReplySink,
    R: Rng,
{
    pub fn new(generator: Generator<R>, source: C, ledger: L, sink: S) -> Self {
        Self {
            generator,
            source,
            ledger,
            sink,
        }
    }

    /// Handles one mention. Returns the delivered reply, or `None` if the ledger says it has
    /// already been answered.
    ///
    /// # Errors
    ///
    /// If the corpus cannot be read, no sentence can be generated, or delivery fails. The mention
    /// stays claimed either way.
    pub fn handle(&mut self, mention: &Mention) -> Result<Option<String>, BotError> {
        if !self.ledger.claim(&mention.actor, &mention.request_id) {
            log::warn!(
                "skipping already answered mention {} from {}",
                mention.request_id,
                mention.actor
            );
            return Ok(None);
        }

        log::info!("{} mentioned us, generating a sentence", mention.actor);
        let corpus = self.source.corpus(&mention.actor)?;
        let sentence = self.generator.sentence(&corpus)?;
        let reply = compose_reply(&mention.actor, &sentence);
        self.sink.deliver(&mention.actor, &reply)?;
        Ok(Some(reply))
    }

    /// Handles every mention, one after the other. A failing mention does not stop the rest.
    pub fn handle_all<'a>(
        &mut self,
        mentions: impl IntoIterator<Item = &'a Mention>,
    ) -> Vec<Result<Option<String>, BotError>> {
        mentions.into_iter().map(|m| self.handle(m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::GeneratorConfig;
    use crate::error::GenerateError;

    const CORPUS: &str = "a b a c a b a";

    fn responder(corpus: &str) -> Responder<StaticCorpus, MemoryLedger, Outbox, StdRng> {
        Responder::new(
            Generator::with_rng(
                GeneratorConfig::default().with_sentence_length(3),
                StdRng::seed_from_u64(1),
            ),
            StaticCorpus(corpus.to_string()),
            MemoryLedger::new(),
            Outbox::default(),
        )
    }

    #[test]
    fn reply_format() {
        assert_eq!(compose_reply("bob", "hi there"), "Hey @bob\n\n hi there");
    }

    #[test]
    fn ledger_claims_once() {
        let mut ledger = MemoryLedger::new();
        assert!(ledger.claim("bob", "1"));
        assert!(!ledger.claim("bob", "1"));
        assert!(ledger.claim("bob", "2"));
        assert!(ledger.claim("alice", "1"));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn answers_each_mention_once() {
        let mut r = responder(CORPUS);
        let mention = Mention::new("bob", "42");

        let reply = r.handle(&mention).unwrap().unwrap();
        assert!(reply.starts_with("Hey @bob\n\n "));
        assert!(r.handle(&mention).unwrap().is_none());

        assert_eq!(r.sink.sent.len(), 1);
        assert_eq!(r.sink.sent[0], ("bob".to_string(), reply));
    }

    #[test]
    fn generation_errors_are_reported() {
        let mut r = responder("lonely");
        let results = r.handle_all(&[Mention::new("bob", "1"), Mention::new("bob", "1")]);
        assert!(matches!(
            results[0],
            Err(BotError::Generate(GenerateError::EmptyCorpus { tokens: 1 }))
        ));
        assert!(matches!(results[1], Ok(None)));
        assert!(r.sink.sent.is_empty());
    }

    struct Missing;

    impl CorpusSource for Missing {
        fn corpus(&mut self, _actor: &str) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no posts"))
        }
    }

    #[test]
    fn io_errors_are_reported() {
        let mut r = Responder::new(
            Generator::default(),
            Missing,
            MemoryLedger::new(),
            Outbox::default(),
        );
        assert!(matches!(
            r.handle(&Mention::new("bob", "1")),
            Err(BotError::Io(_))
        ));
    }

    #[test]
    fn reposts_are_skipped() {
        let statuses = vec![
            Status {
                text: "first".to_string(),
                retweeted: false,
            },
            Status {
                text: "RT @x: nope".to_string(),
                retweeted: false,
            },
            Status {
                text: "second".to_string(),
                retweeted: false,
            },
        ];
        assert_eq!(timeline_corpus(&statuses), "first\nsecond\n");
    }
}
