//! Example answering mentions offline: the corpus is a file, the answered mentions are kept in
//! memory, and replies are printed instead of posted.
//!
//! Using `cargo run`: `cargo run --example reply_to_mentions -- <FILE_PATH> <ACTOR:ID>...`

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use parrotish::bot::{FileCorpus, MemoryLedger, Mention, Outbox, Responder};
use parrotish::Generator;

#[derive(Debug, Parser)]
#[command(about = "Answer mentions with sentences imitating a corpus file")]
struct Args {
    /// Text file to imitate
    file: PathBuf,
    /// Mentions to answer, as `actor:request_id`. Repeats are answered once.
    #[arg(required = true)]
    mentions: Vec<String>,
}

fn parse_mention(s: &str) -> Option<Mention> {
    let (actor, id) = s.split_once(':')?;
    Some(Mention::new(actor, id))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut mentions = Vec::with_capacity(args.mentions.len());
    for m in &args.mentions {
        match parse_mention(m) {
            Some(mention) => mentions.push(mention),
            None => {
                eprintln!("expected actor:request_id, got {m:?}");
                exit(1);
            }
        }
    }

    let mut responder = Responder::new(
        Generator::default(),
        FileCorpus::new(args.file),
        MemoryLedger::new(),
        Outbox::default(),
    );

    for (mention, result) in mentions.iter().zip(responder.handle_all(&mentions)) {
        match result {
            Ok(Some(_)) => {}
            Ok(None) => println!("-- {} already answered", mention.request_id),
            Err(e) => eprintln!("-- {} failed: {e}", mention.request_id),
        }
    }

    for (target, text) in &responder.sink.sent {
        println!("to {target}:\n{text}\n");
    }
}
