//! Example reading a corpus from a file and printing sentences that imitate it.
//!
//! Using `cargo run`: `cargo run --example generate_from_file -- <FILE_PATH> [-n <N>] [-c <COUNT>]`
//!
//! Set `RUST_LOG=parrotish=debug` to see what the pipeline is doing.

use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};
use parrotish::{CleanPolicy, Generator, GeneratorConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// Drop tokens containing `//`, `http` or `:`
    Substring,
    /// Drop tokens that are exactly `//`, `http`, `:` or `''`
    Exact,
}

#[derive(Debug, Parser)]
#[command(about = "Generate sentences that sound like the given text")]
struct Args {
    /// Text file to imitate
    file: PathBuf,
    /// Words sampled after the starting word
    #[arg(short = 'n', long, default_value_t = 10)]
    length: usize,
    /// How many sentences to print
    #[arg(short, long, default_value_t = 1)]
    count: usize,
    /// How many of the most common words may start a sentence
    #[arg(long, default_value_t = 75)]
    starters: usize,
    #[arg(long, value_enum, default_value_t = Policy::Substring)]
    policy: Policy,
    /// Stop a sentence early instead of failing when a word has no successor
    #[arg(long)]
    lenient: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let text = match std::fs::read_to_string(&args.file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("could not read {}: {e}", args.file.display());
            exit(1);
        }
    };

    let policy = match args.policy {
        Policy::Substring => CleanPolicy::Substring,
        Policy::Exact => CleanPolicy::ExactMatch,
    };
    let config = GeneratorConfig::default()
        .with_sentence_length(args.length)
        .with_starter_pool(args.starters)
        .with_clean_policy(policy);
    let mut generator = Generator::new(config);

    for _ in 0..args.count {
        let sentence = if args.lenient {
            generator.sentence_at_most(&text)
        } else {
            generator.sentence(&text)
        };
        match sentence {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("failed to generate text: {e}");
                exit(1);
            }
        }
    }
}
