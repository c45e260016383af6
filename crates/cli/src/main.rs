//! Glossa command line.
//!
//! Loads a language definition (the built-in demo by default), builds words
//! from a seeded generator and prints the resulting dictionary.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use glossa_lexicon::{Language, LanguageDefinition};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;


/// Glossa command line arguments.
#[derive(Parser, Debug)]
#[command(name = "glossa")]
#[command(about = "Generate words for a procedurally built language")]
struct Args {
	/// Language definition file (TOML); the demo language when omitted
	#[arg(short, long, value_name = "PATH")]
	definition: Option<PathBuf>,

	/// Seed for the word generator; random when omitted
	#[arg(short, long)]
	seed: Option<u64>,

	/// Number of words to build when no glosses are given
	#[arg(short, long, default_value_t = 5)]
	words: usize,

	/// Syllables per root
	#[arg(long, default_value_t = 2)]
	syllables: usize,

	/// Format words as proper names
	#[arg(short, long)]
	proper: bool,

	/// Affix property to attach, in order (repeatable)
	#[arg(short, long = "affix", value_name = "NAME")]
	affixes: Vec<String>,

	/// Print every sound change before the dictionary
	#[arg(long)]
	explain: bool,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,

	/// Glosses for the built words; `word-1`..`word-N` when omitted
	glosses: Vec<String>,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	let seed = args.seed.unwrap_or_else(rand::random);
	info!(seed, "seeding word generator");

	print!("{}", run(&args, seed)?);
	Ok(())
}

fn run(args: &Args, seed: u64) -> anyhow::Result<String> {
	let definition = match &args.definition {
		Some(path) => LanguageDefinition::load(path).with_context(|| format!("loading {}", path.display()))?,
		None => LanguageDefinition::demo().context("loading the demo language")?,
	};
	let mut language = definition.into_language().context("configuring language")?;
	info!(language = language.name(), "language ready");

	let mut out = String::new();
	if args.explain {
		explain(&language, &mut out);
	}

	let glosses: Vec<String> = if args.glosses.is_empty() {
		(1..=args.words).map(|n| format!("word-{n}")).collect()
	} else {
		args.glosses.clone()
	};
	let affixes: Vec<&str> = args.affixes.iter().map(String::as_str).collect();

	let mut rng = ChaCha8Rng::seed_from_u64(seed);
	for gloss in glosses {
		let word = language
			.build_word(args.syllables, args.proper, &affixes, &mut rng)
			.with_context(|| format!("building {gloss:?}"))?;
		language.add_entry(word, gloss);
	}

	out.push_str(&language.print_dictionary());
	Ok(out)
}

fn explain(language: &Language, out: &mut String) {
	for (index, rule) in language.rules().rules().iter().enumerate() {
		let _ = writeln!(out, "{}. {rule}", index + 1);
		let _ = writeln!(out, "   {}", rule.describe());
	}
	if !language.rules().is_empty() {
		out.push('\n');
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("GLOSSA_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("glossa=debug,glossa_lexicon=debug,glossa_sound_change=debug,warn")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
