use std::env;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use rand::seq::SliceRandom;

use gibber_core::model::bigram::Bigram;
use gibber_core::model::generator::ChainGenerator;
use gibber_core::model::loader::CorpusLoader;
use gibber_core::model::snapshot;
use gibber_core::model::table::TransitionTable;

/// Default number of lines emitted by `generate`.
const DEFAULT_BATCH: usize = 25;

/// Safety bound on walk length; a corpus with bigram cycles can otherwise
/// walk for a very long time.
const MAX_WORDS: usize = 200;

fn main() -> Result<()> {
	env_logger::init();

	let args: Vec<String> = env::args().skip(1).collect();
	match args.first().map(String::as_str) {
		Some("build") if args.len() >= 3 => build(&args[1], &args[2..]),
		Some("generate") if args.len() >= 2 => {
			let count = match args.get(2) {
				Some(raw) => raw.parse().context("count must be a number")?,
				None => DEFAULT_BATCH,
			};
			generate(&args[1], count)
		}
		_ => {
			eprintln!("usage: gibber build <snapshot> <log_dir>...");
			eprintln!("       gibber generate <snapshot> [count]");
			bail!("invalid arguments");
		}
	}
}

/// Ingests every log directory in order and writes one snapshot.
fn build(snapshot_path: &str, log_dirs: &[String]) -> Result<()> {
	let started = Instant::now();

	let mut table = TransitionTable::new();
	let loader = CorpusLoader::new();
	for dir in log_dirs {
		loader
			.ingest_dir(&mut table, dir)
			.with_context(|| format!("failed to ingest {dir}"))?;
	}

	snapshot::save(&table, snapshot_path)
		.with_context(|| format!("failed to write {snapshot_path}"))?;

	println!("Finished in {} seconds.", started.elapsed().as_secs());
	Ok(())
}

/// Loads a snapshot and prints a batch of generated lines, each seeded by
/// a different randomly chosen bigram.
fn generate(snapshot_path: &str, count: usize) -> Result<()> {
	let table = snapshot::load(snapshot_path)
		.with_context(|| format!("failed to load {snapshot_path}"))?;
	if table.is_empty() {
		bail!("snapshot {snapshot_path} holds an empty corpus");
	}

	let mut keys: Vec<Bigram> = table.keys().cloned().collect();
	keys.shuffle(&mut rand::rng());

	let generator = ChainGenerator::with_max_words(&table, MAX_WORDS);
	for key in keys.iter().take(count) {
		println!("{}", generator.generate(key));
	}
	Ok(())
}
