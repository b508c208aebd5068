use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use log::{info, warn};

use crate::error::CorpusError;
use crate::extract::{Message, MessageExtractor};
use crate::io::{list_log_files, read_file};
use super::table::TransitionTable;

/// Parallel log-file loader feeding a single [`TransitionTable`].
///
/// # Behavior
/// - File paths are chunked across a bounded pool of worker threads.
/// - Each worker reads and extracts its files in isolation, owning its
///   partial results; the extraction phase touches no shared mutable state
///   and needs no locking.
/// - The calling thread collects per-file results over an MPSC channel and
///   merges them into the table sequentially, in file-enumeration order.
///   All table mutation happens here, on one thread.
///
/// Final counts do not depend on the merge order (counts are summed), only
/// execution determinism does.
///
/// # Notes
/// - A file that cannot be read is logged and contributes no messages;
///   ingestion of the remaining files continues.
/// - Per-file progress is logged through the `log` facade.
pub struct CorpusLoader {
	workers: usize,
}

impl Default for CorpusLoader {
	fn default() -> Self {
		Self::new()
	}
}

impl CorpusLoader {
	/// Creates a loader sized to the available hardware concurrency.
	pub fn new() -> Self {
		Self { workers: num_cpus::get() }
	}

	/// Creates a loader with an explicit worker count (at least 1).
	pub fn with_workers(workers: usize) -> Self {
		Self { workers: workers.max(1) }
	}

	/// Builds a fresh table from the given log files.
	pub fn load_corpus<P: AsRef<Path>>(&self, paths: &[P]) -> TransitionTable {
		let mut table = TransitionTable::new();
		self.ingest(&mut table, paths);
		table
	}

	/// Extracts every file in parallel, then merges the messages into
	/// `table` in file-enumeration order.
	pub fn ingest<P: AsRef<Path>>(&self, table: &mut TransitionTable, paths: &[P]) {
		let paths: Vec<PathBuf> = paths.iter().map(|p| p.as_ref().to_path_buf()).collect();
		if paths.is_empty() {
			return;
		}

		let chunk_size = (paths.len() + self.workers - 1) / self.workers;

		let (tx, rx) = mpsc::channel();
		for (chunk_index, chunk) in paths.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			let chunk: Vec<PathBuf> = chunk.to_vec();
			let base = chunk_index * chunk_size;

			thread::spawn(move || {
				let extractor = MessageExtractor::new();
				for (offset, path) in chunk.iter().enumerate() {
					info!("loading {}", path.display());
					let messages = extract_file(&extractor, path);
					tx.send((base + offset, messages)).expect("failed to send from worker thread");
				}
			});
		}
		drop(tx);

		// Merge phase: single-threaded, ordered by file index
		let mut results: Vec<(usize, Vec<Message>)> = rx.iter().collect();
		results.sort_by_key(|(index, _)| *index);

		for (_, messages) in &results {
			for message in messages {
				table.insert_message(message);
			}
		}
	}

	/// Enumerates the `.html` and `.txt` files in `dir` and ingests them.
	///
	/// # Errors
	/// Returns `CorpusError::Io` if the directory itself cannot be read.
	/// Individual unreadable files are skipped, not surfaced.
	pub fn ingest_dir<P: AsRef<Path>>(&self, table: &mut TransitionTable, dir: P) -> Result<(), CorpusError> {
		let files = list_log_files(dir.as_ref())?;
		self.ingest(table, &files);
		Ok(())
	}
}

/// Reads one file and extracts its messages. An unreadable file is worth a
/// warning and an empty result, never an abort.
fn extract_file(extractor: &MessageExtractor, path: &Path) -> Vec<Message> {
	match read_file(path) {
		Ok(lines) => lines.iter().filter_map(|line| extractor.extract(line)).collect(),
		Err(err) => {
			warn!("skipping {}: {}", path.display(), err);
			Vec::new()
		}
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::PathBuf;

	use tempfile::tempdir;

	use crate::model::bigram::Bigram;
	use super::*;

	fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
		let path = dir.join(name);
		fs::write(&path, lines.join("\n")).unwrap();
		path
	}

	#[test]
	fn load_corpus_merges_all_files() {
		let dir = tempdir().unwrap();
		let a = write_log(dir.path(), "a.txt", &[
			"(10:00:01 PM) alice: the cat sat",
			"not a message line",
		]);
		let b = write_log(dir.path(), "b.txt", &[
			"(10:00:02 PM) bob: the cat ran",
			"(10:00:03 PM) alice: the cat sat",
		]);

		let table = CorpusLoader::with_workers(2).load_corpus(&[a, b]);

		let node = table.lookup(&Bigram::new("the", "cat")).unwrap();
		assert_eq!(node.count("sat"), Some(2));
		assert_eq!(node.count("ran"), Some(1));
	}

	#[test]
	fn unreadable_file_contributes_nothing() {
		let dir = tempdir().unwrap();
		let real = write_log(dir.path(), "real.txt", &["(10:00:01 PM) alice: the cat sat"]);
		let missing = dir.path().join("no_such_file.txt");

		let table = CorpusLoader::with_workers(4).load_corpus(&[missing, real]);

		assert_eq!(table.len(), 1);
		assert!(table.lookup(&Bigram::new("the", "cat")).is_some());
	}

	#[test]
	fn ingest_dir_only_picks_log_extensions() {
		let dir = tempdir().unwrap();
		write_log(dir.path(), "log.txt", &["(10:00:01 PM) alice: one two three"]);
		write_log(dir.path(), "log.html", &["(10:00:02 PM) bob: four five six"]);
		write_log(dir.path(), "notes.md", &["(10:00:03 PM) carol: seven eight nine"]);

		let mut table = TransitionTable::new();
		CorpusLoader::with_workers(2).ingest_dir(&mut table, dir.path()).unwrap();

		assert!(table.lookup(&Bigram::new("one", "two")).is_some());
		assert!(table.lookup(&Bigram::new("four", "five")).is_some());
		assert!(table.lookup(&Bigram::new("seven", "eight")).is_none());
	}

	#[test]
	fn ingest_dir_on_missing_directory_is_an_io_error() {
		let mut table = TransitionTable::new();
		let result = CorpusLoader::new().ingest_dir(&mut table, "/no/such/dir");
		assert!(matches!(result, Err(CorpusError::Io(_))));
	}
}
