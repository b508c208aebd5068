use std::collections::HashMap;

use rand::Rng;

use serde::{Deserialize, Serialize};

/// Frequency table of the words observed after one bigram.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate successor occurrences during ingestion
/// - Sample the next word using weighted random sampling
///
/// ## Invariants
/// - Every stored count is >= 1; a word that was never observed is absent,
///   never present with count 0
/// - Entries are only ever created or incremented, never removed
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CorpusNode {
	/// Successor words and how many times each was observed.
	/// Example: { "sat" => 2, "ran" => 1 }
	successors: HashMap<String, usize>,
}

impl CorpusNode {
	/// Creates a node with no observed successors.
	pub fn new() -> Self {
		Self { successors: HashMap::new() }
	}

	/// Records one occurrence of `word` after this node's bigram.
	///
	/// - If the word was already observed, its count is increased.
	/// - Otherwise, a new entry is created with an initial count of 1.
	pub fn insert(&mut self, word: &str) {
		*self.successors.entry(word.to_owned()).or_insert(0) += 1;
	}

	/// Samples a successor word with probability proportional to its count.
	///
	/// A word observed `k` times is `k` times as likely to be chosen as a
	/// word observed once. Returns `None` when the node has no successors,
	/// which is the normal terminal condition for a generation walk, not
	/// an error.
	pub fn sample_next(&self) -> Option<&str> {
		if self.successors.is_empty() {
			return None;
		}

		// Compute the total number of occurrences
		let total: usize = self.successors.values().sum();
		if total == 0 {
			// Should not happen due to invariants, but kept for safety
			return None;
		}

		// Randomly select a word by cumulative subtraction
		let mut r = rand::rng().random_range(0..total);

		let mut fallback: Option<&str> = None;
		for (word, occurrence) in &self.successors {
			if r < *occurrence {
				return Some(word);
			}
			r -= occurrence;
			fallback = Some(word);
		}

		// Fallback: should not happen, but kept for safety.
		fallback
	}

	/// Returns the stored count for `word`, or `None` if it was never
	/// observed after this bigram.
	pub fn count(&self, word: &str) -> Option<usize> {
		self.successors.get(word).copied()
	}

	/// Total number of observations across all successors.
	pub fn total(&self) -> usize {
		self.successors.values().sum()
	}

	pub fn is_empty(&self) -> bool {
		self.successors.is_empty()
	}

	/// Iterates over `(word, count)` pairs in unspecified order.
	pub fn successors(&self) -> impl Iterator<Item = (&str, usize)> {
		self.successors.iter().map(|(word, count)| (word.as_str(), *count))
	}
}
