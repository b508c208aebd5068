use std::collections::{HashMap, HashSet};

use crate::extract::Message;
use super::bigram::Bigram;
use super::node::CorpusNode;

/// Usernames whose messages are never ingested. The two entries are the
/// aliases the channel bot posted under; feeding its output back into the
/// corpus would make the chain quote itself.
pub const DEFAULT_DENYLIST: [&str; 2] = ["bot_tooper", "bottooper"];

/// Mapping from word bigram to its successor-frequency node.
///
/// # Responsibilities
/// - Own every [`CorpusNode`]; nothing outside the table holds one
/// - Perform the sliding bigram insertion for each ingested message
/// - Enforce key uniqueness (one node per distinct observed bigram)
/// - Serve read-only lookups during generation
///
/// # Invariants
/// - A node exists for a key iff that bigram was observed at least once
///   with a successor, so no node in the table is ever empty
/// - Counts only grow; the table is monotone during ingestion
///
/// Insertion is NOT safe for concurrent callers. Parallel ingestion must
/// extract on worker threads and funnel every mutation through a single
/// thread (see [`CorpusLoader`](super::loader::CorpusLoader)).
#[derive(Clone, Debug)]
pub struct TransitionTable {
	nodes: HashMap<Bigram, CorpusNode>,
	denylist: HashSet<String>,
}

impl Default for TransitionTable {
	fn default() -> Self {
		Self::new()
	}
}

impl TransitionTable {
	/// Creates an empty table with the default bot denylist.
	pub fn new() -> Self {
		Self::with_denylist(DEFAULT_DENYLIST)
	}

	/// Creates an empty table with a custom username denylist.
	pub fn with_denylist<I, S>(denylist: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			nodes: HashMap::new(),
			denylist: denylist.into_iter().map(Into::into).collect(),
		}
	}

	/// Performs the sliding bigram insertion over a token sequence.
	///
	/// For every window `[a, b, c]` of three consecutive tokens, `c` is
	/// recorded as a successor of the bigram `(a, b)`, creating the node on
	/// first sight. Sequences shorter than three tokens produce no
	/// insertions; that is a no-op, not an error.
	pub fn insert(&mut self, tokens: &[&str]) {
		for window in tokens.windows(3) {
			let key = Bigram::new(window[0], window[1]);
			let node = self.nodes.entry(key).or_insert_with(CorpusNode::new);
			node.insert(window[2]);
		}
	}

	/// Ingests one extracted message.
	///
	/// Messages authored by a denylisted username are silently skipped.
	/// Everything else is split on whitespace and fed through the sliding
	/// insertion.
	pub fn insert_message(&mut self, message: &Message) {
		if self.denylist.contains(&message.username) {
			return;
		}
		let tokens: Vec<&str> = message.text.split_whitespace().collect();
		self.insert(&tokens);
	}

	/// Read-only access to the node for `key`, used by the generator.
	pub fn lookup(&self, key: &Bigram) -> Option<&CorpusNode> {
		self.nodes.get(key)
	}

	/// Iterates over every known bigram, in unspecified order.
	///
	/// Callers seeding generation typically collect and shuffle these.
	pub fn keys(&self) -> impl Iterator<Item = &Bigram> {
		self.nodes.keys()
	}

	/// Number of distinct bigrams observed.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub(crate) fn nodes(&self) -> &HashMap<Bigram, CorpusNode> {
		&self.nodes
	}

	/// Rebuilds a table from a deserialized mapping, with the default
	/// denylist (the denylist is configuration, not persisted state).
	pub(crate) fn from_nodes(nodes: HashMap<Bigram, CorpusNode>) -> Self {
		Self { nodes, denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn message(username: &str, text: &str) -> Message {
		Message { username: username.to_owned(), text: text.to_owned() }
	}

	#[test]
	fn short_sequences_are_no_ops() {
		let mut table = TransitionTable::new();
		table.insert(&[]);
		table.insert(&["one"]);
		table.insert(&["one", "two"]);
		assert!(table.is_empty());
	}

	#[test]
	fn sliding_insertion_touches_every_window() {
		let mut table = TransitionTable::new();
		table.insert(&["a", "b", "c", "d"]);

		assert_eq!(table.len(), 2);
		assert_eq!(table.lookup(&Bigram::new("a", "b")).unwrap().count("c"), Some(1));
		assert_eq!(table.lookup(&Bigram::new("b", "c")).unwrap().count("d"), Some(1));
		assert!(table.lookup(&Bigram::new("c", "d")).is_none());
	}

	#[test]
	fn repeated_bigrams_share_one_node() {
		let mut table = TransitionTable::new();
		// Windows (a,a)->a twice; the key must stay unique
		table.insert(&["a", "a", "a", "a"]);

		assert_eq!(table.len(), 1);
		assert_eq!(table.lookup(&Bigram::new("a", "a")).unwrap().count("a"), Some(2));
	}

	#[test]
	fn messages_accumulate_weighted_successors() {
		let mut table = TransitionTable::new();
		table.insert_message(&message("alice", "the cat sat"));
		table.insert_message(&message("bob", "the cat ran"));
		table.insert_message(&message("alice", "the cat sat"));

		let node = table.lookup(&Bigram::new("the", "cat")).unwrap();
		assert_eq!(node.count("sat"), Some(2));
		assert_eq!(node.count("ran"), Some(1));
		assert_eq!(node.total(), 3);
	}

	#[test]
	fn denylisted_authors_insert_nothing() {
		let mut table = TransitionTable::new();
		table.insert_message(&message("bot_tooper", "the cat sat on the mat"));
		table.insert_message(&message("bottooper", "the dog ran down the road"));
		assert!(table.is_empty());

		let mut custom = TransitionTable::with_denylist(["spambot"]);
		custom.insert_message(&message("spambot", "buy cheap gold now"));
		assert!(custom.is_empty());
		custom.insert_message(&message("alice", "buy cheap gold now"));
		assert_eq!(custom.len(), 2);
	}
}
