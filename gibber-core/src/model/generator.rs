use super::bigram::Bigram;
use super::table::TransitionTable;

/// Random-walk text generator over a [`TransitionTable`].
///
/// The generator borrows the table immutably for its whole lifetime, so the
/// table is frozen while generation runs.
///
/// # State machine
/// The walk is "generating" while the bigram of the last two words has a
/// node with successors, and "terminal" once the bigram is absent, the node
/// is exhausted, or the optional word bound is hit. Absence of a table
/// entry is a normal terminal condition, not a fault; there are no retries.
pub struct ChainGenerator<'a> {
	table: &'a TransitionTable,
	max_words: Option<usize>,
}

impl<'a> ChainGenerator<'a> {
	/// Creates an unbounded generator.
	///
	/// A table can contain bigram cycles, and an unbounded walk through one
	/// terminates only with shrinking probability; callers emitting large
	/// batches should prefer [`with_max_words`](Self::with_max_words).
	pub fn new(table: &'a TransitionTable) -> Self {
		Self { table, max_words: None }
	}

	/// Creates a generator that stops once the output reaches `max_words`
	/// words, seed included.
	pub fn with_max_words(table: &'a TransitionTable, max_words: usize) -> Self {
		Self { table, max_words: Some(max_words) }
	}

	/// Walks the chain from `seed` and returns the words joined by single
	/// spaces.
	///
	/// Each step looks up the bigram of the last two words and samples a
	/// successor with probability proportional to its observed count. A
	/// seed absent from the table yields the seed's two words unchanged.
	pub fn generate(&self, seed: &Bigram) -> String {
		let mut words = vec![seed.first().to_owned(), seed.second().to_owned()];
		let mut key = seed.clone();

		loop {
			if let Some(bound) = self.max_words {
				if words.len() >= bound {
					break;
				}
			}

			let next = match self.table.lookup(&key).and_then(|node| node.sample_next()) {
				Some(word) => word.to_owned(),
				None => break,
			};

			key = key.shift(&next);
			words.push(next);
		}

		words.join(" ")
	}
}
