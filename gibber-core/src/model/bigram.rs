use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered pair of two consecutive words.
///
/// Bigrams compare and hash by value and serve as the transition table's
/// key type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bigram {
	first: String,
	second: String,
}

impl Bigram {
	pub fn new(first: &str, second: &str) -> Self {
		Self { first: first.to_owned(), second: second.to_owned() }
	}

	pub fn first(&self) -> &str {
		&self.first
	}

	pub fn second(&self) -> &str {
		&self.second
	}

	/// Slides the window one word forward: `(a, b)` shifted by `c` is `(b, c)`.
	pub fn shift(&self, next: &str) -> Self {
		Self::new(&self.second, next)
	}
}

impl fmt::Display for Bigram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.first, self.second)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shift_slides_the_window() {
		let key = Bigram::new("the", "cat");
		assert_eq!(key.shift("sat"), Bigram::new("cat", "sat"));
	}

	#[test]
	fn equality_is_by_value() {
		assert_eq!(Bigram::new("a", "b"), Bigram::new("a", "b"));
		assert_ne!(Bigram::new("a", "b"), Bigram::new("b", "a"));
	}
}
