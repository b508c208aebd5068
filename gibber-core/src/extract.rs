use regex::Regex;

/// A single chat message extracted from a log line.
///
/// Immutable once produced; ingestion reads it and throws it away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
	pub username: String,
	pub text: String,
}

/// Lines must look like `(10:32:01 PM) username: text`.
/// Hours, minutes and seconds may be one or two digits; the am/pm marker
/// is matched case-insensitively.
const MESSAGE_PATTERN: &str = r"^\(\d{1,2}:\d{1,2}:\d{1,2} (?i:[ap]m)\) (\w+): (.+)";

/// Turns raw log lines into [`Message`]s.
///
/// # Responsibilities
/// - Strip HTML markup and decode common entities (logs are archived as
///   `.html` as often as `.txt`)
/// - Normalize tabs to spaces
/// - Match the timestamped message pattern and capture author and text
///
/// Lines that do not match are dropped, never reported: a log file is full
/// of joins, parts and status noise that is of no use to the corpus.
#[derive(Clone, Debug)]
pub struct MessageExtractor {
	pattern: Regex,
}

impl Default for MessageExtractor {
	fn default() -> Self {
		Self::new()
	}
}

impl MessageExtractor {
	pub fn new() -> Self {
		// The pattern is a checked constant, compilation cannot fail
		Self { pattern: Regex::new(MESSAGE_PATTERN).unwrap() }
	}

	/// Extracts a message from one raw log line.
	///
	/// Returns `None` for lines that do not match the timestamped format.
	pub fn extract(&self, raw: &str) -> Option<Message> {
		let cleaned = strip_markup(raw).replace('\t', " ");
		let captures = self.pattern.captures(cleaned.trim())?;
		Some(Message {
			username: captures[1].to_owned(),
			text: captures[2].to_owned(),
		})
	}
}

/// Removes `<...>` tags and decodes the handful of entities that show up in
/// archived chat logs.
fn strip_markup(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut in_tag = false;
	for c in raw.chars() {
		match c {
			'<' => in_tag = true,
			'>' if in_tag => in_tag = false,
			_ if !in_tag => out.push(c),
			_ => (),
		}
	}
	out.replace("&nbsp;", " ")
		.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extracts_timestamped_line() {
		let extractor = MessageExtractor::new();
		let message = extractor.extract("(10:32:01 PM) alice: hello there friend").unwrap();
		assert_eq!(message.username, "alice");
		assert_eq!(message.text, "hello there friend");
	}

	#[test]
	fn am_pm_marker_is_case_insensitive() {
		let extractor = MessageExtractor::new();
		for line in [
			"(9:05:59 am) bob: morning",
			"(9:05:59 AM) bob: morning",
			"(9:05:59 Pm) bob: morning",
		] {
			assert!(extractor.extract(line).is_some(), "should match: {line}");
		}
	}

	#[test]
	fn strips_markup_and_decodes_entities() {
		let extractor = MessageExtractor::new();
		let message = extractor
			.extract("<font color=\"#a82f2f\">(10:32:01 PM) alice:</font> fish &amp; chips")
			.unwrap();
		assert_eq!(message.username, "alice");
		assert_eq!(message.text, "fish & chips");
	}

	#[test]
	fn tabs_are_treated_as_spaces() {
		let extractor = MessageExtractor::new();
		let message = extractor.extract("(10:32:01 PM) alice: one\ttwo").unwrap();
		assert_eq!(message.text, "one two");
	}

	#[test]
	fn non_matching_lines_are_dropped() {
		let extractor = MessageExtractor::new();
		assert!(extractor.extract("alice has joined the channel").is_none());
		assert!(extractor.extract("10:32:01 PM alice: missing parens").is_none());
		assert!(extractor.extract("").is_none());
	}
}
