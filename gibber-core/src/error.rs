use thiserror::Error;

/// Errors surfaced by ingestion and persistence.
///
/// Extraction misses, denylisted authors and exhausted generation walks are
/// not errors; they are represented as `Option`/normal returns at the call
/// sites that produce them.
#[derive(Debug, Error)]
pub enum CorpusError {
	/// A file or directory could not be read or written.
	#[error("i/o failure: {0}")]
	Io(#[from] std::io::Error),

	/// A persisted snapshot is truncated, carries an unknown format tag,
	/// or decodes into a structurally invalid table.
	///
	/// Fatal to the load; the caller decides whether to fall back to an
	/// empty table or abort.
	#[error("corrupt snapshot: {0}")]
	CorruptSnapshot(String),

	/// Serializing a table for a snapshot failed.
	#[error("snapshot encoding failed: {0}")]
	Encode(#[from] postcard::Error),
}
