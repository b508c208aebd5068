use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::info;

use crate::error::CorpusError;
use super::bigram::Bigram;
use super::node::CorpusNode;
use super::table::TransitionTable;

/// Leading bytes of every snapshot file. Bumped when the layout changes,
/// so a stale file fails loudly instead of decoding into garbage.
const FORMAT_TAG: [u8; 4] = *b"GBC1";

/// Serializes the table's full key→node mapping to `destination`.
///
/// The denylist is configuration, not corpus state, and is not persisted.
pub fn save<P: AsRef<Path>>(table: &TransitionTable, destination: P) -> Result<(), CorpusError> {
	let mut bytes = FORMAT_TAG.to_vec();
	bytes.extend(postcard::to_stdvec(table.nodes())?);
	fs::write(&destination, bytes)?;
	info!("dumped {} nodes to {}", table.len(), destination.as_ref().display());
	Ok(())
}

/// Deserializes a snapshot back into an equivalent table.
///
/// # Errors
/// Returns `CorpusError::CorruptSnapshot` if the blob is truncated, carries
/// an unknown format tag, fails to decode, or decodes into a mapping that
/// violates the data-model invariants (an empty node or a zero count).
pub fn load<P: AsRef<Path>>(source: P) -> Result<TransitionTable, CorpusError> {
	let bytes = fs::read(source)?;

	if bytes.len() < FORMAT_TAG.len() || bytes[..FORMAT_TAG.len()] != FORMAT_TAG {
		return Err(CorpusError::CorruptSnapshot("missing or unknown format tag".to_owned()));
	}

	let nodes: HashMap<Bigram, CorpusNode> = postcard::from_bytes(&bytes[FORMAT_TAG.len()..])
		.map_err(|err| CorpusError::CorruptSnapshot(err.to_string()))?;

	for (key, node) in &nodes {
		if node.is_empty() {
			return Err(CorpusError::CorruptSnapshot(format!("node for ({key}) has no successors")));
		}
		if node.successors().any(|(_, count)| count == 0) {
			return Err(CorpusError::CorruptSnapshot(format!("node for ({key}) holds a zero count")));
		}
	}

	Ok(TransitionTable::from_nodes(nodes))
}
