//! Second-order Markov chain model over chat-log corpora.
//!
//! This crate builds a frequency-weighted transition table keyed by word
//! bigrams from raw chat logs and generates pseudo-random text from it:
//! - Weighted successor nodes and bigram-keyed transition table
//! - Parallel log ingestion with a single merge thread
//! - Compact binary snapshots of the table
//! - Random-walk text generation
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Corpus model: transition table, ingestion, persistence and generation.
pub mod model;

/// Extraction of `username: text` messages from raw log lines.
pub mod extract;

/// Error type shared by ingestion and persistence.
pub mod error;

/// I/O utilities (file loading, log file enumeration).
///
/// Not exposed
pub(crate) mod io;
