//! Top-level module for the corpus model.
//!
//! This module groups everything around the transition table:
//! - Bigram keys (`Bigram`)
//! - Weighted successor nodes (`CorpusNode`)
//! - The table itself (`TransitionTable`)
//! - Parallel ingestion (`CorpusLoader`)
//! - Binary snapshots (`snapshot`)
//! - Random-walk generation (`ChainGenerator`)

/// Ordered pair of consecutive words used as the table key.
pub mod bigram;

/// Random-walk text generation over a frozen table.
pub mod generator;

/// Parallel file ingestion feeding a single merge thread.
pub mod loader;

/// Per-bigram frequency table of successor words.
pub mod node;

/// Binary save/load of the transition table.
pub mod snapshot;

/// Mapping from bigram to successor node; owns all insertion.
pub mod table;
