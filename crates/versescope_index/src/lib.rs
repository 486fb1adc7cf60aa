//! Tokenization and word indexing for VerseScope.
//!
//! # Architecture
//!
//! ```text
//! "Re-establish, O Lord-"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["RE-ESTABLISH", "O", "LORD"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  CORPUS INDEX   │  → frequencies, totals, location search
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw verse text to normalized word tokens
//! - [`index`] - Aggregate counts and queries over the whole corpus

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod index;
pub mod tokenizer;

// Re-export main types for convenience
pub use index::{CorpusIndex, CorpusStats, WordLocations};
pub use tokenizer::WordTokenizer;
