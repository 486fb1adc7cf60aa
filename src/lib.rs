//! VerseScope - scripture word-frequency and word-location explorer
//!
//! This crate re-exports all layers of the VerseScope system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: versescope_runtime    — REPL, line editor, pacing, CLI
//! Layer 1: versescope_index      — Tokenizer, corpus index, location search
//!          versescope_reader     — Book/chapter/verse XML reader
//! Layer 0: versescope_foundation — Core types (VerseRecord, WordLocation, Error)
//! ```

pub use versescope_foundation as foundation;
pub use versescope_index as index;
pub use versescope_reader as reader;
pub use versescope_runtime as runtime;
