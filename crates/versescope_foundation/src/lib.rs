//! Core types and errors for VerseScope.
//!
//! This crate provides:
//! - [`VerseRecord`] - One verse of the corpus, in document order
//! - [`WordLocation`] - A borrowed view of a verse that matched a word query
//! - [`Error`] - Rich error types with document context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod verse;

pub use error::{Error, ErrorContext, ErrorKind};
pub use verse::{VerseRecord, WordLocation};

/// Result type alias using the VerseScope error.
pub type Result<T> = std::result::Result<T, Error>;
