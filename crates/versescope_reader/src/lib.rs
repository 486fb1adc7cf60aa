//! Corpus document reading for VerseScope.
//!
//! Turns a book → chapter → verse XML document into the ordered
//! [`VerseRecord`] sequence the index is built from.
//!
//! ```text
//! <bible>
//!   <b n="Genesis">
//!     <c n="1">
//!       <v n="1">In the beginning God created the heaven and the earth.</v>
//! ```
//!
//! Element names are not significant; the nesting depth decides whether an
//! element is a book, a chapter or a verse. Every level must carry an `n`
//! attribute, and chapter and verse identifiers must be positive integers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod xml;

use std::path::Path;

use versescope_foundation::{Result, VerseRecord};

pub use xml::XmlCorpusReader;

/// Reads every verse of the XML corpus at `path`, in document order.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the document is malformed.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<VerseRecord>> {
    XmlCorpusReader::read_file(path.as_ref())
}
