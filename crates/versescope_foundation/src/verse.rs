//! Verse records and query locations.

use std::fmt;

/// One verse of the corpus.
///
/// Records are produced in the document's canonical order
/// (book → chapter → verse) and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VerseRecord {
    /// Book name, as free text.
    pub book: String,
    /// Chapter number (1-based).
    pub chapter: u32,
    /// Verse number within the chapter (1-based).
    pub verse: u32,
    /// Raw verse text, exactly as read from the document.
    pub text: String,
}

impl VerseRecord {
    /// Creates a new verse record.
    #[must_use]
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
            text: text.into(),
        }
    }

    /// Returns a borrowed location view of this verse.
    #[must_use]
    pub fn location(&self) -> WordLocation<'_> {
        WordLocation::from(self)
    }
}

impl fmt::Display for VerseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// A verse in which a queried word occurs at least once.
///
/// Borrows from the index that produced it. Displays as the verse
/// reference, e.g. `Genesis 1:1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WordLocation<'a> {
    /// Book name.
    pub book: &'a str,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
    /// Raw verse text.
    pub text: &'a str,
}

impl<'a> From<&'a VerseRecord> for WordLocation<'a> {
    fn from(record: &'a VerseRecord) -> Self {
        Self {
            book: &record.book,
            chapter: record.chapter,
            verse: record.verse,
            text: &record.text,
        }
    }
}

impl fmt::Display for WordLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}
