//! The corpus word index.
//!
//! [`CorpusIndex`] is built once from the full, ordered verse sequence and is
//! read-only afterwards. Frequency lookups hit the precomputed map; location
//! searches re-tokenize verses on demand.

use std::collections::HashMap;
use std::iter::FusedIterator;
use std::slice;

use tracing::{debug, info};
use versescope_foundation::{VerseRecord, WordLocation};

use crate::tokenizer::WordTokenizer;

/// Summary statistics of a built index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Number of distinct tokens.
    pub unique_words: usize,
    /// Number of token occurrences across all verses.
    pub total_words: usize,
    /// Number of verses processed, including verses without words.
    pub total_verses: usize,
}

/// Immutable word-frequency index over a corpus.
#[derive(Clone, Debug, Default)]
pub struct CorpusIndex {
    /// Verses in document order.
    verses: Vec<VerseRecord>,

    /// Token → number of occurrences (always ≥ 1).
    frequencies: HashMap<String, usize>,

    /// Sum of all values in `frequencies`.
    total_word_count: usize,

    /// Number of verses processed.
    total_verse_count: usize,
}

impl CorpusIndex {
    /// Builds the index from verses in document order.
    #[must_use]
    pub fn build(verses: impl IntoIterator<Item = VerseRecord>) -> Self {
        let mut index = Self::default();

        for verse in verses {
            for token in WordTokenizer::tokens(&verse.text) {
                *index.frequencies.entry(token).or_insert(0) += 1;
                index.total_word_count += 1;
            }
            index.total_verse_count += 1;
            index.verses.push(verse);
        }

        if let (Some(first), Some(last)) = (index.verses.first(), index.verses.last()) {
            debug!(first = %first, last = %last, "indexed verse range");
        }
        info!(
            verses = index.total_verse_count,
            words = index.total_word_count,
            unique = index.frequencies.len(),
            "built corpus index"
        );

        index
    }

    /// Returns how often `word` occurs in the corpus.
    ///
    /// The word is trimmed and uppercased before lookup. Unknown and blank
    /// words return 0.
    #[must_use]
    pub fn frequency_of(&self, word: &str) -> usize {
        let key = WordTokenizer::normalize_query(word);
        self.frequencies.get(&key).copied().unwrap_or(0)
    }

    /// Returns the verses containing `word`, in document order.
    ///
    /// Yields at most one location per verse. Every call rescans the
    /// corpus from the beginning; the iterator may be dropped early.
    #[must_use]
    pub fn locations_of(&self, word: &str) -> WordLocations<'_> {
        WordLocations {
            verses: self.verses.iter(),
            word: WordTokenizer::normalize_query(word),
        }
    }

    /// Returns every token with its count, in ascending byte-wise order.
    #[must_use]
    pub fn sorted_frequencies(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .frequencies
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Returns the indexed verses in their original order.
    #[must_use]
    pub fn all_verses(&self) -> &[VerseRecord] {
        &self.verses
    }

    /// Returns an iterator over every distinct token, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.frequencies.keys().map(String::as_str)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn unique_word_count(&self) -> usize {
        self.frequencies.len()
    }

    /// Number of token occurrences across the corpus.
    #[must_use]
    pub const fn total_word_count(&self) -> usize {
        self.total_word_count
    }

    /// Number of verses processed.
    #[must_use]
    pub const fn total_verse_count(&self) -> usize {
        self.total_verse_count
    }

    /// Returns the three summary statistics together.
    #[must_use]
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            unique_words: self.unique_word_count(),
            total_words: self.total_word_count,
            total_verses: self.total_verse_count,
        }
    }
}

/// Lazy location search returned by [`CorpusIndex::locations_of`].
#[derive(Clone, Debug)]
pub struct WordLocations<'a> {
    verses: slice::Iter<'a, VerseRecord>,
    word: String,
}

impl WordLocations<'_> {
    /// The normalized word being searched for.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

impl<'a> Iterator for WordLocations<'a> {
    type Item = WordLocation<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.word.is_empty() {
            return None;
        }
        let word = self.word.as_str();
        self.verses
            .find(|verse| WordTokenizer::contains(&verse.text, word))
            .map(VerseRecord::location)
    }
}

impl FusedIterator for WordLocations<'_> {}
