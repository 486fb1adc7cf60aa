//! Verse tokenization.
//!
//! Converts raw verse text into a stream of normalized word tokens:
//! uppercase, letters only, with hyphens kept only inside compounds
//! such as `RE-ESTABLISH`.

use unicode_categories::UnicodeCategories;

/// Tokenizes verse text and normalizes query words.
pub struct WordTokenizer;

impl WordTokenizer {
    /// Tokenizes raw verse text into normalized words.
    ///
    /// - Converts the text to uppercase
    /// - Drops every character that is not a letter, space, or hyphen
    ///   (without substituting a space)
    /// - Keeps a hyphen only when both neighbours are letters
    /// - Splits on spaces and trims stray hyphens from each word
    #[must_use]
    pub fn tokenize(raw: &str) -> Vec<String> {
        Self::tokens(raw).collect()
    }

    /// Returns a lazy iterator over the tokens of `raw`.
    ///
    /// Yields the same sequence as [`WordTokenizer::tokenize`].
    #[must_use]
    pub fn tokens(raw: &str) -> Tokens {
        Tokens {
            folded: raw.to_uppercase().chars().collect(),
            pos: 0,
        }
    }

    /// Returns true if `raw` contains a token exactly equal to `word`.
    ///
    /// `word` must already be normalized. Stops at the first match.
    #[must_use]
    pub fn contains(raw: &str, word: &str) -> bool {
        !word.is_empty() && Self::tokens(raw).any(|token| token == word)
    }

    /// Normalizes a query word the same way index keys are normalized.
    #[must_use]
    pub fn normalize_query(word: &str) -> String {
        word.trim().to_uppercase()
    }
}

/// Lazy token iterator returned by [`WordTokenizer::tokens`].
#[derive(Clone, Debug)]
pub struct Tokens {
    folded: Vec<char>,
    pos: usize,
}

impl Tokens {
    /// Decides whether the character at `i` survives filtering.
    ///
    /// Hyphen checks look at the case-folded input, not at the filtered
    /// output, so `A,-B` drops the hyphen.
    fn keeps(&self, i: usize) -> bool {
        let c = self.folded[i];
        if c.is_letter() {
            return true;
        }
        c == '-'
            && i > 0
            && i + 1 < self.folded.len()
            && self.folded[i - 1].is_letter()
            && self.folded[i + 1].is_letter()
    }
}

/// Trims boundary hyphens, rejecting segments left empty.
fn finish(segment: &str) -> Option<String> {
    let word = segment.trim_matches('-');
    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut segment = String::new();

        while self.pos < self.folded.len() {
            let i = self.pos;
            self.pos += 1;

            if self.folded[i] == ' ' {
                if let Some(word) = finish(&segment) {
                    return Some(word);
                }
                segment.clear();
            } else if self.keeps(i) {
                segment.push(self.folded[i]);
            }
        }

        // Flush final word
        finish(&segment)
    }
}
