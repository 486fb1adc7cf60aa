//! Corpus index tests.
//!
//! Tests for building the index and answering queries.

use versescope_foundation::VerseRecord;
use versescope_index::{CorpusIndex, CorpusStats};

fn verse(book: &str, chapter: u32, number: u32, text: &str) -> VerseRecord {
    VerseRecord::new(book, chapter, number, text)
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn single_verse_statistics() {
    let index = CorpusIndex::build(vec![verse(
        "Genesis",
        1,
        1,
        "In the beginning God created the heaven and the earth.",
    )]);

    assert_eq!(index.frequency_of("the"), 3);
    assert_eq!(
        index.stats(),
        CorpusStats {
            unique_words: 8,
            total_words: 10,
            total_verses: 1,
        }
    );
}

#[test]
fn empty_corpus() {
    let index = CorpusIndex::build(Vec::new());

    assert_eq!(index.stats(), CorpusStats::default());
    assert!(index.sorted_frequencies().is_empty());
    assert!(index.all_verses().is_empty());
    assert_eq!(index.locations_of("god").count(), 0);
}

#[test]
fn build_accepts_any_iterator() {
    let texts = ["Jesus wept.", "Rejoice evermore.", "Pray without ceasing."];
    let index = CorpusIndex::build(
        texts
            .iter()
            .zip(1..)
            .map(|(text, n)| verse("Verses", 1, n, text)),
    );

    assert_eq!(index.total_verse_count(), 3);
    assert_eq!(index.total_word_count(), 7);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn unknown_word_has_no_frequency_or_locations() {
    let index = CorpusIndex::build(vec![
        verse("Psalms", 1, 1, "Blessed is the man"),
        verse("Psalms", 1, 2, "But his delight is in the law of the LORD"),
    ]);

    assert_eq!(index.frequency_of("selah"), 0);
    assert_eq!(index.locations_of("selah").next(), None);
}

#[test]
fn repeated_word_in_one_verse_is_one_location() {
    let index = CorpusIndex::build(vec![verse(
        "1 Corinthians",
        13,
        4,
        "Love suffereth long, and is kind; love envieth not",
    )]);

    assert_eq!(index.frequency_of("love"), 2);
    let locations: Vec<_> = index.locations_of("love").collect();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].to_string(), "1 Corinthians 13:4");
    assert_eq!(
        locations[0].text,
        "Love suffereth long, and is kind; love envieth not"
    );
}

#[test]
fn locations_are_exact_token_matches() {
    let index = CorpusIndex::build(vec![
        verse("John", 11, 35, "Jesus wept."),
        verse("Luke", 22, 62, "And Peter went out, and wept bitterly."),
        verse("Psalms", 6, 8, "the LORD hath heard the voice of my weeping."),
    ]);

    let refs: Vec<String> = index.locations_of("WEPT").map(|l| l.to_string()).collect();
    assert_eq!(refs, vec!["John 11:35", "Luke 22:62"]);
    assert_eq!(index.locations_of("wep").count(), 0);
}

#[test]
fn locations_iterator_reports_normalized_word() {
    let index = CorpusIndex::build(Vec::new());
    assert_eq!(index.locations_of(" grace ").word(), "GRACE");
}

#[test]
fn sorted_frequencies_use_byte_order() {
    let index = CorpusIndex::build(vec![verse("Test", 1, 1, "DOG cat Ant")]);

    let words: Vec<&str> = index.sorted_frequencies().into_iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["ANT", "CAT", "DOG"]);
}

#[test]
fn sorted_frequencies_hyphen_sorts_before_letters() {
    let index = CorpusIndex::build(vec![verse("Test", 1, 1, "re-enter reap re")]);

    let words: Vec<&str> = index.sorted_frequencies().into_iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["RE", "RE-ENTER", "REAP"]);
}

#[test]
fn case_insensitive_lookup() {
    let index = CorpusIndex::build(vec![verse("1 John", 4, 16, "God is love; and he that dwelleth in love dwelleth in God")]);

    let expected = index.frequency_of("love");
    assert_eq!(expected, 2);
    assert_eq!(index.frequency_of("LOVE"), expected);
    assert_eq!(index.frequency_of(" Love "), expected);
}
