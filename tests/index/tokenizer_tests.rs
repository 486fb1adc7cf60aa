//! Tokenizer tests.
//!
//! Tests for converting raw verse text to normalized words.

use versescope_index::WordTokenizer;

#[test]
fn tokenize_genesis_opening() {
    let tokens = WordTokenizer::tokenize("In the beginning God created the heaven and the earth.");

    assert_eq!(
        tokens,
        vec!["IN", "THE", "BEGINNING", "GOD", "CREATED", "THE", "HEAVEN", "AND", "THE", "EARTH"]
    );
}

#[test]
fn tokenize_hyphen_and_comma() {
    let tokens = WordTokenizer::tokenize("Re-establish, O Lord-");

    assert_eq!(tokens, vec!["RE-ESTABLISH", "O", "LORD"]);
}

#[test]
fn tokenize_multiple_hyphen_groups() {
    let tokens = WordTokenizer::tokenize("Beth-el and Ur-of-the-Chaldees");

    assert_eq!(tokens, vec!["BETH-EL", "AND", "UR-OF-THE-CHALDEES"]);
}

#[test]
fn tokenize_dash_between_words_is_dropped() {
    // Spaced dash: both neighbours are spaces
    let tokens = WordTokenizer::tokenize("light - and darkness");

    assert_eq!(tokens, vec!["LIGHT", "AND", "DARKNESS"]);
}

#[test]
fn tokenize_punctuation_concatenates() {
    // Removed characters are not replaced with spaces
    let tokens = WordTokenizer::tokenize("\"Hallelujah!\";Amen");

    assert_eq!(tokens, vec!["HALLELUJAHAMEN"]);
}

#[test]
fn tokenize_empty_input() {
    assert!(WordTokenizer::tokenize("").is_empty());
}

#[test]
fn tokenize_whitespace_only() {
    assert!(WordTokenizer::tokenize("     ").is_empty());
}

#[test]
fn tokenize_no_letters() {
    assert!(WordTokenizer::tokenize("1:1 -- (2) ; 3.").is_empty());
}

#[test]
fn tokenize_multiple_spaces() {
    let tokens = WordTokenizer::tokenize("Jesus   wept");

    assert_eq!(tokens, vec!["JESUS", "WEPT"]);
}

#[test]
fn lazy_tokens_can_stop_early() {
    let mut tokens = WordTokenizer::tokens("Blessed are the meek");

    assert_eq!(tokens.next().as_deref(), Some("BLESSED"));
    assert_eq!(tokens.next().as_deref(), Some("ARE"));
}

#[test]
fn normalize_query_matches_key_rule() {
    assert_eq!(WordTokenizer::normalize_query("  shepherd "), "SHEPHERD");
    assert_eq!(WordTokenizer::normalize_query("Re-Establish"), "RE-ESTABLISH");
}
