//! Text formatting for explorer output.

/// Formats a count with comma thousands separators (`31102` → `31,102`).
#[must_use]
pub fn count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Message printed when a word never occurs in the corpus.
#[must_use]
pub fn not_found(word: &str, label: &str) -> String {
    format!("{word} was not found in this {label}.")
}

/// Message printed with the occurrence count of a word.
#[must_use]
pub fn found(word: &str, occurrences: usize, label: &str) -> String {
    format!("{word} was found ({}) times in this {label}.", count(occurrences))
}
