//! Integration tests for Layer 1: Index
//!
//! Tests for tokenization, frequency counting, and location search.

mod corpus_tests;
mod tokenizer_tests;
