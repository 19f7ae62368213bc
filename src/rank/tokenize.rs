// file: src/rank/tokenize.rs
// description: word tokenizer feeding the TF-IDF vectorizer
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Runs of word characters, two or more. Single-character tokens carry
    // almost no signal and would bloat the vocabulary.
    static ref WORD: Regex = Regex::new(r"\b\w\w+\b").expect("WORD regex is valid");
}

/// Lowercased word tokens of `text`, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
