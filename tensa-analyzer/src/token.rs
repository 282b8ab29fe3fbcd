//! Tokenization for the analyzer
//!
//! Raw tokenization is handled entirely by logos: words are maximal runs of
//! non-whitespace characters, whitespace is skipped. Each word keeps its
//! original spelling and byte offset for display and error reporting, plus a
//! normalized form used by every matching rule downstream.

use logos::Logos;
use serde::{Deserialize, Serialize};

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    // Any run of non-whitespace; Unicode letters and diacritics pass through
    #[regex(r"\S+")]
    Word,
}

/// A single word of the input sentence.
///
/// `normalized` is the lowercased word with non-alphanumeric edges trimmed,
/// so `"Called."` matches rules as `"called"` while `text` and `start` still
/// point at the original spelling for display and offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub normalized: String,
    pub start: usize,
}

/// Tokenize a sentence into words with byte offsets.
///
/// Empty or whitespace-only input yields an empty list; callers are expected
/// to short-circuit before running role or tense computation on it.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut lexer = RawToken::lexer(text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if result.is_ok() {
            let slice = lexer.slice();
            tokens.push(Token {
                text: slice.to_string(),
                normalized: normalize(slice),
                start: lexer.span().start,
            });
        }
    }

    tokens
}

/// Lowercase a word and trim punctuation from its edges.
///
/// Interior characters (apostrophes, hyphens, accented letters) are kept as
/// is, so `didn't` and `estudié` survive normalization intact.
pub fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}
