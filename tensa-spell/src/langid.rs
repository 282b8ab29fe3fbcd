//! Language identification
//!
//! A small statistical scorer: count stopword hits for each supported
//! language over the tokenized input and bucket the text into `Es` or `En`.
//! English wins ties and degenerate input, matching the checker's default.

use serde::{Deserialize, Serialize};
use tensa_analyzer::tokenize;

/// The two language buckets the checker distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Es,
}

impl Lang {
    /// Map a configured locale code to a forced bucket. Anything other than
    /// `"en"`/`"es"` (notably `"auto"`) means detection should run instead.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }
}

const EN_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "of", "to", "in", "on", "at", "for", "with", "was",
    "were", "is", "are", "am", "i", "you", "he", "she", "it", "we", "they", "my", "your", "his",
    "her", "when", "while", "what", "that", "this", "not", "have", "had", "do", "did",
];

const ES_STOPWORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "de", "del", "que", "y", "o", "en",
    "es", "por", "con", "para", "no", "se", "su", "al", "lo", "como", "pero", "sus", "le", "ya",
    "mi", "tu", "yo", "ella", "ellos", "nosotros", "cuando", "mientras", "estaba", "estaban",
    "fue", "era", "muy", "más",
];

/// Bucket `text` into one of the two supported languages.
///
/// Scoring is a plain stopword hit count per language; `En` is returned on
/// ties, empty input, or anything else ambiguous.
pub fn detect_language(text: &str) -> Lang {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Lang::En;
    }

    let mut en_hits = 0usize;
    let mut es_hits = 0usize;
    for token in &tokens {
        let word = token.normalized.as_str();
        if EN_STOPWORDS.contains(&word) {
            en_hits += 1;
        }
        if ES_STOPWORDS.contains(&word) {
            es_hits += 1;
        }
    }

    if es_hits > en_hits {
        Lang::Es
    } else {
        Lang::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_sentences_bucket_to_en() {
        assert_eq!(detect_language("I was studying when you called"), Lang::En);
        assert_eq!(detect_language("the cat sat on the mat"), Lang::En);
    }

    #[test]
    fn spanish_sentences_bucket_to_es() {
        assert_eq!(
            detect_language("yo estaba estudiando cuando llamaste"),
            Lang::Es
        );
        assert_eq!(detect_language("el perro corre en la calle"), Lang::Es);
    }

    #[test]
    fn locale_codes_map_to_buckets() {
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("ES"), Some(Lang::Es));
        assert_eq!(Lang::from_code("auto"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn ambiguous_or_empty_input_defaults_to_en() {
        assert_eq!(detect_language(""), Lang::En);
        assert_eq!(detect_language("zzz qqq"), Lang::En);
        // "no" scores for Spanish but the English hits balance it out.
        assert_eq!(detect_language("no, I did not"), Lang::En);
    }
}
