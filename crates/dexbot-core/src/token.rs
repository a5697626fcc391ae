//! Word tokenization boundary.
//!
//! The scoring model was trained on word-index sequences, so the tokenizer
//! only has to reproduce the training-time preprocessing: lowercase, drop
//! punctuation, split on whitespace. It is still an injected capability so
//! the pipeline can run against other tokenizers (see `dexbot-ai`'s
//! HuggingFace adapter) or deterministic stand-ins in tests.

/// Splits a sanitized message into the word tokens the vocabulary indexes.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }
}

/// Punctuation stripped before splitting, matching the preprocessing the
/// vocabulary was built with.
const FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~";

/// Default tokenizer: lowercase, strip punctuation, split on whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| c.is_whitespace() || FILTERS.contains(c))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
