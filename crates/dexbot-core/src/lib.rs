//! Core classification pipeline primitives.
//!
//! Everything here is pure and deterministic: text sanitation, word
//! tokenization, vocabulary-index vectorization, the label registry, and
//! result ranking. Model inference lives in `dexbot-ai`; durable state in
//! `dexbot-store`.

pub mod labels;
pub mod rank;
pub mod sanitize;
pub mod token;
pub mod vectorize;
pub mod vocab;

pub use labels::{LabelRegistry, UNKNOWN_LABEL};
pub use rank::rank;
pub use sanitize::sanitize;
pub use token::{Tokenizer, WordTokenizer};
pub use vectorize::vectorize;
pub use vocab::{VocabError, Vocabulary};
