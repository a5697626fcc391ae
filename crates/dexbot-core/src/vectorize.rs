//! Fixed-length sequence vectorization.

use crate::vocab::Vocabulary;

/// Map tokens to vocabulary indices and fit them to `max_length`.
///
/// Sequences longer than `max_length` are truncated from the front, keeping
/// the trailing tokens — the most recent words carry the signal in chat
/// messages. Shorter sequences are zero-padded at the end. The output length
/// is always exactly `max_length`.
pub fn vectorize(tokens: &[String], vocab: &Vocabulary, max_length: usize) -> Vec<u32> {
    let start = tokens.len().saturating_sub(max_length);
    let mut out: Vec<u32> = tokens[start..]
        .iter()
        .map(|t| vocab.index_of(t))
        .collect();
    out.resize(max_length, 0);
    out
}
