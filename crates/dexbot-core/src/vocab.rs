//! Vocabulary index: token string → model input index.
//!
//! Loaded once at startup from the word-index JSON exported alongside the
//! trained model (`{"pikachu": 42, ...}`). Index 0 is reserved for sequence
//! padding; out-of-vocabulary tokens resolve to the reserved `UNK` entry.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

/// The reserved out-of-vocabulary token. Must be present in every vocabulary.
pub const UNK_TOKEN: &str = "UNK";

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    #[error("vocabulary is not a JSON object of token → index: {0}")]
    Json(#[from] serde_json::Error),

    #[error("vocabulary has no `{UNK_TOKEN}` entry")]
    MissingUnk,

    #[error("token {0:?} maps to index 0, which is reserved for padding")]
    PaddingCollision(String),
}

/// Immutable token → index table with a guaranteed `UNK` fallback.
pub struct Vocabulary {
    index: HashMap<String, u32>,
    unk_index: u32,
}

impl Vocabulary {
    /// Load a vocabulary from a word-index JSON file.
    ///
    /// Fails if the file is unreadable, is not an object of string → integer,
    /// lacks the `UNK` entry, or maps any token to the padding index 0.
    pub fn load(path: &Path) -> Result<Self, VocabError> {
        let raw = fs::read_to_string(path)?;
        let index: HashMap<String, u32> = serde_json::from_str(&raw)?;
        let vocab = Self::from_index(index)?;
        info!(
            tokens = vocab.len(),
            path = %path.display(),
            "loaded vocabulary"
        );
        Ok(vocab)
    }

    /// Build a vocabulary from an already-parsed token → index table.
    pub fn from_index(index: HashMap<String, u32>) -> Result<Self, VocabError> {
        if let Some((token, _)) = index.iter().find(|&(_, &i)| i == 0) {
            return Err(VocabError::PaddingCollision(token.clone()));
        }
        let unk_index = *index.get(UNK_TOKEN).ok_or(VocabError::MissingUnk)?;
        Ok(Self { index, unk_index })
    }

    /// Resolve a token to its index, falling back to `UNK` when absent.
    ///
    /// Never fails: every token maps to a valid model input index.
    pub fn index_of(&self, token: &str) -> u32 {
        self.index.get(token).copied().unwrap_or(self.unk_index)
    }

    /// The index of the reserved `UNK` entry.
    pub fn unk_index(&self) -> u32 {
        self.unk_index
    }

    /// Number of tokens in the table, `UNK` included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
