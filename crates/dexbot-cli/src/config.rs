//! Bot configuration, loaded once before the pipeline becomes operational.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

fn default_corrections() -> PathBuf {
    PathBuf::from("corrections.tsv")
}

fn default_max_length() -> usize {
    20
}

fn default_top_k() -> usize {
    3
}

/// Contents of `config.yml`.
#[derive(Debug, Deserialize)]
pub struct BotConfig {
    /// Chat platform access token.
    pub token: String,
    /// Word-index JSON file the model was trained with.
    pub vocab: PathBuf,
    /// Directory holding `model.onnx` and optionally `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Optional dex metadata JSON file.
    #[serde(default)]
    pub dex: Option<PathBuf>,
    /// Append-only correction log.
    #[serde(default = "default_corrections")]
    pub corrections: PathBuf,
    /// Fixed label list, in model output order.
    pub labels: Vec<String>,
    /// Model input sequence length.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// How many candidates a reply summarizes.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl BotConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}
