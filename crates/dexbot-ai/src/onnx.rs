//! ONNX Runtime scorer for the exported classification model.
//!
//! The model directory holds `model.onnx` — a classifier taking a single
//! `input_ids` int64 tensor of shape `[1, len]` and producing a `[1, n]`
//! float32 probability tensor, one column per label index — and optionally a
//! `tokenizer.json` when the model ships its own word segmentation.

use std::path::Path;

use ort::session::Session;
use ort::value::Tensor;
use tracing::{info, warn};

use dexbot_core::token::Tokenizer as TokenizerContract;

use crate::scorer::{ScoreError, Scorer};

/// Classification scorer backed by ONNX Runtime.
pub struct OnnxScorer {
    session: Session,
}

impl OnnxScorer {
    /// Load the classifier from a directory containing `model.onnx`.
    pub fn load(model_dir: &Path) -> anyhow::Result<Self> {
        let model_path = model_dir.join("model.onnx");
        anyhow::ensure!(model_path.exists(), "model.onnx not found in {model_dir:?}");

        let session = Session::builder()?.commit_from_file(&model_path)?;

        let labels = infer_label_count(session.outputs()[0].dtype());
        info!(
            model = %model_path.display(),
            labels = labels.unwrap_or(0),
            "loaded classification model"
        );
        Ok(Self { session })
    }
}

impl Scorer for OnnxScorer {
    fn score(&mut self, sequence: &[u32]) -> Result<Vec<f32>, ScoreError> {
        let input: Vec<i64> = sequence.iter().map(|&i| i as i64).collect();
        let shape = [1i64, sequence.len() as i64];
        let tensor = Tensor::from_array((shape, input.into_boxed_slice()))?;

        let outputs = self.session.run(ort::inputs!["input_ids" => tensor])?;

        let (output_shape, output_data) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: &[i64] = output_shape;
        if dims.len() != 2 || dims[0] != 1 {
            return Err(ScoreError::BadOutputShape {
                got: dims.to_vec(),
            });
        }

        Ok(output_data.to_vec())
    }
}

/// Try to infer the label count from the ONNX model output type.
fn infer_label_count(output_type: &ort::value::ValueType) -> Option<usize> {
    match output_type {
        ort::value::ValueType::Tensor { shape, .. } => {
            // Last dimension is the label axis.
            shape
                .last()
                .and_then(|&d| if d > 0 { Some(d as usize) } else { None })
        }
        _ => None,
    }
}

/// Word tokenizer backed by a HuggingFace `tokenizer.json`.
///
/// Used instead of the default word tokenizer when the model directory ships
/// its own segmentation rules.
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

impl HfTokenizer {
    /// Load `tokenizer.json` from the model directory.
    pub fn load(model_dir: &Path) -> anyhow::Result<Self> {
        let path = model_dir.join("tokenizer.json");
        let inner = tokenizers::Tokenizer::from_file(&path)
            .map_err(|e| anyhow::anyhow!("load tokenizer: {e}"))?;
        info!(tokenizer = %path.display(), "loaded tokenizer");
        Ok(Self { inner })
    }
}

impl TokenizerContract for HfTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        match self.inner.encode(text, false) {
            Ok(encoding) => encoding.get_tokens().to_vec(),
            Err(e) => {
                warn!(error = %e, "tokenization failed, treating message as empty");
                Vec::new()
            }
        }
    }
}
