//! The opaque scoring contract.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[cfg(feature = "onnx")]
    #[error("onnx runtime error: {0}")]
    Ort(#[from] ort::Error),

    #[error("model produced unexpected output shape {got:?}, expected [1, n]")]
    BadOutputShape { got: Vec<i64> },

    #[error("{0}")]
    Other(String),
}

/// Scores a vectorized sequence into a probability distribution over the
/// label set.
///
/// The output carries one value per label index, each in [0, 1], not
/// required to sum exactly to 1. A failure must leave the scorer usable for
/// subsequent calls.
pub trait Scorer: Send {
    fn score(&mut self, sequence: &[u32]) -> Result<Vec<f32>, ScoreError>;
}

/// Closures work as scorers, which keeps pipeline tests free of model files.
impl<F> Scorer for F
where
    F: FnMut(&[u32]) -> Result<Vec<f32>, ScoreError> + Send,
{
    fn score(&mut self, sequence: &[u32]) -> Result<Vec<f32>, ScoreError> {
        self(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_scorer() {
        let mut scorer =
            |seq: &[u32]| -> Result<Vec<f32>, ScoreError> { Ok(vec![seq.len() as f32, 0.0]) };
        let probs = scorer.score(&[1, 2, 3]).unwrap();
        assert_eq!(probs, vec![3.0, 0.0]);
    }

    #[test]
    fn failing_scorer_stays_usable() {
        let mut calls = 0u32;
        let mut scorer = move |_: &[u32]| -> Result<Vec<f32>, ScoreError> {
            calls += 1;
            if calls == 1 {
                Err(ScoreError::Other("transient".into()))
            } else {
                Ok(vec![1.0])
            }
        };
        assert!(scorer.score(&[0]).is_err());
        assert_eq!(scorer.score(&[0]).unwrap(), vec![1.0]);
    }
}
