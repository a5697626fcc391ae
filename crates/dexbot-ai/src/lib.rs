//! Scoring boundary: the pre-trained classifier consumed as an opaque
//! sequence-of-indices → probability-vector function.
//!
//! The ONNX Runtime implementation is feature-gated so environments without
//! a C/C++ toolchain can still build against the [`Scorer`] contract.

mod scorer;
pub use scorer::{ScoreError, Scorer};

#[cfg(feature = "onnx")]
mod onnx;
#[cfg(feature = "onnx")]
pub use onnx::{HfTokenizer, OnnxScorer};
