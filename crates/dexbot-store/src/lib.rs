//! Durable state: dex metadata (read-only after load) and the append-only
//! correction log feeding later retraining runs.

mod error;
pub use error::StoreError;

mod dex;
pub use dex::{Dex, DexEntry};

mod corrections;
pub use corrections::{CorrectionSink, CorrectionTarget, FileCorrectionLog};
