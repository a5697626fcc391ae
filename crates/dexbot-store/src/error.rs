use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dex file is not a JSON object of name → entry: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
