//! Append-only correction log.
//!
//! Every user correction becomes one line of retraining data:
//! `<sanitized query>\t<target>\n`. The target field carries either the
//! resolved label index or, for names the registry does not recognize, the
//! raw string the user typed — downstream tooling tells them apart by
//! whether the field parses as an integer.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::StoreError;

/// What a correction points at: a known label or a verbatim unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorrectionTarget {
    Label(usize),
    Raw(String),
}

impl fmt::Display for CorrectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(index) => write!(f, "{index}"),
            Self::Raw(name) => write!(f, "{name}"),
        }
    }
}

/// Abstract durable append-only writer for correction records.
///
/// Implementations must make each append atomic per record — no interleaved
/// partial writes — but need no ordering guarantees across restarts.
#[async_trait]
pub trait CorrectionSink: Send {
    async fn append(&mut self, query: &str, target: &CorrectionTarget) -> Result<(), StoreError>;
}

/// File-backed correction log: one tab-separated record per line, UTF-8.
pub struct FileCorrectionLog {
    path: PathBuf,
}

impl FileCorrectionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorrectionSink for FileCorrectionLog {
    async fn append(&mut self, query: &str, target: &CorrectionTarget) -> Result<(), StoreError> {
        let record = format!("{query}\t{target}\n");

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        // One write per record keeps lines whole.
        file.write_all(record.as_bytes()).await?;
        file.flush().await?;

        info!(label = %target, "logged correction");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appends_tab_separated_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrections.tsv");
        let mut log = FileCorrectionLog::new(&path);

        log.append("electric mouse", &CorrectionTarget::Label(3))
            .await
            .unwrap();
        log.append("weird purple ghost", &CorrectionTarget::Raw("Missingno".into()))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "electric mouse\t3\nweird purple ghost\tMissingno\n"
        );
    }

    #[tokio::test]
    async fn appends_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrections.tsv");

        {
            let mut log = FileCorrectionLog::new(&path);
            log.append("first", &CorrectionTarget::Label(0)).await.unwrap();
        }
        {
            let mut log = FileCorrectionLog::new(&path);
            log.append("second", &CorrectionTarget::Label(1)).await.unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\t0\nsecond\t1\n");
    }

    #[tokio::test]
    async fn non_ascii_queries_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrections.tsv");
        let mut log = FileCorrectionLog::new(&path);

        log.append("fée électrique", &CorrectionTarget::Raw("Flabébé".into()))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "fée électrique\tFlabébé\n");
    }

    #[test]
    fn target_display_forms() {
        assert_eq!(CorrectionTarget::Label(42).to_string(), "42");
        assert_eq!(CorrectionTarget::Raw("Mew".into()).to_string(), "Mew");
    }
}
