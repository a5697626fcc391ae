//! The message handler: one entry point for every inbound chat message.
//!
//! Messages are handled one at a time. The correction memory and the log
//! sink share a single mutex so the read-resolve-append-clear sequence of a
//! correction can never interleave with another correction or with a new
//! query overwriting the slot.

use tokio::sync::Mutex;
use tracing::{debug, info};

use dexbot_ai::{ScoreError, Scorer};
use dexbot_core::labels::LabelRegistry;
use dexbot_core::token::Tokenizer;
use dexbot_core::vocab::Vocabulary;
use dexbot_core::{rank, sanitize, vectorize};
use dexbot_store::{CorrectionSink, CorrectionTarget, Dex, StoreError};

use crate::command::{ChatCommand, parse_command};
use crate::format::{Presentation, present};
use crate::session::CorrectionSession;

/// Fixed acknowledgment once a correction is durably logged.
pub const CORRECTED_REPLY: &str = "Correction recorded, thanks!";

/// Fixed reply for a correction with no query pending.
pub const NOTHING_TO_CORRECT_REPLY: &str = "Nothing to correct yet, send me a query first.";

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),

    #[error("correction log failed: {0}")]
    Store(#[from] StoreError),
}

/// Outbound reply to a handled message. `None` from the handler means the
/// message warranted no response at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Classified(Presentation),
    Corrected,
    NothingToCorrect,
    Pong,
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classified(presentation) => write!(f, "{presentation}"),
            Self::Corrected => write!(f, "{CORRECTED_REPLY}"),
            Self::NothingToCorrect => write!(f, "{NOTHING_TO_CORRECT_REPLY}"),
            Self::Pong => write!(f, "pong"),
        }
    }
}

/// Correction memory and its durable sink, guarded together.
struct Corrections<L> {
    session: CorrectionSession,
    sink: L,
}

/// Classification and correction handling over injected capabilities.
pub struct ChatHandler<T, S, L> {
    tokenizer: T,
    vocab: Vocabulary,
    labels: LabelRegistry,
    dex: Option<Dex>,
    max_length: usize,
    top_k: usize,
    scorer: Mutex<S>,
    corrections: Mutex<Corrections<L>>,
}

impl<T, S, L> ChatHandler<T, S, L>
where
    T: Tokenizer,
    S: Scorer,
    L: CorrectionSink,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        tokenizer: T,
        vocab: Vocabulary,
        labels: LabelRegistry,
        dex: Option<Dex>,
        scorer: S,
        sink: L,
        max_length: usize,
        top_k: usize,
    ) -> Self {
        Self {
            tokenizer,
            vocab,
            labels,
            dex,
            max_length,
            top_k,
            scorer: Mutex::new(scorer),
            corrections: Mutex::new(Corrections {
                session: CorrectionSession::new(),
                sink,
            }),
        }
    }

    /// Handle one inbound message addressed to the bot.
    ///
    /// `Ok(None)` means the message warranted no response: a malformed
    /// correction command, or a query that sanitized to nothing.
    pub async fn handle(&self, message: &str) -> Result<Option<Reply>, ChatError> {
        if message.trim() == "ping" {
            return Ok(Some(Reply::Pong));
        }

        if let Some(ChatCommand::Correct { target }) = parse_command(message) {
            return self.handle_correction(target).await;
        }

        self.classify(message).await
    }

    /// The classification pipeline: sanitize, record pending, vectorize,
    /// score, rank, present.
    async fn classify(&self, message: &str) -> Result<Option<Reply>, ChatError> {
        let query = sanitize(message);
        if query.is_empty() {
            return Ok(None);
        }

        // The pending slot is written before the model runs: a scorer fault
        // must not lose the query, a later correction can still target it.
        self.corrections.lock().await.session.note_query(query.as_str());

        let tokens = self.tokenizer.tokenize(&query);
        let sequence = vectorize(&tokens, &self.vocab, self.max_length);
        debug!(query = %query, tokens = tokens.len(), "vectorized query");

        let probabilities = self.scorer.lock().await.score(&sequence)?;
        let ranked = rank(&probabilities, &self.labels);

        let k = self.top_k.min(ranked.len());
        let presentation = present(&ranked[..k], self.dex.as_ref());
        info!(query = %query, top = %ranked.first().map(|(n, _)| n.as_str()).unwrap_or(""), "classified query");
        Ok(Some(Reply::Classified(presentation)))
    }

    /// The correction workflow, executed under one lock acquisition.
    async fn handle_correction(&self, target: Option<String>) -> Result<Option<Reply>, ChatError> {
        // Missing argument: the command was incomplete, ignore it entirely.
        let Some(raw_target) = target else {
            return Ok(None);
        };

        let mut corrections = self.corrections.lock().await;

        let Some(query) = corrections.session.pending().map(str::to_string) else {
            return Ok(Some(Reply::NothingToCorrect));
        };

        let resolved = match self.labels.name_to_index(&raw_target) {
            Some(index) => CorrectionTarget::Label(index),
            None => CorrectionTarget::Raw(raw_target),
        };

        // Append before clearing: a failed write keeps the query pending.
        corrections.sink.append(&query, &resolved).await?;
        corrections.session.clear();

        Ok(Some(Reply::Corrected))
    }
}
