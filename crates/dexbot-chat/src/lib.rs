//! Chat-facing service layer.
//!
//! Wires the core pipeline to inbound messages: classification requests flow
//! sanitize → vectorize → score → rank → present, and `!correct` commands
//! drive the correction workflow against the pending-query memory and the
//! durable correction log.

pub mod command;
pub mod format;
pub mod handler;
pub mod session;

pub use command::{ChatCommand, parse_command};
pub use format::{Presentation, present};
pub use handler::{ChatError, ChatHandler, Reply};
pub use session::CorrectionSession;
