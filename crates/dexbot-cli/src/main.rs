//! dexbot entry point: load configuration, assemble the pipeline, and chat
//! over stdin. The real chat transport stays outside this binary; every
//! stdin line is treated as a message addressed to the bot.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncBufReadExt;
use tracing::{error, info};

use dexbot_ai::{HfTokenizer, OnnxScorer, Scorer};
use dexbot_chat::ChatHandler;
use dexbot_core::labels::LabelRegistry;
use dexbot_core::token::{Tokenizer, WordTokenizer};
use dexbot_core::vocab::Vocabulary;
use dexbot_store::{CorrectionSink, Dex, FileCorrectionLog};

mod config;
use config::BotConfig;

#[derive(Parser)]
#[command(name = "dexbot", version, about = "Species classification chat bot")]
struct Args {
    /// Path to the bot configuration file.
    #[arg(long, default_value = "config.yml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = BotConfig::load(&args.config)?;
    anyhow::ensure!(!config.token.is_empty(), "config has an empty access token");
    anyhow::ensure!(!config.labels.is_empty(), "config has an empty label list");

    let vocab = Vocabulary::load(&config.vocab).context("loading vocabulary")?;
    let labels = LabelRegistry::from_names(&config.labels);
    let dex = match &config.dex {
        Some(path) => Some(Dex::load(path).context("loading dex metadata")?),
        None => None,
    };

    let scorer = OnnxScorer::load(&config.model_dir).context("loading model")?;
    let tokenizer: Box<dyn Tokenizer> = if config.model_dir.join("tokenizer.json").exists() {
        Box::new(HfTokenizer::load(&config.model_dir).context("loading tokenizer")?)
    } else {
        Box::new(WordTokenizer)
    };
    let sink = FileCorrectionLog::new(&config.corrections);

    let handler = ChatHandler::new(
        tokenizer,
        vocab,
        labels,
        dex,
        scorer,
        sink,
        config.max_length,
        config.top_k,
    );

    info!(
        version = env!("CARGO_PKG_VERSION"),
        labels = config.labels.len(),
        "dexbot ready"
    );

    chat_loop(&handler).await
}

/// Read messages line by line and print replies until EOF.
async fn chat_loop<T, S, L>(handler: &ChatHandler<T, S, L>) -> anyhow::Result<()>
where
    T: Tokenizer,
    S: Scorer,
    L: CorrectionSink,
{
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        match handler.handle(&line).await {
            Ok(Some(reply)) => println!("{reply}"),
            Ok(None) => {}
            Err(e) => error!(error = %e, "failed to handle message"),
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}
