#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Rule-based chat bot: one question in, one templated answer out.
//!
//! Layout:
//! - `config.rs` — `BotConfig` (JSON, serde) with the classic defaults
//! - `lib.rs` — `ChatBot`: builds backends from config, one-line chat session
//! - `bin/chat.rs` — CLI entry point (logging setup, exit codes)

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use backends::{BackendError, LexiconTagger, VectorTable};
use reason::{ReasonError, Responder};
use tokenize::Normalizer;

/// Configuration file handling.
pub mod config;
pub use config::{BotConfig, DEFAULT_CONFIG_FILE};

/// Start-up and session errors.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// Config file unreadable.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        /// config file
        path: PathBuf,
        /// underlying IO error
        #[source]
        source: io::Error,
    },
    /// Config file is not valid JSON for `BotConfig`.
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        /// config file
        path: PathBuf,
        /// parser error
        #[source]
        source: serde_json::Error,
    },
    /// Tagger or vectors failed to load.
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// Responder rejected the configuration or failed to answer.
    #[error(transparent)]
    Reason(#[from] ReasonError),
    /// Terminal IO failed.
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),
}

/// Responder plus the surrounding conversation text.
pub struct ChatBot {
    responder: Responder<LexiconTagger, VectorTable>,
    greeting: String,
    sign_off: String,
    fallback: String,
}

impl ChatBot {
    /// Load backends and validate templates. Done once per process.
    pub fn from_config(config: &BotConfig) -> Result<Self, ChatError> {
        let tagger = match &config.lexicon_path {
            Some(path) => LexiconTagger::load(path)?,
            None => LexiconTagger::builtin(),
        };
        let vectors = match &config.vectors_path {
            Some(path) => VectorTable::load(path)?,
            None => VectorTable::builtin()?,
        };
        let normalizer = Normalizer::english().with_extra_stopwords(&config.extra_stopwords);
        let responder = Responder::new(config.responder_config()?, normalizer, tagger, vectors)?;
        Ok(Self {
            responder,
            greeting: config.greeting.clone(),
            sign_off: config.sign_off.clone(),
            fallback: config.fallback.clone(),
        })
    }

    /// Underlying responder.
    pub fn responder(&self) -> &Responder<LexiconTagger, VectorTable> {
        &self.responder
    }

    /// Reply text for one utterance.
    ///
    /// An utterance without a usable noun gets the fallback line; any other
    /// failure is returned.
    pub fn reply(&self, utterance: &str) -> Result<String, ChatError> {
        match self.responder.respond(utterance) {
            Ok(reply) => Ok(reply),
            Err(ReasonError::NoEntityFound) => {
                tracing::warn!(utterance, "no entity found, using fallback");
                Ok(self.fallback.clone())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// One exchange: greet, read a line, answer, sign off.
    pub fn chat<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<(), ChatError> {
        write!(output, "{}", self.greeting)?;
        output.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        let reply = self.reply(line.trim_end_matches(['\r', '\n']))?;
        writeln!(output, "{reply}")?;
        writeln!(output, "{}", self.sign_off)?;
        output.flush()?;
        Ok(())
    }
}
