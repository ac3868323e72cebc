use std::io;
use std::process::ExitCode;

use chatbot::{BotConfig, ChatBot, DEFAULT_CONFIG_FILE};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // logs go to stderr so stdout carries only the conversation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let bot = match BotConfig::load_or_default(DEFAULT_CONFIG_FILE).and_then(|c| ChatBot::from_config(&c)) {
        Ok(bot) => bot,
        Err(e) => {
            eprintln!("chat: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    match bot.chat(stdin.lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "chat failed");
            eprintln!("chat: {e}");
            ExitCode::FAILURE
        }
    }
}
