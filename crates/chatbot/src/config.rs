use std::path::{Path, PathBuf};

use reason::{ResponderConfig, DEFAULT_REFERENCE_CATEGORY};
use serde::{Deserialize, Serialize};

use crate::ChatError;

/// File the `chat` binary looks for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "chatbot.json";

/// Bot configuration, read once at start-up.
///
/// Every field has a default, so a config file only needs the keys it
/// changes. Unknown keys are rejected so a misspelt key cannot be ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    /// prompt shown before reading the user's line
    pub greeting: String,
    /// line printed after every reply
    pub sign_off: String,
    /// printed instead of a reply when no entity can be found
    pub fallback: String,
    /// reply templates, each with exactly one `{}`
    pub templates: Vec<String>,
    /// category candidate nouns are compared against
    pub reference_category: String,
    /// stopwords added to the English list
    pub extra_stopwords: Vec<String>,
    /// word-vector table in text format; bundled table when absent
    pub vectors_path: Option<PathBuf>,
    /// extra `word TAG` lexicon entries for the tagger
    pub lexicon_path: Option<PathBuf>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            greeting: "Hey! I'm a bot. Ask me your questions! ".into(),
            sign_off: "I hope I was able to help. See ya around!".into(),
            fallback: "I'm not sure what you'd like to talk about. Could you say a bit more?".into(),
            templates: vec![
                "It seems like you're interested in {}. Can you tell me more about it?".into(),
                "Ah, {}! That's a fascinating topic. Do you have specific questions?".into(),
                "I'm happy to discuss {} with you. What would you like to know?".into(),
            ],
            reference_category: DEFAULT_REFERENCE_CATEGORY.into(),
            extra_stopwords: Vec::new(),
            vectors_path: None,
            lexicon_path: None,
        }
    }
}

impl BotConfig {
    /// Parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChatError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ChatError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ChatError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse `path` when it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ChatError> {
        let path = path.as_ref();
        if path.exists() {
            let config = Self::load(path)?;
            tracing::info!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Responder part of the configuration (templates are validated here).
    pub fn responder_config(&self) -> Result<ResponderConfig, ChatError> {
        let config = ResponderConfig::new(self.templates.iter().cloned(), self.reference_category.clone())?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_bot() {
        let c = BotConfig::default();
        assert_eq!(c.templates.len(), 3);
        assert_eq!(c.reference_category, "general topic");
        assert!(c.responder_config().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join("bot.json");
        std::fs::write(&path, r#"{ "templates": ["Tell me about {}"] }"#).unwrap_or_else(|e| panic!("{e}"));
        let c = BotConfig::load(&path).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(c.templates, vec!["Tell me about {}".to_string()]);
        assert_eq!(c.sign_off, BotConfig::default().sign_off);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let c = BotConfig::load_or_default(dir.path().join("absent.json"));
        assert_eq!(c.ok(), Some(BotConfig::default()));
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join("bot.json");
        std::fs::write(&path, "{ not json").unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(BotConfig::load(&path), Err(ChatError::ConfigParse { .. })));
    }

    #[test]
    fn misspelt_key_is_reported() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join("bot.json");
        std::fs::write(&path, r#"{ "template": ["Tell me about {}"] }"#).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(BotConfig::load(&path), Err(ChatError::ConfigParse { .. })));
    }

    #[test]
    fn empty_template_list_is_rejected() {
        let c = BotConfig {
            templates: Vec::new(),
            ..BotConfig::default()
        };
        assert!(matches!(
            c.responder_config(),
            Err(ChatError::Reason(reason::ReasonError::InvalidConfiguration(_)))
        ));
    }
}
