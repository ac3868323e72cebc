use crate::BackendError;

/// First character shared by every noun label (`NN`, `NNS`, `NNP`, `NNPS`).
pub const NOUN_MARKER: char = 'N';

/// A word paired with its part-of-speech label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedToken {
    /// the token as it was tagged
    pub word: String,
    /// Penn Treebank label, e.g. `NN`, `VBG`, `JJ`
    pub tag: String,
}

impl TaggedToken {
    /// Pair a word with a label.
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// True for common and proper noun labels.
    pub fn is_noun(&self) -> bool {
        self.tag.starts_with(NOUN_MARKER)
    }
}

/// Part-of-speech tagging capability.
///
/// Implementations are built once and shared read-only, hence `Send + Sync`.
pub trait Tagger: Send + Sync {
    /// Tag every token, preserving order and length.
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, BackendError>;

    /// Human-readable backend name (for logging).
    fn name(&self) -> &str;
}
