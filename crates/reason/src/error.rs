use backends::BackendError;

/// Errors surfaced by selection, extraction and composition.
///
/// Nothing in this crate retries or recovers; callers decide what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum ReasonError {
    /// Templates or reference category unusable (empty list, bad slot count, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The utterance has no noun to put in the slot.
    #[error("no entity found in utterance")]
    NoEntityFound,
    /// Tagger or word-vector backend failed.
    #[error("external capability failed: {0}")]
    ExternalCapability(#[from] BackendError),
}
