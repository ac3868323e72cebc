//! Composition: chosen template + chosen entity → reply.

use backends::{Tagger, WordVectors};
use tokenize::Normalizer;

use crate::entity::extract_entity;
use crate::intent::select_response;
use crate::{ReasonError, Template};

/// Default anchor every candidate noun is compared against.
pub const DEFAULT_REFERENCE_CATEGORY: &str = "general topic";

/// Immutable responder configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponderConfig {
    /// candidate replies, in priority order for ties
    pub templates: Vec<Template>,
    /// category text nouns are ranked against
    pub reference_category: String,
}

impl ResponderConfig {
    /// Parse every template; fails on the first one without exactly one slot.
    pub fn new<I, S>(templates: I, reference_category: impl Into<String>) -> Result<Self, ReasonError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates = templates
            .into_iter()
            .map(Template::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            templates,
            reference_category: reference_category.into(),
        })
    }

    /// Reject configurations that could never produce a reply.
    pub fn validate(&self) -> Result<(), ReasonError> {
        if self.templates.is_empty() {
            return Err(ReasonError::InvalidConfiguration(
                "no response templates configured".into(),
            ));
        }
        if self.reference_category.trim().is_empty() {
            return Err(ReasonError::InvalidConfiguration(
                "reference category is empty".into(),
            ));
        }
        Ok(())
    }
}

/// Stateless responder over a fixed configuration and long-lived backends.
///
/// Holds no per-call state; `respond` can be called from several threads
/// when the backends allow it (the traits require `Send + Sync`).
pub struct Responder<T, V> {
    config: ResponderConfig,
    normalizer: Normalizer,
    tagger: T,
    vectors: V,
}

impl<T: Tagger, V: WordVectors> Responder<T, V> {
    /// Validate `config` and take ownership of the backends.
    pub fn new(
        config: ResponderConfig,
        normalizer: Normalizer,
        tagger: T,
        vectors: V,
    ) -> Result<Self, ReasonError> {
        config.validate()?;
        tracing::debug!(
            templates = config.templates.len(),
            category = %config.reference_category,
            tagger = tagger.name(),
            vectors = vectors.name(),
            "responder ready"
        );
        Ok(Self {
            config,
            normalizer,
            tagger,
            vectors,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// Best template for `utterance`.
    pub fn select(&self, utterance: &str) -> Result<&Template, ReasonError> {
        select_response(&self.normalizer, &self.config.templates, utterance)
    }

    /// Best entity for `utterance`.
    pub fn entity(&self, utterance: &str) -> Result<String, ReasonError> {
        extract_entity(
            &self.normalizer,
            &self.tagger,
            &self.vectors,
            utterance,
            &self.config.reference_category,
        )
    }

    /// Reply to `utterance`: selected template with the extracted entity in its slot.
    ///
    /// Template selection runs first. Any error is returned as is; a reply is
    /// only produced when both stages succeed.
    pub fn respond(&self, utterance: &str) -> Result<String, ReasonError> {
        let template = self.select(utterance)?;
        let entity = self.entity(utterance)?;
        let reply = template.fill(&entity);
        tracing::debug!(%template, %entity, "composed reply");
        Ok(reply)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use backends::{BackendError, TaggedToken, TokenVector};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Everything is a noun except a few verbs; counts calls.
    #[derive(Default)]
    struct CountingTagger {
        calls: Arc<AtomicUsize>,
    }

    impl Tagger for CountingTagger {
        fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(tokens
                .iter()
                .map(|t| {
                    let tag = match t.as_str() {
                        "really" => "RB",
                        "enjoy" => "VBP",
                        "playing" => "VBG",
                        _ => "NN",
                    };
                    TaggedToken::new(t.as_str(), tag)
                })
                .collect())
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    /// Every known word gets the same direction; unknown words are zero.
    struct FlatVectors;

    impl WordVectors for FlatVectors {
        fn embed(&self, text: &str) -> Result<Vec<TokenVector>, BackendError> {
            Ok(text
                .split_whitespace()
                .map(|w| TokenVector {
                    text: w.to_string(),
                    vector: if w == "chess" || w == "general" || w == "topic" {
                        vec![1.0, 1.0]
                    } else {
                        vec![0.0, 0.0]
                    },
                })
                .collect())
        }

        fn name(&self) -> &str {
            "flat"
        }
    }

    fn responder(templates: &[&str]) -> Result<Responder<CountingTagger, FlatVectors>, ReasonError> {
        let config = ResponderConfig::new(templates.iter().copied(), DEFAULT_REFERENCE_CATEGORY)?;
        Responder::new(config, Normalizer::english(), CountingTagger::default(), FlatVectors)
    }

    #[test]
    fn fills_template_with_top_noun() {
        let r = responder(&["Tell me about {}"]);
        let reply = r.and_then(|r| r.respond("I really enjoy playing chess"));
        assert_eq!(reply.ok().as_deref(), Some("Tell me about chess"));
    }

    #[test]
    fn empty_templates_fail_before_tagging() {
        let tagger = CountingTagger::default();
        let calls = Arc::clone(&tagger.calls);
        let config = ResponderConfig {
            templates: Vec::new(),
            reference_category: DEFAULT_REFERENCE_CATEGORY.into(),
        };
        let r = Responder::new(config, Normalizer::english(), tagger, FlatVectors);
        assert!(matches!(r, Err(ReasonError::InvalidConfiguration(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn bad_template_or_category_is_rejected() {
        assert!(matches!(
            ResponderConfig::new(["no slot"], "general topic"),
            Err(ReasonError::InvalidConfiguration(_))
        ));
        let config = ResponderConfig::new(["About {}"], "  ");
        assert!(matches!(
            config.and_then(|c| c.validate()),
            Err(ReasonError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn missing_entity_propagates_without_partial_reply() {
        let r = responder(&["Tell me about {}"]);
        let reply = r.and_then(|r| r.respond("really enjoy playing"));
        assert!(matches!(reply, Err(ReasonError::NoEntityFound)));
    }

    #[test]
    fn selection_and_entity_are_independent() {
        let r = match responder(&["Tell me about {}", "Let us play {} then"]) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(
            r.select("play chess").map(Template::as_str).ok(),
            Some("Let us play {} then")
        );
        assert_eq!(r.respond("play chess").ok().as_deref(), Some("Let us play chess then"));
        assert_eq!(r.config().templates.len(), 2);
    }
}
