#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Response selection and entity selection for a template responder.
//!
//! Every function here is stateless: the same inputs give the same output.
//! Template choice is a bag-of-words overlap count; entity choice ranks the
//! utterance's nouns by similarity to a reference category. The tagger and
//! word vectors come in through the traits in `backends`.

/// Error type.
pub mod error;
/// Response templates with a single slot.
pub mod template;
/// Overlap scoring and template selection.
pub mod intent;
/// Noun extraction and similarity ranking.
pub mod entity;
/// `Responder`: selection + extraction + slot filling.
pub mod composer;

pub use composer::{Responder, ResponderConfig, DEFAULT_REFERENCE_CATEGORY};
pub use entity::{best_match, compute_similarity, extract_entity, extract_nouns, SimilarityTriple};
pub use error::ReasonError;
pub use intent::{compare_overlap, score_templates, select_response};
pub use template::{Template, SLOT};
