#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Linguistic backends used by the responder.
//!
//! Two capabilities sit behind narrow traits so the scoring code can be
//! exercised with deterministic fakes:
//! - [`Tagger`]: part-of-speech tags (Penn Treebank labels, nouns start with `N`);
//! - [`WordVectors`]: per-token vectors plus a bounded similarity.
//!
//! Layout:
//! - `tagger.rs` — `Tagger` trait, `TaggedToken`
//! - `lexicon.rs` — `LexiconTagger` (closed-class lexicon + suffix rules)
//! - `vectors.rs` — `WordVectors` trait, `TokenVector`, `cosine`
//! - `table.rs` — `VectorTable` (text-format word vectors, bundled default table)
//! - `error.rs` — `BackendError`

/// Backend error type.
pub mod error;
/// Lexicon and suffix-rule tagger.
pub mod lexicon;
/// Word-vector table loaded from the whitespace-separated text format.
pub mod table;
/// Tagger trait and tagged tokens.
pub mod tagger;
/// Word-vector trait and cosine similarity.
pub mod vectors;

pub use error::BackendError;
pub use lexicon::LexiconTagger;
pub use table::VectorTable;
pub use tagger::{TaggedToken, Tagger, NOUN_MARKER};
pub use vectors::{cosine, mean_vector, TokenVector, WordVectors};
