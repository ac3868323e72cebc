#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Text normalization shared by response selection and entity extraction.
//!
//! Contract: `normalize` is a pure function of its input and the stopword set.
//! Steps, in order:
//! 1. lowercase the whole string;
//! 2. drop every character that is neither a word character nor whitespace;
//! 3. split into words along Unicode word boundaries (UAX #29), so scripts
//!    written without spaces still yield several tokens;
//! 4. drop stopwords.
//!
//! Token order is preserved. Consumers that only care about membership use
//! [`BagOfWords`].

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Default English stopword list.
pub mod stopwords;

/// Matches anything that is not a word character or whitespace.
#[allow(clippy::expect_used)]
fn non_word() -> &'static Regex {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    NON_WORD.get_or_init(|| Regex::new(r"[^\w\s]").expect("literal pattern compiles"))
}

/// Normalizer holding an immutable stopword set.
#[derive(Clone, Debug)]
pub struct Normalizer {
    stopwords: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Normalizer {
    /// Build a normalizer with a caller-provided stopword set.
    ///
    /// Stopwords are compared against already-normalized tokens, so entries
    /// are lowercased here.
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = stopwords
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Normalizer with the default English stopwords.
    pub fn english() -> Self {
        Self {
            stopwords: stopwords::english(),
        }
    }

    /// Normalizer that keeps every token.
    pub fn without_stopwords() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    /// Extend the stopword set (e.g. from configuration).
    pub fn with_extra_stopwords<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(extra.into_iter().map(|s| s.as_ref().to_lowercase()));
        self
    }

    /// Whether `token` is filtered out as a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Normalize `text` into an ordered token sequence.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = non_word().replace_all(&lowered, "");
        let tokens: Vec<String> = stripped
            .split_whitespace()
            .flat_map(|chunk| chunk.unicode_words())
            .filter(|t| !self.is_stopword(t))
            .map(str::to_string)
            .collect();
        tracing::trace!(input = text, ?tokens, "normalized");
        tokens
    }

    /// Normalize `text` straight into token counts.
    pub fn bag_of_words(&self, text: &str) -> BagOfWords {
        BagOfWords::from_tokens(self.normalize(text))
    }
}

/// Join normalized tokens back into a single space-separated string.
pub fn normalize_to_string(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// Token → occurrence count. Iteration order is unspecified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BagOfWords {
    counts: HashMap<String, usize>,
}

impl BagOfWords {
    /// Count tokens.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Whether `token` occurs at least once.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Occurrences of `token` (0 when absent).
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Distinct tokens with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no tokens were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
