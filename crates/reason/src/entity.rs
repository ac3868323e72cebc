//! Entity selection: the noun in the utterance closest to a reference category.

use backends::{TaggedToken, Tagger, TokenVector, WordVectors};
use tokenize::Normalizer;

use crate::ReasonError;

/// One candidate scored against the reference category.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityTriple {
    /// candidate noun
    pub candidate: String,
    /// reference category text
    pub category: String,
    /// similarity as reported by the vector backend
    pub score: f32,
}

/// Words whose tag carries the noun marker, in order, duplicates kept.
pub fn extract_nouns(tagged: &[TaggedToken]) -> Vec<String> {
    tagged
        .iter()
        .filter(|t| t.is_noun())
        .map(|t| t.word.clone())
        .collect()
}

/// Score every token against `category`.
pub fn compute_similarity<V: WordVectors + ?Sized>(
    vectors: &V,
    tokens: &[TokenVector],
    category: &TokenVector,
) -> Vec<SimilarityTriple> {
    tokens
        .iter()
        .map(|token| SimilarityTriple {
            candidate: token.text.clone(),
            category: category.text.clone(),
            score: vectors.similarity(token, category),
        })
        .collect()
}

// NaN never wins.
fn rank(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score
    }
}

/// Highest-scoring triple, single pass. Among equal maxima the last one wins.
pub fn best_match(triples: &[SimilarityTriple]) -> Option<&SimilarityTriple> {
    let mut iter = triples.iter();
    let mut best = iter.next()?;
    for triple in iter {
        if rank(triple.score) >= rank(best.score) {
            best = triple;
        }
    }
    Some(best)
}

/// The noun in `utterance` most similar to `reference_category`.
///
/// Fails with [`ReasonError::NoEntityFound`] when the utterance has no nouns
/// after normalization and tagging; backend failures surface as
/// [`ReasonError::ExternalCapability`].
pub fn extract_entity<T, V>(
    normalizer: &Normalizer,
    tagger: &T,
    vectors: &V,
    utterance: &str,
    reference_category: &str,
) -> Result<String, ReasonError>
where
    T: Tagger + ?Sized,
    V: WordVectors + ?Sized,
{
    let tokens = normalizer.normalize(utterance);
    let tagged = tagger.tag(&tokens)?;
    let nouns = extract_nouns(&tagged);
    if nouns.is_empty() {
        tracing::debug!(?tagged, "no noun candidates");
        return Err(ReasonError::NoEntityFound);
    }

    let candidates = vectors.embed(&nouns.join(" "))?;
    let category = vectors.embed_span(reference_category)?;
    let triples = compute_similarity(vectors, &candidates, &category);
    tracing::debug!(?triples, "scored noun candidates");

    best_match(&triples)
        .map(|t| t.candidate.clone())
        .ok_or(ReasonError::NoEntityFound)
}
