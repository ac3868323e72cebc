//! Intent matching: pick the template whose tokens overlap the utterance most.

use tokenize::{BagOfWords, Normalizer};

use crate::ReasonError;

/// Overlap between an utterance and a template.
///
/// Each distinct utterance token adds 1 when the template contains it at
/// least once. Counts on either side do not matter beyond presence.
pub fn compare_overlap(utterance: &BagOfWords, template: &BagOfWords) -> usize {
    utterance
        .iter()
        .filter(|(token, _)| template.contains(token))
        .count()
}

/// Overlap score of every template against `utterance`, in template order.
pub fn score_templates<T: AsRef<str>>(
    normalizer: &Normalizer,
    templates: &[T],
    utterance: &str,
) -> Vec<usize> {
    let bag = normalizer.bag_of_words(utterance);
    templates
        .iter()
        .map(|t| compare_overlap(&bag, &normalizer.bag_of_words(t.as_ref())))
        .collect()
}

/// Index of the first maximum.
fn first_max_index(scores: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Best-overlapping template; ties go to the earliest template.
///
/// When nothing overlaps the first template is returned. An empty template
/// list is a configuration error.
pub fn select_response<'t, T: AsRef<str>>(
    normalizer: &Normalizer,
    templates: &'t [T],
    utterance: &str,
) -> Result<&'t T, ReasonError> {
    let scores = score_templates(normalizer, templates, utterance);
    let idx = first_max_index(&scores).unwrap_or(0);
    let template = templates.get(idx).ok_or_else(|| {
        ReasonError::InvalidConfiguration("no response templates configured".into())
    })?;
    let text: &str = template.as_ref();
    tracing::debug!(?scores, index = idx, template = text, "selected response");
    Ok(template)
}
