//! English stopword list.
//!
//! The NLTK English list without its apostrophe forms (`"don't"`, `"it's"`, ...):
//! normalization strips apostrophes before filtering, so those entries could
//! never match. The clitic halves (`"don"`, `"t"`, `"ll"`, ...) are kept.

use std::collections::HashSet;

const ENGLISH: &[&str] = &[
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    // interrogatives & demonstratives
    "what", "which", "who", "whom", "this", "that", "these", "those",
    // be / have / do
    "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing",
    // articles & conjunctions
    "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while",
    // prepositions
    "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "in", "out", "on", "off", "over", "under",
    // adverbs & quantifiers
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "can", "will", "just", "should", "now",
    // clitic fragments
    "s", "t", "d", "ll", "m", "o", "re", "ve", "y",
    "don", "ain", "aren", "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn",
    "ma", "mightn", "mustn", "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Returns the default English stopword set.
pub fn english() -> HashSet<String> {
    ENGLISH.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_contains_basics() {
        let sw = english();
        assert!(sw.contains("the"));
        assert!(sw.contains("is"));
        assert!(sw.contains("there"));
        assert!(sw.contains("don"));
        assert!(!sw.contains("chess"));
        assert!(!sw.contains("hello"));
    }

    #[test]
    fn entries_are_already_normalized() {
        for word in ENGLISH {
            assert!(word.chars().all(|c| c.is_lowercase() && c.is_alphabetic()), "{word}");
        }
    }
}
