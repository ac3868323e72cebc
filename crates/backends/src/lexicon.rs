//! Context-free tagger: lexicon lookup first, then suffix rules, then noun.
//!
//! Good enough to separate nouns from the function words, common verbs and
//! interjections that survive stopword removal in short chat utterances. It
//! does not disambiguate by context ("play" is always a verb).

use std::collections::HashMap;
use std::path::Path;

use crate::{BackendError, TaggedToken, Tagger};

const BUILTIN: &[(&str, &str)] = &[
    // determiners & pronouns
    ("a", "DT"), ("an", "DT"), ("the", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("some", "DT"), ("any", "DT"),
    ("i", "PRP"), ("me", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"),
    ("it", "PRP"), ("we", "PRP"), ("they", "PRP"), ("him", "PRP"), ("her", "PRP$"),
    ("us", "PRP"), ("them", "PRP"), ("my", "PRP$"), ("your", "PRP$"), ("our", "PRP$"),
    ("their", "PRP$"), ("its", "PRP$"), ("his", "PRP$"),
    ("something", "NN"), ("anything", "NN"), ("everything", "NN"), ("nothing", "NN"),
    ("what", "WP"), ("who", "WP"), ("which", "WDT"), ("when", "WRB"), ("where", "WRB"),
    ("why", "WRB"), ("how", "WRB"),
    // prepositions & conjunctions
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("about", "IN"), ("from", "IN"), ("into", "IN"),
    ("to", "TO"), ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"),
    ("because", "IN"), ("if", "IN"), ("than", "IN"),
    // auxiliaries & modals
    ("am", "VBP"), ("is", "VBZ"), ("are", "VBP"), ("was", "VBD"), ("were", "VBD"),
    ("be", "VB"), ("been", "VBN"), ("being", "VBG"), ("have", "VBP"), ("has", "VBZ"),
    ("had", "VBD"), ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"),
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"),
    // frequent verbs
    ("love", "VBP"), ("like", "VBP"), ("enjoy", "VBP"), ("want", "VBP"), ("need", "VBP"),
    ("know", "VBP"), ("think", "VBP"), ("tell", "VB"), ("talk", "VB"), ("play", "VBP"),
    ("learn", "VB"), ("read", "VB"), ("write", "VB"), ("watch", "VB"), ("see", "VB"),
    ("help", "VB"), ("ask", "VB"), ("hate", "VBP"), ("prefer", "VBP"), ("get", "VB"),
    ("make", "VB"), ("go", "VB"), ("say", "VB"), ("discuss", "VB"), ("explain", "VB"),
    ("show", "VB"), ("find", "VB"), ("give", "VB"), ("try", "VB"), ("feel", "VBP"),
    ("seems", "VBZ"), ("seem", "VBP"), ("likes", "VBZ"), ("loves", "VBZ"), ("wants", "VBZ"),
    ("knows", "VBZ"), ("thinks", "VBZ"), ("plays", "VBZ"), ("enjoys", "VBZ"),
    ("interested", "JJ"),
    // adverbs
    ("really", "RB"), ("very", "RB"), ("also", "RB"), ("just", "RB"), ("too", "RB"),
    ("not", "RB"), ("always", "RB"), ("never", "RB"), ("often", "RB"), ("sometimes", "RB"),
    ("perhaps", "RB"), ("maybe", "RB"), ("there", "EX"), ("here", "RB"), ("now", "RB"),
    ("well", "RB"), ("again", "RB"), ("much", "RB"), ("more", "RBR"), ("most", "RBS"),
    // adjectives
    ("good", "JJ"), ("great", "JJ"), ("nice", "JJ"), ("bad", "JJ"), ("new", "JJ"),
    ("old", "JJ"), ("big", "JJ"), ("small", "JJ"), ("favorite", "JJ"), ("favourite", "JJ"),
    ("interesting", "JJ"), ("fascinating", "JJ"), ("happy", "JJ"), ("specific", "JJ"),
    ("many", "JJ"), ("few", "JJ"), ("other", "JJ"), ("same", "JJ"), ("own", "JJ"),
    // interjections
    ("hello", "UH"), ("hi", "UH"), ("hey", "UH"), ("please", "UH"), ("thanks", "UH"),
    ("thank", "UH"), ("yes", "UH"), ("yeah", "UH"), ("no", "UH"), ("ok", "UH"),
    ("okay", "UH"), ("bye", "UH"), ("goodbye", "UH"), ("wow", "UH"), ("oh", "UH"),
    // contractions fused by punctuation stripping ("I'm" -> "im")
    ("im", "PRP"), ("ive", "PRP"), ("id", "PRP"), ("ill", "PRP"), ("youre", "PRP"),
    ("youve", "PRP"), ("youd", "PRP"), ("youll", "PRP"), ("hes", "PRP"), ("shes", "PRP"),
    ("weve", "PRP"), ("theyre", "PRP"), ("theyve", "PRP"), ("theyd", "PRP"),
    ("theyll", "PRP"), ("itll", "PRP"),
    ("whats", "WP"), ("whos", "WP"), ("thats", "DT"), ("theres", "EX"), ("heres", "RB"),
    ("wheres", "WRB"), ("hows", "WRB"), ("whens", "WRB"), ("whys", "WRB"), ("lets", "VB"),
    ("dont", "VBP"), ("doesnt", "VBZ"), ("didnt", "VBD"), ("isnt", "VBZ"), ("arent", "VBP"),
    ("wasnt", "VBD"), ("werent", "VBD"), ("havent", "VBP"), ("hasnt", "VBZ"),
    ("hadnt", "VBD"), ("aint", "VBP"),
    ("cant", "MD"), ("wont", "MD"), ("wouldnt", "MD"), ("couldnt", "MD"),
    ("shouldnt", "MD"), ("mustnt", "MD"),
    ("gonna", "VBG"), ("wanna", "VB"), ("gotta", "VB"),
    // nouns the suffix rules would mislabel
    ("thing", "NN"), ("things", "NNS"), ("morning", "NN"), ("evening", "NN"),
    ("building", "NN"), ("painting", "NN"), ("programming", "NN"), ("cooking", "NN"),
    ("meeting", "NN"), ("wedding", "NN"), ("clothing", "NN"), ("string", "NN"),
    ("king", "NN"), ("ring", "NN"), ("spring", "NN"), ("family", "NN"), ("italy", "NNP"),
    ("july", "NNP"), ("seed", "NN"), ("speed", "NN"), ("bed", "NN"), ("breed", "NN"),
    ("physics", "NN"), ("mathematics", "NN"), ("politics", "NN"), ("economics", "NN"),
    ("news", "NN"), ("series", "NN"), ("species", "NN"), ("chess", "NN"),
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Lexicon + suffix-rule part-of-speech tagger (Penn Treebank labels).
#[derive(Clone, Debug)]
pub struct LexiconTagger {
    lexicon: HashMap<String, String>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LexiconTagger {
    /// Tagger backed by the built-in English lexicon.
    pub fn builtin() -> Self {
        let lexicon = BUILTIN
            .iter()
            .map(|(w, t)| (w.to_string(), t.to_string()))
            .collect();
        Self { lexicon }
    }

    /// Add or override entries from `word<TAB>TAG` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped. Any run of
    /// whitespace separates word and tag.
    pub fn extend_from_str(&mut self, content: &str) -> Result<usize, BackendError> {
        let mut added = 0;
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(word), Some(tag), None) => {
                    self.lexicon.insert(word.to_lowercase(), tag.to_uppercase());
                    added += 1;
                }
                _ => {
                    return Err(BackendError::Parse {
                        line: idx + 1,
                        reason: format!("expected `word TAG`, got {line:?}"),
                    })
                }
            }
        }
        Ok(added)
    }

    /// Built-in lexicon extended with the entries in the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BackendError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut tagger = Self::builtin();
        let added = tagger.extend_from_str(&content)?;
        tracing::info!(path = %path.display(), added, "loaded lexicon entries");
        Ok(tagger)
    }

    /// Label a single (lowercase) word.
    pub fn tag_word(&self, word: &str) -> &str {
        if let Some(tag) = self.lexicon.get(word) {
            return tag;
        }
        if !word.is_empty() && word.chars().all(|c| c.is_numeric()) {
            return "CD";
        }
        let len = word.chars().count();
        if len > 3 && word.ends_with("ly") {
            return "RB";
        }
        if len > 4 && word.ends_with("ing") {
            return "VBG";
        }
        if len > 3 && word.ends_with("ed") {
            return "VBD";
        }
        if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return "JJ";
        }
        if len > 4 && VERB_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return "VB";
        }
        if len > 3 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
            return "NNS";
        }
        "NN"
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, BackendError> {
        Ok(tokens
            .iter()
            .map(|t| TaggedToken::new(t.as_str(), self.tag_word(&t.to_lowercase())))
            .collect())
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn tags(tagger: &LexiconTagger, words: &[&str]) -> Vec<String> {
        let tokens: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        match tagger.tag(&tokens) {
            Ok(tagged) => tagged.into_iter().map(|t| t.tag).collect(),
            Err(e) => panic!("tagging failed: {e}"),
        }
    }

    #[test]
    fn chat_utterance_tags() {
        let t = LexiconTagger::builtin();
        assert_eq!(
            tags(&t, &["really", "enjoy", "playing", "chess"]),
            vec!["RB", "VBP", "VBG", "NN"]
        );
        assert_eq!(tags(&t, &["love", "dogs", "cats"]), vec!["VBP", "NNS", "NNS"]);
        assert_eq!(tags(&t, &["hello", "please"]), vec!["UH", "UH"]);
    }

    #[test]
    fn fused_contractions_are_not_nouns() {
        let t = LexiconTagger::builtin();
        for word in ["im", "dont", "whats", "youre", "ive", "cant", "doesnt", "theres", "id"] {
            let tagged = t.tag(&[word.to_string()]).unwrap_or_default();
            assert!(tagged.iter().all(|t| !t.is_noun()), "{word} tagged {tagged:?}");
        }
        assert_eq!(tags(&t, &["im", "bored"]), vec!["PRP", "VBD"]);
    }

    #[test]
    fn builtin_words_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (word, _) in BUILTIN {
            assert!(seen.insert(*word), "duplicate lexicon entry {word}");
        }
    }

    #[test]
    fn suffix_rules() {
        let t = LexiconTagger::builtin();
        assert_eq!(t.tag_word("quickly"), "RB");
        assert_eq!(t.tag_word("jumped"), "VBD");
        assert_eq!(t.tag_word("dangerous"), "JJ");
        assert_eq!(t.tag_word("organize"), "VB");
        assert_eq!(t.tag_word("2024"), "CD");
        assert_eq!(t.tag_word("glass"), "NN");
        assert_eq!(t.tag_word("bureaucracy"), "NN");
        assert_eq!(t.tag_word("family"), "NN");
        assert_eq!(t.tag_word("painting"), "NN");
    }

    #[test]
    fn tagging_preserves_words_and_order() {
        let t = LexiconTagger::builtin();
        let tokens = vec!["Chess".to_string(), "fast".to_string()];
        let tagged = t.tag(&tokens).unwrap_or_default();
        let words: Vec<&str> = tagged.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["Chess", "fast"]);
        assert!(tagged.first().is_some_and(|t| t.is_noun()));
    }

    #[test]
    fn extra_entries_override_builtin() {
        let mut t = LexiconTagger::builtin();
        let added = t.extend_from_str("# custom\nplay\tNN\n\nrust NNP\n");
        assert_eq!(added.ok(), Some(2));
        assert_eq!(t.tag_word("play"), "NN");
        assert_eq!(t.tag_word("rust"), "NNP");
    }

    #[test]
    fn malformed_lexicon_line_reports_position() {
        let mut t = LexiconTagger::builtin();
        match t.extend_from_str("ok UH\nbroken\n") {
            Err(BackendError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join("lexicon.tsv");
        std::fs::write(&path, "gizmo\tNN\n").unwrap_or_else(|e| panic!("{e}"));
        let t = LexiconTagger::load(&path).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(t.tag_word("gizmo"), "NN");
        assert!(matches!(
            LexiconTagger::load(dir.path().join("missing.tsv")),
            Err(BackendError::Io { .. })
        ));
    }
}
