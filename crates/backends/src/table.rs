use std::collections::HashMap;
use std::path::Path;

use crate::{BackendError, TokenVector, WordVectors};

/// Small general-purpose table shipped with the crate (8 dimensions).
const BUILTIN_VECTORS: &str = include_str!("../data/vectors.txt");

/// In-memory word → vector table.
///
/// Parsed from the plain text format used by word2vec/GloVe exports: one
/// `word v1 v2 ... vn` entry per line, optionally preceded by a
/// `count dimension` header. Lookups are case-insensitive; unknown words map
/// to a zero vector, which scores `0.0` against everything.
#[derive(Clone, Debug)]
pub struct VectorTable {
    dim: usize,
    words: HashMap<String, Vec<f32>>,
}

impl VectorTable {
    /// Parse a table from text.
    pub fn parse(content: &str) -> Result<Self, BackendError> {
        let mut dim: Option<usize> = None;
        let mut words = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if idx == 0 {
                if let [count, d] = fields.as_slice() {
                    if let (Ok(_), Ok(d)) = (count.parse::<usize>(), d.parse::<usize>()) {
                        dim = Some(d);
                        continue;
                    }
                }
            }
            let Some((word, values)) = fields.split_first() else {
                continue;
            };
            let vector = values
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<Result<Vec<f32>, _>>()
                .map_err(|e| BackendError::Parse {
                    line: line_no,
                    reason: format!("bad value for {word:?}: {e}"),
                })?;
            let expected = *dim.get_or_insert(vector.len());
            if vector.len() != expected || expected == 0 {
                return Err(BackendError::Parse {
                    line: line_no,
                    reason: format!(
                        "{word:?} has {} values, expected {expected}",
                        vector.len()
                    ),
                });
            }
            words.insert(word.to_lowercase(), vector);
        }
        if words.is_empty() {
            return Err(BackendError::Empty("vector table".into()));
        }
        Ok(Self {
            dim: dim.unwrap_or(0),
            words,
        })
    }

    /// Read and parse the table at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BackendError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&content)?;
        tracing::info!(path = %path.display(), words = table.len(), dim = table.dim, "loaded word vectors");
        Ok(table)
    }

    /// The bundled table.
    pub fn builtin() -> Result<Self, BackendError> {
        Self::parse(BUILTIN_VECTORS)
    }

    /// Vector dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the table holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` has a vector.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Vector for `word`, zeros when unknown.
    pub fn vector(&self, word: &str) -> Vec<f32> {
        match self.words.get(&word.to_lowercase()) {
            Some(v) => v.clone(),
            None => {
                tracing::trace!(word, "out of vocabulary");
                vec![0.0; self.dim]
            }
        }
    }
}

impl WordVectors for VectorTable {
    fn embed(&self, text: &str) -> Result<Vec<TokenVector>, BackendError> {
        Ok(text
            .split_whitespace()
            .map(|w| TokenVector {
                text: w.to_string(),
                vector: self.vector(w),
            })
            .collect())
    }

    fn name(&self) -> &str {
        "vector-table"
    }
}
