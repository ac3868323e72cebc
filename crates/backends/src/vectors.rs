use crate::BackendError;

/// A token with its vector.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenVector {
    /// token (or span) text
    pub text: String,
    /// dense vector; may be all zeros for unknown words
    pub vector: Vec<f32>,
}

/// Word-vector capability.
///
/// `similarity` must be symmetric, reflexive and bounded; the default is
/// [`cosine`], which yields values in `[-1, 1]`.
pub trait WordVectors: Send + Sync {
    /// Split `text` into tokens and return one vector per token, in order.
    fn embed(&self, text: &str) -> Result<Vec<TokenVector>, BackendError>;

    /// Represent the whole of `text` as one vector: the mean of its token vectors.
    fn embed_span(&self, text: &str) -> Result<TokenVector, BackendError> {
        let tokens = self.embed(text)?;
        let vectors: Vec<&[f32]> = tokens.iter().map(|t| t.vector.as_slice()).collect();
        Ok(TokenVector {
            text: text.to_string(),
            vector: mean_vector(&vectors),
        })
    }

    /// Similarity between two representations.
    fn similarity(&self, a: &TokenVector, b: &TokenVector) -> f32 {
        cosine(&a.vector, &b.vector)
    }

    /// Human-readable backend name (for logging).
    fn name(&self) -> &str;
}

/// Element-wise mean. Empty input gives an empty vector; vectors shorter
/// than the first one contribute zeros for the missing positions.
pub fn mean_vector(vectors: &[&[f32]]) -> Vec<f32> {
    let Some(first) = vectors.first() else {
        return Vec::new();
    };
    let mut sum = vec![0.0_f32; first.len()];
    for v in vectors {
        for (acc, x) in sum.iter_mut().zip(v.iter()) {
            *acc += x;
        }
    }
    let n = vectors.len() as f32;
    sum.iter_mut().for_each(|x| *x /= n);
    sum
}

/// Cosine similarity clamped to `[-1, 1]`.
///
/// Mismatched lengths and zero-norm vectors score `0.0`.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    (dot / (na * nb)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cosine_basics() {
        assert!((cosine(&[1.0, 0.0], &[2.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine(&[1.0, 0.0], &[0.0, 3.0]).abs() < 1e-6);
        assert!((cosine(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_degenerate_inputs_are_zero() {
        assert_eq!(cosine(&[], &[]), 0.0);
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine(&[1.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn mean_of_vectors() {
        let a = [1.0, 2.0];
        let b = [3.0, 4.0];
        assert_eq!(mean_vector(&[&a, &b]), vec![2.0, 3.0]);
        assert!(mean_vector(&[]).is_empty());
    }

    fn vec_pair() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
        (1usize..8).prop_flat_map(|n| {
            (
                prop::collection::vec(-10.0f32..10.0, n),
                prop::collection::vec(-10.0f32..10.0, n),
            )
        })
    }

    proptest! {
        #[test]
        fn cosine_symmetric_and_bounded((a, b) in vec_pair()) {
            let ab = cosine(&a, &b);
            let ba = cosine(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-6);
            prop_assert!((-1.0..=1.0).contains(&ab));
        }

        #[test]
        fn cosine_reflexive((a, _) in vec_pair()) {
            prop_assume!(a.iter().any(|x| x.abs() > 1e-3));
            prop_assert!((cosine(&a, &a) - 1.0).abs() < 1e-4);
        }
    }
}
