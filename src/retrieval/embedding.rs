//! Dense sentence embeddings
//!
//! Deterministic feature-hashing embedder with a concurrent cache. Each token
//! is hashed into one of `EMBEDDING_DIM` buckets with a hash-derived sign, and
//! the accumulated vector is L2-normalized. The service must start without
//! downloading model artifacts, so embeddings are computed locally from token
//! hashes rather than loaded from a pretrained encoder.

use crate::retrieval::tokenizer::tokenize;
use dashmap::DashMap;
use sha2::{Digest, Sha256};

pub const EMBEDDING_DIM: usize = 256;

/// Feature-hashing sentence embedder with caching.
pub struct HashEmbedder {
    cache: DashMap<String, Vec<f32>>,
}

impl HashEmbedder {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    /// Embed text into a normalized `EMBEDDING_DIM`-dimensional vector.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        if let Some(cached) = self.cache.get(text) {
            return cached.clone();
        }

        let mut vector = vec![0.0f32; EMBEDDING_DIM];
        for token in tokenize(text) {
            let digest = Sha256::digest(token.as_bytes());

            let mut bucket_bytes = [0u8; 8];
            bucket_bytes.copy_from_slice(&digest[..8]);
            let bucket = (u64::from_le_bytes(bucket_bytes) as usize) % EMBEDDING_DIM;

            let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        normalize(&mut vector);
        self.cache.insert(text.to_string(), vector.clone());
        vector
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

/// Cosine similarity between two embeddings.
///
/// Returns 0.0 for mismatched dimensions or zero vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
