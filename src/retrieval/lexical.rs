//! Lexical scoring
//!
//! Okapi BM25 over the fixed reference corpus. Documents are addressed by
//! their position in the corpus slice the index was built from.

use crate::retrieval::tokenizer::tokenize;
use std::collections::HashMap;

/// BM25 inverted index.
pub struct Bm25Index {
    /// term -> [(doc position, term frequency)]
    inverted: HashMap<String, Vec<(usize, f32)>>,
    doc_lengths: Vec<f32>,
    avg_doc_length: f32,
    k1: f32,
    b: f32,
}

impl Bm25Index {
    /// Build the index from a document list.
    pub fn build(docs: &[String]) -> Self {
        let mut inverted: HashMap<String, Vec<(usize, f32)>> = HashMap::new();
        let mut doc_lengths = Vec::with_capacity(docs.len());
        let mut total_length = 0.0;

        for (position, doc) in docs.iter().enumerate() {
            let tokens = tokenize(doc);
            let doc_length = tokens.len() as f32;
            doc_lengths.push(doc_length);
            total_length += doc_length;

            let mut term_freqs: HashMap<String, usize> = HashMap::new();
            for token in tokens {
                *term_freqs.entry(token).or_insert(0) += 1;
            }
            for (term, freq) in term_freqs {
                inverted
                    .entry(term)
                    .or_default()
                    .push((position, freq as f32));
            }
        }

        let avg_doc_length = if docs.is_empty() || total_length == 0.0 {
            1.0
        } else {
            total_length / docs.len() as f32
        };

        Self {
            inverted,
            doc_lengths,
            avg_doc_length,
            k1: 1.2,
            b: 0.75,
        }
    }

    /// Score every document against the query and return the top `limit`
    /// positions, highest score first.
    ///
    /// Zero-score documents still participate in the ranking (ties break on
    /// corpus order), matching the retrieval contract of always returning
    /// `min(limit, corpus len)` results.
    pub fn search(&self, query: &str, limit: usize) -> Vec<(usize, f32)> {
        let mut scores = vec![0.0f32; self.doc_lengths.len()];

        for token in tokenize(query) {
            if let Some(postings) = self.inverted.get(&token) {
                let idf = self.idf(postings.len());
                for &(position, tf) in postings {
                    scores[position] += self.score_term(tf, self.doc_lengths[position], idf);
                }
            }
        }

        let mut ranked: Vec<(usize, f32)> = scores.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(limit);
        ranked
    }

    fn idf(&self, doc_freq: usize) -> f32 {
        let n = self.doc_lengths.len() as f32;
        let df = doc_freq as f32;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    fn score_term(&self, tf: f32, doc_length: f32, idf: f32) -> f32 {
        let numerator = tf * (self.k1 + 1.0);
        let denominator =
            tf + self.k1 * (1.0 - self.b + self.b * doc_length / self.avg_doc_length);
        idf * numerator / denominator
    }
}
