//! Hybrid retrieval engine
//!
//! Combines dense vector search and lexical BM25 scoring over the fixed legal
//! reference corpus. Both rankers return their top `TOP_K` sentences and the
//! union is deduplicated in first-seen order (dense results first), which
//! keeps responses deterministic.

use crate::retrieval::corpus::LEGAL_CASES;
use crate::retrieval::embedding::{cosine_similarity, HashEmbedder};
use crate::retrieval::lexical::Bm25Index;

/// Results taken from each ranker before the union.
pub const TOP_K: usize = 2;

pub struct RetrievalEngine {
    corpus: Vec<String>,
    corpus_embeddings: Vec<Vec<f32>>,
    bm25: Bm25Index,
    embedder: HashEmbedder,
}

impl RetrievalEngine {
    /// Build the engine over the fixed legal reference corpus.
    pub fn new() -> Self {
        Self::with_corpus(LEGAL_CASES.iter().map(|s| s.to_string()).collect())
    }

    /// Build the engine over an arbitrary corpus.
    pub fn with_corpus(corpus: Vec<String>) -> Self {
        let embedder = HashEmbedder::new();
        let corpus_embeddings = corpus.iter().map(|doc| embedder.embed(doc)).collect();
        let bm25 = Bm25Index::build(&corpus);

        Self {
            corpus,
            corpus_embeddings,
            bm25,
            embedder,
        }
    }

    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    /// Retrieve legal references relevant to the query.
    ///
    /// Union of dense top-k and lexical top-k, deduplicated in first-seen
    /// order. Over a non-empty corpus this never returns an empty list.
    pub fn retrieve_legal_references(&self, query: &str) -> Vec<String> {
        let dense = self.dense_search(query, TOP_K);
        let lexical = self.bm25.search(query, TOP_K);

        let mut references: Vec<String> = Vec::new();
        for (position, _) in dense.into_iter().chain(lexical) {
            let sentence = &self.corpus[position];
            if !references.contains(sentence) {
                references.push(sentence.clone());
            }
        }
        references
    }

    /// Rank corpus documents by cosine similarity to the query embedding.
    fn dense_search(&self, query: &str, limit: usize) -> Vec<(usize, f32)> {
        let query_embedding = self.embedder.embed(query);

        let mut ranked: Vec<(usize, f32)> = self
            .corpus_embeddings
            .iter()
            .enumerate()
            .map(|(position, embedding)| {
                (position, cosine_similarity(&query_embedding, embedding))
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(limit);
        ranked
    }
}

impl Default for RetrievalEngine {
    fn default() -> Self {
        Self::new()
    }
}
