/// The fixed legal reference corpus used for demonstration retrieval.
///
/// Loaded once at startup; the dense embeddings and the BM25 index are both
/// derived from this list in order, so positions double as document ids.
pub const LEGAL_CASES: [&str; 3] = [
    "Section 15 of the Contract Act states that coercion renders a contract void.",
    "Article 21 of the Indian Constitution guarantees the right to life and liberty.",
    "As per Rent Control Act, a tenant cannot be evicted without legal notice.",
];
