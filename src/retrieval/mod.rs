//! Retrieval & Dispute Analysis Module
//!
//! The core component responsible for finding relevant legal references for a
//! party's argument and suggesting a dispute resolution.
//!
//! ## Overview
//! This module implements a hybrid Information Retrieval (IR) pipeline over a
//! fixed legal reference corpus. The corpus, its dense embeddings, and the
//! lexical index are all built once at process startup and never mutated, so
//! index and corpus stay in sync by construction order.
//!
//! ## Responsibilities
//! - **Tokenization**: Normalizing text into searchable tokens shared by the
//!   lexical index, the embedder, and the summarizer.
//! - **Dense retrieval**: Feature-hashed sentence embeddings ranked by cosine
//!   similarity.
//! - **Lexical retrieval**: Okapi BM25 scoring over the same corpus.
//! - **Hybrid merge**: Union of both top-k result sets, deduplicated in
//!   first-seen order.
//! - **Rules**: Hard-coded keyword rules that turn retrieved references into a
//!   suggested resolution string.
//! - **API**: The `/analyze-dispute` HTTP handler.
//!
//! ## Submodules
//! - **`corpus`**: The fixed legal reference sentences.
//! - **`embedding`**: Dense embedder and cosine similarity.
//! - **`lexical`**: BM25 inverted index.
//! - **`engine`**: Hybrid retrieval combining both rankers.
//! - **`rules`**: Keyword-based resolution suggestions.
//! - **`tokenizer`**: Text normalization utilities.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod corpus;
pub mod embedding;
pub mod engine;
pub mod handlers;
pub mod lexical;
pub mod rules;
pub mod tokenizer;
pub mod types;
