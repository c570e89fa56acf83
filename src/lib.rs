//! Legal Document Analysis Service Library
//!
//! This library crate defines the core modules that make up the analysis backend.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`extraction`**: The document intake layer. Pulls plain text out of uploaded
//!   PDF and DOCX files before any analysis runs.
//! - **`analysis`**: The document analysis pipeline. Produces an extractive summary
//!   and flags clauses containing discretionary legal language ("loopholes").
//! - **`retrieval`**: The dispute analysis engine. Combines dense vector search and
//!   lexical (BM25) scoring over a fixed legal reference corpus, then applies
//!   keyword rules to suggest a resolution.
//! - **`auth`**: NextAuth-compatible stub endpoints. No real authentication logic.

pub mod analysis;
pub mod auth;
pub mod extraction;
pub mod retrieval;
