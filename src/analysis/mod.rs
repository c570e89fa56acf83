//! Document Analysis Module
//!
//! The pipeline behind the `/analyze` endpoint.
//!
//! ## Overview
//! An uploaded PDF or DOCX is persisted under a unique temp name, extracted to
//! plain text, summarized, and scanned for discretionary legal language. The
//! temp file is removed on every exit path.
//!
//! ## Submodules
//! - **`summarizer`**: Extractive summary over the leading document window.
//! - **`loopholes`**: Fixed regex patterns flagging ambiguous clauses.
//! - **`upload`**: Temp file persistence with guaranteed cleanup.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod loopholes;
pub mod summarizer;
pub mod types;
pub mod upload;
