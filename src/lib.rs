//! Related-item recommendation for small content catalogs.
//!
//! `algo` holds the pure building blocks (sparse vectors, tokenization,
//! TF-IDF and tag vectorizers, pair scoring), `catalog` the record model
//! and anomaly report, `engine` the full recommendation pass, and `ops`
//! the JSON-row wrappers the CLI builds on.

pub mod algo;
pub mod catalog;
pub mod engine;
pub mod ops;
