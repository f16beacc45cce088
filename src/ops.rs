//! Interface-agnostic operation wrappers.
//!
//! `op_recommend` works over `serde_json::Value` rows so callers (the CLI,
//! or any host embedding the library) never need the typed catalog model.
//! A malformed row degrades to a default entry and flows through; it never
//! aborts the batch.

use serde_json::Value;

use crate::catalog::{CatalogEntry, CatalogReport};
use crate::engine::{self, RecommendConfig};

/// Result of annotating a batch of rows.
#[derive(Debug, Clone)]
pub struct RecommendRun {
    /// The input rows with `recommended_ids` inserted on every object.
    pub rows: Value,
    pub report: CatalogReport,
}

/// Parse one row tolerantly. Field-level noise is absorbed by the model's
/// lenient deserializers; only a row that is not an object at all falls
/// back to a default (invalid) entry.
fn parse_entry(row: &Value) -> CatalogEntry {
    serde_json::from_value(row.clone()).unwrap_or_default()
}

/// Compute recommendations for a batch of JSON rows and annotate each
/// object row with its `recommended_ids` (an empty array when none).
pub fn op_recommend(rows: &[Value], config: &RecommendConfig) -> RecommendRun {
    let entries: Vec<CatalogEntry> = rows.iter().map(parse_entry).collect();
    let outcome = engine::compute_recommendations(&entries, config);

    let annotated: Vec<Value> = rows
        .iter()
        .cloned()
        .zip(&entries)
        .map(|(mut row, entry)| {
            let recs = outcome
                .by_id
                .get(&entry.id)
                .cloned()
                .unwrap_or_default();
            if let Some(obj) = row.as_object_mut() {
                obj.insert(
                    "recommended_ids".into(),
                    Value::Array(recs.into_iter().map(Value::String).collect()),
                );
            }
            row
        })
        .collect();

    RecommendRun {
        rows: Value::Array(annotated),
        report: outcome.report,
    }
}
