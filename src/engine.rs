//! Full recommendation pass over a catalog: filter the valid subset,
//! vectorize text and tags, score every eligible ordered pair, rank, and
//! map ids to ordered recommendation lists.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::algo::scoring;
use crate::algo::sparse::SparseVector;
use crate::algo::tags::TagVectorizer;
use crate::algo::tfidf::TextVectorizer;
use crate::catalog::{CatalogEntry, CatalogReport};

/// Tunables for one recommendation pass.
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Text vocabulary cap.
    pub max_features: usize,
    /// Minimum document frequency for text features.
    pub min_df: usize,
    /// Maximum recommendations per entry.
    pub max_recommendations: usize,
    /// Width of the Gaussian temporal kernel, in years.
    pub sigma: f64,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_features: 300,
            min_df: 1,
            max_recommendations: 4,
            sigma: 3.0,
        }
    }
}

/// Result of one pass: recommendations keyed by entry id, plus the
/// catalog anomaly report.
#[derive(Debug, Clone)]
pub struct RecommendOutcome {
    pub by_id: HashMap<String, Vec<String>>,
    pub report: CatalogReport,
}

struct ValidEntry<'a> {
    id: &'a str,
    locked: bool,
    year: Option<i32>,
}

/// Compute `recommended_ids` for every entry in the catalog.
///
/// Every entry gets a key in the result, invalid ones (no id, or neither
/// title nor description) with an empty list. Locked entries receive
/// recommendations but never appear as anyone else's candidate. The whole
/// model is rebuilt from scratch; nothing persists between calls.
pub fn compute_recommendations(
    entries: &[CatalogEntry],
    config: &RecommendConfig,
) -> RecommendOutcome {
    let report = CatalogReport::scan(entries);

    let valid: Vec<ValidEntry> = entries
        .iter()
        .filter(|e| e.is_valid())
        .map(|e| ValidEntry {
            id: &e.id,
            locked: e.locked,
            year: e.parsed_year(),
        })
        .collect();

    let texts: Vec<String> = entries
        .iter()
        .filter(|e| e.is_valid())
        .map(|e| e.text_blob())
        .collect();
    let tag_lists: Vec<Vec<String>> = entries
        .iter()
        .filter(|e| e.is_valid())
        .map(|e| e.tag_list())
        .collect();

    let text_vectors = TextVectorizer::new(config.max_features, config.min_df).fit_transform(&texts);
    let tag_vectors = TagVectorizer::new().fit_transform(&tag_lists);
    let locked: Vec<bool> = valid.iter().map(|e| e.locked).collect();

    // Each row reads only the shared immutable vectors and produces its
    // own candidate list, so the outer loop parallelizes without locks.
    let ranked: Vec<Vec<&str>> = (0..valid.len())
        .into_par_iter()
        .map(|i| {
            rank_row(
                i,
                &valid,
                &locked,
                &text_vectors,
                &tag_vectors,
                config,
            )
        })
        .collect();

    let mut by_id: HashMap<String, Vec<String>> = entries
        .iter()
        .map(|e| (e.id.clone(), Vec::new()))
        .collect();
    for (entry, ids) in valid.iter().zip(ranked) {
        by_id.insert(
            entry.id.to_string(),
            ids.into_iter().map(|s| s.to_string()).collect(),
        );
    }

    RecommendOutcome { by_id, report }
}

/// Score every eligible candidate for row `i`, sort by score descending
/// (stable, so ties keep enumeration order), and truncate.
fn rank_row<'a>(
    i: usize,
    valid: &[ValidEntry<'a>],
    locked: &[bool],
    text_vectors: &[SparseVector],
    tag_vectors: &[SparseVector],
    config: &RecommendConfig,
) -> Vec<&'a str> {
    let mut scored: Vec<(&str, f64)> = Vec::new();
    for (j, candidate) in valid.iter().enumerate() {
        if !scoring::pair_eligible(i, j, locked) {
            continue;
        }
        let text_sim = text_vectors[i].dot(&text_vectors[j]);
        let tag_sim = tag_vectors[i].dot(&tag_vectors[j]);
        let temporal_sim = scoring::temporal_similarity(valid[i].year, candidate.year, config.sigma);
        let score = scoring::final_score(text_sim, tag_sim, temporal_sim);
        if score > 0.0 {
            scored.push((candidate.id, score));
        }
    }
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(config.max_recommendations);
    scored.into_iter().map(|(id, _)| id).collect()
}
