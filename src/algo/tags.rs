use std::collections::{HashMap, HashSet};

use super::sparse::SparseVector;

/// Normalize a single tag label: trim, lowercase, drop hyphens and
/// underscores. Returns `None` when nothing survives.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let cleaned: String = tag
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// IDF-weighted presence vectorizer over categorical tag sets.
///
/// Unlike the text vectorizer the vocabulary is unbounded: every distinct
/// normalized tag gets an index, assigned in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct TagVectorizer;

impl TagVectorizer {
    pub fn new() -> Self {
        Self
    }

    /// Emit one unit-normalized presence vector per tag list. The weight
    /// of a present tag is its IDF; frequency within a list does not count.
    pub fn fit_transform(&self, tag_lists: &[Vec<String>]) -> Vec<SparseVector> {
        let normalized: Vec<Vec<String>> = tag_lists
            .iter()
            .map(|tags| {
                let mut seen: HashSet<String> = HashSet::new();
                tags.iter()
                    .filter_map(|t| normalize_tag(t))
                    .filter(|t| seen.insert(t.clone()))
                    .collect()
            })
            .collect();

        let mut vocab: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        for tags in &normalized {
            for tag in tags {
                match vocab.get(tag) {
                    Some(&idx) => doc_freq[idx] += 1,
                    None => {
                        vocab.insert(tag.clone(), order.len());
                        order.push(tag.clone());
                        doc_freq.push(1);
                    }
                }
            }
        }

        let n = normalized.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0)
            .collect();

        normalized
            .iter()
            .map(|tags| {
                let mut vector = SparseVector::new(order.len());
                for tag in tags {
                    let idx = vocab[tag];
                    vector.set(idx, idf[idx]);
                }
                vector.normalize();
                vector
            })
            .collect()
    }
}
