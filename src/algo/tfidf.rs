use std::collections::{HashMap, HashSet};

use super::sparse::SparseVector;
use super::tokenizer;

/// Bounded-vocabulary TF-IDF vectorizer over free text.
///
/// The vocabulary is rebuilt on every `fit_transform` call; nothing is
/// retained between runs. Term selection is deterministic: candidates are
/// ranked by corpus-wide frequency with ties broken by first-encountered
/// order, never by hash iteration order.
#[derive(Debug, Clone)]
pub struct TextVectorizer {
    max_features: usize,
    min_df: usize,
}

impl TextVectorizer {
    pub fn new(max_features: usize, min_df: usize) -> Self {
        Self {
            max_features,
            min_df,
        }
    }

    /// Build the vocabulary from `texts` and emit one unit-normalized
    /// TF-IDF vector per input document. A document containing no
    /// vocabulary term yields the zero vector.
    pub fn fit_transform(&self, texts: &[String]) -> Vec<SparseVector> {
        let token_lists: Vec<Vec<String>> = texts.iter().map(|t| tokenizer::tokenize(t)).collect();

        // Document frequency, corpus frequency, and first-seen order.
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut corpus_freq: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();
        for tokens in &token_lists {
            let mut seen_in_doc: HashSet<&str> = HashSet::new();
            for token in tokens {
                if !corpus_freq.contains_key(token) {
                    first_seen.push(token.clone());
                }
                *corpus_freq.entry(token.clone()).or_insert(0) += 1;
                if seen_in_doc.insert(token.as_str()) {
                    *doc_freq.entry(token.clone()).or_insert(0) += 1;
                }
            }
        }

        // Eligible terms ranked by corpus frequency descending; the sort is
        // stable over first-seen order, so ties resolve deterministically.
        let mut candidates: Vec<&String> = first_seen
            .iter()
            .filter(|t| doc_freq[*t] >= self.min_df)
            .collect();
        candidates.sort_by(|a, b| corpus_freq[*b].cmp(&corpus_freq[*a]));
        candidates.truncate(self.max_features);

        let vocab: HashMap<&str, usize> = candidates
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let n = token_lists.len() as f64;
        let idf: Vec<f64> = candidates
            .iter()
            .map(|t| ((n + 1.0) / (doc_freq[*t] as f64 + 1.0)).ln() + 1.0)
            .collect();

        token_lists
            .iter()
            .map(|tokens| {
                let mut vector = SparseVector::new(candidates.len());
                if tokens.is_empty() {
                    return vector;
                }
                let total = tokens.len() as f64;
                let mut counts: HashMap<&str, usize> = HashMap::new();
                for token in tokens {
                    *counts.entry(token.as_str()).or_insert(0) += 1;
                }
                for (token, count) in counts {
                    if let Some(&idx) = vocab.get(token) {
                        let tf = count as f64 / total;
                        vector.set(idx, tf * idf[idx]);
                    }
                }
                vector.normalize();
                vector
            })
            .collect()
    }
}
