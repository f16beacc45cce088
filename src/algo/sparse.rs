use std::collections::BTreeMap;

/// A sparse vector storing only nonzero coordinates.
///
/// Backed by a `BTreeMap` so iteration (and therefore float accumulation
/// order) is index-ordered and reproducible across runs and hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dim: usize,
    entries: BTreeMap<usize, f64>,
}

impl SparseVector {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            entries: BTreeMap::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of nonzero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set the value at `index`. Storing exactly 0 removes the entry,
    /// preserving the invariant that no zero is ever stored.
    pub fn set(&mut self, index: usize, value: f64) {
        if value == 0.0 {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
    }

    pub fn get(&self, index: usize) -> f64 {
        self.entries.get(&index).copied().unwrap_or(0.0)
    }

    /// Dot product, iterating whichever vector has fewer nonzeros.
    /// O(min(nnz_a, nnz_b) · log nnz) lookups.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.nnz() <= other.nnz() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .entries
            .iter()
            .map(|(&i, &v)| v * large.get(i))
            .sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.entries
            .values()
            .map(|v| v * v)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale to unit length. The zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let n = self.norm();
        if n == 0.0 {
            return;
        }
        for v in self.entries.values_mut() {
            *v /= n;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().map(|(&i, &v)| (i, v))
    }
}
