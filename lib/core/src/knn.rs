//! Exact k-nearest-neighbor index over the normalized corpus.
//!
//! Built once at startup from the corpus vectors pushed through the shared
//! scaler, then read-only for the process lifetime; concurrent queries share
//! the index without locking. The scan is exact Euclidean over every entry,
//! parallelized with rayon. At corpus scale (tens of thousands of players,
//! 37 dimensions) a brute-force scan is both fast enough and, unlike an
//! approximate graph index, deterministic: a fixed corpus and query vector
//! always produce the same ordering, with exact-distance ties broken by
//! ascending corpus id.

use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::record::PlayerId;
use crate::vector::FeatureVector;

/// Read-only neighbor index. Each entry is a normalized corpus vector
/// tagged with its originating record's handle.
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    entries: Vec<(PlayerId, FeatureVector)>,
    dim: usize,
}

impl NeighborIndex {
    /// Build the index from normalized vectors. All entries must share one
    /// dimensionality.
    pub fn build(entries: Vec<(PlayerId, FeatureVector)>) -> Result<Self> {
        let dim = entries.first().map(|(_, v)| v.dim()).unwrap_or(0);
        for (id, v) in &entries {
            if v.dim() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    actual: v.dim(),
                });
            }
            debug_assert!(!v.is_empty(), "empty vector for player {id}");
        }
        Ok(Self { entries, dim })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The `k` nearest entries to a normalized query vector, ascending by
    /// Euclidean distance. Returns all entries when the corpus is smaller
    /// than `k`.
    pub fn query(&self, normalized: &FeatureVector, k: usize) -> Result<Vec<(PlayerId, f32)>> {
        if !self.entries.is_empty() && normalized.dim() != self.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim,
                actual: normalized.dim(),
            });
        }

        let mut scored: Vec<(PlayerId, f32)> = self
            .entries
            .par_iter()
            .map(|(id, v)| (*id, normalized.l2_distance(v)))
            .collect();

        scored.sort_by_key(|(id, dist)| (OrderedFloat(*dist), *id));
        scored.truncate(k.min(scored.len()));
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, data: Vec<f32>) -> (PlayerId, FeatureVector) {
        (PlayerId(id), FeatureVector::new(data))
    }

    fn index() -> NeighborIndex {
        NeighborIndex::build(vec![
            entry(0, vec![0.0, 0.0]),
            entry(1, vec![1.0, 0.0]),
            entry(2, vec![0.0, 2.0]),
            entry(3, vec![3.0, 3.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_query_orders_by_distance() {
        let idx = index();
        let results = idx.query(&FeatureVector::new(vec![0.0, 0.0]), 4).unwrap();

        let ids: Vec<u32> = results.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        for pair in results.windows(2) {
            assert!(pair[0].1 <= pair[1].1);
        }
    }

    #[test]
    fn test_self_query_returns_self_at_zero() {
        let idx = index();
        let results = idx.query(&FeatureVector::new(vec![0.0, 2.0]), 1).unwrap();
        assert_eq!(results[0].0, PlayerId(2));
        assert_eq!(results[0].1, 0.0);
    }

    #[test]
    fn test_exact_tie_broken_by_corpus_order() {
        let idx = NeighborIndex::build(vec![
            entry(7, vec![1.0, 0.0]),
            entry(3, vec![-1.0, 0.0]),
            entry(5, vec![0.0, 1.0]),
        ])
        .unwrap();

        let results = idx.query(&FeatureVector::new(vec![0.0, 0.0]), 3).unwrap();
        let ids: Vec<u32> = results.iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![3, 5, 7]);
    }

    #[test]
    fn test_k_larger_than_corpus_returns_all() {
        let idx = index();
        let results = idx.query(&FeatureVector::new(vec![0.0, 0.0]), 100).unwrap();
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_query_is_deterministic() {
        let idx = index();
        let query = FeatureVector::new(vec![0.5, 0.5]);
        let a = idx.query(&query, 4).unwrap();
        let b = idx.query(&query, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let idx = index();
        let bad = FeatureVector::new(vec![0.0, 0.0, 0.0]);
        assert!(matches!(
            idx.query(&bad, 2),
            Err(Error::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_mixed_dimension_entries_rejected() {
        let result = NeighborIndex::build(vec![
            entry(0, vec![0.0, 0.0]),
            entry(1, vec![1.0, 0.0, 0.0]),
        ]);
        assert!(result.is_err());
    }
}
