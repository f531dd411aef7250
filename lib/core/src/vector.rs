use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema;

/// A feature vector in schema order.
///
/// Raw vectors carry the native attribute scales; normalized vectors are the
/// output of [`crate::scaler::StandardScaler::transform`]. The type does not
/// distinguish the two spaces, callers are responsible for keeping them apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FeatureVector {
    data: Vec<f32>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Value at slot `i`, if in range.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<f32> {
        self.data.get(i).copied()
    }

    /// Value of a named schema dimension, if the schema defines it.
    #[must_use]
    pub fn dimension(&self, name: &str) -> Option<f32> {
        schema::index_of(name).and_then(|i| self.get(i))
    }

    /// Check that this vector has exactly the schema's dimensionality.
    pub fn check_schema(&self) -> Result<()> {
        if self.dim() != schema::DIM {
            return Err(Error::SchemaMismatch {
                expected: schema::DIM,
                actual: self.dim(),
            });
        }
        Ok(())
    }

    /// L2 (Euclidean) distance to another vector of the same dimension.
    #[inline]
    pub fn l2_distance(&self, other: &FeatureVector) -> f32 {
        if self.dim() != other.dim() {
            return f32::INFINITY;
        }

        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| {
                let d = a - b;
                d * d
            })
            .sum::<f32>()
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l2_distance() {
        let v1 = FeatureVector::new(vec![0.0, 0.0]);
        let v2 = FeatureVector::new(vec![3.0, 4.0]);
        assert!((v1.l2_distance(&v2) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_l2_distance_self_is_zero() {
        let v = FeatureVector::new(vec![1.5, -2.0, 7.25]);
        assert_eq!(v.l2_distance(&v), 0.0);
    }

    #[test]
    fn test_l2_distance_dimension_mismatch_is_infinite() {
        let v1 = FeatureVector::new(vec![1.0, 2.0]);
        let v2 = FeatureVector::new(vec![1.0, 2.0, 3.0]);
        assert!(v1.l2_distance(&v2).is_infinite());
    }

    #[test]
    fn test_check_schema() {
        let ok = FeatureVector::new(vec![0.0; crate::schema::DIM]);
        assert!(ok.check_schema().is_ok());

        let short = FeatureVector::new(vec![0.0; 3]);
        assert!(matches!(
            short.check_schema(),
            Err(Error::SchemaMismatch { expected, actual: 3 }) if expected == crate::schema::DIM
        ));
    }

    #[test]
    fn test_named_dimension_lookup() {
        let mut data = vec![0.0; crate::schema::DIM];
        data[0] = 183.0;
        data[2] = 88.0;
        let v = FeatureVector::new(data);

        assert_eq!(v.dimension("height_cm"), Some(183.0));
        assert_eq!(v.dimension("pace"), Some(88.0));
        assert_eq!(v.dimension("no_such_dimension"), None);
    }
}
