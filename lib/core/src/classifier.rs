//! The trained role classifier.
//!
//! Nearest-centroid over *raw* feature vectors: one centroid per position
//! label, fit offline from the training corpus. Raw, not normalized, is
//! deliberate; the classifier was trained in raw space while the neighbor
//! index lives in normalized space, and unifying the two would require
//! retraining.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vector::FeatureVector;

/// Immutable position classifier: `classify` returns the label of the
/// nearest centroid under Euclidean distance, ties broken by artifact order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleClassifier {
    labels: Vec<String>,
    centroids: Vec<FeatureVector>,
}

impl RoleClassifier {
    pub fn new(labels: Vec<String>, centroids: Vec<FeatureVector>) -> Result<Self> {
        let classifier = Self { labels, centroids };
        classifier.validate()?;
        Ok(classifier)
    }

    /// Check artifact consistency. Called after deserialization, before
    /// first use.
    pub fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(Error::InvalidArtifact(
                "classifier has no position labels".to_string(),
            ));
        }
        if self.labels.len() != self.centroids.len() {
            return Err(Error::InvalidArtifact(format!(
                "classifier has {} labels but {} centroids",
                self.labels.len(),
                self.centroids.len()
            )));
        }
        for centroid in &self.centroids {
            centroid.check_schema()?;
        }
        Ok(())
    }

    /// The closed set of position labels this classifier can emit.
    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Classify a raw feature vector into one position label.
    pub fn classify(&self, raw: &FeatureVector) -> Result<&str> {
        if raw.dim() != self.centroids[0].dim() {
            return Err(Error::DimensionMismatch {
                expected: self.centroids[0].dim(),
                actual: raw.dim(),
            });
        }

        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (i, centroid) in self.centroids.iter().enumerate() {
            let dist = raw.l2_distance(centroid);
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }

        Ok(&self.labels[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    fn centroid(fill: f32) -> FeatureVector {
        FeatureVector::new(vec![fill; schema::DIM])
    }

    fn classifier() -> RoleClassifier {
        RoleClassifier::new(
            vec!["DEF".to_string(), "MID".to_string(), "FWD".to_string()],
            vec![centroid(20.0), centroid(50.0), centroid(80.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_classify_nearest_centroid() {
        let c = classifier();
        assert_eq!(c.classify(&centroid(25.0)).unwrap(), "DEF");
        assert_eq!(c.classify(&centroid(55.0)).unwrap(), "MID");
        assert_eq!(c.classify(&centroid(90.0)).unwrap(), "FWD");
    }

    #[test]
    fn test_classify_tie_prefers_artifact_order() {
        // 35.0 is equidistant from the DEF and MID centroids.
        let c = classifier();
        assert_eq!(c.classify(&centroid(35.0)).unwrap(), "DEF");
    }

    #[test]
    fn test_classify_rejects_wrong_dimension() {
        let c = classifier();
        let short = FeatureVector::new(vec![1.0; 4]);
        assert!(matches!(
            c.classify(&short),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_mismatched_artifact_rejected() {
        let result = RoleClassifier::new(
            vec!["DEF".to_string(), "MID".to_string()],
            vec![centroid(20.0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_artifact_rejected() {
        assert!(RoleClassifier::new(vec![], vec![]).is_err());
    }
}
