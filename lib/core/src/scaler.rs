//! The trained normalization model.
//!
//! A per-dimension affine transform fit once offline against the training
//! corpus. The same artifact is used to build the neighbor index and to
//! normalize query vectors at serving time; mixing scaler versions silently
//! skews the distance space, so there is exactly one scaler per deployment.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema;
use crate::vector::FeatureVector;

/// Scales below this are treated as degenerate (constant training column).
const SCALE_EPSILON: f32 = 1e-9;

/// Immutable per-dimension `(mean, scale)` standardization.
///
/// `transform` maps `x[i]` to `(x[i] - mean[i]) / scale[i]`. A dimension
/// whose training column was constant (scale ~ 0) maps to 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardScaler {
    means: Vec<f32>,
    scales: Vec<f32>,
}

impl StandardScaler {
    pub fn new(means: Vec<f32>, scales: Vec<f32>) -> Result<Self> {
        let scaler = Self { means, scales };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Check parameter shape against the schema. Called after
    /// deserializing an artifact, before first use.
    pub fn validate(&self) -> Result<()> {
        if self.means.len() != schema::DIM || self.scales.len() != schema::DIM {
            return Err(Error::InvalidArtifact(format!(
                "scaler has {} means and {} scales, schema has {} dimensions",
                self.means.len(),
                self.scales.len(),
                schema::DIM
            )));
        }
        Ok(())
    }

    /// Fit a scaler from raw corpus vectors (population standard deviation).
    ///
    /// Serving deployments load a pre-fit artifact; this constructor exists
    /// for tests and benches that need a self-consistent trained space.
    pub fn fit(vectors: &[FeatureVector]) -> Result<Self> {
        if vectors.is_empty() {
            return Err(Error::InvalidArtifact(
                "cannot fit a scaler on an empty corpus".to_string(),
            ));
        }
        for v in vectors {
            v.check_schema()?;
        }

        let n = vectors.len() as f32;
        let mut means = vec![0.0f32; schema::DIM];
        let mut scales = vec![0.0f32; schema::DIM];

        for v in vectors {
            for (i, x) in v.as_slice().iter().enumerate() {
                means[i] += x;
            }
        }
        for m in &mut means {
            *m /= n;
        }
        for v in vectors {
            for (i, x) in v.as_slice().iter().enumerate() {
                let d = x - means[i];
                scales[i] += d * d;
            }
        }
        for s in &mut scales {
            *s = (*s / n).sqrt();
        }

        Ok(Self { means, scales })
    }

    /// Apply the trained transform.
    pub fn transform(&self, vector: &FeatureVector) -> Result<FeatureVector> {
        if vector.dim() != self.means.len() {
            return Err(Error::DimensionMismatch {
                expected: self.means.len(),
                actual: vector.dim(),
            });
        }

        let data = vector
            .as_slice()
            .iter()
            .zip(self.means.iter().zip(self.scales.iter()))
            .map(|(x, (mean, scale))| {
                if *scale < SCALE_EPSILON {
                    0.0
                } else {
                    (x - mean) / scale
                }
            })
            .collect();

        Ok(FeatureVector::new(data))
    }
}
