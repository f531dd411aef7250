//! # scoutX Core
//!
//! Core library for the scoutX player similarity engine.
//!
//! This crate provides the trained-artifact types and data structures the
//! recommendation pipeline is built from:
//!
//! - [`schema`] - The fixed, ordered feature schema
//! - [`FeatureVector`] - Dense feature vector in schema order
//! - [`PlayerRecord`] - One corpus entry with identity and attributes
//! - [`StandardScaler`] - Pre-trained per-dimension normalization
//! - [`RoleClassifier`] - Pre-trained position classifier
//! - [`NeighborIndex`] - Exact k-NN over the normalized corpus
//!
//! ## Example
//!
//! ```rust
//! use scoutx_core::{FeatureVector, NeighborIndex, PlayerId, StandardScaler, schema};
//!
//! let raw: Vec<(PlayerId, FeatureVector)> = (0..10)
//!     .map(|i| (PlayerId(i), FeatureVector::new(vec![i as f32; schema::DIM])))
//!     .collect();
//!
//! let scaler = StandardScaler::fit(
//!     &raw.iter().map(|(_, v)| v.clone()).collect::<Vec<_>>(),
//! ).unwrap();
//!
//! let normalized = raw
//!     .iter()
//!     .map(|(id, v)| Ok((*id, scaler.transform(v)?)))
//!     .collect::<scoutx_core::Result<Vec<_>>>()
//!     .unwrap();
//!
//! let index = NeighborIndex::build(normalized).unwrap();
//! let query = scaler.transform(&FeatureVector::new(vec![3.0; schema::DIM])).unwrap();
//! let nearest = index.query(&query, 3).unwrap();
//! assert_eq!(nearest[0].0, PlayerId(3));
//! ```

pub mod classifier;
pub mod error;
pub mod knn;
pub mod record;
pub mod scaler;
pub mod schema;
pub mod vector;

pub use classifier::RoleClassifier;
pub use error::{Error, Result};
pub use knn::NeighborIndex;
pub use record::{Foot, PlayerId, PlayerRecord};
pub use scaler::StandardScaler;
pub use vector::FeatureVector;
