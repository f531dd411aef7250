//! # scoutX Storage
//!
//! Loading of the corpus and trained artifacts, and assembly of the
//! process-wide [`ScoutContext`].
//!
//! Everything here runs once at startup, outside the pipeline's hot path.
//! The corpus arrives as CSV from the offline data preparation; the
//! normalization scaler and role classifier arrive as JSON artifacts from
//! the offline training pipeline. The neighbor index is derived at load
//! time from the corpus and the scaler.

pub mod artifacts;
pub mod context;
pub mod corpus;

pub use artifacts::{load_classifier, load_scaler};
pub use context::{ScoutContext, CLASSIFIER_FILE, CORPUS_FILE, SCALER_FILE};
pub use corpus::load_corpus;
