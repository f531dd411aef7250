//! # scoutX
//!
//! A player similarity and scouting engine.
//!
//! scoutX answers two questions about football players: "who in the corpus
//! plays most like this player?" and "which professionals resemble this
//! hand-built attribute profile, and in what position?" Retrieval is exact
//! k-nearest-neighbor over normalized attribute vectors, with role
//! classification for free-form profiles and conjunctive business filters
//! (age, budget, position, preferred foot) applied on top.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install scoutx
//! scoutx --data-dir ./data --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use scoutx::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load corpus + trained artifacts once at startup
//! let context = ScoutContext::load("./data".as_ref())?;
//!
//! // Similar players under a budget, at most 25 years old
//! let results = context.recommender().similar_to(
//!     PlayerId(42),
//!     QueryFilters {
//!         max_age: Some(25),
//!         max_budget: Some(30_000_000.0),
//!         ..QueryFilters::default()
//!     },
//! )?;
//!
//! for rec in &results {
//!     println!("{}: score {:.1}", rec.id, rec.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! scoutX is composed of several crates:
//!
//! - `scoutx-core` - Feature schema, vectors, trained artifacts, exact k-NN
//! - `scoutx-engine` - Synthesis, recommendation pipeline, comparison summary
//! - `scoutx-storage` - Corpus/artifact loading and the serving context
//! - `scoutx-api` - REST API
//!
//! ## Pipeline
//!
//! ```text
//! record / profile --> synthesize --> raw vector --+--> classify (raw space)
//!                                                  |
//!                                          scaler.transform
//!                                                  |
//!                                                  v
//!                  neighbor index --> candidates --> exclude / filter
//!                                                  --> top-N + scores
//! ```

// Re-export core types
pub use scoutx_core::{
    schema, Error, FeatureVector, Foot, NeighborIndex, PlayerId, PlayerRecord, Result,
    RoleClassifier, StandardScaler,
};

// Re-export engine
pub use scoutx_engine::{
    similarity_score, summarize, CategoryComparison, ProfileInput, ProfileMatch, QueryFilters,
    QuerySpec, Recommendation, Recommender, SkillView, DEFAULT_FAN_OUT, DEFAULT_LIMIT,
    PROFILE_FAN_OUT, RADAR_CATEGORIES, SCORE_SCALE,
};

// Re-export storage
pub use scoutx_storage::ScoutContext;

// Re-export API
pub use scoutx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        summarize, CategoryComparison, Error, FeatureVector, Foot, NeighborIndex, PlayerId,
        PlayerRecord, ProfileInput, ProfileMatch, QueryFilters, QuerySpec, Recommendation,
        Recommender, RestApi, Result, RoleClassifier, ScoutContext, SkillView, StandardScaler,
    };
}
