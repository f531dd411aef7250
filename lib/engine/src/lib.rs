//! # scoutX Engine
//!
//! The recommendation pipeline on top of `scoutx-core`.
//!
//! This crate turns the core's trained artifacts into the serving contract:
//!
//! - **Feature synthesis**: a schema-conformant raw vector from either a
//!   corpus record or a partial scouting form ([`synth`])
//! - **Recommendation**: normalize, query the neighbor index with a generous
//!   fan-out, exclude, filter, truncate, score ([`recommend`])
//! - **Comparison summary**: the six primary composites of two profiles for
//!   side-by-side display ([`radar`])
//!
//! ## Example
//!
//! ```rust,no_run
//! use scoutx_core::{NeighborIndex, PlayerRecord, RoleClassifier, StandardScaler, PlayerId};
//! use scoutx_engine::{QueryFilters, Recommender};
//!
//! # fn demo(corpus: &[PlayerRecord], scaler: &StandardScaler,
//! #         classifier: &RoleClassifier, index: &NeighborIndex) -> scoutx_core::Result<()> {
//! let recommender = Recommender::new(corpus, scaler, classifier, index);
//! let similar = recommender.similar_to(
//!     PlayerId(17),
//!     QueryFilters {
//!         max_age: Some(25),
//!         max_budget: Some(30_000_000.0),
//!         ..QueryFilters::default()
//!     },
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod radar;
pub mod recommend;
pub mod synth;

pub use radar::{summarize, CategoryComparison, SkillView, RADAR_CATEGORIES};
pub use recommend::{
    similarity_score, ProfileMatch, QueryFilters, QuerySpec, Recommendation, Recommender,
    DEFAULT_FAN_OUT, DEFAULT_LIMIT, PROFILE_FAN_OUT, SCORE_SCALE,
};
pub use synth::{synthesize_profile, synthesize_record, ProfileInput};
