//! The recommendation engine.
//!
//! Orchestrates synthesis, normalization, optional classification, the
//! neighbor query, and candidate filtering into the final ordered result.
//! The engine borrows the process-wide immutable state (corpus, scaler,
//! classifier, index) and holds nothing of its own; a `Recommender` is
//! constructed per request for free.

use serde::Serialize;

use scoutx_core::{
    Error, FeatureVector, Foot, NeighborIndex, PlayerId, PlayerRecord, Result, RoleClassifier,
    StandardScaler,
};

use crate::synth::{self, ProfileInput};

/// Multiplier mapping normalized-space distance into the 0-100 score band.
///
/// A tuning constant, fixed per deployment so scores stay comparable across
/// requests; it is never derived from data.
pub const SCORE_SCALE: f32 = 10.0;

/// Default number of recommendations returned.
pub const DEFAULT_LIMIT: usize = 5;

/// Default index fan-out for the similar-player flow. Deliberately larger
/// than the result count since exclusion and filters apply after the index
/// query, not inside it.
pub const DEFAULT_FAN_OUT: usize = 20;

/// Default fan-out for the profile-match flow, where the position filter
/// discards a larger share of candidates.
pub const PROFILE_FAN_OUT: usize = 50;

/// Business filters applied to index candidates, conjunctively.
#[derive(Debug, Clone)]
pub struct QueryFilters {
    pub position: Option<String>,
    pub max_age: Option<u32>,
    pub max_budget: Option<f64>,
    pub foot: Option<Foot>,
    pub limit: usize,
    pub fan_out: usize,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self {
            position: None,
            max_age: None,
            max_budget: None,
            foot: None,
            limit: DEFAULT_LIMIT,
            fan_out: DEFAULT_FAN_OUT,
        }
    }
}

/// One recommendation request: a raw target vector, an optional excluded
/// identity, and the filters.
#[derive(Debug, Clone)]
pub struct QuerySpec {
    pub target: FeatureVector,
    pub exclude: Option<PlayerId>,
    pub filters: QueryFilters,
}

impl QuerySpec {
    #[must_use]
    pub fn new(target: FeatureVector) -> Self {
        Self {
            target,
            exclude: None,
            filters: QueryFilters::default(),
        }
    }
}

/// One result entry: corpus handle, raw normalized-space distance, and the
/// derived 0-100 similarity score.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub id: PlayerId,
    pub distance: f32,
    pub score: f32,
}

/// Result of the profile-match flow: the predicted position plus the
/// recommendations restricted to it.
#[derive(Debug, Clone)]
pub struct ProfileMatch {
    pub position: String,
    pub recommendations: Vec<Recommendation>,
}

/// Map a normalized-space distance to the display score band.
#[inline]
#[must_use]
pub fn similarity_score(distance: f32) -> f32 {
    (100.0 - distance * SCORE_SCALE).clamp(0.0, 100.0)
}

/// The recommendation engine over the process-wide read-only state.
#[derive(Clone, Copy)]
pub struct Recommender<'a> {
    corpus: &'a [PlayerRecord],
    scaler: &'a StandardScaler,
    classifier: &'a RoleClassifier,
    index: &'a NeighborIndex,
}

impl<'a> Recommender<'a> {
    #[must_use]
    pub fn new(
        corpus: &'a [PlayerRecord],
        scaler: &'a StandardScaler,
        classifier: &'a RoleClassifier,
        index: &'a NeighborIndex,
    ) -> Self {
        Self {
            corpus,
            scaler,
            classifier,
            index,
        }
    }

    /// Look up a corpus record by its stable handle.
    pub fn record(&self, id: PlayerId) -> Result<&'a PlayerRecord> {
        self.corpus.get(id.0 as usize).ok_or(Error::NotFound(id))
    }

    /// Run the core pipeline for an explicit query spec.
    ///
    /// Fewer survivors than `filters.limit` yields a short result, never an
    /// error; so does an empty one.
    pub fn recommend(&self, spec: &QuerySpec) -> Result<Vec<Recommendation>> {
        let normalized = self.scaler.transform(&spec.target)?;
        let candidates = self.index.query(&normalized, spec.filters.fan_out)?;

        let results = candidates
            .into_iter()
            .filter(|(id, _)| spec.exclude != Some(*id))
            .filter(|(id, _)| {
                self.corpus
                    .get(id.0 as usize)
                    .is_some_and(|rec| Self::passes_filters(rec, &spec.filters))
            })
            .take(spec.filters.limit)
            .map(|(id, distance)| Recommendation {
                id,
                distance,
                score: similarity_score(distance),
            })
            .collect();

        Ok(results)
    }

    /// Similar players to a corpus entry, excluding the entry itself by
    /// stable identity (never by display name).
    pub fn similar_to(&self, id: PlayerId, filters: QueryFilters) -> Result<Vec<Recommendation>> {
        let record = self.record(id)?;
        let target = synth::synthesize_record(record)?;
        self.recommend(&QuerySpec {
            target,
            exclude: Some(id),
            filters,
        })
    }

    /// Profile-match flow: classify the raw synthesized vector, pin the
    /// predicted position as the role filter, then recommend.
    ///
    /// Classification deliberately sees the raw vector while the neighbor
    /// search runs in normalized space; the two models were trained in
    /// different spaces and must be fed accordingly.
    pub fn match_profile(
        &self,
        profile: &ProfileInput,
        mut filters: QueryFilters,
    ) -> Result<ProfileMatch> {
        let target = synth::synthesize_profile(profile);
        let position = self.classifier.classify(&target)?.to_string();
        filters.position = Some(position.clone());

        let recommendations = self.recommend(&QuerySpec {
            target,
            exclude: None,
            filters,
        })?;

        Ok(ProfileMatch {
            position,
            recommendations,
        })
    }

    fn passes_filters(record: &PlayerRecord, filters: &QueryFilters) -> bool {
        if let Some(max_age) = filters.max_age {
            if record.age > max_age {
                return false;
            }
        }
        if let Some(max_budget) = filters.max_budget {
            if record.value_eur > max_budget {
                return false;
            }
        }
        if let Some(position) = &filters.position {
            if record.position != *position {
                return false;
            }
        }
        if let Some(foot) = filters.foot {
            if record.foot != foot {
                return false;
            }
        }
        true
    }
}
