//! Process-wide serving state.
//!
//! One `ScoutContext` is built at startup and shared read-only (behind an
//! `Arc`) for the process lifetime. Nothing re-loads or mutates it per
//! request, and no lock guards it; there is no writer after initialization.
//! If any piece fails to load the whole context fails, and the process must
//! refuse to serve rather than run with partial state.

use std::path::Path;

use tracing::info;

use scoutx_core::{
    Error, NeighborIndex, PlayerId, PlayerRecord, Result, RoleClassifier, StandardScaler,
};
use scoutx_engine::Recommender;

use crate::artifacts::{load_classifier, load_scaler};
use crate::corpus::load_corpus;

/// File names expected inside the data directory.
pub const CORPUS_FILE: &str = "players.csv";
pub const SCALER_FILE: &str = "scaler.json";
pub const CLASSIFIER_FILE: &str = "classifier.json";

/// The immutable serving state: corpus, trained artifacts, and the neighbor
/// index derived from them.
pub struct ScoutContext {
    corpus: Vec<PlayerRecord>,
    scaler: StandardScaler,
    classifier: RoleClassifier,
    index: NeighborIndex,
}

impl ScoutContext {
    /// Load everything from a data directory.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let corpus = load_corpus(&data_dir.join(CORPUS_FILE))?;
        let scaler = load_scaler(&data_dir.join(SCALER_FILE))?;
        let classifier = load_classifier(&data_dir.join(CLASSIFIER_FILE))?;

        let context = Self::from_parts(corpus, scaler, classifier)?;
        info!(
            players = context.corpus.len(),
            positions = context.classifier.labels().len(),
            "serving context loaded"
        );
        Ok(context)
    }

    /// Assemble a context from already-loaded parts.
    ///
    /// Validates every record, checks that ids are the dense corpus indices
    /// the engine relies on, and builds the neighbor index by pushing each
    /// corpus vector through the shared scaler. The index is derived state:
    /// identical corpus and scaler always produce the identical index.
    pub fn from_parts(
        corpus: Vec<PlayerRecord>,
        scaler: StandardScaler,
        classifier: RoleClassifier,
    ) -> Result<Self> {
        for (i, record) in corpus.iter().enumerate() {
            record.validate()?;
            if record.id != PlayerId(i as u32) {
                return Err(Error::DataUnavailable(format!(
                    "corpus id {} found at position {i}",
                    record.id
                )));
            }
        }

        let normalized = corpus
            .iter()
            .map(|r| Ok((r.id, scaler.transform(&r.features)?)))
            .collect::<Result<Vec<_>>>()?;
        let index = NeighborIndex::build(normalized)?;

        Ok(Self {
            corpus,
            scaler,
            classifier,
            index,
        })
    }

    #[inline]
    #[must_use]
    pub fn corpus(&self) -> &[PlayerRecord] {
        &self.corpus
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.corpus.get(id.0 as usize)
    }

    #[inline]
    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    #[inline]
    #[must_use]
    pub fn classifier(&self) -> &RoleClassifier {
        &self.classifier
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> &NeighborIndex {
        &self.index
    }

    /// A recommendation engine borrowing this context.
    #[must_use]
    pub fn recommender(&self) -> Recommender<'_> {
        Recommender::new(&self.corpus, &self.scaler, &self.classifier, &self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoutx_core::{schema, FeatureVector, Foot};

    fn record(id: u32, fill: f32) -> PlayerRecord {
        PlayerRecord {
            id: PlayerId(id),
            name: format!("Player {id}"),
            club: "FC Test".to_string(),
            nationality: "Testland".to_string(),
            foot: Foot::Right,
            position: "MID".to_string(),
            image_url: None,
            age: 24,
            height_cm: 180.0,
            weight_kg: 75.0,
            value_eur: 1_000_000.0,
            overall: 70,
            features: FeatureVector::new(vec![fill; schema::DIM]),
        }
    }

    fn parts(corpus: &[PlayerRecord]) -> (StandardScaler, RoleClassifier) {
        let vectors: Vec<FeatureVector> = corpus.iter().map(|r| r.features.clone()).collect();
        let scaler = StandardScaler::fit(&vectors).unwrap();
        let classifier = RoleClassifier::new(
            vec!["MID".to_string()],
            vec![FeatureVector::new(vec![50.0; schema::DIM])],
        )
        .unwrap();
        (scaler, classifier)
    }

    #[test]
    fn test_from_parts_builds_index_over_whole_corpus() {
        let corpus = vec![record(0, 40.0), record(1, 50.0), record(2, 60.0)];
        let (scaler, classifier) = parts(&corpus);

        let context = ScoutContext::from_parts(corpus, scaler, classifier).unwrap();
        assert_eq!(context.index().len(), 3);
        assert_eq!(context.corpus().len(), 3);
        assert!(context.player(PlayerId(2)).is_some());
        assert!(context.player(PlayerId(3)).is_none());
    }

    #[test]
    fn test_from_parts_rejects_misnumbered_corpus() {
        let corpus = vec![record(0, 40.0), record(5, 50.0)];
        let (scaler, classifier) = parts(&corpus);

        assert!(ScoutContext::from_parts(corpus, scaler, classifier).is_err());
    }

    #[test]
    fn test_load_fails_on_missing_directory() {
        assert!(ScoutContext::load(Path::new("/nonexistent")).is_err());
    }
}
