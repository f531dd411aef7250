//! Trained-artifact loading.
//!
//! The normalization scaler and the role classifier are produced by the
//! offline training pipeline and shipped as JSON files next to the corpus.
//! Loading validates shape against the schema before first use; a missing or
//! corrupt artifact is `ModelUnavailable` and fatal at startup.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use scoutx_core::{Error, Result, RoleClassifier, StandardScaler};

pub fn load_scaler(path: &Path) -> Result<StandardScaler> {
    let scaler: StandardScaler = read_json(path)?;
    scaler
        .validate()
        .map_err(|e| Error::ModelUnavailable(format!("{}: {e}", path.display())))?;
    Ok(scaler)
}

pub fn load_classifier(path: &Path) -> Result<RoleClassifier> {
    let classifier: RoleClassifier = read_json(path)?;
    classifier
        .validate()
        .map_err(|e| Error::ModelUnavailable(format!("{}: {e}", path.display())))?;
    Ok(classifier)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .map_err(|e| Error::ModelUnavailable(format!("{}: {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| Error::ModelUnavailable(format!("{}: {e}", path.display())))
}
