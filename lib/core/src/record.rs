use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::vector::FeatureVector;

/// Stable handle of a corpus entry.
///
/// Ids are dense corpus indices assigned in load order, so `PlayerId(i)`
/// addresses the `i`-th corpus record. They are the identity used for
/// self-exclusion in queries; display names are not identities, distinct
/// players can share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(i: u32) -> Self {
        PlayerId(i)
    }
}

/// Preferred foot.
///
/// The serving set is closed at {Left, Right}; source data occasionally says
/// "Both", which maps to `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Foot {
    Left,
    Right,
}

impl FromStr for Foot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Foot::Left),
            "right" | "both" => Ok(Foot::Right),
            other => Err(Error::DataUnavailable(format!(
                "unknown preferred foot: {other:?}"
            ))),
        }
    }
}

impl std::fmt::Display for Foot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Foot::Left => write!(f, "Left"),
            Foot::Right => write!(f, "Right"),
        }
    }
}

/// One corpus entry: identity, physical and economic attributes, and the raw
/// skill profile in schema order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub club: String,
    pub nationality: String,
    pub foot: Foot,
    /// Position label from the closed set present in the training corpus.
    pub position: String,
    pub image_url: Option<String>,
    pub age: u32,
    pub height_cm: f32,
    pub weight_kg: f32,
    pub value_eur: f64,
    pub overall: u32,
    pub features: FeatureVector,
}

impl PlayerRecord {
    /// Validate the record's attribute invariants and feature shape.
    pub fn validate(&self) -> Result<()> {
        self.features.check_schema()?;
        if self.age == 0 {
            return Err(Error::DataUnavailable(format!(
                "player {}: age must be positive",
                self.id
            )));
        }
        if self.height_cm <= 0.0 || self.weight_kg <= 0.0 {
            return Err(Error::DataUnavailable(format!(
                "player {}: height and weight must be positive",
                self.id
            )));
        }
        if self.value_eur < 0.0 {
            return Err(Error::DataUnavailable(format!(
                "player {}: market value must be non-negative",
                self.id
            )));
        }
        Ok(())
    }
}
