//! Feature synthesis.
//!
//! Two paths produce a schema-conformant raw feature vector:
//!
//! - the corpus path re-validates a stored record's vector;
//! - the partial-input path derives every schema dimension from the small
//!   set of directly measured inputs a scouting form collects.
//!
//! The derivation formulas are fixed, documented heuristics. Changing any of
//! them changes the serving behavior bit-for-bit and needs sign-off, the
//! table below is the contract, not an approximation of one. Outputs are not
//! clamped to the nominal 0-99 band; the normalization model was fit on
//! training statistics, so out-of-band values pass through unharmed.

use serde::{Deserialize, Serialize};

use scoutx_core::{schema, FeatureVector, PlayerRecord, Result};

/// Directly measured inputs of the partial path: physical measurements plus
/// the primary skill sliders. All sliders are on the nominal 0-99 scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileInput {
    pub age: u32,
    pub height_cm: f32,
    pub weight_kg: f32,
    pub pace: f32,
    pub shooting: f32,
    pub passing: f32,
    pub dribbling: f32,
    pub defending: f32,
    pub stamina: f32,
    pub strength: f32,
    pub composure: f32,
    pub vision: f32,
    pub aggression: f32,
    pub interceptions: f32,
    pub tackling: f32,
    pub crossing: f32,
    pub finishing: f32,
    pub ball_control: f32,
}

/// Corpus path: the stored raw vector, re-validated against the schema.
pub fn synthesize_record(record: &PlayerRecord) -> Result<FeatureVector> {
    record.features.check_schema()?;
    Ok(record.features.clone())
}

/// Partial-input path: derive all schema dimensions from the profile.
///
/// Pure and deterministic; a given profile always yields the same vector,
/// and each dimension depends only on the inputs its formula names.
#[must_use]
pub fn synthesize_profile(profile: &ProfileInput) -> FeatureVector {
    let data = schema::names()
        .iter()
        .map(|name| derive_dimension(name, profile))
        .collect();
    FeatureVector::new(data)
}

/// The dimension formula table.
fn derive_dimension(name: &str, p: &ProfileInput) -> f32 {
    match name {
        "height_cm" => p.height_cm,
        "weight_kg" => p.weight_kg,
        "pace" => p.pace,
        "shooting" => p.shooting,
        "passing" => p.passing,
        "dribbling" => p.dribbling,
        "defending" => p.defending,
        "physic" => (p.strength + p.stamina) / 2.0,
        "attacking_crossing" => p.crossing,
        "attacking_finishing" => p.finishing,
        "attacking_heading_accuracy" => p.height_cm / 2.5,
        "attacking_short_passing" => p.passing - 2.0,
        "attacking_volleys" => p.shooting - 5.0,
        "skill_dribbling" => p.dribbling - 2.0,
        "skill_curve" => p.passing - 5.0,
        "skill_fk_accuracy" => p.passing - 8.0,
        "skill_long_passing" => p.passing - 4.0,
        "skill_ball_control" => p.ball_control,
        "movement_acceleration" => p.pace - 2.0,
        "movement_sprint_speed" => p.pace,
        "movement_agility" => p.dribbling - 3.0,
        "movement_reactions" => p.composure - 2.0,
        "movement_balance" => p.dribbling - 5.0,
        "power_shot_power" => p.shooting - 2.0,
        "power_jumping" => p.height_cm / 2.4,
        "power_stamina" => p.stamina,
        "power_strength" => p.strength,
        "power_long_shots" => p.shooting - 6.0,
        "mentality_aggression" => p.aggression,
        "mentality_interceptions" => p.interceptions,
        "mentality_positioning" => p.shooting - 4.0,
        "mentality_vision" => p.vision,
        "mentality_penalties" => p.shooting - 8.0,
        "mentality_composure" => p.composure,
        "defending_marking_awareness" => p.defending - 3.0,
        "defending_standing_tackle" => p.tackling,
        "defending_sliding_tackle" => p.tackling - 4.0,
        other => unreachable!("schema dimension {other} has no derivation formula"),
    }
}
