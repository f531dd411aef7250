//! The fixed feature schema.
//!
//! Every feature vector in the system conforms to this ordered list of named
//! dimensions. The order is load-bearing: the normalization model, the role
//! classifier, and the neighbor index were all trained against vectors laid
//! out exactly like this, so the list is append-only within a deployment and
//! any reordering invalidates the trained artifacts.

/// Ordered dimension names. The two physical dimensions come first on their
/// natural scale (centimeters, kilograms); the remaining 35 skill dimensions
/// are nominally 0-99.
pub const DIMENSIONS: [&str; 37] = [
    "height_cm",
    "weight_kg",
    "pace",
    "shooting",
    "passing",
    "dribbling",
    "defending",
    "physic",
    "attacking_crossing",
    "attacking_finishing",
    "attacking_heading_accuracy",
    "attacking_short_passing",
    "attacking_volleys",
    "skill_dribbling",
    "skill_curve",
    "skill_fk_accuracy",
    "skill_long_passing",
    "skill_ball_control",
    "movement_acceleration",
    "movement_sprint_speed",
    "movement_agility",
    "movement_reactions",
    "movement_balance",
    "power_shot_power",
    "power_jumping",
    "power_stamina",
    "power_strength",
    "power_long_shots",
    "mentality_aggression",
    "mentality_interceptions",
    "mentality_positioning",
    "mentality_vision",
    "mentality_penalties",
    "mentality_composure",
    "defending_marking_awareness",
    "defending_standing_tackle",
    "defending_sliding_tackle",
];

/// Number of dimensions every feature vector must carry.
pub const DIM: usize = DIMENSIONS.len();

/// Dimension names in schema order.
#[inline]
#[must_use]
pub fn names() -> &'static [&'static str] {
    &DIMENSIONS
}

/// Slot index of a named dimension, if the schema defines it.
#[must_use]
pub fn index_of(name: &str) -> Option<usize> {
    DIMENSIONS.iter().position(|&d| d == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_count() {
        assert_eq!(DIM, 37);
        assert_eq!(names().len(), DIM);
    }

    #[test]
    fn test_index_of_known_dimensions() {
        assert_eq!(index_of("height_cm"), Some(0));
        assert_eq!(index_of("pace"), Some(2));
        assert_eq!(index_of("defending_sliding_tackle"), Some(DIM - 1));
    }

    #[test]
    fn test_index_of_unknown_dimension() {
        assert_eq!(index_of("overall"), None);
        assert_eq!(index_of(""), None);
    }

    #[test]
    fn test_no_duplicate_dimensions() {
        for (i, name) in DIMENSIONS.iter().enumerate() {
            assert_eq!(index_of(name), Some(i), "duplicate dimension {name}");
        }
    }
}
