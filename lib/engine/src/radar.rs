//! Side-by-side comparison summary.
//!
//! Reduces two skill profiles to the six primary composite categories for
//! display next to each recommendation. Display-only: no filtering or
//! ranking logic lives here, and a source missing a category contributes 0
//! rather than failing, so a partial live form can be compared against a
//! full corpus vector.

use serde::Serialize;

use scoutx_core::FeatureVector;

use crate::synth::ProfileInput;

/// The categories shown on the comparison chart, in display order.
pub const RADAR_CATEGORIES: [&str; 6] = [
    "pace",
    "shooting",
    "passing",
    "dribbling",
    "defending",
    "physic",
];

/// Anything a comparison side can be read from.
pub trait SkillView {
    /// Value of a named category, if this source carries it.
    fn skill(&self, name: &str) -> Option<f32>;
}

impl SkillView for FeatureVector {
    fn skill(&self, name: &str) -> Option<f32> {
        self.dimension(name)
    }
}

impl SkillView for ProfileInput {
    fn skill(&self, name: &str) -> Option<f32> {
        match name {
            "pace" => Some(self.pace),
            "shooting" => Some(self.shooting),
            "passing" => Some(self.passing),
            "dribbling" => Some(self.dribbling),
            "defending" => Some(self.defending),
            "physic" => Some((self.strength + self.stamina) / 2.0),
            _ => None,
        }
    }
}

/// One comparison row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryComparison {
    pub category: &'static str,
    pub left: f32,
    pub right: f32,
}

/// Compare two sides over the primary categories. Absent categories read
/// as 0.
#[must_use]
pub fn summarize(left: &dyn SkillView, right: &dyn SkillView) -> Vec<CategoryComparison> {
    RADAR_CATEGORIES
        .iter()
        .map(|category| CategoryComparison {
            category,
            left: left.skill(category).unwrap_or(0.0),
            right: right.skill(category).unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoutx_core::schema;

    struct Sparse;

    impl SkillView for Sparse {
        fn skill(&self, name: &str) -> Option<f32> {
            (name == "pace").then_some(90.0)
        }
    }

    fn full_vector() -> FeatureVector {
        let mut data = vec![0.0; schema::DIM];
        for (i, cat) in RADAR_CATEGORIES.iter().enumerate() {
            data[schema::index_of(cat).unwrap()] = 60.0 + i as f32;
        }
        FeatureVector::new(data)
    }

    #[test]
    fn test_summary_covers_all_categories_in_order() {
        let v = full_vector();
        let rows = summarize(&v, &v);

        let cats: Vec<&str> = rows.iter().map(|r| r.category).collect();
        assert_eq!(cats, RADAR_CATEGORIES);
        assert_eq!(rows[0].left, 60.0);
        assert_eq!(rows[5].right, 65.0);
    }

    #[test]
    fn test_missing_categories_default_to_zero() {
        let v = full_vector();
        let rows = summarize(&Sparse, &v);

        assert_eq!(rows[0].left, 90.0);
        for row in &rows[1..] {
            assert_eq!(row.left, 0.0);
        }
        assert!(rows.iter().all(|r| r.right >= 60.0));
    }

    #[test]
    fn test_profile_side_uses_derived_physic() {
        let p = crate::synth::tests::profile();
        let rows = summarize(&p, &p);
        let physic = rows.iter().find(|r| r.category == "physic").unwrap();
        assert_eq!(physic.left, (p.strength + p.stamina) / 2.0);
    }
}
