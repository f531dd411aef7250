//! Corpus loading.
//!
//! The player corpus is a CSV file produced by the offline data preparation:
//! one row per player, identity and attribute columns plus the 35 skill
//! columns named exactly like the schema dimensions. Corpus ids are assigned
//! from row order, so the file's ordering is part of the trained state and
//! must match the ordering the artifacts were fit against.

use std::path::Path;

use serde::Deserialize;

use scoutx_core::{Error, FeatureVector, PlayerId, PlayerRecord, Result};

/// One raw CSV row. Field names are the column names.
#[derive(Debug, Deserialize)]
struct CorpusRow {
    short_name: String,
    club_name: String,
    nationality_name: String,
    preferred_foot: String,
    position: String,
    #[serde(default)]
    player_face_url: Option<String>,
    age: u32,
    height_cm: f32,
    weight_kg: f32,
    value_eur: f64,
    overall: u32,
    pace: f32,
    shooting: f32,
    passing: f32,
    dribbling: f32,
    defending: f32,
    physic: f32,
    attacking_crossing: f32,
    attacking_finishing: f32,
    attacking_heading_accuracy: f32,
    attacking_short_passing: f32,
    attacking_volleys: f32,
    skill_dribbling: f32,
    skill_curve: f32,
    skill_fk_accuracy: f32,
    skill_long_passing: f32,
    skill_ball_control: f32,
    movement_acceleration: f32,
    movement_sprint_speed: f32,
    movement_agility: f32,
    movement_reactions: f32,
    movement_balance: f32,
    power_shot_power: f32,
    power_jumping: f32,
    power_stamina: f32,
    power_strength: f32,
    power_long_shots: f32,
    mentality_aggression: f32,
    mentality_interceptions: f32,
    mentality_positioning: f32,
    mentality_vision: f32,
    mentality_penalties: f32,
    mentality_composure: f32,
    defending_marking_awareness: f32,
    defending_standing_tackle: f32,
    defending_sliding_tackle: f32,
}

impl CorpusRow {
    fn into_record(self, id: PlayerId) -> Result<PlayerRecord> {
        let foot = self.preferred_foot.parse()?;

        // Feature slots in schema order.
        let features = FeatureVector::new(vec![
            self.height_cm,
            self.weight_kg,
            self.pace,
            self.shooting,
            self.passing,
            self.dribbling,
            self.defending,
            self.physic,
            self.attacking_crossing,
            self.attacking_finishing,
            self.attacking_heading_accuracy,
            self.attacking_short_passing,
            self.attacking_volleys,
            self.skill_dribbling,
            self.skill_curve,
            self.skill_fk_accuracy,
            self.skill_long_passing,
            self.skill_ball_control,
            self.movement_acceleration,
            self.movement_sprint_speed,
            self.movement_agility,
            self.movement_reactions,
            self.movement_balance,
            self.power_shot_power,
            self.power_jumping,
            self.power_stamina,
            self.power_strength,
            self.power_long_shots,
            self.mentality_aggression,
            self.mentality_interceptions,
            self.mentality_positioning,
            self.mentality_vision,
            self.mentality_penalties,
            self.mentality_composure,
            self.defending_marking_awareness,
            self.defending_standing_tackle,
            self.defending_sliding_tackle,
        ]);

        Ok(PlayerRecord {
            id,
            name: self.short_name,
            club: self.club_name,
            nationality: self.nationality_name,
            foot,
            position: self.position,
            image_url: self.player_face_url.filter(|url| !url.is_empty()),
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            value_eur: self.value_eur,
            overall: self.overall,
            features,
        })
    }
}

/// Load and validate the full corpus. Any unreadable file or invalid row
/// fails the load; a half-read corpus is worse than no corpus.
pub fn load_corpus(path: &Path) -> Result<Vec<PlayerRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::DataUnavailable(format!("{}: {e}", path.display())))?;

    let mut corpus = Vec::new();
    for (i, row) in reader.deserialize::<CorpusRow>().enumerate() {
        let row = row.map_err(|e| Error::DataUnavailable(format!("row {}: {e}", i + 1)))?;
        let record = row.into_record(PlayerId(i as u32))?;
        record.validate()?;
        corpus.push(record);
    }

    if corpus.is_empty() {
        return Err(Error::DataUnavailable(format!(
            "{}: corpus has no rows",
            path.display()
        )));
    }
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoutx_core::{schema, Foot};
    use std::io::Write;

    const META_COLUMNS: &str = "short_name,club_name,nationality_name,preferred_foot,position,player_face_url,age,height_cm,weight_kg,value_eur,overall";

    fn csv_header() -> String {
        format!("{META_COLUMNS},{}", schema::names()[2..].join(","))
    }

    fn csv_row(name: &str, foot: &str, age: u32, value: f64, skill: f32) -> String {
        let skills = vec![skill.to_string(); schema::DIM - 2].join(",");
        format!("{name},FC Test,Testland,{foot},MID,,{age},180,75,{value},70,{skills}")
    }

    fn write_csv(lines: &[String]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", csv_header()).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn test_load_corpus_assigns_ids_in_row_order() {
        let file = write_csv(&[
            csv_row("A. One", "Left", 24, 1_000_000.0, 60.0),
            csv_row("B. Two", "Right", 27, 2_000_000.0, 70.0),
        ]);

        let corpus = load_corpus(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].id, PlayerId(0));
        assert_eq!(corpus[1].id, PlayerId(1));
        assert_eq!(corpus[0].name, "A. One");
        assert_eq!(corpus[0].foot, Foot::Left);
        assert_eq!(corpus[0].features.dim(), schema::DIM);
        assert_eq!(corpus[0].features.dimension("height_cm"), Some(180.0));
        assert_eq!(corpus[0].features.dimension("pace"), Some(60.0));
        assert!(corpus[0].image_url.is_none());
    }

    #[test]
    fn test_both_footed_maps_to_right() {
        let file = write_csv(&[csv_row("C. Three", "Both", 22, 500_000.0, 55.0)]);
        let corpus = load_corpus(file.path()).unwrap();
        assert_eq!(corpus[0].foot, Foot::Right);
    }

    #[test]
    fn test_missing_file_is_data_unavailable() {
        let err = load_corpus(Path::new("/nonexistent/players.csv")).unwrap_err();
        assert!(matches!(err, Error::DataUnavailable(_)));
    }

    #[test]
    fn test_invalid_row_fails_the_load() {
        let file = write_csv(&[csv_row("D. Four", "Right", 0, 1_000.0, 50.0)]);
        assert!(load_corpus(file.path()).is_err());
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let file = write_csv(&[]);
        assert!(matches!(
            load_corpus(file.path()),
            Err(Error::DataUnavailable(_))
        ));
    }
}
