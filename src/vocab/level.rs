use serde::{Deserialize, Serialize};

/// Difficulty band of a vocabulary word, as tagged in the word list data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DifficultyLevel {
    Simple,
    Common,
    Difficult,
    Challenging,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 4] = [
        DifficultyLevel::Simple,
        DifficultyLevel::Common,
        DifficultyLevel::Difficult,
        DifficultyLevel::Challenging,
    ];

    /// Score awarded for a correct answer at this level.
    pub fn points(&self) -> u32 {
        match self {
            DifficultyLevel::Simple => 1,
            DifficultyLevel::Common => 2,
            DifficultyLevel::Difficult => 3,
            DifficultyLevel::Challenging => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_increase_with_level() {
        let points: Vec<u32> = DifficultyLevel::ALL.iter().map(|l| l.points()).collect();
        let mut sorted = points.clone();
        sorted.sort();
        assert_eq!(points, sorted);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&DifficultyLevel::Challenging).unwrap();
        assert_eq!(json, "\"challenging\"");
    }

    #[test]
    fn test_level_display_matches_data_format() {
        assert_eq!(DifficultyLevel::Simple.to_string(), "simple");
        assert_eq!(DifficultyLevel::Difficult.to_string(), "difficult");
    }
}
