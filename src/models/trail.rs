use serde::{Deserialize, Serialize};

/// Difficulty tier for a trail
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    Expert,
}

impl Difficulty {
    /// Parse a difficulty label into a Difficulty enum value.
    /// Handles variations like "Easy - Weekend", "moderate", etc.
    pub fn from_label(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if lower.contains("expert") {
            Some(Difficulty::Expert)
        } else if lower.contains("difficult") || lower.contains("hard") {
            Some(Difficulty::Difficult)
        } else if lower.contains("moderate") {
            Some(Difficulty::Moderate)
        } else if lower.contains("easy") {
            Some(Difficulty::Easy)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Moderate => write!(f, "Moderate"),
            Difficulty::Difficult => write!(f, "Difficult"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

/// A trekking route from the catalog. Read-only: trails are selected,
/// never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub id: String,
    pub name: String,
    pub location: String,
    pub difficulty: Difficulty,
    /// Display string, e.g. "20 km"
    pub distance: String,
    /// Display string, e.g. "3,810 m"
    pub elevation: String,
    /// Duration estimate, e.g. "4-5 days"
    pub duration: String,
    pub rating: f32,
    pub reviews: u32,
    /// Indicative package price, e.g. "₹8,500"
    pub price_hint: String,
    /// Recommended season, e.g. "Dec-Apr"
    pub best_time: String,
    pub features: Vec<String>,
    pub image: String,
}

impl Trail {
    /// Compact one-line label for list views
    pub fn summary_line(&self) -> String {
        format!(
            "{} ({}) — {}, {}, {}",
            self.name, self.location, self.difficulty, self.distance, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_label() {
        assert_eq!(Difficulty::from_label("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_label("moderate"), Some(Difficulty::Moderate));
        assert_eq!(Difficulty::from_label("Difficult"), Some(Difficulty::Difficult));
        assert_eq!(Difficulty::from_label("EXPERT"), Some(Difficulty::Expert));
        assert_eq!(Difficulty::from_label("Moderate - Snow"), Some(Difficulty::Moderate));
        assert_eq!(Difficulty::from_label("unknown"), None);
        assert_eq!(Difficulty::from_label(""), None);
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Expert > Difficulty::Difficult);
        assert!(Difficulty::Difficult > Difficulty::Moderate);
        assert!(Difficulty::Moderate > Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Expert.to_string(), "Expert");
    }
}
