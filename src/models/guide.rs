use serde::{Deserialize, Serialize};

/// A bookable trek leader from the catalog. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: String,
    pub name: String,
    pub initials: String,
    /// Free text, e.g. "15+ years experience"
    pub experience: String,
    pub rating: f32,
    pub reviews: u32,
    pub languages: Vec<String>,
    pub specialties: Vec<String>,
    /// Daily rate in whole rupees
    pub price_per_day: u64,
    pub bio: String,
    pub avatar: String,
}

impl Guide {
    pub fn languages_display(&self) -> String {
        self.languages.join(", ")
    }

    /// Compact one-line label for list views
    pub fn summary_line(&self) -> String {
        format!(
            "{} — {}, {:.1}★ ({} reviews)",
            self.name, self.experience, self.rating, self.reviews
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_guide() -> Guide {
        Guide {
            id: "rajesh-kumar".to_string(),
            name: "Rajesh Kumar".to_string(),
            initials: "RK".to_string(),
            experience: "15+ years experience".to_string(),
            rating: 4.9,
            reviews: 127,
            languages: vec!["English".to_string(), "Hindi".to_string()],
            specialties: vec!["Certified Mountaineer".to_string()],
            price_per_day: 3500,
            bio: String::new(),
            avatar: String::new(),
        }
    }

    #[test]
    fn test_languages_display() {
        assert_eq!(sample_guide().languages_display(), "English, Hindi");
    }

    #[test]
    fn test_summary_line_mentions_reviews() {
        let line = sample_guide().summary_line();
        assert!(line.contains("Rajesh Kumar"));
        assert!(line.contains("127 reviews"));
    }
}
