//! Static catalogs of trails, guides, and add-on templates.
//!
//! These stand in for a backend: read-only lists of records with no
//! mutation logic. The booking core treats them as opaque collaborators
//! and only ever copies entries out of them.

use crate::models::{
    AddOn, AddOnCategory, AddOnSelection, Difficulty, Guide, PriceUnit, Trail,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Featured trekking routes across India.
pub fn trails() -> Vec<Trail> {
    vec![
        Trail {
            id: "kedarkantha".to_string(),
            name: "Kedarkantha Trek".to_string(),
            location: "Uttarakhand".to_string(),
            difficulty: Difficulty::Moderate,
            distance: "20 km".to_string(),
            elevation: "3,810 m".to_string(),
            duration: "4-5 days".to_string(),
            rating: 4.8,
            reviews: 892,
            price_hint: "₹8,500".to_string(),
            best_time: "Dec-Apr".to_string(),
            features: strings(&["Snow Trek", "360° Views", "Beginner Friendly"]),
            image: "https://images.unsplash.com/photo-1737523094517-e44d8b34fb64?w=1080"
                .to_string(),
        },
        Trail {
            id: "hampta-pass".to_string(),
            name: "Hampta Pass Trek".to_string(),
            location: "Himachal Pradesh".to_string(),
            difficulty: Difficulty::Moderate,
            distance: "26 km".to_string(),
            elevation: "4,270 m".to_string(),
            duration: "5 days".to_string(),
            rating: 4.7,
            reviews: 654,
            price_hint: "₹12,000".to_string(),
            best_time: "Jun-Sep".to_string(),
            features: strings(&["Valley Views", "River Crossing", "Desert Mountains"]),
            image: "https://images.unsplash.com/photo-1708867817468-9f7a7aaa0d50?w=1080"
                .to_string(),
        },
        Trail {
            id: "rajmachi".to_string(),
            name: "Rajmachi Fort Trek".to_string(),
            location: "Maharashtra".to_string(),
            difficulty: Difficulty::Easy,
            distance: "15 km".to_string(),
            elevation: "1,000 m".to_string(),
            duration: "2 days".to_string(),
            rating: 4.5,
            reviews: 1247,
            price_hint: "₹2,500".to_string(),
            best_time: "Oct-Mar".to_string(),
            features: strings(&["Historical Fort", "Monsoon Special", "Weekend Trek"]),
            image: "https://images.unsplash.com/photo-1705258632838-79362a86a531?w=1080"
                .to_string(),
        },
        Trail {
            id: "valley-of-flowers".to_string(),
            name: "Valley of Flowers".to_string(),
            location: "Uttarakhand".to_string(),
            difficulty: Difficulty::Moderate,
            distance: "38 km".to_string(),
            elevation: "3,658 m".to_string(),
            duration: "6 days".to_string(),
            rating: 4.9,
            reviews: 423,
            price_hint: "₹15,000".to_string(),
            best_time: "Jul-Sep".to_string(),
            features: strings(&["UNESCO Site", "Alpine Flowers", "Hemkund Sahib"]),
            image: "https://images.unsplash.com/photo-1584525242979-1b96af822fb8?w=1080"
                .to_string(),
        },
    ]
}

/// Available expert guides. Every guide can lead every trail; there is
/// no per-trail assignment in the catalog.
pub fn guides() -> Vec<Guide> {
    vec![
        Guide {
            id: "rajesh-kumar".to_string(),
            name: "Rajesh Kumar".to_string(),
            initials: "RK".to_string(),
            experience: "15+ years experience".to_string(),
            rating: 4.9,
            reviews: 127,
            languages: strings(&["English", "Hindi", "Local Dialect"]),
            specialties: strings(&[
                "Certified Mountaineer",
                "High Altitude Expert",
                "Safety Specialist",
            ]),
            price_per_day: 3500,
            bio: "Expert mountaineer with extensive knowledge of Himalayan regions. \
                  Certified in wilderness first aid and mountain rescue operations."
                .to_string(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150"
                .to_string(),
        },
        Guide {
            id: "anil-sharma".to_string(),
            name: "Anil Sharma".to_string(),
            initials: "AS".to_string(),
            experience: "12+ years experience".to_string(),
            rating: 4.8,
            reviews: 89,
            languages: strings(&["English", "Hindi", "Garhwali"]),
            specialties: strings(&["Wildlife Expert", "Photography Guide", "Flora & Fauna"]),
            price_per_day: 3000,
            bio: "Nature enthusiast and wildlife photographer. Specializes in \
                  eco-friendly trekking and sustainable tourism practices."
                .to_string(),
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150"
                .to_string(),
        },
        Guide {
            id: "priya-mehta".to_string(),
            name: "Priya Mehta".to_string(),
            initials: "PM".to_string(),
            experience: "10+ years experience".to_string(),
            rating: 4.9,
            reviews: 156,
            languages: strings(&["English", "Hindi", "German", "French"]),
            specialties: strings(&[
                "International Groups",
                "Cultural Guide",
                "Adventure Photography",
            ]),
            price_per_day: 4000,
            bio: "Multi-lingual guide with extensive experience leading international \
                  trekking groups. Expert in cultural immersion experiences."
                .to_string(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b88e8e6f?w=150"
                .to_string(),
        },
        Guide {
            id: "vikram-singh".to_string(),
            name: "Vikram Singh".to_string(),
            initials: "VS".to_string(),
            experience: "18+ years experience".to_string(),
            rating: 4.7,
            reviews: 203,
            languages: strings(&["English", "Hindi", "Punjabi"]),
            specialties: strings(&[
                "Extreme Weather",
                "Technical Climbing",
                "Emergency Response",
            ]),
            price_per_day: 4500,
            bio: "Veteran guide with expertise in extreme weather conditions and \
                  technical climbing. Former military with advanced survival training."
                .to_string(),
            avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150"
                .to_string(),
        },
    ]
}

/// Add-on templates offered on every booking.
pub fn add_on_templates() -> Vec<AddOn> {
    vec![
        AddOn {
            id: "accommodation".to_string(),
            name: "Accommodation Package".to_string(),
            description: "Comfortable stays before and after trek".to_string(),
            price: 2500,
            price_unit: PriceUnit::PerNight,
            category: AddOnCategory::Accommodation,
            default_quantity: 2,
        },
        AddOn {
            id: "meals".to_string(),
            name: "Complete Meal Package".to_string(),
            description: "All meals during trek (breakfast, lunch, dinner)".to_string(),
            price: 800,
            price_unit: PriceUnit::PerDay,
            category: AddOnCategory::Meals,
            default_quantity: 1,
        },
        AddOn {
            id: "gear-basic".to_string(),
            name: "Basic Gear Package".to_string(),
            description: "Essential trekking equipment".to_string(),
            price: 1200,
            price_unit: PriceUnit::PerPackage,
            category: AddOnCategory::Gear,
            default_quantity: 1,
        },
        AddOn {
            id: "gear-premium".to_string(),
            name: "Premium Gear Package".to_string(),
            description: "Professional high-altitude equipment".to_string(),
            price: 2500,
            price_unit: PriceUnit::PerPackage,
            category: AddOnCategory::Gear,
            default_quantity: 1,
        },
        AddOn {
            id: "transport".to_string(),
            name: "Transportation Package".to_string(),
            description: "Pick-up and drop from nearest city".to_string(),
            price: 1500,
            price_unit: PriceUnit::PerPerson,
            category: AddOnCategory::Transport,
            default_quantity: 1,
        },
        AddOn {
            id: "photography".to_string(),
            name: "Photography Service".to_string(),
            description: "Professional trek photography".to_string(),
            price: 3000,
            price_unit: PriceUnit::PerTrek,
            category: AddOnCategory::Other,
            default_quantity: 1,
        },
    ]
}

/// Fresh selection overlays for a new booking: every template present,
/// nothing selected.
pub fn default_add_ons() -> Vec<AddOnSelection> {
    add_on_templates()
        .iter()
        .map(AddOnSelection::from_template)
        .collect()
}

pub fn find_trail(id: &str) -> Option<Trail> {
    trails().into_iter().find(|t| t.id == id)
}

pub fn find_guide(id: &str) -> Option<Guide> {
    guides().into_iter().find(|g| g.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_trail_ids_unique() {
        let ids: HashSet<String> = trails().into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), trails().len());
    }

    #[test]
    fn test_guide_ids_unique_and_priced() {
        let guides = guides();
        let ids: HashSet<&str> = guides.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids.len(), guides.len());
        assert!(guides.iter().all(|g| g.price_per_day > 0));
    }

    #[test]
    fn test_default_add_ons_cover_every_template() {
        let defaults = default_add_ons();
        assert_eq!(defaults.len(), add_on_templates().len());
        assert!(defaults.iter().all(|s| !s.selected));
        assert!(defaults.iter().all(|s| s.quantity >= 1));
    }

    #[test]
    fn test_accommodation_defaults_to_two_nights() {
        let defaults = default_add_ons();
        let accommodation = defaults
            .iter()
            .find(|s| s.add_on.id == "accommodation")
            .unwrap();
        assert_eq!(accommodation.quantity, 2);
    }

    #[test]
    fn test_find_helpers() {
        assert!(find_trail("kedarkantha").is_some());
        assert!(find_trail("everest").is_none());
        assert_eq!(find_guide("rajesh-kumar").unwrap().price_per_day, 3500);
        assert!(find_guide("nobody").is_none());
    }
}
