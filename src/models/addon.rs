use serde::{Deserialize, Serialize};

/// How an add-on's unit price is applied when totaling a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceUnit {
    PerNight,
    PerDay,
    PerPackage,
    PerPerson,
    PerTrek,
}

impl PriceUnit {
    /// Parse a unit label like "per night" into a PriceUnit enum value.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "per night" => Some(PriceUnit::PerNight),
            "per day" => Some(PriceUnit::PerDay),
            "per package" => Some(PriceUnit::PerPackage),
            "per person" => Some(PriceUnit::PerPerson),
            "per trek" => Some(PriceUnit::PerTrek),
            _ => None,
        }
    }
}

impl std::fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceUnit::PerNight => write!(f, "per night"),
            PriceUnit::PerDay => write!(f, "per day"),
            PriceUnit::PerPackage => write!(f, "per package"),
            PriceUnit::PerPerson => write!(f, "per person"),
            PriceUnit::PerTrek => write!(f, "per trek"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOnCategory {
    Accommodation,
    Meals,
    Gear,
    Transport,
    Other,
}

impl std::fmt::Display for AddOnCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddOnCategory::Accommodation => write!(f, "Accommodation"),
            AddOnCategory::Meals => write!(f, "Meals"),
            AddOnCategory::Gear => write!(f, "Gear"),
            AddOnCategory::Transport => write!(f, "Transport"),
            AddOnCategory::Other => write!(f, "Other"),
        }
    }
}

/// Immutable add-on template from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in whole rupees
    pub price: u64,
    pub price_unit: PriceUnit,
    pub category: AddOnCategory,
    /// Starting quantity when the add-on is first offered on a booking
    pub default_quantity: u32,
}

/// A booking's mutable copy of an add-on template, carrying the
/// selection flag and quantity. Quantity is retained when an add-on is
/// deselected so re-selecting it picks up where the user left off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOnSelection {
    pub add_on: AddOn,
    pub selected: bool,
    pub quantity: u32,
}

impl AddOnSelection {
    /// Fresh unselected overlay for a catalog template.
    pub fn from_template(template: &AddOn) -> Self {
        Self {
            add_on: template.clone(),
            selected: false,
            quantity: template.default_quantity.max(1),
        }
    }
}
