use serde::{Deserialize, Serialize};

/// The signed-in demo account. There is no authentication; the profile
/// comes from the config file and only feeds the header and booking
/// contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Adventure Seeker".to_string(),
            email: "seeker@adventuro.com".to_string(),
            phone: "+91 98765 43210".to_string(),
        }
    }
}
