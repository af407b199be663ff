//! Data models for Adventuro catalog entities.
//!
//! This module contains the data structures used to represent
//! the read-only catalogs and the user profile:
//!
//! - `Trail`: a trekking route with difficulty, distance, and a price hint
//! - `Guide`: a bookable trek leader with a daily rate
//! - `AddOn`, `AddOnSelection`: supplementary services and their
//!   per-booking selection overlay
//! - `UserProfile`: the demo account shown in the header

pub mod addon;
pub mod guide;
pub mod trail;
pub mod user;

pub use addon::{AddOn, AddOnCategory, AddOnSelection, PriceUnit};
pub use guide::Guide;
pub use trail::{Difficulty, Trail};
pub use user::UserProfile;
