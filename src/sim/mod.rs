//! Simulated external collaborators.
//!
//! Nothing in here affects the correctness of the booking core; these
//! modules stand in for services the demo does not actually have:
//!
//! - `chat`: canned AI trekking-guide replies
//! - `gps`: a jittering GPS fix stream for the trail map
//! - `payment`: a delay standing in for a payment gateway, cancellable

pub mod chat;
pub mod gps;
pub mod payment;

pub use chat::ChatGuide;
pub use gps::{GpsFix, GpsTracker};
pub use payment::{PaymentError, PaymentProcessor, PaymentReceipt};
