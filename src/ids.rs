//! Booking id generation.
//!
//! Id generation is the one non-deterministic input to a confirmation,
//! so it lives behind a trait the store owns. Production uses the
//! timestamped random generator; tests inject a sequential one.

use chrono::Utc;
use rand::Rng;

/// Characters matching the original base-36 uppercase suffix format.
const SUFFIX_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Suffix length after the millisecond timestamp
const SUFFIX_LEN: usize = 5;

pub trait BookingIdGenerator {
    fn next_id(&mut self) -> String;
}

/// Wall-clock generator: `ADV{unix_millis}{5 random base-36 chars}`.
///
/// Two confirmations in the same millisecond with colliding random
/// draws are not reconciled; acceptable for a single-session demo with
/// no record system behind it.
#[derive(Debug, Default)]
pub struct SystemIdGenerator;

impl BookingIdGenerator for SystemIdGenerator {
    fn next_id(&mut self) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
            .collect();
        format!("ADV{}{}", Utc::now().timestamp_millis(), suffix)
    }
}

/// Deterministic generator for tests and scripted demos.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    prefix: String,
    next: u64,
}

impl SequenceIdGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl BookingIdGenerator for SequenceIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{:04}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_id_format() {
        let id = SystemIdGenerator.next_id();
        assert!(id.starts_with("ADV"));
        // 3-char prefix + 13-digit millis + 5-char suffix
        assert_eq!(id.len(), 3 + 13 + SUFFIX_LEN);
        assert!(id[3..]
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
    }

    #[test]
    fn test_system_ids_differ() {
        let mut gen = SystemIdGenerator;
        assert_ne!(gen.next_id(), gen.next_id());
    }

    #[test]
    fn test_sequence_generator_is_deterministic() {
        let mut gen = SequenceIdGenerator::new("TEST");
        assert_eq!(gen.next_id(), "TEST0001");
        assert_eq!(gen.next_id(), "TEST0002");
        assert_eq!(gen.next_id(), "TEST0003");
    }
}
