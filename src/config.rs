//! Application configuration management.
//!
//! This module handles loading and saving the application
//! configuration: the demo user profile, the group size cap enforced by
//! the views, and pacing for the simulated collaborators.
//!
//! Configuration is stored at `~/.config/adventuro/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

/// Application name used for the config directory path
const APP_NAME: &str = "adventuro";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub user: UserProfile,
    /// Upper bound on group size. Enforced by the views before
    /// dispatch, never by the reducer.
    pub max_group_size: u32,
    /// Seconds between simulated GPS fixes
    pub gps_tick_seconds: u64,
    /// Simulated payment gateway latency
    pub payment_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: UserProfile::default(),
            max_group_size: 12,
            gps_tick_seconds: 3,
            payment_delay_ms: 2000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.user.name, "Adventure Seeker");
        assert_eq!(config.max_group_size, 12);
        assert_eq!(config.payment_delay_ms, 2000);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.user, config.user);
        assert_eq!(back.max_group_size, config.max_group_size);
    }
}
