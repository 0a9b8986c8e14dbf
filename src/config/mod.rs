//! Tunables for the purge and save-state behavior.

mod settings;

pub use settings::{Setting, SettingUpdate, apply_setting};

use crate::core::{PurgeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the purge driver.
///
/// Every field can also be adjusted at runtime through the string-typed
/// settings boundary (see [`apply_setting`]), which validates operator input
/// before it reaches the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PurgeConfig {
    /// Enable the automatic purge behavior.
    pub auto_purge_enabled: bool,

    /// Interval (in ticks) between purge scans. Minimum 1.
    pub purge_interval_ticks: u32,

    /// Log eviction summaries and save-state transitions.
    pub debug: bool,

    /// Additional retention radius around an observer, added to the host's
    /// view distance.
    pub proximity_ignore_radius: i32,

    /// Retention radius around a keep-alive (ticket) cell.
    pub keepalive_ignore_radius: i32,

    /// Retention radius around the grid's origin cell.
    pub origin_ignore_radius: i32,

    /// Enable the automatic save on/off behavior.
    pub auto_save_handling: bool,

    /// Pending-eviction backlog size at which saving is re-enabled. Minimum 1.
    pub save_high_water_mark: usize,
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self {
            auto_purge_enabled: true,
            purge_interval_ticks: 600,
            debug: false,
            proximity_ignore_radius: 4,
            keepalive_ignore_radius: 5,
            origin_ignore_radius: 3,
            auto_save_handling: true,
            save_high_water_mark: 100,
        }
    }
}

impl PurgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the purge scan interval in ticks.
    pub fn purge_interval_ticks(mut self, ticks: u32) -> Self {
        self.purge_interval_ticks = ticks;
        self
    }

    /// Enable or disable the automatic purge behavior.
    pub fn auto_purge_enabled(mut self, enabled: bool) -> Self {
        self.auto_purge_enabled = enabled;
        self
    }

    /// Enable or disable debug logging.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the additional retention radius around observers.
    pub fn proximity_ignore_radius(mut self, radius: i32) -> Self {
        self.proximity_ignore_radius = radius;
        self
    }

    /// Set the retention radius around keep-alive cells.
    pub fn keepalive_ignore_radius(mut self, radius: i32) -> Self {
        self.keepalive_ignore_radius = radius;
        self
    }

    /// Set the retention radius around the origin cell.
    pub fn origin_ignore_radius(mut self, radius: i32) -> Self {
        self.origin_ignore_radius = radius;
        self
    }

    /// Enable or disable the automatic save on/off behavior.
    pub fn auto_save_handling(mut self, enabled: bool) -> Self {
        self.auto_save_handling = enabled;
        self
    }

    /// Set the backlog size at which saving is re-enabled.
    pub fn save_high_water_mark(mut self, mark: usize) -> Self {
        self.save_high_water_mark = mark;
        self
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.purge_interval_ticks < 1 {
            return Err(PurgeError::InvalidConfig(
                "purge_interval_ticks must be >= 1".to_string(),
            ));
        }

        if self.save_high_water_mark < 1 {
            return Err(PurgeError::InvalidConfig(
                "save_high_water_mark must be >= 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
