//! Configuration for the service schedule.
//!
//! Settings are held in an explicit [`ScheduleConfig`] value rather than
//! process-wide state, so multiple independent schedules (e.g. different
//! locations) can coexist. A TOML file under the user config directory is
//! supported for read-only loading; a missing file falls back to built-in
//! defaults. Runtime mutations are never written back.
//!
//! ```toml
//! service_times = [10.0, 12.0, 16.0]  # nominal start times, fractional hours
//! preservice_duration = 0.1667        # window opens this long before, hours
//! service_duration = 1.8              # window stays open this long after, hours
//! location_name = "Downtown"          # optional one-letter label source
//! ```
//!
//! No range or ordering validation is performed: classification is defined for
//! any values, though its labels are only meaningful for ascending,
//! non-overlapping windows (caller responsibility).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_PRESERVICE_DURATION, DEFAULT_SERVICE_DURATION,
    DEFAULT_SERVICE_TIMES,
};

/// Configuration for a service schedule.
///
/// All fields are optional in the TOML file; absent fields take the built-in
/// defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Nominal service start times as fractional hours of day, ascending.
    pub service_times: Vec<f64>,
    /// Hours before a nominal time that its window opens.
    pub preservice_duration: f64,
    /// Hours after a nominal time that its window stays open.
    pub service_duration: f64,
    /// Optional location name; its first character prefixes labels.
    /// Unset is distinct from empty (both yield an empty prefix).
    pub location_name: Option<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            service_times: DEFAULT_SERVICE_TIMES.to_vec(),
            preservice_duration: DEFAULT_PRESERVICE_DURATION,
            service_duration: DEFAULT_SERVICE_DURATION,
            location_name: None,
        }
    }
}

impl ScheduleConfig {
    /// Load configuration using automatic path detection.
    ///
    /// Falls back to built-in defaults when no config file exists.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// Unlike [`load`](Self::load), a missing file is an error here.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }
}

/// Get the default configuration file path.
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
