//! Default configuration values for the service schedule.

/// Nominal service start times as fractional hours of day.
pub const DEFAULT_SERVICE_TIMES: [f64; 3] = [10.0, 12.0, 16.0];

/// How long before a nominal service time its window opens, in hours.
pub const DEFAULT_PRESERVICE_DURATION: f64 = 10.0 / 60.0;

/// How long after a nominal service time its window stays open, in hours.
pub const DEFAULT_SERVICE_DURATION: f64 = 1.8;

/// Configuration file name searched for under the user config directory.
pub const CONFIG_FILE: &str = "servitag.toml";

/// Subdirectory of the user config directory holding [`CONFIG_FILE`].
pub const CONFIG_DIR: &str = "servitag";
