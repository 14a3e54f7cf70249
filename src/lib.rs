//! # Servitag Library
//!
//! Generates short textual labels describing which service window of a
//! configured schedule a given (or the current) time falls within, optionally
//! prefixed by a one-letter location code.
//!
//! ## Architecture
//!
//! The library is organized into a few small layers:
//!
//! - **Classifier**: `schedule` module with the `ServiceSchedule` instance API
//!   and the `SchedulePhase` state enum
//! - **Configuration**: `config` module for TOML-based settings with built-in
//!   defaults
//! - **Clock**: `time_source` abstraction so classification is deterministic
//!   under test
//! - **Constants**: default schedule values in one place
//!
//! ## Example
//!
//! ```
//! use servitag::{ScheduleConfig, ServiceSchedule};
//!
//! let mut schedule = ServiceSchedule::new(ScheduleConfig::default());
//! schedule.set_location_name("Downtown");
//!
//! // 9.5 hours = 09:30, before the first (10:00) window opens
//! assert_eq!(schedule.label_at(9.5), "SU");
//! assert_eq!(schedule.label_at(10.25), "1000");
//! ```

pub mod config;
pub mod constants;
pub mod schedule;
pub mod time_source;

pub use config::ScheduleConfig;
pub use schedule::{SchedulePhase, ServiceSchedule, service_label};
pub use time_source::{FixedTimeSource, RealTimeSource, TimeSource};
