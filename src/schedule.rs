//! Time-based classification of service schedule windows.
//!
//! This module handles the core logic for deciding which padded service
//! window a time of day falls within and rendering the short label for it.
//! Each nominal service time opens a window from `preservice_duration` before
//! it to `service_duration` after it; times outside every window classify as
//! before the first service, after the last, or in a rest gap between them.
//!
//! ## Key Functionality
//! - **Phase Detection**: Determining the schedule phase for an arbitrary or
//!   the current time ([`SchedulePhase`])
//! - **Label Rendering**: Compact `<hour><minute>` labels for service times,
//!   plus the `SU`/`PD`/`RT` markers for out-of-window phases
//! - **Location Prefix**: Optional one-letter location code prepended to the
//!   current label
//!
//! Windows are compared with strict inequalities on both sides, so a time
//! exactly on a window boundary is not inside it. A window is assumed never
//! to span midnight.

use std::sync::Arc;

use crate::config::ScheduleConfig;
use crate::time_source::{RealTimeSource, TimeSource, fractional_hours};

/// Label for times before the first service window opens.
const LABEL_BEFORE_FIRST: &str = "SU";

/// Label for times after the last service window closes.
const LABEL_AFTER_LAST: &str = "PD";

/// Label for times in a gap between service windows.
const LABEL_REST: &str = "RT";

/// Represents where a time of day falls relative to the configured windows.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum SchedulePhase {
    /// Before the first service window opens ("stand up").
    BeforeFirst,

    /// Strictly inside a padded service window.
    InService {
        /// Nominal start time of the matched service, in fractional hours.
        service_time: f64,
    },

    /// In a gap between two service windows ("rest time").
    Rest,

    /// After the last service window closes ("past dismissal").
    AfterLast,
}

impl SchedulePhase {
    /// Returns true if this phase is inside a service window.
    pub fn is_in_service(&self) -> bool {
        matches!(self, Self::InService { .. })
    }

    /// Returns the nominal service time if in a window, None otherwise.
    pub fn service_time(&self) -> Option<f64> {
        match self {
            Self::InService { service_time } => Some(*service_time),
            _ => None,
        }
    }

    /// Returns the human-readable name for this phase.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BeforeFirst => "before first service",
            Self::InService { .. } => "in service",
            Self::Rest => "rest time",
            Self::AfterLast => "past dismissal",
        }
    }

    /// Renders the label for this phase.
    ///
    /// Out-of-window phases map to their two-letter markers; an in-service
    /// phase renders its nominal time via [`service_label`].
    pub fn label(&self) -> String {
        match self {
            Self::BeforeFirst => LABEL_BEFORE_FIRST.to_string(),
            Self::InService { service_time } => service_label(*service_time),
            Self::Rest => LABEL_REST.to_string(),
            Self::AfterLast => LABEL_AFTER_LAST.to_string(),
        }
    }
}

/// Format a service time as a compact `<hour><minute>` label.
///
/// The hour is the integer floor of the value without padding; the minutes
/// are the fractional part scaled to 60, rounded, and zero-padded to two
/// digits. `10.0` renders as `"1000"`, `16.5` as `"1630"`.
///
/// A fractional part that rounds up to 60 minutes is rendered as `"60"`
/// without rolling over into the hour field, so `9.9999` yields `"960"`.
/// Nominal service times are expected to sit on whole minutes, where this
/// cannot occur.
pub fn service_label(service: f64) -> String {
    let minutes = ((service % 1.0) * 60.0).round() as i64;
    format!("{}{:02}", service.floor() as i64, minutes)
}

/// Classifies times of day against a configured service schedule.
///
/// Holds its own [`ScheduleConfig`] and clock, so independent schedules for
/// different locations can coexist and be tested with a fixed time source.
pub struct ServiceSchedule {
    config: ScheduleConfig,
    time_source: Arc<dyn TimeSource>,
}

impl ServiceSchedule {
    /// Create a schedule reading the real system clock.
    pub fn new(config: ScheduleConfig) -> Self {
        Self::with_time_source(config, Arc::new(RealTimeSource))
    }

    /// Create a schedule with an injected clock.
    pub fn with_time_source(config: ScheduleConfig, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            config,
            time_source,
        }
    }

    /// Replace the entire sequence of service times.
    ///
    /// No validation: the caller maintains ascending order.
    pub fn set_service_times(&mut self, times: Vec<f64>) {
        self.config.service_times = times;
    }

    /// Get the configured service times.
    ///
    /// Returns a copy so callers cannot alias the internal sequence.
    pub fn service_times(&self) -> Vec<f64> {
        self.config.service_times.clone()
    }

    /// Append one service time.
    ///
    /// The caller maintains ascending order; not enforced.
    pub fn add_service_time(&mut self, time: f64) {
        self.config.service_times.push(time);
    }

    /// Get the configured location name, if set.
    pub fn location_name(&self) -> Option<&str> {
        self.config.location_name.as_deref()
    }

    /// Set the location name.
    pub fn set_location_name(&mut self, name: impl Into<String>) {
        self.config.location_name = Some(name.into());
    }

    /// Get the one-letter label for the location.
    ///
    /// Returns the first character of the location name, or an empty string
    /// when the name is unset or empty.
    pub fn location_label(&self) -> String {
        self.config
            .location_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(String::from)
            .unwrap_or_default()
    }

    /// When the window for the given nominal service time opens.
    fn window_start(&self, service_time: f64) -> f64 {
        service_time - self.config.preservice_duration
    }

    /// When the window for the given nominal service time closes.
    fn window_end(&self, service_time: f64) -> f64 {
        service_time + self.config.service_duration
    }

    /// Determine the schedule phase for a time of day in fractional hours.
    ///
    /// Linear scan over the service times with early-return priority: the
    /// before-first check applies only at index 0 and the after-last check
    /// only at the final index, each ahead of the in-window check for that
    /// index. The order decides precedence when windows are degenerate or
    /// overlapping, so it is preserved exactly. An empty schedule and any
    /// time that survives the full pass classify as [`SchedulePhase::Rest`].
    pub fn phase_at(&self, time: f64) -> SchedulePhase {
        let len = self.config.service_times.len();

        for (i, &service_time) in self.config.service_times.iter().enumerate() {
            let start = self.window_start(service_time);
            let end = self.window_end(service_time);

            if i == 0 && time < start {
                return SchedulePhase::BeforeFirst;
            }
            if i == len - 1 && time > end {
                return SchedulePhase::AfterLast;
            }
            if start < time && time < end {
                return SchedulePhase::InService { service_time };
            }
        }

        SchedulePhase::Rest
    }

    /// Get the label for a time of day in fractional hours.
    pub fn label_at(&self, time: f64) -> String {
        self.phase_at(time).label()
    }

    /// Get the label for the current time.
    pub fn current_service_label(&self) -> String {
        self.label_at(fractional_hours(self.time_source.now()))
    }

    /// Get the location-prefixed label for the current time.
    pub fn current_label(&self) -> String {
        format!("{}{}", self.location_label(), self.current_service_label())
    }

    /// Check whether a time lies strictly inside one service's window.
    pub fn in_service_window(&self, time: f64, service_time: f64) -> bool {
        self.window_start(service_time) < time && time < self.window_end(service_time)
    }

    /// Check whether a time lies strictly inside any configured window.
    ///
    /// Pure membership over every window, with none of the before-first or
    /// after-last shortcuts of [`phase_at`](Self::phase_at).
    pub fn in_any_service(&self, time: f64) -> bool {
        self.config
            .service_times
            .iter()
            .any(|&service_time| self.in_service_window(time, service_time))
    }

    /// Check whether the current time lies inside any configured window.
    pub fn currently_in_service(&self) -> bool {
        self.in_any_service(fractional_hours(self.time_source.now()))
    }
}
