//! Clock abstraction for supporting both real and fixed time.
//!
//! The classifier only depends on the wall clock through this trait and the
//! single [`fractional_hours`] conversion point, so time-dependent behavior
//! can be tested deterministically by injecting a fixed moment instead of
//! sampling the real clock.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Timelike};

/// Trait for abstracting clock reads.
pub trait TimeSource: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Local>;
}

/// Real-time implementation that uses the actual system clock.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Fixed time source for tests and deterministic replay.
///
/// Always reports the moment it was constructed with.
pub struct FixedTimeSource {
    moment: DateTime<Local>,
}

impl FixedTimeSource {
    /// Create a fixed source reporting the given moment.
    pub fn new(moment: DateTime<Local>) -> Self {
        Self { moment }
    }

    /// Create a fixed source at an arbitrary date with the given time of day.
    ///
    /// The date is irrelevant to classification (only hour and minute are
    /// read), so a constant one is used.
    pub fn at_time(hour: u32, minute: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| NaiveTime::from_hms_opt(hour, minute, 0).map(|t| d.and_time(t)))
            .unwrap_or_default();
        let moment = Local
            .from_local_datetime(&date)
            .single()
            .unwrap_or_else(|| Local::now());
        Self { moment }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Local> {
        self.moment
    }
}

/// Convert a clock moment to fractional hours of day.
///
/// Seconds are ignored: `14:45:59` becomes `14.75`.
pub fn fractional_hours(moment: DateTime<Local>) -> f64 {
    moment.hour() as f64 + moment.minute() as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_hours_ignores_seconds() {
        let moment = Local
            .with_ymd_and_hms(2024, 1, 1, 14, 45, 59)
            .single()
            .unwrap();
        assert_eq!(fractional_hours(moment), 14.75);
    }

    #[test]
    fn fractional_hours_at_midnight() {
        let moment = Local
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .unwrap();
        assert_eq!(fractional_hours(moment), 0.0);
    }

    #[test]
    fn fixed_source_reports_constructed_moment() {
        let source = FixedTimeSource::at_time(9, 30);
        assert_eq!(fractional_hours(source.now()), 9.5);
    }
}
