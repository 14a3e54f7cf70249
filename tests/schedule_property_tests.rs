//! Property-based tests for the service window classifier.
//!
//! These tests generate well-formed schedules (ascending service times with
//! gaps wide enough that the padded windows never overlap) and verify the
//! classification quadrants hold for arbitrary query points.

use proptest::prelude::*;

use servitag::constants::{DEFAULT_PRESERVICE_DURATION, DEFAULT_SERVICE_DURATION};
use servitag::{ScheduleConfig, ServiceSchedule, service_label};

/// Generate 1..=5 ascending service times whose default-padded windows are
/// separated by a rest gap of at least half an hour.
///
/// Default window width is `10/60 + 1.8` hours, so consecutive nominal times
/// at least 2.5 hours apart guarantee disjoint windows with a real gap.
fn ascending_service_times() -> impl Strategy<Value = Vec<f64>> {
    (0.0f64..6.0, proptest::collection::vec(2.5f64..6.0, 0..4)).prop_map(|(first, gaps)| {
        let mut times = vec![first];
        for gap in gaps {
            let next = times.last().copied().unwrap_or(first) + gap;
            times.push(next);
        }
        times
    })
}

fn schedule_with(times: Vec<f64>) -> ServiceSchedule {
    let config = ScheduleConfig {
        service_times: times,
        ..ScheduleConfig::default()
    };
    ServiceSchedule::new(config)
}

proptest! {
    #[test]
    fn interior_points_classify_to_their_window(
        times in ascending_service_times(),
        index in 0usize..5,
        fraction in 0.05f64..0.95,
    ) {
        let index = index % times.len();
        let service_time = times[index];
        let start = service_time - DEFAULT_PRESERVICE_DURATION;
        let width = DEFAULT_PRESERVICE_DURATION + DEFAULT_SERVICE_DURATION;
        let time = start + fraction * width;

        let schedule = schedule_with(times);
        prop_assert!(schedule.in_any_service(time));
        prop_assert!(schedule.in_service_window(time, service_time));
        prop_assert_eq!(schedule.label_at(time), service_label(service_time));
    }

    #[test]
    fn points_before_all_windows_are_su(
        times in ascending_service_times(),
        lead in 0.001f64..5.0,
    ) {
        let time = times[0] - DEFAULT_PRESERVICE_DURATION - lead;
        let schedule = schedule_with(times);
        prop_assert_eq!(schedule.label_at(time), "SU");
        prop_assert!(!schedule.in_any_service(time));
    }

    #[test]
    fn points_after_all_windows_are_pd(
        times in ascending_service_times(),
        lag in 0.001f64..5.0,
    ) {
        let time = times[times.len() - 1] + DEFAULT_SERVICE_DURATION + lag;
        let schedule = schedule_with(times);
        prop_assert_eq!(schedule.label_at(time), "PD");
        prop_assert!(!schedule.in_any_service(time));
    }

    #[test]
    fn gap_midpoints_are_rest(times in ascending_service_times()) {
        let schedule = schedule_with(times.clone());
        for pair in times.windows(2) {
            let gap_start = pair[0] + DEFAULT_SERVICE_DURATION;
            let gap_end = pair[1] - DEFAULT_PRESERVICE_DURATION;
            let midpoint = (gap_start + gap_end) / 2.0;
            prop_assert_eq!(schedule.label_at(midpoint), "RT");
            prop_assert!(!schedule.in_any_service(midpoint));
        }
    }

    #[test]
    fn membership_agrees_with_phase(
        times in ascending_service_times(),
        time in -2.0f64..30.0,
    ) {
        let schedule = schedule_with(times);
        prop_assert_eq!(
            schedule.in_any_service(time),
            schedule.phase_at(time).is_in_service()
        );
    }
}
