//! # Lunar Cycle Scenario Tests
//!
//! End-to-end checks of the phase pipeline through the public library API:
//! known dates, determinism, wraparound at New Moon and the order in which
//! phases follow each other across a synodic month.

use chrono::{NaiveDate, TimeZone, Utc};
use moon_phase_lib::{
    lunar, phase, tools, Instant, LunarError, MoonPhase, MoonPhaseEmoji, MoonPhaseEngine,
};

const DAY: i64 = 86_400;

fn midnight(y: i32, m: u32, d: u32) -> Instant {
    Instant::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// 2024-01-11 11:57 UTC, an astronomical new moon.
fn new_moon_2024() -> i64 {
    Utc.with_ymd_and_hms(2024, 1, 11, 12, 0, 0).unwrap().timestamp()
}

/// Steps forward through the cycle from `a` to `b`, modulo 8.
fn cyclic_steps(a: MoonPhase, b: MoonPhase) -> usize {
    (b.index() + 8 - a.index()) % 8
}

/// The 1982-10-28 reference date is Waxing Gibbous, whether the instant comes
/// from a date or from the epoch-day count times 86400.
#[test]
fn reference_scenario_is_waxing_gibbous() {
    let engine = MoonPhaseEngine::new();
    let epoch_day = NaiveDate::from_ymd_opt(1982, 10, 28)
        .unwrap()
        .signed_duration_since(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
        .num_days();

    let from_seconds = Instant::from_unix_timestamp(epoch_day * DAY);
    assert_eq!(from_seconds, midnight(1982, 10, 28));
    assert_eq!(
        engine.phase_at(from_seconds).unwrap(),
        MoonPhase::WaxingGibbous
    );
}

/// Known principal phases in early 2024 land in the matching bins.
#[test]
fn principal_phases_in_2024() {
    let engine = MoonPhaseEngine::new();
    let at = |y, mo, d, h, mi| {
        Instant::from_datetime(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    };
    assert_eq!(engine.phase_at(at(2024, 1, 11, 11, 57)).unwrap(), MoonPhase::NewMoon);
    assert_eq!(engine.phase_at(at(2024, 1, 18, 3, 52)).unwrap(), MoonPhase::FirstQuarter);
    assert_eq!(engine.phase_at(at(2024, 1, 25, 17, 54)).unwrap(), MoonPhase::FullMoon);
    assert_eq!(engine.phase_at(at(2024, 2, 2, 23, 18)).unwrap(), MoonPhase::LastQuarter);
}

#[test]
fn phase_at_is_deterministic() {
    let engine = MoonPhaseEngine::new();
    let mut seconds = -2_000_000_000_i64;
    while seconds < 4_000_000_000 {
        let instant = Instant::from_unix_timestamp(seconds);
        let first = engine.phase_at(instant).unwrap();
        let second = engine.phase_at(instant).unwrap();
        assert_eq!(first, second, "t={seconds}");
        assert_eq!(
            lunar::phase_angle_deg(instant).unwrap().to_bits(),
            lunar::phase_angle_deg(instant).unwrap().to_bits()
        );
        seconds += 37_777_777;
    }
}

/// Both ends of the New Moon bin classify to the very same value.
#[test]
fn wraparound_angles_share_one_phase() {
    let late = phase::classify(359.9).unwrap();
    let early = phase::classify(0.1).unwrap();
    assert_eq!(late, early);
    assert_eq!(
        MoonPhaseEmoji::from(late),
        MoonPhaseEmoji::from(early),
        "boundary pair must not differ across the wrap"
    );
}

/// Daily samples starting at a new moon walk through every phase in order,
/// advancing at most one bin per day and never going backwards.
#[test]
fn daily_samples_follow_the_cycle() {
    let engine = MoonPhaseEngine::new();
    let start = new_moon_2024();

    let phases: Vec<MoonPhase> = (0..=30)
        .map(|day| {
            engine
                .phase_at(Instant::from_unix_timestamp(start + day * DAY))
                .unwrap()
        })
        .collect();

    assert_eq!(phases[0], MoonPhase::NewMoon);
    assert_eq!(*phases.last().unwrap(), MoonPhase::NewMoon);

    for pair in phases.windows(2) {
        let steps = cyclic_steps(pair[0], pair[1]);
        assert!(steps <= 1, "{} -> {} skips or reverses", pair[0], pair[1]);
    }

    let mut visited: Vec<MoonPhase> = Vec::new();
    for p in &phases {
        if visited.last() != Some(p) {
            visited.push(*p);
        }
    }
    let mut expected: Vec<MoonPhase> = MoonPhase::ALL.to_vec();
    expected.push(MoonPhase::NewMoon);
    assert_eq!(visited, expected);
}

/// Weekly samples are coarser than a bin, so they hop, but always forward.
#[test]
fn weekly_samples_only_move_forward() {
    let engine = MoonPhaseEngine::new();
    let start = new_moon_2024();

    let phases: Vec<MoonPhase> = (0..=4)
        .map(|week| {
            engine
                .phase_at(Instant::from_unix_timestamp(start + week * 7 * DAY))
                .unwrap()
        })
        .collect();

    assert_eq!(
        phases,
        vec![
            MoonPhase::NewMoon,
            MoonPhase::FirstQuarter,
            MoonPhase::FullMoon,
            MoonPhase::LastQuarter,
            MoonPhase::NewMoon,
        ]
    );
    for pair in phases.windows(2) {
        assert!((1..=3).contains(&cyclic_steps(pair[0], pair[1])));
    }
}

#[test]
fn non_finite_instant_is_rejected() {
    assert!(matches!(
        Instant::from_unix_seconds(f64::INFINITY),
        Err(LunarError::InvalidInstant { .. })
    ));
}

/// Far-off instants still produce a phase: the mean longitudes are reduced
/// before any trig is applied.
#[test]
fn distant_instants_are_classified() {
    let engine = MoonPhaseEngine::new();
    for seconds in [-1.0e12, -1.0e10, 1.0e10, 1.0e12] {
        let instant = Instant::from_unix_seconds(seconds).unwrap();
        assert!(engine.phase_at(instant).is_ok(), "t={seconds}");
    }
}

#[test]
fn tool_call_returns_boundary_json() {
    let engine = MoonPhaseEngine::new();
    let result = tools::call_tool(
        &engine,
        tools::MOON_PHASE_AT_DATE,
        serde_json::json!({"date": "1982-10-28"}),
    )
    .unwrap();
    assert_eq!(
        serde_json::to_string(&result).unwrap(),
        r#"{"phase":"WAXING_GIBBOUS","emoji":"🌔"}"#
    );
}

#[test]
fn concurrent_callers_agree() {
    let instant = midnight(2000, 1, 21);
    let expected = MoonPhaseEngine::new().phase_at(instant).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || MoonPhaseEngine::new().phase_at(instant).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(expected, MoonPhase::FullMoon);
}
