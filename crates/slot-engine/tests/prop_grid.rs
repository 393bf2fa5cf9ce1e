//! Property-based tests for slot generation, partitioning, and selection.
//!
//! These verify invariants that must hold for *any* window, duration, and
//! reservation layout, not just the concrete examples in the other test
//! files.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use proptest::prelude::*;
use slot_engine::{
    generate_slots, partition_slots, BookedInterval, SelectionState, WorkingWindow,
};

// ---------------------------------------------------------------------------
// Strategies — windows, durations, and reservations as minute offsets from
// midnight on a fixed date
// ---------------------------------------------------------------------------

const DAY: (i32, u32, u32) = (2026, 8, 10);

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(DAY.0, DAY.1, DAY.2).unwrap()
}

fn minute(offset: i64) -> DateTime<Utc> {
    day().and_time(NaiveTime::MIN).and_utc() + chrono::Duration::minutes(offset)
}

/// (window start minute, window length in minutes)
fn arb_window() -> impl Strategy<Value = (i64, i64)> {
    (0i64..=720, 30i64..=600)
}

fn arb_duration() -> impl Strategy<Value = u32> {
    10u32..=120
}

/// Reservations as (start minute, duration minutes) pairs anywhere in the day.
fn arb_reservations() -> impl Strategy<Value = Vec<(i64, u32)>> {
    prop::collection::vec((0i64..=1380, 10u32..=180), 0..8)
}

fn build_window(start_min: i64, length_min: i64) -> WorkingWindow {
    WorkingWindow::new(
        day(),
        minute(start_min),
        minute(start_min + length_min),
        false,
    )
    .unwrap()
}

fn build_reservations(spec: &[(i64, u32)]) -> Vec<BookedInterval> {
    spec.iter()
        .enumerate()
        .map(|(i, &(start, duration))| BookedInterval {
            start: minute(start),
            duration_minutes: duration,
            reservation_id: format!("res-{}", i),
        })
        .collect()
}

/// A "now" before the test date, disabling the same-day cutoff.
fn earlier() -> DateTime<Utc> {
    minute(-600)
}

// ---------------------------------------------------------------------------
// Property 1: Every generated slot lies entirely inside the window
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn slots_contained_in_window(
        (start, length) in arb_window(),
        duration in arb_duration(),
    ) {
        let window = build_window(start, length);
        for slot in generate_slots(&window, duration, earlier()) {
            prop_assert!(slot.start >= window.start);
            prop_assert!(slot.end <= window.end);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Slots are sorted and spaced by exactly the requested duration
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn slots_spaced_by_requested_duration(
        (start, length) in arb_window(),
        duration in arb_duration(),
    ) {
        let window = build_window(start, length);
        let slots = generate_slots(&window, duration, earlier());
        let step = chrono::Duration::minutes(duration as i64);

        for slot in &slots {
            prop_assert_eq!(slot.end - slot.start, step);
        }
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[1].start - pair[0].start, step);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: No available slot overlaps any booked interval (half-open)
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn available_slots_never_overlap_reservations(
        (start, length) in arb_window(),
        duration in arb_duration(),
        reservations in arb_reservations(),
    ) {
        let window = build_window(start, length);
        let booked = build_reservations(&reservations);
        let partition = partition_slots(
            generate_slots(&window, duration, earlier()),
            &booked,
        );

        for slot in &partition.available {
            for interval in &booked {
                prop_assert!(
                    !(slot.start < interval.end() && interval.start < slot.end),
                    "available slot {:?} overlaps reservation {:?}",
                    slot.start,
                    interval.start
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Partitioning loses nothing — available + booked = generated
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn partition_is_a_partition(
        (start, length) in arb_window(),
        duration in arb_duration(),
        reservations in arb_reservations(),
    ) {
        let window = build_window(start, length);
        let candidates = generate_slots(&window, duration, earlier());
        let total = candidates.len();
        let partition = partition_slots(candidates, &build_reservations(&reservations));

        prop_assert_eq!(partition.available.len() + partition.booked.len(), total);
    }
}

// ---------------------------------------------------------------------------
// Property 5: generate + partition is deterministic
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn generate_and_partition_are_deterministic(
        (start, length) in arb_window(),
        duration in arb_duration(),
        reservations in arb_reservations(),
    ) {
        let window = build_window(start, length);
        let booked = build_reservations(&reservations);

        let first = partition_slots(generate_slots(&window, duration, earlier()), &booked);
        let second = partition_slots(generate_slots(&window, duration, earlier()), &booked);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Same-day cutoff never emits a slot that already started
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn cutoff_never_emits_elapsed_slot(
        (start, length) in arb_window(),
        duration in arb_duration(),
        now_offset in 0i64..=1339,
    ) {
        let window = build_window(start, length);
        let now = minute(now_offset); // same date as the window
        for slot in generate_slots(&window, duration, now) {
            prop_assert!(slot.start >= now);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 7: The selection quota holds under any toggle sequence
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn quota_holds_under_arbitrary_toggles(
        (start, length) in arb_window(),
        duration in arb_duration(),
        session_count in 1u32..=4,
        picks in prop::collection::vec(0usize..32, 0..24),
    ) {
        let window = build_window(start, length);
        let partition = partition_slots(generate_slots(&window, duration, earlier()), &[]);
        let mut selection = SelectionState::new(duration, session_count);

        for pick in picks {
            if let Some(slot) = partition.available.get(pick) {
                // Rejections are fine; the invariant must hold either way.
                let _ = selection.toggle(slot.start, &partition);
            }
            prop_assert!(selection.selected().len() as u32 <= session_count);
        }
    }
}
