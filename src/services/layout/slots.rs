//! Time slot discretizer.
//!
//! Converts the visible window and its hour bounds into the ordered slot
//! rows that clipped records are placed into.

use chrono::{DateTime, NaiveTime, TimeZone, Timelike};

use crate::models::display::Slot;
use crate::utils::date::resolve_local;

/// Build `end_hour - start_hour` empty slot rows for a window.
///
/// Each slot is anchored at the window start's date with the hour advanced
/// by the slot's absolute hour. Hour arithmetic wraps within the same date
/// (the day-of-month is pinned), which keeps every anchor on the window's
/// own day even for windows that start mid-day.
pub fn build_slots<Tz: TimeZone>(
    window_start: &DateTime<Tz>,
    start_hour: u32,
    end_hour: u32,
) -> Vec<Slot<Tz>> {
    (start_hour..end_hour)
        .map(|hour| Slot {
            time: slot_anchor(window_start, hour),
            events: Vec::new(),
        })
        .collect()
}

/// Anchor timestamp for one slot row.
fn slot_anchor<Tz: TimeZone>(window_start: &DateTime<Tz>, hour: u32) -> DateTime<Tz> {
    let naive = window_start.naive_local();
    let time = NaiveTime::from_hms_opt(
        (naive.hour() + hour) % 24,
        naive.minute(),
        naive.second(),
    )
    .unwrap();
    resolve_local(&window_start.timezone(), naive.date().and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_full_day_slot_count_and_anchors() {
        let start = Utc.with_ymd_and_hms(2025, 6, 12, 0, 0, 0).unwrap();
        let slots = build_slots(&start, 0, 24);

        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0].time, start);
        assert_eq!(
            slots[9].time,
            Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0).unwrap()
        );
        assert!(slots.iter().all(|slot| slot.events.is_empty()));
    }

    #[test]
    fn test_bounded_hours() {
        let start = Utc.with_ymd_and_hms(2025, 6, 12, 0, 0, 0).unwrap();
        let slots = build_slots(&start, 8, 18);

        assert_eq!(slots.len(), 10);
        assert_eq!(
            slots[0].time,
            Utc.with_ymd_and_hms(2025, 6, 12, 8, 0, 0).unwrap()
        );
        assert_eq!(
            slots[9].time,
            Utc.with_ymd_and_hms(2025, 6, 12, 17, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_mid_day_window_start_offsets_anchors() {
        let start = Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0).unwrap();
        let slots = build_slots(&start, 0, 4);

        assert_eq!(
            slots[0].time,
            Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0).unwrap()
        );
        assert_eq!(
            slots[3].time,
            Utc.with_ymd_and_hms(2025, 6, 12, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_hour_wrap_pins_date() {
        // 20:00 start plus six hours wraps to 02:00 on the same date
        let start = Utc.with_ymd_and_hms(2025, 6, 12, 20, 0, 0).unwrap();
        let slots = build_slots(&start, 0, 8);

        assert_eq!(
            slots[6].time,
            Utc.with_ymd_and_hms(2025, 6, 12, 2, 0, 0).unwrap()
        );
    }
}
