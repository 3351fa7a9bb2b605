//! Window clipper and event filter.
//!
//! Splits the raw event list into all-day and timed candidates, clips timed
//! events to the visible window, and discretizes their boundaries into slot
//! indices and sub-slot offsets.

use chrono::TimeZone;

use crate::models::config::LayoutConfig;
use crate::models::display::{AllDayEvent, DisplayEvent};
use crate::models::event::Event;
use crate::models::range::TimeRange;
use crate::utils::date::wall_clock_hours;

/// Absorbs floating-point jitter so an event ending exactly on a slot
/// boundary does not spill into the next slot.
const EPS: f64 = 0.016;

/// Partition the events intersecting `range` into clipped timed records and
/// an all-day list.
pub(crate) fn clip_events<Tz: TimeZone>(
    events: &[Event<Tz>],
    range: &TimeRange<Tz>,
    config: &LayoutConfig,
) -> (Vec<DisplayEvent<Tz>>, Vec<AllDayEvent<Tz>>) {
    let mut records = Vec::new();
    let mut all_day = Vec::new();

    for event in events {
        if event.all_day {
            if intersects_window_days(event, range) {
                all_day.push(AllDayEvent {
                    event: event.clone(),
                });
            }
        } else if let Some(record) = clip_timed(event, range, config) {
            records.push(record);
        }
    }

    (records, all_day)
}

/// Date-only intersection test for all-day events.
///
/// The window's local calendar dates are normalized to plain midnight
/// boundaries and compared against the event's UTC wall-clock time, so the
/// test does not shift with the window's UTC offset.
fn intersects_window_days<Tz: TimeZone>(event: &Event<Tz>, range: &TimeRange<Tz>) -> bool {
    let day_start = range.start.date_naive().and_hms_opt(0, 0, 0).unwrap();
    let day_end = range.end.date_naive().and_hms_opt(0, 0, 0).unwrap();

    event.end.naive_utc() > day_start && event.start.naive_utc() < day_end
}

/// Clip one timed event to the window, discretizing its boundaries.
///
/// Returns `None` for events outside the window or fully clipped away.
/// Malformed intervals (`end <= start`) either fail the intersection test or
/// collapse to an empty index range and are never emitted.
pub(crate) fn clip_timed<Tz: TimeZone>(
    event: &Event<Tz>,
    range: &TimeRange<Tz>,
    config: &LayoutConfig,
) -> Option<DisplayEvent<Tz>> {
    if event.end <= range.start || event.start >= range.end {
        return None;
    }

    let hours_to_start = if event.start <= range.start {
        0.0
    } else {
        wall_clock_hours(&range.start, &event.start)
    };
    let hours_to_end = if event.end >= range.end {
        wall_clock_hours(&range.start, &range.end)
    } else {
        wall_clock_hours(&range.start, &event.end)
    };

    let start_hour = i64::from(config.start_hour);
    let end_hour = i64::from(config.end_hour);
    let hour_parts = i64::from(config.hour_parts());

    let mut start_index = hours_to_start.floor() as i64;
    let mut end_index = (hours_to_end - EPS).ceil() as i64;

    let mut start_offset = 0i64;
    let mut end_offset = 0i64;
    if hour_parts != 1 {
        if start_index >= start_hour {
            start_offset =
                ((hours_to_start - start_index as f64) * hour_parts as f64).floor() as i64;
        }
        if end_index <= end_hour {
            end_offset = ((end_index as f64 - hours_to_end) * hour_parts as f64)
                .floor()
                .max(0.0) as i64;
        }
    }

    if start_index < start_hour {
        start_index = 0;
    } else {
        start_index -= start_hour;
    }
    if end_index > end_hour {
        end_index = end_hour;
    }
    end_index -= start_hour;

    if start_index >= end_index {
        return None;
    }

    Some(DisplayEvent::new(
        event.clone(),
        start_index as usize,
        end_index as usize,
        start_offset as usize,
        end_offset as usize,
    ))
}
