//! Time-grid layout engine.
//!
//! One layout pass turns the caller's event list and visible window into a
//! [`DayGrid`]: window clipping into discretized slots, greedy column
//! assignment among mutually overlapping records, and flood-fill resolution
//! of per-cluster column counts. Passes are pure and synchronous; derived
//! state never survives into the next pass, and a new pass fully replaces
//! the previous one.

mod clip;
mod columns;
pub mod slots;
mod width;

pub use columns::overlap;

use chrono::{DateTime, Duration, TimeZone};
use log::debug;

use crate::models::config::LayoutConfig;
use crate::models::display::{DayGrid, DisplayEvent, WeekGrid};
use crate::models::event::Event;
use crate::models::range::TimeRange;

/// Lay out one window.
///
/// Events intersecting the window are clipped into slot coordinates, split
/// into timed and all-day lists, and the timed records are assigned columns
/// and overlap numbers. The hour bounds and granularity come from `config`;
/// inverted hour bounds are a caller contract violation (see
/// [`LayoutConfig::new`]).
pub fn layout_day<Tz: TimeZone>(
    events: &[Event<Tz>],
    range: &TimeRange<Tz>,
    config: &LayoutConfig,
) -> DayGrid<Tz> {
    let mut slots = slots::build_slots(&range.start, config.start_hour, config.end_hour);
    let (mut records, all_day_events) = clip::clip_events(events, range, config);

    records.sort_by_key(|record| (record.start_index, record.start_offset));
    for (index, record) in records.iter().enumerate() {
        if let Some(slot) = slots.get_mut(record.start_index) {
            slot.events.push(index);
        }
    }

    if !records.is_empty() {
        place_events(&mut records, config);
    }

    debug!(
        "laid out {} timed and {} all-day events across {} slots",
        records.len(),
        all_day_events.len(),
        slots.len()
    );

    DayGrid {
        slots,
        events: records,
        all_day_events,
    }
}

/// Lay out `days` consecutive day windows over a shared event source.
///
/// Week and work-week views run the day engine once per day column.
pub fn layout_days<Tz: TimeZone>(
    events: &[Event<Tz>],
    start_day: &DateTime<Tz>,
    days: u32,
    config: &LayoutConfig,
) -> WeekGrid<Tz> {
    let tz = start_day.timezone();
    let first = start_day.date_naive();

    let grids = (0..days)
        .map(|offset| {
            let range = TimeRange::for_date(&tz, first + Duration::days(i64::from(offset)));
            layout_day(events, &range, config)
        })
        .collect();

    WeekGrid { days: grids }
}

/// Lay out a seven-day week starting on `start_day`'s date.
pub fn layout_week<Tz: TimeZone>(
    events: &[Event<Tz>],
    start_day: &DateTime<Tz>,
    config: &LayoutConfig,
) -> WeekGrid<Tz> {
    layout_days(events, start_day, 7, config)
}

/// Assign columns and overlap numbers to pre-clipped records.
///
/// Records must be ordered by (start slot, start offset), the order
/// [`layout_day`] produces.
pub fn place_events<Tz: TimeZone>(records: &mut [DisplayEvent<Tz>], config: &LayoutConfig) {
    let max_column = columns::assign_positions(records, config);
    width::resolve_widths(records, config);
    debug!(
        "placed {} records across {} columns",
        records.len(),
        max_column
    );
}

/// Assign columns to all-day display records without resolving widths.
///
/// All-day rows are stacked by column only; the cell-based width resolution
/// of the timed path never applies to them.
pub fn place_all_day_events<Tz: TimeZone>(
    records: &mut [DisplayEvent<Tz>],
    config: &LayoutConfig,
) {
    columns::assign_positions(records, config);
}
