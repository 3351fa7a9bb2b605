// Display model module
// Layout-computed projections of events onto the slot/column grid

use std::ops::Range;

use chrono::{DateTime, Local, TimeZone};

use crate::models::event::Event;

/// Projection of one timed event onto the window's slot and column
/// coordinate system.
///
/// `position` and `overlap_number` start unset and are each assigned exactly
/// once during a layout pass; both are present on every record a finished
/// pass returns. A renderer divides its container width by `overlap_number`
/// and draws the event in column `position`.
#[derive(Debug, Clone)]
pub struct DisplayEvent<Tz: TimeZone = Local> {
    pub event: Event<Tz>,
    /// First slot row the event occupies, clipped to the window.
    pub start_index: usize,
    /// Slot row the event ends in, exclusive, clipped to the window.
    pub end_index: usize,
    /// Sub-slot parts between the slot start and the event start.
    pub start_offset: usize,
    /// Sub-slot parts between the event end and the slot end.
    pub end_offset: usize,
    /// Assigned column index.
    pub position: Option<usize>,
    /// Total columns needed by the record's overlap cluster.
    pub overlap_number: Option<usize>,
}

impl<Tz: TimeZone> DisplayEvent<Tz> {
    /// Create an unplaced record from clipped slot coordinates.
    pub fn new(
        event: Event<Tz>,
        start_index: usize,
        end_index: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Self {
            event,
            start_index,
            end_index,
            start_offset,
            end_offset,
            position: None,
            overlap_number: None,
        }
    }

    /// Atomic cells of the window this record occupies, at `hour_parts`
    /// granularity.
    pub fn occupied_cells(&self, hour_parts: usize) -> Range<usize> {
        let from = self.start_index * hour_parts + self.start_offset;
        let to = (self.end_index * hour_parts).saturating_sub(self.end_offset);
        from..to
    }
}

/// All-day event intersecting the window's calendar days.
///
/// Collected as a plain list; the timed-event path never assigns these a
/// column or an overlap number.
#[derive(Debug, Clone)]
pub struct AllDayEvent<Tz: TimeZone = Local> {
    pub event: Event<Tz>,
}

/// One discretized row of the window.
///
/// `events` holds indices into the owning grid's record arena; a record is
/// listed only in the slot it starts in.
#[derive(Debug, Clone)]
pub struct Slot<Tz: TimeZone = Local> {
    pub time: DateTime<Tz>,
    pub events: Vec<usize>,
}

/// Fully resolved layout of one window, ready for a renderer.
#[derive(Debug, Clone)]
pub struct DayGrid<Tz: TimeZone = Local> {
    pub slots: Vec<Slot<Tz>>,
    /// Record arena ordered by (start slot, start offset); slot `events`
    /// lists index into it.
    pub events: Vec<DisplayEvent<Tz>>,
    pub all_day_events: Vec<AllDayEvent<Tz>>,
}

impl<Tz: TimeZone> DayGrid<Tz> {
    /// Records starting in `slot`, in start-offset order.
    pub fn slot_events(&self, slot: usize) -> impl Iterator<Item = &DisplayEvent<Tz>> + '_ {
        self.slots
            .get(slot)
            .into_iter()
            .flat_map(move |s| s.events.iter().map(move |&idx| &self.events[idx]))
    }
}

/// Layouts for a run of consecutive day windows sharing one event source.
#[derive(Debug, Clone)]
pub struct WeekGrid<Tz: TimeZone = Local> {
    pub days: Vec<DayGrid<Tz>>,
}
