// Time range module
// The visible window being laid out, owned by the range collaborator

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};

use crate::utils::date::{resolve_local, start_of_day};

/// The visible time range (a day or a run of days) being laid out.
///
/// Immutable for one layout pass; a new pass gets a fresh range.
#[derive(Debug, Clone)]
pub struct TimeRange<Tz: TimeZone = Local> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> TimeRange<Tz> {
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self { start, end }
    }

    /// The calendar-day window containing `date`: local midnight up to the
    /// next local midnight.
    pub fn day_of(date: &DateTime<Tz>) -> Self {
        let start = start_of_day(date);
        let end = resolve_local(
            &date.timezone(),
            (date.date_naive() + Duration::days(1))
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        Self { start, end }
    }

    /// The calendar-day window for `date` in `tz`.
    pub fn for_date(tz: &Tz, date: NaiveDate) -> Self {
        let start = resolve_local(tz, date.and_hms_opt(0, 0, 0).unwrap());
        let end = resolve_local(
            tz,
            (date + Duration::days(1)).and_hms_opt(0, 0, 0).unwrap(),
        );
        Self { start, end }
    }
}

impl<Tz: TimeZone> PartialEq for TimeRange<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}
