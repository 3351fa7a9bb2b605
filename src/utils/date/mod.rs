// Date utility functions

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone};

pub fn is_same_day<Tz: TimeZone>(date1: &DateTime<Tz>, date2: &DateTime<Tz>) -> bool {
    date1.date_naive() == date2.date_naive()
}

pub fn start_of_day<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    resolve_local(
        &date.timezone(),
        date.date_naive().and_hms_opt(0, 0, 0).unwrap(),
    )
}

/// Resolve a naive local timestamp in `tz`.
///
/// Ambiguous times (DST fall-back) resolve to the earliest instant; times
/// inside a spring-forward gap resolve to the first valid wall-clock time
/// after the gap.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(time) => time,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let mut probe = naive;
            for _ in 0..8 {
                probe += Duration::minutes(30);
                if let Some(time) = tz.from_local_datetime(&probe).earliest() {
                    return time;
                }
            }
            tz.from_utc_datetime(&naive)
        }
    }
}

/// Hours between `from` and `to` as measured on the local wall clock.
///
/// The raw millisecond difference is corrected by the minutes-from-UTC delta
/// between the two instants, so a span crossing a daylight-saving transition
/// still measures in wall-clock hours and events land in the intended slot.
pub fn wall_clock_hours<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> f64 {
    const MILLIS_PER_HOUR: f64 = 3_600_000.0;
    let millis = to.timestamp_millis() - from.timestamp_millis();
    let offset_delta = i64::from(utc_offset_minutes(to) - utc_offset_minutes(from));
    (millis + offset_delta * 60_000) as f64 / MILLIS_PER_HOUR
}

/// Minutes east of UTC of the instant's resolved offset.
pub fn utc_offset_minutes<Tz: TimeZone>(time: &DateTime<Tz>) -> i32 {
    time.offset().fix().local_minus_utc() / 60
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use chrono_tz::America::New_York;

    #[test]
    fn test_is_same_day() {
        let morning = Utc.with_ymd_and_hms(2025, 6, 12, 8, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2025, 6, 12, 22, 30, 0).unwrap();
        let next_day = Utc.with_ymd_and_hms(2025, 6, 13, 0, 0, 0).unwrap();

        assert!(is_same_day(&morning, &evening));
        assert!(!is_same_day(&morning, &next_day));
    }

    #[test]
    fn test_start_of_day() {
        let afternoon = Utc.with_ymd_and_hms(2025, 6, 12, 15, 45, 10).unwrap();
        let midnight = start_of_day(&afternoon);

        assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 6, 12, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_wall_clock_hours_plain() {
        let from = Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2025, 6, 12, 10, 30, 0).unwrap();

        assert_eq!(wall_clock_hours(&from, &to), 1.5);
    }

    #[test]
    fn test_wall_clock_hours_spring_forward() {
        // 2020-03-08 02:00 EST -> 03:00 EDT; only 5 UTC hours elapse but the
        // wall clock reads 6
        let from = New_York.with_ymd_and_hms(2020, 3, 8, 0, 0, 0).unwrap();
        let to = New_York.with_ymd_and_hms(2020, 3, 8, 6, 0, 0).unwrap();

        assert_eq!(wall_clock_hours(&from, &to), 6.0);
    }

    #[test]
    fn test_wall_clock_hours_fall_back() {
        // 2020-11-01 02:00 EDT -> 01:00 EST; 7 UTC hours elapse but the wall
        // clock reads 6
        let from = New_York.with_ymd_and_hms(2020, 11, 1, 0, 0, 0).unwrap();
        let to = New_York.with_ymd_and_hms(2020, 11, 1, 6, 0, 0).unwrap();

        assert_eq!(wall_clock_hours(&from, &to), 6.0);
    }

    #[test]
    fn test_resolve_local_ambiguous_takes_earliest() {
        // 01:30 happens twice on fall-back night; the EDT instant comes first
        let naive = NaiveDate::from_ymd_opt(2020, 11, 1)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        let resolved = resolve_local(&New_York, naive);

        assert_eq!(utc_offset_minutes(&resolved), -4 * 60);
    }

    #[test]
    fn test_resolve_local_gap_moves_forward() {
        // 02:30 does not exist on spring-forward night
        let naive = NaiveDate::from_ymd_opt(2020, 3, 8)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let resolved = resolve_local(&New_York, naive);

        assert_eq!(
            resolved,
            New_York.with_ymd_and_hms(2020, 3, 8, 3, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_utc_offset_minutes() {
        let winter = New_York.with_ymd_and_hms(2020, 1, 15, 12, 0, 0).unwrap();
        let summer = New_York.with_ymd_and_hms(2020, 7, 15, 12, 0, 0).unwrap();

        assert_eq!(utc_offset_minutes(&winter), -5 * 60);
        assert_eq!(utc_offset_minutes(&summer), -4 * 60);
    }
}
