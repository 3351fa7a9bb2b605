//! Overlap column assigner.
//!
//! Greedy first-fit coloring of the interval graph formed by mutually
//! overlapping records. The greedy pass may allocate one more column than a
//! minimum coloring would; the policy is part of the observable layout and
//! is kept as-is.

use chrono::TimeZone;

use crate::models::config::{Direction, LayoutConfig};
use crate::models::display::DisplayEvent;

/// Overlap predicate for two records of one window.
///
/// Records touching across an adjacent slot boundary do not overlap when the
/// earlier record's tail offset and the later record's head offset together
/// consume a full slot.
pub fn overlap<Tz: TimeZone>(
    event1: &DisplayEvent<Tz>,
    event2: &DisplayEvent<Tz>,
    hour_parts: usize,
) -> bool {
    let (early, late) = if event1.start_index > event2.start_index
        || (event1.start_index == event2.start_index
            && event1.start_offset > event2.start_offset)
    {
        (event2, event1)
    } else {
        (event1, event2)
    };

    if early.end_index <= late.start_index {
        return false;
    }

    !(early.end_index - late.start_index == 1
        && early.end_offset + late.start_offset >= hour_parts)
}

/// Assign each record the lowest column not taken by an earlier overlapping
/// record, allocating a new column when every existing one is forbidden.
///
/// Records must be ordered by (start slot, start offset). Returns the total
/// number of columns allocated.
pub(crate) fn assign_positions<Tz: TimeZone>(
    records: &mut [DisplayEvent<Tz>],
    config: &LayoutConfig,
) -> usize {
    let hour_parts = config.hour_parts() as usize;
    let mut max_column = 0usize;
    let mut forbidden = vec![false; records.len()];

    for i in 0..records.len() {
        for flag in forbidden[..max_column].iter_mut() {
            *flag = false;
        }
        for j in 0..i {
            if overlap(&records[i], &records[j], hour_parts) {
                if let Some(position) = records[j].position {
                    forbidden[position] = true;
                }
            }
        }

        let free = (0..max_column).find(|&col| !forbidden[col]);
        records[i].position = Some(free.unwrap_or_else(|| {
            max_column += 1;
            max_column - 1
        }));
    }

    if config.direction == Direction::Rtl {
        for record in records.iter_mut() {
            if let Some(position) = record.position {
                record.position = Some(max_column - 1 - position);
            }
        }
    }

    max_column
}
