//! Cluster width resolver.
//!
//! Maps records onto the window's atomic cells and flood-fills connected
//! records so every member of an overlap cluster shares one overlap number.

use std::collections::VecDeque;

use chrono::TimeZone;

use crate::models::config::LayoutConfig;
use crate::models::display::DisplayEvent;

struct Cell {
    calculated: bool,
    events: Vec<usize>,
}

/// Assign every record its cluster's overlap number.
///
/// Records are visited in column-descending order so each cluster is first
/// entered through its highest-column member; that member's `position + 1`
/// is the column count the whole cluster needs. Every cell is marked
/// `calculated` at most once and every record receives its overlap number at
/// most once, bounding the fill to O(records + cells).
pub(crate) fn resolve_widths<Tz: TimeZone>(
    records: &mut [DisplayEvent<Tz>],
    config: &LayoutConfig,
) {
    let hour_parts = config.hour_parts() as usize;
    let total_cells = config.hour_range() as usize * hour_parts;

    let mut cells: Vec<Cell> = (0..total_cells)
        .map(|_| Cell {
            calculated: false,
            events: Vec::new(),
        })
        .collect();

    for (index, record) in records.iter().enumerate() {
        for cell_index in record.occupied_cells(hour_parts) {
            if let Some(cell) = cells.get_mut(cell_index) {
                cell.events.push(index);
            }
        }
    }

    // rightmost columns are resolved first
    let mut by_position: Vec<usize> = (0..records.len()).collect();
    by_position.sort_by(|&a, &b| records[b].position.cmp(&records[a].position));

    let mut queue = VecDeque::new();
    for &seed in &by_position {
        if records[seed].overlap_number.is_some() {
            continue;
        }

        let overlap_number = records[seed].position.map_or(1, |position| position + 1);
        records[seed].overlap_number = Some(overlap_number);
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            for cell_index in records[current].occupied_cells(hour_parts) {
                if let Some(cell) = cells.get_mut(cell_index) {
                    if cell.calculated {
                        continue;
                    }
                    cell.calculated = true;
                    for &other in &cell.events {
                        if records[other].overlap_number.is_none() {
                            records[other].overlap_number = Some(overlap_number);
                            queue.push_back(other);
                        }
                    }
                }
            }
        }
    }
}
