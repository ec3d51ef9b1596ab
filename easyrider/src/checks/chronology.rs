//! Arrival time ordering per line.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::debug;

use crate::domain::{LineId, StopRecord};

/// A stop whose arrival time is earlier than the one before it on its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronologyViolation {
    pub line: LineId,
    pub stop_name: String,
    /// Latest arrival time seen on the line before this stop.
    pub previous: String,
    pub arrival: String,
}

/// Result of the arrival time check. At most one violation per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChronologyReport {
    violations: Vec<ChronologyViolation>,
}

impl ChronologyReport {
    /// Returns true if every line's times are non-decreasing.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in input order.
    pub fn violations(&self) -> &[ChronologyViolation] {
        &self.violations
    }
}

impl fmt::Display for ChronologyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Arrival time test:")?;
        if self.is_ok() {
            return writeln!(f, "OK");
        }
        for violation in &self.violations {
            writeln!(
                f,
                "bus_id line {}: wrong time on station {}",
                violation.line, violation.stop_name
            )?;
        }
        Ok(())
    }
}

/// Check that arrival times never go backwards along each line.
///
/// Records are taken in input order. Times are compared as "HH:MM" text.
/// After its first violation a line is skipped for the rest of the scan.
pub fn check_arrival_times(records: &[StopRecord]) -> ChronologyReport {
    let mut latest: HashMap<LineId, &str> = HashMap::new();
    let mut failed: HashSet<LineId> = HashSet::new();
    let mut violations = Vec::new();

    for record in records {
        let line = record.line();
        if failed.contains(&line) {
            continue;
        }

        let arrival = record.a_time.as_str();
        match latest.entry(line) {
            Entry::Vacant(entry) => {
                entry.insert(arrival);
            }
            Entry::Occupied(mut entry) => {
                if *entry.get() <= arrival {
                    entry.insert(arrival);
                } else {
                    debug!(
                        line = %line,
                        stop = %record.stop_name,
                        previous = *entry.get(),
                        arrival,
                        "Arrival time goes backwards"
                    );
                    violations.push(ChronologyViolation {
                        line,
                        stop_name: record.stop_name.clone(),
                        previous: (*entry.get()).to_string(),
                        arrival: arrival.to_string(),
                    });
                    failed.insert(line);
                }
            }
        }
    }

    ChronologyReport { violations }
}
