//! Start, transfer and finish stop sets across all lines.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::domain::StopRecord;

use super::quoted_list;
use super::topology::{LineTopologies, TopologyError};

/// Stop names that play a special role somewhere in the network.
///
/// A transfer stop is any name that appears on two or more lines,
/// whatever its role on each of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopSets {
    start: BTreeSet<String>,
    transfer: BTreeSet<String>,
    finish: BTreeSet<String>,
}

impl StopSets {
    /// Build the three sets from already classified lines.
    pub fn derive(topologies: &LineTopologies) -> Self {
        let mut sets = Self::default();
        let mut per_line: Vec<BTreeSet<&str>> = Vec::with_capacity(topologies.len());

        for topology in topologies.iter() {
            sets.start.extend(topology.start_stops().iter().cloned());
            sets.finish.extend(topology.final_stops().iter().cloned());
            per_line.push(topology.all_stops());
        }

        for (i, a) in per_line.iter().enumerate() {
            for b in &per_line[i + 1..] {
                sets.transfer
                    .extend(a.intersection(b).map(|name| (*name).to_string()));
            }
        }

        debug!(
            start = sets.start.len(),
            transfer = sets.transfer.len(),
            finish = sets.finish.len(),
            "Stop sets derived"
        );

        sets
    }

    /// Classify the records and build the three sets.
    pub fn from_records(records: &[StopRecord]) -> Result<Self, TopologyError> {
        LineTopologies::classify(records).map(|topologies| Self::derive(&topologies))
    }

    pub fn start(&self) -> &BTreeSet<String> {
        &self.start
    }

    pub fn transfer(&self) -> &BTreeSet<String> {
        &self.transfer
    }

    pub fn finish(&self) -> &BTreeSet<String> {
        &self.finish
    }

    /// Returns true if `name` is a start, transfer or finish stop.
    pub fn contains(&self, name: &str) -> bool {
        self.start.contains(name) || self.transfer.contains(name) || self.finish.contains(name)
    }
}

impl fmt::Display for StopSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, set) in [
            ("Start", &self.start),
            ("Transfer", &self.transfer),
            ("Finish", &self.finish),
        ] {
            writeln!(f, "{label} stops: {} {}", set.len(), quoted_list(set))?;
        }
        Ok(())
    }
}
