//! Line topology: start, finish and other stops of each line.
//!
//! Every line must have exactly one start stop and exactly one finish
//! stop. A violation is fatal for the whole run, so classification
//! returns a [`TopologyError`] and leaves it to the caller to stop.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::domain::{LineId, StopRecord, StopType};

/// A line without exactly one start and one finish stop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("There is no start or end stop for the line: {line}.")]
    MissingTerminal {
        line: LineId,
        start_count: usize,
        final_count: usize,
    },
}

impl TopologyError {
    /// Returns the offending line.
    pub fn line(&self) -> LineId {
        match self {
            Self::MissingTerminal { line, .. } => *line,
        }
    }
}

/// Role classification of the stops of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTopology {
    line: LineId,
    start_count: usize,
    final_count: usize,
    start_stops: BTreeSet<String>,
    final_stops: BTreeSet<String>,
    other_stops: BTreeSet<String>,
}

impl LineTopology {
    fn new(line: LineId) -> Self {
        Self {
            line,
            start_count: 0,
            final_count: 0,
            start_stops: BTreeSet::new(),
            final_stops: BTreeSet::new(),
            other_stops: BTreeSet::new(),
        }
    }

    fn add(&mut self, record: &StopRecord) {
        let name = record.stop_name.clone();
        match record.kind() {
            Some(StopType::Start) => {
                self.start_count += 1;
                self.start_stops.insert(name);
            }
            Some(StopType::Finish) => {
                self.final_count += 1;
                self.final_stops.insert(name);
            }
            _ => {
                self.other_stops.insert(name);
            }
        }
    }

    fn has_duplicate_terminal(&self) -> bool {
        self.start_count > 1 || self.final_count > 1
    }

    fn is_well_formed(&self) -> bool {
        self.start_count == 1 && self.final_count == 1
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn start_count(&self) -> usize {
        self.start_count
    }

    pub fn final_count(&self) -> usize {
        self.final_count
    }

    pub fn start_stops(&self) -> &BTreeSet<String> {
        &self.start_stops
    }

    pub fn final_stops(&self) -> &BTreeSet<String> {
        &self.final_stops
    }

    pub fn other_stops(&self) -> &BTreeSet<String> {
        &self.other_stops
    }

    /// Every stop name on the line, whatever its role.
    pub fn all_stops(&self) -> BTreeSet<&str> {
        self.start_stops
            .iter()
            .chain(&self.final_stops)
            .chain(&self.other_stops)
            .map(String::as_str)
            .collect()
    }
}

/// Topologies of all lines, in the order lines first appear in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTopologies {
    lines: Vec<LineTopology>,
}

impl LineTopologies {
    /// Classify every record's stop by line and check the start/finish rule.
    ///
    /// Scanning stops for the whole dataset as soon as any line has a second
    /// start or finish stop; lines not seen by then are absent from the
    /// result. Lines are then checked in first-seen order and the first one
    /// without exactly one start and one finish is returned as the error.
    pub fn classify(records: &[StopRecord]) -> Result<Self, TopologyError> {
        let mut lines: Vec<LineTopology> = Vec::new();
        let mut index: HashMap<LineId, usize> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            let slot = *index.entry(record.line()).or_insert_with(|| {
                lines.push(LineTopology::new(record.line()));
                lines.len() - 1
            });

            let topology = &mut lines[slot];
            topology.add(record);

            if topology.has_duplicate_terminal() {
                debug!(
                    line = %record.line(),
                    position,
                    "Duplicate terminal stop, classification stopped"
                );
                break;
            }
        }

        if let Some(bad) = lines.iter().find(|topology| !topology.is_well_formed()) {
            warn!(
                line = %bad.line,
                start_count = bad.start_count,
                final_count = bad.final_count,
                "Line does not have exactly one start and one finish stop"
            );
            return Err(TopologyError::MissingTerminal {
                line: bad.line,
                start_count: bad.start_count,
                final_count: bad.final_count,
            });
        }

        debug!(lines = lines.len(), "Line topology classified");
        Ok(Self { lines })
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineTopology> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
