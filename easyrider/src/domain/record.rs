//! Stop record type.

use serde::Deserialize;

use super::{LineId, StopType};

/// One row of the dataset: a stop on a bus line.
///
/// String fields are kept verbatim. Format problems are reported by the
/// field check; the other checks work on whatever text is present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopRecord {
    /// Line this stop belongs to.
    pub bus_id: LineId,

    /// Stop identifier within the line's sequence.
    pub stop_id: i64,

    /// Stop name, e.g. "Prospekt Avenue".
    pub stop_name: String,

    /// `stop_id` of the next stop on the line (0 for none). Not checked.
    pub next_stop: i64,

    /// Stop role code: "S", "F", "O" or "".
    pub stop_type: String,

    /// Arrival time as "HH:MM".
    pub a_time: String,
}

impl StopRecord {
    /// Create a record from its field values.
    pub fn new(
        bus_id: i64,
        stop_id: i64,
        stop_name: impl Into<String>,
        next_stop: i64,
        stop_type: impl Into<String>,
        a_time: impl Into<String>,
    ) -> Self {
        Self {
            bus_id: LineId::new(bus_id),
            stop_id,
            stop_name: stop_name.into(),
            next_stop,
            stop_type: stop_type.into(),
            a_time: a_time.into(),
        }
    }

    /// Returns the line this record belongs to.
    pub fn line(&self) -> LineId {
        self.bus_id
    }

    /// Returns the parsed stop role, or `None` if the code is not recognised.
    pub fn kind(&self) -> Option<StopType> {
        StopType::parse(&self.stop_type).ok()
    }
}
