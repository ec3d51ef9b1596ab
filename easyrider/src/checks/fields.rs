//! Field format check.
//!
//! Works on raw records so that a value of the wrong primitive type is
//! counted as a failure instead of aborting the load.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::dataset::RawRecord;
use crate::domain::{ArrivalTime, StopName, StopType};

/// The six known record fields, in dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    BusId,
    StopId,
    StopName,
    NextStop,
    StopType,
    ATime,
}

impl Field {
    /// All known fields in dataset order.
    pub const ALL: [Field; 6] = [
        Field::BusId,
        Field::StopId,
        Field::StopName,
        Field::NextStop,
        Field::StopType,
        Field::ATime,
    ];

    /// Returns the JSON key of this field.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BusId => "bus_id",
            Self::StopId => "stop_id",
            Self::StopName => "stop_name",
            Self::NextStop => "next_stop",
            Self::StopType => "stop_type",
            Self::ATime => "a_time",
        }
    }

    /// Look up a field by its JSON key. Unknown keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Check a value against this field's type and format rule.
    ///
    /// Integer fields accept JSON integers only. String fields must be
    /// JSON strings matching their format, optionally followed by one
    /// newline.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::BusId | Self::StopId | Self::NextStop => value.is_i64() || value.is_u64(),
            Self::StopName => value.as_str().is_some_and(|s| StopName::parse(s).is_ok()),
            Self::StopType => value.as_str().is_some_and(|s| {
                StopType::parse(s.strip_suffix('\n').unwrap_or(s)).is_ok()
            }),
            Self::ATime => value.as_str().is_some_and(|s| ArrivalTime::parse(s).is_ok()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-field failure counts over a whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldReport {
    errors: BTreeMap<Field, usize>,
}

impl FieldReport {
    /// Returns true if no record failed any field.
    pub fn is_valid(&self) -> bool {
        self.total() == 0
    }

    /// Returns the number of records that failed `field`.
    pub fn count(&self, field: Field) -> usize {
        self.errors.get(&field).copied().unwrap_or(0)
    }

    /// Returns the total number of failures over all fields.
    pub fn total(&self) -> usize {
        self.errors.values().sum()
    }

    /// Fields with at least one failure, with their counts, in dataset order.
    pub fn failures(&self) -> impl Iterator<Item = (Field, usize)> + '_ {
        self.errors
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(field, count)| (*field, *count))
    }
}

impl fmt::Display for FieldReport {
    /// One line per failing field; nothing at all when the dataset is clean.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, count) in self.failures() {
            writeln!(f, "Specification errors in key {field}: {count}")?;
        }
        Ok(())
    }
}

/// Count, for each known field, how many records fail its rule.
///
/// Unknown keys are ignored. A record that omits a known key is not
/// counted for that key.
pub fn check_fields(records: &[RawRecord]) -> FieldReport {
    let mut report = FieldReport::default();

    for record in records {
        for (key, value) in record {
            let Some(field) = Field::from_key(key) else {
                continue;
            };
            if !field.accepts(value) {
                *report.errors.entry(field).or_insert(0) += 1;
            }
        }
    }

    debug!(
        records = records.len(),
        failures = report.total(),
        "Field check complete"
    );

    report
}
