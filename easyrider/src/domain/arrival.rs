//! Arrival time type.
//!
//! Arrival times are "HH:MM" strings. Zero-padded 24-hour text sorts the
//! same way the clock does, so times are compared as text and never
//! converted to a clock type. The minute field accepts "60", so "23:60"
//! is a valid arrival time here, and one trailing newline is tolerated.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static ARRIVAL_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1]\d|2[0-3]):([0-5]\d|60)\n?$").expect("arrival time pattern is valid")
});

/// Error returned when parsing an invalid arrival time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid arrival time {time:?}: expected HH:MM")]
pub struct InvalidArrivalTime {
    time: String,
}

/// A well-formed "HH:MM" arrival time.
///
/// # Examples
///
/// ```
/// use easyrider::domain::ArrivalTime;
///
/// let early = ArrivalTime::parse("08:12").unwrap();
/// let late = ArrivalTime::parse("10:03").unwrap();
/// assert!(early < late);
///
/// assert!(ArrivalTime::parse("23:60").is_ok());
/// assert!(ArrivalTime::parse("24:00").is_err());
/// assert!(ArrivalTime::parse("8:12").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArrivalTime(String);

impl ArrivalTime {
    /// Parse an arrival time from "HH:MM" text.
    pub fn parse(s: &str) -> Result<Self, InvalidArrivalTime> {
        if ARRIVAL_TIME_PATTERN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidArrivalTime {
                time: s.to_string(),
            })
        }
    }

    /// Returns the time as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ArrivalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrivalTime({})", self.0)
    }
}

impl fmt::Display for ArrivalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
