//! Stop name type.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Capitalised name ending in one of the four street-type suffixes,
/// optionally followed by one newline.
static STOP_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z].+\s(Road|Avenue|Boulevard|Street)\n?$").expect("stop name pattern is valid")
});

/// Error returned when parsing an invalid stop name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop name {name:?}: must start with a capital letter and end with Road, Avenue, Boulevard or Street")]
pub struct InvalidStopName {
    name: String,
}

/// A well-formed stop name, e.g. "Prospekt Avenue".
///
/// # Examples
///
/// ```
/// use easyrider::domain::StopName;
///
/// let name = StopName::parse("Sesame Street").unwrap();
/// assert_eq!(name.as_str(), "Sesame Street");
///
/// // Lowercase first letter is rejected
/// assert!(StopName::parse("sesame Street").is_err());
///
/// // Unknown suffix is rejected
/// assert!(StopName::parse("Sesame Lane").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopName(String);

impl StopName {
    /// Parse a stop name, checking the naming convention.
    pub fn parse(s: &str) -> Result<Self, InvalidStopName> {
        if STOP_NAME_PATTERN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidStopName {
                name: s.to_string(),
            })
        }
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopName({})", self.0)
    }
}

impl fmt::Display for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
