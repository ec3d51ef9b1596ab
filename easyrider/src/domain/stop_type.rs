//! Stop role on a line.

/// Error returned when parsing an unknown stop type code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop type {code:?}: expected \"S\", \"F\", \"O\" or an empty string")]
pub struct InvalidStopType {
    code: String,
}

/// The role a stop plays on one line, encoded in the dataset as a
/// single letter (or nothing).
///
/// The same stop can have different roles on different lines.
///
/// # Examples
///
/// ```
/// use easyrider::domain::StopType;
///
/// assert_eq!(StopType::parse("S").unwrap(), StopType::Start);
/// assert_eq!(StopType::parse("").unwrap(), StopType::Ordinary);
/// assert!(StopType::parse("X").is_err());
/// assert!(StopType::parse("s").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopType {
    /// First stop of the line ("S").
    Start,
    /// Last stop of the line ("F").
    Finish,
    /// Stop served only on request ("O").
    OnDemand,
    /// Regular stop ("").
    Ordinary,
}

impl StopType {
    /// Parse a stop type from its dataset code.
    pub fn parse(s: &str) -> Result<Self, InvalidStopType> {
        match s {
            "S" => Ok(Self::Start),
            "F" => Ok(Self::Finish),
            "O" => Ok(Self::OnDemand),
            "" => Ok(Self::Ordinary),
            other => Err(InvalidStopType {
                code: other.to_string(),
            }),
        }
    }
}
