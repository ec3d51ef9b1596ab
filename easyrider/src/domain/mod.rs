//! Domain types for the bus-line dataset checker.
//!
//! A dataset is a flat list of stop records. Records are inputs to be
//! checked, not repaired, so [`StopRecord`] keeps its string fields as
//! they arrived; the validated types here are what the checks parse
//! those strings into.

mod arrival;
mod line;
mod record;
mod stop_name;
mod stop_type;

pub use arrival::{ArrivalTime, InvalidArrivalTime};
pub use line::LineId;
pub use record::StopRecord;
pub use stop_name::{InvalidStopName, StopName};
pub use stop_type::{InvalidStopType, StopType};
