//! Dataset checks.
//!
//! Each check is a function from records to a report value; nothing is
//! printed here. Reports implement `Display` with the text the command
//! line tool writes for them.
//!
//! The field check reads raw records. Everything else reads typed
//! [`StopRecord`](crate::domain::StopRecord)s: topology classification
//! feeds the stop sets, which feed the on-demand check, while the
//! arrival time check stands alone.

mod chronology;
mod config;
mod fields;
mod on_demand;
mod topology;
mod transfers;

use std::collections::BTreeSet;

pub use chronology::{ChronologyReport, ChronologyViolation, check_arrival_times};
pub use config::CheckConfig;
pub use fields::{Field, FieldReport, check_fields};
pub use on_demand::{OnDemandReport, check_on_demand};
pub use topology::{LineTopologies, LineTopology, TopologyError};
pub use transfers::StopSets;

/// Format names as `['A', 'B']`.
fn quoted_list(names: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = names.iter().map(|name| quote(name)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Single quotes, or double quotes when the name holds a single quote and
/// no double quote. The delimiter, backslashes and control whitespace are
/// escaped.
fn quote(name: &str) -> String {
    let delimiter = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push(delimiter);
    for c in name.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}
