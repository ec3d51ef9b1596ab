//! On-demand stop policy: an on-demand stop may not be a start,
//! transfer or finish stop.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::domain::{StopRecord, StopType};

use super::quoted_list;
use super::transfers::StopSets;

/// Stop names marked on-demand somewhere while also being a start,
/// transfer or finish stop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnDemandReport {
    offenders: BTreeSet<String>,
}

impl OnDemandReport {
    pub fn is_ok(&self) -> bool {
        self.offenders.is_empty()
    }

    /// Offending stop names, sorted.
    pub fn offenders(&self) -> &BTreeSet<String> {
        &self.offenders
    }
}

impl fmt::Display for OnDemandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "On demand stops test:")?;
        if self.is_ok() {
            writeln!(f, "OK")
        } else {
            writeln!(f, "Wrong stop type: {}", quoted_list(&self.offenders))
        }
    }
}

/// Find on-demand stops that are also start, transfer or finish stops.
pub fn check_on_demand(records: &[StopRecord], sets: &StopSets) -> OnDemandReport {
    let offenders: BTreeSet<String> = records
        .iter()
        .filter(|record| record.kind() == Some(StopType::OnDemand))
        .filter(|record| sets.contains(&record.stop_name))
        .map(|record| record.stop_name.clone())
        .collect();

    debug!(offenders = offenders.len(), "On-demand check complete");

    OnDemandReport { offenders }
}
