//! Single pass over a dataset: run the checks in order and write their
//! reports.
//!
//! Output order is the field report, the optional stop-set summary, the
//! arrival time report and the on-demand report. A line without exactly
//! one start and one finish stop ends the run before the arrival time
//! report is written.

#[cfg(test)]
mod tests;

use std::io::{self, Write};

use tracing::info;

use crate::checks::{
    CheckConfig, ChronologyReport, FieldReport, LineTopologies, OnDemandReport, StopSets,
    TopologyError, check_arrival_times, check_fields, check_on_demand,
};
use crate::dataset::{Dataset, DatasetError};

/// Errors that end a run early.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The dataset could not be loaded or a record could not be read
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// A line does not have exactly one start and one finish stop
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Writing the reports failed
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// Process exit status for this error. A topology violation has its
    /// own status so callers can tell it apart from unreadable input.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Topology(_) => 1,
            Self::Dataset(_) | Self::Io(_) => 2,
        }
    }
}

/// Reports produced by a completed run. Skipped checks are `None`.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub fields: Option<FieldReport>,
    pub stop_sets: StopSets,
    pub arrival_times: Option<ChronologyReport>,
    pub on_demand: Option<OnDemandReport>,
}

impl RunSummary {
    /// Returns true if no enabled check found a problem.
    pub fn is_clean(&self) -> bool {
        self.fields.as_ref().is_none_or(FieldReport::is_valid)
            && self.arrival_times.as_ref().is_none_or(ChronologyReport::is_ok)
            && self.on_demand.as_ref().is_none_or(OnDemandReport::is_ok)
    }
}

/// Run the configured checks against `dataset`, writing reports to `out`.
///
/// The line topology is classified once and shared by the stop-set and
/// on-demand steps.
pub fn run<W: Write>(
    dataset: &Dataset,
    config: &CheckConfig,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    let fields = if config.check_fields {
        let report = check_fields(dataset.raw_records());
        write!(out, "{report}")?;
        Some(report)
    } else {
        None
    };

    let records = dataset.stop_records()?;
    let topologies = LineTopologies::classify(&records)?;
    let stop_sets = StopSets::derive(&topologies);

    if config.show_stop_sets {
        write!(out, "{stop_sets}")?;
    }

    let arrival_times = if config.check_arrival_times {
        let report = check_arrival_times(&records);
        write!(out, "{report}")?;
        Some(report)
    } else {
        None
    };

    let on_demand = if config.check_on_demand {
        let report = check_on_demand(&records, &stop_sets);
        write!(out, "{report}")?;
        Some(report)
    } else {
        None
    };

    out.flush()?;

    let summary = RunSummary {
        fields,
        stop_sets,
        arrival_times,
        on_demand,
    };
    info!(
        records = records.len(),
        lines = topologies.len(),
        clean = summary.is_clean(),
        "Run complete"
    );

    Ok(summary)
}

