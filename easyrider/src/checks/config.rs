//! Check selection.

/// Which checks a run performs.
///
/// Line topology is always enforced: the transfer and on-demand checks
/// depend on it, and a broken line aborts the run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Report field format errors.
    pub check_fields: bool,

    /// Report lines whose arrival times go backwards.
    pub check_arrival_times: bool,

    /// Report on-demand stops that are start, transfer or finish stops.
    pub check_on_demand: bool,

    /// Print the start, transfer and finish stop sets.
    pub show_stop_sets: bool,
}

impl CheckConfig {
    /// Create a configuration with the given switches.
    pub fn new(
        check_fields: bool,
        check_arrival_times: bool,
        check_on_demand: bool,
        show_stop_sets: bool,
    ) -> Self {
        Self {
            check_fields,
            check_arrival_times,
            check_on_demand,
            show_stop_sets,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            check_fields: true,
            check_arrival_times: true,
            check_on_demand: true,
            show_stop_sets: false,
        }
    }
}
