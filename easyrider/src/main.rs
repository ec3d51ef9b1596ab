use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use easyrider::checks::CheckConfig;
use easyrider::dataset::Dataset;
use easyrider::runner::{RunError, run};

/// Check a bus line dataset for bad fields, broken lines, arrival times
/// that go backwards and misplaced on-demand stops.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON file holding an array of stop records
    #[arg(default_value = "input.json")]
    input: PathBuf,

    /// Skip the field format check
    #[arg(long)]
    skip_fields: bool,

    /// Skip the arrival time check
    #[arg(long)]
    skip_arrival_times: bool,

    /// Skip the on-demand stop check
    #[arg(long)]
    skip_on_demand: bool,

    /// Print the start, transfer and finish stop sets
    #[arg(long)]
    show_stop_sets: bool,
}

impl Args {
    fn config(&self) -> CheckConfig {
        CheckConfig::new(
            !self.skip_fields,
            !self.skip_arrival_times,
            !self.skip_on_demand,
            self.show_stop_sets,
        )
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the check reports
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "Starting");

    let config = args.config();
    let result = Dataset::from_path(&args.input)
        .map_err(RunError::from)
        .and_then(|dataset| run(&dataset, &config, &mut io::stdout().lock()));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err @ RunError::Topology(_)) => {
            println!("{err}");
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_arguments() {
        let args = Args::try_parse_from(["easyrider"]).unwrap();
        assert_eq!(args.input, PathBuf::from("input.json"));

        let config = args.config();
        assert!(config.check_fields);
        assert!(config.check_arrival_times);
        assert!(config.check_on_demand);
        assert!(!config.show_stop_sets);
    }

    #[test]
    fn skip_flags() {
        let args = Args::try_parse_from([
            "easyrider",
            "routes.json",
            "--skip-fields",
            "--skip-on-demand",
            "--show-stop-sets",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("routes.json"));

        let config = args.config();
        assert!(!config.check_fields);
        assert!(config.check_arrival_times);
        assert!(!config.check_on_demand);
        assert!(config.show_stop_sets);
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
