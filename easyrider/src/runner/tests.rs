//! Whole-run scenarios over small bus networks.

use serde_json::{Value, json};

use super::*;
use crate::checks::Field;
use crate::domain::LineId;

fn record(
    bus_id: i64,
    stop_id: i64,
    name: &str,
    next_stop: i64,
    stop_type: &str,
    a_time: &str,
) -> Value {
    json!({
        "bus_id": bus_id,
        "stop_id": stop_id,
        "stop_name": name,
        "next_stop": next_stop,
        "stop_type": stop_type,
        "a_time": a_time,
    })
}

fn dataset(records: Vec<Value>) -> Dataset {
    Dataset::from_json_str(&Value::Array(records).to_string()).unwrap()
}

/// Two lines sharing "Elm Street"; line 256 stops on demand at "Sesame Street".
fn clean_network() -> Vec<Value> {
    vec![
        record(128, 1, "Prospekt Avenue", 3, "S", "08:12"),
        record(128, 3, "Elm Street", 5, "", "08:19"),
        record(128, 5, "Fifth Avenue", 7, "O", "08:25"),
        record(128, 7, "Sesame Street", 0, "F", "08:37"),
        record(256, 2, "Pilotow Street", 3, "S", "09:20"),
        record(256, 3, "Elm Street", 6, "", "09:45"),
        record(256, 6, "Abbey Road", 0, "F", "10:02"),
    ]
}

fn run_default(dataset: &Dataset) -> (Result<RunSummary, RunError>, String) {
    let mut out = Vec::new();
    let result = run(dataset, &CheckConfig::default(), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn clean_network_reports_ok() {
    let (result, output) = run_default(&dataset(clean_network()));

    let summary = result.unwrap();
    assert!(summary.is_clean());
    assert_eq!(output, "Arrival time test:\nOK\nOn demand stops test:\nOK\n");
}

#[test]
fn field_errors_come_first_and_run_continues() {
    let mut records = clean_network();
    records[0]["stop_name"] = json!("prospekt Avenue");
    records[6]["a_time"] = json!("23:60");
    records[5]["stop_type"] = json!("Q");

    let (result, output) = run_default(&dataset(records));

    let summary = result.unwrap();
    let fields = summary.fields.unwrap();
    assert!(!fields.is_valid());
    assert_eq!(fields.count(Field::StopName), 1);
    assert_eq!(fields.count(Field::StopType), 1);
    assert_eq!(fields.count(Field::ATime), 0);
    assert_eq!(
        output,
        "Specification errors in key stop_name: 1\n\
         Specification errors in key stop_type: 1\n\
         Arrival time test:\nOK\n\
         On demand stops test:\nOK\n"
    );
}

#[test]
fn two_starts_and_no_finish_aborts() {
    let mut records = clean_network();
    records.extend([
        record(512, 1, "Bourbon Street", 2, "S", "08:00"),
        record(512, 2, "Sunset Boulevard", 0, "S", "08:30"),
    ]);

    let (result, output) = run_default(&dataset(records));

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        RunError::Topology(TopologyError::MissingTerminal { line, .. }) if line == LineId::new(512)
    ));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        err.to_string(),
        "There is no start or end stop for the line: 512."
    );
    assert!(!output.contains("Arrival time test:"));
    assert!(!output.contains("On demand stops test:"));
}

#[test]
fn line_without_any_terminal_aborts() {
    let records = vec![
        record(1, 1, "Bourbon Street", 2, "", "08:00"),
        record(1, 2, "Sunset Boulevard", 0, "", "08:30"),
    ];

    let (result, _) = run_default(&dataset(records));
    assert_eq!(result.unwrap_err().exit_code(), 1);
}

#[test]
fn backwards_time_fails_only_its_line() {
    let records = vec![
        record(1, 1, "Bourbon Street", 2, "S", "08:00"),
        record(2, 1, "Pilotow Street", 2, "S", "07:00"),
        record(1, 2, "Elm Street", 3, "", "08:10"),
        record(2, 2, "Abbey Road", 3, "", "07:20"),
        record(1, 3, "Fifth Avenue", 4, "", "08:05"),
        record(2, 3, "Baker Street", 0, "F", "07:40"),
        record(1, 4, "Sunset Boulevard", 0, "F", "09:00"),
    ];

    let (result, output) = run_default(&dataset(records));

    let summary = result.unwrap();
    let arrivals = summary.arrival_times.unwrap();
    assert_eq!(arrivals.violations().len(), 1);
    assert_eq!(arrivals.violations()[0].line, LineId::new(1));
    assert_eq!(arrivals.violations()[0].stop_name, "Fifth Avenue");
    assert!(output.contains(
        "Arrival time test:\nbus_id line 1: wrong time on station Fifth Avenue\nOn demand"
    ));
    assert!(!output.contains("bus_id line 2"));
}

#[test]
fn on_demand_transfer_is_reported() {
    let mut records = clean_network();
    // Elm Street is a transfer between 128 and 256
    records[1]["stop_type"] = json!("O");

    let (result, output) = run_default(&dataset(records));

    let summary = result.unwrap();
    let on_demand = summary.on_demand.unwrap();
    assert!(on_demand.offenders().contains("Elm Street"));
    // Fifth Avenue is on demand but on a single line only
    assert!(!on_demand.offenders().contains("Fifth Avenue"));
    assert!(output.ends_with("On demand stops test:\nWrong stop type: ['Elm Street']\n"));
}

#[test]
fn malformed_record_is_fatal_after_field_report() {
    let mut records = clean_network();
    records[2]["a_time"] = json!(825);
    if let Value::Object(map) = &mut records[3] {
        map.remove("next_stop");
    }

    let (result, output) = run_default(&dataset(records));

    let err = result.unwrap_err();
    assert!(matches!(
        err,
        RunError::Dataset(DatasetError::MalformedRecord { index: 2, .. })
    ));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(output, "Specification errors in key a_time: 1\n");
}

#[test]
fn skipped_checks_write_nothing() {
    let mut records = clean_network();
    records[0]["stop_name"] = json!("prospekt Avenue");

    let mut out = Vec::new();
    let config = CheckConfig::new(false, false, false, false);
    let summary = run(&dataset(records), &config, &mut out).unwrap();

    assert!(out.is_empty());
    assert!(summary.fields.is_none());
    assert!(summary.arrival_times.is_none());
    assert!(summary.on_demand.is_none());
    assert!(summary.is_clean());
}

#[test]
fn skipped_checks_still_enforce_topology() {
    let records = vec![record(9, 1, "Bourbon Street", 0, "S", "08:00")];

    let mut out = Vec::new();
    let config = CheckConfig::new(false, false, false, false);
    let err = run(&dataset(records), &config, &mut out).unwrap_err();
    assert!(matches!(err, RunError::Topology(_)));
}

#[test]
fn stop_sets_printed_when_requested() {
    let mut out = Vec::new();
    let config = CheckConfig {
        show_stop_sets: true,
        ..CheckConfig::default()
    };
    let summary = run(&dataset(clean_network()), &config, &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output,
        "Start stops: 2 ['Pilotow Street', 'Prospekt Avenue']\n\
         Transfer stops: 1 ['Elm Street']\n\
         Finish stops: 2 ['Abbey Road', 'Sesame Street']\n\
         Arrival time test:\nOK\n\
         On demand stops test:\nOK\n"
    );
    assert!(summary.stop_sets.transfer().contains("Elm Street"));
}

#[test]
fn empty_dataset_is_clean() {
    let (result, output) = run_default(&dataset(vec![]));

    assert!(result.unwrap().is_clean());
    assert_eq!(output, "Arrival time test:\nOK\nOn demand stops test:\nOK\n");
}
