//! Bus line dataset checker.
//!
//! Loads a JSON array of stop records and reports field format errors,
//! lines without exactly one start and finish stop, arrival times that
//! go backwards, and on-demand stops that are also start, transfer or
//! finish stops.

pub mod checks;
pub mod dataset;
pub mod domain;
pub mod runner;
