//! teamfit-core: Question bank, scoring, and quiz session state.
//!
//! This crate defines the team catalog, the question bank model and its TOML
//! loader, the tally/ranking scorer, and the session state machine that the
//! teamfit front ends drive.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod session;
