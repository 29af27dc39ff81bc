//! Operator front-end for OnSSET-style calibration and scenario runs.

pub mod cli;
pub mod config;
pub mod dialog;
pub mod dispatcher;
pub mod error;
pub mod runner;
pub mod specs;
