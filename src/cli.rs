use crate::error::RunnerError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "onsset-runner")]
#[command(about = "Front-end for OnSSET calibration and scenario runs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print extra progress detail
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick inputs through file dialogs and run calibration or scenario(s)
    Run,

    /// Calibrate a GIS input file without dialogs
    Calibrate {
        /// Specs workbook
        #[arg(long)]
        specs: PathBuf,

        /// GIS input CSV (separated countries)
        #[arg(long)]
        gis: PathBuf,

        /// Where to write the calibrated GIS CSV
        #[arg(long)]
        out_gis: PathBuf,

        /// Where to write the calibrated specs workbook
        #[arg(long)]
        out_specs: PathBuf,
    },

    /// Run the configured scenario file(s) without dialogs
    Scenario {
        /// Specs workbook
        #[arg(long)]
        specs: PathBuf,

        /// Override the configured calibrated-input directory
        #[arg(long)]
        input_dir: Option<PathBuf>,

        /// Override the configured file list (repeatable)
        #[arg(long = "file")]
        files: Vec<String>,

        /// Override the configured results directory
        #[arg(long)]
        results_dir: Option<PathBuf>,

        /// Override the configured summary directory
        #[arg(long)]
        summary_dir: Option<PathBuf>,
    },

    /// Show or edit persisted settings
    Config {
        /// Show current settings
        #[arg(long)]
        show: bool,

        /// Set the external toolchain command
        #[arg(long)]
        set_runner: Option<String>,

        /// Set the calibrated-input directory for scenario runs
        #[arg(long)]
        set_input_dir: Option<PathBuf>,

        /// Set the results directory for scenario runs
        #[arg(long)]
        set_results_dir: Option<PathBuf>,

        /// Set the summary directory for scenario runs
        #[arg(long)]
        set_summary_dir: Option<PathBuf>,

        /// Replace the scenario file list (repeatable)
        #[arg(long = "set-file")]
        set_files: Vec<String>,
    },
}

/// The two recognized run modes. Anything else the operator types is an error,
/// never a silent no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Calibration,
    Scenario,
}

impl std::str::FromStr for Mode {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "calibration" | "calibrate" => Ok(Mode::Calibration),
            "2" | "scenario" | "scenarios" => Ok(Mode::Scenario),
            other => Err(RunnerError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Calibration => write!(f, "calibration"),
            Mode::Scenario => write!(f, "scenario"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_numeric_input() {
        assert_eq!("1".parse::<Mode>().unwrap(), Mode::Calibration);
        assert_eq!("2".parse::<Mode>().unwrap(), Mode::Scenario);
    }

    #[test]
    fn test_mode_from_named_input() {
        assert_eq!("calibration".parse::<Mode>().unwrap(), Mode::Calibration);
        assert_eq!("Calibrate".parse::<Mode>().unwrap(), Mode::Calibration);
        assert_eq!("scenario".parse::<Mode>().unwrap(), Mode::Scenario);
        assert_eq!("SCENARIOS".parse::<Mode>().unwrap(), Mode::Scenario);
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        assert!(matches!(
            "3".parse::<Mode>(),
            Err(RunnerError::UnknownMode(_))
        ));
        assert!(matches!(
            "abc".parse::<Mode>(),
            Err(RunnerError::UnknownMode(_))
        ));
        assert!(matches!(
            "".parse::<Mode>(),
            Err(RunnerError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Calibration.to_string(), "calibration");
        assert_eq!(Mode::Scenario.to_string(), "scenario");
    }
}
