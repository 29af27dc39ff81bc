use crate::error::{Result, RunnerError};
use crate::runner::{AnalysisRunner, CalibrationRequest, ScenarioRequest};
use crate::specs::SpecsTable;
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::process::Command;
use std::time::Duration;

/// Invokes the configured toolchain executable with a `calibration` or
/// `scenario` subcommand. The specs table itself stays in this process; the
/// toolchain re-reads it from the forwarded path.
pub struct ExternalRunner {
    command: String,
    verbose: bool,
}

impl ExternalRunner {
    pub fn new(command: impl Into<String>, verbose: bool) -> Self {
        Self {
            command: command.into(),
            verbose,
        }
    }

    fn invoke(&self, args: &[OsString], label: &str) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(label.to_string());
        spinner.enable_steady_tick(Duration::from_millis(120));

        // Windows resolves .bat/.cmd launchers only through the shell.
        #[cfg(windows)]
        let output = Command::new("cmd")
            .arg("/c")
            .arg(&self.command)
            .args(args)
            .output();

        #[cfg(not(windows))]
        let output = Command::new(&self.command).args(args).output();

        spinner.finish_and_clear();

        let output = output.map_err(|e| {
            RunnerError::Toolchain(format!("failed to launch `{}`: {}", self.command, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RunnerError::Toolchain(format!(
                "`{}` failed (code {:?}): {}",
                self.command,
                output.status.code(),
                stderr.trim()
            )));
        }

        if self.verbose {
            let stdout = String::from_utf8_lossy(&output.stdout);
            for line in stdout.lines() {
                println!("  | {}", line);
            }
        }

        Ok(())
    }
}

impl AnalysisRunner for ExternalRunner {
    fn calibration(&self, specs: &SpecsTable, request: &CalibrationRequest) -> Result<()> {
        if self.verbose {
            println!("  specs table: {} rows", specs.len());
        }
        self.invoke(&calibration_args(request), "Calibrating GIS input...")
    }

    fn scenario(&self, specs: &SpecsTable, request: &ScenarioRequest) -> Result<()> {
        if self.verbose {
            println!("  specs table: {} rows", specs.len());
        }
        self.invoke(
            &scenario_args(request),
            &format!("Running scenario for {}...", request.file_name),
        )
    }
}

fn calibration_args(request: &CalibrationRequest) -> Vec<OsString> {
    vec![
        OsString::from("calibration"),
        OsString::from("--specs"),
        request.specs_path.clone().into(),
        OsString::from("--gis"),
        request.gis_csv.clone().into(),
        OsString::from("--out-specs"),
        request.calibrated_specs.clone().into(),
        OsString::from("--out-gis"),
        request.calibrated_csv.clone().into(),
    ]
}

fn scenario_args(request: &ScenarioRequest) -> Vec<OsString> {
    vec![
        OsString::from("scenario"),
        OsString::from("--specs"),
        request.specs_path.clone().into(),
        OsString::from("--calibrated"),
        request.calibrated_csv.clone().into(),
        OsString::from("--results"),
        request.results_dir.clone().into(),
        OsString::from("--summaries"),
        request.summary_dir.clone().into(),
        OsString::from("--name"),
        OsString::from(&request.file_name),
    ]
}
