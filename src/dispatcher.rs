//! The interactive dispatcher: prompt for a mode, collect paths through
//! dialogs, load the specs table, and hand off to exactly one of the two
//! analysis routines.

use crate::cli::Mode;
use crate::config::Config;
use crate::dialog::Interact;
use crate::error::Result;
use crate::runner::{AnalysisRunner, CalibrationRequest, ScenarioRequest};
use crate::specs::SpecsTable;
use std::ffi::OsString;
use std::path::PathBuf;

pub fn run(
    ui: &mut dyn Interact,
    runner: &dyn AnalysisRunner,
    config: &Config,
    verbose: bool,
) -> Result<()> {
    let mode = ui.choose_mode()?;

    ui.notify("Open the specs file");
    let specs_path = ui.pick_open();

    // Loaded before branching, whichever mode was chosen.
    let specs = SpecsTable::load(&specs_path)?;
    if verbose {
        println!(
            "  specs: {} rows ({})",
            specs.len(),
            specs_path.display()
        );
    }

    match mode {
        Mode::Calibration => {
            ui.notify("Open the file containing separated countries");
            let gis_csv = ui.pick_open();

            ui.notify("Browse to result folder and name the calibrated file");
            let calibrated_csv = append_suffix(ui.pick_save(), ".csv");

            ui.notify("Browse to result folder and name the calibrated specs file");
            let calibrated_specs = append_suffix(ui.pick_save(), ".xlsx");

            runner.calibration(
                &specs,
                &CalibrationRequest {
                    specs_path,
                    gis_csv,
                    calibrated_specs,
                    calibrated_csv,
                },
            )
        }
        Mode::Scenario => {
            let paths = config.scenario.resolve()?;

            for file in &paths.files {
                runner.scenario(
                    &specs,
                    &ScenarioRequest {
                        specs_path: specs_path.clone(),
                        calibrated_csv: paths.input_dir.join(file),
                        results_dir: paths.results_dir.clone(),
                        summary_dir: paths.summary_dir.clone(),
                        file_name: file.clone(),
                    },
                )?;
            }

            Ok(())
        }
    }
}

/// Raw concatenation, no extension check: picking "out.csv" in the save
/// dialog yields "out.csv.csv".
pub fn append_suffix(path: PathBuf, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path);
    name.push(suffix);
    PathBuf::from(name)
}
