use clap::Parser;
use onsset_runner::{cli, config, dialog, dispatcher, error, runner, specs};

use cli::{Cli, Commands};
use config::Config;
use dialog::DialogHost;
use error::Result;
use runner::{AnalysisRunner, CalibrationRequest, ExternalRunner, ScenarioRequest};
use specs::SpecsTable;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run => {
            println!("⚡ onsset-runner - interactive run\n");

            let runner = ExternalRunner::new(&config.runner_command, cli.verbose);
            let mut host = DialogHost::new();
            dispatcher::run(&mut host, &runner, &config, cli.verbose)?;

            println!("\n✅ Done");
        }

        Commands::Calibrate {
            specs,
            gis,
            out_gis,
            out_specs,
        } => {
            println!("⚡ onsset-runner - calibration\n");

            println!("[1/2] Loading specs...");
            let table = SpecsTable::load(&specs)?;
            println!("✔ {} rows\n", table.len());

            println!("[2/2] Calibrating...");
            let runner = ExternalRunner::new(&config.runner_command, cli.verbose);
            runner.calibration(
                &table,
                &CalibrationRequest {
                    specs_path: specs,
                    gis_csv: gis,
                    calibrated_specs: out_specs,
                    calibrated_csv: out_gis,
                },
            )?;
            println!("✔ Calibration finished");

            println!("\n✅ Done");
        }

        Commands::Scenario {
            specs,
            input_dir,
            files,
            results_dir,
            summary_dir,
        } => {
            println!("⚡ onsset-runner - scenario run\n");

            let mut scenario = config.scenario.clone();
            if let Some(dir) = input_dir {
                scenario.input_dir = Some(dir);
            }
            if !files.is_empty() {
                scenario.files = files;
            }
            if let Some(dir) = results_dir {
                scenario.results_dir = Some(dir);
            }
            if let Some(dir) = summary_dir {
                scenario.summary_dir = Some(dir);
            }
            let paths = scenario.resolve()?;

            println!("[1/2] Loading specs...");
            let table = SpecsTable::load(&specs)?;
            println!("✔ {} rows\n", table.len());

            println!("[2/2] Running {} scenario file(s)...", paths.files.len());
            let runner = ExternalRunner::new(&config.runner_command, cli.verbose);
            for (i, file) in paths.files.iter().enumerate() {
                println!("  [{}/{}] {}", i + 1, paths.files.len(), file);
                runner.scenario(
                    &table,
                    &ScenarioRequest {
                        specs_path: specs.clone(),
                        calibrated_csv: paths.input_dir.join(file),
                        results_dir: paths.results_dir.clone(),
                        summary_dir: paths.summary_dir.clone(),
                        file_name: file.clone(),
                    },
                )?;
            }
            println!("✔ Scenario run finished");

            println!("\n✅ Done");
        }

        Commands::Config {
            show,
            set_runner,
            set_input_dir,
            set_results_dir,
            set_summary_dir,
            set_files,
        } => {
            let mut config = config;

            if let Some(command) = set_runner {
                config.set_runner_command(command)?;
                println!("✔ Runner command updated");
            }
            if let Some(dir) = set_input_dir {
                config.set_input_dir(dir)?;
                println!("✔ Scenario input directory updated");
            }
            if let Some(dir) = set_results_dir {
                config.set_results_dir(dir)?;
                println!("✔ Results directory updated");
            }
            if let Some(dir) = set_summary_dir {
                config.set_summary_dir(dir)?;
                println!("✔ Summary directory updated");
            }
            if !set_files.is_empty() {
                config.set_files(set_files)?;
                println!("✔ Scenario file list updated");
            }

            if show {
                let fmt = |p: &Option<std::path::PathBuf>| {
                    p.as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(not set)".to_string())
                };

                println!("Settings:");
                println!("  runner command: {}", config.runner_command);
                println!("  scenario input dir: {}", fmt(&config.scenario.input_dir));
                println!("  scenario files: {}", config.scenario.files.join(", "));
                println!("  results dir: {}", fmt(&config.scenario.results_dir));
                println!("  summary dir: {}", fmt(&config.scenario.summary_dir));
            }
        }
    }

    Ok(())
}
