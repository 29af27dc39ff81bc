use crate::error::{Result, RunnerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// External toolchain command invoked for calibration/scenario runs.
    pub runner_command: String,
    pub scenario: ScenarioConfig,
}

/// Where scenario runs find their calibrated inputs and write their outputs.
/// The directories have no portable default; unset ones are an error at
/// dispatch time, not a fallback.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScenarioConfig {
    pub input_dir: Option<PathBuf>,
    pub files: Vec<String>,
    pub results_dir: Option<PathBuf>,
    pub summary_dir: Option<PathBuf>,
}

/// Fully resolved scenario paths, ready to dispatch.
#[derive(Debug, Clone)]
pub struct ScenarioPaths {
    pub input_dir: PathBuf,
    pub files: Vec<String>,
    pub results_dir: PathBuf,
    pub summary_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runner_command: "onsset".into(),
            scenario: ScenarioConfig {
                input_dir: None,
                files: vec!["na-26.csv".into()],
                results_dir: None,
                summary_dir: None,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RunnerError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("onsset-runner").join("config.json"))
    }

    pub fn set_runner_command(&mut self, command: String) -> Result<()> {
        self.runner_command = command;
        self.save()
    }

    pub fn set_input_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.scenario.input_dir = Some(dir);
        self.save()
    }

    pub fn set_results_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.scenario.results_dir = Some(dir);
        self.save()
    }

    pub fn set_summary_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.scenario.summary_dir = Some(dir);
        self.save()
    }

    pub fn set_files(&mut self, files: Vec<String>) -> Result<()> {
        self.scenario.files = files;
        self.save()
    }
}

impl ScenarioConfig {
    /// Resolve into concrete paths, erroring on anything unset.
    pub fn resolve(&self) -> Result<ScenarioPaths> {
        let input_dir = self
            .input_dir
            .clone()
            .ok_or(RunnerError::MissingScenarioSetting("input-dir"))?;
        let results_dir = self
            .results_dir
            .clone()
            .ok_or(RunnerError::MissingScenarioSetting("results-dir"))?;
        let summary_dir = self
            .summary_dir
            .clone()
            .ok_or(RunnerError::MissingScenarioSetting("summary-dir"))?;

        if self.files.is_empty() {
            return Err(RunnerError::Config(
                "no scenario files configured. Add them with `onsset-runner config --set-file <NAME>`".into(),
            ));
        }

        Ok(ScenarioPaths {
            input_dir,
            files: self.files.clone(),
            results_dir,
            summary_dir,
        })
    }
}
