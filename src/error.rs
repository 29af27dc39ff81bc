use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("config error: {0}")]
    Config(String),

    #[error("scenario setting `{0}` is not set. Set it with `onsset-runner config --set-{0} <PATH>`")]
    MissingScenarioSetting(&'static str),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("specs workbook error: {0}")]
    SpecsLoad(#[from] calamine::Error),

    #[error("specs worksheet is empty: {0}")]
    SpecsEmpty(String),

    #[error("unknown mode: {0:?}. Enter 1 (calibration) or 2 (scenario)")]
    UnknownMode(String),

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("toolchain error: {0}")]
    Toolchain(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
