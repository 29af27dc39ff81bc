//! Operator interaction: mode prompt and native file/message dialogs.
//!
//! The dialog host is a scoped value owned by `main` for the duration of the
//! run, not process-global state. The `Interact` trait is the seam that lets
//! tests drive the dispatcher with scripted answers.

use crate::cli::Mode;
use crate::error::{Result, RunnerError};
use dialoguer::Input;
use std::path::PathBuf;

pub trait Interact {
    /// Ask which mode to run. Unrecognized input is an error.
    fn choose_mode(&mut self) -> Result<Mode>;

    /// Show a blocking informational dialog.
    fn notify(&mut self, message: &str);

    /// Open-file dialog. Cancel yields an empty path, passed through as-is.
    fn pick_open(&mut self) -> PathBuf;

    /// Save-file dialog. Cancel yields an empty path, passed through as-is.
    fn pick_save(&mut self) -> PathBuf;
}

pub struct DialogHost {
    title: String,
}

impl DialogHost {
    pub fn new() -> Self {
        Self {
            title: "OnSSET".into(),
        }
    }
}

impl Default for DialogHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Interact for DialogHost {
    fn choose_mode(&mut self) -> Result<Mode> {
        let input: String = Input::new()
            .with_prompt("Enter 1 to prepare/calibrate the GIS input file, 2 to run scenario(s)")
            .interact_text()
            .map_err(|e| RunnerError::Prompt(e.to_string()))?;

        input.trim().parse()
    }

    fn notify(&mut self, message: &str) {
        let _ = rfd::MessageDialog::new()
            .set_title(&self.title)
            .set_description(message)
            .set_level(rfd::MessageLevel::Info)
            .show();
    }

    fn pick_open(&mut self) -> PathBuf {
        rfd::FileDialog::new().pick_file().unwrap_or_default()
    }

    fn pick_save(&mut self) -> PathBuf {
        rfd::FileDialog::new().save_file().unwrap_or_default()
    }
}
