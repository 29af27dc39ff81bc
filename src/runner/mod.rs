//! The seam to the external analysis toolchain. The runner never looks inside
//! the specs table or the GIS data; it carries paths to whichever routine was
//! selected.

mod external;

pub use external::ExternalRunner;

use crate::error::Result;
use crate::specs::SpecsTable;
use std::path::PathBuf;

/// Arguments for one calibration run, in the toolchain's signature order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationRequest {
    pub specs_path: PathBuf,
    pub gis_csv: PathBuf,
    pub calibrated_specs: PathBuf,
    pub calibrated_csv: PathBuf,
}

/// Arguments for one scenario run over a single calibrated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRequest {
    pub specs_path: PathBuf,
    pub calibrated_csv: PathBuf,
    pub results_dir: PathBuf,
    pub summary_dir: PathBuf,
    pub file_name: String,
}

pub trait AnalysisRunner {
    fn calibration(&self, specs: &SpecsTable, request: &CalibrationRequest) -> Result<()>;

    fn scenario(&self, specs: &SpecsTable, request: &ScenarioRequest) -> Result<()>;
}
