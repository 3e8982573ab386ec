use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::backend::linkbudget::ValidationError;


pub mod cli;
pub mod config;
pub mod presets;
pub mod report;


#[derive(Error, Debug)]
pub enum FrontendError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to read scenario file {path}: {source}")]
    ScenarioRead {
        path: PathBuf,
        source: io::Error,
    },
    #[error("Failed to parse scenario: {0}")]
    ScenarioParse(#[source] serde_json::Error),
    #[error("Failed to serialize report: {0}")]
    ReportSerialization(#[source] serde_json::Error),
    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: io::Error,
    },
}
