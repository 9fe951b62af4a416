//! Durable storage for experiment records

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::experiment::{Experiment, ExperimentError};

/// File name of the serialized record inside the experiment folder
pub const EXPERIMENT_FILE: &str = "experiment.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid experiment: {0}")]
    Experiment(#[from] ExperimentError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Folder name derived from the experiment name and its leading parameters
pub fn folder_name(experiment: &Experiment) -> Result<String, StorageError> {
    experiment.validate()?;
    let params = &experiment.experiment_params;
    Ok(format!(
        "{} - Octave {} - Intervals {}",
        experiment.experiment_name, params.octaves[0], params.intervals[0]
    ))
}

/// Write an experiment record under `data_root`
///
/// The destination folder is created if missing; a pre-existing folder is
/// reused. Returns the path of the written file. On failure the record is
/// untouched in memory, so the caller may retry with another root.
pub fn persist(experiment: &Experiment, data_root: &Path) -> Result<PathBuf, StorageError> {
    let folder = data_root.join(folder_name(experiment)?);
    fs::create_dir_all(&folder)?;
    let path = folder.join(EXPERIMENT_FILE);
    let json = serde_json::to_string_pretty(experiment)?;
    fs::write(&path, json)?;
    info!("saved experiment to {}", path.display());
    Ok(path)
}

/// Read a previously persisted experiment record back
pub fn load(path: &Path) -> Result<Experiment, StorageError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
