//! chordlab-services: Experiment metadata and storage layer

pub mod experiment;
pub mod storage;

pub use experiment::{Experiment, ExperimentError, ExperimentParams};
pub use storage::{folder_name, load, persist, StorageError, EXPERIMENT_FILE};
