//! Experiment metadata wrapping generation parameters and results

use chordlab_core::{Chord, Scale};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentError {
    #[error("experiment metadata is incomplete: {0}")]
    Incomplete(&'static str),
}

/// The generation parameters, kept by value for offline reproducibility
///
/// `intervals` holds the allowed scale-degree steps, under the field name
/// the persisted record has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentParams {
    pub scale: Scale,
    pub octaves: Vec<i32>,
    pub sizes: Vec<usize>,
    pub intervals: Vec<i32>,
}

/// One generation run: name, parameters, and every chord produced
///
/// Immutable after construction; its lifecycle ends when persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    pub experiment_name: String,
    pub experiment_params: ExperimentParams,
    pub chords: Vec<Chord>,
}

impl Experiment {
    /// Wrap a finished run into a metadata record
    pub fn build(
        scale: Scale,
        octaves: Vec<i32>,
        sizes: Vec<usize>,
        intervals: Vec<i32>,
        chords: Vec<Chord>,
    ) -> Self {
        let experiment_name = format!("PC set experiment - {}", scale.name);
        Self {
            experiment_name,
            experiment_params: ExperimentParams {
                scale,
                octaves,
                sizes,
                intervals,
            },
            chords,
        }
    }

    /// Check required fields; called before any persistence is attempted
    pub fn validate(&self) -> Result<(), ExperimentError> {
        if self.experiment_name.is_empty() {
            return Err(ExperimentError::Incomplete("experiment_name"));
        }
        if self.experiment_params.octaves.is_empty() {
            return Err(ExperimentError::Incomplete("octaves"));
        }
        if self.experiment_params.intervals.is_empty() {
            return Err(ExperimentError::Incomplete("intervals"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chordlab_core::{ChordGenerator, ScaleKind};

    #[test]
    fn test_build_derives_name_from_scale() {
        let scale = Scale::from_kind(ScaleKind::Dorian, 0);
        let experiment = Experiment::build(scale, vec![5], vec![2], vec![2], vec![]);
        assert_eq!(experiment.experiment_name, "PC set experiment - Dorian");
        assert!(experiment.validate().is_ok());
    }

    #[test]
    fn test_build_keeps_parameters_by_value() {
        let scale = Scale::from_kind(ScaleKind::Major, 0);
        let generator = ChordGenerator::new(vec![5], vec![2], vec![2]);
        let chords = generator.generate(&scale).unwrap();
        let experiment = Experiment::build(
            scale.clone(),
            generator.octaves.clone(),
            generator.sizes.clone(),
            generator.steps.clone(),
            chords.clone(),
        );
        assert_eq!(experiment.experiment_params.scale, scale);
        assert_eq!(experiment.chords, chords);
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let scale = Scale::from_kind(ScaleKind::Major, 0);
        let mut experiment = Experiment::build(scale, vec![5], vec![2], vec![2], vec![]);

        experiment.experiment_params.octaves.clear();
        assert_eq!(
            experiment.validate(),
            Err(ExperimentError::Incomplete("octaves"))
        );

        experiment.experiment_name.clear();
        assert_eq!(
            experiment.validate(),
            Err(ExperimentError::Incomplete("experiment_name"))
        );
    }
}
