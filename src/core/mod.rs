// imgedit/src/core/mod.rs
pub mod editor;
pub mod pipeline;
pub mod raster;

use crate::processors::Transformation;
use std::path::PathBuf;
use thiserror::Error;

pub use editor::ImageEditor;
pub use pipeline::{Pipeline, PipelineStep, Reporter, StdoutReporter};
pub use raster::Raster;

pub const MIN_PERCENT: i32 = 0;
pub const MAX_PERCENT: i32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct EditConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub steps: Vec<PipelineStep>,
}

impl EditConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            steps: Vec::new(),
        }
    }

    pub fn with_step(mut self, step: PipelineStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_steps(&self.steps)
    }
}

/// Checks a step list before anything is opened or applied.
///
/// Fails on an empty list, then on the first step whose percent is rejected
/// by [`validate_percent`].
pub fn validate_steps(steps: &[PipelineStep]) -> Result<()> {
    if steps.is_empty() {
        return Err(EditorError::NoTransformationRequested);
    }

    steps
        .iter()
        .try_for_each(|step| validate_percent(step.transformation, step.percent))
}

/// A parameterised transformation needs a percent within `0..=100`; any other
/// transformation ignores it.
pub fn validate_percent(transformation: Transformation, percent: Option<i32>) -> Result<()> {
    if !transformation.needs_parameter() {
        return Ok(());
    }

    match percent {
        None => Err(EditorError::MissingParameter(transformation)),
        Some(percent) if !(MIN_PERCENT..=MAX_PERCENT).contains(&percent) => {
            Err(EditorError::InvalidParameterRange {
                transformation,
                percent,
            })
        }
        Some(_) => Ok(()),
    }
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid input file name")]
    InvalidInputFile {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid output file name")]
    InvalidOutputFile {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("At least one transformation(filter) is required")]
    NoTransformationRequested,

    #[error("Invalid argument value")]
    InvalidParameterRange {
        transformation: Transformation,
        percent: i32,
    },

    #[error("Missing argument value")]
    MissingParameter(Transformation),

    #[error("Raster buffer holds {actual} samples, expected {expected}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("Raster dimensions must be positive, got {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(u8),
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_step_list_is_rejected() {
        let config = EditConfig::new("in.png", "out.png");
        assert!(matches!(
            config.validate(),
            Err(EditorError::NoTransformationRequested)
        ));
    }

    #[test]
    fn test_percent_bounds_are_inclusive() {
        for percent in [0, 50, 100] {
            let config = EditConfig::new("in.png", "out.png")
                .with_step(PipelineStep::with_percent(Transformation::Lighten, percent));
            assert!(config.validate().is_ok(), "percent {percent} should pass");
        }
    }

    #[test]
    fn test_percent_out_of_range() {
        for percent in [-1, 101, i32::MIN, i32::MAX] {
            let steps = vec![
                PipelineStep::new(Transformation::Mirror),
                PipelineStep::with_percent(Transformation::Darken, percent),
            ];
            match validate_steps(&steps) {
                Err(EditorError::InvalidParameterRange {
                    transformation,
                    percent: reported,
                }) => {
                    assert_eq!(transformation, Transformation::Darken);
                    assert_eq!(reported, percent);
                }
                other => panic!("expected range error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_percent() {
        let steps = vec![PipelineStep::new(Transformation::Lighten)];
        assert!(matches!(
            validate_steps(&steps),
            Err(EditorError::MissingParameter(Transformation::Lighten))
        ));
    }

    #[test]
    fn test_percent_ignored_for_plain_operators() {
        let steps = vec![PipelineStep::with_percent(Transformation::Sharpen, 500)];
        assert!(validate_steps(&steps).is_ok());
    }

    #[test]
    fn test_single_percent_check() {
        assert!(validate_percent(Transformation::Darken, Some(0)).is_ok());
        assert!(validate_percent(Transformation::Inverse, None).is_ok());
        assert!(matches!(
            validate_percent(Transformation::Lighten, Some(101)),
            Err(EditorError::InvalidParameterRange {
                transformation: Transformation::Lighten,
                percent: 101
            })
        ));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EditorError::NoTransformationRequested.to_string(),
            "At least one transformation(filter) is required"
        );
        let err = EditorError::InvalidParameterRange {
            transformation: Transformation::Lighten,
            percent: 101,
        };
        assert_eq!(err.to_string(), "Invalid argument value");
    }
}
