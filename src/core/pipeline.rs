// imgedit/src/core/pipeline.rs
use super::{validate_steps, Raster, Result};
use crate::processors::Transformation;

/// Sink for the human-readable progress lines emitted during a run.
pub trait Reporter {
    fn report(&mut self, message: &str);
}

/// Prints every notification on its own stdout line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, message: &str) {
        println!("{}", message);
    }
}

impl Reporter for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// One operator invocation, in command order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStep {
    pub transformation: Transformation,
    pub percent: Option<i32>,
}

impl PipelineStep {
    pub fn new(transformation: Transformation) -> Self {
        Self {
            transformation,
            percent: None,
        }
    }

    pub fn with_percent(transformation: Transformation, percent: i32) -> Self {
        Self {
            transformation,
            percent: Some(percent),
        }
    }
}

/// Ordered, validated list of steps folded over a raster.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<PipelineStep>,
}

impl Pipeline {
    pub fn new(steps: Vec<PipelineStep>) -> Result<Self> {
        validate_steps(&steps)?;
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Applies every step in order, each one consuming the previous output.
    ///
    /// The progress line of a step is reported before its operator runs.
    pub fn run(&self, raster: Raster, reporter: &mut dyn Reporter) -> Result<Raster> {
        validate_steps(&self.steps)?;

        let mut current = raster;
        for (position, step) in self.steps.iter().enumerate() {
            reporter.report(step.transformation.progress_message());

            log::debug!(
                "Step {}/{}: {} on {}x{}x{}",
                position + 1,
                self.steps.len(),
                step.transformation,
                current.width(),
                current.height(),
                current.channels()
            );

            current = step.transformation.apply(current, step.percent)?;
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EditorError;
    use crate::processors::{convolution, pointwise};

    fn sample_raster() -> Raster {
        Raster::new(2, 2, 1, vec![10, 20, 30, 40]).unwrap()
    }

    #[test]
    fn test_empty_pipeline_is_rejected() {
        assert!(matches!(
            Pipeline::new(Vec::new()),
            Err(EditorError::NoTransformationRequested)
        ));
    }

    #[test]
    fn test_invalid_percent_runs_nothing() {
        let err = Pipeline::new(vec![
            PipelineStep::new(Transformation::RotateRight),
            PipelineStep::with_percent(Transformation::Lighten, 150),
        ])
        .unwrap_err();

        assert!(matches!(err, EditorError::InvalidParameterRange { percent: 150, .. }));
    }

    #[test]
    fn test_order_of_processing() {
        let pipeline = Pipeline::new(vec![
            PipelineStep::new(Transformation::RotateRight),
            PipelineStep::new(Transformation::Mirror),
            PipelineStep::new(Transformation::RotateRight),
            PipelineStep::new(Transformation::Mirror),
            PipelineStep::new(Transformation::Mirror),
            PipelineStep::new(Transformation::Sharpen),
        ])
        .unwrap();

        let mut messages: Vec<String> = Vec::new();
        let result = pipeline.run(sample_raster(), &mut messages).unwrap();

        assert_eq!(
            messages,
            vec![
                "Rotation...",
                "Mirroring...",
                "Rotation...",
                "Mirroring...",
                "Mirroring...",
                "Sharpening...",
            ]
        );

        let mut expected = sample_raster();
        expected = pointwise::rotate_right(&expected);
        expected = pointwise::mirror(&expected);
        expected = pointwise::rotate_right(&expected);
        expected = pointwise::mirror(&expected);
        expected = pointwise::mirror(&expected);
        expected = convolution::sharpen(&expected);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_brightness_steps_use_their_own_percent() {
        let pipeline = Pipeline::new(vec![
            PipelineStep::with_percent(Transformation::Darken, 100),
            PipelineStep::with_percent(Transformation::Lighten, 10),
        ])
        .unwrap();

        let mut messages: Vec<String> = Vec::new();
        let result = pipeline.run(sample_raster(), &mut messages).unwrap();

        // darken 100% -> all zero, then lighten 10% -> 0 + 25.5 truncated
        assert_eq!(result.samples(), &[25, 25, 25, 25]);
        assert_eq!(messages, vec!["Changing brightness...", "Changing brightness..."]);
    }

    #[test]
    fn test_grayscale_changes_shape_for_following_steps() {
        let rgb = Raster::new(3, 1, 3, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]).unwrap();
        let pipeline = Pipeline::new(vec![
            PipelineStep::new(Transformation::Grayscale),
            PipelineStep::new(Transformation::RotateRight),
        ])
        .unwrap();

        let result = pipeline.run(rgb, &mut Vec::<String>::new()).unwrap();

        assert_eq!(result.channels(), 1);
        assert_eq!((result.width(), result.height()), (1, 3));
        assert_eq!(result.samples(), &[76, 149, 29]);
    }
}
