pub mod cli;
pub mod core;
pub mod processors;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::core::{
    validate_percent, validate_steps, EditConfig, EditorError, ImageEditor, Pipeline, PipelineStep,
    Raster, Reporter, Result, StdoutReporter,
};
pub use crate::processors::{
    BrightnessMode, Kernel, Loader, Operator, Saver, Transformation, UnknownTransformation,
};

pub mod prelude {
    pub use crate::{
        EditConfig, ImageEditor, Pipeline, PipelineStep, Raster, Reporter, StdoutReporter,
        Transformation,
    };
}
