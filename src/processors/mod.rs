// imgedit/src/processors/mod.rs
pub mod convolution;
pub mod loader;
pub mod pointwise;
pub mod registry;
pub mod saver;

pub use convolution::Kernel;
pub use loader::Loader;
pub use pointwise::BrightnessMode;
pub use registry::{Operator, Transformation, UnknownTransformation, OPERATORS};
pub use saver::Saver;

pub mod prelude {
    pub use super::{Loader, Saver, Transformation};
}
