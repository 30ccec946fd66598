// imgedit/src/core/editor.rs
use super::{EditConfig, Pipeline, Raster, Reporter, Result};
use crate::processors::{Loader, Saver};
use std::path::Path;

/// Decode, transform and encode one image as described by an [`EditConfig`].
pub struct ImageEditor {
    config: EditConfig,
    loader: Loader,
    saver: Saver,
}

impl ImageEditor {
    pub fn new(config: EditConfig) -> Self {
        Self {
            config,
            loader: Loader::new(),
            saver: Saver::new(),
        }
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    /// Runs the whole edit, reporting progress lines as it goes.
    ///
    /// The step list is validated before the input is opened, so a missing
    /// transformation or a bad percent never touches the filesystem.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<Raster> {
        let pipeline = Pipeline::new(self.config.steps.clone())?;

        let image = self.loader.load(&self.config.input)?;
        let image = self.process(&pipeline, image, reporter)?;

        self.save(&image, &self.config.output, reporter)?;
        reporter.report("Done!");

        Ok(image)
    }

    fn process(
        &self,
        pipeline: &Pipeline,
        image: Raster,
        reporter: &mut dyn Reporter,
    ) -> Result<Raster> {
        reporter.report("Processing your image...");
        let image = pipeline.run(image, reporter)?;
        reporter.report("Your image has been processed!");

        log::debug!(
            "Applied {} steps, result {}x{}x{}",
            pipeline.len(),
            image.width(),
            image.height(),
            image.channels()
        );

        Ok(image)
    }

    fn save(&self, image: &Raster, output_path: &Path, reporter: &mut dyn Reporter) -> Result<()> {
        self.saver.save(image, output_path)?;
        reporter.report(&format!("Saving to...{}", output_path.display()));
        Ok(())
    }
}
