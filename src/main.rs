use anyhow::Context;
use imgedit::{Cli, ImageEditor, StdoutReporter};
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let (cli, config) = Cli::parse_config();

    // Initialize logger; RUST_LOG overrides the flag
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .try_init()
        .context("failed to initialise logger")?;

    log::debug!(
        "Editing {} -> {} with {} steps",
        config.input.display(),
        config.output.display(),
        config.steps.len()
    );

    let editor = ImageEditor::new(config);
    match editor.run(&mut StdoutReporter) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            log::debug!("Edit aborted: {:?}", err);
            println!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
