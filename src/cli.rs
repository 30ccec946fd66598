// imgedit/src/cli.rs
use crate::core::{EditConfig, PipelineStep};
use crate::processors::Transformation;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Plain switches, keyed by their argument id.
const SWITCHES: [(&str, Transformation); 5] = [
    ("rotate", Transformation::RotateRight),
    ("mirror", Transformation::Mirror),
    ("inverse", Transformation::Inverse),
    ("bw", Transformation::Grayscale),
    ("sharpen", Transformation::Sharpen),
];

/// Options carrying a percentage, keyed by their argument id.
const PERCENT_OPTIONS: [(&str, Transformation); 2] = [
    ("lighten", Transformation::Lighten),
    ("darken", Transformation::Darken),
];

// Switches are recorded as repeated `true` values so every occurrence keeps
// its own command-line index.
#[derive(Parser, Debug)]
#[command(name = "imgedit", version, about = "Image editor", long_about = None)]
pub struct Cli {
    /// Right rotate 90°
    #[arg(
        short = 'r',
        long = "rotate",
        action = ArgAction::Append,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::value_parser!(bool),
        hide_possible_values = true
    )]
    pub rotate: Vec<bool>,

    /// Mirror image
    #[arg(
        short = 'm',
        long = "mirror",
        action = ArgAction::Append,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::value_parser!(bool),
        hide_possible_values = true
    )]
    pub mirror: Vec<bool>,

    /// Inverse image
    #[arg(
        short = 'i',
        long = "inverse",
        action = ArgAction::Append,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::value_parser!(bool),
        hide_possible_values = true
    )]
    pub inverse: Vec<bool>,

    /// Gray scale
    #[arg(
        short = 'b',
        long = "bw",
        action = ArgAction::Append,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::value_parser!(bool),
        hide_possible_values = true
    )]
    pub bw: Vec<bool>,

    /// Unsharp mask
    #[arg(
        short = 's',
        long = "sharpen",
        action = ArgAction::Append,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::value_parser!(bool),
        hide_possible_values = true
    )]
    pub sharpen: Vec<bool>,

    /// Lighten image <0-100>%
    #[arg(
        short = 'l',
        long = "lighten",
        value_name = "PERCENT",
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub lighten: Vec<i32>,

    /// Darken image <0-100>%
    #[arg(
        short = 'd',
        long = "darken",
        value_name = "PERCENT",
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub darken: Vec<i32>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Input image path
    #[arg(value_name = "INPUT_IMAGE_PATH")]
    pub input: PathBuf,

    /// Output image path
    #[arg(value_name = "OUTPUT_IMAGE_PATH")]
    pub output: PathBuf,
}

impl Cli {
    /// Parses the process arguments, exiting with clap's usage message on a
    /// grammar error.
    pub fn parse_config() -> (Self, EditConfig) {
        Self::try_parse_config_from(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_config_from<I, T>(args: I) -> Result<(Self, EditConfig), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let cli = Self::from_arg_matches(&matches)?;
        let config = cli.to_config(steps_from_matches(&matches));
        Ok((cli, config))
    }

    pub fn to_config(&self, steps: Vec<PipelineStep>) -> EditConfig {
        EditConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            steps,
        }
    }
}

/// Rebuilds the ordered step list from argument indices.
pub fn steps_from_matches(matches: &ArgMatches) -> Vec<PipelineStep> {
    let mut indexed: Vec<(usize, PipelineStep)> = Vec::new();

    for (id, transformation) in SWITCHES {
        if let (Some(indices), Some(values)) = (matches.indices_of(id), matches.get_many::<bool>(id)) {
            indexed.extend(
                indices
                    .zip(values)
                    .filter(|(_, enabled)| **enabled)
                    .map(|(index, _)| (index, PipelineStep::new(transformation))),
            );
        }
    }

    for (id, transformation) in PERCENT_OPTIONS {
        if let (Some(indices), Some(values)) = (matches.indices_of(id), matches.get_many::<i32>(id)) {
            indexed.extend(
                indices
                    .zip(values)
                    .map(|(index, &percent)| (index, PipelineStep::with_percent(transformation, percent))),
            );
        }
    }

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, step)| step).collect()
}
