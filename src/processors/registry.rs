// imgedit/src/processors/registry.rs
use super::convolution;
use super::pointwise::{self, BrightnessMode};
use crate::core::{validate_percent, Raster, Result};
use std::fmt;
use std::str::FromStr;

/// Every transformation the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transformation {
    RotateRight,
    Mirror,
    Inverse,
    Grayscale,
    Sharpen,
    Lighten,
    Darken,
}

/// Static description of one operator and its handler.
#[derive(Clone, Copy)]
pub struct Operator {
    pub transformation: Transformation,
    pub identifier: &'static str,
    pub needs_parameter: bool,
    pub progress_message: &'static str,
    /// Handler; the percent is only meaningful when `needs_parameter` is set
    /// and has already been checked against `0..=100`.
    pub apply: fn(&Raster, i32) -> Raster,
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("identifier", &self.identifier)
            .field("needs_parameter", &self.needs_parameter)
            .finish()
    }
}

pub static OPERATORS: [Operator; 7] = [
    Operator {
        transformation: Transformation::RotateRight,
        identifier: "rotate-right-90",
        needs_parameter: false,
        progress_message: "Rotation...",
        apply: |raster, _| pointwise::rotate_right(raster),
    },
    Operator {
        transformation: Transformation::Mirror,
        identifier: "mirror",
        needs_parameter: false,
        progress_message: "Mirroring...",
        apply: |raster, _| pointwise::mirror(raster),
    },
    Operator {
        transformation: Transformation::Inverse,
        identifier: "inverse",
        needs_parameter: false,
        progress_message: "Inverting...",
        apply: |raster, _| pointwise::inverse(raster),
    },
    Operator {
        transformation: Transformation::Grayscale,
        identifier: "grayscale",
        needs_parameter: false,
        progress_message: "Gray scaling...",
        apply: |raster, _| pointwise::grayscale(raster),
    },
    Operator {
        transformation: Transformation::Sharpen,
        identifier: "sharpen",
        needs_parameter: false,
        progress_message: "Sharpening...",
        apply: |raster, _| convolution::sharpen(raster),
    },
    Operator {
        transformation: Transformation::Lighten,
        identifier: "brightness-lighten",
        needs_parameter: true,
        progress_message: "Changing brightness...",
        apply: |raster, percent| pointwise::brightness(raster, BrightnessMode::Lighten, percent),
    },
    Operator {
        transformation: Transformation::Darken,
        identifier: "brightness-darken",
        needs_parameter: true,
        progress_message: "Changing brightness...",
        apply: |raster, percent| pointwise::brightness(raster, BrightnessMode::Darken, percent),
    },
];

impl Transformation {
    pub const ALL: [Transformation; 7] = [
        Transformation::RotateRight,
        Transformation::Mirror,
        Transformation::Inverse,
        Transformation::Grayscale,
        Transformation::Sharpen,
        Transformation::Lighten,
        Transformation::Darken,
    ];

    pub fn operator(self) -> &'static Operator {
        let slot = match self {
            Transformation::RotateRight => 0,
            Transformation::Mirror => 1,
            Transformation::Inverse => 2,
            Transformation::Grayscale => 3,
            Transformation::Sharpen => 4,
            Transformation::Lighten => 5,
            Transformation::Darken => 6,
        };
        &OPERATORS[slot]
    }

    pub fn identifier(self) -> &'static str {
        self.operator().identifier
    }

    pub fn needs_parameter(self) -> bool {
        self.operator().needs_parameter
    }

    pub fn progress_message(self) -> &'static str {
        self.operator().progress_message
    }

    /// Runs the operator, consuming the previous raster.
    ///
    /// A missing or out-of-range percent on a parameterised transformation is
    /// an error; nothing is applied in that case.
    pub fn apply(self, raster: Raster, percent: Option<i32>) -> Result<Raster> {
        validate_percent(self, percent)?;
        Ok((self.operator().apply)(&raster, percent.unwrap_or_default()))
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown transformation: {0}")]
pub struct UnknownTransformation(pub String);

impl FromStr for Transformation {
    type Err = UnknownTransformation;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Transformation::ALL
            .into_iter()
            .find(|t| t.identifier() == s)
            .ok_or_else(|| UnknownTransformation(s.to_string()))
    }
}
