//! Shared types and enums used across the crate.
//! Includes `AlignMode`, `InterpolationKernel` with its fixed capability matrix,
//! the resolved `KernelOptions`, `Dimensions`, and the `ImageBatch` alias.
use std::str::FromStr;

use clap::ValueEnum;
use ndarray::Array4;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Batch of images laid out as (batch, height, width, channel), samples nominally in [0, 1].
pub type ImageBatch = Array4<f32>;

/// Width/height pair in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Which side of the declared original size is pinned to the target resolution.
#[derive(Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Debug, Serialize, Deserialize)]
pub enum AlignMode {
    #[value(name = "longer")]
    #[serde(rename = "longer", alias = "Align Longer Side")]
    AlignLonger,
    #[value(name = "shorter")]
    #[serde(rename = "shorter", alias = "Align Shorter Side")]
    AlignShorter,
}

impl AlignMode {
    pub const ALL: [AlignMode; 2] = [AlignMode::AlignLonger, AlignMode::AlignShorter];

    /// Label shown by the host pipeline.
    pub fn label(&self) -> &'static str {
        match self {
            AlignMode::AlignLonger => "Align Longer Side",
            AlignMode::AlignShorter => "Align Shorter Side",
        }
    }
}

impl Default for AlignMode {
    fn default() -> Self {
        AlignMode::AlignLonger
    }
}

impl std::fmt::Display for AlignMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AlignMode {
    type Err = Error;

    /// Accepts the host labels as well as the short CLI names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Align Longer Side" | "longer" => Ok(AlignMode::AlignLonger),
            "Align Shorter Side" | "shorter" => Ok(AlignMode::AlignShorter),
            other => Err(Error::UnsupportedAlignMode(other.to_string())),
        }
    }
}

/// Resampling kernel. Each variant carries two fixed capability flags, see
/// [`InterpolationKernel::supports_antialias`] and
/// [`InterpolationKernel::supports_align_corners`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterpolationKernel {
    Nearest,
    Linear,
    Bilinear,
    Bicubic,
    Trilinear,
    Area,
    NearestExact,
}

impl InterpolationKernel {
    /// All kernels, in the order the host lists them.
    pub const ALL: [InterpolationKernel; 7] = [
        InterpolationKernel::Nearest,
        InterpolationKernel::Linear,
        InterpolationKernel::Bilinear,
        InterpolationKernel::Bicubic,
        InterpolationKernel::Trilinear,
        InterpolationKernel::Area,
        InterpolationKernel::NearestExact,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InterpolationKernel::Nearest => "nearest",
            InterpolationKernel::Linear => "linear",
            InterpolationKernel::Bilinear => "bilinear",
            InterpolationKernel::Bicubic => "bicubic",
            InterpolationKernel::Trilinear => "trilinear",
            InterpolationKernel::Area => "area",
            InterpolationKernel::NearestExact => "nearest-exact",
        }
    }

    pub fn supports_antialias(&self) -> bool {
        matches!(
            self,
            InterpolationKernel::Bilinear | InterpolationKernel::Bicubic
        )
    }

    pub fn supports_align_corners(&self) -> bool {
        !matches!(
            self,
            InterpolationKernel::Nearest
                | InterpolationKernel::NearestExact
                | InterpolationKernel::Area
        )
    }

    /// Resolve the options passed to the resampler for this kernel.
    ///
    /// Antialiasing is always on where supported; align-corners is passed as
    /// `Some(false)` where allowed and omitted otherwise. Neither is user-configurable.
    pub fn options(&self) -> KernelOptions {
        KernelOptions {
            antialias: self.supports_antialias(),
            align_corners: self.supports_align_corners().then_some(false),
        }
    }
}

impl Default for InterpolationKernel {
    fn default() -> Self {
        InterpolationKernel::Bilinear
    }
}

impl std::fmt::Display for InterpolationKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for InterpolationKernel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterpolationKernel::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::UnsupportedKernel(s.to_string()))
    }
}

/// Per-call resampler configuration derived from the kernel capability matrix.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct KernelOptions {
    pub antialias: bool,
    /// `None` when the kernel does not accept the option at all.
    pub align_corners: Option<bool>,
}
