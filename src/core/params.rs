use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{AlignMode, Dimensions, InterpolationKernel};

/// Smallest accepted width, height or target resolution.
pub const MIN_DIMENSION: usize = 1;
/// Largest accepted width, height or target resolution.
pub const MAX_DIMENSION: usize = 8192;

/// Resize parameters suitable for config files and host presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeParams {
    /// Declared original width, only used for the aspect ratio
    pub original_width: usize,
    /// Declared original height, only used for the aspect ratio
    pub original_height: usize,
    /// Length in pixels of the side selected by `align_mode`
    pub target_resolution: usize,
    pub align_mode: AlignMode,
    pub interpolation: InterpolationKernel,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            original_width: 1920,
            original_height: 1080,
            target_resolution: 1024,
            align_mode: AlignMode::AlignLonger,
            interpolation: InterpolationKernel::Bilinear,
        }
    }
}

impl ResizeParams {
    /// Load a preset from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: ResizeParams = serde_json::from_str(&text)?;
        debug!("Loaded resize preset from {:?}: {:?}", path, params);
        Ok(params)
    }

    pub fn original_dimensions(&self) -> Dimensions {
        Dimensions::new(self.original_width, self.original_height)
    }

    /// Check every integer parameter against `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn validate(&self) -> Result<()> {
        check_range("original_width", self.original_width)?;
        check_range("original_height", self.original_height)?;
        check_range("target_resolution", self.target_resolution)?;
        Ok(())
    }
}

pub(crate) fn check_range(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::invalid_dimension(name, value));
    }
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        return Err(Error::OutOfRange {
            name,
            value: i64::try_from(value).unwrap_or(i64::MAX),
            min: MIN_DIMENSION as i64,
            max: MAX_DIMENSION as i64,
        });
    }
    Ok(())
}
