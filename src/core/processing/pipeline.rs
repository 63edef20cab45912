use tracing::info;

use crate::core::processing::resample::resample;
use crate::core::processing::resize::{check_declared_aspect, compute_target_size};
use crate::error::Result;
use crate::types::{AlignMode, Dimensions, ImageBatch, InterpolationKernel};

/// Stateless resize step: compute the aspect-preserving target size, then resample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AspectResizer {
    pub align_mode: AlignMode,
    pub kernel: InterpolationKernel,
}

impl AspectResizer {
    pub fn new(align_mode: AlignMode, kernel: InterpolationKernel) -> Self {
        Self { align_mode, kernel }
    }

    pub fn compute_target_size(
        &self,
        original: Dimensions,
        target_resolution: usize,
    ) -> Result<Dimensions> {
        compute_target_size(
            original.width,
            original.height,
            target_resolution,
            self.align_mode,
        )
    }

    pub fn resample(&self, batch: &ImageBatch, target: Dimensions) -> Result<ImageBatch> {
        resample(batch, target.width, target.height, self.kernel)
    }

    /// Size from the declared `original` dimensions, then resample the whole batch.
    pub fn resize(
        &self,
        batch: &ImageBatch,
        original: Dimensions,
        target_resolution: usize,
    ) -> Result<ImageBatch> {
        let target = self.compute_target_size(original, target_resolution)?;
        let (count, rows, cols, channels) = batch.dim();
        check_declared_aspect(original, cols, rows);
        info!(
            "Resizing {} image(s) {}x{}x{} to {} ({}, {})",
            count, cols, rows, channels, target, self.align_mode, self.kernel
        );
        self.resample(batch, target)
    }
}
