//! High-level, ergonomic library API: plan a resize from validated parameters,
//! resize a batch in one call, and describe the kernel capability matrix.
//! Prefer these entrypoints over the low-level processing modules.
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::ResizeParams;
use crate::core::processing::pipeline::AspectResizer;
use crate::error::Result;
use crate::types::{AlignMode, Dimensions, ImageBatch, InterpolationKernel, KernelOptions};

/// Outcome of sizing: where the image will end up and how it will be resampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizePlan {
    pub original: Dimensions,
    pub target: Dimensions,
    pub align_mode: AlignMode,
    pub interpolation: InterpolationKernel,
    pub options: KernelOptions,
}

/// One row of the kernel capability matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelCapabilities {
    pub kernel: InterpolationKernel,
    pub supports_antialias: bool,
    pub supports_align_corners: bool,
    pub options: KernelOptions,
}

fn resizer_for(params: &ResizeParams) -> AspectResizer {
    AspectResizer::new(params.align_mode, params.interpolation)
}

/// Validate `params` and compute the target size and resolved kernel options.
pub fn plan_resize(params: &ResizeParams) -> Result<ResizePlan> {
    params.validate()?;
    let original = params.original_dimensions();
    let target = resizer_for(params).compute_target_size(original, params.target_resolution)?;
    Ok(ResizePlan {
        original,
        target,
        align_mode: params.align_mode,
        interpolation: params.interpolation,
        options: params.interpolation.options(),
    })
}

/// Resize `batch` according to `params`, returning a new batch clamped to [0, 1].
pub fn resize_to_aspect(batch: &ImageBatch, params: &ResizeParams) -> Result<ImageBatch> {
    let plan = plan_resize(params)?;
    info!(
        "Resize plan: {} -> {} ({}, {})",
        plan.original, plan.target, plan.align_mode, plan.interpolation
    );
    resizer_for(params).resize(batch, plan.original, params.target_resolution)
}

/// The fixed capability matrix, one entry per kernel in host order.
pub fn kernel_capabilities() -> Vec<KernelCapabilities> {
    InterpolationKernel::ALL
        .into_iter()
        .map(|kernel| KernelCapabilities {
            kernel,
            supports_antialias: kernel.supports_antialias(),
            supports_align_corners: kernel.supports_align_corners(),
            options: kernel.options(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use ndarray::Array4;

    #[test]
    fn test_plan_default_params() {
        let plan = plan_resize(&ResizeParams::default()).unwrap();
        assert_eq!(plan.target, Dimensions::new(1024, 576));
        assert_eq!(
            plan.options,
            KernelOptions {
                antialias: true,
                align_corners: Some(false)
            }
        );
    }

    #[test]
    fn test_plan_rejects_out_of_range() {
        let params = ResizeParams {
            original_width: 9000,
            ..ResizeParams::default()
        };
        assert!(matches!(
            plan_resize(&params),
            Err(Error::OutOfRange {
                name: "original_width",
                ..
            })
        ));
    }

    #[test]
    fn test_resize_to_aspect_shape() {
        let batch = Array4::from_shape_fn((3, 12, 16, 4), |(n, y, x, c)| {
            ((n + y + x + c) % 5) as f32 / 4.0
        });
        let params = ResizeParams {
            original_width: 20,
            original_height: 10,
            target_resolution: 6,
            align_mode: AlignMode::AlignShorter,
            interpolation: InterpolationKernel::Bicubic,
        };
        let out = resize_to_aspect(&batch, &params).unwrap();
        // Declared 2:1 landscape, shorter side pinned
        assert_eq!(out.dim(), (3, 6, 12, 4));
        assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_capability_table_order() {
        let table = kernel_capabilities();
        let names: Vec<&str> = table.iter().map(|c| c.kernel.name()).collect();
        assert_eq!(
            names,
            [
                "nearest",
                "linear",
                "bilinear",
                "bicubic",
                "trilinear",
                "area",
                "nearest-exact"
            ]
        );
        assert!(table.iter().all(|c| c.options.align_corners != Some(true)));
    }
}
