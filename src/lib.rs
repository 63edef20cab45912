#![doc = r#"
aspect-resize — an aspect-ratio preserving resize step for node-based image pipelines.

Given a batch of images and a *declared* original size, this crate computes a target size
that pins either the longer or the shorter side to a target resolution, resamples the batch
with one of seven interpolation kernels, and clamps the result to the normalized [0, 1] range.
The step is stateless: every call returns a fresh batch and leaves its input untouched.

Quick start: resize a batch
---------------------------
```rust
use ndarray::Array4;
use aspect_resize::{resize_to_aspect, AlignMode, InterpolationKernel, ResizeParams};

fn main() -> aspect_resize::Result<()> {
    // (batch, height, width, channel)
    let batch = Array4::<f32>::from_elem((2, 108, 192, 3), 0.5);

    let params = ResizeParams {
        original_width: 1920,
        original_height: 1080,
        target_resolution: 64,
        align_mode: AlignMode::AlignLonger,
        interpolation: InterpolationKernel::Bilinear,
    };

    let resized = resize_to_aspect(&batch, &params)?;
    assert_eq!(resized.dim(), (2, 36, 64, 3));
    Ok(())
}
```

Sizing only
-----------
Target sizes truncate toward zero and never drop below 1 pixel.

```rust
use aspect_resize::{compute_target_size, AlignMode, Dimensions};

let dims = compute_target_size(1920, 1080, 1024, AlignMode::AlignLonger).unwrap();
assert_eq!(dims, Dimensions::new(1024, 576));

let dims = compute_target_size(1080, 1920, 1024, AlignMode::AlignLonger).unwrap();
assert_eq!(dims, Dimensions::new(576, 1024));
```

Kernel capabilities
-------------------
Antialiasing is always on for `bilinear` and `bicubic` and unavailable elsewhere.
Align-corners is passed as disabled for `linear`, `bilinear`, `bicubic` and `trilinear`
and not passed at all for `nearest`, `nearest-exact` and `area`.

```rust
use aspect_resize::InterpolationKernel;

let opts = InterpolationKernel::Nearest.options();
assert!(!opts.antialias);
assert_eq!(opts.align_corners, None);
```

Error handling
--------------
All fallible functions return `aspect_resize::Result<T>`; match on `aspect_resize::Error`
to handle specific cases.

```rust
use aspect_resize::{compute_target_size, AlignMode, Error};

match compute_target_size(0, 1080, 1024, AlignMode::AlignShorter) {
    Err(Error::InvalidDimension { name, .. }) => assert_eq!(name, "original_width"),
    other => panic!("unexpected: {other:?}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points and the resize plan.
- [`core`] — sizing arithmetic, resampling kernels and parameters.
- [`node`] — adapter for node-graph hosts (schema, registration, change marker).
- [`types`] — enums and core types (`AlignMode`, `InterpolationKernel`, `Dimensions`).
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod node;
pub mod types;

// Curated public API surface
pub use crate::core::params::{MAX_DIMENSION, MIN_DIMENSION, ResizeParams};
pub use crate::core::processing::pipeline::AspectResizer;
pub use crate::core::processing::resample::resample;
pub use crate::core::processing::resize::compute_target_size;
pub use error::{Error, Result};
pub use types::{AlignMode, Dimensions, ImageBatch, InterpolationKernel, KernelOptions};

pub use api::{KernelCapabilities, ResizePlan, kernel_capabilities, plan_resize, resize_to_aspect};
pub use node::{HostNode, NodeSchema, ResizeToAspectNode, WidgetValues, node_registrations};
