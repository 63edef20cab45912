//! Resize primitives: target-size arithmetic (`resize`), separable kernels
//! (`resample`), value normalization (`ops`) and the `AspectResizer` that
//! chains them (`pipeline`).
pub mod ops;
pub mod pipeline;
pub mod resample;
pub mod resize;
