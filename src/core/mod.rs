//! Core building blocks: resize parameters and the processing primitives
//! (target-size computation, resampling, clamping) consumed by the
//! high-level `api` module and the host `node` adapter.
pub mod params;
pub mod processing;
