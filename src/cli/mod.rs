//! Command Line Interface (CLI) layer for aspect-resize.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that layers command-line flags over
//! an optional JSON preset and reports the resulting resize plan.
//!
//! If you are embedding aspect-resize into another application, prefer the
//! high-level `aspect_resize::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
