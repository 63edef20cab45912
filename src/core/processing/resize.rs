use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{AlignMode, Dimensions};

/// Relative tolerance before a declared/actual aspect ratio mismatch is reported.
const ASPECT_MISMATCH_TOLERANCE: f64 = 0.01;

/// Compute the target size for a declared original size.
///
/// Width >= height counts as landscape (squares included). The pinned side is set to
/// `target_resolution`; the other side is scaled by the aspect ratio and truncated toward
/// zero, then both sides are floored at 1.
///
/// Returns [`Error::InvalidDimension`] if any input is zero.
pub fn compute_target_size(
    original_width: usize,
    original_height: usize,
    target_resolution: usize,
    align_mode: AlignMode,
) -> Result<Dimensions> {
    if original_width == 0 {
        return Err(Error::invalid_dimension("original_width", original_width));
    }
    if original_height == 0 {
        return Err(Error::invalid_dimension("original_height", original_height));
    }
    if target_resolution == 0 {
        return Err(Error::invalid_dimension(
            "target_resolution",
            target_resolution,
        ));
    }

    let aspect_ratio = original_width as f64 / original_height as f64;
    let is_landscape = original_width >= original_height;
    let target = target_resolution as f64;

    // `as usize` truncates toward zero (and saturates), matching an integer cast
    let (new_width, new_height) = match (is_landscape, align_mode) {
        (true, AlignMode::AlignLonger) => (target_resolution, (target / aspect_ratio) as usize),
        (true, AlignMode::AlignShorter) => ((target * aspect_ratio) as usize, target_resolution),
        (false, AlignMode::AlignLonger) => ((target * aspect_ratio) as usize, target_resolution),
        (false, AlignMode::AlignShorter) => (target_resolution, (target / aspect_ratio) as usize),
    };

    let dims = Dimensions::new(new_width.max(1), new_height.max(1));
    debug!(
        "Target size for {}x{} ({}, {}): {}",
        original_width, original_height, align_mode, target_resolution, dims
    );
    Ok(dims)
}

/// Warn when the declared original size does not describe the actual image.
///
/// The declared size still wins; this only surfaces likely wiring mistakes in the host graph.
/// Returns `true` if a mismatch was reported.
pub fn check_declared_aspect(declared: Dimensions, actual_cols: usize, actual_rows: usize) -> bool {
    if declared.width == 0 || declared.height == 0 || actual_cols == 0 || actual_rows == 0 {
        return false;
    }
    let declared_ratio = declared.width as f64 / declared.height as f64;
    let actual_ratio = actual_cols as f64 / actual_rows as f64;
    let deviation = (declared_ratio / actual_ratio - 1.0).abs();
    if deviation > ASPECT_MISMATCH_TOLERANCE {
        warn!(
            "Declared original size {} (ratio {:.4}) differs from image size {}x{} (ratio {:.4}); using declared ratio",
            declared, declared_ratio, actual_cols, actual_rows, actual_ratio
        );
        true
    } else {
        false
    }
}
