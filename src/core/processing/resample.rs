//! Separable resampling of an image batch.
//!
//! Every kernel is reduced to a list of `(source index, weight)` taps per output index along
//! each spatial axis. Each image is filtered along its columns first and then along its rows.
//! Coordinate conventions follow the usual tensor-library interpolation semantics (half-pixel
//! centers unless align-corners is requested).

use ndarray::Array4;
use tracing::debug;

use crate::core::processing::ops::clamp_unit_inplace;
use crate::error::{Error, Result};
use crate::types::{ImageBatch, InterpolationKernel, KernelOptions};

/// Cubic coefficient used by the antialiased bicubic filter.
const AA_CUBIC_A: f64 = -0.5;
/// Cubic coefficient used by plain (non-antialiased) bicubic interpolation.
const CUBIC_A: f64 = -0.75;

/// Taps contributing to one output sample along one axis.
type Taps = Vec<(usize, f32)>;

/// Resample every image of `batch` to `target_width` x `target_height` and clamp to [0, 1].
///
/// Antialiasing and align-corners are resolved from the kernel's fixed capabilities
/// (see [`InterpolationKernel::options`]). The input batch is not modified.
pub fn resample(
    batch: &ImageBatch,
    target_width: usize,
    target_height: usize,
    kernel: InterpolationKernel,
) -> Result<ImageBatch> {
    resample_with_options(batch, target_width, target_height, kernel, kernel.options())
}

pub(crate) fn resample_with_options(
    batch: &ImageBatch,
    target_width: usize,
    target_height: usize,
    kernel: InterpolationKernel,
    options: KernelOptions,
) -> Result<ImageBatch> {
    let mut out = resample_unclamped(batch, target_width, target_height, kernel, options)?;
    clamp_unit_inplace(&mut out);
    Ok(out)
}

fn resample_unclamped(
    batch: &ImageBatch,
    target_width: usize,
    target_height: usize,
    kernel: InterpolationKernel,
    options: KernelOptions,
) -> Result<ImageBatch> {
    if target_width == 0 {
        return Err(Error::invalid_dimension("target_width", target_width));
    }
    if target_height == 0 {
        return Err(Error::invalid_dimension("target_height", target_height));
    }

    let (count, in_h, in_w, channels) = batch.dim();
    if in_h == 0 {
        return Err(Error::invalid_dimension("image_height", in_h));
    }
    if in_w == 0 {
        return Err(Error::invalid_dimension("image_width", in_w));
    }

    debug!(
        "Resampling {} image(s) {}x{}x{} -> {}x{} with {} (antialias={}, align_corners={:?})",
        count,
        in_w,
        in_h,
        channels,
        target_width,
        target_height,
        kernel,
        options.antialias,
        options.align_corners
    );

    let col_taps = axis_taps(kernel, options, in_w, target_width);
    let row_taps = axis_taps(kernel, options, in_h, target_height);

    let src = batch.as_standard_layout();
    let src_data = src.as_slice().ok_or_else(|| Error::ShapeMismatch {
        expected: "contiguous image batch".to_string(),
        actual: format!("{:?}", batch.shape()),
    })?;

    let in_len = in_h * in_w * channels;
    let out_len = target_height * target_width * channels;
    let mut out_data = vec![0.0f32; count * out_len];

    if in_len > 0 && out_len > 0 {
        for (src_image, dst_image) in src_data
            .chunks_exact(in_len)
            .zip(out_data.chunks_exact_mut(out_len))
        {
            resample_image(src_image, dst_image, in_h, in_w, channels, &row_taps, &col_taps);
        }
    }

    Array4::from_shape_vec((count, target_height, target_width, channels), out_data).map_err(
        |e| Error::ShapeMismatch {
            expected: format!(
                "({}, {}, {}, {})",
                count, target_height, target_width, channels
            ),
            actual: e.to_string(),
        },
    )
}

/// Filter one (height, width, channel) image: columns first, then rows.
fn resample_image(
    src: &[f32],
    dst: &mut [f32],
    in_h: usize,
    in_w: usize,
    channels: usize,
    row_taps: &[Taps],
    col_taps: &[Taps],
) {
    let out_w = col_taps.len();
    let src_stride = in_w * channels;
    let tmp_stride = out_w * channels;

    let mut tmp = vec![0.0f32; in_h * tmp_stride];
    for (src_row, tmp_row) in src
        .chunks_exact(src_stride)
        .zip(tmp.chunks_exact_mut(tmp_stride))
    {
        for (dst_px, taps) in tmp_row.chunks_exact_mut(channels).zip(col_taps) {
            for &(sx, w) in taps {
                let src_px = &src_row[sx * channels..(sx + 1) * channels];
                for (d, s) in dst_px.iter_mut().zip(src_px) {
                    *d += w * s;
                }
            }
        }
    }

    for (dst_row, taps) in dst.chunks_exact_mut(tmp_stride).zip(row_taps) {
        for &(sy, w) in taps {
            let tmp_row = &tmp[sy * tmp_stride..(sy + 1) * tmp_stride];
            for (d, s) in dst_row.iter_mut().zip(tmp_row) {
                *d += w * s;
            }
        }
    }
}

/// Build the taps for every output index along one axis.
fn axis_taps(
    kernel: InterpolationKernel,
    options: KernelOptions,
    in_size: usize,
    out_size: usize,
) -> Vec<Taps> {
    let align_corners = options.align_corners.unwrap_or(false);
    (0..out_size)
        .map(|i| match kernel {
            InterpolationKernel::Nearest => vec![(nearest_index(i, in_size, out_size, false), 1.0)],
            InterpolationKernel::NearestExact => {
                vec![(nearest_index(i, in_size, out_size, true), 1.0)]
            }
            InterpolationKernel::Area => area_taps(i, in_size, out_size),
            InterpolationKernel::Linear | InterpolationKernel::Trilinear => {
                linear_taps(i, in_size, out_size, align_corners)
            }
            InterpolationKernel::Bilinear if options.antialias => {
                antialiased_taps(i, in_size, out_size, align_corners, 1.0, triangle)
            }
            InterpolationKernel::Bilinear => linear_taps(i, in_size, out_size, align_corners),
            InterpolationKernel::Bicubic if options.antialias => {
                antialiased_taps(i, in_size, out_size, align_corners, 2.0, aa_cubic)
            }
            InterpolationKernel::Bicubic => cubic_taps(i, in_size, out_size, align_corners),
        })
        .collect()
}

/// Input-per-output scale, as used for source coordinate mapping.
fn area_pixel_scale(in_size: usize, out_size: usize, align_corners: bool) -> f64 {
    if align_corners {
        if out_size > 1 {
            (in_size as f64 - 1.0) / (out_size as f64 - 1.0)
        } else {
            0.0
        }
    } else {
        in_size as f64 / out_size as f64
    }
}

/// Map an output index to a fractional source coordinate.
/// Half-pixel mapping can go negative; linear callers clamp, cubic callers do not.
fn source_coordinate(i: usize, scale: f64, align_corners: bool) -> f64 {
    if align_corners {
        scale * i as f64
    } else {
        scale * (i as f64 + 0.5) - 0.5
    }
}

fn nearest_index(i: usize, in_size: usize, out_size: usize, exact: bool) -> usize {
    let scale = in_size as f64 / out_size as f64;
    let offset = if exact { 0.5 } else { 0.0 };
    let src = ((i as f64 + offset) * scale).floor() as usize;
    src.min(in_size - 1)
}

/// Adaptive average pooling window.
fn area_taps(i: usize, in_size: usize, out_size: usize) -> Taps {
    let start = (i * in_size) / out_size;
    let end = ((i + 1) * in_size).div_ceil(out_size);
    let weight = 1.0 / (end - start) as f32;
    (start..end).map(|s| (s, weight)).collect()
}

fn linear_taps(i: usize, in_size: usize, out_size: usize, align_corners: bool) -> Taps {
    let scale = area_pixel_scale(in_size, out_size, align_corners);
    let src = source_coordinate(i, scale, align_corners).max(0.0);
    let i0 = (src as usize).min(in_size - 1);
    let i1 = if i0 < in_size - 1 { i0 + 1 } else { i0 };
    let lambda1 = (src - i0 as f64).min(1.0);
    let lambda0 = 1.0 - lambda1;
    vec![(i0, lambda0 as f32), (i1, lambda1 as f32)]
}

fn cubic_taps(i: usize, in_size: usize, out_size: usize, align_corners: bool) -> Taps {
    let scale = area_pixel_scale(in_size, out_size, align_corners);
    let src = source_coordinate(i, scale, align_corners);
    let base = src.floor();
    let t = src - base;
    let coeffs = [
        cubic_outer(t + 1.0, CUBIC_A),
        cubic_inner(t, CUBIC_A),
        cubic_inner(1.0 - t, CUBIC_A),
        cubic_outer(2.0 - t, CUBIC_A),
    ];
    let last = in_size as i64 - 1;
    coeffs
        .iter()
        .enumerate()
        .map(|(k, &c)| {
            let idx = (base as i64 - 1 + k as i64).clamp(0, last) as usize;
            (idx, c as f32)
        })
        .collect()
}

/// Separable filter whose support grows with the downscale factor, weights normalized.
fn antialiased_taps(
    i: usize,
    in_size: usize,
    out_size: usize,
    align_corners: bool,
    radius: f64,
    filter: fn(f64) -> f64,
) -> Taps {
    let scale = area_pixel_scale(in_size, out_size, align_corners);
    let (support, inv_scale) = if scale >= 1.0 {
        (radius * scale, 1.0 / scale)
    } else {
        (radius, 1.0)
    };
    let center = scale * (i as f64 + 0.5);

    // Truncating casts mirror the reference window bounds
    let xmin = ((center - support + 0.5) as i64).max(0) as usize;
    let xmax = ((center + support + 0.5) as i64).clamp(0, in_size as i64) as usize;
    if xmax <= xmin {
        return vec![(xmin.min(in_size - 1), 1.0)];
    }

    let weights: Vec<f64> = (xmin..xmax)
        .map(|j| filter((j as f64 - center + 0.5) * inv_scale))
        .collect();
    let total: f64 = weights.iter().sum();
    let norm = if total != 0.0 { 1.0 / total } else { 1.0 };

    (xmin..xmax)
        .zip(weights)
        .map(|(j, w)| (j, (w * norm) as f32))
        .collect()
}

fn triangle(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 1.0 { 1.0 - ax } else { 0.0 }
}

fn aa_cubic(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 1.0 {
        cubic_inner(ax, AA_CUBIC_A)
    } else if ax < 2.0 {
        cubic_outer(ax, AA_CUBIC_A)
    } else {
        0.0
    }
}

/// Cubic convolution for |x| <= 1.
fn cubic_inner(x: f64, a: f64) -> f64 {
    ((a + 2.0) * x - (a + 3.0)) * x * x + 1.0
}

/// Cubic convolution for 1 < |x| < 2.
fn cubic_outer(x: f64, a: f64) -> f64 {
    ((a * x - 5.0 * a) * x + 8.0 * a) * x - 4.0 * a
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array4, s};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    /// Single-row, single-channel batch from a list of column values.
    fn row_batch(values: &[f32], rows: usize) -> ImageBatch {
        Array4::from_shape_fn((1, rows, values.len(), 1), |(_, _, x, _)| values[x])
    }

    #[test]
    fn test_constant_image_preserved_by_all_kernels() {
        let batch = Array4::from_elem((2, 9, 13, 3), 0.4f32);
        for kernel in InterpolationKernel::ALL {
            for (w, h) in [(5, 4), (13, 9), (31, 20)] {
                let out = resample(&batch, w, h, kernel).unwrap();
                assert_eq!(out.dim(), (2, h, w, 3));
                assert!(
                    out.iter().all(|&v| approx(v, 0.4)),
                    "{kernel} {w}x{h} did not preserve a constant image"
                );
            }
        }
    }

    #[test]
    fn test_same_size_is_identity() {
        let batch = Array4::from_shape_fn((1, 6, 7, 2), |(_, y, x, c)| {
            ((y * 7 + x) * 2 + c) as f32 / 84.0
        });
        for kernel in InterpolationKernel::ALL {
            let out = resample(&batch, 7, 6, kernel).unwrap();
            for (a, b) in out.iter().zip(batch.iter()) {
                assert!(approx(*a, *b), "{kernel} changed pixels at identity size");
            }
        }
    }

    #[test]
    fn test_nearest_keeps_hard_edges_where_antialias_blurs() {
        // Bright column every fourth pixel, downscaled by 4
        let values: Vec<f32> = (0..16).map(|x| if x % 4 == 0 { 1.0 } else { 0.0 }).collect();
        let batch = row_batch(&values, 2);

        let nearest = resample(&batch, 4, 2, InterpolationKernel::Nearest).unwrap();
        assert!(nearest.iter().all(|&v| v == 1.0));

        let bilinear = resample(&batch, 4, 2, InterpolationKernel::Bilinear).unwrap();
        assert!(bilinear.iter().all(|&v| v > 0.1 && v < 0.5));
        assert!(approx(bilinear[[0, 0, 1, 0]], 0.25));

        // Same kernel with antialiasing forced off samples between the bright columns
        let forced = KernelOptions {
            antialias: false,
            align_corners: Some(false),
        };
        let plain =
            resample_with_options(&batch, 4, 2, InterpolationKernel::Bilinear, forced).unwrap();
        assert!(plain.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_nearest_exact_offsets_by_half_pixel() {
        let batch = row_batch(&[0.0, 0.5, 1.0], 1);
        let nearest = resample(&batch, 2, 1, InterpolationKernel::Nearest).unwrap();
        let exact = resample(&batch, 2, 1, InterpolationKernel::NearestExact).unwrap();
        assert_eq!(nearest.slice(s![0, 0, .., 0]).to_vec(), vec![0.0, 0.5]);
        assert_eq!(exact.slice(s![0, 0, .., 0]).to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_area_averages_blocks() {
        let batch = Array4::from_shape_vec(
            (1, 4, 4, 1),
            vec![
                0.0, 0.2, 1.0, 1.0, //
                0.2, 0.2, 1.0, 1.0, //
                0.4, 0.4, 0.0, 0.0, //
                0.4, 0.4, 0.0, 0.8, //
            ],
        )
        .unwrap();
        let out = resample(&batch, 2, 2, InterpolationKernel::Area).unwrap();
        assert!(approx(out[[0, 0, 0, 0]], 0.15));
        assert!(approx(out[[0, 0, 1, 0]], 1.0));
        assert!(approx(out[[0, 1, 0, 0]], 0.4));
        assert!(approx(out[[0, 1, 1, 0]], 0.2));
    }

    #[test]
    fn test_linear_half_pixel_upscale() {
        let batch = row_batch(&[0.0, 1.0], 1);
        let out = resample(&batch, 4, 1, InterpolationKernel::Linear).unwrap();
        // Sources at -0.25 (clamped), 0.25, 0.75, 1.25 (clamped to last)
        let row = out.slice(s![0, 0, .., 0]).to_vec();
        let expected = [0.0, 0.25, 0.75, 1.0];
        for (a, b) in row.iter().zip(expected) {
            assert!(approx(*a, b), "{row:?}");
        }
    }

    #[test]
    fn test_align_corners_mapping() {
        let batch = row_batch(&[0.0, 0.5, 1.0], 1);
        let forced = KernelOptions {
            antialias: false,
            align_corners: Some(true),
        };
        let out = resample_with_options(&batch, 5, 1, InterpolationKernel::Linear, forced).unwrap();
        let row = out.slice(s![0, 0, .., 0]).to_vec();
        let expected = [0.0, 0.25, 0.5, 0.75, 1.0];
        for (a, b) in row.iter().zip(expected) {
            assert!(approx(*a, b), "{row:?}");
        }
    }

    #[test]
    fn test_bicubic_overshoot_is_clamped() {
        let values = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
        let batch = row_batch(&values, 8);
        let options = InterpolationKernel::Bicubic.options();

        let raw =
            resample_unclamped(&batch, 32, 32, InterpolationKernel::Bicubic, options).unwrap();
        let max = raw.iter().cloned().fold(f32::MIN, f32::max);
        let min = raw.iter().cloned().fold(f32::MAX, f32::min);
        assert!(max > 1.0 || min < 0.0, "expected ringing, got [{min}, {max}]");

        let out = resample(&batch, 32, 32, InterpolationKernel::Bicubic).unwrap();
        assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_plain_bicubic_preserves_constant() {
        let batch = Array4::from_elem((1, 5, 5, 2), 0.7f32);
        let forced = KernelOptions {
            antialias: false,
            align_corners: Some(false),
        };
        let out =
            resample_with_options(&batch, 11, 3, InterpolationKernel::Bicubic, forced).unwrap();
        assert_eq!(out.dim(), (1, 3, 11, 2));
        assert!(out.iter().all(|&v| approx(v, 0.7)));
    }

    #[test]
    fn test_unclamped_inputs_are_normalized() {
        let batch = Array4::from_shape_fn((1, 4, 4, 1), |(_, y, x, _)| (x as f32 - y as f32) * 2.0);
        for kernel in InterpolationKernel::ALL {
            let out = resample(&batch, 3, 5, kernel).unwrap();
            assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)), "{kernel}");
        }
    }

    #[test]
    fn test_input_left_unmodified() {
        let batch = Array4::from_shape_fn((2, 5, 5, 3), |(n, y, x, c)| {
            (n + y + x + c) as f32 / 14.0
        });
        let before = batch.clone();
        let _ = resample(&batch, 2, 3, InterpolationKernel::Bicubic).unwrap();
        assert_eq!(batch, before);
    }

    #[test]
    fn test_non_standard_layout_input() {
        // Build (1, 3, 4, 1) through a transposed view so the data is not contiguous
        let base = Array4::from_shape_fn((1, 4, 3, 1), |(_, x, y, _)| (y * 4 + x) as f32 / 11.0);
        let view = base.view().permuted_axes([0, 2, 1, 3]);
        let batch = view.to_owned();
        let out_owned = resample(&batch, 4, 3, InterpolationKernel::Nearest).unwrap();
        let transposed = base.permuted_axes([0, 2, 1, 3]);
        let out_view = resample(&transposed, 4, 3, InterpolationKernel::Nearest).unwrap();
        assert_eq!(out_owned, out_view);
        assert_eq!(out_view, batch);
    }

    #[test]
    fn test_empty_batch_and_zero_channels() {
        let empty = Array4::<f32>::zeros((0, 4, 4, 3));
        let out = resample(&empty, 2, 2, InterpolationKernel::Area).unwrap();
        assert_eq!(out.dim(), (0, 2, 2, 3));

        let no_channels = Array4::<f32>::zeros((2, 4, 4, 0));
        let out = resample(&no_channels, 8, 8, InterpolationKernel::Bilinear).unwrap();
        assert_eq!(out.dim(), (2, 8, 8, 0));
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let batch = Array4::<f32>::zeros((1, 4, 4, 1));
        assert!(matches!(
            resample(&batch, 0, 4, InterpolationKernel::Nearest),
            Err(Error::InvalidDimension {
                name: "target_width",
                ..
            })
        ));
        assert!(matches!(
            resample(&batch, 4, 0, InterpolationKernel::Nearest),
            Err(Error::InvalidDimension {
                name: "target_height",
                ..
            })
        ));

        let flat = Array4::<f32>::zeros((1, 0, 4, 1));
        assert!(matches!(
            resample(&flat, 4, 4, InterpolationKernel::Nearest),
            Err(Error::InvalidDimension {
                name: "image_height",
                ..
            })
        ));
    }
}
