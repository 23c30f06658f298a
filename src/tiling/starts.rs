//! Per-axis patch start offsets with minimal, evenly spread overlap
//!
//! For an axis of length `D` and a patch of length `P`, the fewest patches
//! that cover the axis is `n = ceil(D / P)`. The surplus `n * P - D` is
//! shared equally between the `n - 1` seams, so consecutive starts are
//! `(D - P) / (n - 1)` apart, floored. Offsets are evaluated in integer
//! arithmetic, which makes the last start land exactly on `D - P`.

use crate::io::error::{Result, invalid_parameter};

/// Compute the start offsets of patches covering one axis
///
/// Returns `[0]` when the patch is at least as long as the axis. The patch is
/// not resized in that case, so a patch longer than the axis overhangs it and
/// clipping is left to the caller's slicing. Otherwise the offsets are sorted,
/// unique, start at 0 and end at `axis_length - patch_length`.
///
/// # Errors
///
/// Returns an error if either length is zero
pub fn compute_axis_starts(axis_length: usize, patch_length: usize) -> Result<Vec<usize>> {
    validate_lengths(axis_length, patch_length)?;

    if axis_length <= patch_length {
        return Ok(vec![0]);
    }

    let patch_count = axis_length.div_ceil(patch_length);
    if patch_count == 1 {
        return Ok(vec![0]);
    }

    let last_start = axis_length - patch_length;
    let seams = patch_count - 1;

    let mut starts: Vec<usize> = Vec::with_capacity(patch_count);
    for i in 0..patch_count {
        // floor(i * (P - overlap)) with P - overlap == (D - P) / (n - 1);
        // the product can exceed usize, the quotient never exceeds D - P
        let start = (i as u128 * last_start as u128 / seams as u128) as usize;
        let start = start.min(last_start);
        if starts.last() != Some(&start) {
            starts.push(start);
        }
    }

    Ok(starts)
}

/// Overlap between neighbouring patches along one axis
///
/// This is the surplus `n * P - D` divided over the `n - 1` seams, which is
/// generally fractional. Zero when a single patch covers the axis.
///
/// # Errors
///
/// Returns an error if either length is zero
pub fn minimal_overlap(axis_length: usize, patch_length: usize) -> Result<f64> {
    validate_lengths(axis_length, patch_length)?;

    let patch_count = axis_length.div_ceil(patch_length);
    if axis_length <= patch_length || patch_count == 1 {
        return Ok(0.0);
    }

    // n * P - D without forming n * P
    let surplus = match axis_length % patch_length {
        0 => 0,
        remainder => patch_length - remainder,
    };
    Ok(surplus as f64 / (patch_count - 1) as f64)
}

fn validate_lengths(axis_length: usize, patch_length: usize) -> Result<()> {
    if axis_length == 0 {
        return Err(invalid_parameter(
            "axis_length",
            &axis_length,
            &"must be positive",
        ));
    }
    if patch_length == 0 {
        return Err(invalid_parameter(
            "patch_length",
            &patch_length,
            &"must be positive",
        ));
    }
    Ok(())
}
