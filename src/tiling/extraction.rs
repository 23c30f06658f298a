//! Patch extraction from batches of same-shaped volumes

use ndarray::{Array3, ArrayBase, ArrayView3, Data, Ix3, s};

use crate::io::error::{Result, TilingError};
use crate::tiling::plan::{Coordinate, TilingPlan};

/// Extract minimally overlapping patches from every volume
///
/// Volumes are visited in input order and, within a volume, patches follow
/// the plan's x, y, z nesting. `patches[i]` was taken at `coordinates[i]`.
/// Patches are owned copies, so the sources are left untouched by any later
/// mutation.
///
/// # Errors
///
/// Returns an error if `volumes` is empty, if the volumes differ in shape, or
/// if `patch_size` is zero or larger than the shape along any axis. All checks
/// run before any patch is copied.
pub fn extract_patches<S, T>(
    volumes: &[ArrayBase<S, Ix3>],
    patch_size: [usize; 3],
) -> Result<(Vec<Array3<T>>, Vec<Coordinate>)>
where
    S: Data<Elem = T>,
    T: Clone,
{
    let (views, coordinates) = extract_patch_views(volumes, patch_size)?;
    let patches = views.into_iter().map(|view| view.to_owned()).collect();
    Ok((patches, coordinates))
}

/// Borrowing variant of [`extract_patches`]
///
/// Returns read-only views into the source volumes instead of copies.
///
/// # Errors
///
/// Same conditions as [`extract_patches`]
pub fn extract_patch_views<S, T>(
    volumes: &[ArrayBase<S, Ix3>],
    patch_size: [usize; 3],
) -> Result<(Vec<ArrayView3<'_, T>>, Vec<Coordinate>)>
where
    S: Data<Elem = T>,
{
    let plan = plan_for_volumes(volumes, patch_size)?;
    let [px, py, pz] = patch_size;

    tracing::debug!(
        shape = ?plan.shape(),
        ?patch_size,
        volumes = volumes.len(),
        patches = volumes.len() * plan.patches_per_volume(),
        "extracting patches"
    );

    let capacity = volumes.len() * plan.patches_per_volume();
    let mut patches = Vec::with_capacity(capacity);
    let mut coordinates = Vec::with_capacity(capacity);

    for volume in volumes {
        for [x, y, z] in plan.coordinates() {
            patches.push(volume.slice(s![x..x + px, y..y + py, z..z + pz]));
            coordinates.push([x, y, z]);
        }
    }

    Ok((patches, coordinates))
}

/// Validate a volume batch and build its tiling plan
///
/// # Errors
///
/// Returns an error if `volumes` is empty, the shapes disagree, or the patch
/// size does not fit the shared shape
pub fn plan_for_volumes<S>(
    volumes: &[ArrayBase<S, Ix3>],
    patch_size: [usize; 3],
) -> Result<TilingPlan>
where
    S: Data,
{
    let first = volumes
        .first()
        .ok_or_else(|| TilingError::InvalidSourceData {
            reason: "Input must be a non-empty list of volumes".to_string(),
        })?;
    let expected = shape_of(first);

    for (index, volume) in volumes.iter().enumerate().skip(1) {
        let found = shape_of(volume);
        if found != expected {
            return Err(TilingError::ShapeMismatch {
                index,
                expected,
                found,
            });
        }
    }

    TilingPlan::new(expected, patch_size)
}

fn shape_of<S: Data>(volume: &ArrayBase<S, Ix3>) -> [usize; 3] {
    let (m, n, l) = volume.dim();
    [m, n, l]
}
