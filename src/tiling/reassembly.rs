//! Write patches back into a full-size volume

use ndarray::{Array3, ArrayBase, Data, Ix3, s};
use num_traits::Zero;

use crate::io::error::{Result, invalid_parameter};
use crate::tiling::plan::Coordinate;

/// Place each patch at its coordinate in a zero-filled volume of `shape`
///
/// Patches are written in order and later patches overwrite earlier ones
/// where they overlap. Fed the output of
/// [`extract_patches`](crate::tiling::extraction::extract_patches) for a
/// single volume, this rebuilds that volume exactly.
///
/// # Errors
///
/// Returns an error if the patch and coordinate counts differ, or if a patch
/// placed at its coordinate would extend past `shape`
pub fn reassemble_patches<S, T>(
    patches: &[ArrayBase<S, Ix3>],
    coordinates: &[Coordinate],
    shape: [usize; 3],
) -> Result<Array3<T>>
where
    S: Data<Elem = T>,
    T: Clone + Zero,
{
    if patches.len() != coordinates.len() {
        return Err(invalid_parameter(
            "coordinates",
            &coordinates.len(),
            &format!("expected one coordinate per patch ({})", patches.len()),
        ));
    }

    let mut volume = Array3::zeros((shape[0], shape[1], shape[2]));

    for (patch, &[x, y, z]) in patches.iter().zip(coordinates) {
        let (px, py, pz) = patch.dim();
        let fits = x + px <= shape[0] && y + py <= shape[1] && z + pz <= shape[2];
        if !fits {
            return Err(invalid_parameter(
                "coordinates",
                &format!("{:?}", [x, y, z]),
                &format!("patch of size {px}x{py}x{pz} extends past volume shape {shape:?}"),
            ));
        }

        volume
            .slice_mut(s![x..x + px, y..y + py, z..z + pz])
            .assign(patch);
    }

    Ok(volume)
}
