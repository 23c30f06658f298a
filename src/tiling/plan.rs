//! Validated patch layout for a volume shape
//!
//! A plan combines the three per-axis start sets and enumerates patch
//! coordinates in the fixed x, y, z nesting order used by extraction.

use crate::io::error::{Result, invalid_parameter};
use crate::tiling::starts::{compute_axis_starts, minimal_overlap};

/// Start offset `(x, y, z)` of a patch within its source volume
pub type Coordinate = [usize; 3];

const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];

/// Patch start offsets for every axis of a volume shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilingPlan {
    shape: [usize; 3],
    patch_size: [usize; 3],
    starts: [Vec<usize>; 3],
}

impl TilingPlan {
    /// Build the plan for a volume shape and patch size
    ///
    /// # Errors
    ///
    /// Returns an error if any patch dimension is zero or exceeds the
    /// corresponding volume dimension
    pub fn new(shape: [usize; 3], patch_size: [usize; 3]) -> Result<Self> {
        for ((&extent, &patch), axis) in shape.iter().zip(&patch_size).zip(AXIS_NAMES) {
            if patch == 0 {
                return Err(invalid_parameter(
                    "patch_size",
                    &format!("{patch_size:?}"),
                    &format!("patch size along {axis} must be positive"),
                ));
            }
            if patch > extent {
                return Err(invalid_parameter(
                    "patch_size",
                    &format!("{patch_size:?}"),
                    &format!("patch size cannot exceed volume shape {shape:?} along {axis}"),
                ));
            }
        }

        let starts = [
            compute_axis_starts(shape[0], patch_size[0])?,
            compute_axis_starts(shape[1], patch_size[1])?,
            compute_axis_starts(shape[2], patch_size[2])?,
        ];

        Ok(Self {
            shape,
            patch_size,
            starts,
        })
    }

    /// Volume shape the plan was built for
    pub const fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Patch size the plan was built for
    pub const fn patch_size(&self) -> [usize; 3] {
        self.patch_size
    }

    /// Start offsets along one axis (0 = x, 1 = y, 2 = z)
    pub fn axis_starts(&self, axis: usize) -> &[usize] {
        self.starts.get(axis).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of patches taken from each volume
    pub fn patches_per_volume(&self) -> usize {
        self.starts.iter().map(Vec::len).product()
    }

    /// Overlap between neighbouring patches along each axis
    ///
    /// # Errors
    ///
    /// Returns an error if the plan holds a zero length, which `new` rules out
    pub fn overlap(&self) -> Result<[f64; 3]> {
        Ok([
            minimal_overlap(self.shape[0], self.patch_size[0])?,
            minimal_overlap(self.shape[1], self.patch_size[1])?,
            minimal_overlap(self.shape[2], self.patch_size[2])?,
        ])
    }

    /// Patch coordinates, x outermost and z innermost
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let [xs, ys, zs] = &self.starts;
        xs.iter().flat_map(move |&x| {
            ys.iter()
                .flat_map(move |&y| zs.iter().map(move |&z| [x, y, z]))
        })
    }
}
