//! Minimal-overlap 3D patch tiling for cryo-electron tomography volumes
//!
//! Volumes are split into fixed-size patches that cover every voxel with the
//! least, most evenly spread overlap, and can be stitched back together after
//! per-patch processing. Around that core sit the helpers a training and
//! inference workflow needs: typed configuration, explicit seeding,
//! checkpoint selection, particle tables and the copick project config.

/// Input/output, configuration and error handling
pub mod io;
/// Patch layout, extraction and reassembly
pub mod tiling;
/// Training and inference workflow helpers
pub mod training;

pub use io::error::{Result, TilingError};
pub use tiling::{
    Coordinate, TilingPlan, compute_axis_starts, extract_patch_views, extract_patches,
    reassemble_patches,
};
