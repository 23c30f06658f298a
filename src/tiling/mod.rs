//! Minimal-overlap 3D patch tiling
//!
//! Volumes are cut into fixed-size patches placed so that every voxel is
//! covered while the overlap between neighbours stays as small and as even
//! as possible.

/// Patch extraction from batches of volumes
pub mod extraction;
/// Validated per-axis patch layout
pub mod plan;
/// Writing patches back into a full volume
pub mod reassembly;
/// Per-axis start offset computation
pub mod starts;

pub use extraction::{extract_patch_views, extract_patches};
pub use plan::{Coordinate, TilingPlan};
pub use reassembly::reassemble_patches;
pub use starts::compute_axis_starts;
