//! Workflow constants and configuration defaults

/// Fixed seed for reproducible runs
pub const DEFAULT_SEED: u64 = 42;

/// Configuration file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

// Depth covers the full tomogram, in-plane patches tile it
/// Default patch size (x, y, z) in voxels
pub const DEFAULT_PATCH_SIZE: [usize; 3] = [184, 96, 96];

/// Default tomogram shape (x, y, z) in voxels
pub const DEFAULT_VOLUME_SHAPE: [usize; 3] = [184, 630, 630];

/// Where the copick project config is written by default
pub const DEFAULT_COPICK_CONFIG_PATH: &str = "copick.config";

/// Separator between a key path and its value in a command-line override
pub const OVERRIDE_SEPARATOR: char = '=';

/// Separator between nested keys in an override key path
pub const KEY_PATH_SEPARATOR: char = '.';

/// Header row of exported particle tables
pub const PARTICLE_CSV_HEADER: &str = "experiment,particle_type,x,y,z";
