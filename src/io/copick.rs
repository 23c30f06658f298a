//! Copick project configuration for the 2024 CZII CryoET challenge data

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, TilingError, file_system_error};

/// A particle species that can be picked in a tomogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickableObject {
    /// Species name
    pub name: String,
    /// Whether the object is a particle (as opposed to a segmentation)
    pub is_particle: bool,
    /// Protein Data Bank identifier
    pub pdb_id: String,
    /// Segmentation label value
    pub label: u8,
    /// Display colour as RGBA
    pub color: [u8; 4],
    /// Particle radius in angstroms
    pub radius: f64,
    /// Density threshold for the reference map
    pub map_threshold: f64,
}

// Name, PDB id, RGBA colour, radius, map threshold; labels follow list order
const CHALLENGE_PARTICLES: [(&str, &str, [u8; 4], f64, f64); 6] = [
    ("apo-ferritin", "4V1W", [0, 117, 220, 128], 60.0, 0.0418),
    ("beta-amylase", "1FA2", [153, 63, 0, 128], 65.0, 0.035),
    ("beta-galactosidase", "6X1Q", [76, 0, 92, 128], 90.0, 0.0578),
    ("ribosome", "6EK0", [0, 92, 49, 128], 150.0, 0.0374),
    ("thyroglobulin", "6SCJ", [43, 206, 72, 128], 130.0, 0.0278),
    ("virus-like-particle", "6N4V", [255, 204, 153, 128], 135.0, 0.201),
];

/// Filesystem options for the overlay root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayFsArgs {
    /// Create missing overlay directories on write
    pub auto_mkdir: bool,
}

/// Copick project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopickConfig {
    /// Project name
    pub name: String,
    /// Project description
    pub description: String,
    /// Config format version
    pub version: String,
    /// Species that can be picked
    pub pickable_objects: Vec<PickableObject>,
    /// Writable root for picks and segmentations
    pub overlay_root: String,
    /// Options for the overlay filesystem
    pub overlay_fs_args: OverlayFsArgs,
    /// Read-only root holding the tomograms
    pub static_root: String,
}

impl Default for CopickConfig {
    fn default() -> Self {
        Self {
            name: "czii_cryoet_mlchallenge_2024".to_string(),
            description: "2024 CZII CryoET ML Challenge training data.".to_string(),
            version: "1.0.0".to_string(),
            pickable_objects: CHALLENGE_PARTICLES
                .iter()
                .zip(1..)
                .map(
                    |(&(name, pdb_id, color, radius, map_threshold), label)| PickableObject {
                        name: name.to_string(),
                        is_particle: true,
                        pdb_id: pdb_id.to_string(),
                        label,
                        color,
                        radius,
                        map_threshold,
                    },
                )
                .collect(),
            overlay_root: "./data/overlay".to_string(),
            overlay_fs_args: OverlayFsArgs { auto_mkdir: true },
            static_root: "./data/test/static".to_string(),
        }
    }
}

impl CopickConfig {
    /// Look up a pickable object by name
    pub fn object(&self, name: &str) -> Option<&PickableObject> {
        self.pickable_objects.iter().find(|object| object.name == name)
    }

    /// Write the configuration as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, the file
    /// cannot be written, or serialization fails
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(file_system_error(parent, "create directory"))?;
        }

        let file = File::create(path).map_err(file_system_error(path, "create"))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| {
            TilingError::Serialization {
                subject: "copick config",
                source,
            }
        })?;
        writer.flush().map_err(file_system_error(path, "write"))?;

        tracing::info!(path = %path.display(), "wrote copick config");
        Ok(())
    }

    /// Read a configuration previously written with [`Self::write_to`]
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(file_system_error(path, "read"))?;
        Ok(serde_json::from_str(&contents)?)
    }
}
